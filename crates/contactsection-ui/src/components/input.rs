//! Form Field Components
//!
//! Labelled inputs and textareas for the contact form.
//! Features:
//! - Translucent dark background with a neon border on focus
//! - `id`/`name` taken from the form field so labels associate correctly
//! - Native `required` so the webview blocks empty submissions

use contactsection_core::FormField;
use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Which contact field this input edits
    pub field: FormField,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Locks the input, e.g. while the form is being sent
    #[props(default = false)]
    pub disabled: bool,
}

/// Single-line text input with label
///
/// # Example
///
/// ```rust,ignore
/// let mut form = use_signal(ContactForm::new);
///
/// rsx! {
///     Input {
///         field: FormField::Email,
///         value: form.read().field(FormField::Email).to_string(),
///         oninput: move |s| form.write().update(FormField::Email, s),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let key = props.field.key();
    let label_text = props.field.label();
    let input_type = props.field.input_type();
    let placeholder = props.field.placeholder();

    rsx! {
        div { class: "form-group",
            label { r#for: "{key}", "{label_text}" }
            input {
                id: "{key}",
                name: "{key}",
                r#type: "{input_type}",
                value: "{props.value}",
                placeholder: "{placeholder}",
                required: true,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Which contact field this textarea edits
    pub field: FormField,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Number of visible rows
    #[props(default = 12)]
    pub rows: u32,
    /// Locks the textarea, e.g. while the form is being sent
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line text input with label
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let key = props.field.key();
    let label_text = props.field.label();
    let placeholder = props.field.placeholder();

    rsx! {
        div { class: "form-group",
            label { r#for: "{key}", "{label_text}" }
            textarea {
                id: "{key}",
                name: "{key}",
                rows: "{props.rows}",
                placeholder: "{placeholder}",
                required: true,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
