//! Property-based tests for the particle field and form state

use contactsection_core::{ContactForm, FormField, ParticleConfig, ParticleField};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    /// Mounting always yields exactly the configured number of particles,
    /// each inside the container and within the configured ranges.
    #[test]
    fn particles_respect_config(seed in any::<u64>(), count in 0usize..200) {
        let config = ParticleConfig::default().with_count(count);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::new();

        let particles = field.mount(&config, &mut rng);
        prop_assert_eq!(particles.len(), count);

        for p in particles {
            prop_assert!((0.0..100.0).contains(&p.left_pct));
            prop_assert!((0.0..100.0).contains(&p.top_pct));
            prop_assert!(config.size_px.contains(&p.size_px));
            prop_assert!(config.duration_secs.contains(&p.duration_secs));
            prop_assert!(config.palette.contains(&p.color));
        }
    }

    /// Any sequence of mounts followed by an unmount leaves no residue.
    #[test]
    fn unmount_removes_everything(seed in any::<u64>(), mounts in 1usize..5, count in 1usize..80) {
        let config = ParticleConfig::default().with_count(count);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::new();

        for _ in 0..mounts {
            field.mount(&config, &mut rng);
        }
        prop_assert_eq!(field.unmount(), count);
        prop_assert!(field.is_empty());
    }

    /// A form with every field non-empty can always start a submission,
    /// and the payload mirrors the fields exactly.
    #[test]
    fn filled_form_submits_its_fields(
        name in ".{1,40}",
        email in "[a-z]{1,10}@[a-z]{1,10}\\.com",
        message in ".{1,200}",
    ) {
        let mut form = ContactForm::new();
        form.update(FormField::Name, name.clone());
        form.update(FormField::Email, email.clone());
        form.update(FormField::Message, message.clone());

        let payload = form.begin_submit().unwrap();
        prop_assert_eq!(payload.name, name);
        prop_assert_eq!(payload.email, email);
        prop_assert_eq!(payload.message, message);
        prop_assert!(form.is_submitting());
    }
}
