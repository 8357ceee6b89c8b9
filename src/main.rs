#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use contactsection_core::{ContactConfig, ContactLinks, ParticleConfig, DEFAULT_BASE_URL};
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Global configuration, set from command line
static CONFIG: OnceLock<ContactConfig> = OnceLock::new();

/// Get the contact configuration (set from command line, else bundled default)
pub fn get_config() -> Option<ContactConfig> {
    CONFIG
        .get()
        .cloned()
        .or_else(|| ContactConfig::bundled().ok())
}

/// Contact Section - portfolio contact form
#[derive(Parser, Debug)]
#[command(name = "contactsection-desktop")]
#[command(about = "Contact form with a decorative particle field")]
struct Args {
    /// Origin of the site hosting /api/contact
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// JSON file with contact details (email, phone, address, map)
    #[arg(short, long)]
    links: Option<PathBuf>,

    /// Number of background particles
    #[arg(short, long, default_value_t = contactsection_core::DEFAULT_PARTICLE_COUNT)]
    particles: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let links = match &args.links {
        Some(path) => ContactLinks::load(path)
            .with_context(|| format!("failed to load link data from {:?}", path))?,
        None => ContactLinks::bundled().context("bundled link data is invalid")?,
    };
    let particles = ParticleConfig::default().with_count(args.particles);
    let config = ContactConfig::new(&args.base_url, links, particles)
        .with_context(|| format!("invalid base url {:?}", args.base_url))?;

    tracing::info!("Contact endpoint: {}", config.endpoint);
    let _ = CONFIG.set(config);

    let window_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Contact Me")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config)
        .launch(app::App);

    Ok(())
}
