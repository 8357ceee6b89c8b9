//! Decorative particle field.
//!
//! The contact section scatters small glowing dots across its background.
//! Each dot gets a random position, size, colour and float duration when the
//! section mounts; all of them are removed again when it unmounts.

use std::ops::RangeInclusive;

use rand::seq::IndexedRandom;
use rand::Rng;

/// Number of particles mounted by default
pub const DEFAULT_PARTICLE_COUNT: usize = 50;

/// Neon cyan, violet and green
pub const DEFAULT_PALETTE: [&str; 3] = ["#00f5ff", "#b14aed", "#39ff14"];

/// Parameters for generating a particle field
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    /// Edge length in pixels
    pub size_px: RangeInclusive<f64>,
    /// One full float cycle, in seconds
    pub duration_secs: RangeInclusive<f64>,
    pub palette: Vec<String>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            size_px: 1.0..=6.0,
            duration_secs: 10.0..=30.0,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ParticleConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    fn pick_color<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.palette
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_PALETTE[0].to_string())
    }
}

/// A single decorative marker
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container width
    pub left_pct: f64,
    /// Vertical position, percent of the container height
    pub top_pct: f64,
    pub size_px: f64,
    pub color: String,
    pub duration_secs: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(config: &ParticleConfig, rng: &mut R) -> Self {
        Self {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            size_px: sample(rng, &config.size_px),
            color: config.pick_color(rng),
            duration_secs: sample(rng, &config.duration_secs),
        }
    }

    /// Inline CSS for the particle's node
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; background-color: {}; animation: float {:.2}s linear infinite;",
            self.left_pct, self.top_pct, self.size_px, self.size_px, self.color, self.duration_secs
        )
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<f64>) -> f64 {
    if range.is_empty() {
        *range.start()
    } else {
        rng.random_range(range.clone())
    }
}

/// The set of particles currently mounted in a container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate `config.count` particles, replacing any already mounted.
    pub fn mount<R: Rng + ?Sized>(&mut self, config: &ParticleConfig, rng: &mut R) -> &[Particle] {
        self.particles = (0..config.count)
            .map(|_| Particle::random(config, rng))
            .collect();
        tracing::debug!("Mounted {} particles", self.particles.len());
        &self.particles
    }

    /// Remove every mounted particle and return how many were removed.
    pub fn unmount(&mut self) -> usize {
        let removed = self.particles.len();
        self.particles.clear();
        tracing::debug!("Unmounted {} particles", removed);
        removed
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
