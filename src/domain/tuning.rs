use crate::domain::ParticleKind;

/// Gameplay tuning for the particle population.
///
/// Keep this separate from runtime configuration (tick rates, channel sizes, etc.).
#[derive(Debug, Clone, Copy)]
pub struct ParticleTuning {
    /// Particles of each kind created on start and on every reset.
    pub initial_count_per_type: u32,

    /// Bounding-square edge length for stones, in pixels.
    pub stone_size: f32,

    /// Bounding-square edge length for paper and scissors, in pixels.
    pub other_size: f32,

    /// Velocity components are drawn from `[-max_speed, max_speed)` pixels per tick.
    pub max_speed: f32,
}

impl ParticleTuning {
    pub fn size_of(&self, kind: ParticleKind) -> f32 {
        match kind {
            ParticleKind::Stone => self.stone_size,
            ParticleKind::Paper | ParticleKind::Scissors => self.other_size,
        }
    }
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            initial_count_per_type: 33,
            stone_size: 10.0,
            other_size: 20.0,
            max_speed: 4.0,
        }
    }
}
