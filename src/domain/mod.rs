// Domain layer: core simulation types and rules.

pub mod arena;
pub mod counts;
pub mod errors;
pub mod particle;
pub mod ports;
pub mod store;
pub mod systems;
pub mod tuning;

pub use arena::Arena;
pub use counts::{Population, PopulationCounts};
pub use errors::CounterUnderflow;
pub use particle::{Particle, ParticleId, ParticleKind};
pub use ports::Renderer;
pub use store::EntityStore;
pub use tuning::ParticleTuning;
