// Use cases layer: application workflows for the simulation.

pub mod game;
pub mod simulation;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use game::simulation_task;
pub use simulation::Simulation;
pub use types::{LoopSettings, SimulationSettings, TickReport};
