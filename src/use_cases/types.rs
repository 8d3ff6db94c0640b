// Use-case level inputs/outputs for the simulation loop.

use crate::domain::systems::win::WinRule;
use crate::domain::{ParticleKind, ParticleTuning};
use std::time::Duration;

/// Gameplay settings for one simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationSettings {
    pub tuning: ParticleTuning,
    pub win_rule: WinRule,
}

/// Timing for the loop driver.
#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    /// Fixed period between ticks.
    pub tick_interval: Duration,
    /// Pause between declaring a winner and announcing it, so the final state renders.
    pub announce_delay: Duration,
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub collisions: usize,
    pub eliminations: usize,
    /// Set only on the tick that first declared this winner.
    pub winner_declared: Option<ParticleKind>,
}
