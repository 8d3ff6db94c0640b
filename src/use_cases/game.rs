use super::simulation::Simulation;
use super::types::LoopSettings;
use crate::domain::{Population, Renderer};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::Notify;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Drives the fixed-step simulation loop until `shutdown` is notified.
///
/// An empty simulation is populated with the starting population first; a simulation
/// returned by an earlier run resumes where it stopped, including a winner still waiting
/// for its announcement. A declared winner is announced after `announce_delay` (ticks
/// keep running meanwhile), then the population is reset; the loop itself never
/// restarts. Tick, announcement and reset all run on this task, so they never overlap.
/// Returns the final state.
pub async fn simulation_task<D>(
    mut simulation: Simulation,
    mut renderer: D,
    settings: LoopSettings,
    shutdown: Arc<Notify>,
) -> Simulation
where
    D: Renderer,
{
    let mut rng = StdRng::from_entropy();
    if simulation.store().is_empty() {
        let population = Population::uniform(simulation.tuning().initial_count_per_type);
        simulation.populate(population, &mut renderer, &mut rng);
    }

    // Drive the fixed-step loop at the configured tick rate.
    let mut interval = tokio::time::interval(settings.tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // Deadline for the pending winner announcement, if any.
    let mut announce_at: Option<Instant> = simulation
        .pending_winner()
        .map(|_| Instant::now() + settings.announce_delay);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.notified() => {
                // Exit cleanly when the runtime shuts down.
                info!(ticks = simulation.ticks(), resets = simulation.resets(), "simulation stopped");
                break;
            }
            _ = tokio::time::sleep_until(announce_at.unwrap_or_else(Instant::now)), if announce_at.is_some() => {
                announce_at = None;
                if let Some(winner) = simulation.take_pending_winner() {
                    debug!(%winner, tick = simulation.ticks(), "announcing winner");
                    renderer.announce_winner(winner);
                }
                simulation.reset(&mut renderer, &mut rng);
            }
            _ = interval.tick() => {
                let report = simulation.tick(&mut renderer);
                if report.winner_declared.is_some() && announce_at.is_none() {
                    announce_at = Some(Instant::now() + settings.announce_delay);
                }
            }
        }
    }

    simulation
}
