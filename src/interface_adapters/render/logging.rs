use crate::domain::{Arena, Particle, ParticleKind, PopulationCounts, Renderer};
use tracing::{debug, info, trace};

/// Headless renderer that reports arena events through `tracing`.
#[derive(Debug, Clone)]
pub struct TracingRenderer {
    arena: Arena,
}

impl TracingRenderer {
    pub fn new(arena: Arena) -> Self {
        Self { arena }
    }
}

impl Renderer for TracingRenderer {
    fn arena(&self) -> Arena {
        self.arena
    }

    fn particle_created(&mut self, particle: &Particle) {
        debug!(
            particle_id = %particle.id,
            kind = %particle.kind,
            x = particle.x,
            y = particle.y,
            "particle spawned"
        );
    }

    fn particle_moved(&mut self, particle: &Particle) {
        trace!(particle_id = %particle.id, x = particle.x, y = particle.y, "particle moved");
    }

    fn particle_removed(&mut self, particle: &Particle) {
        debug!(particle_id = %particle.id, kind = %particle.kind, "particle removed");
    }

    fn counts_changed(&mut self, counts: PopulationCounts) {
        debug!(
            stone = counts.stone,
            paper = counts.paper,
            scissors = counts.scissors,
            "counts"
        );
    }

    fn announce_winner(&mut self, winner: ParticleKind) {
        info!(%winner, "The winner is {winner}!");
    }
}
