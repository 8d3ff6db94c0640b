// Shared fakes for integration tests.
use std::sync::{Arc, Mutex};

use rps_arena::domain::{Arena, Particle, ParticleKind, PopulationCounts, Renderer};

// Renderer that only remembers counter updates and announcements.
#[derive(Clone)]
pub struct CountingRenderer {
    arena: Arena,
    // Every counter update, in order.
    pub counts: Arc<Mutex<Vec<PopulationCounts>>>,
    // Every announced winner, in order.
    pub winners: Arc<Mutex<Vec<ParticleKind>>>,
}

impl CountingRenderer {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            counts: Arc::new(Mutex::new(Vec::new())),
            winners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn winners(&self) -> Vec<ParticleKind> {
        self.winners.lock().expect("winners mutex poisoned").clone()
    }

    pub fn counts(&self) -> Vec<PopulationCounts> {
        self.counts.lock().expect("counts mutex poisoned").clone()
    }
}

impl Renderer for CountingRenderer {
    fn arena(&self) -> Arena {
        self.arena
    }

    fn particle_created(&mut self, _particle: &Particle) {}

    fn particle_moved(&mut self, _particle: &Particle) {}

    fn particle_removed(&mut self, _particle: &Particle) {}

    fn counts_changed(&mut self, counts: PopulationCounts) {
        self.counts.lock().expect("counts mutex poisoned").push(counts);
    }

    fn announce_winner(&mut self, winner: ParticleKind) {
        self.winners.lock().expect("winners mutex poisoned").push(winner);
    }
}
