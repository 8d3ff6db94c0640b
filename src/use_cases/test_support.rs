use std::sync::{Arc, Mutex};

use crate::domain::{Arena, Particle, ParticleId, ParticleKind, PopulationCounts, Renderer};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RecordedCall {
    Created(ParticleId, ParticleKind),
    Moved(ParticleId),
    Removed(ParticleId),
    Counts(PopulationCounts),
    Winner(ParticleKind),
}

// Renderer fake that records every call; clones share the same log.
#[derive(Clone)]
pub(crate) struct RecordingRenderer {
    arena: Arena,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingRenderer {
    pub(crate) fn new(arena: Arena) -> Self {
        Self {
            arena,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    pub(crate) fn created_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, RecordedCall::Created(..)))
            .count()
    }

    pub(crate) fn last_counts(&self) -> Option<PopulationCounts> {
        self.calls().iter().rev().find_map(|c| match c {
            RecordedCall::Counts(counts) => Some(*counts),
            _ => None,
        })
    }

    pub(crate) fn winners(&self) -> Vec<ParticleKind> {
        self.calls()
            .iter()
            .filter_map(|c| match c {
                RecordedCall::Winner(kind) => Some(*kind),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: RecordedCall) {
        let mut guard = self.calls.lock().expect("calls mutex poisoned");
        guard.push(call);
    }
}

impl Renderer for RecordingRenderer {
    fn arena(&self) -> Arena {
        self.arena
    }

    fn particle_created(&mut self, particle: &Particle) {
        self.record(RecordedCall::Created(particle.id, particle.kind));
    }

    fn particle_moved(&mut self, particle: &Particle) {
        self.record(RecordedCall::Moved(particle.id));
    }

    fn particle_removed(&mut self, particle: &Particle) {
        self.record(RecordedCall::Removed(particle.id));
    }

    fn counts_changed(&mut self, counts: PopulationCounts) {
        self.record(RecordedCall::Counts(counts));
    }

    fn announce_winner(&mut self, winner: ParticleKind) {
        self.record(RecordedCall::Winner(winner));
    }
}
