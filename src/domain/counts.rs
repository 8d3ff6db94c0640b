// Per-kind population bookkeeping.

use crate::domain::{CounterUnderflow, ParticleKind};

/// Requested number of particles per kind for a population setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Population {
    pub stone: u32,
    pub paper: u32,
    pub scissors: u32,
}

impl Population {
    pub fn uniform(count_per_type: u32) -> Self {
        Self {
            stone: count_per_type,
            paper: count_per_type,
            scissors: count_per_type,
        }
    }

    pub fn of(&self, kind: ParticleKind) -> u32 {
        match kind {
            ParticleKind::Stone => self.stone,
            ParticleKind::Paper => self.paper,
            ParticleKind::Scissors => self.scissors,
        }
    }
}

/// Live particle counts per kind. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulationCounts {
    pub stone: u32,
    pub paper: u32,
    pub scissors: u32,
}

impl PopulationCounts {
    pub fn get(&self, kind: ParticleKind) -> u32 {
        match kind {
            ParticleKind::Stone => self.stone,
            ParticleKind::Paper => self.paper,
            ParticleKind::Scissors => self.scissors,
        }
    }

    pub fn total(&self) -> u32 {
        self.stone + self.paper + self.scissors
    }

    /// Decrements the counter for `kind`, clamping at zero.
    ///
    /// Returns the new value, or `CounterUnderflow` if the counter was already zero.
    pub fn decrement(&mut self, kind: ParticleKind) -> Result<u32, CounterUnderflow> {
        let slot = self.slot_mut(kind);
        match slot.checked_sub(1) {
            Some(next) => {
                *slot = next;
                Ok(next)
            }
            None => Err(CounterUnderflow { kind }),
        }
    }

    fn slot_mut(&mut self, kind: ParticleKind) -> &mut u32 {
        match kind {
            ParticleKind::Stone => &mut self.stone,
            ParticleKind::Paper => &mut self.paper,
            ParticleKind::Scissors => &mut self.scissors,
        }
    }
}

impl From<Population> for PopulationCounts {
    fn from(p: Population) -> Self {
        Self {
            stone: p.stone,
            paper: p.paper,
            scissors: p.scissors,
        }
    }
}
