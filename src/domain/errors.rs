// Domain-level errors for the simulation core.

use crate::domain::ParticleKind;
use std::fmt;

/// A removal tried to decrement a population counter that was already zero.
///
/// The counter stays at zero; callers report this and keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterUnderflow {
    pub kind: ParticleKind,
}

impl fmt::Display for CounterUnderflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} counter decremented below zero", self.kind)
    }
}

impl std::error::Error for CounterUnderflow {}
