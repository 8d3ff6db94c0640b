// Render event DTOs for external front-ends.
// One JSON object per event; front-ends key their visuals by particle id.

use crate::domain::{Particle, ParticleKind, PopulationCounts};
use serde::Serialize;

/// Events a front-end applies, in order, to mirror the arena.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum RenderEvent {
    // A particle entered the arena.
    Spawn(ParticleDto),
    // New position for an existing particle.
    Move(PositionDto),
    // A particle left the arena (eliminated or cleared by a reset).
    Remove { id: u64 },
    // Counter text for each kind.
    Counts(CountsDto),
    // Game over message; a reset follows.
    Winner(WinnerDto),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KindDto {
    Stone,
    Paper,
    Scissors,
}

impl From<ParticleKind> for KindDto {
    fn from(kind: ParticleKind) -> Self {
        match kind {
            ParticleKind::Stone => KindDto::Stone,
            ParticleKind::Paper => KindDto::Paper,
            ParticleKind::Scissors => KindDto::Scissors,
        }
    }
}

/// Everything needed to draw a new particle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleDto {
    pub id: u64,
    pub kind: KindDto,
    pub glyph: &'static str,
    pub class: &'static str,
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

impl From<&Particle> for ParticleDto {
    fn from(p: &Particle) -> Self {
        Self {
            id: p.id.0,
            kind: p.kind.into(),
            glyph: p.kind.glyph(),
            class: p.kind.class_name(),
            size: p.size,
            x: p.x,
            y: p.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionDto {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

impl From<&Particle> for PositionDto {
    fn from(p: &Particle) -> Self {
        Self {
            id: p.id.0,
            x: p.x,
            y: p.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountsDto {
    pub stone: u32,
    pub paper: u32,
    pub scissors: u32,
}

impl From<PopulationCounts> for CountsDto {
    fn from(counts: PopulationCounts) -> Self {
        Self {
            stone: counts.stone,
            paper: counts.paper,
            scissors: counts.scissors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinnerDto {
    pub winner: KindDto,
    pub message: String,
}

impl From<ParticleKind> for WinnerDto {
    fn from(kind: ParticleKind) -> Self {
        Self {
            winner: kind.into(),
            message: format!("The winner is {kind}!"),
        }
    }
}
