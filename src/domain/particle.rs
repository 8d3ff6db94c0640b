// Domain-level particle entity and its kind.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Stone,
    Paper,
    Scissors,
}

impl ParticleKind {
    /// Creation order for one round of population setup.
    pub const ALL: [ParticleKind; 3] = [Self::Stone, Self::Paper, Self::Scissors];

    /// Glyph a renderer should draw for this kind.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Stone => "🪨",
            Self::Paper => "📰",
            // Scissors render as a plain letter rather than the emoji.
            Self::Scissors => "X",
        }
    }

    /// Style class used by visual front-ends.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Stone => "stone",
            Self::Paper => "paper",
            Self::Scissors => "scissor",
        }
    }
}

impl fmt::Display for ParticleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stone => "Stone",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub kind: ParticleKind,

    // Top-left corner of the bounding square, in arena pixels.
    pub x: f32,
    pub y: f32,

    // Displacement per tick.
    pub dx: f32,
    pub dy: f32,

    // Edge length of the bounding square (diameter).
    pub size: f32,
}

impl Particle {
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    pub fn center(&self) -> (f32, f32) {
        let r = self.radius();
        (self.x + r, self.y + r)
    }
}
