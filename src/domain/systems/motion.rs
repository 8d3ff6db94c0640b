use crate::domain::{Arena, Particle};

/// Advances one particle by its velocity, then reflects on wall contact.
///
/// The bounce test runs against the already-updated position, so a particle may sit
/// past the wall for one tick before its velocity flips. No clamping is applied.
pub fn tick_particle(p: &mut Particle, arena: Arena) {
    // position integrate
    p.x += p.dx;
    p.y += p.dy;

    // reflect, each axis independently
    if p.x <= 0.0 || p.x + p.size >= arena.width {
        p.dx = -p.dx;
    }
    if p.y <= 0.0 || p.y + p.size >= arena.height {
        p.dy = -p.dy;
    }
}

pub fn integrate<'a>(particles: impl IntoIterator<Item = &'a mut Particle>, arena: Arena) {
    for p in particles {
        tick_particle(p, arena);
    }
}
