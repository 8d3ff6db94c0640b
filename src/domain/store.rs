// Entity store: sole owner of particle lifetime.

use crate::domain::{Arena, Particle, ParticleId, ParticleKind, ParticleTuning, Population};
use rand::Rng;

/// Live particles in creation order.
///
/// Iteration order is stable between removals, which the pairwise collision scan relies on.
#[derive(Debug)]
pub struct EntityStore {
    particles: Vec<Particle>,
    next_id: u64,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            next_id: 1,
        }
    }

    /// Clears the store and spawns `population` with random positions and velocities.
    ///
    /// Kinds are interleaved one round at a time (stone, paper, scissors, stone, ...).
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        population: Population,
        tuning: &ParticleTuning,
        arena: Arena,
        rng: &mut R,
    ) {
        self.particles.clear();

        let rounds = ParticleKind::ALL
            .iter()
            .map(|kind| population.of(*kind))
            .max()
            .unwrap_or(0);

        for round in 0..rounds {
            for kind in ParticleKind::ALL {
                if round >= population.of(kind) {
                    continue;
                }
                let size = tuning.size_of(kind);
                let (max_x, max_y) = arena.spawn_extent(size);
                let x = rng.r#gen::<f32>() * max_x;
                let y = rng.r#gen::<f32>() * max_y;
                let dx = random_velocity(rng, tuning.max_speed);
                let dy = random_velocity(rng, tuning.max_speed);
                self.insert(kind, (x, y), (dx, dy), size);
            }
        }
    }

    /// Inserts a particle with explicit state and returns its id.
    pub fn spawn(
        &mut self,
        kind: ParticleKind,
        position: (f32, f32),
        velocity: (f32, f32),
        tuning: &ParticleTuning,
    ) -> ParticleId {
        self.insert(kind, position, velocity, tuning.size_of(kind))
    }

    /// Removes a particle by id. Absent ids are a no-op and return `None`.
    pub fn remove(&mut self, id: ParticleId) -> Option<Particle> {
        let index = self.particles.iter().position(|p| p.id == id)?;
        // `remove`, not `swap_remove`: enumeration order must survive removals.
        Some(self.particles.remove(index))
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        self.get(id).is_some()
    }

    pub fn all(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    pub fn count_of(&self, kind: ParticleKind) -> u32 {
        self.particles.iter().filter(|p| p.kind == kind).count() as u32
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Drains every live particle, returning them in creation order.
    pub fn clear(&mut self) -> Vec<Particle> {
        std::mem::take(&mut self.particles)
    }

    fn insert(
        &mut self,
        kind: ParticleKind,
        (x, y): (f32, f32),
        (dx, dy): (f32, f32),
        size: f32,
    ) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.particles.push(Particle {
            id,
            kind,
            x,
            y,
            dx,
            dy,
            size,
        });
        id
    }
}

// Uniform in [-max_speed, max_speed), kept to two decimal places.
fn random_velocity<R: Rng + ?Sized>(rng: &mut R, max_speed: f32) -> f32 {
    let v = (rng.r#gen::<f32>() * 2.0 - 1.0) * max_speed;
    (v * 100.0).round() / 100.0
}
