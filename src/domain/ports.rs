use crate::domain::{Arena, Particle, ParticleKind, PopulationCounts};

// Port for the display collaborator that draws the arena.
//
// Renderers map particle ids to their own visuals; the core never reads state back.
pub trait Renderer: Send {
    /// Arena dimensions, queried once when the simulation starts.
    fn arena(&self) -> Arena;

    fn particle_created(&mut self, particle: &Particle);
    fn particle_moved(&mut self, particle: &Particle);
    fn particle_removed(&mut self, particle: &Particle);

    fn counts_changed(&mut self, counts: PopulationCounts);

    /// Presents the winner. The core resets the population once this returns.
    fn announce_winner(&mut self, winner: ParticleKind);
}
