// Simulation state and the single-tick workflow.

use super::types::{SimulationSettings, TickReport};
use crate::domain::systems::win::{self, WinRule};
use crate::domain::systems::{collision, motion, resolution};
use crate::domain::{
    Arena, EntityStore, ParticleId, ParticleKind, ParticleTuning, Population, PopulationCounts,
    Renderer,
};
use rand::Rng;
use tracing::{debug, info, warn};

/// Everything one running arena owns. Held by the loop task, never shared.
#[derive(Debug)]
pub struct Simulation {
    arena: Arena,
    tuning: ParticleTuning,
    win_rule: WinRule,

    store: EntityStore,
    counts: PopulationCounts,

    // Winner waiting for its delayed announcement; blocks further declarations.
    pending_winner: Option<ParticleKind>,
    tick: u64,
    resets: u64,
}

impl Simulation {
    /// Creates an empty simulation. Call `reset` or `populate` to spawn particles.
    pub fn new(arena: Arena, settings: SimulationSettings) -> Self {
        Self {
            arena,
            tuning: settings.tuning,
            win_rule: settings.win_rule,
            store: EntityStore::new(),
            counts: PopulationCounts::default(),
            pending_winner: None,
            tick: 0,
            resets: 0,
        }
    }

    /// Clears the arena and spawns `population` at random.
    pub fn populate<D, R>(&mut self, population: Population, renderer: &mut D, rng: &mut R)
    where
        D: Renderer + ?Sized,
        R: Rng + ?Sized,
    {
        self.clear(renderer);
        self.store.initialize(population, &self.tuning, self.arena, rng);
        self.counts = PopulationCounts::from(population);
        self.pending_winner = None;

        for particle in self.store.all() {
            renderer.particle_created(particle);
        }
        renderer.counts_changed(self.counts);
        debug!(
            stone = self.counts.stone,
            paper = self.counts.paper,
            scissors = self.counts.scissors,
            "population spawned"
        );
    }

    /// Restores the configured starting population.
    pub fn reset<D, R>(&mut self, renderer: &mut D, rng: &mut R)
    where
        D: Renderer + ?Sized,
        R: Rng + ?Sized,
    {
        let population = Population::uniform(self.tuning.initial_count_per_type);
        self.populate(population, renderer, rng);
        self.resets += 1;
        info!(resets = self.resets, "simulation reset");
    }

    /// Adds one particle with explicit state, counting it toward its kind.
    pub fn spawn<D>(
        &mut self,
        kind: ParticleKind,
        position: (f32, f32),
        velocity: (f32, f32),
        renderer: &mut D,
    ) -> ParticleId
    where
        D: Renderer + ?Sized,
    {
        let id = self.store.spawn(kind, position, velocity, &self.tuning);
        match kind {
            ParticleKind::Stone => self.counts.stone += 1,
            ParticleKind::Paper => self.counts.paper += 1,
            ParticleKind::Scissors => self.counts.scissors += 1,
        }
        if let Some(particle) = self.store.get(id) {
            renderer.particle_created(particle);
        }
        renderer.counts_changed(self.counts);
        id
    }

    /// Runs one tick: move everything, then detect and resolve collisions.
    ///
    /// Counters and the win check are updated after every single elimination, so a
    /// winner can be declared partway through; the remaining pairs still resolve.
    pub fn tick<D>(&mut self, renderer: &mut D) -> TickReport
    where
        D: Renderer + ?Sized,
    {
        self.tick += 1;

        motion::integrate(self.store.iter_mut(), self.arena);
        for particle in self.store.all() {
            renderer.particle_moved(particle);
        }

        let pairs = collision::detect(self.store.all());

        let Self {
            store,
            counts,
            pending_winner,
            win_rule,
            tick,
            ..
        } = self;
        let mut winner_declared = None;

        let eliminations = resolution::resolve(&pairs, store, |removed| {
            renderer.particle_removed(&removed);

            if let Err(e) = counts.decrement(removed.kind) {
                warn!(tick = *tick, particle_id = %removed.id, error = %e, "counter underflow");
            }
            renderer.counts_changed(*counts);
            debug!(
                tick = *tick,
                particle_id = %removed.id,
                kind = %removed.kind,
                stone = counts.stone,
                paper = counts.paper,
                scissors = counts.scissors,
                "particle eliminated"
            );

            if let Some(winner) = win::evaluate(*counts, *win_rule) {
                if let Some(pending) = *pending_winner {
                    debug!(tick = *tick, %pending, ignored = %winner, "winner already pending");
                } else {
                    info!(tick = *tick, %winner, "winner declared");
                    *pending_winner = Some(winner);
                    winner_declared = Some(winner);
                }
            }
        });

        TickReport {
            tick: self.tick,
            collisions: pairs.len(),
            eliminations,
            winner_declared,
        }
    }

    /// Takes the pending winner, leaving none pending.
    pub fn take_pending_winner(&mut self) -> Option<ParticleKind> {
        self.pending_winner.take()
    }

    pub fn pending_winner(&self) -> Option<ParticleKind> {
        self.pending_winner
    }

    pub fn tuning(&self) -> &ParticleTuning {
        &self.tuning
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn counts(&self) -> PopulationCounts {
        self.counts
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }

    fn clear<D: Renderer + ?Sized>(&mut self, renderer: &mut D) {
        for particle in self.store.clear() {
            renderer.particle_removed(&particle);
        }
        self.counts = PopulationCounts::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{RecordedCall, RecordingRenderer};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn settings(win_rule: WinRule) -> SimulationSettings {
        SimulationSettings {
            tuning: ParticleTuning {
                initial_count_per_type: 4,
                ..ParticleTuning::default()
            },
            win_rule,
        }
    }

    fn simulation(win_rule: WinRule) -> Simulation {
        Simulation::new(Arena::new(400.0, 300.0), settings(win_rule))
    }

    #[test]
    fn when_population_lacks_paper_then_first_removal_declares_deterministic_winner() {
        // Start with one stone and one scissors, no paper, overlapping.
        for (rule, expected) in [
            (WinRule::AsObserved, Some(ParticleKind::Stone)),
            (WinRule::SingleSurvivor, Some(ParticleKind::Stone)),
        ] {
            let mut renderer = RecordingRenderer::new(Arena::new(400.0, 300.0));
            let mut sim = simulation(rule);
            sim.spawn(ParticleKind::Stone, (100.0, 100.0), (0.0, 0.0), &mut renderer);
            sim.spawn(ParticleKind::Scissors, (98.0, 98.0), (0.0, 0.0), &mut renderer);

            let report = sim.tick(&mut renderer);

            assert_eq!(report.eliminations, 1, "{rule:?}");
            assert_eq!(report.winner_declared, expected, "{rule:?}");
            assert_eq!(
                sim.counts(),
                PopulationCounts {
                    stone: 1,
                    paper: 0,
                    scissors: 0
                }
            );
        }
    }

    #[test]
    fn when_two_kinds_remain_then_rule_choice_decides_whether_a_winner_is_declared() {
        // Scissors is cut down by a stone while a paper sits far away:
        // stone 1, paper 1, scissors 0 afterwards.
        fn two_survivors(rule: WinRule) -> Option<ParticleKind> {
            let mut renderer = RecordingRenderer::new(Arena::new(400.0, 300.0));
            let mut sim = simulation(rule);
            sim.spawn(ParticleKind::Stone, (100.0, 100.0), (0.0, 0.0), &mut renderer);
            sim.spawn(ParticleKind::Paper, (300.0, 200.0), (0.0, 0.0), &mut renderer);
            sim.spawn(ParticleKind::Scissors, (98.0, 98.0), (0.0, 0.0), &mut renderer);
            sim.tick(&mut renderer).winner_declared
        }

        // Browser quirk kept: paper is named while stone is still alive.
        assert_eq!(two_survivors(WinRule::AsObserved), Some(ParticleKind::Paper));
        assert_eq!(two_survivors(WinRule::SingleSurvivor), None);
    }

    #[test]
    fn when_two_stones_collide_then_counts_do_not_change() {
        let mut renderer = RecordingRenderer::new(Arena::new(400.0, 300.0));
        let mut sim = simulation(WinRule::AsObserved);
        sim.spawn(ParticleKind::Stone, (50.0, 50.0), (0.0, 0.0), &mut renderer);
        sim.spawn(ParticleKind::Stone, (52.0, 50.0), (0.0, 0.0), &mut renderer);
        let before = sim.counts();

        let report = sim.tick(&mut renderer);

        assert_eq!(report.tick, 1);
        assert_eq!(report.collisions, 1);
        assert_eq!(report.eliminations, 0);
        assert_eq!(sim.counts(), before);
        assert_eq!(sim.store().len(), 2);
    }

    #[test]
    fn when_paper_meets_scissors_then_paper_count_drops_by_one() {
        let mut renderer = RecordingRenderer::new(Arena::new(400.0, 300.0));
        let mut sim = simulation(WinRule::AsObserved);
        sim.spawn(ParticleKind::Stone, (300.0, 250.0), (0.0, 0.0), &mut renderer);
        sim.spawn(ParticleKind::Paper, (200.0, 50.0), (0.0, 0.0), &mut renderer);
        let paper = sim.spawn(ParticleKind::Paper, (100.0, 100.0), (0.0, 0.0), &mut renderer);
        sim.spawn(ParticleKind::Scissors, (105.0, 100.0), (0.0, 0.0), &mut renderer);

        let report = sim.tick(&mut renderer);

        assert_eq!(report.eliminations, 1);
        assert_eq!(sim.counts().paper, 1);
        assert_eq!(sim.counts().scissors, 1);
        assert!(!sim.store().contains(paper));
        assert!(renderer.calls().contains(&RecordedCall::Removed(paper)));
    }

    #[test]
    fn when_reset_then_counts_and_store_return_to_initial_population() {
        let mut renderer = RecordingRenderer::new(Arena::new(400.0, 300.0));
        let mut rng = StdRng::from_entropy();
        let mut sim = simulation(WinRule::AsObserved);
        sim.populate(
            Population {
                stone: 1,
                paper: 0,
                scissors: 0,
            },
            &mut renderer,
            &mut rng,
        );

        sim.reset(&mut renderer, &mut rng);

        assert_eq!(sim.counts(), PopulationCounts::from(Population::uniform(4)));
        assert_eq!(sim.store().len(), 12);
        assert_eq!(sim.pending_winner(), None);
        assert_eq!(sim.resets(), 1);
    }

    #[test]
    fn when_reset_then_previous_particles_are_removed_from_the_renderer() {
        let mut renderer = RecordingRenderer::new(Arena::new(400.0, 300.0));
        let mut rng = StdRng::from_entropy();
        let mut sim = simulation(WinRule::AsObserved);
        let lone = sim.spawn(ParticleKind::Paper, (10.0, 10.0), (0.0, 0.0), &mut renderer);

        sim.reset(&mut renderer, &mut rng);

        assert!(renderer.calls().contains(&RecordedCall::Removed(lone)));
        assert_eq!(renderer.created_count(), 13);
        assert_eq!(
            renderer.last_counts(),
            Some(PopulationCounts::from(Population::uniform(4)))
        );
    }

    #[test]
    fn when_ticking_then_counters_track_store_and_total_never_grows() {
        let mut renderer = RecordingRenderer::new(Arena::new(200.0, 150.0));
        let mut rng = StdRng::from_entropy();
        let mut sim = Simulation::new(Arena::new(200.0, 150.0), settings(WinRule::AsObserved));
        sim.reset(&mut renderer, &mut rng);
        let mut total = sim.counts().total();

        for _ in 0..2_000 {
            let report = sim.tick(&mut renderer);
            let next = sim.counts().total();

            assert_eq!(report.tick, sim.ticks());
            assert_eq!(total - next, report.eliminations as u32);
            for kind in ParticleKind::ALL {
                assert_eq!(sim.counts().get(kind), sim.store().count_of(kind));
            }
            total = next;
        }
    }

    #[test]
    fn when_winner_is_pending_then_later_removals_do_not_declare_again() {
        let mut renderer = RecordingRenderer::new(Arena::new(400.0, 300.0));
        let mut sim = simulation(WinRule::AsObserved);
        sim.spawn(ParticleKind::Stone, (100.0, 100.0), (0.0, 0.0), &mut renderer);
        sim.spawn(ParticleKind::Scissors, (98.0, 98.0), (0.0, 0.0), &mut renderer);
        sim.spawn(ParticleKind::Stone, (300.0, 100.0), (0.0, 0.0), &mut renderer);
        sim.spawn(ParticleKind::Scissors, (298.0, 98.0), (0.0, 0.0), &mut renderer);

        let first = sim.tick(&mut renderer);

        // Both scissors go in the same tick; only the first removal declares.
        assert_eq!(first.eliminations, 2);
        assert_eq!(first.winner_declared, Some(ParticleKind::Stone));
        assert_eq!(sim.take_pending_winner(), Some(ParticleKind::Stone));
        assert_eq!(sim.pending_winner(), None);
    }
}
