use super::collision::CollisionPair;
use crate::domain::{EntityStore, Particle, ParticleKind};

/// Which member of a pair is eliminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loser {
    First,
    Second,
}

/// Fixed dominance table: stone breaks scissors, paper wraps stone, scissors cut paper.
///
/// Same-kind pairs have no loser.
pub fn loser(first: ParticleKind, second: ParticleKind) -> Option<Loser> {
    use crate::domain::ParticleKind::*;

    match (first, second) {
        (Stone, Scissors) | (Paper, Stone) | (Scissors, Paper) => Some(Loser::Second),
        (Scissors, Stone) | (Stone, Paper) | (Paper, Scissors) => Some(Loser::First),
        (Stone, Stone) | (Paper, Paper) | (Scissors, Scissors) => None,
    }
}

/// Resolves pairs in order, removing each loser from the store immediately.
///
/// A pair is skipped when either member was already removed earlier in the same pass.
/// `on_eliminated` runs right after each removal, before the next pair is looked at.
/// Returns the number of eliminations.
pub fn resolve<F>(pairs: &[CollisionPair], store: &mut EntityStore, mut on_eliminated: F) -> usize
where
    F: FnMut(Particle),
{
    let mut eliminated = 0;

    for pair in pairs {
        let (Some(first), Some(second)) = (store.get(pair.first), store.get(pair.second)) else {
            continue;
        };

        let loser_id = match loser(first.kind, second.kind) {
            Some(Loser::First) => first.id,
            Some(Loser::Second) => second.id,
            None => continue,
        };

        if let Some(removed) = store.remove(loser_id) {
            eliminated += 1;
            on_eliminated(removed);
        }
    }

    eliminated
}
