use crate::domain::{ParticleKind, PopulationCounts};

/// How a winner is picked once some kind has been wiped out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WinRule {
    /// Branch order of the browser version, kept bug-for-bug.
    ///
    /// As soon as one kind reaches zero a winner is named, even while two kinds are alive:
    /// no stones means scissors, no paper means stone, no scissors means paper.
    #[default]
    AsObserved,
    /// Winner is the only kind left alive; nothing is declared while two kinds survive.
    SingleSurvivor,
}

/// Returns the winner for these counts, if the game is over under `rule`.
pub fn evaluate(counts: PopulationCounts, rule: WinRule) -> Option<ParticleKind> {
    let PopulationCounts {
        stone,
        paper,
        scissors,
    } = counts;

    if stone != 0 && paper != 0 && scissors != 0 {
        return None;
    }

    match rule {
        WinRule::AsObserved => {
            if (stone == 0 && paper == 0 && scissors > 0)
                || (stone == 0 && paper > 0 && scissors > 0)
            {
                Some(ParticleKind::Scissors)
            } else if (paper == 0 && stone > 0 && scissors == 0)
                || (paper == 0 && stone > 0 && scissors > 0)
            {
                Some(ParticleKind::Stone)
            } else if (scissors == 0 && stone == 0 && paper > 0) || (scissors == 0 && paper > 0) {
                Some(ParticleKind::Paper)
            } else {
                None
            }
        }
        WinRule::SingleSurvivor => {
            let mut alive = ParticleKind::ALL
                .into_iter()
                .filter(|kind| counts.get(*kind) > 0);
            match (alive.next(), alive.next()) {
                (Some(kind), None) => Some(kind),
                _ => None,
            }
        }
    }
}
