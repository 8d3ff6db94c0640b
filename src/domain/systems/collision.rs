use crate::domain::{Particle, ParticleId};

/// Two particles whose circles overlap this tick, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub first: ParticleId,
    pub second: ParticleId,
}

/// Returns true when the circles strictly overlap. Touching does not count.
pub fn overlaps(a: &Particle, b: &Particle) -> bool {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    let dx = bx - ax;
    let dy = by - ay;
    let distance = (dx * dx + dy * dy).sqrt();
    distance < a.radius() + b.radius()
}

/// Finds every overlapping pair (naive O(n^2) scan).
///
/// Pairs come out ordered by outer index `i`, then inner index `j > i`.
pub fn detect(particles: &[Particle]) -> Vec<CollisionPair> {
    let mut pairs = Vec::new();
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            if overlaps(a, b) {
                pairs.push(CollisionPair {
                    first: a.id,
                    second: b.id,
                });
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParticleKind;

    fn particle(id: u64, x: f32, y: f32, size: f32) -> Particle {
        Particle {
            id: ParticleId(id),
            kind: ParticleKind::Paper,
            x,
            y,
            dx: 0.0,
            dy: 0.0,
            size,
        }
    }

    #[test]
    fn when_circles_overlap_then_pair_is_reported() {
        let particles = vec![particle(1, 0.0, 0.0, 20.0), particle(2, 15.0, 0.0, 20.0)];

        assert_eq!(
            detect(&particles),
            vec![CollisionPair {
                first: ParticleId(1),
                second: ParticleId(2)
            }]
        );
    }

    #[test]
    fn when_circles_only_touch_then_no_collision() {
        // Centers 15 apart, radii 5 + 10.
        let a = particle(1, 0.0, 0.0, 10.0);
        let b = particle(2, 10.0, -5.0, 20.0);

        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn when_sizes_differ_then_centers_use_each_half_size() {
        // Stone center (5,5), paper center (21,5): 16 apart, radii sum to 15.
        let stone = particle(1, 0.0, 0.0, 10.0);
        let paper = particle(2, 11.0, -5.0, 20.0);
        assert!(!overlaps(&stone, &paper));

        // Paper center (19,5): 14 apart.
        let paper = particle(2, 9.0, -5.0, 20.0);
        assert!(overlaps(&stone, &paper));
    }

    #[test]
    fn when_one_particle_hits_several_then_each_pair_is_listed_in_scan_order() {
        let particles = vec![
            particle(1, 10.0, 10.0, 20.0),
            particle(2, 500.0, 500.0, 20.0),
            particle(3, 20.0, 10.0, 20.0),
            particle(4, 0.0, 10.0, 20.0),
        ];

        let pairs: Vec<(u64, u64)> = detect(&particles)
            .into_iter()
            .map(|p| (p.first.0, p.second.0))
            .collect();

        assert_eq!(pairs, vec![(1, 3), (1, 4)]);
    }
}
