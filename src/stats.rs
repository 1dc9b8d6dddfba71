/*
 * Flock Statistics Module
 *
 * Read-only summaries of a population for the headless runner's log lines and
 * the viewer's overlay.
 */

use crate::boid::Boid;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlockStats {
    pub count: usize,
    pub mean_speed: f64,
    pub max_speed: f64,
    pub centroid: (f64, f64),
}

impl FlockStats {
    pub fn from_population(boids: &[Boid]) -> Self {
        if boids.is_empty() {
            return Self::default();
        }

        let n = boids.len() as f64;
        let (sum_x, sum_y, sum_speed, max_speed) = boids.iter().fold(
            (0.0, 0.0, 0.0, 0.0_f64),
            |(sx, sy, speed, max), boid| {
                let s = boid.speed();
                (sx + boid.x, sy + boid.y, speed + s, max.max(s))
            },
        );

        Self {
            count: boids.len(),
            mean_speed: sum_speed / n,
            max_speed,
            centroid: (sum_x / n, sum_y / n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_population_is_all_zero() {
        assert_eq!(FlockStats::from_population(&[]), FlockStats::default());
    }

    #[test]
    fn summarises_speed_and_centroid() {
        let boids = [
            Boid::new(0.0, 0.0, 3.0, 4.0),
            Boid::new(10.0, 20.0, 0.0, 1.0),
        ];
        let stats = FlockStats::from_population(&boids);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean_speed, 3.0);
        assert_eq!(stats.max_speed, 5.0);
        assert_eq!(stats.centroid, (5.0, 10.0));
    }
}
