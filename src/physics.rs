/*
 * Physics Module
 *
 * This module advances the whole flock by one tick. For every boid, against the
 * frozen pre-tick population:
 * - find its neighbours within the neighbourhood radius
 * - with no neighbours, coast: position += velocity, velocity unchanged
 * - otherwise blend its own velocity with cohesion, alignment and separation,
 *   always dividing by four
 * - move by the new velocity and wrap around the plane edges
 *
 * Every new boid is written into a fresh buffer, so no boid ever sees another
 * boid's post-tick state and the per-boid work can run in parallel.
 */

use rayon::prelude::*;

use crate::boid::Boid;
use crate::math::Velocity;
use crate::neighbourhood::Neighbourhood;
use crate::params::SimulationParams;
use crate::population::Population;
use crate::rules::{alignment, cohesion, separation};

/// Summary of one tick, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Boids that had no neighbours and moved ballistically.
    pub isolated: usize,
}

/// Advances every boid by one tick. The input population is left untouched.
///
/// `params` is expected to have passed [`SimulationParams::validate`].
pub fn advance(population: &Population, params: &SimulationParams) -> Population {
    advance_with_report(population, params).0
}

pub fn advance_with_report(population: &Population, params: &SimulationParams) -> (Population, TickReport) {
    debug_assert!(params.validate().is_ok(), "advance() called with invalid parameters");

    let boids = population.as_slice();
    let neighbourhood = Neighbourhood::for_params(boids, params);

    let stepped: Vec<(Boid, bool)> = if params.enable_parallel {
        // Output order matches input order, so results equal the sequential path
        (0..boids.len())
            .into_par_iter()
            .map(|index| move_one(index, boids, &neighbourhood, params))
            .collect()
    } else {
        (0..boids.len())
            .map(|index| move_one(index, boids, &neighbourhood, params))
            .collect()
    };

    let isolated = stepped.iter().filter(|(_, isolated)| *isolated).count();
    let next: Population = stepped.into_iter().map(|(boid, _)| boid).collect();
    (next, TickReport { isolated })
}

// New state for one boid, and whether it moved without neighbours
fn move_one(index: usize, boids: &[Boid], neighbourhood: &Neighbourhood, params: &SimulationParams) -> (Boid, bool) {
    let boid = &boids[index];
    let neighbours = neighbourhood.query(index, boids, params.neighbourhood_radius);

    if neighbours.is_empty() {
        let coasted = boid.moved_by(boid.velocity());
        return (coasted.wrapped(params.max_x, params.max_y), true);
    }

    let cohere = cohesion(boid, &neighbours, params.max_velocity);
    let align = alignment(&neighbours);
    let separate = separation(boid, &neighbours, params.separation_radius);

    let velocity: Velocity = (boid.velocity() + cohere + align + separate) / 4.0;
    (boid.moved_by(velocity).wrapped(params.max_x, params.max_y), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_for(population_size: usize) -> SimulationParams {
        SimulationParams { population_size, ..Default::default() }
    }

    #[test]
    fn isolated_boid_coasts() {
        let population = Population::new(vec![Boid::new(100.0, 200.0, 3.0, -4.0)]);
        let (next, report) = advance_with_report(&population, &params_for(1));
        assert_eq!(next[0], Boid::new(103.0, 196.0, 3.0, -4.0));
        assert_eq!(report.isolated, 1);
    }

    #[test]
    fn coasting_wraps_at_the_edge() {
        let population = Population::new(vec![Boid::new(799.0, 0.5, 5.0, -2.0)]);
        let next = advance(&population, &params_for(1));
        assert_eq!(next[0].x, 4.0);
        assert_eq!(next[0].y, 798.5);
        assert_eq!(next[0].velocity(), Velocity::new(5.0, -2.0));
    }

    #[test]
    fn blend_divides_by_four() {
        // Two boids 100 apart: neighbours but not too close
        let a = Boid::new(300.0, 400.0, 8.0, 0.0);
        let b = Boid::new(400.0, 400.0, 0.0, 4.0);
        let population = Population::new(vec![a, b]);
        let next = advance(&population, &params_for(2));

        // cohesion (capped to 70 along +x), alignment = b's velocity,
        // separation = a's own velocity
        let expected_vx = (8.0 + 70.0 + 0.0 + 8.0) / 4.0;
        let expected_vy = (0.0 + 0.0 + 4.0 + 0.0) / 4.0;
        assert_eq!(next[0].vx, expected_vx);
        assert_eq!(next[0].vy, expected_vy);
        assert_eq!(next[0].x, 300.0 + expected_vx);
        assert_eq!(next[0].y, 400.0 + expected_vy);
    }

    #[test]
    fn reads_only_the_pre_tick_snapshot() {
        let population = Population::new(vec![
            Boid::new(100.0, 100.0, 10.0, 0.0),
            Boid::new(150.0, 100.0, -10.0, 0.0),
            Boid::new(125.0, 140.0, 0.0, -10.0),
        ]);
        let before = population.clone();
        let next = advance(&population, &params_for(3));

        // Recompute the last boid by hand from the original snapshot only
        let rebuilt = move_one(2, before.as_slice(), &Neighbourhood::Scan, &params_for(3)).0;
        assert_eq!(next[2], rebuilt);
        assert_eq!(population, before);
    }

    #[test]
    fn empty_population_stays_empty() {
        let next = advance(&Population::default(), &params_for(1));
        assert!(next.is_empty());
    }
}
