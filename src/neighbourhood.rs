/*
 * Neighbourhood Query Module
 *
 * Finds the boids within a radius of a subject boid. The subject is excluded by
 * its index, so two boids sharing exact coordinates still see each other.
 * A full scan costs O(n) per boid and O(n²) per tick; the spatial grid is the
 * optional accelerator with identical results.
 */

use tracing::trace;

use crate::boid::Boid;
use crate::math::are_neighbours;
use crate::params::SimulationParams;
use crate::spatial_grid::SpatialGrid;

/// Every other boid within `radius` of `population[subject]`, in population order.
pub fn neighbours<'a>(subject: usize, population: &'a [Boid], radius: f64) -> Vec<&'a Boid> {
    let boid = &population[subject];
    population
        .iter()
        .enumerate()
        .filter(|&(index, other)| index != subject && are_neighbours(boid, other, radius))
        .map(|(_, other)| other)
        .collect()
}

/// The members of an already-found neighbour set that are also within `radius`.
pub fn within<'a>(boid: &Boid, candidates: &[&'a Boid], radius: f64) -> Vec<&'a Boid> {
    candidates
        .iter()
        .copied()
        .filter(|other| are_neighbours(boid, other, radius))
        .collect()
}

// How a tick looks up neighbours; chosen once per tick from the parameters
#[derive(Debug)]
pub enum Neighbourhood {
    Scan,
    Grid(SpatialGrid),
}

impl Neighbourhood {
    pub fn for_params(population: &[Boid], params: &SimulationParams) -> Self {
        if params.enable_spatial_grid {
            trace!(radius = params.neighbourhood_radius, "building spatial grid");
            Neighbourhood::Grid(SpatialGrid::for_radius(
                population,
                params.neighbourhood_radius,
                params.max_x,
                params.max_y,
            ))
        } else {
            trace!("using full neighbour scan");
            Neighbourhood::Scan
        }
    }

    pub fn query<'a>(&self, subject: usize, population: &'a [Boid], radius: f64) -> Vec<&'a Boid> {
        match self {
            Neighbourhood::Scan => neighbours(subject, population, radius),
            Neighbourhood::Grid(grid) => grid.neighbours(subject, population, radius),
        }
    }
}
