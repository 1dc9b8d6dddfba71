/*
 * Population Module
 *
 * The Population is the owned, fixed-length buffer of boids for one tick.
 * It is created once by `initialize` and then replaced wholesale by every
 * call to `advance`; renderers only ever read it.
 */

use std::ops::Deref;

use rand::Rng;
use tracing::{info, instrument};

use crate::boid::Boid;
use crate::error::ConfigError;
use crate::params::SimulationParams;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Population {
    boids: Vec<Boid>,
}

impl Population {
    pub fn new(boids: Vec<Boid>) -> Self {
        Self { boids }
    }

    pub fn as_slice(&self) -> &[Boid] {
        &self.boids
    }

    // (x, y) pairs for a renderer
    pub fn positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.boids.iter().map(Boid::position)
    }
}

impl Deref for Population {
    type Target = [Boid];

    fn deref(&self) -> &[Boid] {
        &self.boids
    }
}

impl From<Vec<Boid>> for Population {
    fn from(boids: Vec<Boid>) -> Self {
        Self::new(boids)
    }
}

impl FromIterator<Boid> for Population {
    fn from_iter<I: IntoIterator<Item = Boid>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Boid;
    type IntoIter = std::slice::Iter<'a, Boid>;

    fn into_iter(self) -> Self::IntoIter {
        self.boids.iter()
    }
}

/// Creates `params.population_size` boids spread uniformly over the plane, with
/// each velocity component uniform in `[-max_velocity, max_velocity)`.
#[instrument(skip_all, fields(population_size = params.population_size))]
pub fn initialize<R: Rng>(params: &SimulationParams, rng: &mut R) -> Result<Population, ConfigError> {
    params.validate()?;

    let population: Population = (0..params.population_size)
        .map(|_| {
            Boid::new(
                rng.gen_range(0.0..params.max_x),
                rng.gen_range(0.0..params.max_y),
                rng.gen_range(-params.max_velocity..params.max_velocity),
                rng.gen_range(-params.max_velocity..params.max_velocity),
            )
        })
        .collect();

    info!(
        width = params.max_x,
        height = params.max_y,
        max_velocity = params.max_velocity,
        "population initialized"
    );
    Ok(population)
}
