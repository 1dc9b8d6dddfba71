/*
 * Flock Module
 *
 * A Flock bundles the current population with the parameters it was built
 * from and a tick counter. External drivers (the headless runner, the viewer)
 * call `advance` once per frame and read the population back for display.
 * Each advance swaps in a brand-new population buffer.
 */

use rand::Rng;
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::params::SimulationParams;
use crate::physics::advance_with_report;
use crate::population::{initialize, Population};

#[derive(Debug, Clone)]
pub struct Flock {
    params: SimulationParams,
    population: Population,
    tick: u64,
}

impl Flock {
    pub fn new<R: Rng>(params: SimulationParams, rng: &mut R) -> Result<Self, ConfigError> {
        let population = initialize(&params, rng)?;
        info!(population = population.len(), "flock created");
        Ok(Self { params, population, tick: 0 })
    }

    /// Wraps a hand-built population. Its length need not match
    /// `params.population_size`; the population is taken as given.
    pub fn from_population(params: SimulationParams, population: Population) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params, population, tick: 0 })
    }

    pub fn advance(&mut self) {
        let (next, report) = advance_with_report(&self.population, &self.params);
        self.population = next;
        self.tick += 1;
        debug!(tick = self.tick, isolated = report.isolated, "tick advanced");
    }

    /// Re-initializes the population from the current parameters.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) -> Result<(), ConfigError> {
        self.population = initialize(&self.params, rng)?;
        self.tick = 0;
        info!(population = self.population.len(), "flock reset");
        Ok(())
    }

    /// Swaps in new parameters after validating them. The population is kept;
    /// call [`Flock::reset`] to resize it.
    pub fn set_params(&mut self, params: SimulationParams) -> Result<(), ConfigError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.population.positions()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }
}
