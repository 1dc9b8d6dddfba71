/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that carries every constant
 * the engine needs: population size, the two perception radii, the plane
 * dimensions and the velocity cap used by cohesion. Parameters are passed
 * explicitly into `initialize` and `advance` so small or unusual
 * configurations can be exercised without recompiling.
 */

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// Parameters for the simulation, loadable from JSON and adjustable via UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub population_size: usize,
    pub neighbourhood_radius: f64,
    pub separation_radius: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub max_velocity: f64,
    // Performance settings; they never change the simulated result
    pub enable_parallel: bool,
    pub enable_spatial_grid: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            population_size: 1000,
            neighbourhood_radius: 200.0,
            separation_radius: 40.0,
            max_x: 800.0,
            max_y: 800.0,
            max_velocity: 70.0,
            enable_parallel: false,
            enable_spatial_grid: false,
        }
    }
}

impl SimulationParams {
    /// Checks every field, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if !(self.max_x.is_finite() && self.max_x > 0.0) {
            return Err(ConfigError::InvalidWidth(self.max_x));
        }
        if !(self.max_y.is_finite() && self.max_y > 0.0) {
            return Err(ConfigError::InvalidHeight(self.max_y));
        }
        if !(self.neighbourhood_radius.is_finite() && self.neighbourhood_radius >= 0.0) {
            return Err(ConfigError::InvalidNeighbourhoodRadius(self.neighbourhood_radius));
        }
        if !(self.separation_radius.is_finite() && self.separation_radius >= 0.0) {
            return Err(ConfigError::InvalidSeparationRadius(self.separation_radius));
        }
        // Cohesion divides by the distance once it reaches the cap, so a zero cap
        // would turn a coincident centroid into 0/0. Initial velocities are drawn
        // from a range twice the cap wide, which must itself stay finite.
        if !((2.0 * self.max_velocity).is_finite() && self.max_velocity > 0.0) {
            return Err(ConfigError::InvalidMaxVelocity(self.max_velocity));
        }
        Ok(())
    }

    /// Loads parameters from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let params: Self = serde_json::from_str(&text).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        params.validate()?;
        Ok(params)
    }

    // Get parameter ranges for UI sliders
    pub fn get_population_size_range() -> std::ops::RangeInclusive<usize> {
        1..=5000
    }

    pub fn get_max_velocity_range() -> std::ops::RangeInclusive<f64> {
        1.0..=200.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f64> {
        0.0..=400.0
    }
}
