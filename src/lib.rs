/*
 * Boid Flocking Engine - Module Definitions
 *
 * This file defines the module structure for the boid flocking engine.
 * The engine core (boid, math, neighbourhood, spatial_grid, rules, physics,
 * population) is plain computation; flock and stats sit on top of it for
 * external drivers, and the viewer modules are only built with `viewer`.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use error::ConfigError;
pub use flock::Flock;
pub use math::{are_neighbours, average, Velocity};
pub use neighbourhood::neighbours;
pub use params::SimulationParams;
pub use physics::{advance, advance_with_report, TickReport};
pub use population::{initialize, Population};
pub use spatial_grid::SpatialGrid;
pub use stats::FlockStats;

// Define modules
pub mod boid;
pub mod error;
pub mod flock;
pub mod math;
pub mod neighbourhood;
pub mod params;
pub mod physics;
pub mod population;
pub mod rules;
pub mod spatial_grid;
pub mod stats;

#[cfg(feature = "viewer")]
pub mod app;
#[cfg(feature = "viewer")]
pub mod debug;
#[cfg(feature = "viewer")]
pub mod renderer;
#[cfg(feature = "viewer")]
pub mod ui;
