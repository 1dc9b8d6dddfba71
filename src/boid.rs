/*
 * Boid Module
 *
 * This module defines the Boid struct: a point agent with a position and a
 * velocity on a bounded 2-D plane. Boids are plain values. The engine never
 * mutates one in place; every tick builds new boids from the previous ones so
 * all agents observe the same pre-tick snapshot.
 */

use crate::math::{wrap_coordinate, Velocity};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Boid {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Boid {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self { x, y, vx, vy }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> Velocity {
        Velocity::new(self.vx, self.vy)
    }

    pub fn speed(&self) -> f64 {
        self.velocity().length()
    }

    // Move by the given velocity, which also becomes the boid's new velocity
    pub fn moved_by(&self, velocity: Velocity) -> Self {
        Self::new(self.x + velocity.vx, self.y + velocity.vy, velocity.vx, velocity.vy)
    }

    // Wrap the boid around the plane edges (torus, not clamping)
    pub fn wrapped(&self, max_x: f64, max_y: f64) -> Self {
        Self::new(
            wrap_coordinate(self.x, max_x),
            wrap_coordinate(self.y, max_y),
            self.vx,
            self.vy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moved_by_adopts_velocity() {
        let boid = Boid::new(10.0, 20.0, 1.0, 1.0);
        let moved = boid.moved_by(Velocity::new(-3.0, 2.0));
        assert_eq!(moved, Boid::new(7.0, 22.0, -3.0, 2.0));
        // Original is untouched
        assert_eq!(boid, Boid::new(10.0, 20.0, 1.0, 1.0));
    }

    #[test]
    fn wrapped_keeps_velocity() {
        let boid = Boid::new(-2.0, 805.0, -7.0, 9.0);
        let wrapped = boid.wrapped(800.0, 800.0);
        assert_eq!(wrapped, Boid::new(798.0, 5.0, -7.0, 9.0));
    }

    #[test]
    fn speed_is_velocity_length() {
        assert_eq!(Boid::new(0.0, 0.0, -6.0, 8.0).speed(), 10.0);
    }
}
