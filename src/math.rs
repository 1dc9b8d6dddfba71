/*
 * Vector Math Module
 *
 * Small helpers shared by the neighbourhood query, the flocking rules and the
 * tick advancer: the squared-distance neighbour predicate, component-wise
 * averaging and the toroidal wrap of a single coordinate.
 */

use std::ops::{Add, Div, Neg};

use crate::boid::Boid;

/// A velocity contribution proposed by one of the flocking rules.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { vx: 0.0, vy: 0.0 };

    pub fn new(vx: f64, vy: f64) -> Self {
        Self { vx, vy }
    }

    pub fn length(self) -> f64 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity::new(self.vx + rhs.vx, self.vy + rhs.vy)
    }
}

impl Neg for Velocity {
    type Output = Velocity;

    fn neg(self) -> Velocity {
        Velocity::new(-self.vx, -self.vy)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity::new(self.vx / rhs, self.vy / rhs)
    }
}

// Squared comparison keeps the square root off the hot path
#[inline]
pub fn are_neighbours(a: &Boid, b: &Boid, radius: f64) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy <= radius * radius
}

/// Component-wise mean of position and velocity.
///
/// # Panics
///
/// Panics if `points` is empty. Every caller guards against an empty
/// neighbourhood before reaching this point.
pub fn average<'a, I>(points: I) -> Boid
where
    I: IntoIterator<Item = &'a Boid>,
{
    let mut sum = Boid::default();
    let mut count = 0usize;
    for point in points {
        sum.x += point.x;
        sum.y += point.y;
        sum.vx += point.vx;
        sum.vy += point.vy;
        count += 1;
    }
    assert!(count > 0, "average() requires at least one boid");

    let n = count as f64;
    Boid::new(sum.x / n, sum.y / n, sum.vx / n, sum.vy / n)
}

/// Wraps a coordinate onto `[0, extent)`.
///
/// Negative values wrap to just below `extent` rather than producing a
/// negative remainder.
#[inline]
pub fn wrap_coordinate(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid rounds tiny negative inputs up to exactly `extent`
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}
