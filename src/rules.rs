/*
 * Flocking Rules Module
 *
 * Each rule looks at one boid and the neighbour set the tick advancer already
 * found for it, and proposes a velocity:
 * 1. Cohesion: head for the neighbourhood centroid, at most `max_velocity` per step
 * 2. Alignment: adopt the neighbours' mean velocity
 * 3. Separation: push away from the neighbours that are too close
 *
 * Cohesion and alignment need a non-empty neighbour set.
 */

use crate::boid::Boid;
use crate::math::{average, Velocity};
use crate::neighbourhood::within;

pub fn cohesion(boid: &Boid, neighbours: &[&Boid], max_velocity: f64) -> Velocity {
    let target = average(neighbours.iter().copied());
    let to_target = Velocity::new(target.x - boid.x, target.y - boid.y);
    let distance = to_target.length();

    if distance.abs() < max_velocity {
        to_target
    } else {
        let scale = max_velocity / distance;
        Velocity::new(to_target.vx * scale, to_target.vy * scale)
    }
}

pub fn alignment(neighbours: &[&Boid]) -> Velocity {
    average(neighbours.iter().copied()).velocity()
}

// With nobody too close the boid keeps its own velocity (not zero)
pub fn separation(boid: &Boid, neighbours: &[&Boid], separation_radius: f64) -> Velocity {
    let too_close = within(boid, neighbours, separation_radius);
    if too_close.is_empty() {
        return boid.velocity();
    }

    let towards_close = too_close
        .iter()
        .fold(Velocity::ZERO, |sum, close| sum + Velocity::new(close.x - boid.x, close.y - boid.y));
    -towards_close
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_VELOCITY: f64 = 70.0;

    #[test]
    fn cohesion_is_unscaled_inside_the_cap() {
        let boid = Boid::new(100.0, 100.0, 0.0, 0.0);
        let a = Boid::new(110.0, 100.0, 5.0, 5.0);
        let b = Boid::new(130.0, 120.0, -5.0, 5.0);
        // Centroid (120, 110)
        let steer = cohesion(&boid, &[&a, &b], MAX_VELOCITY);
        assert_eq!(steer, Velocity::new(20.0, 10.0));
    }

    #[test]
    fn cohesion_is_capped_outside() {
        let boid = Boid::new(0.0, 0.0, 0.0, 0.0);
        let far = Boid::new(300.0, 400.0, 0.0, 0.0);
        let steer = cohesion(&boid, &[&far], MAX_VELOCITY);
        assert!((steer.vx - 42.0).abs() < 1e-9);
        assert!((steer.vy - 56.0).abs() < 1e-9);
        assert!((steer.length() - MAX_VELOCITY).abs() < 1e-9);
    }

    #[test]
    fn cohesion_at_the_cap_is_scaled_to_itself() {
        let boid = Boid::new(0.0, 0.0, 0.0, 0.0);
        let target = Boid::new(70.0, 0.0, 0.0, 0.0);
        assert_eq!(cohesion(&boid, &[&target], MAX_VELOCITY), Velocity::new(70.0, 0.0));
    }

    #[test]
    fn cohesion_on_centroid_is_zero() {
        let boid = Boid::new(50.0, 50.0, 3.0, 3.0);
        let a = Boid::new(40.0, 50.0, 0.0, 0.0);
        let b = Boid::new(60.0, 50.0, 0.0, 0.0);
        let steer = cohesion(&boid, &[&a, &b], MAX_VELOCITY);
        assert_eq!(steer, Velocity::ZERO);
    }

    #[test]
    fn alignment_ignores_own_velocity() {
        let a = Boid::new(0.0, 0.0, 2.0, -2.0);
        let b = Boid::new(9.0, 9.0, 4.0, 6.0);
        assert_eq!(alignment(&[&a, &b]), Velocity::new(3.0, 2.0));
    }

    #[test]
    fn separation_without_close_neighbours_keeps_velocity() {
        let boid = Boid::new(100.0, 100.0, 7.0, -3.0);
        let distant = Boid::new(200.0, 100.0, 0.0, 0.0);
        assert_eq!(separation(&boid, &[&distant], 40.0), Velocity::new(7.0, -3.0));
    }

    #[test]
    fn separation_with_no_neighbours_keeps_velocity() {
        let boid = Boid::new(100.0, 100.0, 1.0, 2.0);
        assert_eq!(separation(&boid, &[], 40.0), Velocity::new(1.0, 2.0));
    }

    #[test]
    fn separation_sums_and_negates() {
        let boid = Boid::new(100.0, 100.0, 9.0, 9.0);
        let right = Boid::new(110.0, 100.0, 0.0, 0.0);
        let above = Boid::new(100.0, 120.0, 0.0, 0.0);
        let distant = Boid::new(180.0, 100.0, 0.0, 0.0);
        let push = separation(&boid, &[&right, &above, &distant], 40.0);
        assert_eq!(push, Velocity::new(-10.0, -20.0));
    }

    #[test]
    fn separation_grows_with_count() {
        let boid = Boid::new(0.0, 0.0, 0.0, 0.0);
        let one = Boid::new(10.0, 0.0, 0.0, 0.0);
        let two = Boid::new(20.0, 0.0, 0.0, 0.0);
        let single = separation(&boid, &[&one], 40.0);
        let double = separation(&boid, &[&one, &two], 40.0);
        assert!(double.length() > single.length());
    }

    #[test]
    #[should_panic(expected = "at least one boid")]
    fn cohesion_requires_neighbours() {
        let boid = Boid::new(0.0, 0.0, 0.0, 0.0);
        cohesion(&boid, &[], MAX_VELOCITY);
    }
}
