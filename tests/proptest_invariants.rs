use boids::{advance, Boid, Population, SimulationParams};
use proptest::prelude::*;

fn params_strategy() -> impl Strategy<Value = SimulationParams> {
    (
        10.0..1000.0f64,
        10.0..1000.0f64,
        0.0..300.0f64,
        0.0..60.0f64,
        0.5..100.0f64,
        any::<bool>(),
    )
        .prop_map(|(max_x, max_y, neighbourhood_radius, separation_radius, max_velocity, grid)| {
            SimulationParams {
                population_size: 1,
                neighbourhood_radius,
                separation_radius,
                max_x,
                max_y,
                max_velocity,
                enable_parallel: false,
                enable_spatial_grid: grid,
            }
        })
}

fn population_strategy() -> impl Strategy<Value = Vec<(f64, f64, f64, f64)>> {
    prop::collection::vec(
        (-1000.0..2000.0f64, -1000.0..2000.0f64, -50.0..50.0f64, -50.0..50.0f64),
        1..30,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn advance_keeps_size_and_wraps(params in params_strategy(), raw in population_strategy(), ticks in 1usize..8) {
        let mut population: Population = raw
            .iter()
            .map(|&(x, y, vx, vy)| Boid::new(x, y, vx, vy))
            .collect();
        let len = population.len();

        for _ in 0..ticks {
            population = advance(&population, &params);
            prop_assert_eq!(population.len(), len);
            for boid in &population {
                prop_assert!(boid.x >= 0.0 && boid.x < params.max_x, "x out of range: {:?}", boid);
                prop_assert!(boid.y >= 0.0 && boid.y < params.max_y, "y out of range: {:?}", boid);
            }
        }
    }

    #[test]
    fn grid_matches_scan(params in params_strategy(), raw in population_strategy()) {
        let population: Population = raw
            .iter()
            .map(|&(x, y, vx, vy)| Boid::new(x, y, vx, vy))
            .collect();
        let scan = SimulationParams { enable_spatial_grid: false, ..params.clone() };
        let grid = SimulationParams { enable_spatial_grid: true, ..params };
        prop_assert_eq!(advance(&population, &scan), advance(&population, &grid));
    }
}
