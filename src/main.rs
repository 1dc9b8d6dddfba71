/*
 * Boid Flocking Viewer
 *
 * Opens a window that drives the flocking engine: every frame the flock is
 * advanced and its positions are drawn. Parameters can be adjusted in the
 * control panel while the simulation runs.
 *
 * Run with `cargo run --features viewer --bin boids`.
 */

use boids::app;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    nannou::app(app::model)
        .update(app::update)
        .run();
}
