/*
 * Debug Information Module
 *
 * Frame timing and flock statistics shown in the viewer's overlay.
 */

use std::time::Duration;

use crate::stats::FlockStats;

#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_this_frame: usize,
    pub stats: FlockStats,
}

impl DebugInfo {
    pub fn lines(&self, tick: u64) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Tick: {}", tick),
            format!("Boids: {}", self.stats.count),
            format!("Mean speed: {:.1}", self.stats.mean_speed),
            format!("Max speed: {:.1}", self.stats.max_speed),
        ]
    }
}
