/*
 * Application Module
 *
 * This module defines the viewer's model and its per-frame update. The viewer
 * is an external driver for the engine: each frame it advances the flock a
 * configurable number of ticks (unless paused) and the renderer then reads the
 * resulting positions. The engine itself knows nothing about frames.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::warn;

use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::params::SimulationParams;
use crate::renderer;
use crate::stats::FlockStats;
use crate::ui::{self, UiAction};

// Main model for the application
pub struct Model {
    pub flock: Flock,
    // Parameters being edited in the UI; applied to the flock once valid
    pub pending_params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub show_debug: bool,
    pub paused: bool,
    pub ticks_per_frame: usize,
    pub last_error: Option<String>,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title("Boid Flocking Simulation")
        .size(900, 900)
        .view(renderer::view)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build the viewer window");

    let window = app.window(window_id).expect("viewer window vanished after creation");
    let egui = Egui::from_window(&window);

    let params = SimulationParams {
        enable_parallel: true,
        enable_spatial_grid: true,
        ..SimulationParams::default()
    };
    let flock = Flock::new(params.clone(), &mut rand::thread_rng())
        .expect("default simulation parameters are valid");

    Model {
        flock,
        pending_params: params,
        egui,
        debug_info: DebugInfo::default(),
        show_debug: true,
        paused: false,
        ticks_per_frame: 1,
        last_error: None,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    match ui::update_ui(model) {
        UiAction::None => {}
        UiAction::Apply => apply_pending(model, false),
        UiAction::Reset => apply_pending(model, true),
    }

    let mut ticks = 0;
    if !model.paused {
        for _ in 0..model.ticks_per_frame {
            model.flock.advance();
            ticks += 1;
        }
    }

    model.debug_info.ticks_this_frame = ticks;
    model.debug_info.stats = FlockStats::from_population(model.flock.population());
}

fn apply_pending(model: &mut Model, reset: bool) {
    let result = model.flock.set_params(model.pending_params.clone()).and_then(|()| {
        if reset {
            model.flock.reset(&mut rand::thread_rng())
        } else {
            Ok(())
        }
    });

    match result {
        Ok(()) => model.last_error = None,
        Err(err) => {
            warn!(error = %err, "rejected parameter change");
            model.last_error = Some(err.to_string());
        }
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
