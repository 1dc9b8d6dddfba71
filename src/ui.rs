/*
 * UI Module
 *
 * The egui control panel for the viewer. Edits go into the model's pending
 * parameters; the app applies them to the flock only after they validate.
 * Changing the population size needs a reset, since the engine never adds or
 * removes boids from a running flock.
 */

use nannou_egui::egui;

use crate::app::Model;
use crate::params::SimulationParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    None,
    Apply,
    Reset,
}

pub fn update_ui(model: &mut Model) -> UiAction {
    let before = model.pending_params.clone();
    let mut reset_clicked = false;

    let ctx = model.egui.begin_frame();
    let pending = &mut model.pending_params;
    let paused = &mut model.paused;
    let ticks_per_frame = &mut model.ticks_per_frame;
    let show_debug = &mut model.show_debug;
    let last_error = &model.last_error;
    let current_size = model.flock.population().len();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(
                    egui::Slider::new(&mut pending.population_size, SimulationParams::get_population_size_range())
                        .text("Number of Boids"),
                );
                if pending.population_size != current_size {
                    ui.label("Reset to apply the new size");
                }
                if ui.button("Reset Boids").clicked() {
                    reset_clicked = true;
                }
            });

            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(
                    egui::Slider::new(&mut pending.neighbourhood_radius, SimulationParams::get_radius_range())
                        .text("Neighbourhood Radius"),
                );
                ui.add(
                    egui::Slider::new(&mut pending.separation_radius, SimulationParams::get_radius_range())
                        .text("Separation Radius"),
                );
                ui.add(
                    egui::Slider::new(&mut pending.max_velocity, SimulationParams::get_max_velocity_range())
                        .text("Max Velocity"),
                );
            });

            ui.collapsing("Performance Tuning", |ui| {
                ui.checkbox(&mut pending.enable_parallel, "Enable Parallel Processing");
                ui.checkbox(&mut pending.enable_spatial_grid, "Enable Spatial Grid");
                ui.add(egui::Slider::new(ticks_per_frame, 1..=10).text("Ticks per Frame"));
            });

            ui.checkbox(show_debug, "Show Debug Info");
            ui.checkbox(paused, "Pause Simulation");

            if let Some(message) = last_error {
                ui.colored_label(egui::Color32::RED, message.as_str());
            }
        });

    if reset_clicked {
        UiAction::Reset
    } else if *pending != before {
        UiAction::Apply
    } else {
        UiAction::None
    }
}
