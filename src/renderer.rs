/*
 * Renderer Module
 *
 * Draws the current population as points. The plane [0, max_x) x [0, max_y)
 * is scaled uniformly to fit the window and centred; nannou's origin is the
 * window centre with y pointing up.
 */

use nannou::prelude::*;

use crate::app::Model;

const POINT_SIZE: f32 = 3.0;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let params = model.flock.params();
    let plane_w = params.max_x as f32;
    let plane_h = params.max_y as f32;
    let scale = (window_rect.w() / plane_w).min(window_rect.h() / plane_h);
    let origin = pt2(-plane_w * scale / 2.0, -plane_h * scale / 2.0);

    // Plane boundary
    draw.rect()
        .x_y(0.0, 0.0)
        .w_h(plane_w * scale, plane_h * scale)
        .no_fill()
        .stroke_weight(1.0)
        .stroke(rgba(0.3, 0.3, 0.3, 1.0));

    for (x, y) in model.flock.positions() {
        draw.ellipse()
            .x_y(origin.x + x as f32 * scale, origin.y + y as f32 * scale)
            .w_h(POINT_SIZE, POINT_SIZE)
            .color(rgb(220u8, 220u8, 220u8));
    }

    if model.show_debug {
        draw_debug_info(&draw, model, window_rect);
    }

    draw.to_frame(app, &frame).unwrap();
    model.egui.draw_to_frame(&frame).unwrap();
}

// Draw debug information in the top-right corner
fn draw_debug_info(draw: &Draw, model: &Model, window_rect: Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let text_x = window_rect.right() - 110.0;
    let text_y = window_rect.top() - margin;

    for (i, text) in model.debug_info.lines(model.flock.tick()).iter().enumerate() {
        draw.text(text)
            .x_y(text_x, text_y - i as f32 * line_height)
            .color(WHITE)
            .font_size(14);
    }
}
