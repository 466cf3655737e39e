/*
 * Renderer Module
 *
 * This module handles the rendering of the particle swarm. It is a read-only
 * consumer of the store's flat buffers: each frame it projects the position
 * buffer through the camera and draws one size-attenuated point per particle
 * with its buffer color. Points behind the camera are skipped.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear to the deep blue-black backdrop
    draw.background().color(rgb(0.04, 0.04, 0.07));

    // Get the window rectangle
    let window_rect = app.window_rect();

    let positions = model.store.positions();
    let colors = model.store.colors();
    let sizes = model.store.sizes();
    let particles = model.store.particles();

    // Draw each particle from the flat buffers
    let mut visible = 0;
    for i in 0..model.store.len() {
        let point = vec3(positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2]);

        if let Some((screen, scale)) = model.camera.world_to_screen(point, window_rect) {
            // Skip points that project outside the window
            if screen.x.abs() > window_rect.w() / 2.0 + 10.0
                || screen.y.abs() > window_rect.h() / 2.0 + 10.0
            {
                continue;
            }

            draw.ellipse()
                .x_y(screen.x, screen.y)
                .radius((sizes[i] * scale).max(0.5))
                .color(srgba(
                    colors[i * 3],
                    colors[i * 3 + 1],
                    colors[i * 3 + 2],
                    particles[i].opacity,
                ));
            visible += 1;
        }
    }

    // Track visible particle count for debug info
    if model.params.show_debug {
        let mut visible_particles = model.debug_info.visible_particles.lock().unwrap();
        *visible_particles = visible;
    }

    // Mark the attraction point so the pointer's pull is visible
    if let Some(point) = model.engine.control().attraction_point {
        if let Some((screen, scale)) = model.camera.world_to_screen(point, window_rect) {
            draw.ellipse()
                .x_y(screen.x, screen.y)
                .radius(model.params.safe_radius * scale)
                .no_fill()
                .stroke(srgba(1.0, 1.0, 1.0, 0.4))
                .stroke_weight(1.0);
        }
    }

    // Draw debug visualization if enabled
    if model.params.show_debug {
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            window_rect,
            model.store.len(),
            model.engine.control().active_shape,
            model.engine.control().attraction_point.is_some(),
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
