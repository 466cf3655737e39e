/*
 * Input Module
 *
 * This module handles user input events for the particle swarm and turns
 * them into control surface calls:
 * - Pointer movement sets the attraction point (lifted to 3D by the camera)
 * - Pointer leaving the window releases the attraction point
 * - Left drag orbits the camera, mouse wheel dollies
 * - Space cycles shapes, digits lock a specific shape, F releases,
 *   T cycles the color theme, P pauses
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, MouseScrollDelta, TouchPhase};

use crate::app::Model;
use crate::shapes::{ShapeKind, SHAPE_CYCLE};

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let new_pos = Vec2::new(pos.x, pos.y);

    if model.camera.is_dragging {
        // Orbiting: suspend attraction while the camera moves
        model.camera.drag(new_pos);
        model.engine.set_attraction_point(None);
    } else if !model.egui.ctx().is_pointer_over_area() {
        // Lift the pointer onto the camera-facing plane through the origin
        let world = model.camera.screen_to_world(new_pos, app.window_rect());
        model.engine.set_attraction_point(Some(world));
    }

    // Always update the stored mouse position
    model.mouse_position = new_pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        // Check if the click is on the UI before starting camera drag
        if !model.egui.ctx().is_pointer_over_area() {
            model.camera.start_drag(model.mouse_position);
        }
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.camera.end_drag();
    }
}

// Pointer left the window: release the swarm
pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.engine.set_attraction_point(None);
}

// Mouse wheel event handler for dollying
pub fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => {
            model.camera.zoom(vec2(x, y));
        }
        MouseScrollDelta::PixelDelta(pos) => {
            model.camera.zoom(vec2(pos.x as f32, pos.y as f32) * 0.01);
        }
    }
}

// Keyboard shape/theme intents
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    let count = model.store.len();
    // Shapes form around the pointer when it is active
    let center = model.engine.control().attraction_point;

    match key {
        Key::Space => model.engine.cycle_shape(center, count),
        Key::F | Key::Escape => model.engine.form_shape(ShapeKind::Free, None, count),
        Key::Key1 => model.engine.form_shape(SHAPE_CYCLE[0], center, count),
        Key::Key2 => model.engine.form_shape(SHAPE_CYCLE[1], center, count),
        Key::Key3 => model.engine.form_shape(SHAPE_CYCLE[2], center, count),
        Key::Key4 => model.engine.form_shape(SHAPE_CYCLE[3], center, count),
        Key::Key5 => model.engine.form_shape(SHAPE_CYCLE[4], center, count),
        Key::T => {
            let next = model.engine.theme.next();
            let mut rng = rand::thread_rng();
            model.engine.change_theme(next, &mut model.store, &mut rng);
        }
        Key::P => model.params.pause_simulation = !model.params.pause_simulation,
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Pass events to egui
    model.egui.handle_raw_event(event);
}
