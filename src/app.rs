/*
 * Application Module
 *
 * This module defines the main application model and logic for the particle
 * swarm. It wires the window, the egui controls, the input handlers and the
 * per-frame engine update together. Control surface calls all happen here or
 * in the input module, on the same loop as the update, so they take effect
 * atomically before the next frame.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use std::time::Instant;

use crate::camera::Camera;
use crate::debug::DebugInfo;
use crate::engine::Engine;
use crate::params::SimulationParams;
use crate::renderer;
use crate::store::ParticleStore;
use crate::themes::Theme;
use crate::ui;
use crate::{input, shapes::ShapeKind};

// Main model for the application
pub struct Model {
    pub store: ParticleStore,
    pub engine: Engine,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
    pub mouse_position: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Nanoswarm")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .mouse_exited(input::mouse_exited)
        .mouse_wheel(input::mouse_wheel)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters
    let params = SimulationParams::default();

    // Create the swarm
    let theme = Theme::Rainbow;
    let mut rng = rand::thread_rng();
    let store = ParticleStore::new(params.num_particles, theme, &mut rng)
        .expect("particle count must be non-zero");
    let engine = Engine::new(theme);

    Model {
        store,
        engine,
        params,
        egui,
        debug_info: DebugInfo::default(),
        camera: Camera::new(),
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and collect the triggered intents
    let actions = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &model.debug_info,
        model.engine.control().active_shape,
        model.engine.theme,
    );

    // Handle reset / particle count change by rebuilding the store
    if actions.reset_particles || actions.num_particles_changed {
        reset_particles(model);
    }

    // Apply shape and theme intents from the UI
    if let Some(kind) = actions.shape_request {
        let center = model.engine.control().attraction_point;
        model.engine.form_shape(kind, center, model.store.len());
    }
    if let Some(theme) = actions.theme_request {
        let mut rng = rand::thread_rng();
        model.engine.change_theme(theme, &mut model.store, &mut rng);
    }

    // Only advance the simulation if it is not paused
    if !model.params.pause_simulation {
        let start = Instant::now();
        model.engine.update(&mut model.store, &model.params);
        model.debug_info.update_time = start.elapsed();
    }
}

// Rebuild the store at the requested count, keeping the active theme and
// regenerating any active shape's targets so they stay index-aligned
fn reset_particles(model: &mut Model) {
    let mut rng = rand::thread_rng();
    model.store = ParticleStore::new(model.params.num_particles, model.engine.theme, &mut rng)
        .expect("particle count must be non-zero");

    let active = model.engine.control().active_shape;
    if active != ShapeKind::Free {
        let center = model.engine.control().attraction_point;
        model.engine.form_shape(active, center, model.store.len());
    }
}
