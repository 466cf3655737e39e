/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting simulation parameters
 * and surfaces the shape/theme intents the control surface consumes.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::shapes::{ShapeKind, SHAPE_CYCLE};
use crate::themes::Theme;

// Intents collected from one UI pass, applied by the app module after the
// egui frame ends
#[derive(Default)]
pub struct UiActions {
    pub reset_particles: bool,
    pub num_particles_changed: bool,
    pub ui_changed: bool,
    pub shape_request: Option<ShapeKind>,
    pub theme_request: Option<Theme>,
}

// Update the UI and report which intents the user triggered
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    active_shape: ShapeKind,
    active_theme: Theme,
) -> UiActions {
    let mut actions = UiActions::default();

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Swarm Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Particles", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.num_particles,
                        SimulationParams::get_num_particles_range(),
                    )
                    .text("Particle Count"),
                );

                if ui.button("Reset Particles").clicked() {
                    actions.reset_particles = true;
                }

                ui.add(
                    egui::Slider::new(&mut params.max_speed, SimulationParams::get_max_speed_range())
                        .text("Max Speed"),
                );
                ui.add(
                    egui::Slider::new(&mut params.damping, SimulationParams::get_damping_range())
                        .text("Damping"),
                );
            });

            ui.collapsing("Forces", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.noise_strength,
                        SimulationParams::get_strength_range(),
                    )
                    .text("Noise Strength"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.attraction_strength,
                        SimulationParams::get_strength_range(),
                    )
                    .text("Attraction Strength"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.pull_strength,
                        SimulationParams::get_strength_range(),
                    )
                    .text("Shape Pull Strength"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.separation_strength,
                        SimulationParams::get_strength_range(),
                    )
                    .text("Separation Strength"),
                );
                ui.add(
                    egui::Slider::new(&mut params.safe_radius, SimulationParams::get_radius_range())
                        .text("Orbit Radius"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.separation_radius,
                        SimulationParams::get_radius_range(),
                    )
                    .text("Separation Radius"),
                );
                ui.add(
                    egui::Slider::new(&mut params.boundary, SimulationParams::get_boundary_range())
                        .text("Boundary"),
                );
            });

            ui.collapsing("Shape", |ui| {
                ui.horizontal_wrapped(|ui| {
                    if ui
                        .selectable_label(active_shape == ShapeKind::Free, ShapeKind::Free.label())
                        .clicked()
                    {
                        actions.shape_request = Some(ShapeKind::Free);
                    }
                    for kind in SHAPE_CYCLE {
                        if ui.selectable_label(active_shape == kind, kind.label()).clicked() {
                            actions.shape_request = Some(kind);
                        }
                    }
                });
                ui.label("Space cycles shapes, F releases");
            });

            ui.collapsing("Theme", |ui| {
                ui.horizontal_wrapped(|ui| {
                    for theme in Theme::ALL {
                        if ui.selectable_label(active_theme == theme, theme.label()).clicked() {
                            actions.theme_request = Some(theme);
                        }
                    }
                });
            });

            ui.collapsing("Performance", |ui| {
                ui.checkbox(&mut params.enable_parallel, "Enable Parallel Processing");

                ui.separator();

                // Performance metrics
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!(
                    "Frame time: {:.2} ms",
                    debug_info.frame_time.as_secs_f64() * 1000.0
                ));
                ui.label(format!(
                    "Update time: {:.2} ms",
                    debug_info.update_time.as_secs_f64() * 1000.0
                ));
                ui.label(format!("Total Particles: {}", params.num_particles));
                ui.label(format!(
                    "Visible Particles: {}",
                    *debug_info.visible_particles.lock().unwrap()
                ));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // Detect parameter changes
    let (num_particles_changed, ui_changed) = params.detect_changes();
    actions.num_particles_changed = num_particles_changed;
    actions.ui_changed = ui_changed || actions.shape_request.is_some() || actions.theme_request.is_some();

    actions
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    num_particles: usize,
    active_shape: ShapeKind,
    attracting: bool,
) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 210.0;
    let panel_height = line_height * 6.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!(
            "Update time: {:.2} ms",
            debug_info.update_time.as_secs_f64() * 1000.0
        ),
        format!("Particles: {}", num_particles),
        format!("Shape: {}", active_shape.label()),
        format!("Attracting: {}", if attracting { "yes" } else { "no" }),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
