/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the particle swarm. These parameters can be
 * modified through the UI. It also provides methods for parameter change
 * detection and management to improve separation of concerns.
 */

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub num_particles: usize,
    pub max_speed: f32,
    pub damping: f32,
    // Ambient flow
    pub noise_strength: f32,
    pub noise_scale: f32,
    // Pointer attraction
    pub attraction_strength: f32,
    pub safe_radius: f32,
    pub separation_radius: f32,
    pub separation_strength: f32,
    // Shape formation
    pub pull_strength: f32,
    // Soft boundary
    pub boundary: f32,
    pub boundary_z: f32,
    pub boundary_push: f32,
    pub show_debug: bool,
    pub pause_simulation: bool,
    // Performance settings
    pub enable_parallel: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_particles: usize,
    max_speed: f32,
    damping: f32,
    noise_strength: f32,
    noise_scale: f32,
    attraction_strength: f32,
    safe_radius: f32,
    separation_radius: f32,
    separation_strength: f32,
    pull_strength: f32,
    boundary: f32,
    boundary_z: f32,
    boundary_push: f32,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_particles: 1000,
            max_speed: 1.5,
            damping: 0.96,
            noise_strength: 0.10,
            noise_scale: 0.018,
            attraction_strength: 0.05,
            safe_radius: 5.0,
            separation_radius: 2.0,
            separation_strength: 0.02,
            pull_strength: 0.03,
            boundary: 60.0,
            boundary_z: 15.0,
            boundary_push: 0.025,
            show_debug: false,
            pause_simulation: false,
            enable_parallel: true,
            // Initialize with no previous values
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_particles: self.num_particles,
            max_speed: self.max_speed,
            damping: self.damping,
            noise_strength: self.noise_strength,
            noise_scale: self.noise_scale,
            attraction_strength: self.attraction_strength,
            safe_radius: self.safe_radius,
            separation_radius: self.separation_radius,
            separation_strength: self.separation_strength,
            pull_strength: self.pull_strength,
            boundary: self.boundary,
            boundary_z: self.boundary_z,
            boundary_push: self.boundary_push,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        });
    }

    // Check if any parameters have changed since the last snapshot.
    // Returns (num_particles_changed, any_ui_changed).
    pub fn detect_changes(&self) -> (bool, bool) {
        let mut num_particles_changed = false;
        let mut ui_changed = false;

        // If we don't have previous values, nothing has changed
        if let Some(prev) = &self.previous_values {
            if self.num_particles != prev.num_particles {
                num_particles_changed = true;
                ui_changed = true;
            }

            if self.max_speed != prev.max_speed
                || self.damping != prev.damping
                || self.noise_strength != prev.noise_strength
                || self.noise_scale != prev.noise_scale
                || self.attraction_strength != prev.attraction_strength
                || self.safe_radius != prev.safe_radius
                || self.separation_radius != prev.separation_radius
                || self.separation_strength != prev.separation_strength
                || self.pull_strength != prev.pull_strength
                || self.boundary != prev.boundary
                || self.boundary_z != prev.boundary_z
                || self.boundary_push != prev.boundary_push
                || self.show_debug != prev.show_debug
                || self.pause_simulation != prev.pause_simulation
            {
                ui_changed = true;
            }
        }

        (num_particles_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_particles_range() -> std::ops::RangeInclusive<usize> {
        100..=10000
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        0.2..=5.0
    }

    pub fn get_damping_range() -> std::ops::RangeInclusive<f32> {
        0.80..=0.999
    }

    pub fn get_strength_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.2
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        0.5..=20.0
    }

    pub fn get_boundary_range() -> std::ops::RangeInclusive<f32> {
        20.0..=150.0
    }
}
