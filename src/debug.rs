/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and other debug information to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time and engine update time
 * - Number of particles actually projected on screen
 * - Parallel processing chunk size
 */

use std::sync::{Arc, Mutex};
use std::time::Duration;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub update_time: Duration,
    pub visible_particles: Arc<Mutex<usize>>,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            update_time: Duration::ZERO,
            visible_particles: Arc::new(Mutex::new(0)),
        }
    }
}
