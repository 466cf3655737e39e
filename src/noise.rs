/*
 * Noise Module
 *
 * This module provides the deterministic pseudo-noise field that drives the
 * ambient motion of the swarm. It is a cheap product of three trigonometric
 * waves over position and simulation time, not a gradient noise - the goal
 * is organic-looking drift, not statistical quality.
 */

// Evaluate the flow field at a scaled position and simulation time.
// Returns a value in [-1, 1]. Callers decorrelate the three axes by
// permuting the coordinates and offsetting `t` per axis.
#[inline]
pub fn flow_noise(x: f32, y: f32, z: f32, t: f32) -> f32 {
    (x * 0.5 + t * 0.3).sin() * (y * 0.5 + t * 0.2).cos() * (z * 0.3 + t * 0.15).sin()
}
