/*
 * Shape Generator Module
 *
 * This module produces the target point clouds the swarm forms into.
 * Each generator maps (particle index, count) to a 3D point; the sequences
 * are pure and deterministic so a formation can be recomputed for any
 * particle count. Translation to a requested center is the caller's job.
 */

use nannou::prelude::*;

// Default shape dimensions, in world units
pub const SPHERE_RADIUS: f32 = 30.0;
pub const CUBE_SIZE: f32 = 50.0;
pub const HELIX_RADIUS: f32 = 20.0;
pub const HELIX_HEIGHT: f32 = 60.0;
pub const HELIX_TURNS: f32 = 3.0;
pub const RING_MAJOR_RADIUS: f32 = 30.0;
pub const RING_MINOR_RADIUS: f32 = 10.0;
pub const HEART_SCALE: f32 = 20.0;

// The formation a swarm can be asked to take, or Free for no formation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Free,
    Sphere,
    Cube,
    Helix,
    Ring,
    Heart,
}

// Fixed order used by the "cycle to next shape" intent
pub const SHAPE_CYCLE: [ShapeKind; 5] = [
    ShapeKind::Sphere,
    ShapeKind::Cube,
    ShapeKind::Helix,
    ShapeKind::Ring,
    ShapeKind::Heart,
];

impl ShapeKind {
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Free => "Free",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cube => "Cube",
            ShapeKind::Helix => "Helix",
            ShapeKind::Ring => "Ring",
            ShapeKind::Heart => "Heart",
        }
    }

    // The shape following this one in the cycle order
    pub fn next(self) -> ShapeKind {
        match SHAPE_CYCLE.iter().position(|&k| k == self) {
            Some(i) => SHAPE_CYCLE[(i + 1) % SHAPE_CYCLE.len()],
            None => SHAPE_CYCLE[0],
        }
    }
}

// Generate one target point per particle index for the given shape.
// Free yields no targets.
pub fn generate(kind: ShapeKind, count: usize) -> Vec<Vec3> {
    match kind {
        ShapeKind::Free => Vec::new(),
        ShapeKind::Sphere => sphere(count, SPHERE_RADIUS),
        ShapeKind::Cube => cube(count, CUBE_SIZE),
        ShapeKind::Helix => helix(count, HELIX_RADIUS, HELIX_HEIGHT),
        ShapeKind::Ring => ring(count, RING_MAJOR_RADIUS, RING_MINOR_RADIUS),
        ShapeKind::Heart => heart(count, HEART_SCALE),
    }
}

// Fibonacci sphere: golden-angle azimuth steps give near-uniform coverage
// without clustering at the poles.
fn sphere(count: usize, radius: f32) -> Vec<Vec3> {
    let golden_ratio = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let angle_increment = PI * 2.0 * golden_ratio;

    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let inclination = (1.0 - 2.0 * t).acos();
            let azimuth = angle_increment * i as f32;

            vec3(
                radius * inclination.sin() * azimuth.cos(),
                radius * inclination.sin() * azimuth.sin(),
                radius * inclination.cos(),
            )
        })
        .collect()
}

// Lattice fill of a cube. The lattice is sized to the cube root of the
// count, so a non-perfect-cube count leaves the last layer partly filled.
fn cube(count: usize, size: f32) -> Vec<Vec3> {
    let per_edge = (count as f32).cbrt().ceil() as usize;
    let spacing = size / per_edge as f32;
    let offset = size / 2.0;

    (0..count)
        .map(|i| {
            vec3(
                (i % per_edge) as f32 * spacing - offset,
                ((i / per_edge) % per_edge) as f32 * spacing - offset,
                (i / (per_edge * per_edge)) as f32 * spacing - offset,
            )
        })
        .collect()
}

// Vertically centered spiral
fn helix(count: usize, radius: f32, height: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let angle = t * PI * 2.0 * HELIX_TURNS;

            vec3(radius * angle.cos(), (t - 0.5) * height, radius * angle.sin())
        })
        .collect()
}

// Torus. The minor angle walks the index times 13 modulo the count so
// consecutive indices land on different tube positions instead of banding.
fn ring(count: usize, major_radius: f32, minor_radius: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let u = i as f32 / count as f32 * PI * 2.0;
            let v = ((i * 13) % count) as f32 / count as f32 * PI * 2.0;

            vec3(
                (major_radius + minor_radius * v.cos()) * u.cos(),
                (major_radius + minor_radius * v.cos()) * u.sin(),
                minor_radius * v.sin(),
            )
        })
        .collect()
}

// Parametric heart curve with a shallow z wave for depth
fn heart(count: usize, scale: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32 * PI * 2.0;

            let x = scale * 16.0 * t.sin().powi(3);
            let y = scale
                * (13.0 * t.cos()
                    - 5.0 * (2.0 * t).cos()
                    - 2.0 * (3.0 * t).cos()
                    - (4.0 * t).cos());
            let z = scale * t.sin() * t.cos() * 3.0;

            vec3(x / 16.0, y / 16.0, z / 16.0)
        })
        .collect()
}
