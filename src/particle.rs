/*
 * Particle Module
 *
 * This module defines the Particle struct, the unit of simulation state.
 * A particle is a point in 3D with a velocity, a theme-sampled color and a
 * cosmetic size/opacity. All forces are applied by the engine; the particle
 * itself only knows how to spawn with randomized initial state.
 */

use nannou::prelude::*;
use rand::Rng;

// Spawn volume: particles start inside +-SPAWN_EXTENT/2 on x/y and
// +-SPAWN_DEPTH/2 on z
pub const SPAWN_EXTENT: f32 = 100.0;
pub const SPAWN_DEPTH: f32 = 30.0;

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub color: Rgb,
    pub size: f32,
    pub opacity: f32,
}

impl Particle {
    // Spawn a particle at a random position inside the bounded volume with
    // a small random drift velocity. The color comes from the active theme.
    pub fn new(color: Rgb, rng: &mut impl Rng) -> Self {
        let position = vec3(
            rng.gen_range(-0.5..0.5) * SPAWN_EXTENT,
            rng.gen_range(-0.5..0.5) * SPAWN_EXTENT,
            rng.gen_range(-0.5..0.5) * SPAWN_DEPTH,
        );

        let velocity = vec3(
            rng.gen_range(-0.5..0.5) * 0.25,
            rng.gen_range(-0.5..0.5) * 0.25,
            rng.gen_range(-0.5..0.5) * 0.12,
        );

        Self {
            position,
            velocity,
            color,
            size: rng.gen_range(0.5..0.9),
            opacity: rng.gen_range(0.85..1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_inside_the_bounded_volume() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let p = Particle::new(rgb(1.0, 1.0, 1.0), &mut rng);
            assert!(p.position.x.abs() <= SPAWN_EXTENT / 2.0);
            assert!(p.position.y.abs() <= SPAWN_EXTENT / 2.0);
            assert!(p.position.z.abs() <= SPAWN_DEPTH / 2.0);
            assert!(p.size > 0.0);
            assert!(p.opacity > 0.0 && p.opacity <= 1.0);
        }
    }
}
