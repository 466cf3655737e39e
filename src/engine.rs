/*
 * Simulation Engine Module
 *
 * This module advances the particle store by one frame. It owns the control
 * state (attraction point, active shape, simulation clock) and exposes the
 * control surface that input and UI collaborators call between frames.
 *
 * Per particle, each frame applies in order: ambient noise flow, then either
 * shape pursuit or pointer attraction (never both), a speed clamp, damping,
 * Euler integration and a soft boundary nudge. The pairwise separation pass
 * inside attraction mode is O(N^2) and dominates the frame cost; the rayon
 * path chunks it across threads while reading a position snapshot, which
 * keeps frames deterministic for a given control state.
 */

use nannou::prelude::*;
use rand::Rng;
use rayon::prelude::*;

use crate::noise::flow_noise;
use crate::params::SimulationParams;
use crate::particle::Particle;
use crate::shapes::{self, ShapeKind};
use crate::store::ParticleStore;
use crate::themes::Theme;

// Simulation clock advance per frame
pub const TIME_STEP: f32 = 0.012;

// Floor for every normalize-by-distance step, so coincident particles
// cannot produce NaN/Inf velocities
pub const MIN_DISTANCE: f32 = 1e-4;

// Noise is kept alive but weakened while steering, so formations shimmer
// instead of freezing solid
const ATTRACT_NOISE_FACTOR: f32 = 0.5;
const SHAPE_NOISE_FACTOR: f32 = 0.2;

// Shapes extend past the idle drift volume, so the boundary loosens while
// one is active instead of fighting the pull
const SHAPE_BOUNDARY_FACTOR: f32 = 1.5;

// Control state read by every frame update. Mutated only through the
// Engine's control surface; activeShape != Free implies `targets` holds
// exactly one entry per particle.
pub struct ControlState {
    pub attraction_point: Option<Vec3>,
    pub active_shape: ShapeKind,
    pub time: f32,
    targets: Vec<Vec3>,
}

impl ControlState {
    fn new() -> Self {
        Self {
            attraction_point: None,
            active_shape: ShapeKind::Free,
            time: 0.0,
            targets: Vec::new(),
        }
    }

    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }
}

pub struct Engine {
    control: ControlState,
    pub theme: Theme,
}

impl Engine {
    pub fn new(theme: Theme) -> Self {
        Self {
            control: ControlState::new(),
            theme,
        }
    }

    pub fn control(&self) -> &ControlState {
        &self.control
    }

    // ---- Control surface -------------------------------------------------

    // Set or clear the point particles are drawn toward while no shape is
    // active
    pub fn set_attraction_point(&mut self, point: Option<Vec3>) {
        self.control.attraction_point = point;
    }

    // Lock the swarm onto a shape, or release it with ShapeKind::Free.
    // The target list is regenerated for the current particle count and,
    // when a center is given, translated so the shape forms there.
    pub fn form_shape(&mut self, kind: ShapeKind, center: Option<Vec3>, count: usize) {
        self.control.active_shape = kind;
        self.control.targets = shapes::generate(kind, count);

        if let Some(center) = center {
            for target in &mut self.control.targets {
                *target += center;
            }
        }
    }

    // Advance to the next shape in the fixed cycle order
    pub fn cycle_shape(&mut self, center: Option<Vec3>, count: usize) {
        self.form_shape(self.control.active_shape.next(), center, count);
    }

    // Switch theme and recolor every existing particle immediately
    pub fn change_theme(
        &mut self,
        theme: Theme,
        store: &mut ParticleStore,
        rng: &mut impl Rng,
    ) {
        self.theme = theme;
        store.recolor(theme, rng);
    }

    // ---- Per-frame update ------------------------------------------------

    pub fn update(&mut self, store: &mut ParticleStore, params: &SimulationParams) {
        self.control.time += TIME_STEP;

        let shape_active = self.control.active_shape != ShapeKind::Free;
        if shape_active {
            debug_assert_eq!(
                self.control.targets.len(),
                store.len(),
                "shape target list out of sync with particle count"
            );
        }

        let time = self.control.time;
        let attraction = if shape_active {
            // Shape pursuit takes strict precedence over pointer attraction
            None
        } else {
            self.control.attraction_point
        };
        let targets: &[Vec3] = &self.control.targets;

        let noise_strength = params.noise_strength
            * if shape_active {
                SHAPE_NOISE_FACTOR
            } else if attraction.is_some() {
                ATTRACT_NOISE_FACTOR
            } else {
                1.0
            };

        let (boundary, boundary_z) = if shape_active {
            (
                params.boundary * SHAPE_BOUNDARY_FACTOR,
                params.boundary_z * SHAPE_BOUNDARY_FACTOR,
            )
        } else {
            (params.boundary, params.boundary_z)
        };

        // Snapshot positions before the pass; the separation math reads
        // neighbors from here, so the result is independent of update order
        let positions: Vec<Vec3> = store.particles().iter().map(|p| p.position).collect();
        let positions: &[Vec3] = &positions;

        let step = |i: usize, particle: &mut Particle| {
            let p = particle.position;
            let s = params.noise_scale;

            // 1. Ambient flow: decorrelate the axes by permuting the
            // coordinates and offsetting the time phase
            particle.velocity.x +=
                flow_noise(p.x * s, p.y * s, p.z * s, time) * noise_strength;
            particle.velocity.y +=
                flow_noise(p.y * s, p.x * s, p.z * s, time + 100.0) * noise_strength;
            particle.velocity.z +=
                flow_noise(p.z * s, p.x * s, p.y * s, time + 200.0) * noise_strength * 0.5;

            // 2. Shape pursuit or pointer attraction, never both
            if shape_active {
                particle.velocity += (targets[i] - p) * params.pull_strength;
            } else if let Some(point) = attraction {
                let to_point = point - p;
                let dist = to_point.length().max(MIN_DISTANCE);

                if dist > params.safe_radius {
                    // Scaled unit step toward the pointer
                    particle.velocity += to_point / dist * params.attraction_strength;
                } else {
                    // Inside the safe radius, orbit instead of collapsing
                    // onto the point
                    particle.velocity +=
                        vec3(-to_point.y, to_point.x, 0.0) / dist * params.attraction_strength;
                }

                // Pairwise separation keeps the gathered swarm from
                // clumping; repulsion grows as neighbors close in
                for (j, other) in positions.iter().enumerate() {
                    if j == i {
                        continue;
                    }
                    let away = p - *other;
                    let d = away.length();
                    if d < params.separation_radius {
                        let d = d.max(MIN_DISTANCE);
                        particle.velocity += away / d * (params.separation_strength / d);
                    }
                }
            }

            // 3. Speed clamp, preserving direction
            let speed = particle.velocity.length();
            if speed > params.max_speed {
                particle.velocity *= params.max_speed / speed;
            }

            // 4. Unconditional damping
            particle.velocity *= params.damping;

            // 5. Integrate, unit timestep
            particle.position += particle.velocity;

            // 6. Soft boundary: a restoring nudge per axis, not a clamp
            if particle.position.x.abs() > boundary {
                particle.velocity.x -= particle.position.x.signum() * params.boundary_push;
            }
            if particle.position.y.abs() > boundary {
                particle.velocity.y -= particle.position.y.signum() * params.boundary_push;
            }
            if particle.position.z.abs() > boundary_z {
                particle.velocity.z -= particle.position.z.signum() * params.boundary_push;
            }
        };

        if params.enable_parallel {
            // Process particles in parallel chunks to reduce
            // synchronization overhead
            let chunk_size =
                std::cmp::max(store.len() / rayon::current_num_threads(), 1);

            store
                .particles_mut()
                .par_chunks_mut(chunk_size)
                .enumerate()
                .for_each(|(chunk_idx, chunk)| {
                    for (i_in_chunk, particle) in chunk.iter_mut().enumerate() {
                        step(chunk_idx * chunk_size + i_in_chunk, particle);
                    }
                });
        } else {
            for (i, particle) in store.particles_mut().iter_mut().enumerate() {
                step(i, particle);
            }
        }

        // 7. Mirror the new positions into the renderer buffer and mark it
        // changed
        store.flush_positions();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn quiet_params() -> SimulationParams {
        // No noise and no parallelism: every assertion below is exact
        let mut params = SimulationParams::default();
        params.noise_strength = 0.0;
        params.enable_parallel = false;
        params
    }

    #[test]
    fn form_shape_free_is_idempotent() {
        let mut engine = Engine::new(Theme::Rainbow);

        engine.form_shape(ShapeKind::Free, None, 100);
        assert_eq!(engine.control().active_shape, ShapeKind::Free);
        assert!(engine.control().targets().is_empty());

        engine.form_shape(ShapeKind::Free, None, 100);
        assert_eq!(engine.control().active_shape, ShapeKind::Free);
        assert!(engine.control().targets().is_empty());
    }

    #[test]
    fn form_shape_builds_one_target_per_particle() {
        let mut engine = Engine::new(Theme::Rainbow);
        engine.form_shape(ShapeKind::Sphere, None, 321);
        assert_eq!(engine.control().targets().len(), 321);
    }

    #[test]
    fn form_shape_center_translates_every_target() {
        let mut engine = Engine::new(Theme::Rainbow);
        engine.form_shape(ShapeKind::Cube, None, 64);
        let base = engine.control().targets().to_vec();

        let center = vec3(10.0, -5.0, 2.0);
        engine.form_shape(ShapeKind::Cube, Some(center), 64);

        for (a, b) in base.iter().zip(engine.control().targets()) {
            assert_eq!(*a + center, *b);
        }
    }

    #[test]
    fn pursuit_closes_distance_to_target() {
        let mut rng = rng();
        let mut store = ParticleStore::new(50, Theme::Rainbow, &mut rng).unwrap();
        let mut engine = Engine::new(Theme::Rainbow);
        let params = quiet_params();

        engine.form_shape(ShapeKind::Sphere, None, store.len());
        let targets = engine.control().targets().to_vec();

        let distance = |store: &ParticleStore| -> f32 {
            store
                .particles()
                .iter()
                .zip(&targets)
                .map(|(p, t)| (p.position - *t).length())
                .sum::<f32>()
                / store.len() as f32
        };

        let before = distance(&store);
        for _ in 0..30 {
            engine.update(&mut store, &params);
        }
        let after = distance(&store);

        assert!(after < before, "pursuit diverged: {} -> {}", before, after);
    }

    #[test]
    fn speed_never_exceeds_the_clamp() {
        let mut rng = rng();
        let mut store = ParticleStore::new(100, Theme::Rainbow, &mut rng).unwrap();
        let mut engine = Engine::new(Theme::Rainbow);

        // Extreme pull to force the clamp to engage
        let mut params = quiet_params();
        params.pull_strength = 50.0;

        engine.form_shape(ShapeKind::Sphere, None, store.len());
        for _ in 0..10 {
            engine.update(&mut store, &params);
            for particle in store.particles() {
                assert!(
                    particle.velocity.length() <= params.max_speed + 1e-4,
                    "velocity escaped the clamp: {:?}",
                    particle.velocity
                );
            }
        }
    }

    #[test]
    fn coincident_particles_stay_finite() {
        let mut rng = rng();
        let mut store = ParticleStore::new(4, Theme::Rainbow, &mut rng).unwrap();
        let mut engine = Engine::new(Theme::Rainbow);
        let params = quiet_params();

        // Stack everything on the attraction point: both the attraction
        // step and the separation pass hit their distance floors
        for particle in store.particles_mut() {
            particle.position = Vec3::ZERO;
            particle.velocity = Vec3::ZERO;
        }
        engine.set_attraction_point(Some(Vec3::ZERO));

        for _ in 0..5 {
            engine.update(&mut store, &params);
        }

        for particle in store.particles() {
            assert!(particle.position.is_finite(), "position went non-finite");
            assert!(particle.velocity.is_finite(), "velocity went non-finite");
        }
    }

    #[test]
    fn attraction_is_skipped_while_a_shape_is_active() {
        let mut rng = rng();
        let mut store = ParticleStore::new(10, Theme::Rainbow, &mut rng).unwrap();
        let mut engine = Engine::new(Theme::Rainbow);
        let params = quiet_params();

        // A distant attraction point must not bend a locked formation
        engine.set_attraction_point(Some(vec3(1e4, 0.0, 0.0)));
        engine.form_shape(ShapeKind::Ring, None, store.len());

        for _ in 0..100 {
            engine.update(&mut store, &params);
        }

        // Particles settle near the ring, not off toward the point
        for (particle, target) in store.particles().iter().zip(engine.control().targets()) {
            assert!(
                (particle.position - *target).length() < shapes::RING_MAJOR_RADIUS,
                "formation was dragged off target"
            );
        }
    }
}
