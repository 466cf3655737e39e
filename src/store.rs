/*
 * Particle Store Module
 *
 * This module owns the authoritative per-particle state and the flat f32
 * buffers the renderer consumes. Buffer slot 3i..3i+3 always mirrors
 * particle i: mutations go through the particles slice and are written back
 * with flush_positions / flush_colors before the changed flag is raised.
 * The particle count is fixed at creation; changing it means rebuilding the
 * store.
 */

use rand::Rng;
use thiserror::Error;

use crate::particle::Particle;
use crate::themes::Theme;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("particle count must be at least 1, got 0")]
    EmptyStore,
}

pub struct ParticleStore {
    particles: Vec<Particle>,
    positions: Vec<f32>,
    colors: Vec<f32>,
    sizes: Vec<f32>,
    buffers_changed: bool,
}

impl ParticleStore {
    // Populate `count` particles with randomized initial state and fill the
    // flat buffers. Fails fast on a zero count rather than starting an
    // empty simulation.
    pub fn new(count: usize, theme: Theme, rng: &mut impl Rng) -> Result<Self, StoreError> {
        if count == 0 {
            return Err(StoreError::EmptyStore);
        }

        let particles: Vec<Particle> = (0..count)
            .map(|_| Particle::new(theme.sample(rng), rng))
            .collect();

        let mut store = Self {
            particles,
            positions: vec![0.0; count * 3],
            colors: vec![0.0; count * 3],
            sizes: vec![0.0; count],
            buffers_changed: false,
        };

        for (i, particle) in store.particles.iter().enumerate() {
            store.sizes[i] = particle.size;
        }
        store.flush_positions();
        store.flush_colors();

        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    // Renderer-facing buffers, index-aligned with the particle collection
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    // Mirror every particle position into the position buffer and mark the
    // buffers changed for the renderer
    pub fn flush_positions(&mut self) {
        debug_assert_eq!(self.positions.len(), self.particles.len() * 3);
        for (i, particle) in self.particles.iter().enumerate() {
            self.positions[i * 3] = particle.position.x;
            self.positions[i * 3 + 1] = particle.position.y;
            self.positions[i * 3 + 2] = particle.position.z;
        }
        self.buffers_changed = true;
    }

    // Mirror every particle color into the color buffer
    pub fn flush_colors(&mut self) {
        debug_assert_eq!(self.colors.len(), self.particles.len() * 3);
        for (i, particle) in self.particles.iter().enumerate() {
            self.colors[i * 3] = particle.color.red;
            self.colors[i * 3 + 1] = particle.color.green;
            self.colors[i * 3 + 2] = particle.color.blue;
        }
        self.buffers_changed = true;
    }

    // Resample every particle's color from the theme, immediately, so a
    // theme switch recolors the existing swarm rather than only future
    // particles
    pub fn recolor(&mut self, theme: Theme, rng: &mut impl Rng) {
        for particle in &mut self.particles {
            particle.color = theme.sample(rng);
        }
        self.flush_colors();
    }

    // True once per frame after the engine has written new data; the
    // renderer re-uploads on true
    pub fn take_buffers_changed(&mut self) -> bool {
        std::mem::take(&mut self.buffers_changed)
    }
}
