// Fixed-size set of particles bound to a surface's current dimensions.

use rand::Rng;

use crate::config::OverlayConfig;
use crate::particle::Particle;
use crate::surface::{Bounds, Surface};

pub struct ParticleSystem<R: Rng> {
    particles: Vec<Particle>,
    bounds: Bounds,
    config: OverlayConfig,
    rng: R,
}

impl<R: Rng> ParticleSystem<R> {
    pub fn new(config: OverlayConfig, rng: R) -> ParticleSystem<R> {
        ParticleSystem {
            particles: Vec::new(),
            bounds: Bounds::new(0, 0),
            config,
            rng,
        }
    }

    /// Replaces every particle with `count` fresh ones sized to `surface`.
    pub fn initialize<S: Surface + ?Sized>(&mut self, surface: &S, count: usize) {
        self.bounds = Bounds::of(surface);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::new(self.bounds, &self.config, &mut self.rng);
            self.particles.push(p);
        }
    }

    /// Clears the frame, then updates and draws each particle in order when
    /// `enabled`. A disabled tick leaves every particle untouched.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S, hue: u16, enabled: bool) {
        surface.clear();
        if !enabled {
            return;
        }
        for particle in &mut self.particles {
            particle.update(self.bounds, &self.config, &mut self.rng);
            particle.draw(surface, hue, &self.config);
        }
    }

    /// New bounds only apply to future resets; live particles are not clamped.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.bounds = Bounds::new(width, height);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }
}
