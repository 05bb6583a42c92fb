// Single decorative particle: drifts in a straight line, fades out, and is
// re-randomized in place once it dies or leaves the canvas.

use rand::Rng;
use vecmath::{vec2_add, Vector2};

use crate::color::Hsl;
use crate::config::OverlayConfig;
use crate::random::uniform;
use crate::surface::{Bounds, Surface};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub life: f64,
    pub decay: f64,
}

impl Particle {
    pub fn new<R: Rng>(bounds: Bounds, config: &OverlayConfig, rng: &mut R) -> Particle {
        let mut p = Particle {
            pos: [0.0, 0.0],
            vel: [0.0, 0.0],
            size: config.size_range.0,
            life: 1.0,
            decay: config.decay_range.0,
        };
        p.reset(bounds, config, rng);
        p
    }

    pub fn reset<R: Rng>(&mut self, bounds: Bounds, config: &OverlayConfig, rng: &mut R) {
        let (min_vel, max_vel) = config.velocity_range;
        self.pos = [
            uniform(rng, 0.0, bounds.width),
            uniform(rng, 0.0, bounds.height),
        ];
        self.vel = [
            uniform(rng, min_vel, max_vel),
            uniform(rng, min_vel, max_vel),
        ];
        self.size = uniform(rng, config.size_range.0, config.size_range.1);
        self.decay = uniform(rng, config.decay_range.0, config.decay_range.1);
        self.life = 1.0;
    }

    /// Advances one frame. Returns true if the particle died or left the
    /// canvas and was reset.
    pub fn update<R: Rng>(&mut self, bounds: Bounds, config: &OverlayConfig, rng: &mut R) -> bool {
        self.pos = vec2_add(self.pos, self.vel);
        self.life -= self.decay;

        if self.life <= 0.0 || !bounds.contains(self.pos[0], self.pos[1]) {
            self.reset(bounds, config, rng);
            true
        } else {
            false
        }
    }

    pub fn alpha(&self, config: &OverlayConfig) -> f64 {
        self.life * config.alpha_scale
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, hue: u16, config: &OverlayConfig) {
        let color = Hsl::new(hue, config.saturation, config.lightness);
        surface.fill_circle(self.pos[0], self.pos[1], self.size, color, self.alpha(config));
    }
}
