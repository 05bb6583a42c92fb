mod utils;

pub mod color;
pub mod config;
pub mod error;
pub mod hue;
pub mod particle;
pub mod particle_system;
pub mod pdb;
pub mod protein_info;
pub mod random;
pub mod spin;
pub mod surface;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys::{console, HtmlCanvasElement};

pub use config::OverlayConfig;
pub use error::OverlayError;
pub use hue::HueCycler;
pub use particle::Particle;
pub use particle_system::ParticleSystem;
pub use pdb::PdbId;
pub use protein_info::ProteinInfo;
pub use spin::AutoSpin;
pub use surface::{Bounds, CanvasSurface, Surface};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

/// Decorative particle layer drawn over the structure viewer, plus the
/// viewer's auto-spin throttle. The page drives it: `frame` from
/// requestAnimationFrame, `tick_hue` from an interval of `hue_interval_ms`.
/// Stopping either driver is all that is needed to pause it.
#[wasm_bindgen]
pub struct ParticleOverlay {
    surface: CanvasSurface,
    system: ParticleSystem<StdRng>,
    hue: HueCycler,
    spin: AutoSpin,
    particles_enabled: bool,
}

#[wasm_bindgen]
impl ParticleOverlay {
    pub fn new(
        canvas: HtmlCanvasElement,
        config_json: Option<String>,
    ) -> Result<ParticleOverlay, JsValue> {
        let config = match config_json {
            Some(json) => OverlayConfig::from_json(&json)?,
            None => OverlayConfig::default(),
        };
        let surface = CanvasSurface::new(canvas)?;
        let hue = HueCycler::new(config.hue_step);
        let spin = AutoSpin::new(config.spin_step_degrees, config.spin_min_frame_ms);
        let count = config.particle_count;

        let mut system = ParticleSystem::new(config, StdRng::from_entropy());
        system.initialize(&surface, count);
        log::info!(
            "particle overlay ready: {} particles on {}x{} canvas",
            count,
            surface.width(),
            surface.height()
        );

        Ok(ParticleOverlay {
            surface,
            system,
            hue,
            spin,
            particles_enabled: true,
        })
    }

    pub fn frame(&mut self) {
        let _timer = if self.system.config().profile_frames {
            Some(Timer::new("ParticleOverlay::frame"))
        } else {
            None
        };
        self.system
            .tick(&mut self.surface, self.hue.hue(), self.particles_enabled);
    }

    pub fn tick_hue(&mut self) {
        self.hue.tick();
    }

    pub fn hue(&self) -> u16 {
        self.hue.hue()
    }

    pub fn hue_interval_ms(&self) -> u32 {
        self.system.config().hue_interval_ms
    }

    pub fn set_particles_enabled(&mut self, enabled: bool) {
        self.particles_enabled = enabled;
    }

    pub fn particles_enabled(&self) -> bool {
        self.particles_enabled
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("particle canvas resized to {}x{}; nothing will be visible", width, height);
        } else {
            log::info!("particle canvas resized to {}x{}", width, height);
        }
        self.surface.resize(width, height);
        self.system.on_resize(width, height);
    }

    pub fn reinitialize(&mut self) {
        let count = self.system.config().particle_count;
        self.system.initialize(&self.surface, count);
        log::info!("particles reinitialized: {}", count);
    }

    pub fn particle_count(&self) -> usize {
        self.system.len()
    }

    pub fn start_spin(&mut self, now_ms: f64) {
        self.spin.start(now_ms);
    }

    pub fn stop_spin(&mut self) {
        self.spin.stop();
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_spinning()
    }

    /// Degrees to rotate the viewer about y for this animation frame, if any.
    pub fn spin_frame(&mut self, now_ms: f64) -> Option<f64> {
        self.spin.frame(now_ms)
    }
}

#[wasm_bindgen]
pub fn normalize_pdb_id(input: &str) -> Result<String, JsValue> {
    Ok(PdbId::parse(input)?.to_string())
}

#[wasm_bindgen]
pub fn structure_url(input: &str) -> Result<String, JsValue> {
    Ok(PdbId::parse(input)?.structure_url())
}

#[wasm_bindgen]
pub fn entry_url(input: &str) -> Result<String, JsValue> {
    Ok(PdbId::parse(input)?.entry_url())
}

#[wasm_bindgen]
pub fn screenshot_file_name(input: &str) -> Result<String, JsValue> {
    Ok(PdbId::parse(input)?.screenshot_file_name())
}

#[wasm_bindgen]
pub fn default_pdb_id() -> String {
    pdb::DEFAULT_PRESET.id.to_owned()
}

#[wasm_bindgen]
pub fn default_protein_name() -> String {
    pdb::DEFAULT_PRESET.name.to_owned()
}

/// Info panel fields for JS, already formatted for display.
#[wasm_bindgen]
pub struct ProteinInfoView {
    info: ProteinInfo,
}

#[wasm_bindgen]
impl ProteinInfoView {
    pub fn parse(pdb_id: &str, entry_json: &str) -> Result<ProteinInfoView, JsValue> {
        let id = PdbId::parse(pdb_id)?;
        let info = ProteinInfo::from_entry_json(id, entry_json)?;
        Ok(ProteinInfoView { info })
    }

    #[wasm_bindgen(getter)]
    pub fn pdb_id(&self) -> String {
        self.info.pdb_id.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.info.title.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn method(&self) -> String {
        self.info.method.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn resolution(&self) -> String {
        self.info.resolution_text()
    }

    #[wasm_bindgen(getter)]
    pub fn weight(&self) -> String {
        self.info.weight_text()
    }

    #[wasm_bindgen(getter)]
    pub fn keywords(&self) -> String {
        self.info.keywords.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn published(&self) -> String {
        self.info.published.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn first_author(&self) -> String {
        self.info.first_author.clone()
    }
}
