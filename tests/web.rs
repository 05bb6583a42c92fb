//! Browser tests for the canvas-backed overlay. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use protein_particles::{normalize_pdb_id, ParticleOverlay, ProteinInfoView};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
}

#[wasm_bindgen_test]
fn overlay_builds_default_particle_count() {
    let overlay = ParticleOverlay::new(canvas(200, 100), None).unwrap();
    assert_eq!(overlay.particle_count(), 80);
    assert_eq!(overlay.hue(), 0);
    assert_eq!(overlay.hue_interval_ms(), 50);
    assert!(overlay.particles_enabled());
}

#[wasm_bindgen_test]
fn overlay_accepts_partial_config() {
    let overlay =
        ParticleOverlay::new(canvas(200, 100), Some(r#"{ "particle_count": 5 }"#.to_owned()))
            .unwrap();
    assert_eq!(overlay.particle_count(), 5);
}

#[wasm_bindgen_test]
fn overlay_rejects_invalid_config() {
    let result = ParticleOverlay::new(canvas(200, 100), Some(r#"{ "hue_step": 400 }"#.to_owned()));
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn frames_survive_resize_to_zero_and_back() {
    let mut overlay = ParticleOverlay::new(canvas(200, 100), None).unwrap();
    for _ in 0..10 {
        overlay.frame();
    }
    overlay.resize(0, 0);
    overlay.frame();
    overlay.set_particles_enabled(false);
    overlay.frame();
    overlay.set_particles_enabled(true);
    overlay.resize(300, 150);
    overlay.reinitialize();
    overlay.frame();
    assert_eq!(overlay.particle_count(), 80);
}

#[wasm_bindgen_test]
fn hue_and_spin_are_driven_by_host_calls() {
    let mut overlay = ParticleOverlay::new(canvas(10, 10), None).unwrap();
    overlay.tick_hue();
    assert_eq!(overlay.hue(), 2);

    assert_eq!(overlay.spin_frame(100.0), None);
    overlay.start_spin(100.0);
    assert_eq!(overlay.spin_frame(120.0), Some(0.5));
    overlay.stop_spin();
    assert!(!overlay.is_spinning());
}

#[wasm_bindgen_test]
fn pdb_helpers_round_out_the_viewer() {
    assert_eq!(normalize_pdb_id(" 1crn ").unwrap(), "1CRN");
    assert!(normalize_pdb_id("abc").is_err());

    let info = ProteinInfoView::parse("1crn", r#"{ "struct": { "title": "CRAMBIN" } }"#).unwrap();
    assert_eq!(info.title(), "CRAMBIN");
    assert_eq!(info.resolution(), "N/A");
}
