// Drawing target abstraction. Particles only ever clear the frame and paint
// filled circles, so that is all a surface has to provide.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Hsl;
use crate::error::{OverlayError, Result};

pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Hsl, alpha: f64);
}

/// Pixel dimensions particles are bounded by.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: u32, height: u32) -> Bounds {
        Bounds {
            width: width as f64,
            height: height as f64,
        }
    }

    pub fn of<S: Surface + ?Sized>(surface: &S) -> Bounds {
        Bounds::new(surface.width(), surface.height())
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x < self.width && y >= 0.0 && y < self.height
    }
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // Grabs the 2d context from a canvas already on the DOM
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasSurface> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| OverlayError::Canvas(String::from("get_context(\"2d\") threw")))?
            .ok_or_else(|| OverlayError::Canvas(String::from("canvas has no 2d context")))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| {
                OverlayError::Canvas(String::from("context is not a CanvasRenderingContext2d"))
            })?;
        Ok(CanvasSurface { canvas, context })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn clear(&mut self) {
        self.context
            .clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Hsl, alpha: f64) {
        let ctx = &self.context;
        ctx.save();
        ctx.set_global_alpha(alpha);
        ctx.set_fill_style_str(&color.to_css());
        ctx.begin_path();
        // arc only throws for a negative radius, which particles never have
        if ctx.arc(x, y, radius, 0.0, PI * 2.0).is_ok() {
            ctx.fill();
        }
        ctx.restore();
    }
}
