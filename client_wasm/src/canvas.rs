//! Canvas 2D drawing surface

use game_core::{GameError, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// Look up the playfield canvas by element id
pub fn find_canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, GameError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GameError::Initialization(format!("Canvas #{id} not found")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GameError::Initialization(format!("#{id} is not a canvas")))
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, GameError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| GameError::Initialization(format!("getContext failed: {e:?}")))?
            .ok_or_else(|| GameError::Initialization("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::Initialization("Unexpected context type".to_string()))?;

        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU) {
            log::warn!("arc failed: {e:?}");
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fillText failed: {e:?}");
        }
    }
}
