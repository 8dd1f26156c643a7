//! 2D canvas backend

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::shapes::{STROKE_COLOR, TileShape, map_shapes};
use crate::editor::Editor;

/// Draws the editor's map onto a `<canvas>`
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Bind to the canvas element with the given id
    pub fn new(document: &Document, canvas_id: &str) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("canvas #{canvas_id} not found")))?
            .dyn_into::<HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Size the canvas so the whole grid fits
    pub fn fit(&self, editor: &Editor) {
        let size = editor.surface_size();
        self.canvas.set_width(size.x.ceil() as u32);
        self.canvas.set_height(size.y.ceil() as u32);
        log::debug!("Canvas sized to {}x{}", size.x.ceil(), size.y.ceil());
    }

    /// Repaint every tile
    pub fn draw(&self, editor: &Editor) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);

        for shape in map_shapes(editor.layout(), editor.grid()) {
            self.draw_tile(&shape);
        }
    }

    fn draw_tile(&self, shape: &TileShape) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(STROKE_COLOR);
        ctx.begin_path();
        let [first, rest @ ..] = &shape.corners;
        ctx.move_to(first.x as f64, first.y as f64);
        for corner in rest {
            ctx.line_to(corner.x as f64, corner.y as f64);
        }
        ctx.close_path();

        ctx.set_fill_style_str(shape.fill);
        ctx.fill();
        ctx.stroke();

        if let Some(label) = &shape.label {
            ctx.set_font(&label.font);
            ctx.set_fill_style_str(label.color);
            if let Err(e) = ctx.fill_text(
                &label.text,
                label.position.x as f64,
                label.position.y as f64,
            ) {
                log::warn!("fill_text failed: {:?}", e);
            }
        }
    }
}
