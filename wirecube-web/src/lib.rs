/// WireCube Web - WASM canvas frontend
///
/// Draws the cube onto an HTML canvas through the 2D context and rotates it
/// from DOM `keydown` key names.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wirecube_core::{CubeRotator, Key, LineSink, RotatorConfig, Segment};

/// Map a DOM `KeyboardEvent.key` value to a rotation key.
///
/// Only single-character names are bound; modifiers and named keys such as
/// `ArrowLeft` are unbound.
pub fn key_from_dom(name: &str) -> Option<Key> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Key::from_char(c),
        _ => None,
    }
}

/// Line sink over a canvas 2D context
struct CanvasSink {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl LineSink for CanvasSink {
    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_segment(&mut self, segment: &Segment) {
        let ctx = &self.context;
        ctx.set_stroke_style(&JsValue::from_str(&segment.stroke.color.to_hex()));
        ctx.set_line_width(segment.stroke.thickness);
        ctx.begin_path();
        ctx.move_to(segment.start.x, segment.start.y);
        ctx.line_to(segment.end.x, segment.end.y);
        ctx.stroke();
    }
}

#[wasm_bindgen]
pub struct WebRotator {
    rotator: CubeRotator,
    sink: CanvasSink,
}

#[wasm_bindgen]
impl WebRotator {
    /// Attach to the canvas element with id `canvas_id` and draw the cube
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebRotator, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?
            .dyn_into()
            .map_err(|_| JsValue::from_str(&format!("'{}' is not a canvas", canvas_id)))?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("unexpected 2d context type"))?;

        let mut web = WebRotator {
            rotator: CubeRotator::new(RotatorConfig::default()),
            sink: CanvasSink {
                context,
                width: canvas.width() as f64,
                height: canvas.height() as f64,
            },
        };
        web.render();
        Ok(web)
    }

    /// Handle a `keydown` event by its `key` name
    pub fn key_down(&mut self, key: &str) {
        self.rotator.key_pressed(key_from_dom(key), &mut self.sink);
    }

    /// Clear the canvas and redraw the current cube
    pub fn render(&mut self) {
        self.sink.clear();
        self.rotator.render(&mut self.sink);
    }

    /// Return the cube to its starting orientation and redraw
    pub fn reset(&mut self) {
        self.rotator.reset();
        self.render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_dom() {
        assert_eq!(key_from_dom("q"), Some(Key::Q));
        assert_eq!(key_from_dom("D"), Some(Key::D));
        assert_eq!(key_from_dom("ArrowLeft"), None);
        assert_eq!(key_from_dom("Shift"), None);
        assert_eq!(key_from_dom(""), None);
        assert_eq!(key_from_dom("z"), None);
    }
}
