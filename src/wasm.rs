//! WASM bindings for xbar-viz.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.
//! Input is the raw JSON response text; output is a complete SVG document.

use wasm_bindgen::prelude::*;

use crate::layout::types::Viewport;
use crate::RenderOptions;

/// Render a model response to an animated SVG with default settings.
#[wasm_bindgen]
pub fn render(raw: &str) -> Result<String, JsError> {
    crate::render_response(raw, &RenderOptions::default())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Render a model response with full control over options.
///
/// - `width`, `height`: viewport size in CSS pixels
/// - `animated`: false for a static SVG without the growth animation
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    raw: &str,
    width: f64,
    height: f64,
    animated: bool,
) -> Result<String, JsError> {
    let options = RenderOptions {
        viewport: Viewport { width, height },
        animated,
        ..RenderOptions::default()
    };
    crate::render_response(raw, &options).map_err(|e| JsError::new(&e.to_string()))
}
