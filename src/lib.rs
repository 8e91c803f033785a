//! xbar-viz — X-bar syntax trees from LLM output, rendered as SVG.
//!
//! Pipeline: validate raw JSON → arena tree IR → tidy layout → scene →
//! renderer. Each stage is pure and independently testable; the optional
//! `client` feature adds the Gemini API front end, `cli` the binary, and
//! `wasm` the browser bindings.

pub mod config;
pub mod error;
pub mod hierarchy;
pub mod layout;
pub mod render;
pub mod syntax;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{AnimationConfig, GeminiConfig, LayoutConfig};
pub use error::ParseError;
pub use hierarchy::{Complexity, TreeIr, TreeStats};
pub use layout::types::{LayoutResult, Viewport};
pub use render::scene::{build_scene, Scene};
pub use render::svg::SvgRenderer;
pub use render::Renderer;
pub use syntax::types::{NodeKind, ParseResult, PosTag, SyntaxNode};
pub use syntax::validate::validate_response;

/// Options for the one-call rendering entry points.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub viewport: Viewport,
    pub animated: bool,
    pub layout: LayoutConfig,
    pub animation: AnimationConfig,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            animated: true,
            layout: LayoutConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

/// Render an already-validated parse result to an SVG document.
pub fn render_parse_result(result: &ParseResult, options: &RenderOptions) -> String {
    let ir = TreeIr::from_tree(&result.tree);
    let layout = layout::full_layout_with_config(&ir, options.viewport, &options.layout);
    let scene = build_scene(&layout, options.viewport, options.animated, &options.animation);
    SvgRenderer::new().render(&scene)
}

/// Validate a raw model response and render it to an SVG document.
///
/// This is the full offline pipeline: everything except talking to the API.
pub fn render_response(raw: &str, options: &RenderOptions) -> Result<String, ParseError> {
    let result = validate_response(raw)?;
    Ok(render_parse_result(&result, options))
}
