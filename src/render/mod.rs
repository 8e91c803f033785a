//! Render/animation engine — scene assembly, reveal schedule, and the
//! Renderer trait with the SVG backend.

pub mod scene;
pub mod schedule;
pub mod svg;

pub use scene::{Scene, build_scene};
pub use schedule::{Reveal, RevealSchedule};
pub use svg::SvgRenderer;

/// Trait for scene renderers.
pub trait Renderer {
    /// Render an assembled scene to a string.
    fn render(&self, scene: &Scene) -> String;
}
