//! Layout types: PositionedNode, Branch, Viewport, ViewTransform,
//! LayoutResult.

use crate::syntax::types::NodeKind;

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── PositionedNode ──────────────────────────────────────────────────────────

/// A node with computed canvas coordinates. Derived per layout pass, never
/// transmitted; `parent` is an index link used only for edge drawing.
#[derive(Debug, Clone)]
pub struct PositionedNode {
    pub index: usize,
    pub parent: Option<usize>,
    pub depth: usize,
    pub kind: NodeKind,
    pub label: String,
    pub word: Option<String>,
    pub x: f64,
    pub y: f64,
}

impl PositionedNode {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == NodeKind::Terminal
    }
}

// ─── Branch ──────────────────────────────────────────────────────────────────

/// An edge from a parent node down to one of its children.
#[derive(Debug, Clone)]
pub struct Branch {
    pub source: usize,
    pub target: usize,
    pub from: Point,
    pub to: Point,
    /// Depth of the parent endpoint; drives the growth-animation stagger.
    pub source_depth: usize,
}

// ─── Viewport ────────────────────────────────────────────────────────────────

/// Visible area of the embedding surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

// ─── ViewTransform ───────────────────────────────────────────────────────────

/// Uniform scale + translate applied to the whole scene. User pan/zoom
/// updates this transform and never touches layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Fit the tree root roughly into the top-center of the viewport at a
    /// scale of at most 1, then clamp to the zoom extent.
    pub fn fit(
        viewport: Viewport,
        canvas_width: f64,
        root_x: f64,
        zoom_extent: (f64, f64),
    ) -> Self {
        let raw = if canvas_width > 0.0 {
            (viewport.width / canvas_width).min(1.0) * 0.7
        } else {
            1.0
        };
        let scale = raw.clamp(zoom_extent.0, zoom_extent.1);
        Self {
            scale,
            translate_x: viewport.width / 2.0 - root_x * scale,
            translate_y: 140.0,
        }
    }

    /// Apply a user zoom factor, clamped to the extent. Translation is left
    /// to the caller (zoom anchor is a shell concern).
    pub fn zoomed(self, factor: f64, zoom_extent: (f64, f64)) -> Self {
        Self {
            scale: (self.scale * factor).clamp(zoom_extent.0, zoom_extent.1),
            ..self
        }
    }

    /// Value for an SVG `transform` attribute.
    pub fn to_svg(self) -> String {
        format!(
            "translate({:.2},{:.2}) scale({:.4})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

// ─── LayoutResult ────────────────────────────────────────────────────────────

/// The full output of the layout pipeline: positioned nodes, branches, the
/// content-sized canvas, and the initial view transform.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    /// Arena order (preorder); index 0 is the root.
    pub nodes: Vec<PositionedNode>,
    pub branches: Vec<Branch>,
    pub width: f64,
    pub height: f64,
    pub max_depth: usize,
    pub initial_transform: ViewTransform,
}

impl LayoutResult {
    pub fn root(&self) -> &PositionedNode {
        &self.nodes[0]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
