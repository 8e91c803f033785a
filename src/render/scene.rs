//! Scene assembly — turns a LayoutResult into drawable elements.
//!
//! The scene is a pure function of (layout, animated flag, animation
//! config). Every data change rebuilds the scene from scratch, which also
//! discards any previously scheduled reveals.

use crate::config::AnimationConfig;
use crate::layout::types::{LayoutResult, ViewTransform, Viewport};
use crate::render::schedule::{Reveal, RevealSchedule};
use crate::syntax::types::NodeKind;

/// Vertical offsets of a terminal's dashed connector, below the node.
pub const CONNECTOR_TOP: f64 = 45.0;
pub const CONNECTOR_BOTTOM: f64 = 105.0;

// ─── Elements ────────────────────────────────────────────────────────────────

/// A branch drawn as a vertical cubic curve between parent and child.
#[derive(Debug, Clone)]
pub struct BranchPath {
    /// SVG path data.
    pub path: String,
    pub reveal: Option<Reveal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// Category above a phrasal node.
    Phrasal,
    /// Category at a terminal node position.
    TerminalCategory,
    /// The literal word below a terminal node.
    TerminalWord,
}

#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub kind: LabelKind,
    pub reveal: Option<Reveal>,
}

/// Dashed line from a terminal node down to its word label.
#[derive(Debug, Clone)]
pub struct Connector {
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub reveal: Option<Reveal>,
}

// ─── Scene ───────────────────────────────────────────────────────────────────

/// Everything the renderer needs, with reveal timings pre-computed.
#[derive(Debug, Clone)]
pub struct Scene {
    pub viewport: Viewport,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub transform: ViewTransform,
    pub branches: Vec<BranchPath>,
    pub labels: Vec<Label>,
    pub connectors: Vec<Connector>,
    pub animated: bool,
}

/// Path data for a vertical cubic link (control points at mid-height).
fn branch_path(x0: f64, y0: f64, x1: f64, y1: f64) -> String {
    let my = (y0 + y1) / 2.0;
    format!("M{x0:.1},{y0:.1}C{x0:.1},{my:.1} {x1:.1},{my:.1} {x1:.1},{y1:.1}")
}

/// Build the scene for a laid-out tree.
pub fn build_scene(
    layout: &LayoutResult,
    viewport: Viewport,
    animated: bool,
    anim: &AnimationConfig,
) -> Scene {
    let schedule = RevealSchedule::new(layout.max_depth, anim.clone());
    let reveal_branch = |d| animated.then(|| schedule.branch(d));
    let reveal_label = |d| animated.then(|| schedule.label(d));
    let reveal_connector = |d| animated.then(|| schedule.connector(d));

    let branches = layout
        .branches
        .iter()
        .map(|b| BranchPath {
            path: branch_path(b.from.x, b.from.y, b.to.x, b.to.y),
            reveal: reveal_branch(b.source_depth),
        })
        .collect();

    let mut labels = Vec::new();
    let mut connectors = Vec::new();
    for node in &layout.nodes {
        match node.kind {
            NodeKind::Phrasal => labels.push(Label {
                x: node.x,
                y: node.y,
                text: node.label.clone(),
                kind: LabelKind::Phrasal,
                reveal: reveal_label(node.depth),
            }),
            NodeKind::Terminal => {
                labels.push(Label {
                    x: node.x,
                    y: node.y,
                    text: node.label.clone(),
                    kind: LabelKind::TerminalCategory,
                    reveal: reveal_label(node.depth),
                });
                labels.push(Label {
                    x: node.x,
                    y: node.y,
                    text: node.word.clone().unwrap_or_default(),
                    kind: LabelKind::TerminalWord,
                    reveal: reveal_label(node.depth),
                });
                connectors.push(Connector {
                    x: node.x,
                    y_top: node.y + CONNECTOR_TOP,
                    y_bottom: node.y + CONNECTOR_BOTTOM,
                    reveal: reveal_connector(node.depth),
                });
            }
        }
    }

    Scene {
        viewport,
        canvas_width: layout.width,
        canvas_height: layout.height,
        transform: layout.initial_transform,
        branches,
        labels,
        connectors,
        animated,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
