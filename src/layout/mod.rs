//! Layout engine — assigns canvas coordinates to the whole tree.
//!
//! The tidy pass produces abstract unit x-coordinates; this module scales
//! them into a content-sized canvas, bands y by depth, collects branches,
//! and computes the initial view transform.

pub mod tidy;
pub mod types;

pub use types::{Branch, LayoutResult, Point, PositionedNode, ViewTransform, Viewport};

use tracing::debug;

use crate::config::LayoutConfig;
use crate::hierarchy::TreeIr;

/// Run the full layout pipeline with the default configuration.
pub fn full_layout(ir: &TreeIr, viewport: Viewport) -> LayoutResult {
    full_layout_with_config(ir, viewport, &LayoutConfig::default())
}

/// Run the full layout pipeline with a custom configuration.
pub fn full_layout_with_config(
    ir: &TreeIr,
    viewport: Viewport,
    cfg: &LayoutConfig,
) -> LayoutResult {
    let unit_xs = tidy::unit_positions(ir, cfg);
    let max_depth = ir.max_depth();

    // The canvas grows with content so nodes never overlap; large trees are
    // reached through scroll/zoom/pan instead of compression.
    let width = viewport
        .width
        .max(ir.node_count() as f64 * cfg.per_node_width);
    let height = viewport
        .height
        .max((max_depth + 1) as f64 * cfg.per_level_height);
    let inner_width = width - cfg.margin_left() - cfg.margin_right();
    let inner_height = height - cfg.margin_top() - cfg.margin_bottom();

    let min_x = unit_xs.iter().copied().fold(f64::INFINITY, f64::min);
    let max_x = unit_xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max_x - min_x;

    let to_px_x = |unit: f64| {
        if span > f64::EPSILON {
            cfg.margin_left() + (unit - min_x) / span * inner_width
        } else {
            cfg.margin_left() + inner_width / 2.0
        }
    };
    let to_px_y = |depth: usize| {
        if max_depth > 0 {
            cfg.margin_top() + depth as f64 / max_depth as f64 * inner_height
        } else {
            cfg.margin_top()
        }
    };

    let nodes: Vec<PositionedNode> = ir
        .nodes()
        .iter()
        .map(|n| PositionedNode {
            index: n.index,
            parent: n.parent,
            depth: n.depth,
            kind: n.kind,
            label: n.label.clone(),
            word: n.word.clone(),
            x: to_px_x(unit_xs[n.index]),
            y: to_px_y(n.depth),
        })
        .collect();

    let branches: Vec<Branch> = nodes
        .iter()
        .filter_map(|n| {
            n.parent.map(|p| Branch {
                source: p,
                target: n.index,
                from: nodes[p].point(),
                to: n.point(),
                source_depth: nodes[p].depth,
            })
        })
        .collect();

    let initial_transform = ViewTransform::fit(viewport, width, nodes[0].x, cfg.zoom_extent);

    debug!(
        nodes = nodes.len(),
        branches = branches.len(),
        width,
        height,
        scale = initial_transform.scale,
        "layout complete"
    );

    LayoutResult {
        nodes,
        branches,
        width,
        height,
        max_depth,
        initial_transform,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
