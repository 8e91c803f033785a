//! Contour-based tidy tree layout in abstract units.
//!
//! Reingold–Tilford style: lay out each subtree independently, then shift
//! sibling subtrees right until their per-level extents clear the required
//! separation, and center each parent over its first and last child.
//!
//! Separation is non-uniform by design: a terminal next to a phrasal sibling
//! (a head/phrase boundary) gets a wider gap than a same-kind pair, and
//! nodes compared across different parents get the widest gap. The ordering
//! cousin > mixed > sibling is the invariant; the multipliers live in
//! `LayoutConfig`.

use crate::config::LayoutConfig;
use crate::hierarchy::TreeIr;
use crate::syntax::types::NodeKind;

/// (min_x, max_x) occupied by a subtree at one depth level, in units.
type Extent = (f64, f64);

/// Compute unit x-coordinates for every node, indexed like the arena.
/// Children end up strictly left-to-right in input order.
pub(crate) fn unit_positions(ir: &TreeIr, cfg: &LayoutConfig) -> Vec<f64> {
    let mut xs = vec![0.0; ir.node_count()];
    layout_subtree(ir, 0, cfg, &mut xs);
    xs
}

/// Separation between two adjacent top-level siblings.
fn sibling_separation(a: NodeKind, b: NodeKind, cfg: &LayoutConfig) -> f64 {
    if a == b {
        cfg.sibling_separation
    } else {
        cfg.mixed_separation
    }
}

/// Lay out the subtree rooted at `index` with its own coordinates, and
/// return its per-level extents (level 0 = the subtree root itself).
fn layout_subtree(ir: &TreeIr, index: usize, cfg: &LayoutConfig, xs: &mut [f64]) -> Vec<Extent> {
    let children = &ir.node(index).children;
    if children.is_empty() {
        xs[index] = 0.0;
        return vec![(0.0, 0.0)];
    }

    // Merge child subtrees left to right, shifting each one clear of the
    // extents accumulated so far.
    let mut merged: Vec<Extent> = Vec::new();
    for (i, &child) in children.iter().enumerate() {
        let mut ext = layout_subtree(ir, child, cfg, xs);
        if i == 0 {
            merged = ext;
            continue;
        }

        let prev_kind = ir.node(children[i - 1]).kind;
        let pair_sep = sibling_separation(prev_kind, ir.node(child).kind, cfg);

        let mut shift = 0.0f64;
        for lvl in 0..ext.len().min(merged.len()) {
            // Level 0 compares the siblings themselves; anything deeper
            // compares nodes that live under different parents.
            let sep = if lvl == 0 {
                pair_sep
            } else {
                cfg.cousin_separation
            };
            shift = shift.max(merged[lvl].1 + sep - ext[lvl].0);
        }

        shift_subtree(ir, child, shift, xs);
        for e in &mut ext {
            e.0 += shift;
            e.1 += shift;
        }
        for lvl in 0..ext.len() {
            if lvl < merged.len() {
                merged[lvl].0 = merged[lvl].0.min(ext[lvl].0);
                merged[lvl].1 = merged[lvl].1.max(ext[lvl].1);
            } else {
                merged.push(ext[lvl]);
            }
        }
    }

    // Parent sits centered over its first and last child.
    let first = xs[children[0]];
    let last = xs[*children.last().expect("children checked non-empty")];
    xs[index] = (first + last) / 2.0;

    let mut out = Vec::with_capacity(merged.len() + 1);
    out.push((xs[index], xs[index]));
    out.extend(merged);
    out
}

/// Shift a whole subtree right by `dx`.
fn shift_subtree(ir: &TreeIr, root: usize, dx: f64, xs: &mut [f64]) {
    if dx == 0.0 {
        return;
    }
    let mut stack = vec![root];
    while let Some(idx) = stack.pop() {
        xs[idx] += dx;
        stack.extend(ir.node(idx).children.iter().copied());
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
