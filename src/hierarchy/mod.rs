//! TreeIr — converts a validated `SyntaxNode` tree into an indexed arena
//! for layout and analysis.
//!
//! The arena carries parent links, depth, and the terminal/phrasal
//! classification. Classification happens exactly once here; layout and
//! rendering both read it from the arena instead of re-deriving it.

use crate::syntax::types::{NodeKind, SyntaxNode};

// ─── IrNode ──────────────────────────────────────────────────────────────────

/// One node in the arena. `parent` is an index link used for edge drawing,
/// not ownership; the arena owns all nodes.
#[derive(Debug, Clone)]
pub struct IrNode {
    pub index: usize,
    pub parent: Option<usize>,
    /// Child indices in left-to-right surface order.
    pub children: Vec<usize>,
    /// Root = 0, +1 per edge.
    pub depth: usize,
    pub kind: NodeKind,
    pub label: String,
    /// Set iff `kind` is `Terminal`.
    pub word: Option<String>,
}

impl IrNode {
    pub fn is_terminal(&self) -> bool {
        self.kind == NodeKind::Terminal
    }
}

// ─── TreeIr ──────────────────────────────────────────────────────────────────

/// Arena form of the tree. Node 0 is always the root, and every parent
/// precedes its children (preorder).
#[derive(Debug, Clone)]
pub struct TreeIr {
    nodes: Vec<IrNode>,
    max_depth: usize,
}

impl TreeIr {
    /// Build the arena from a validated tree.
    pub fn from_tree(root: &SyntaxNode) -> Self {
        let mut ir = Self {
            nodes: Vec::with_capacity(root.node_count()),
            max_depth: 0,
        };
        ir.add_subtree(root, None, 0);
        ir
    }

    fn add_subtree(&mut self, node: &SyntaxNode, parent: Option<usize>, depth: usize) -> usize {
        let index = self.nodes.len();
        self.nodes.push(IrNode {
            index,
            parent,
            children: Vec::new(),
            depth,
            kind: node.kind(),
            label: node.label().to_string(),
            word: node.word().map(str::to_string),
        });
        self.max_depth = self.max_depth.max(depth);

        for child in node.children() {
            let child_index = self.add_subtree(child, Some(index), depth + 1);
            self.nodes[index].children.push(child_index);
        }
        index
    }

    pub fn nodes(&self) -> &[IrNode] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> &IrNode {
        &self.nodes[index]
    }

    pub fn root(&self) -> &IrNode {
        &self.nodes[0]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Maximum depth in edges (root-only tree = 0).
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn terminal_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_terminal()).count()
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats::of(self)
    }
}

// ─── TreeStats ───────────────────────────────────────────────────────────────

/// Structural complexity rating by depth in levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Low,
    Moderate,
    HighDensity,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::HighDensity => "High-Density",
        };
        write!(f, "{s}")
    }
}

/// Summary metrics shown alongside a rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub node_count: usize,
    /// Depth in levels: a lone root counts as 1.
    pub depth_levels: usize,
    pub complexity: Complexity,
}

impl TreeStats {
    pub fn of(ir: &TreeIr) -> Self {
        let depth_levels = ir.max_depth() + 1;
        let complexity = if depth_levels > 8 {
            Complexity::HighDensity
        } else if depth_levels > 5 {
            Complexity::Moderate
        } else {
            Complexity::Low
        };
        Self {
            node_count: ir.node_count(),
            depth_levels,
            complexity,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::types::NULL_HEAD;

    fn sample_tree() -> SyntaxNode {
        SyntaxNode::phrasal(
            "CP",
            vec![
                SyntaxNode::terminal("C", NULL_HEAD),
                SyntaxNode::phrasal(
                    "VP",
                    vec![
                        SyntaxNode::terminal("V", "eats"),
                        SyntaxNode::phrasal("NP", vec![SyntaxNode::terminal("N", "pig")]),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn test_arena_counts() {
        let ir = TreeIr::from_tree(&sample_tree());
        assert_eq!(ir.node_count(), 6);
        assert_eq!(ir.max_depth(), 3);
        assert_eq!(ir.terminal_count(), 3);
    }

    #[test]
    fn test_root_is_index_zero_depth_zero() {
        let ir = TreeIr::from_tree(&sample_tree());
        assert_eq!(ir.root().index, 0);
        assert_eq!(ir.root().depth, 0);
        assert!(ir.root().parent.is_none());
        assert_eq!(ir.root().label, "CP");
    }

    #[test]
    fn test_depth_increases_per_edge() {
        let ir = TreeIr::from_tree(&sample_tree());
        for node in ir.nodes() {
            if let Some(p) = node.parent {
                assert_eq!(node.depth, ir.node(p).depth + 1);
            }
        }
    }

    #[test]
    fn test_child_order_preserved() {
        let ir = TreeIr::from_tree(&sample_tree());
        let root_children = &ir.root().children;
        assert_eq!(ir.node(root_children[0]).label, "C");
        assert_eq!(ir.node(root_children[1]).label, "VP");
    }

    #[test]
    fn test_classification_matches_word_presence() {
        let ir = TreeIr::from_tree(&sample_tree());
        for node in ir.nodes() {
            assert_eq!(node.is_terminal(), node.word.is_some());
        }
    }

    #[test]
    fn test_round_trip_no_data_loss() {
        // Minimal valid tree survives the hierarchy pass intact.
        let tree = SyntaxNode::phrasal("CP", vec![SyntaxNode::terminal("C", NULL_HEAD)]);
        let ir = TreeIr::from_tree(&tree);
        assert_eq!(ir.node_count(), 2);
        assert_eq!(ir.root().label, "CP");
        let head = ir.node(ir.root().children[0]);
        assert_eq!(head.label, "C");
        assert_eq!(head.word.as_deref(), Some(NULL_HEAD));
        assert_eq!(head.parent, Some(0));
    }

    #[test]
    fn test_stats_thresholds() {
        let ir = TreeIr::from_tree(&sample_tree());
        let stats = ir.stats();
        assert_eq!(stats.node_count, 6);
        assert_eq!(stats.depth_levels, 4);
        assert_eq!(stats.complexity, Complexity::Low);

        // A 7-level chain rates Moderate.
        let mut chain = SyntaxNode::terminal("X", "w");
        for _ in 0..6 {
            chain = SyntaxNode::phrasal("X'", vec![chain]);
        }
        let stats = TreeIr::from_tree(&chain).stats();
        assert_eq!(stats.depth_levels, 7);
        assert_eq!(stats.complexity, Complexity::Moderate);

        // A 10-level chain rates High-Density.
        let mut chain = SyntaxNode::terminal("X", "w");
        for _ in 0..9 {
            chain = SyntaxNode::phrasal("X'", vec![chain]);
        }
        let stats = TreeIr::from_tree(&chain).stats();
        assert_eq!(stats.complexity, Complexity::HighDensity);
    }
}
