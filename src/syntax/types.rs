//! Data model for validated X-bar parse results.
//!
//! `SyntaxNode` is a closed tagged type: a node is either phrasal (label +
//! ordered children) or terminal (label + surface word). The "word xor
//! children" rule from the wire format is therefore unrepresentable as an
//! invalid state once validation has run.

use serde::{Deserialize, Serialize};

/// Placeholder symbol for a syntactically required but unpronounced head.
pub const NULL_HEAD: &str = "∅";

// ─── NodeKind ────────────────────────────────────────────────────────────────

/// Terminal/phrasal classification. Computed once by the hierarchy builder
/// and reused by layout and rendering so the two passes can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Phrasal,
    Terminal,
}

// ─── SyntaxNode ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// A phrase or bar-level projection (e.g. "CP", "N'"); children are in
    /// left-to-right surface order and non-empty after validation.
    Phrasal {
        label: String,
        children: Vec<SyntaxNode>,
    },
    /// A leaf carrying a literal word of the sentence, or the null-head
    /// placeholder `∅`.
    Terminal { label: String, word: String },
}

impl SyntaxNode {
    pub fn phrasal(label: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        Self::Phrasal {
            label: label.into(),
            children,
        }
    }

    pub fn terminal(label: impl Into<String>, word: impl Into<String>) -> Self {
        Self::Terminal {
            label: label.into(),
            word: word.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Phrasal { label, .. } | Self::Terminal { label, .. } => label,
        }
    }

    pub fn word(&self) -> Option<&str> {
        match self {
            Self::Terminal { word, .. } => Some(word),
            Self::Phrasal { .. } => None,
        }
    }

    pub fn children(&self) -> &[SyntaxNode] {
        match self {
            Self::Phrasal { children, .. } => children,
            Self::Terminal { .. } => &[],
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Phrasal { .. } => NodeKind::Phrasal,
            Self::Terminal { .. } => NodeKind::Terminal,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal { .. })
    }

    /// Total node count of this subtree, self included.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(SyntaxNode::node_count).sum::<usize>()
    }

    /// Maximum depth below this node in edges (a leaf is 0).
    pub fn max_depth(&self) -> usize {
        self.children()
            .iter()
            .map(|c| 1 + c.max_depth())
            .max()
            .unwrap_or(0)
    }
}

// ─── PosTag ──────────────────────────────────────────────────────────────────

/// One surface token with its part-of-speech category, in sentence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosTag {
    pub word: String,
    pub pos: String,
}

// ─── ParseResult ─────────────────────────────────────────────────────────────

/// A validated model response: the tree plus its derivation note and
/// part-of-speech tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// Root of the tree, conventionally labeled "CP".
    pub tree: SyntaxNode,
    /// Free-text derivation note, non-empty.
    pub explanation: String,
    /// One tag per surface token, in left-to-right sentence order.
    pub parts_of_speech: Vec<PosTag>,
}

// ─── Tests ───────────────────────────────────────────────────────────────────
