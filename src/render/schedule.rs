//! Declarative growth-animation schedule.
//!
//! Delays are computed up front from depth-from-leaves and handed to the
//! renderer as plain numbers, keeping the scheduling policy testable without
//! any timing backend. Hard invariant: a deeper element never starts later
//! than a shallower one, so the tree reads as growing from the leaves up.

use crate::config::AnimationConfig;

// ─── Reveal ──────────────────────────────────────────────────────────────────

/// Start delay and duration for one element's reveal, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub delay_ms: u32,
    pub duration_ms: u32,
}

// ─── RevealSchedule ──────────────────────────────────────────────────────────

/// Maps tree depth to reveal timings for branches, labels, and connectors.
#[derive(Debug, Clone)]
pub struct RevealSchedule {
    max_depth: usize,
    cfg: AnimationConfig,
}

impl RevealSchedule {
    pub fn new(max_depth: usize, cfg: AnimationConfig) -> Self {
        Self { max_depth, cfg }
    }

    fn stagger(&self, depth: usize) -> u32 {
        let from_leaves = self.max_depth.saturating_sub(depth) as u32;
        from_leaves * self.cfg.depth_step
    }

    /// Stroke reveal for a branch whose parent endpoint sits at
    /// `source_depth`.
    pub fn branch(&self, source_depth: usize) -> Reveal {
        Reveal {
            delay_ms: self.stagger(source_depth),
            duration_ms: self.cfg.branch_duration,
        }
    }

    /// Fade-in for the labels of a node at `depth`, shortly after its
    /// incident branch starts revealing.
    pub fn label(&self, depth: usize) -> Reveal {
        Reveal {
            delay_ms: self.stagger(depth) + self.cfg.label_offset,
            duration_ms: self.cfg.label_duration,
        }
    }

    /// Fade-in for a terminal's connector line, after its label.
    pub fn connector(&self, depth: usize) -> Reveal {
        Reveal {
            delay_ms: self.stagger(depth) + self.cfg.connector_offset,
            duration_ms: self.cfg.connector_duration,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
