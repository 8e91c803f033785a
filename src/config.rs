//! Configuration for the layout, animation, and model-client stages.
//!
//! All values are tunables; the relative ordering of the separation values
//! (cousin > mixed > sibling) and the monotonic depth stagger are the
//! invariants the rest of the crate relies on.

use serde::Deserialize;

// ─── LayoutConfig ────────────────────────────────────────────────────────────

/// Geometry tunables for the layout engine.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Minimum horizontal canvas width reserved per node, in pixels.
    pub per_node_width: f64,
    /// Vertical band reserved per depth level, in pixels.
    pub per_level_height: f64,
    /// Margins around the drawable area: top, right, bottom, left.
    pub margin: (f64, f64, f64, f64),
    /// Separation between same-kind siblings, in layout units.
    pub sibling_separation: f64,
    /// Separation between a terminal/phrasal sibling pair (head next to a
    /// phrase), in layout units.
    pub mixed_separation: f64,
    /// Separation between nodes that do not share a parent, in layout units.
    pub cousin_separation: f64,
    /// Zoom clamp applied to every view transform.
    pub zoom_extent: (f64, f64),
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            per_node_width: 280.0,
            per_level_height: 300.0,
            margin: (120.0, 250.0, 250.0, 250.0),
            sibling_separation: 2.2,
            mixed_separation: 3.2,
            cousin_separation: 4.0,
            zoom_extent: (0.1, 8.0),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn margin_top(&self) -> f64 {
        self.margin.0
    }

    pub fn margin_right(&self) -> f64 {
        self.margin.1
    }

    pub fn margin_bottom(&self) -> f64 {
        self.margin.2
    }

    pub fn margin_left(&self) -> f64 {
        self.margin.3
    }
}

// ─── AnimationConfig ─────────────────────────────────────────────────────────

/// Timing tunables for the growth animation, in milliseconds.
///
/// Delays are computed from depth-from-leaves, so leaf-adjacent elements
/// start first and the root-adjacent branch starts last.
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Stagger per depth level.
    pub depth_step: u32,
    /// Stroke-reveal duration for a branch.
    pub branch_duration: u32,
    /// Extra delay before a node's labels fade in, relative to its branch.
    pub label_offset: u32,
    /// Label fade duration.
    pub label_duration: u32,
    /// Extra delay before a terminal's connector fades in. Kept after
    /// `label_offset` so the connector follows its label.
    pub connector_offset: u32,
    /// Connector fade duration.
    pub connector_duration: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            depth_step: 800,
            branch_duration: 1000,
            label_offset: 400,
            label_duration: 800,
            connector_offset: 600,
            connector_duration: 500,
        }
    }
}

impl AnimationConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

// ─── GeminiConfig ────────────────────────────────────────────────────────────

/// Settings for the Gemini generateContent call.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    /// Low temperature keeps the parse stable across resubmissions.
    pub temperature: f32,
    pub timeout_seconds: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-3-pro-preview".to_string(),
            temperature: 0.0,
            timeout_seconds: 60,
        }
    }
}

impl GeminiConfig {
    /// Build a config from the environment (`GEMINI_API_KEY`,
    /// `GEMINI_MODEL`). An absent key is left empty; the client turns that
    /// into `ParseError::CredentialMissing` before any network call.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            cfg.api_key = key;
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            if !model.is_empty() {
                cfg.model = model;
            }
        }
        cfg
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
