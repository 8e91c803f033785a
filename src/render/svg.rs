//! SVG renderer — converts a Scene to an SVG string.
//!
//! Growth mode encodes the reveal schedule as CSS animations: branches use a
//! normalized `pathLength` dash reveal, labels and connectors fade in. The
//! initial view transform is carried on the root group; an embedding shell
//! can replace that transform to pan/zoom without touching the geometry.

use crate::render::Renderer;
use crate::render::scene::{Connector, Label, LabelKind, Scene};
use crate::render::schedule::Reveal;

// ─── Constants ───────────────────────────────────────────────────────────────

const BACKGROUND: &str = "#020806";
const BRANCH_COLOR: &str = "#593a0e";
const BRANCH_WIDTH: f64 = 6.0;
const CONNECTOR_WIDTH: f64 = 5.0;
const LABEL_FILL: &str = "#ffffff";
const WORD_FILL: &str = "#10b981";
const OUTLINE: &str = "#050a08";
const FONT_FAMILY: &str = "'Quicksand', sans-serif";

/// Ease-out cubic, matching the branch reveal easing.
const EASE_OUT: &str = "cubic-bezier(0.33,1,0.68,1)";

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn grow_style(reveal: Reveal) -> String {
    format!(
        r#" style="animation:grow {}ms {EASE_OUT} {}ms forwards""#,
        reveal.duration_ms, reveal.delay_ms
    )
}

fn fade_style(reveal: Reveal) -> String {
    format!(
        r#" opacity="0" style="animation:fade-in {}ms ease {}ms forwards""#,
        reveal.duration_ms, reveal.delay_ms
    )
}

// ─── SvgRenderer ─────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_branch(&self, path: &str, reveal: Option<Reveal>, out: &mut String) {
        let anim = match reveal {
            Some(r) => format!(
                r#" pathLength="1" stroke-dasharray="1 1" stroke-dashoffset="1"{}"#,
                grow_style(r)
            ),
            None => String::new(),
        };
        out.push_str(&format!(
            r#"<path class="branch" d="{path}" fill="none" stroke="{BRANCH_COLOR}" stroke-width="{BRANCH_WIDTH}" stroke-linecap="round"{anim}/>"#
        ));
        out.push('\n');
    }

    fn render_connector(&self, c: &Connector, out: &mut String) {
        let anim = c.reveal.map(fade_style).unwrap_or_default();
        out.push_str(&format!(
            r#"<line x1="{x:.1}" y1="{y1:.1}" x2="{x:.1}" y2="{y2:.1}" stroke="{BRANCH_COLOR}" stroke-width="{CONNECTOR_WIDTH}" stroke-dasharray="12,8"{anim}/>"#,
            x = c.x,
            y1 = c.y_top,
            y2 = c.y_bottom,
        ));
        out.push('\n');
    }

    fn render_label(&self, label: &Label, out: &mut String) {
        // Phrasal: category above the node. Terminal: category at the node,
        // italic word further below.
        let (dy, size, weight, fill, stroke_width, style_extra) = match label.kind {
            LabelKind::Phrasal => ("-0.7em", 46, 900, LABEL_FILL, 16, ""),
            LabelKind::TerminalCategory => ("0.7em", 40, 900, LABEL_FILL, 12, ""),
            LabelKind::TerminalWord => ("2.6em", 56, 700, WORD_FILL, 14, "font-style:italic;"),
        };
        let anim = label.reveal.map(fade_style).unwrap_or_default();
        out.push_str(&format!(
            r#"<text x="{x:.1}" y="{y:.1}" dy="{dy}" text-anchor="middle" font-size="{size}" font-weight="{weight}" fill="{fill}" style="font-family:{FONT_FAMILY};paint-order:stroke;stroke:{OUTLINE};stroke-width:{stroke_width}px;stroke-linejoin:round;{style_extra}"{anim}>{text}</text>"#,
            x = label.x,
            y = label.y,
            text = escape(&label.text),
        ));
        out.push('\n');
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, scene: &Scene) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">"#,
            w = scene.viewport.width,
            h = scene.viewport.height,
        ));
        out.push('\n');

        if scene.animated {
            out.push_str(
                "<style>@keyframes grow{to{stroke-dashoffset:0;}}@keyframes fade-in{to{opacity:1;}}</style>\n",
            );
        }

        out.push_str(&format!(
            r#"<rect width="100%" height="100%" fill="{BACKGROUND}"/>"#
        ));
        out.push('\n');
        out.push_str(&format!(r#"<g transform="{}">"#, scene.transform.to_svg()));
        out.push('\n');

        for branch in &scene.branches {
            self.render_branch(&branch.path, branch.reveal, &mut out);
        }
        for connector in &scene.connectors {
            self.render_connector(connector, &mut out);
        }
        for label in &scene.labels {
            self.render_label(label, &mut out);
        }

        out.push_str("</g>\n</svg>\n");
        out
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
