//! End-to-end pipeline tests: raw response JSON through validation, layout,
//! and SVG rendering, with no network involved.

use xbar_viz::hierarchy::Complexity;
use xbar_viz::layout::full_layout;
use xbar_viz::{
    render_response, validate_response, ParseError, RenderOptions, TreeIr, Viewport,
};

/// A full X-bar parse of "The farmer eats the pig": 20 nodes over 10 levels,
/// with null C and Infl heads.
const FARMER_RESPONSE: &str = r#"{
  "tree": {
    "label": "CP",
    "children": [
      { "label": "C", "word": "∅" },
      {
        "label": "InflP",
        "children": [
          {
            "label": "DP",
            "children": [
              {
                "label": "D'",
                "children": [
                  { "label": "D", "word": "the" },
                  {
                    "label": "NP",
                    "children": [
                      {
                        "label": "N'",
                        "children": [ { "label": "N", "word": "farmer" } ]
                      }
                    ]
                  }
                ]
              }
            ]
          },
          {
            "label": "Infl'",
            "children": [
              { "label": "Infl", "word": "∅" },
              {
                "label": "VP",
                "children": [
                  {
                    "label": "V'",
                    "children": [
                      { "label": "V", "word": "eats" },
                      {
                        "label": "DP",
                        "children": [
                          {
                            "label": "D'",
                            "children": [
                              { "label": "D", "word": "the" },
                              {
                                "label": "NP",
                                "children": [
                                  {
                                    "label": "N'",
                                    "children": [ { "label": "N", "word": "pig" } ]
                                  }
                                ]
                              }
                            ]
                          }
                        ]
                      }
                    ]
                  }
                ]
              }
            ]
          }
        ]
      }
    ]
  },
  "explanation": "A declarative clause with a null complementizer and null inflection head.",
  "partsOfSpeech": [
    { "word": "The", "pos": "DETERMINER" },
    { "word": "farmer", "pos": "NOUN" },
    { "word": "eats", "pos": "VERB" },
    { "word": "the", "pos": "DETERMINER" },
    { "word": "pig", "pos": "NOUN" }
  ]
}"#;

#[test]
fn test_validates_and_counts_structure() {
    let result = validate_response(FARMER_RESPONSE).unwrap();
    assert_eq!(result.tree.label(), "CP");
    assert_eq!(result.tree.node_count(), 20);
    assert_eq!(result.tree.max_depth(), 9);
    assert_eq!(result.parts_of_speech.len(), 5);

    let ir = TreeIr::from_tree(&result.tree);
    assert_eq!(ir.terminal_count(), 7);
    let stats = ir.stats();
    assert_eq!(stats.node_count, 20);
    assert_eq!(stats.depth_levels, 10);
    assert_eq!(stats.complexity, Complexity::HighDensity);
}

#[test]
fn test_layout_preserves_word_order() {
    let result = validate_response(FARMER_RESPONSE).unwrap();
    let ir = TreeIr::from_tree(&result.tree);
    let layout = full_layout(&ir, Viewport::default());

    // Terminals in preorder carry the sentence's word order; their x
    // coordinates never move left. (Nodes at different depths may share an
    // x when their contours never meet.)
    let terminal_xs: Vec<f64> = layout
        .nodes
        .iter()
        .filter(|n| n.is_terminal())
        .map(|n| n.x)
        .collect();
    assert_eq!(terminal_xs.len(), 7);
    for pair in terminal_xs.windows(2) {
        assert!(pair[0] <= pair[1], "terminals out of order: {terminal_xs:?}");
    }
}

#[test]
fn test_canvas_grows_with_the_tree() {
    let result = validate_response(FARMER_RESPONSE).unwrap();
    let ir = TreeIr::from_tree(&result.tree);
    let layout = full_layout(&ir, Viewport::default());

    assert_eq!(layout.width, 20.0 * 280.0);
    assert_eq!(layout.height, 10.0 * 300.0);
    assert_eq!(layout.branches.len(), 19);
    for branch in &layout.branches {
        assert!(branch.to.y > branch.from.y, "branches must point downward");
    }

    // Fit scale: (1280 / 5600) * 0.7, well inside the zoom extent.
    let scale = layout.initial_transform.scale;
    assert!((scale - (1280.0 / 5600.0) * 0.7).abs() < 1e-9);
}

#[test]
fn test_animated_svg_carries_schedule() {
    let svg = render_response(FARMER_RESPONSE, &RenderOptions::default()).unwrap();
    assert!(svg.contains("@keyframes grow"));
    assert!(svg.contains("@keyframes fade-in"));
    // Root branches start after nine 800ms depth steps.
    assert!(svg.contains("7200ms"));
    for word in ["farmer", "eats", "pig"] {
        assert!(svg.contains(word), "missing word label {word}");
    }
}

#[test]
fn test_static_svg_has_no_animation() {
    let options = RenderOptions {
        animated: false,
        ..RenderOptions::default()
    };
    let svg = render_response(FARMER_RESPONSE, &options).unwrap();
    assert!(!svg.contains("@keyframes"));
    assert!(!svg.contains("animation:"));
}

#[test]
fn test_small_sentence_scenario() {
    // Shallow parse of the same sentence: null C head, overt V head, two
    // lexical nouns.
    let raw = r#"{
      "tree": {
        "label": "CP",
        "children": [
          { "label": "C", "word": "∅" },
          {
            "label": "VP",
            "children": [
              { "label": "V", "word": "eats" },
              {
                "label": "NP",
                "children": [
                  { "label": "N", "word": "farmer" },
                  { "label": "N", "word": "pig" }
                ]
              }
            ]
          }
        ]
      },
      "explanation": "Toy parse.",
      "partsOfSpeech": []
    }"#;
    let result = validate_response(raw).unwrap();
    let ir = TreeIr::from_tree(&result.tree);
    assert_eq!(ir.node_count(), 7);
    assert_eq!(ir.max_depth(), 3);
    assert_eq!(ir.terminal_count(), 4);

    let layout = full_layout(&ir, Viewport::default());
    let x_of = |label: &str, word: &str| {
        layout
            .nodes
            .iter()
            .find(|n| n.label == label && n.word.as_deref() == Some(word))
            .map(|n| n.x)
            .unwrap()
    };
    // The null head, the verb, and both nouns all land on distinct x.
    let xs = [
        x_of("C", "∅"),
        x_of("V", "eats"),
        x_of("N", "farmer"),
        x_of("N", "pig"),
    ];
    for i in 0..xs.len() {
        for j in (i + 1)..xs.len() {
            assert!((xs[i] - xs[j]).abs() > 1.0, "overlapping terminals");
        }
    }
}

#[test]
fn test_fenced_response_accepted() {
    let fenced = format!("```json\n{FARMER_RESPONSE}\n```");
    let result = validate_response(&fenced).unwrap();
    assert_eq!(result.tree.node_count(), 20);
}

#[test]
fn test_missing_explanation_rejected() {
    let raw = r#"{"tree": {"label": "CP", "children": [{"label": "C", "word": "∅"}]}, "explanation": ""}"#;
    match validate_response(raw) {
        Err(ParseError::MalformedResponse { .. }) => {}
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}
