//! Response Validator — strict decode-then-validate boundary.
//!
//! Takes the raw text body from the model, decodes it as JSON, and either
//! produces a `ParseResult` whose tree is structurally valid or fails with
//! the matching `ParseError` kind. Pure function, no side effects beyond
//! tracing events.

use serde::Deserialize;
use tracing::debug;

use crate::error::ParseError;
use crate::syntax::types::{ParseResult, PosTag, SyntaxNode};

/// Recursion cap so pathological input cannot hang the layout pass.
pub const MAX_TREE_DEPTH: usize = 64;

// ─── Wire shapes ─────────────────────────────────────────────────────────────

/// Node as transmitted: optional fields, checked during conversion.
#[derive(Debug, Deserialize)]
struct RawNode {
    label: Option<String>,
    children: Option<Vec<RawNode>>,
    word: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    tree: Option<RawNode>,
    explanation: Option<String>,
    #[serde(rename = "partsOfSpeech", default)]
    parts_of_speech: Vec<PosTag>,
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Strip markdown code fences models sometimes wrap around JSON output.
fn strip_fences(raw: &str) -> &str {
    raw.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Validate a raw response body into a `ParseResult`.
///
/// Fails with `InvalidJson` if the body does not decode, and with
/// `MalformedResponse` if `tree` or `explanation` is missing, a label is
/// empty, a node has both or neither of `word` / non-empty `children`, or
/// the tree exceeds `MAX_TREE_DEPTH`.
pub fn validate_response(raw: &str) -> Result<ParseResult, ParseError> {
    let body = strip_fences(raw);
    if body.is_empty() {
        return Err(ParseError::EmptyResponse);
    }

    let value: serde_json::Value = serde_json::from_str(body)?;
    let raw_response: RawResponse = serde_json::from_value(value)
        .map_err(|e| ParseError::malformed(format!("unexpected response shape: {e}")))?;

    let Some(raw_tree) = raw_response.tree else {
        return Err(ParseError::malformed("missing field `tree`"));
    };
    let explanation = match raw_response.explanation {
        Some(text) if !text.trim().is_empty() => text,
        Some(_) => return Err(ParseError::malformed("field `explanation` is empty")),
        None => return Err(ParseError::malformed("missing field `explanation`")),
    };

    let tree = convert_node(raw_tree, 0)?;
    debug!(
        nodes = tree.node_count(),
        depth = tree.max_depth(),
        pos_tags = raw_response.parts_of_speech.len(),
        "validated model response"
    );

    Ok(ParseResult {
        tree,
        explanation,
        parts_of_speech: raw_response.parts_of_speech,
    })
}

/// Convert one raw node, enforcing the label and word-xor-children rules.
fn convert_node(raw: RawNode, depth: usize) -> Result<SyntaxNode, ParseError> {
    if depth > MAX_TREE_DEPTH {
        return Err(ParseError::malformed(format!(
            "tree exceeds maximum depth of {MAX_TREE_DEPTH}"
        )));
    }

    let label = match raw.label {
        Some(label) if !label.trim().is_empty() => label,
        _ => {
            return Err(ParseError::malformed(format!(
                "node at depth {depth} has a missing or empty `label`"
            )));
        }
    };

    let children = raw.children.unwrap_or_default();
    match (raw.word, children.is_empty()) {
        (Some(word), true) => Ok(SyntaxNode::terminal(label, word)),
        (Some(_), false) => Err(ParseError::malformed(format!(
            "node '{label}' has both `word` and `children`"
        ))),
        (None, false) => {
            let converted = children
                .into_iter()
                .map(|c| convert_node(c, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SyntaxNode::phrasal(label, converted))
        }
        (None, true) => Err(ParseError::malformed(format!(
            "node '{label}' has neither `word` nor `children`"
        ))),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::types::NULL_HEAD;

    const MINIMAL: &str = r#"{
        "tree": {"label": "CP", "children": [{"label": "C", "word": "∅"}]},
        "explanation": "x",
        "partsOfSpeech": []
    }"#;

    #[test]
    fn test_minimal_valid_tree() {
        let result = validate_response(MINIMAL).unwrap();
        assert_eq!(
            result.tree,
            SyntaxNode::phrasal("CP", vec![SyntaxNode::terminal("C", NULL_HEAD)])
        );
        assert_eq!(result.explanation, "x");
        assert!(result.parts_of_speech.is_empty());
    }

    #[test]
    fn test_fenced_json_accepted() {
        let fenced = format!("```json\n{MINIMAL}\n```");
        assert!(validate_response(&fenced).is_ok());
    }

    #[test]
    fn test_invalid_json() {
        let err = validate_response("{not json").unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson(_)));
    }

    #[test]
    fn test_empty_body() {
        assert!(matches!(
            validate_response("   "),
            Err(ParseError::EmptyResponse)
        ));
    }

    #[test]
    fn test_missing_tree() {
        let err = validate_response(r#"{"explanation": "x"}"#).unwrap_err();
        assert!(matches!(err, ParseError::MalformedResponse { .. }));
    }

    #[test]
    fn test_missing_explanation_is_malformed_not_defaulted() {
        let body = r#"{"tree": {"label": "CP", "children": [{"label": "C", "word": "∅"}]}}"#;
        let err = validate_response(body).unwrap_err();
        assert!(matches!(err, ParseError::MalformedResponse { .. }));
    }

    #[test]
    fn test_missing_parts_of_speech_defaults_to_empty() {
        let body = r#"{
            "tree": {"label": "CP", "children": [{"label": "C", "word": "∅"}]},
            "explanation": "x"
        }"#;
        let result = validate_response(body).unwrap();
        assert!(result.parts_of_speech.is_empty());
    }

    #[test]
    fn test_node_with_both_word_and_children_rejected() {
        let body = r#"{
            "tree": {"label": "CP", "word": "x", "children": [{"label": "C", "word": "∅"}]},
            "explanation": "x"
        }"#;
        assert!(matches!(
            validate_response(body),
            Err(ParseError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_node_with_neither_rejected() {
        let body = r#"{"tree": {"label": "CP"}, "explanation": "x"}"#;
        assert!(matches!(
            validate_response(body),
            Err(ParseError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_empty_children_without_word_rejected() {
        let body = r#"{"tree": {"label": "CP", "children": []}, "explanation": "x"}"#;
        assert!(matches!(
            validate_response(body),
            Err(ParseError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_empty_label_rejected() {
        let body = r#"{"tree": {"label": "", "word": "x"}, "explanation": "x"}"#;
        assert!(matches!(
            validate_response(body),
            Err(ParseError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_depth_cap() {
        // Build a chain 70 levels deep: CP > X' > X' > ... > terminal.
        let mut node = String::from(r#"{"label": "X", "word": "w"}"#);
        for _ in 0..70 {
            node = format!(r#"{{"label": "X'", "children": [{node}]}}"#);
        }
        let body = format!(r#"{{"tree": {node}, "explanation": "x"}}"#);
        assert!(matches!(
            validate_response(&body),
            Err(ParseError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_pos_tags_preserved_in_order() {
        let body = r#"{
            "tree": {"label": "CP", "children": [{"label": "C", "word": "∅"}]},
            "explanation": "x",
            "partsOfSpeech": [
                {"word": "the", "pos": "D"},
                {"word": "farmer", "pos": "N"}
            ]
        }"#;
        let result = validate_response(body).unwrap();
        let words: Vec<&str> = result
            .parts_of_speech
            .iter()
            .map(|t| t.word.as_str())
            .collect();
        assert_eq!(words, vec!["the", "farmer"]);
    }
}
