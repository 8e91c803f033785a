//! Gemini API client — sends a sentence, returns a validated ParseResult.
//!
//! One request per call, no retries, no streaming. Every failure is mapped
//! to a `ParseError` kind here at the boundary: callers never see a raw
//! reqwest or serde error.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::GeminiConfig;
use crate::error::ParseError;
use crate::syntax::types::ParseResult;
use crate::syntax::validate::validate_response;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const SYSTEM_INSTRUCTION: &str = r#"You are a world-class linguistic expert specializing in Generative Grammar and X-bar theory.
Your task is to parse English sentences into formal X-bar syntax trees.

Output MUST be a single JSON object with this exact structure:
{
  "tree": {
    "label": "CP",
    "children": [
      {
        "label": "C",
        "word": "∅"
      },
      {
        "label": "InflP",
        "children": [ ... ]
      }
    ]
  },
  "explanation": "A brief linguistic analysis of the sentence structure.",
  "partsOfSpeech": [
    { "word": "word", "pos": "CATEGORY" }
  ]
}

Rules for X-bar labels:
1. Use standard labels: CP, InflP (Inflectional Phrase), DP, NP, VP, PP, AdjP, AdvP.
2. IMPORTANT: Use 'InflP' instead of 'TP'.
3. Follow X-bar schema: XP -> (Specifier) X'; X' -> X' (Adjunct) OR X' -> X (Head) (Complement).
4. Always label intermediate projections with a prime (e.g., N', V', Infl').
5. The leaf nodes should represent the actual words in the sentence.
6. CRITICAL: If a head (like C, Infl, or V) is null/silent, you MUST include the node with "word": "∅". Do not omit the head node. In most simple declarative sentences, the C head is null (∅).
7. Ensure the tree is deeply nested following proper formal syntax principles."#;

// ─── Wire shapes ─────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

// ─── Error classification ────────────────────────────────────────────────────

// Observed credential-failure signals from the service. A brittle contract:
// kept in one place so a structured error-code scheme can replace it.
fn credential_signal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)api[ _-]?key|not found").expect("static pattern"))
}

fn budget_parameter_signal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)thinking[ _]?budget|reasoning[ _]?budget").expect("static pattern"))
}

/// Map a non-success service response to a ParseError.
///
/// 400/403 and credential-flavored messages become `CredentialRejected` so
/// the UI can offer a renew-credentials affordance; everything else is
/// surfaced as `Transport` with the underlying message.
pub fn classify_api_error(status: u16, body: &str) -> ParseError {
    let rejected = || ParseError::CredentialRejected {
        message: format!("HTTP {status}: {}", body.trim()),
    };

    if status == 400 || status == 403 {
        return rejected();
    }
    if credential_signal().is_match(body) {
        return rejected();
    }
    if body.contains("INVALID_ARGUMENT") && !budget_parameter_signal().is_match(body) {
        return rejected();
    }

    warn!(status, "unclassified service error");
    ParseError::Transport {
        message: format!("HTTP {status}: {}", body.trim()),
    }
}

// ─── GeminiClient ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct GeminiClient {
    cfg: GeminiConfig,
    http: Client,
    base_url: String,
}

impl GeminiClient {
    /// Create a client. Fails with `CredentialMissing` before any network
    /// activity if no API key is configured.
    pub fn new(cfg: GeminiConfig) -> Result<Self, ParseError> {
        if cfg.api_key.is_empty() {
            return Err(ParseError::CredentialMissing);
        }
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .build()
            .map_err(|e| ParseError::Transport {
                message: e.to_string(),
            })?;
        Ok(Self {
            cfg,
            http,
            base_url: BASE_URL.to_string(),
        })
    }

    pub fn from_env() -> Result<Self, ParseError> {
        Self::new(GeminiConfig::from_env())
    }

    fn user_prompt(sentence: &str) -> String {
        format!(
            "Analyze the sentence: \"{sentence}\" using X-bar theory. Provide a deeply nested syntax tree. Ensure all silent heads like C or Infl are explicitly marked with the null symbol ∅."
        )
    }

    /// Parse one sentence into a validated X-bar tree.
    pub async fn parse(&self, sentence: &str) -> Result<ParseResult, ParseError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::user_prompt(sentence),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.cfg.temperature,
                response_mime_type: "application/json",
            },
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.cfg.model, self.cfg.api_key
        );
        debug!(
            url = %url.replace(&self.cfg.api_key, "***"),
            "sending generateContent request"
        );

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ParseError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ParseError::Transport {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(classify_api_error(status.as_u16(), &body));
        }

        let envelope: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| ParseError::Transport {
                message: format!("unexpected response envelope: {e}"),
            })?;

        let text = envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();
        if text.is_empty() {
            return Err(ParseError::EmptyResponse);
        }

        let result = validate_response(&text)?;
        info!(
            nodes = result.tree.node_count(),
            depth = result.tree.max_depth(),
            "parsed sentence"
        );
        Ok(result)
    }
}

/// Convenience entry point: configure from the environment and parse one
/// sentence. This is the single exposed operation of the client side.
pub async fn parse_sentence(sentence: &str) -> Result<ParseResult, ParseError> {
    GeminiClient::from_env()?.parse(sentence).await
}

// ─── Tests ───────────────────────────────────────────────────────────────────
