//! Error kinds for the parse/validate/render pipeline.
//!
//! Every failure from the Gemini collaborator is mapped to exactly one of
//! these variants at the client boundary; nothing propagates unclassified.

use thiserror::Error;

// ─── ParseError ──────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ParseError {
    /// No API credential configured. Raised before any network call.
    #[error("no API key configured; set GEMINI_API_KEY")]
    CredentialMissing,

    /// The collaborator rejected the credential as invalid or expired.
    #[error("API credential rejected: {message}")]
    CredentialRejected { message: String },

    /// The collaborator returned no content body.
    #[error("the model returned an empty response")]
    EmptyResponse,

    /// The content body is not parseable as JSON.
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Parsed JSON lacks required fields or violates the tree shape.
    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    /// Any other network or service failure.
    #[error("request failed: {message}")]
    Transport { message: String },
}

impl ParseError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// True for the two credential kinds that should surface a
    /// "renew credentials" affordance instead of a generic error.
    pub fn needs_new_credentials(&self) -> bool {
        matches!(
            self,
            Self::CredentialMissing | Self::CredentialRejected { .. }
        )
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
