//! Syntax tree model and the decode-then-validate boundary.

pub mod types;
pub mod validate;

pub use types::{NodeKind, ParseResult, PosTag, SyntaxNode};
pub use validate::validate_response;
