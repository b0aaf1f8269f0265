//! Errors raised while loading configuration and parsing documents.
//!
//! The overlay itself never fails; everything here belongs to the collaborators around it.

use thiserror::Error;

/// Result type alias for document and application operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
/// Failures outside the overlay core.
pub enum Error {
    /// Reading the document or terminal I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The tree-sitter grammar could not be loaded into the parser.
    #[error("grammar rejected by parser: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The heading query does not compile against the grammar.
    #[error("invalid heading query: {0}")]
    Query(#[from] tree_sitter::QueryError),

    /// The parser produced no tree for the document.
    #[error("failed to parse {path}")]
    Parse {
        /// Document that could not be parsed.
        path: String,
    },

    /// The configuration file is not valid TOML for the config schema.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Edit requests could not be encoded.
    #[error("json encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
