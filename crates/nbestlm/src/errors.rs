//! # Error Types

use std::path::PathBuf;

/// Errors from nbestlm operations.
#[derive(Debug, thiserror::Error)]
pub enum NBestLmError {
    /// A token was not present in the training vocabulary.
    #[error("unknown token {token:?} at position {position}")]
    UnknownToken {
        /// The token text.
        token: String,

        /// The index of the token in its input stream.
        position: usize,
    },

    /// An n-best list record did not follow the record grammar.
    #[error("malformed n-best record at line {line}: {reason}")]
    MalformedRecord {
        /// The 1-based line number of the offending line.
        line: usize,

        /// What was wrong with the line.
        reason: String,
    },

    /// The requested batch shape yields no windows for the data.
    #[error(
        "epoch_size == 0 for {data_len} tokens with batch_size={batch_size}, num_steps={num_steps}; \
         decrease batch_size or num_steps"
    )]
    DegenerateShape {
        /// The length of the flat token sequence.
        data_len: usize,

        /// The requested number of rows.
        batch_size: usize,

        /// The requested window length.
        num_steps: usize,
    },

    /// Token data and provenance links are not parallel.
    #[error("{data_len} tokens but {links_len} provenance links")]
    LengthMismatch {
        /// The number of tokens.
        data_len: usize,

        /// The number of provenance links.
        links_len: usize,
    },

    /// A required input file is missing.
    #[error("missing input file: {}", path.display())]
    MissingInput {
        /// The expected path.
        path: PathBuf,
    },

    /// Token id value out of range for the target type.
    #[error("token id out of range: {0}")]
    TokenOutOfRange(usize),

    /// Parse error (vocab files, integers, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for nbestlm operations.
pub type NLResult<T> = core::result::Result<T, NBestLmError>;
