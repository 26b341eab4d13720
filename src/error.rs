//! Error types for fieldcase.

use std::io;

use thiserror::Error;

/// Failure from a single casing operation.
#[derive(Debug, Error)]
pub enum CaseError {
    #[error("cannot convert {word:?} to {style}")]
    Unsupported { word: String, style: String },

    #[error("field is not valid UTF-8")]
    InvalidUtf8,
}

/// Errors that terminate a fieldcase run.
#[derive(Debug, Error)]
pub enum FieldcaseError {
    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    #[error("at least one target field is required")]
    NoTargets,

    #[error("target positions are 1-based, got {0}")]
    InvalidTarget(i64),

    #[error("no case style given")]
    MissingCase,

    #[error("unknown case style: {0:?}")]
    UnknownCase(String),

    #[error("ambiguous case style {name:?} (matches {})", .candidates.join(", "))]
    AmbiguousCase {
        name: String,
        candidates: Vec<&'static str>,
    },

    #[error("error at: line={line} col={column} word={word} case={style}, {source}")]
    Transform {
        line: usize,
        column: usize,
        word: String,
        style: String,
        #[source]
        source: CaseError,
    },

    #[error("reading standard input: {0}")]
    Input(#[source] io::Error),

    #[error("writing standard output: {0}")]
    Output(#[source] io::Error),
}

impl FieldcaseError {
    /// Configuration problems are detected before any input is read and
    /// are reported together with the usage text.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::EmptyDelimiter
                | Self::NoTargets
                | Self::InvalidTarget(_)
                | Self::MissingCase
                | Self::UnknownCase(_)
                | Self::AmbiguousCase { .. }
        )
    }

    /// Whether the available case styles should be listed after the usage.
    pub fn wants_case_list(&self) -> bool {
        matches!(
            self,
            Self::MissingCase | Self::UnknownCase(_) | Self::AmbiguousCase { .. }
        )
    }
}
