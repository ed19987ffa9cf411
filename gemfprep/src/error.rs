use std::fmt;

/// Which namespace a label belongs to. Node and state registries never share indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Node,
    State,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Node => f.write_str("node"),
            IdentifierKind::State => f.write_str("state"),
        }
    }
}

/// Everything that can stop a translation. All variants are fatal to the run.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("line {line}: duplicate node in contact network: {label}")]
    DuplicateNode { line: u64, label: String },

    #[error("line {line}: node not declared in contact network: {label}")]
    UnknownNode { line: u64, label: String },

    #[error("unknown {kind} identifier: {label}")]
    UnknownIdentifier { kind: IdentifierKind, label: String },

    #[error("line {line}: last column of an EDGE row must be exactly d or u, found {value:?}")]
    InvalidDirectionality { line: u64, value: String },

    #[error("line {line}: malformed record (expected {expected}): {record:?}")]
    MalformedRecord {
        line: u64,
        expected: &'static str,
        record: String,
    },

    #[error("line {line}: duplicate transition from {from:?} to {to:?} by {}", .by.as_deref().unwrap_or("none"))]
    DuplicateTransition {
        line: u64,
        from: String,
        to: String,
        by: Option<String>,
    },

    #[error("line {line}: rate is not a number: {value:?}")]
    MalformedRate { line: u64, value: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TranslateError>;
