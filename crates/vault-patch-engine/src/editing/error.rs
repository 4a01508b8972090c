use serde::Serialize;
use thiserror::Error;

use crate::editing::OperationKind;

/// Broad class of a failure, for callers that report or retry differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// The operation list or an operation's fields are structurally invalid
    Validation,
    /// An anchor or target could not be resolved in the current buffer
    NotFound,
    /// The operation kind is not one the engine knows
    Unsupported,
}

/// Why a single operation could not be applied to the current buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationFailure {
    #[error("anchor must not be empty")]
    EmptyAnchor,

    #[error("target must not be empty")]
    EmptyTarget,

    #[error("occurrence must be 1 or greater")]
    ZeroOccurrence,

    #[error("anchor {anchor:?} not found (occurrence {occurrence})")]
    AnchorNotFound { anchor: String, occurrence: usize },

    #[error("target {target:?} not found (occurrence {occurrence})")]
    TargetNotFound { target: String, occurrence: usize },

    #[error("target {target:?} not found for replace all")]
    ReplaceAllTargetNotFound { target: String },

    #[error("startOffset {start} is greater than endOffset {end}")]
    StartAfterEnd { start: usize, end: usize },

    #[error("endOffset {end} is beyond the buffer length {len}")]
    EndOutOfBounds { end: usize, len: usize },
}

impl OperationFailure {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OperationFailure::EmptyAnchor
            | OperationFailure::EmptyTarget
            | OperationFailure::ZeroOccurrence
            | OperationFailure::StartAfterEnd { .. }
            | OperationFailure::EndOutOfBounds { .. } => ErrorCategory::Validation,
            OperationFailure::AnchorNotFound { .. }
            | OperationFailure::TargetNotFound { .. }
            | OperationFailure::ReplaceAllTargetNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}

/// A batch that could not be applied. No buffer accompanies this error; the
/// caller must not persist anything.
///
/// Operation indexes are 1-based positions in the submitted list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("operation list is empty")]
    EmptyBatch,

    /// The submitted list is not a JSON array; no operation index applies
    #[error("invalid operation list: {0}")]
    InvalidBatch(String),

    #[error("operation {index} ({kind}) failed: {cause}")]
    Operation {
        index: usize,
        kind: OperationKind,
        cause: OperationFailure,
    },

    #[error("operation {index}: unsupported operation type {kind:?}")]
    UnsupportedOperation { index: usize, kind: String },

    #[error("operation {index}: {message}")]
    Malformed { index: usize, message: String },
}

impl EditError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EditError::EmptyBatch | EditError::InvalidBatch(_) | EditError::Malformed { .. } => {
                ErrorCategory::Validation
            }
            EditError::Operation { cause, .. } => cause.category(),
            EditError::UnsupportedOperation { .. } => ErrorCategory::Unsupported,
        }
    }

    /// 1-based position of the failing operation, if the failure belongs to one
    pub fn operation_index(&self) -> Option<usize> {
        match self {
            EditError::EmptyBatch | EditError::InvalidBatch(_) => None,
            EditError::Operation { index, .. }
            | EditError::UnsupportedOperation { index, .. }
            | EditError::Malformed { index, .. } => Some(*index),
        }
    }
}
