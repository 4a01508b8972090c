use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::editing::EditError;

/// Edits that can be applied to a note buffer.
///
/// The JSON shape is tagged by `type` with camelCase field names:
///
/// ```json
/// [
///   { "type": "append", "text": "\n- new item" },
///   { "type": "replace", "target": "TODO", "text": "DONE", "allOccurrences": true },
///   { "type": "replace_range", "startOffset": 0, "endOffset": 7, "text": "# Title" }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Operation {
    Append {
        text: String,
    },
    Prepend {
        text: String,
    },
    InsertAfter {
        anchor: String,
        text: String,
        #[serde(default = "first_occurrence")]
        occurrence: usize,
    },
    InsertBefore {
        anchor: String,
        text: String,
        #[serde(default = "first_occurrence")]
        occurrence: usize,
    },
    Replace {
        target: String,
        text: String,
        /// Ignored when `all_occurrences` is set
        #[serde(default = "first_occurrence")]
        occurrence: usize,
        #[serde(default)]
        all_occurrences: bool,
    },
    /// Half-open char span `[start_offset, end_offset)`
    ReplaceRange {
        start_offset: usize,
        end_offset: usize,
        text: String,
    },
}

fn first_occurrence() -> usize {
    1
}

impl Operation {
    pub fn append(text: impl Into<String>) -> Self {
        Operation::Append { text: text.into() }
    }

    pub fn prepend(text: impl Into<String>) -> Self {
        Operation::Prepend { text: text.into() }
    }

    pub fn insert_after(anchor: impl Into<String>, text: impl Into<String>, occurrence: usize) -> Self {
        Operation::InsertAfter {
            anchor: anchor.into(),
            text: text.into(),
            occurrence,
        }
    }

    pub fn insert_before(anchor: impl Into<String>, text: impl Into<String>, occurrence: usize) -> Self {
        Operation::InsertBefore {
            anchor: anchor.into(),
            text: text.into(),
            occurrence,
        }
    }

    pub fn replace(target: impl Into<String>, text: impl Into<String>, occurrence: usize) -> Self {
        Operation::Replace {
            target: target.into(),
            text: text.into(),
            occurrence,
            all_occurrences: false,
        }
    }

    pub fn replace_all(target: impl Into<String>, text: impl Into<String>) -> Self {
        Operation::Replace {
            target: target.into(),
            text: text.into(),
            occurrence: first_occurrence(),
            all_occurrences: true,
        }
    }

    pub fn replace_range(start_offset: usize, end_offset: usize, text: impl Into<String>) -> Self {
        Operation::ReplaceRange {
            start_offset,
            end_offset,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Append { .. } => OperationKind::Append,
            Operation::Prepend { .. } => OperationKind::Prepend,
            Operation::InsertAfter { .. } => OperationKind::InsertAfter,
            Operation::InsertBefore { .. } => OperationKind::InsertBefore,
            Operation::Replace { .. } => OperationKind::Replace,
            Operation::ReplaceRange { .. } => OperationKind::ReplaceRange,
        }
    }
}

/// The `type` tag of an [`Operation`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Append,
    Prepend,
    InsertAfter,
    InsertBefore,
    Replace,
    ReplaceRange,
}

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        OperationKind::Append,
        OperationKind::Prepend,
        OperationKind::InsertAfter,
        OperationKind::InsertBefore,
        OperationKind::Replace,
        OperationKind::ReplaceRange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Append => "append",
            OperationKind::Prepend => "prepend",
            OperationKind::InsertAfter => "insert_after",
            OperationKind::InsertBefore => "insert_before",
            OperationKind::Replace => "replace",
            OperationKind::ReplaceRange => "replace_range",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode a JSON array of operations.
///
/// Elements are checked one at a time so a failure can name its 1-based
/// position. Input that is not a JSON array fails as
/// [`EditError::InvalidBatch`]. An element that is not an object, or a known
/// type with bad fields, is [`EditError::Malformed`]; an unknown or missing
/// `type` is [`EditError::UnsupportedOperation`]. An empty array decodes
/// fine; rejecting it is left to [`crate::editing::apply`].
pub fn decode_operations(json: &str) -> Result<Vec<Operation>, EditError> {
    let values: Vec<Value> =
        serde_json::from_str(json).map_err(|err| EditError::InvalidBatch(err.to_string()))?;

    values
        .into_iter()
        .enumerate()
        .map(|(position, value)| decode_operation(position + 1, value))
        .collect()
}

fn decode_operation(index: usize, value: Value) -> Result<Operation, EditError> {
    if !value.is_object() {
        return Err(EditError::Malformed {
            index,
            message: format!("expected an operation object, found {value}"),
        });
    }

    let tag = value.get("type").and_then(Value::as_str);
    if tag.and_then(OperationKind::from_tag).is_none() {
        return Err(EditError::UnsupportedOperation {
            index,
            kind: tag.unwrap_or("<missing>").to_string(),
        });
    }

    serde_json::from_value(value).map_err(|err| EditError::Malformed {
        index,
        message: err.to_string(),
    })
}
