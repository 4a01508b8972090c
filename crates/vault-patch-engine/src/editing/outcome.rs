use serde::Serialize;

/// What one applied operation did, in the order the operations ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "note", rename_all = "snake_case")]
pub enum EditNote {
    Appended { chars: usize },
    Prepended { chars: usize },
    InsertedAfter { occurrence: usize, chars: usize },
    InsertedBefore { occurrence: usize, chars: usize },
    Replaced { occurrence: usize },
    ReplacedAll { count: usize },
    ReplacedRange { start: usize, end: usize },
}

impl std::fmt::Display for EditNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditNote::Appended { chars } => write!(f, "appended {chars} characters"),
            EditNote::Prepended { chars } => write!(f, "prepended {chars} characters"),
            EditNote::InsertedAfter { occurrence, chars } => write!(
                f,
                "inserted {chars} characters after occurrence {occurrence} of anchor"
            ),
            EditNote::InsertedBefore { occurrence, chars } => write!(
                f,
                "inserted {chars} characters before occurrence {occurrence} of anchor"
            ),
            EditNote::Replaced { occurrence } => {
                write!(f, "replaced occurrence {occurrence} of target")
            }
            EditNote::ReplacedAll { count } => write!(f, "replaced {count} occurrences of target"),
            EditNote::ReplacedRange { start, end } => {
                write!(f, "replaced characters {start}..{end}")
            }
        }
    }
}

/// Final text of a batch that changed the buffer, plus its audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditReport {
    pub text: String,
    pub notes: Vec<EditNote>,
}

/// Successful result of [`crate::editing::apply`].
///
/// Failure is the `Err` side, [`crate::editing::EditError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EditOutcome {
    /// The final text differs from the input and should be persisted
    Changed(EditReport),
    /// Every operation applied but the text ended up identical to the input;
    /// there is nothing to persist
    Unchanged { notes: Vec<EditNote> },
}

impl EditOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, EditOutcome::Changed(_))
    }

    /// The new text, only when it differs from the input
    pub fn changed_text(&self) -> Option<&str> {
        match self {
            EditOutcome::Changed(report) => Some(&report.text),
            EditOutcome::Unchanged { .. } => None,
        }
    }

    pub fn notes(&self) -> &[EditNote] {
        match self {
            EditOutcome::Changed(report) => &report.notes,
            EditOutcome::Unchanged { notes } => notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_note_messages() {
        let notes = [
            EditNote::Appended { chars: 3 },
            EditNote::InsertedBefore { occurrence: 2, chars: 1 },
            EditNote::ReplacedAll { count: 3 },
            EditNote::ReplacedRange { start: 2, end: 5 },
        ];
        let rendered: Vec<String> = notes.iter().map(ToString::to_string).collect();

        assert_snapshot!(rendered.join("\n"), @r###"
        appended 3 characters
        inserted 1 characters before occurrence 2 of anchor
        replaced 3 occurrences of target
        replaced characters 2..5
        "###);
    }

    #[test]
    fn test_unchanged_outcome_has_no_text() {
        let outcome = EditOutcome::Unchanged {
            notes: vec![EditNote::Replaced { occurrence: 1 }],
        };
        assert!(!outcome.is_changed());
        assert_eq!(outcome.changed_text(), None);
        assert_eq!(outcome.notes().len(), 1);
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let outcome = EditOutcome::Changed(EditReport {
            text: "ab".to_string(),
            notes: vec![EditNote::Appended { chars: 1 }],
        });

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "outcome": "changed",
                "text": "ab",
                "notes": [{ "note": "appended", "chars": 1 }]
            })
        );
    }
}
