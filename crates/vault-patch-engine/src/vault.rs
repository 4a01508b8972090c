//! Read, edit and write back a single note.
//!
//! This is the persistence side of the editing core: the note is only
//! rewritten when the batch produced different text.

use relative_path::{RelativePath, RelativePathBuf};
use serde::Serialize;
use std::path::Path;

use crate::editing::{self, EditError, EditOutcome, Operation};
use crate::io::{self, IoError};

#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Whether a changed note is written back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Persist,
    DryRun,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEditSummary {
    pub path: RelativePathBuf,
    pub outcome: EditOutcome,
    /// True only when the note on disk was rewritten
    pub written: bool,
}

/// Apply `operations` to the note at `relative_path` under `notes_root`.
///
/// Failed batches and unchanged results leave the file as it was.
pub fn edit_note(
    notes_root: &Path,
    relative_path: &RelativePath,
    operations: &[Operation],
    mode: WriteMode,
) -> Result<NoteEditSummary, VaultError> {
    io::validate_notes_dir(notes_root)?;
    let original = io::read_file(relative_path, notes_root)?;

    let outcome = editing::apply(&original, operations)?;

    let written = match (outcome.changed_text(), mode) {
        (Some(text), WriteMode::Persist) => {
            io::write_file(relative_path, notes_root, text)?;
            tracing::info!(path = %relative_path, notes = outcome.notes().len(), "note updated");
            true
        }
        (Some(_), WriteMode::DryRun) => {
            tracing::debug!(path = %relative_path, "dry run, note not written");
            false
        }
        (None, _) => {
            tracing::debug!(path = %relative_path, "note unchanged, skipping write");
            false
        }
    };

    Ok(NoteEditSummary {
        path: relative_path.to_relative_path_buf(),
        outcome,
        written,
    })
}
