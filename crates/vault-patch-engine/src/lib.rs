pub mod editing;
pub mod io;
pub mod vault;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{
    EditError, EditNote, EditOutcome, EditReport, ErrorCategory, Operation, OperationFailure,
    OperationKind, apply, decode_operations,
};
pub use io::IoError;
pub use vault::{NoteEditSummary, VaultError, WriteMode, edit_note};
