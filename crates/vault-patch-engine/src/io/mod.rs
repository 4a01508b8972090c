use relative_path::{Component, RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Note not found: {0}")]
    NotFound(PathBuf),
    #[error("Note path escapes the notes directory: {0}")]
    OutsideNotesDir(RelativePathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// Resolve a note path against the notes root, refusing `..` that climbs out
fn resolve(relative_path: &RelativePath, notes_root: &Path) -> Result<PathBuf, IoError> {
    let normalized = relative_path.normalize();
    if matches!(normalized.components().next(), Some(Component::ParentDir)) {
        return Err(IoError::OutsideNotesDir(relative_path.to_relative_path_buf()));
    }
    Ok(normalized.to_path(notes_root))
}

/// Read a note and return its content
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    let absolute_path = resolve(relative_path, notes_root)?;
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a note
pub fn write_file(
    relative_path: &RelativePath,
    notes_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = resolve(relative_path, notes_root)?;

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
