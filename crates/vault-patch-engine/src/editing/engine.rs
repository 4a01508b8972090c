use xi_rope::delta::Builder;
use xi_rope::{Delta, Rope, RopeInfo};

use crate::editing::locate::{byte_offset, char_len, locate_byte, match_byte_ranges};
use crate::editing::{EditError, EditNote, EditOutcome, EditReport, Operation, OperationFailure};

/// Apply `operations` to `initial` in order.
///
/// Each operation sees the buffer left by the ones before it, so anchors and
/// targets may refer to text inserted earlier in the same batch. The first
/// failure aborts the batch and no buffer is returned with it.
#[tracing::instrument(level = "debug", skip_all, fields(operations = operations.len()))]
pub fn apply(initial: &str, operations: &[Operation]) -> Result<EditOutcome, EditError> {
    if operations.is_empty() {
        return Err(EditError::EmptyBatch);
    }

    let mut buffer = Rope::from(initial);
    let mut notes = Vec::with_capacity(operations.len());

    for (position, op) in operations.iter().enumerate() {
        let index = position + 1;
        let (next, note) = apply_step(&buffer, op).map_err(|cause| {
            tracing::warn!(index, kind = %op.kind(), %cause, "edit batch aborted");
            EditError::Operation {
                index,
                kind: op.kind(),
                cause,
            }
        })?;
        tracing::debug!(index, kind = %op.kind(), %note, "applied operation");

        buffer = next;
        notes.push(note);
    }

    let text = buffer.to_string();
    if text == initial {
        Ok(EditOutcome::Unchanged { notes })
    } else {
        Ok(EditOutcome::Changed(EditReport { text, notes }))
    }
}

/// Apply a single operation, producing a new buffer and leaving `buffer`
/// untouched.
pub fn apply_step(buffer: &Rope, op: &Operation) -> Result<(Rope, EditNote), OperationFailure> {
    let (delta, note) = compile_operation(buffer, op)?;
    Ok((delta.apply(buffer), note))
}

/// Resolve an operation against the current buffer and compile it to a delta
fn compile_operation(
    buffer: &Rope,
    op: &Operation,
) -> Result<(Delta<RopeInfo>, EditNote), OperationFailure> {
    let mut builder = Builder::new(buffer.len());

    let note = match op {
        Operation::Append { text } => {
            let end = buffer.len();
            builder.replace(end..end, Rope::from(text));
            EditNote::Appended {
                chars: char_len(text),
            }
        }
        Operation::Prepend { text } => {
            builder.replace(0..0, Rope::from(text));
            EditNote::Prepended {
                chars: char_len(text),
            }
        }
        Operation::InsertAfter {
            anchor,
            text,
            occurrence,
        } => {
            let start = resolve_anchor(buffer, anchor, *occurrence)?;
            let at = start + anchor.len();
            builder.replace(at..at, Rope::from(text));
            EditNote::InsertedAfter {
                occurrence: *occurrence,
                chars: char_len(text),
            }
        }
        Operation::InsertBefore {
            anchor,
            text,
            occurrence,
        } => {
            let at = resolve_anchor(buffer, anchor, *occurrence)?;
            builder.replace(at..at, Rope::from(text));
            EditNote::InsertedBefore {
                occurrence: *occurrence,
                chars: char_len(text),
            }
        }
        Operation::Replace {
            target,
            text,
            all_occurrences: true,
            ..
        } => {
            if target.is_empty() {
                return Err(OperationFailure::EmptyTarget);
            }
            let haystack = buffer.to_string();
            let mut count = 0;
            for range in match_byte_ranges(&haystack, target) {
                builder.replace(range, Rope::from(text));
                count += 1;
            }
            if count == 0 {
                return Err(OperationFailure::ReplaceAllTargetNotFound {
                    target: target.clone(),
                });
            }
            EditNote::ReplacedAll { count }
        }
        Operation::Replace {
            target,
            text,
            occurrence,
            all_occurrences: false,
        } => {
            if target.is_empty() {
                return Err(OperationFailure::EmptyTarget);
            }
            if *occurrence == 0 {
                return Err(OperationFailure::ZeroOccurrence);
            }
            let start = locate_byte(&buffer.to_string(), target, *occurrence).ok_or_else(|| {
                OperationFailure::TargetNotFound {
                    target: target.clone(),
                    occurrence: *occurrence,
                }
            })?;
            builder.replace(start..start + target.len(), Rope::from(text));
            EditNote::Replaced {
                occurrence: *occurrence,
            }
        }
        Operation::ReplaceRange {
            start_offset,
            end_offset,
            text,
        } => {
            let (start, end) = (*start_offset, *end_offset);
            if start > end {
                return Err(OperationFailure::StartAfterEnd { start, end });
            }
            let haystack = buffer.to_string();
            let len = char_len(&haystack);
            if end > len {
                return Err(OperationFailure::EndOutOfBounds { end, len });
            }
            let range = byte_offset(&haystack, start)..byte_offset(&haystack, end);
            builder.replace(range, Rope::from(text));
            EditNote::ReplacedRange { start, end }
        }
    };

    Ok((builder.build(), note))
}

/// Byte offset of the start of the anchor's `occurrence`-th match
fn resolve_anchor(buffer: &Rope, anchor: &str, occurrence: usize) -> Result<usize, OperationFailure> {
    if anchor.is_empty() {
        return Err(OperationFailure::EmptyAnchor);
    }
    if occurrence == 0 {
        return Err(OperationFailure::ZeroOccurrence);
    }
    locate_byte(&buffer.to_string(), anchor, occurrence).ok_or_else(|| {
        OperationFailure::AnchorNotFound {
            anchor: anchor.to_string(),
            occurrence,
        }
    })
}
