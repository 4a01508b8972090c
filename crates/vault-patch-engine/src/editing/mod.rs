/*!
 * # Batch Editing Core
 *
 * Applies an ordered list of [`Operation`]s to one note's text and reports
 * either the new text with a note per operation, or exactly which operation
 * could not be applied.
 *
 * ## Architecture Overview
 *
 * ### 1. Values, not a shared buffer
 * - The running buffer is an **`xi_rope::Rope`**; each operation compiles to a
 *   **Delta** against it and applying the delta yields the next rope
 * - [`apply_step`] takes `&Rope` and returns a fresh one, so a single step can
 *   be tested on its own
 * - Nothing survives between calls to [`apply`]
 *
 * ### 2. Resolution against the current text
 * - Anchors and targets are literal, case-sensitive substrings
 * - Occurrences are 1-based and never overlap (see [`locate`])
 * - They are resolved against the text as left by the previous operations,
 *   which makes operation order significant
 *
 * ### 3. All or nothing
 * - The first failure aborts the batch with an [`EditError`] naming the
 *   1-based index, the [`OperationKind`] and the [`OperationFailure`]
 * - Range bounds are never clamped, empty anchors never match
 * - A batch that leaves the text identical yields
 *   [`EditOutcome::Unchanged`], so the caller can skip writing
 *
 * ## Offsets
 *
 * All offsets exposed here (`startOffset`, `endOffset`, [`locate`] results)
 * count `char`s, not bytes.
 *
 * ## Usage Pattern
 *
 * ```rust
 * use vault_patch_engine::editing::{apply, EditOutcome, Operation};
 *
 * let ops = [
 *     Operation::insert_after("## Tasks\n", "- [ ] water plants\n", 1),
 *     Operation::replace_all("TODO", "DONE"),
 * ];
 *
 * let outcome = apply("## Tasks\nTODO: review\n", &ops).unwrap();
 * assert_eq!(
 *     outcome.changed_text(),
 *     Some("## Tasks\n- [ ] water plants\nDONE: review\n")
 * );
 * assert!(matches!(outcome, EditOutcome::Changed(_)));
 * ```
 */

pub mod engine;
pub mod error;
pub mod locate;
pub mod operation;
pub mod outcome;

pub use engine::{apply, apply_step};
pub use error::{EditError, ErrorCategory, OperationFailure};
pub use locate::{count_occurrences, locate};
pub use operation::{Operation, OperationKind, decode_operations};
pub use outcome::{EditNote, EditOutcome, EditReport};
