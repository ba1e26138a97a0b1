//! Container format decoding modules.
//!
//! Each format follows a layered structure:
//! - `layout`: byte offsets, ranges and marker values (source of truth)
//! - `reader`: safe byte access and format conventions
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure functions of a single immutable buffer and contain no
//! I/O; file access belongs to the caller. Decoding independent files in
//! parallel is safe because no state is shared across decode calls.

pub(crate) mod common;
pub mod instrument;
pub mod kit;
