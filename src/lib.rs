//! Line-based diff engine for template version comparison
//!
//! Computes a minimal edit script between two text blobs (the "before" and
//! "after" bodies of a template version) and renders it as a unified diff.
//! The engine is a pure function: no I/O, no shared state, deterministic
//! output for identical inputs.

pub mod engine;
pub mod render;

pub use engine::edit::Edit;
pub use engine::hunk::{HUNK_CONTEXT, Hunk};
pub use engine::lcs_diff::{DiffAlgorithm, LcsDiff};
pub use engine::{compute_diff, split_lines};
pub use render::{unified_to_string, write_unified};
