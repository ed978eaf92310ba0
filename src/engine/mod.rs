//! Edit script computation
//!
//! This module implements the line-level comparison pipeline:
//!
//! - `edit`: the `Equal`/`Added`/`Removed` operations an edit script is made of
//! - `lcs_diff`: longest-common-subsequence alignment over two line slices
//! - `hunk`: grouping of edits into hunks with surrounding context
//!
//! Inputs are split on `'\n'` with empty elements preserved, so an empty
//! string is a single empty line and an explicit trailing newline yields a
//! trailing empty line. The resulting script reconstructs both inputs:
//! `Equal` + `Removed` lines in order reproduce the first, `Equal` + `Added`
//! the second.

pub mod edit;
pub mod hunk;
pub mod lcs_diff;

use edit::Edit;
use lcs_diff::{DiffAlgorithm, LcsDiff};

/// Splits a text blob into its line sequence. No trimming or filtering;
/// order is the sequence's identity.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Computes the edit script between two version bodies, maximizing the
/// number of `Equal` lines. Quadratic in the line counts, so callers
/// comparing untrusted input are responsible for imposing a size ceiling.
pub fn compute_diff<'a>(text_a: &'a str, text_b: &'a str) -> Vec<Edit<&'a str>> {
    let a = split_lines(text_a);
    let b = split_lines(text_b);

    LcsDiff::new(&a, &b).diff()
}
