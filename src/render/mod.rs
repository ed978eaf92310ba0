//! Unified diff rendering
//!
//! Maps an edit script to the conventional unified text form: a bold
//! `---`/`+++` header naming the two versions, then each hunk introduced by
//! a cyan `@@` marker. Styling comes from `colored` and follows its global
//! override, so non-terminal callers can disable it.

use crate::engine::edit::Edit;
use crate::engine::hunk::Hunk;
use colored::Colorize;
use std::io::Write;

/// Writes the unified form of an edit script. Labels name the two versions
/// being compared (e.g. `v3` and `v4` of a template).
pub fn write_unified<T, W>(
    writer: &mut W,
    label_a: &str,
    label_b: &str,
    edits: &[Edit<T>],
) -> anyhow::Result<()>
where
    T: Clone + Into<String>,
    W: Write,
{
    writeln!(writer, "{}", format!("--- {label_a}").bold())?;
    writeln!(writer, "{}", format!("+++ {label_b}").bold())?;

    for hunk in Hunk::filter(edits) {
        let a_offset = format!("{},{}", hunk.a_start(), hunk.a_size());
        let b_offset = format!("{},{}", hunk.b_start(), hunk.b_size());

        writeln!(
            writer,
            "{}",
            format!("@@ -{a_offset} +{b_offset} @@").cyan()
        )?;

        for edit in hunk.edits() {
            writeln!(writer, "{edit}")?;
        }
    }

    Ok(())
}

/// `write_unified` into an in-memory buffer.
pub fn unified_to_string<T>(label_a: &str, label_b: &str, edits: &[Edit<T>]) -> anyhow::Result<String>
where
    T: Clone + Into<String>,
{
    let mut buffer = Vec::new();
    write_unified(&mut buffer, label_a, label_b, edits)?;

    Ok(String::from_utf8(buffer)?)
}
