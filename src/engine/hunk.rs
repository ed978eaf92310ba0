use crate::engine::edit::Edit;

/// Equal lines of context kept on each side of a change.
pub const HUNK_CONTEXT: usize = 3;

/// A contiguous run of edits around one or more changed lines, with the
/// 1-based start line and line count of each side for the
/// `@@ -a_start,a_size +b_start,b_size @@` header. When a side contributes
/// no lines, its start is the line number preceding the hunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    a_start: usize,
    b_start: usize,
    edits: Vec<Edit<T>>,
}

impl<T> Hunk<T> {
    pub fn a_start(&self) -> usize {
        self.a_start
    }

    pub fn b_start(&self) -> usize {
        self.b_start
    }

    pub fn a_size(&self) -> usize {
        count_a_lines(&self.edits)
    }

    pub fn b_size(&self) -> usize {
        count_b_lines(&self.edits)
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }
}

impl<T: Clone> Hunk<T> {
    /// Collapses long unchanged runs, grouping changes separated by at most
    /// `2 * HUNK_CONTEXT` equal lines into a single hunk. An all-equal
    /// script yields no hunks.
    pub fn filter(edits: &[Edit<T>]) -> Vec<Hunk<T>> {
        let changes = edits
            .iter()
            .enumerate()
            .filter(|(_, edit)| !matches!(edit, Edit::Equal { .. }))
            .map(|(idx, _)| idx)
            .collect::<Vec<_>>();

        let mut groups: Vec<(usize, usize)> = Vec::new();
        for &idx in &changes {
            match groups.last_mut() {
                Some((_, last)) if idx - *last - 1 <= 2 * HUNK_CONTEXT => *last = idx,
                _ => groups.push((idx, idx)),
            }
        }

        groups
            .into_iter()
            .map(|(first, last)| {
                let lo = first.saturating_sub(HUNK_CONTEXT);
                let hi = (last + HUNK_CONTEXT + 1).min(edits.len());

                Self::from_range(edits, lo, hi)
            })
            .collect()
    }

    fn from_range(edits: &[Edit<T>], lo: usize, hi: usize) -> Hunk<T> {
        let slice = edits[lo..hi].to_vec();

        let a_before = count_a_lines(&edits[..lo]);
        let b_before = count_b_lines(&edits[..lo]);

        let a_start = if count_a_lines(&slice) == 0 {
            a_before
        } else {
            a_before + 1
        };
        let b_start = if count_b_lines(&slice) == 0 {
            b_before
        } else {
            b_before + 1
        };

        Hunk {
            a_start,
            b_start,
            edits: slice,
        }
    }
}

fn count_a_lines<T>(edits: &[Edit<T>]) -> usize {
    edits
        .iter()
        .filter(|edit| matches!(edit, Edit::Equal { .. } | Edit::Removed { .. }))
        .count()
}

fn count_b_lines<T>(edits: &[Edit<T>]) -> usize {
    edits
        .iter()
        .filter(|edit| matches!(edit, Edit::Equal { .. } | Edit::Added { .. }))
        .count()
}
