use crate::engine::edit::Edit;
use crate::engine::hunk::Hunk;
use derive_new::new;

pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditPath;
    type EditScript;
    type Output;

    fn compute_lcs_table(&self) -> Self::Trace;
    fn backtrack(&self) -> Self::EditPath;
    fn diff(&self) -> Self::EditScript;

    fn format_diff(&self) -> Self::Output
    where
        T: Clone + Into<String>,
        Self::EditScript: AsRef<[Edit<T>]>,
        Self::Output: From<String>,
    {
        let edits = self.diff();
        let formatted = edits
            .as_ref()
            .iter()
            .map(|edit| edit.as_string())
            .collect::<Vec<_>>()
            .join("\n");
        formatted.into()
    }

    fn flatten_diff(&self) -> Vec<Hunk<T>>
    where
        T: Clone,
        Self::EditScript: AsRef<[Edit<T>]>,
    {
        Hunk::filter(self.diff().as_ref())
    }
}

/// Longest-common-subsequence alignment over two borrowed slices.
///
/// Exact rather than heuristic: the script it produces maximizes the number
/// of `Equal` operations, at O(m*n) time and space for the length table.
/// When a horizontal and a vertical backtrace move are equally optimal, the
/// horizontal one wins, so insertions are emitted before deletions in the
/// walked direction. The `>=` comparison below must match the table's own
/// `max` choice or the backtrace could leave an optimal path.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for LcsDiff<'d, T> {
    type Trace = Vec<Vec<usize>>;
    type EditPath = Vec<(usize, usize, usize, usize)>;
    type EditScript = Vec<Edit<T>>;
    type Output = String;

    fn compute_lcs_table(&self) -> Self::Trace {
        let (m, n) = (self.a.len(), self.b.len());

        // table[i][j] = LCS length of a[..i] and b[..j]; row/column 0 stay 0
        let mut table = vec![vec![0usize; n + 1]; m + 1];

        for i in 1..=m {
            for j in 1..=n {
                table[i][j] = if self.a[i - 1] == self.b[j - 1] {
                    table[i - 1][j - 1] + 1
                } else {
                    table[i][j - 1].max(table[i - 1][j])
                };
            }
        }

        table
    }

    fn backtrack(&self) -> Self::EditPath {
        let table = self.compute_lcs_table();
        let (mut i, mut j) = (self.a.len(), self.b.len());
        let mut edit_path = Vec::new();

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && self.a[i - 1] == self.b[j - 1] {
                // diagonal move, both lines kept
                edit_path.push((i - 1, j - 1, i, j));
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || table[i][j - 1] >= table[i - 1][j]) {
                // horizontal move, line only in b
                edit_path.push((i, j - 1, i, j));
                j -= 1;
            } else {
                // vertical move, line only in a
                edit_path.push((i - 1, j, i, j));
                i -= 1;
            }
        }

        edit_path
    }

    fn diff(&self) -> Self::EditScript {
        let mut diff = Vec::new();

        for (prev_i, prev_j, i, j) in self.backtrack() {
            if i != prev_i && j != prev_j {
                diff.push(Edit::Equal {
                    value: self.a[prev_i].clone(),
                });
            } else if j != prev_j {
                diff.push(Edit::Added {
                    value: self.b[prev_j].clone(),
                });
            } else {
                diff.push(Edit::Removed {
                    value: self.a[prev_i].clone(),
                });
            }
        }

        // the backtrace walks end-to-start
        diff.reverse();
        diff
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::edit::Edit;
    use crate::engine::lcs_diff::{DiffAlgorithm, LcsDiff};
    use crate::engine::{compute_diff, split_lines};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn template_versions() -> (&'static str, &'static str) {
        (
            "You are a helpful assistant.\nAnswer in {{language}}.\nBe concise.",
            "You are a helpful assistant.\nAnswer in {{language}}.\nCite sources.\nBe concise.",
        )
    }

    #[rstest]
    fn test_single_line_replacement() {
        let result = compute_diff("a\nb\nc", "a\nx\nc");
        let expected = vec![
            Edit::Equal { value: "a" },
            Edit::Removed { value: "b" },
            Edit::Added { value: "x" },
            Edit::Equal { value: "c" },
        ];

        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_trailing_addition() {
        let result = compute_diff("line1\nline2", "line1\nline2\nline3");
        let expected = vec![
            Edit::Equal { value: "line1" },
            Edit::Equal { value: "line2" },
            Edit::Added { value: "line3" },
        ];

        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_inserted_instruction_line(template_versions: (&'static str, &'static str)) {
        let (before, after) = template_versions;
        let result = compute_diff(before, after);
        let expected = vec![
            Edit::Equal {
                value: "You are a helpful assistant.",
            },
            Edit::Equal {
                value: "Answer in {{language}}.",
            },
            Edit::Added {
                value: "Cite sources.",
            },
            Edit::Equal {
                value: "Be concise.",
            },
        ];

        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_identity_is_all_equal(template_versions: (&'static str, &'static str)) {
        let (before, _) = template_versions;
        let result = compute_diff(before, before);

        let expected = split_lines(before)
            .into_iter()
            .map(|value| Edit::Equal { value })
            .collect::<Vec<_>>();

        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_disjoint_inputs_remove_all_then_add_all() {
        let result = compute_diff("a1\na2", "b1\nb2");
        let expected = vec![
            Edit::Removed { value: "a1" },
            Edit::Removed { value: "a2" },
            Edit::Added { value: "b1" },
            Edit::Added { value: "b2" },
        ];

        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_empty_inputs_yield_single_equal_empty_line() {
        let result = compute_diff("", "");

        assert_eq!(result, vec![Edit::Equal { value: "" }]);
    }

    #[rstest]
    fn test_empty_before_is_replaced_by_content() {
        // "" splits to one empty line, so that line is removed
        let result = compute_diff("", "x");
        let expected = vec![Edit::Removed { value: "" }, Edit::Added { value: "x" }];

        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_trailing_newline_yields_trailing_empty_line() {
        let result = compute_diff("a\n", "a");
        let expected = vec![Edit::Equal { value: "a" }, Edit::Removed { value: "" }];

        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_deterministic_across_calls(template_versions: (&'static str, &'static str)) {
        let (before, after) = template_versions;

        assert_eq!(compute_diff(before, after), compute_diff(before, after));
    }

    #[rstest]
    fn test_diff_chars() {
        let a = "abcabba".chars().collect::<Vec<_>>();
        let b = "cbabac".chars().collect::<Vec<_>>();
        let result = LcsDiff::new(&a, &b).diff();

        let equal_count = result
            .iter()
            .filter(|edit| matches!(edit, Edit::Equal { .. }))
            .count();

        // LCS("abcabba", "cbabac") has length 4
        assert_eq!(equal_count, 4);
        assert_eq!(result.len(), a.len() + b.len() - equal_count);
    }

    #[rstest]
    fn test_flatten_diff_groups_changes() {
        let a = split_lines("a\nb\nc");
        let b = split_lines("a\nx\nc");
        let hunks = LcsDiff::new(&a, &b).flatten_diff();

        assert_eq!(hunks.len(), 1);
        assert_eq!((hunks[0].a_start(), hunks[0].a_size()), (1, 3));
        assert_eq!((hunks[0].b_start(), hunks[0].b_size()), (1, 3));
    }

    #[rstest]
    fn test_format_diff() {
        let a = split_lines("a\nb");
        let b = split_lines("a\nc");
        let formatted: String = LcsDiff::new(&a, &b).format_diff();

        assert_eq!(formatted, " a\n-b\n+c");
    }

    #[rstest]
    #[case("a\nb\nc\nd", "a\nc\nd\ne", 3)]
    #[case("x", "x", 1)]
    #[case("x\ny", "y\nx", 1)]
    #[case("one\ntwo\nthree", "four\nfive", 0)]
    fn test_minimal_edit_count(#[case] a: &str, #[case] b: &str, #[case] lcs_len: usize) {
        let result = compute_diff(a, b);

        let (m, n) = (split_lines(a).len(), split_lines(b).len());
        let equal_count = result
            .iter()
            .filter(|edit| matches!(edit, Edit::Equal { .. }))
            .count();
        let changed_count = result.len() - equal_count;

        assert_eq!(equal_count, lcs_len);
        assert_eq!(changed_count, m + n - 2 * lcs_len);
    }

    #[rstest]
    fn test_lcs_table_shape_and_corner() {
        let a = split_lines("a\nb\nc");
        let b = split_lines("a\nx\nc");
        let table = LcsDiff::new(&a, &b).compute_lcs_table();

        assert_eq!(table.len(), 4);
        assert!(table.iter().all(|row| row.len() == 4));
        assert!(table[0].iter().all(|&len| len == 0));
        assert_eq!(table[3][3], 2);
    }
}
