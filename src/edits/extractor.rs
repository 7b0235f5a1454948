//! Edit pattern extraction.
//!
//! Tokenizes an original and a revised text into whitespace-separated
//! words and aligns the two token sequences with a longest-common-
//! subsequence diff. Divergent regions are folded into insertions,
//! deletions, and `(old, new)` replacement pairs.

/// Word-level differences between an original and a revised text.
///
/// Produced by [`identify_edit_patterns`]. Replacement pairs are ordered
/// as they occur in the revised text; insertions and deletions keep
/// their source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditChanges {
    /// Words present only in the revised text, not paired with a deletion.
    pub insertions: Vec<String>,
    /// Words removed from the original text and not paired with an insertion.
    pub deletions: Vec<String>,
    /// `(old_word, new_word)` pairs where a removed word was replaced.
    pub replacements: Vec<(String, String)>,
}

impl EditChanges {
    /// Check whether the revised text introduced no word-level changes.
    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty() && self.deletions.is_empty() && self.replacements.is_empty()
    }
}

/// A single token-level operation from the diff backtrack.
enum TokenOp<'a> {
    Delete(&'a str),
    Insert(&'a str),
}

/// Identify word-level edit patterns between two texts.
///
/// Both inputs are split on whitespace. The token sequences are aligned
/// with a longest-common-subsequence diff; within each divergent region
/// deletions are emitted before insertions. A deletion is held until the
/// next insertion arrives and the two are folded into a replacement
/// pair; equal tokens between them do not break the pairing. A held
/// deletion displaced by a later deletion, or still pending at the end
/// of the stream, is reported as an unpaired deletion.
pub fn identify_edit_patterns(original: &str, revised: &str) -> EditChanges {
    let original_words: Vec<&str> = original.split_whitespace().collect();
    let revised_words: Vec<&str> = revised.split_whitespace().collect();

    let mut changes = EditChanges::default();
    let mut pending_deletion: Option<&str> = None;

    for op in diff_ops(&original_words, &revised_words) {
        match op {
            TokenOp::Delete(word) => {
                if let Some(displaced) = pending_deletion.replace(word) {
                    changes.deletions.push(displaced.to_string());
                }
            }
            TokenOp::Insert(word) => match pending_deletion.take() {
                Some(old) => changes
                    .replacements
                    .push((old.to_string(), word.to_string())),
                None => changes.insertions.push(word.to_string()),
            },
        }
    }

    if let Some(unpaired) = pending_deletion {
        changes.deletions.push(unpaired.to_string());
    }

    changes
}

/// Compute the ordered delete/insert operations that turn `original`
/// into `revised`.
///
/// Equal tokens are alignment anchors and produce no operation.
fn diff_ops<'a>(original: &[&'a str], revised: &[&'a str]) -> Vec<TokenOp<'a>> {
    let len_a = original.len();
    let len_b = revised.len();

    // Longest common subsequence length table.
    let mut dp = vec![vec![0u32; len_b + 1]; len_a + 1];
    for i in 1..=len_a {
        for j in 1..=len_b {
            if original[i - 1] == revised[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    // Backtrack from the end, taking insertions on ties so that each
    // divergent region reads deletions-first once reversed.
    let mut ops = Vec::new();
    let mut i = len_a;
    let mut j = len_b;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && original[i - 1] == revised[j - 1] {
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || dp[i][j - 1] >= dp[i - 1][j]) {
            ops.push(TokenOp::Insert(revised[j - 1]));
            j -= 1;
        } else {
            ops.push(TokenOp::Delete(original[i - 1]));
            i -= 1;
        }
    }
    ops.reverse();
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_yield_no_changes() {
        let changes = identify_edit_patterns("Our product is great.", "Our product is great.");
        assert!(changes.is_empty());
        assert!(changes.insertions.is_empty());
        assert!(changes.deletions.is_empty());
        assert!(changes.replacements.is_empty());
    }

    #[test]
    fn test_replacements_are_paired_in_order() {
        let changes =
            identify_edit_patterns("Our product is great.", "Our platform is innovative.");
        assert_eq!(
            changes.replacements,
            vec![
                ("product".to_string(), "platform".to_string()),
                ("great.".to_string(), "innovative.".to_string()),
            ]
        );
        assert!(changes.insertions.is_empty());
        assert!(changes.deletions.is_empty());
    }

    #[test]
    fn test_pure_insertion() {
        let changes = identify_edit_patterns("Our product", "Our new product");
        assert_eq!(changes.insertions, vec!["new"]);
        assert!(changes.deletions.is_empty());
        assert!(changes.replacements.is_empty());
    }

    #[test]
    fn test_unpaired_deletion_is_reported() {
        let changes = identify_edit_patterns("Our new product", "Our product");
        assert_eq!(changes.deletions, vec!["new"]);
        assert!(changes.insertions.is_empty());
        assert!(changes.replacements.is_empty());
    }

    #[test]
    fn test_deletion_pairs_across_equal_run() {
        // "a" is removed before the anchor "y" and "b" appears after it;
        // the pending deletion survives the anchor and pairs with the
        // insertion.
        let changes = identify_edit_patterns("x a y", "x y b");
        assert_eq!(
            changes.replacements,
            vec![("a".to_string(), "b".to_string())]
        );
        assert!(changes.insertions.is_empty());
        assert!(changes.deletions.is_empty());
    }

    #[test]
    fn test_displaced_deletions_are_reported() {
        let changes = identify_edit_patterns("a b c", "d");
        assert_eq!(changes.deletions, vec!["a", "b"]);
        assert_eq!(
            changes.replacements,
            vec![("c".to_string(), "d".to_string())]
        );
    }

    #[test]
    fn test_only_first_insertion_pairs_with_pending_deletion() {
        let changes = identify_edit_patterns("fast", "quick and nimble");
        assert_eq!(
            changes.replacements,
            vec![("fast".to_string(), "quick".to_string())]
        );
        assert_eq!(changes.insertions, vec!["and", "nimble"]);
        assert!(changes.deletions.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(identify_edit_patterns("", "").is_empty());

        let insert_only = identify_edit_patterns("", "hello world");
        assert_eq!(insert_only.insertions, vec!["hello", "world"]);

        let delete_only = identify_edit_patterns("hello world", "");
        assert_eq!(delete_only.deletions, vec!["hello", "world"]);
    }

    #[test]
    fn test_whitespace_runs_are_ignored() {
        let changes = identify_edit_patterns("Our   product\tis great.", "Our product is great.");
        assert!(changes.is_empty());
    }
}
