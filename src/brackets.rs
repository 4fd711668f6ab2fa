//! Brace balance checking for localization resource file content.
//!
//! The checker is a single-pass stack scan over characters: every `{` must be
//! closed by a later `}` and every `}` must close the most recently opened
//! unmatched `{` (strict LIFO nesting). Offsets are character positions, not
//! byte positions, so diagnostics stay correct for multi-byte content.
//!
//! This is deliberately not a parser: string literals, comments, and escape
//! sequences are not understood. Any character sequence is acceptable input
//! and the checker itself never fails.

/// Which side of a brace pair is missing its counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedKind {
    /// A `{` with no corresponding later `}`.
    Opening,
    /// A `}` encountered while no unmatched `{` was open.
    Closing,
}

/// A single unmatched bracket found during the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    /// Character offset of the unmatched bracket (0-based).
    pub offset: usize,
    /// Whether the bracket is an unmatched opener or closer.
    pub kind: UnmatchedKind,
}

/// Result of scanning one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BracketReport {
    /// Every brace is matched.
    Valid,
    /// At least one unmatched brace; diagnostics in ascending offset order.
    Invalid(Vec<Diagnostic>),
}

impl BracketReport {
    /// Returns true if no unmatched brackets were found.
    pub fn is_valid(&self) -> bool {
        matches!(self, BracketReport::Valid)
    }

    /// Returns the diagnostics (empty for a valid report).
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            BracketReport::Valid => &[],
            BracketReport::Invalid(diagnostics) => diagnostics,
        }
    }
}

/// Scan `text` for balanced `{`/`}` pairs under strict nesting.
///
/// A stray `}` ends the scan immediately and is reported alone; unmatched
/// `{` are collected after a full scan, in the order they were opened.
pub fn check_brackets(text: &str) -> BracketReport {
    let mut open_offsets: Vec<usize> = Vec::new();

    for (offset, ch) in text.chars().enumerate() {
        match ch {
            '{' => open_offsets.push(offset),
            '}' => {
                if open_offsets.pop().is_none() {
                    return BracketReport::Invalid(vec![Diagnostic {
                        offset,
                        kind: UnmatchedKind::Closing,
                    }]);
                }
            }
            _ => {}
        }
    }

    if open_offsets.is_empty() {
        BracketReport::Valid
    } else {
        BracketReport::Invalid(
            open_offsets
                .into_iter()
                .map(|offset| Diagnostic {
                    offset,
                    kind: UnmatchedKind::Opening,
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn openers(offsets: &[usize]) -> Vec<Diagnostic> {
        offsets
            .iter()
            .map(|&offset| Diagnostic {
                offset,
                kind: UnmatchedKind::Opening,
            })
            .collect()
    }

    #[test]
    fn empty_text_is_valid() {
        assert_eq!(check_brackets(""), BracketReport::Valid);
    }

    #[test]
    fn text_without_braces_is_valid() {
        let report = check_brackets("<data name=\"Greeting\"><value>Hello</value></data>");
        assert!(report.is_valid());
        assert!(report.diagnostics().is_empty());
    }

    #[test]
    fn simple_pair_is_valid() {
        assert_eq!(check_brackets("{}"), BracketReport::Valid);
    }

    #[test]
    fn nested_pairs_are_valid() {
        assert_eq!(check_brackets("{{}}"), BracketReport::Valid);
    }

    #[test]
    fn sequential_groups_are_valid() {
        assert_eq!(check_brackets("{}{}"), BracketReport::Valid);
        assert_eq!(check_brackets("{a}{b{c}}"), BracketReport::Valid);
    }

    #[test]
    fn non_brace_characters_are_ignored() {
        assert_eq!(check_brackets("a{b}c{d}e"), BracketReport::Valid);
    }

    #[test]
    fn lone_closer_reports_single_diagnostic() {
        let report = check_brackets("}");
        assert_eq!(
            report,
            BracketReport::Invalid(vec![Diagnostic {
                offset: 0,
                kind: UnmatchedKind::Closing,
            }])
        );
    }

    #[test]
    fn scan_stops_at_first_unmatched_closer() {
        // Later brackets (including further unmatched openers) go unreported.
        let report = check_brackets("}{{{");
        assert_eq!(
            report.diagnostics(),
            &[Diagnostic {
                offset: 0,
                kind: UnmatchedKind::Closing,
            }]
        );
    }

    #[test]
    fn lone_opener_reported_after_full_scan() {
        let report = check_brackets("{");
        assert_eq!(report, BracketReport::Invalid(openers(&[0])));
    }

    #[test]
    fn inner_pair_matches_leaving_outer_opener() {
        // "{{}": the inner pair at 1..2 matches, the opener at 0 does not.
        let report = check_brackets("{{}");
        assert_eq!(report, BracketReport::Invalid(openers(&[0])));
    }

    #[test]
    fn multiple_unmatched_openers_reported_in_opening_order() {
        let report = check_brackets("{a{b{c}");
        assert_eq!(report, BracketReport::Invalid(openers(&[0, 2])));
    }

    #[test]
    fn closer_closes_most_recent_opener() {
        // LIFO: the single closer consumes the innermost opener.
        let report = check_brackets("{{}x");
        assert_eq!(report, BracketReport::Invalid(openers(&[0])));
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        // 'é' and '日' are multi-byte in UTF-8 but each one character.
        assert_eq!(check_brackets("é{日}"), BracketReport::Valid);

        let report = check_brackets("é日{");
        assert_eq!(report, BracketReport::Invalid(openers(&[2])));

        let report = check_brackets("é}");
        assert_eq!(
            report.diagnostics(),
            &[Diagnostic {
                offset: 1,
                kind: UnmatchedKind::Closing,
            }]
        );
    }

    #[test]
    fn realistic_resx_placeholder_content() {
        let valid = "<value>Welcome back, {0}! You have {1} new messages.</value>";
        assert!(check_brackets(valid).is_valid());

        let broken = "<value>Welcome back, {0! You have {1} new messages.</value>";
        let report = check_brackets(broken);
        assert!(!report.is_valid());
        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(report.diagnostics()[0].kind, UnmatchedKind::Opening);
        assert_eq!(report.diagnostics()[0].offset, 21);
    }
}
