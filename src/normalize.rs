//! Whitespace normalization for emitted sentences.

/// Collapse every run of whitespace (spaces, tabs, newlines) to a single
/// space and strip leading and trailing whitespace.
///
/// Returns `None` when nothing but whitespace remains, so callers can
/// suppress empty lines.
///
/// # Examples
///
/// ```
/// use lmvp2text::normalize::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Hello \n\t world. ").as_deref(), Some("Hello world."));
/// assert_eq!(collapse_whitespace(" \n "), None);
/// ```
pub fn collapse_whitespace(text: &str) -> Option<String> {
    let mut words = text.split_whitespace();
    let first = words.next()?;

    let mut result = String::with_capacity(text.len());
    result.push_str(first);
    for word in words {
        result.push(' ');
        result.push_str(word);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_collapse_runs() {
        assert_eq!(
            collapse_whitespace("should    ignore more spaces").as_deref(),
            Some("should ignore more spaces")
        );
        assert_eq!(collapse_whitespace("a\nb\nc").as_deref(), Some("a b c"));
        assert_eq!(
            collapse_whitespace("should \nignore \r\nnew lines").as_deref(),
            Some("should ignore new lines")
        );
    }

    #[test]
    fn test_strip_ends() {
        assert_eq!(collapse_whitespace("\n  Only one.\n").as_deref(), Some("Only one."));
    }

    #[test]
    fn test_empty() {
        assert_eq!(collapse_whitespace(""), None);
        assert_eq!(collapse_whitespace("\t\r\n   "), None);
    }

    proptest! {
        #[test]
        fn prop_no_whitespace_runs_or_edges(s in "[a-z.,\\- \t\r\n]{0,64}") {
            if let Some(line) = collapse_whitespace(&s) {
                prop_assert!(!line.is_empty());
                prop_assert!(!line.starts_with(' '));
                prop_assert!(!line.ends_with(' '));
                prop_assert!(!line.contains("  "));
                prop_assert!(!line.contains(['\t', '\r', '\n']));
            } else {
                prop_assert!(s.trim().is_empty());
            }
        }

        #[test]
        fn prop_words_preserved(words in prop::collection::vec("[A-Za-z0-9.]{1,8}", 0..10),
                                sep in "[ \t\n]{1,4}") {
            let joined = words.join(&sep);
            let expected = words.join(" ");
            prop_assert_eq!(collapse_whitespace(&joined).unwrap_or_default(), expected);
        }
    }
}
