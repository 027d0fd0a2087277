//! Pattern compiler
//!
//! Turns raw user input (search text plus option flags) into one compiled
//! matcher that is reused across every item of the operation.

use regex::{NoExpand, Regex, RegexBuilder};

use crate::error::Result;

use super::entity::SearchOptions;

/// A compiled search pattern
///
/// Stateless once built; exactly one pattern is compiled per operation and
/// applied uniformly to all items. Callers validate that the search text is
/// non-empty before compiling.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    regex: Regex,
}

impl SearchPattern {
    /// Compile search text under the given options
    ///
    /// Outside regex mode every metacharacter is escaped so the text matches
    /// literally. Whole-word wraps the (possibly escaped) pattern in word
    /// boundaries; matching is case-insensitive unless requested otherwise.
    /// An invalid pattern in regex mode fails with
    /// [`Error::InvalidPattern`](crate::error::Error::InvalidPattern) before
    /// any item is looked at.
    pub fn compile(search_text: &str, options: &SearchOptions) -> Result<Self> {
        let mut pattern = if options.use_regex {
            search_text.to_string()
        } else {
            regex::escape(search_text)
        };
        if options.whole_word {
            pattern = format!(r"\b{pattern}\b");
        }

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(!options.case_sensitive)
            .build()?;

        Ok(Self { regex })
    }

    /// Count every non-overlapping match in the haystack
    pub fn count_matches(&self, haystack: &str) -> usize {
        self.regex.find_iter(haystack).count()
    }

    /// Whether the haystack contains at least one match
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Substitute every match with the literal replacement text
    ///
    /// The replacement is inserted verbatim; `$` has no capture-group
    /// meaning, matching the way the panel always substituted literally.
    pub fn replace_all(&self, haystack: &str, replacement: &str) -> String {
        self.regex
            .replace_all(haystack, NoExpand(replacement))
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_literal_mode_escapes_metacharacters() {
        let pattern = SearchPattern::compile("a.b", &SearchOptions::new()).unwrap();
        assert_eq!(pattern.count_matches("a.b and aXb"), 1);
        assert_eq!(pattern.replace_all("a.b and aXb", "_"), "_ and aXb");
    }

    #[test]
    fn test_regex_mode_interprets_metacharacters() {
        let options = SearchOptions::new().use_regex();
        let pattern = SearchPattern::compile("a.b", &options).unwrap();
        assert_eq!(pattern.count_matches("a.b and aXb"), 2);
    }

    #[test]
    fn test_whole_word_rejects_substrings() {
        let options = SearchOptions::new().whole_word();
        let pattern = SearchPattern::compile("cat", &options).unwrap();
        assert_eq!(pattern.count_matches("category"), 0);
        assert_eq!(pattern.count_matches("the cat sat"), 1);
    }

    #[test]
    fn test_case_insensitive_by_default() {
        let pattern = SearchPattern::compile("hello", &SearchOptions::new()).unwrap();
        assert_eq!(pattern.count_matches("Hello HELLO hello"), 3);

        let options = SearchOptions::new().case_sensitive();
        let pattern = SearchPattern::compile("hello", &options).unwrap();
        assert_eq!(pattern.count_matches("Hello HELLO hello"), 1);
    }

    #[test]
    fn test_matching_is_global() {
        let pattern = SearchPattern::compile("ab", &SearchOptions::new()).unwrap();
        assert_eq!(pattern.count_matches("ab ab ab"), 3);
        assert_eq!(pattern.replace_all("ab ab ab", "x"), "x x x");
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        let options = SearchOptions::new().use_regex();
        let err = SearchPattern::compile("(unbalanced", &options).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern(_)));
    }

    #[test]
    fn test_invalid_syntax_is_fine_as_literal() {
        // Outside regex mode the same text is escaped, not parsed
        let pattern = SearchPattern::compile("(unbalanced", &SearchOptions::new()).unwrap();
        assert_eq!(pattern.count_matches("a (unbalanced b"), 1);
    }

    #[test]
    fn test_replacement_is_literal() {
        let options = SearchOptions::new().use_regex();
        let pattern = SearchPattern::compile("(cat)", &options).unwrap();
        assert_eq!(pattern.replace_all("cat", "$1$1"), "$1$1");
    }
}
