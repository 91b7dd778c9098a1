//! Regex-driven recognizer

use regex::Regex;
use tracing::trace;

use super::{Recognizer, References};
use crate::error::SyntaxError;

/// Recognizer backed by a regular expression
///
/// The whole match is the placeholder and the first capture group is its
/// name. A group that does not participate in a match yields an empty name.
#[derive(Debug, Clone)]
pub struct RegexRecognizer {
    regex: Regex,
}

impl RegexRecognizer {
    /// Compile a recognizer from a pattern with at least one capture group
    pub fn new(pattern: &str) -> Result<Self, SyntaxError> {
        let regex = Regex::new(pattern)?;
        if regex.captures_len() < 2 {
            return Err(SyntaxError::MissingNameGroup {
                pattern: pattern.to_string(),
            });
        }
        Ok(Self { regex })
    }

    /// The source pattern
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Recognizer for RegexRecognizer {
    fn references(&self, template: &str) -> References {
        let mut references = References::new();
        for caps in self.regex.captures_iter(template) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let name = caps.get(1).map_or("", |m| m.as_str());
            references.push(name, whole.range());
        }
        trace!(pattern = self.as_str(), names = references.len(), "located placeholders");
        references
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_finds_all_occurrences() {
        let recognizer = RegexRecognizer::new(r"\$\{(\w+)\}").unwrap();
        let refs = recognizer.references("${a}+${b}=${a}");

        assert_eq!(refs.names().collect::<Vec<_>>(), vec!["a", "b"]);
        let a: Vec<_> = refs.get("a").unwrap().iter().map(|o| o.span.clone()).collect();
        assert_eq!(a, vec![0..4, 10..14]);
        assert_eq!(refs.get("b").unwrap()[0].span, 5..9);
    }

    #[test]
    fn test_no_placeholders() {
        let recognizer = RegexRecognizer::new(r"\$\{(\w+)\}").unwrap();
        assert!(recognizer.references("hello world").is_empty());
        assert!(recognizer.references("").is_empty());
    }

    #[test]
    fn test_pattern_without_group_is_rejected() {
        let err = RegexRecognizer::new(r"\$\w+").unwrap_err();
        assert!(matches!(err, SyntaxError::MissingNameGroup { .. }));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = RegexRecognizer::new(r"\$\{(\w+").unwrap_err();
        assert!(matches!(err, SyntaxError::InvalidPattern(_)));
    }
}
