//! POSIX shell-style variables: `$name` and `${name}`

use super::{Recognizer, References, RegexRecognizer};

/// Braced form, `${name}`
pub const POSIX_BRACED_PATTERN: &str = r"\$\{([a-zA-Z_]\w*)\}";

/// Bare form, `$name`
pub const POSIX_BARE_PATTERN: &str = r"\$([a-zA-Z_]\w*)";

/// Recognizer that merges the braced and bare shell variable forms
///
/// The bare form cannot match inside a braced placeholder because `{` is not
/// a valid first character of a name, so the two never overlap.
#[derive(Debug, Clone)]
pub struct PosixRecognizer {
    braced: RegexRecognizer,
    bare: RegexRecognizer,
}

impl PosixRecognizer {
    pub fn new() -> Self {
        Self {
            braced: RegexRecognizer::new(POSIX_BRACED_PATTERN)
                .expect("braced shell variable pattern should be valid"),
            bare: RegexRecognizer::new(POSIX_BARE_PATTERN)
                .expect("bare shell variable pattern should be valid"),
        }
    }
}

impl Default for PosixRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for PosixRecognizer {
    fn references(&self, template: &str) -> References {
        self.braced
            .references(template)
            .merge(self.bare.references(template))
    }
}
