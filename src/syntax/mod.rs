//! Placeholder syntax: locating named placeholders in a template
//!
//! A [`Recognizer`] scans a template once and reports every placeholder it
//! finds as an [`Occurrence`]. Occurrences are grouped by name into a
//! [`References`] table, which is what the substitution engine consumes.

mod pattern;
mod posix;

use std::collections::HashMap;
use std::fmt::Debug;

pub use pattern::RegexRecognizer;
pub use posix::PosixRecognizer;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

/// One placeholder at a concrete location in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Placeholder name as extracted by the recognizer
    pub name: String,
    /// Byte span of the whole placeholder, sigil and braces included
    pub span: Span,
}

/// Placeholder occurrences grouped by name
///
/// Names are kept in order of first appearance. Within a name, occurrences are
/// kept in left-to-right order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    entries: Vec<(String, Vec<Occurrence>)>,
    index: HashMap<String, usize>,
}

impl References {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an occurrence of `name` at `span`
    ///
    /// Callers push in left-to-right order.
    pub fn push(&mut self, name: &str, span: Span) {
        let occurrence = Occurrence {
            name: name.to_string(),
            span,
        };
        match self.index.get(name) {
            Some(&i) => self.entries[i].1.push(occurrence),
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), vec![occurrence]));
            }
        }
    }

    /// Union of two tables built from the same template
    ///
    /// The recognizers that produced the tables must not report overlapping
    /// spans; that is not checked here.
    pub fn merge(self, other: References) -> References {
        let mut all: Vec<Occurrence> = self
            .entries
            .into_iter()
            .chain(other.entries)
            .flat_map(|(_, occurrences)| occurrences)
            .collect();
        all.sort_by_key(|o| o.span.start);

        let mut merged = References::new();
        for occurrence in all {
            merged.push(&occurrence.name, occurrence.span);
        }
        merged
    }

    /// Occurrences of a single name
    pub fn get(&self, name: &str) -> Option<&[Occurrence]> {
        self.index.get(name).map(|&i| self.entries[i].1.as_slice())
    }

    /// Distinct names, in order of first appearance
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over `(name, occurrences)` groups
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.entries
            .iter()
            .map(|(name, occurrences)| (name.as_str(), occurrences.as_slice()))
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pluggable placeholder syntax
///
/// Implementations must find every non-overlapping placeholder in one
/// left-to-right pass and must be pure functions of the template.
pub trait Recognizer: Debug + Send + Sync {
    /// Locate all placeholders in `template`
    fn references(&self, template: &str) -> References;
}
