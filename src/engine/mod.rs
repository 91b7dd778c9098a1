//! Substitution engine
//!
//! A [`Formatter`] pairs a placeholder [`Recognizer`] with the two directions
//! of substitution: [`Formatter::vformat`] expands a template from a set of
//! arguments, and [`Formatter::parse`] recovers the arguments from an expanded
//! string. Both walk the same position-ordered replacement plan.

mod ambiguity;
mod options;
mod plan;

use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use crate::error::{FormatError, SyntaxError};
use crate::syntax::{Recognizer, References, RegexRecognizer};

use ambiguity::{check_sequence, FORMAT_AMBIGUOUS, PARSE_AMBIGUOUS};
use plan::{build_plan, dissect, Arguments};

pub use options::{FormatOptions, ParseOptions};

/// Values recovered by `parse`, keyed by placeholder name
pub type Values = BTreeMap<String, String>;

/// Capture used for every placeholder when matching a formatted string
const WILDCARD: &str = "(.*)";

/// Formatting and parsing engine for one placeholder syntax
///
/// Cloning is cheap; the recognizer is shared.
#[derive(Debug, Clone)]
pub struct Formatter {
    recognizer: Arc<dyn Recognizer>,
}

impl Formatter {
    /// Create an engine from any recognizer
    pub fn new(recognizer: impl Recognizer + 'static) -> Self {
        Self {
            recognizer: Arc::new(recognizer),
        }
    }

    /// Create an engine from a regex whose first group captures the name
    ///
    /// # Example
    ///
    /// ```rust
    /// use varformat::Formatter;
    ///
    /// let angle = Formatter::from_pattern(r"<(\w+)>").unwrap();
    /// assert_eq!(angle.format("Hi <who>!", [("who", "there")]).unwrap(), "Hi there!");
    /// ```
    pub fn from_pattern(pattern: &str) -> Result<Self, SyntaxError> {
        Ok(Self::new(RegexRecognizer::new(pattern)?))
    }

    /// The Reference Table of a template
    pub fn references(&self, template: &str) -> References {
        self.recognizer.references(template)
    }

    /// Substitute arguments with default options
    ///
    /// Every placeholder must have an argument; extra arguments are ignored.
    pub fn format<I, K, V>(&self, template: &str, args: I) -> Result<String, FormatError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        self.vformat(template, args, &FormatOptions::default())
    }

    /// Substitute arguments into a template
    pub fn vformat<I, K, V>(
        &self,
        template: &str,
        args: I,
        options: &FormatOptions,
    ) -> Result<String, FormatError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        let references = self.recognizer.references(template);
        let plan = build_plan(
            &references,
            Arguments::collect(args),
            options.partial_ok,
            options.extra_ok,
        )?;
        let literals = dissect(template, &plan);

        let mut result = String::with_capacity(template.len());
        for (literal, entry) in literals.iter().zip(&plan) {
            result.push_str(literal);
            result.push_str(&entry.replacement);
        }
        result.push_str(literals.last().copied().unwrap_or_default());

        if options.ambiguity_check {
            let values: Vec<(&str, &str)> = plan
                .iter()
                .map(|entry| (entry.name(), entry.replacement.as_str()))
                .collect();
            check_sequence(&values, &literals, FORMAT_AMBIGUOUS)?;
        }

        Ok(result)
    }

    /// Recover arguments from a formatted string, checking for ambiguity
    ///
    /// Returns `Ok(None)` when `string` does not fit the template.
    pub fn parse(&self, template: &str, string: &str) -> Result<Option<Values>, FormatError> {
        self.parse_with(template, string, &ParseOptions::default())
    }

    /// Recover arguments from a formatted string
    pub fn parse_with(
        &self,
        template: &str,
        string: &str,
        options: &ParseOptions,
    ) -> Result<Option<Values>, FormatError> {
        let references = self.recognizer.references(template);
        let wildcards = references.names().map(|name| (name, WILDCARD));
        let plan = build_plan(&references, Arguments::collect(wildcards), false, false)?;
        let literals = dissect(template, &plan);

        // Capture group i + 1 belongs to plan entry i
        let mut pattern = String::from(r"(?s)\A");
        for (literal, entry) in literals.iter().zip(&plan) {
            pattern.push_str(&regex::escape(literal));
            pattern.push_str(&entry.replacement);
        }
        pattern.push_str(&regex::escape(literals.last().copied().unwrap_or_default()));
        pattern.push_str(r"\z");
        let regex = Regex::new(&pattern)?;

        let Some(caps) = regex.captures(string) else {
            debug!(template, "string does not match template");
            return Ok(None);
        };

        let captured: Vec<(&str, &str)> = plan
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.name(), caps.get(i + 1).map_or("", |m| m.as_str())))
            .collect();

        let mut values = Values::new();
        for &(name, text) in &captured {
            match values.get(name) {
                Some(first) if first != text => {
                    return Err(FormatError::InconsistentCapture {
                        name: name.to_string(),
                        first: first.clone(),
                        other: text.to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    values.insert(name.to_string(), text.to_string());
                }
            }
        }

        if options.ambiguity_check {
            check_sequence(&captured, &literals, PARSE_AMBIGUOUS)?;
        }

        Ok(Some(values))
    }
}
