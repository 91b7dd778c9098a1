//! Error types for formatting and parsing

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::syntax::Span;

/// One interpretation of a formatted string: `(name, value)` pairs
pub type Candidate = Vec<(String, String)>;

/// Errors raised while building a recognizer
#[derive(Error, Debug)]
pub enum SyntaxError {
    #[error("invalid placeholder pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("placeholder pattern '{pattern}' has no capture group for the name")]
    MissingNameGroup { pattern: String },
}

/// Errors that can occur during `format`, `vformat` and `parse`
#[derive(Error, Debug)]
pub enum FormatError {
    /// A placeholder has no argument and partial formatting was not allowed
    #[error("missing argument '{name}'")]
    MissingKey { name: String, span: Span },

    /// Arguments were left over and strict consumption was requested
    #[error("unused arguments: {}", names.join(", "))]
    UnusedArguments { names: Vec<String> },

    /// More than one assignment of values produces the same string
    #[error("{message}{}", format_candidates(candidates))]
    Ambiguous {
        message: String,
        candidates: Vec<Candidate>,
    },

    /// Two occurrences of the same name matched different text
    ///
    /// Only the greedy split is compared, so a string may be rejected even
    /// when a different split would give every occurrence the same text.
    #[error("occurrences of '{name}' matched different text in the greedy split: {first:?} and {other:?}")]
    InconsistentCapture {
        name: String,
        first: String,
        other: String,
    },

    /// The matching pattern built for `parse` could not be compiled
    #[error("failed to build matching pattern: {0}")]
    Pattern(#[from] regex::Error),
}

fn format_candidates(candidates: &[Candidate]) -> String {
    let mut out = String::new();
    let mut prefix = "\n  could be: ";
    for candidate in candidates {
        out.push_str(prefix);
        out.push('{');
        let pairs: Vec<String> = candidate
            .iter()
            .map(|(name, value)| format!("{}: {:?}", name, value))
            .collect();
        out.push_str(&pairs.join(", "));
        out.push('}');
        prefix = "\n        or: ";
    }
    out
}

impl FormatError {
    /// Create a missing argument error for a placeholder at `span`
    pub fn missing(name: impl Into<String>, span: Span) -> Self {
        Self::MissingKey {
            name: name.into(),
            span,
        }
    }

    /// Create an ambiguity error from the original and alternative splits
    pub fn ambiguous(message: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        Self::Ambiguous {
            message: message.into(),
            candidates,
        }
    }

    /// Get the template span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::MissingKey { span, .. } => Some(span),
            _ => None,
        }
    }

    /// Format the error with template context using ariadne
    ///
    /// Errors without a template location are rendered as their display text.
    pub fn report(&self, template: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return self.to_string();
        };

        // ariadne counts characters, spans count bytes
        let (Some(before), Some(placeholder)) = (template.get(..span.start), template.get(span.clone()))
        else {
            return self.to_string();
        };
        let start = before.chars().count();
        let end = start + placeholder.chars().count();

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, start)
            .with_config(Config::default().with_color(false))
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, start..end))
                    .with_message("no argument supplied for this placeholder")
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(template)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
