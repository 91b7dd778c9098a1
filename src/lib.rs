//! varformat - format and parse strings with named placeholders
//!
//! A template such as `"${greeting}, ${name}!"` can be expanded from a set of
//! arguments, and an expanded string can be parsed back into the arguments
//! that produced it. Parsing refuses to answer when more than one set of
//! arguments would explain the string.
//!
//! The functions at the crate root use the [`formats::permissive`] syntax.
//! Other syntaxes live in [`formats`], and custom ones can be built with
//! [`Formatter::from_pattern`] or by implementing [`Recognizer`].
//!
//! # Example
//!
//! ```rust
//! let text = varformat::format("${greeting}, ${name}!", [("greeting", "Hello"), ("name", "world")]).unwrap();
//! assert_eq!(text, "Hello, world!");
//!
//! let values = varformat::parse("${greeting}, ${name}!", &text).unwrap().unwrap();
//! assert_eq!(values["name"], "world");
//! ```

pub mod args_file;
pub mod engine;
pub mod error;
pub mod formats;
pub mod syntax;

use std::fmt::Display;

pub use args_file::{ArgsFile, ArgsFileError};
pub use engine::{FormatOptions, Formatter, ParseOptions, Values};
pub use error::{Candidate, FormatError, SyntaxError};
pub use syntax::{Occurrence, PosixRecognizer, Recognizer, References, RegexRecognizer, Span};

/// Substitute arguments into a template with default options
///
/// Every placeholder needs an argument; unused arguments are ignored.
///
/// # Example
///
/// ```rust
/// assert_eq!(varformat::format("${a}+${a}=${a}", [("a", 1)]).unwrap(), "1+1=1");
/// ```
pub fn format<I, K, V>(template: &str, args: I) -> Result<String, FormatError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    formats::permissive().format(template, args)
}

/// Substitute arguments into a template
///
/// # Example
///
/// ```rust
/// use varformat::{vformat, FormatOptions};
///
/// let options = FormatOptions::new().with_partial_ok(true);
/// let text = vformat("${present} ${missing}", [("present", "x")], &options).unwrap();
/// assert_eq!(text, "x ${missing}");
/// ```
pub fn vformat<I, K, V>(template: &str, args: I, options: &FormatOptions) -> Result<String, FormatError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    formats::permissive().vformat(template, args, options)
}

/// Recover the arguments of a formatted string
///
/// Returns `Ok(None)` when the string does not fit the template, and
/// [`FormatError::Ambiguous`] when more than one set of arguments fits.
pub fn parse(template: &str, string: &str) -> Result<Option<Values>, FormatError> {
    formats::permissive().parse(template, string)
}

/// Recover the arguments of a formatted string with explicit options
pub fn parse_with(
    template: &str,
    string: &str,
    options: &ParseOptions,
) -> Result<Option<Values>, FormatError> {
    formats::permissive().parse_with(template, string, options)
}
