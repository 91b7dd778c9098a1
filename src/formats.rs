//! Standard placeholder syntaxes
//!
//! Each function returns a process-wide engine that can be shared freely
//! between threads.
//!
//! ```rust
//! use varformat::formats::{posix_shell, python};
//!
//! assert_eq!(python().format("Hello {var}!", [("var", "python")]).unwrap(), "Hello python!");
//! assert_eq!(posix_shell().format("Hello ${var}!", [("var", "bash")]).unwrap(), "Hello bash!");
//! ```

use std::sync::LazyLock;

use crate::engine::Formatter;
use crate::syntax::{PosixRecognizer, RegexRecognizer};

/// `${name}` where the name is any run of word characters or whitespace
pub const PERMISSIVE_PATTERN: &str = r"\$\{([\w\s]+)\}";

/// `{name}` where the name is an identifier that may contain Unicode letters
pub const PYTHON_PATTERN: &str = r"\{([\p{Alphabetic}_]\w*)\}";

static PERMISSIVE: LazyLock<Formatter> = LazyLock::new(|| {
    Formatter::new(RegexRecognizer::new(PERMISSIVE_PATTERN).expect("permissive pattern should be valid"))
});

static POSIX_SHELL: LazyLock<Formatter> = LazyLock::new(|| Formatter::new(PosixRecognizer::new()));

static PYTHON: LazyLock<Formatter> = LazyLock::new(|| {
    Formatter::new(RegexRecognizer::new(PYTHON_PATTERN).expect("python pattern should be valid"))
});

/// Dollar-brace variables with any name inside; the default engine
pub fn permissive() -> &'static Formatter {
    &PERMISSIVE
}

/// POSIX shell variables, `$name` and `${name}` alike
pub fn posix_shell() -> &'static Formatter {
    &POSIX_SHELL
}

/// Curly-brace variables with identifier names, as in Python format strings
pub fn python() -> &'static Formatter {
    &PYTHON
}
