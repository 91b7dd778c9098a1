//! Per-call options for formatting and parsing

/// Options for [`Formatter::vformat`](super::Formatter::vformat)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Leave placeholders without an argument untouched instead of failing
    pub partial_ok: bool,

    /// Allow arguments that no placeholder references
    pub extra_ok: bool,

    /// Refuse to produce output that could not be parsed back unambiguously
    pub ambiguity_check: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            partial_ok: false,
            extra_ok: true,
            ambiguity_check: false,
        }
    }
}

impl FormatOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that require every argument to be consumed
    pub fn strict() -> Self {
        Self::default().with_extra_ok(false)
    }

    /// Allow or forbid missing arguments
    pub fn with_partial_ok(mut self, partial_ok: bool) -> Self {
        self.partial_ok = partial_ok;
        self
    }

    /// Allow or forbid unused arguments
    pub fn with_extra_ok(mut self, extra_ok: bool) -> Self {
        self.extra_ok = extra_ok;
        self
    }

    /// Enable or disable the ambiguity check on formatted output
    pub fn with_ambiguity_check(mut self, ambiguity_check: bool) -> Self {
        self.ambiguity_check = ambiguity_check;
        self
    }
}

/// Options for [`Formatter::parse_with`](super::Formatter::parse_with)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail when the parsed values are not the only possible ones
    pub ambiguity_check: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            ambiguity_check: true,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the ambiguity check
    pub fn with_ambiguity_check(mut self, ambiguity_check: bool) -> Self {
        self.ambiguity_check = ambiguity_check;
        self
    }
}
