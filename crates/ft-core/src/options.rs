//! Option schema shared by all match extensions.
//!
//! An extension declares its long options as a static table terminated by
//! [`TABLE_END`]; the host scans up to the sentinel when dispatching
//! arguments, so tables from several extensions can be concatenated.

use crate::errors::XtError;

/// One recognized long option of a match extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Long-option name without the leading dashes.
    pub name: &'static str,
    /// Stable code handed back to the extension's parse callback.
    pub code: u8,
    /// Whether the option consumes a following argument token.
    pub has_arg: bool,
}

/// End-of-table sentinel entry.
pub const TABLE_END: OptionSpec = OptionSpec {
    name: "",
    code: 0,
    has_arg: false,
};

impl OptionSpec {
    /// Whether this entry is the end-of-table sentinel.
    #[must_use]
    pub const fn is_table_end(&self) -> bool {
        self.name.is_empty() && self.code == 0
    }
}

/// Look up `name` in an option table, scanning up to the sentinel.
#[must_use]
pub fn find_option(table: &'static [OptionSpec], name: &str) -> Option<&'static OptionSpec> {
    table
        .iter()
        .take_while(|spec| !spec.is_table_end())
        .find(|spec| spec.name == name)
}

/// Standard inversion detection for option arguments.
///
/// Strips one leading `!` from `arg` and records it in `invert`. Fails when
/// negation was already signaled through another mechanism (the pre-option
/// `!` token): a rule may negate a match once, not twice.
///
/// Returns the argument text with the marker removed.
pub fn check_inverse<'a>(
    arg: &'a str,
    invert: &mut bool,
    match_name: &'static str,
) -> Result<&'a str, XtError> {
    let Some(rest) = arg.strip_prefix('!') else {
        return Ok(arg);
    };

    if *invert {
        return Err(XtError::UnexpectedNegation { match_name });
    }

    *invert = true;
    Ok(rest.trim_start())
}
