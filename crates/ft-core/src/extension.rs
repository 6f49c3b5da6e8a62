//! The match extension trait: the capability bundle a rule compiler
//! extension exposes to the host.
//!
//! Descriptors cross this boundary as raw bytes in the engine's wire layout;
//! each extension keeps its typed view private. Per descriptor the host
//! drives `UNSET → PARSED → VALIDATED → {PRINTED | SAVED}*`: every option
//! token triggers one `parse` call, `final_check` runs exactly once after all
//! options are consumed, and print/save are idempotent read-only calls on the
//! stored record.

use std::io::Write;

use crate::descriptor::DescriptorLayout;
use crate::errors::XtError;
use crate::family::ProtocolFamily;
use crate::options::OptionSpec;

/// Transient per-rule record of which options were supplied.
///
/// One bit per option code, accumulated across `parse` calls and handed to
/// `final_check`. Not part of the descriptor; it dies with the rule
/// construction invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OptionsSeen(u32);

impl OptionsSeen {
    /// Record that the option behind `bit` was supplied.
    pub fn set(&mut self, bit: u32) {
        self.0 |= bit;
    }

    /// Whether the option behind `bit` was supplied.
    #[must_use]
    pub fn contains(&self, bit: u32) -> bool {
        self.0 & bit != 0
    }

    /// Whether no option was supplied at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Mutable state handed to an extension's `parse` callback.
pub struct ParseContext<'a> {
    /// Descriptor buffer, sized to the extension's declared wire layout and
    /// zeroed by the host before the first option is parsed.
    pub data: &'a mut [u8],
    /// Ambient negation indicator: true when the host already consumed a
    /// pre-option `!` token for this match.
    pub invert: bool,
    /// Accumulated record of supplied options.
    pub seen: &'a mut OptionsSeen,
}

/// A match extension registered with the rule compiler.
pub trait MatchExtension: Send + Sync {
    /// Unique extension name, as typed after `-m`.
    fn name(&self) -> &'static str;

    /// Protocol family this extension is restricted to.
    fn family(&self) -> ProtocolFamily;

    /// Declared descriptor sizes.
    fn layout(&self) -> DescriptorLayout;

    /// Recognized long options, terminated by the table-end sentinel.
    fn options(&self) -> &'static [OptionSpec];

    /// Write static usage text.
    fn help(&self, out: &mut dyn Write) -> Result<(), XtError>;

    /// Consume one matched option.
    ///
    /// `code` is the option code from the schema table, `arg` the raw
    /// argument token (empty for options without arguments). Failure aborts
    /// the enclosing rule construction.
    fn parse(&self, ctx: &mut ParseContext<'_>, code: u8, arg: &str) -> Result<(), XtError>;

    /// Completeness check, invoked once after all options are consumed.
    fn final_check(&self, seen: OptionsSeen) -> Result<(), XtError>;

    /// Format the stored descriptor for rule listing.
    fn print(&self, data: &[u8], out: &mut dyn Write) -> Result<(), XtError>;

    /// Format the stored descriptor as re-enterable command syntax.
    fn save(&self, data: &[u8], out: &mut dyn Write) -> Result<(), XtError>;
}
