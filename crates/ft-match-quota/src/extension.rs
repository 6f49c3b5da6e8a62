//! The `MatchExtension` implementation for the quota match.

use std::io::Write;

use ft_core::{
    check_inverse, DescriptorLayout, MatchExtension, OptionSpec, OptionsSeen, ParseContext,
    ProtocolFamily, XtError, TABLE_END,
};
use tracing::debug;

use crate::domain::{parse_quota, QuotaDescriptor};
use crate::error::QuotaError;

/// Option code for `--quota`.
pub const OPT_QUOTA: u8 = 1;

/// Seen-bit for the mandatory option.
const SEEN_QUOTA: u32 = 0x1;

static QUOTA_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        name: "quota",
        code: OPT_QUOTA,
        has_arg: true,
    },
    TABLE_END,
];

/// The quota match extension.
///
/// Registered under the name `"quota"`, protocol-family-agnostic.
#[derive(Debug, Default)]
pub struct QuotaMatch;

impl QuotaMatch {
    /// Create the extension for registration.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MatchExtension for QuotaMatch {
    fn name(&self) -> &'static str {
        "quota"
    }

    fn family(&self) -> ProtocolFamily {
        ProtocolFamily::Unspec
    }

    fn layout(&self) -> DescriptorLayout {
        QuotaDescriptor::layout()
    }

    fn options(&self) -> &'static [OptionSpec] {
        QUOTA_OPTIONS
    }

    fn help(&self, out: &mut dyn Write) -> Result<(), XtError> {
        writeln!(out, "quota match options:")?;
        writeln!(out, "[!] --quota quota\t\tquota (bytes)")?;
        Ok(())
    }

    fn parse(&self, ctx: &mut ParseContext<'_>, code: u8, arg: &str) -> Result<(), XtError> {
        match code {
            OPT_QUOTA => {
                let mut invert = ctx.invert;
                let arg = check_inverse(arg, &mut invert, "quota")?;
                let quota = parse_quota(arg).map_err(XtError::from)?;

                debug!(quota, invert, "parsed quota option");

                let descriptor = QuotaDescriptor { quota, invert };
                descriptor.encode(ctx.data)?;
                ctx.seen.set(SEEN_QUOTA);
                Ok(())
            }
            other => Err(XtError::ParameterProblem(format!(
                "quota: unknown option code {other}"
            ))),
        }
    }

    fn final_check(&self, seen: OptionsSeen) -> Result<(), XtError> {
        if !seen.contains(SEEN_QUOTA) {
            return Err(QuotaError::MissingQuota.into());
        }
        Ok(())
    }

    fn print(&self, data: &[u8], out: &mut dyn Write) -> Result<(), XtError> {
        let descriptor = QuotaDescriptor::decode(data)?;
        // Listing never renders the negation flag; only save does.
        write!(out, "quota: {} bytes", descriptor.quota)?;
        Ok(())
    }

    fn save(&self, data: &[u8], out: &mut dyn Write) -> Result<(), XtError> {
        let descriptor = QuotaDescriptor::decode(data)?;
        if descriptor.invert {
            write!(out, "! ")?;
        }
        write!(out, " --quota {}", descriptor.quota)?;
        Ok(())
    }
}
