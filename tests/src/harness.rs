//! Minimal host-side rule constructor.
//!
//! Stands in for the rule compiler front end during tests: tokenized
//! arguments in, populated descriptor bytes out. Dispatch follows the host
//! contract: a `!` token sets the ambient negation for the next option,
//! long options resolve through the extension's schema table, one `parse`
//! call per matched option, `final_check` once after all options are
//! consumed.

use ft_core::{find_option, MatchExtension, OptionsSeen, ParseContext, XtError};

/// Drive one rule construction through `extension` and return the stored
/// descriptor bytes.
pub fn build_match(extension: &dyn MatchExtension, args: &[&str]) -> Result<Vec<u8>, XtError> {
    let layout = extension.layout();
    let mut data = vec![0u8; layout.wire_size];
    let mut seen = OptionsSeen::default();
    let mut invert = false;

    let mut tokens = args.iter().copied();
    while let Some(token) = tokens.next() {
        if token == "!" {
            // Pre-option negation: consumed by the host, signaled to the
            // next option through the ambient indicator.
            invert = true;
            continue;
        }

        let name = token.strip_prefix("--").ok_or_else(|| {
            XtError::ParameterProblem(format!("unexpected argument: '{token}'"))
        })?;
        let spec = find_option(extension.options(), name).ok_or_else(|| {
            XtError::ParameterProblem(format!("unknown option: '--{name}'"))
        })?;

        let arg = if spec.has_arg {
            tokens.next().ok_or_else(|| {
                XtError::ParameterProblem(format!("option '--{name}' requires an argument"))
            })?
        } else {
            ""
        };

        let mut ctx = ParseContext {
            data: &mut data,
            invert: std::mem::take(&mut invert),
            seen: &mut seen,
        };
        extension.parse(&mut ctx, spec.code, arg)?;
    }

    extension.final_check(seen)?;
    Ok(data)
}

/// Render an extension's save output for a stored descriptor.
pub fn save_text(extension: &dyn MatchExtension, data: &[u8]) -> Result<String, XtError> {
    let mut out = Vec::new();
    extension.save(data, &mut out)?;
    Ok(String::from_utf8(out).expect("save output is UTF-8"))
}

/// Render an extension's listing output for a stored descriptor.
pub fn print_text(extension: &dyn MatchExtension, data: &[u8]) -> Result<String, XtError> {
    let mut out = Vec::new();
    extension.print(data, &mut out)?;
    Ok(String::from_utf8(out).expect("print output is UTF-8"))
}

/// Re-enter saved rule text through the parse path, as the compiler front
/// end does when restoring a ruleset.
pub fn reparse_saved(extension: &dyn MatchExtension, saved: &str) -> Result<Vec<u8>, XtError> {
    let tokens: Vec<&str> = saved.split_whitespace().collect();
    build_match(extension, &tokens)
}
