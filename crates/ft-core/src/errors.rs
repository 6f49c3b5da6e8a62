//! Error types shared across the rule compiler.

use thiserror::Error;

/// Exit status reported for user-input ("parameter problem") failures.
const EXIT_PARAMETER_PROBLEM: i32 = 2;

/// Errors surfaced to the host during rule construction, listing, or
/// registry bring-up.
///
/// User-input errors abort the enclosing rule construction: no partial rule
/// is committed and no descriptor state survives the failure.
#[derive(Debug, Error)]
pub enum XtError {
    /// Invalid user input: malformed option argument, missing mandatory
    /// option, or an unrecognized option code.
    #[error("Parameter problem: {0}")]
    ParameterProblem(String),

    /// Negation requested through two mechanisms at once.
    #[error("{match_name}: unexpected '!'")]
    UnexpectedNegation { match_name: &'static str },

    /// Extension name already present in the registry.
    #[error("Match extension already registered: '{0}'")]
    DuplicateMatch(&'static str),

    /// Lookup for an extension name the registry does not hold.
    #[error("Unknown match extension: '{0}'")]
    UnknownMatch(String),

    /// Extension declared a layout violating the engine ABI rules.
    #[error("Invalid descriptor layout: {0}")]
    InvalidLayout(String),

    /// Host configuration rejected before wiring.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Descriptor buffer does not match the declared wire layout.
    #[error("Descriptor size mismatch: got {got} bytes, layout declares {expected}")]
    DescriptorSize { got: usize, expected: usize },

    /// Writing listing/save output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl XtError {
    /// Process exit status for this failure.
    ///
    /// Parameter problems use the conventional status 2; everything else is
    /// a generic failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ParameterProblem(_) | Self::UnexpectedNegation { .. } => EXIT_PARAMETER_PROBLEM,
            _ => 1,
        }
    }

    /// Whether this failure was caused by user input rather than a
    /// framework or extension defect.
    #[must_use]
    pub fn is_parameter_problem(&self) -> bool {
        matches!(
            self,
            Self::ParameterProblem(_) | Self::UnexpectedNegation { .. }
        )
    }
}
