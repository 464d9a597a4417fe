//! Common error infrastructure for party-core.
//!
//! Rule violations are reported as [`crate::action::RoundError`]. Every
//! variant maps to an [`ErrorSeverity`] so the session layer can tell a
//! player mistake (a vote for someone already out, an empty answer) from an
//! engine bug without matching on each variant.

/// Severity level of an error, used for logging and recovery decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Out-of-date input, e.g. a countdown tick that arrives after the
    /// discussion already ended. Safe to drop silently.
    Stale,

    /// Invalid input from the presentation layer. The state is untouched and
    /// the user can try again.
    Validation,

    /// A state invariant did not hold after a transition. Indicates a bug.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stale => "stale",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an engine bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

impl core::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
