use thiserror::Error;

/// Mechanism-load failure.
///
/// Covers every fatal problem found while turning mechanism input into
/// engine objects: an unsupported rate-law kind, a malformed scalar or
/// enumerated field, or a unit string that does not parse. `what` names the
/// offending item ("rate law", "activation energy units", ...), `value` is
/// the text or kind name that was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid {what} \"{value}\": {reason}")]
pub struct ConfigurationError {
    pub what: String,
    pub value: String,
    pub reason: String,
}

impl ConfigurationError {
    pub fn new(
        what: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            what: what.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
