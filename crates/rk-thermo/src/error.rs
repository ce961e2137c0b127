//! Thermodynamic collaborator errors.

use thiserror::Error;

/// Result type for thermodynamic operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// Non-physical values (negative temperature, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    /// Two collaborators disagree on a size (species count, group count).
    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ThermoError::NonPhysical {
            what: "electron temperature",
        };
        assert!(err.to_string().contains("electron temperature"));

        let err = ThermoError::DimensionMismatch {
            what: "species",
            expected: 5,
            actual: 4,
        };
        assert!(err.to_string().contains("expected 5"));
    }
}
