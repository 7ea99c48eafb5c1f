/// Errors from the divider domain layer.
use thiserror::Error;

/// Errors that can occur while searching for resistor pairs.
#[derive(Debug, Error, PartialEq)]
pub enum DividerError {
    /// The target output voltage is zero, so relative error is undefined.
    #[error("Target output voltage must be non-zero")]
    ZeroTarget,

    /// A voltage argument was NaN or infinite.
    #[error("{name} must be a finite number, got {value}")]
    NonFinite {
        /// Which input was rejected (e.g., "source voltage").
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A margin was negative or not a finite number.
    #[error("Margin must be a finite, non-negative percentage, got {0}")]
    InvalidMargin(f64),

    /// The widening step was zero, negative, or not finite.
    #[error("Margin step must be a finite, positive percentage, got {0}")]
    InvalidStep(f64),

    /// The step is too small to get from `start` to `max` in a bounded
    /// number of searches.
    #[error(
        "Margin step {step}% is too small to widen from {start}% to {max}% within {limit} searches"
    )]
    StepTooSmall {
        /// Requested step.
        step: f64,
        /// First margin.
        start: f64,
        /// Margin cap.
        max: f64,
        /// Largest number of searches allowed.
        limit: u32,
    },

    /// A catalog entry could not be parsed as a positive resistance.
    #[error("Invalid resistor value '{value}': {reason}")]
    InvalidResistance {
        /// The offending input text.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A catalog needs one value on each side of the low/high split.
    #[error("Resistor catalog needs at least two values, got {0}")]
    CatalogTooSmall(usize),

    /// No pair came within the largest allowed margin.
    #[error("No resistor pair divides {v_src} V down to {v_out} V within {max_margin}% error")]
    NoMatch {
        /// Source voltage.
        v_src: f64,
        /// Target output voltage.
        v_out: f64,
        /// The largest margin that was tried.
        max_margin: f64,
    },

    /// A positional argument was not supplied. clap enforces both voltages,
    /// so this only surfaces for `SolveArgs` built outside the parser.
    #[error("Missing required argument <{0}>")]
    MissingArgument(&'static str),
}

/// Exit code mapping for `DividerError` variants.
impl DividerError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoMatch { .. } => 4,
            Self::ZeroTarget
            | Self::NonFinite { .. }
            | Self::InvalidMargin(_)
            | Self::InvalidStep(_)
            | Self::StepTooSmall { .. }
            | Self::InvalidResistance { .. }
            | Self::CatalogTooSmall(_)
            | Self::MissingArgument(_) => 2,
        }
    }

    /// Machine-readable error code (`snake_case`) for JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZeroTarget => "zero_target",
            Self::NonFinite { .. } => "non_finite",
            Self::InvalidMargin(_) => "invalid_margin",
            Self::InvalidStep(_) => "invalid_step",
            Self::StepTooSmall { .. } => "step_too_small",
            Self::InvalidResistance { .. } => "invalid_resistance",
            Self::CatalogTooSmall(_) => "catalog_too_small",
            Self::NoMatch { .. } => "no_match",
            Self::MissingArgument(_) => "missing_argument",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(DividerError::ZeroTarget.exit_code(), 2);
        assert_eq!(DividerError::CatalogTooSmall(1).exit_code(), 2);
        let no_match = DividerError::NoMatch {
            v_src: 5.0,
            v_out: 0.1,
            max_margin: 100.0,
        };
        assert_eq!(no_match.exit_code(), 4);
        assert_eq!(no_match.code(), "no_match");
        let too_small = DividerError::StepTooSmall {
            step: 1e-20,
            start: 0.0,
            max: 100.0,
            limit: 1_000_000,
        };
        assert_eq!(too_small.exit_code(), 2);
        assert_eq!(too_small.code(), "step_too_small");
    }

    #[test]
    fn test_messages() {
        let err = DividerError::NoMatch {
            v_src: 5.0,
            v_out: 0.1,
            max_margin: 100.0,
        };
        assert_eq!(
            err.to_string(),
            "No resistor pair divides 5 V down to 0.1 V within 100% error"
        );
        assert_eq!(
            DividerError::MissingArgument("V_OUT").to_string(),
            "Missing required argument <V_OUT>"
        );
    }
}
