/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout, either as JSON or rendered
/// as plain lines or a table. They are decoupled from the internal
/// `Candidate` / `Catalog` types.
use serde::{Deserialize, Serialize};

use crate::divider::{Candidate, DividerError, Half, ohms};

/// One ranked resistor pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateOutput {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Source-side resistor in ohms.
    pub r1: f64,
    /// Ground-side resistor in ohms.
    pub r2: f64,
    /// Formatted R1 (e.g., "2.2kΩ").
    pub r1_label: String,
    /// Formatted R2.
    pub r2_label: String,
    /// Output voltage produced by this pair.
    pub v_out: f64,
    /// Relative error as a fraction.
    pub error: f64,
    /// Relative error in percent.
    pub error_percent: f64,
}

impl CandidateOutput {
    /// Construct from a ranked `Candidate`.
    #[must_use]
    pub fn from_candidate(rank: usize, c: &Candidate) -> Self {
        Self {
            rank,
            r1: c.r1,
            r2: c.r2,
            r1_label: ohms(c.r1),
            r2_label: ohms(c.r2),
            v_out: c.v_out,
            error: c.error,
            error_percent: c.error_percent(),
        }
    }
}

/// Result of a solve run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveOutput {
    /// Source voltage.
    pub v_src: f64,
    /// Requested output voltage.
    pub v_target: f64,
    /// Margin (percent) the candidates were found at.
    pub margin: f64,
    /// Number of searches run (1 for a fixed `--margin`).
    pub attempts: usize,
    /// Ranked candidates.
    pub candidates: Vec<CandidateOutput>,
}

/// One catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntryOutput {
    /// 0-based position in the catalog.
    pub index: usize,
    /// Resistance in ohms.
    pub ohms: f64,
    /// Formatted value.
    pub label: String,
    /// Which side of the positional split the entry is on.
    pub half: Half,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `DividerError`.
    #[must_use]
    pub fn from_divider_error(err: &DividerError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_output_labels() {
        let c = Candidate {
            r1: 2_200.0,
            r2: 4_700.0,
            v_out: 3.405,
            error: 0.032,
        };
        let out = CandidateOutput::from_candidate(1, &c);
        assert_eq!(out.r1_label, "2.2k\u{2126}");
        assert_eq!(out.r2_label, "4.7k\u{2126}");
        assert!((out.error_percent - 3.2).abs() < 1e-9);
    }

    #[test]
    fn test_error_envelope_json() {
        let out = ErrorOutput::from_divider_error(&DividerError::ZeroTarget);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "zero_target");
        assert_eq!(
            json["error"]["message"],
            "Target output voltage must be non-zero"
        );
    }

    #[test]
    fn test_catalog_entry_half_serializes_lowercase() {
        let entry = CatalogEntryOutput {
            index: 0,
            ohms: 10.0,
            label: ohms(10.0),
            half: Half::Low,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["half"], "low");
    }
}
