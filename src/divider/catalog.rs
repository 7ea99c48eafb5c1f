/// The set of resistor values the search is allowed to use.
///
/// A catalog is split by position, not by value: the first `len / 2` entries
/// are R1 (top) candidates, the rest are R2 (bottom) candidates. Because the
/// split follows list order, reordering a catalog changes which pairs are
/// considered.
use std::borrow::Cow;

use serde::Serialize;

use super::errors::DividerError;
use super::units::parse_ohms;

/// Resistors on hand, in the order that defines the low/high split.
pub const STANDARD_VALUES: [f64; 30] = [
    10.0, 22.0, 47.0, 100.0, 150.0, 200.0, 220.0, 270.0, 330.0, 470.0, 510.0, 680.0, 1_000.0,
    2_000.0, 2_200.0, 3_300.0, 4_700.0, 5_100.0, 6_800.0, 10_000.0, 20_000.0, 47_000.0, 51_000.0,
    68_000.0, 100_000.0, 220_000.0, 300_000.0, 470_000.0, 680_000.0, 1_000_000.0,
];

/// Which side of the positional split an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    /// First half: candidates for R1 (source side).
    Low,
    /// Second half: candidates for R2 (ground side).
    High,
}

/// An immutable, ordered list of positive resistances.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    values: Cow<'static, [f64]>,
}

impl Catalog {
    /// The built-in catalog. Borrows [`STANDARD_VALUES`] without allocating.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            values: Cow::Borrowed(&STANDARD_VALUES),
        }
    }

    /// Build a custom catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// - `DividerError::CatalogTooSmall`: fewer than two values
    /// - `DividerError::InvalidResistance`: a value is not finite and positive
    pub fn new(values: Vec<f64>) -> Result<Self, DividerError> {
        if values.len() < 2 {
            return Err(DividerError::CatalogTooSmall(values.len()));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v <= 0.0) {
            return Err(DividerError::InvalidResistance {
                value: bad.to_string(),
                reason: "resistance must be finite and positive".to_owned(),
            });
        }
        Ok(Self {
            values: Cow::Owned(values),
        })
    }

    /// Parse a comma- or whitespace-separated list such as `"1k, 2k2 4.7k,10k"`.
    ///
    /// # Errors
    ///
    /// Returns the first parse error, or `DividerError::CatalogTooSmall`.
    pub fn parse(list: &str) -> Result<Self, DividerError> {
        let values = list
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(parse_ohms)
            .collect::<Result<Vec<f64>, _>>()?;
        Self::new(values)
    }

    /// All values in catalog order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Index of the first high-half entry.
    #[must_use]
    pub fn split_index(&self) -> usize {
        self.values.len() / 2
    }

    /// R1 candidates.
    #[must_use]
    pub fn low(&self) -> &[f64] {
        &self.values[..self.split_index()]
    }

    /// R2 candidates.
    #[must_use]
    pub fn high(&self) -> &[f64] {
        &self.values[self.split_index()..]
    }

    /// Which half the entry at `index` falls in.
    #[must_use]
    pub fn half_of(&self, index: usize) -> Half {
        if index < self.split_index() {
            Half::Low
        } else {
            Half::High
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
