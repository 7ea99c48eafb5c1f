/// Brute-force search for resistor pairs that hit a target output voltage.
use super::catalog::Catalog;
use super::errors::DividerError;
use super::formula::calculate_v_out;

/// Margin (percent) used when the caller has no preference.
pub const DEFAULT_MARGIN: f64 = 5.0;

/// One resistor pair and how close it gets to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Source-side resistor, from the catalog's low half.
    pub r1: f64,
    /// Ground-side resistor, from the catalog's high half.
    pub r2: f64,
    /// Output voltage this pair produces.
    pub v_out: f64,
    /// Relative error versus the target, as a fraction (0.05 = 5 %).
    pub error: f64,
}

impl Candidate {
    /// Relative error in percent.
    #[must_use]
    pub fn error_percent(&self) -> f64 {
        self.error * 100.0
    }
}

/// Find every (R1, R2) pair whose output is within `margin` percent of `v_out`.
///
/// R1 is drawn only from [`Catalog::low`] and R2 only from [`Catalog::high`].
/// A pair is kept when its relative error is strictly below `margin / 100`.
/// Relative error divides by `|v_out|`, so it is never negative, even for a
/// negative target.
///
/// Results are sorted by error, then R1, then R2 (all ascending).
///
/// # Errors
///
/// - `DividerError::ZeroTarget`: `v_out` is zero
/// - `DividerError::NonFinite`: `v_src` or `v_out` is NaN or infinite
/// - `DividerError::InvalidMargin`: `margin` is negative or not finite
pub fn find_resistors(
    catalog: &Catalog,
    v_src: f64,
    v_out: f64,
    margin: f64,
) -> Result<Vec<Candidate>, DividerError> {
    validate_inputs(v_src, v_out)?;
    if !margin.is_finite() || margin < 0.0 {
        return Err(DividerError::InvalidMargin(margin));
    }

    let limit = margin / 100.0;
    let mut results: Vec<Candidate> = catalog
        .low()
        .iter()
        .flat_map(|&r1| catalog.high().iter().map(move |&r2| (r1, r2)))
        .filter_map(|(r1, r2)| {
            let actual = calculate_v_out(v_src, r1, r2);
            let error = (actual - v_out).abs() / v_out.abs();
            (error < limit).then_some(Candidate {
                r1,
                r2,
                v_out: actual,
                error,
            })
        })
        .collect();

    results.sort_by(|a, b| {
        a.error
            .total_cmp(&b.error)
            .then(a.r1.total_cmp(&b.r1))
            .then(a.r2.total_cmp(&b.r2))
    });
    Ok(results)
}

/// Reject voltages the error computation cannot handle.
pub(crate) fn validate_inputs(v_src: f64, v_out: f64) -> Result<(), DividerError> {
    if !v_src.is_finite() {
        return Err(DividerError::NonFinite {
            name: "source voltage",
            value: v_src,
        });
    }
    if !v_out.is_finite() {
        return Err(DividerError::NonFinite {
            name: "target voltage",
            value: v_out,
        });
    }
    if v_out == 0.0 {
        return Err(DividerError::ZeroTarget);
    }
    Ok(())
}
