//! The unloaded voltage divider formula.
//!
//! ```text
//! Vout = Vs * R2 / (R1 + R2)
//! ```
//!
//! `R1` sits between the source and the output node, `R2` between the output
//! node and ground.

/// Output voltage of a divider with `r1` on top and `r2` on the bottom.
///
/// No validation is done: `r1 + r2` must be non-zero. Every value in a
/// [`Catalog`](super::Catalog) is positive, so pairs drawn from one are safe.
#[must_use]
pub fn calculate_v_out(vs: f64, r1: f64, r2: f64) -> f64 {
    (vs * r2) / (r1 + r2)
}
