/// Margin widening: retry the search with a looser margin until something fits.
///
/// The loop has three states. While SEARCHING it runs [`find_resistors`] at
/// the current margin; a non-empty result moves it to DONE, an empty one
/// bumps the margin by `step`. Once the next margin would pass `max` the loop
/// stops in EXHAUSTED and reports [`DividerError::NoMatch`].
///
/// The number of searches is bounded by [`MAX_ATTEMPTS`]. A step too small to
/// cover `start..=max` within that bound, or too small to change the margin
/// at all in floating point, is rejected with [`DividerError::StepTooSmall`].
use super::catalog::Catalog;
use super::errors::DividerError;
use super::search::{Candidate, find_resistors, validate_inputs};

/// Default upper bound for the widening loop, in percent.
///
/// Small targets can sit far below the smallest reachable output (0.1 V from
/// 5 V needs about 2900 % with the standard catalog), so the cap is generous.
pub const DEFAULT_MAX_MARGIN: f64 = 10_000.0;

/// Most searches a single widening run may perform.
pub const MAX_ATTEMPTS: u32 = 1_000_000;

/// Parameters of the widening loop, all in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidenOptions {
    /// First margin to try.
    pub start: f64,
    /// Amount added after each empty search.
    pub step: f64,
    /// Largest margin that may be tried.
    pub max: f64,
}

impl Default for WidenOptions {
    fn default() -> Self {
        Self {
            start: 0.0,
            step: 1.0,
            max: DEFAULT_MAX_MARGIN,
        }
    }
}

/// Outcome of a successful widening run.
#[derive(Debug, Clone, PartialEq)]
pub struct Widened {
    /// The margin at which the first matches appeared.
    pub margin: f64,
    /// Number of searches performed, including the successful one.
    pub attempts: usize,
    /// Ranked candidates at `margin`.
    pub candidates: Vec<Candidate>,
}

enum State {
    Searching { margin: f64, attempts: usize },
    Done(Widened),
    Exhausted { last: f64 },
}

/// Widen the margin from `opts.start` in `opts.step` increments until at
/// least one pair matches.
///
/// # Errors
///
/// - `DividerError::InvalidMargin`: `start` or `max` is negative or not finite
/// - `DividerError::InvalidStep`: `step` is not finite and positive
/// - `DividerError::StepTooSmall`: reaching `max` would take more than
///   [`MAX_ATTEMPTS`] searches, or adding `step` no longer moves the margin
/// - `DividerError::NoMatch`: no margin up to `max` yields a pair
/// - any input error from [`find_resistors`]
pub fn widen_until_match(
    catalog: &Catalog,
    v_src: f64,
    v_out: f64,
    opts: &WidenOptions,
) -> Result<Widened, DividerError> {
    validate_inputs(v_src, v_out)?;
    for margin in [opts.start, opts.max] {
        if !margin.is_finite() || margin < 0.0 {
            return Err(DividerError::InvalidMargin(margin));
        }
    }
    if !opts.step.is_finite() || opts.step <= 0.0 {
        return Err(DividerError::InvalidStep(opts.step));
    }
    if opts.start <= opts.max && (opts.max - opts.start) / opts.step >= f64::from(MAX_ATTEMPTS) {
        return Err(step_too_small(opts));
    }

    let mut state = if opts.start > opts.max {
        State::Exhausted { last: opts.max }
    } else {
        State::Searching {
            margin: opts.start,
            attempts: 0,
        }
    };

    loop {
        state = match state {
            State::Searching { margin, attempts } => {
                let candidates = find_resistors(catalog, v_src, v_out, margin)?;
                let attempts = attempts + 1;
                let next = margin + opts.step;
                if !candidates.is_empty() {
                    State::Done(Widened {
                        margin,
                        attempts,
                        candidates,
                    })
                } else if next > opts.max {
                    State::Exhausted { last: margin }
                } else if next <= margin || attempts >= MAX_ATTEMPTS as usize {
                    return Err(step_too_small(opts));
                } else {
                    State::Searching {
                        margin: next,
                        attempts,
                    }
                }
            }
            State::Done(widened) => return Ok(widened),
            State::Exhausted { last } => {
                return Err(DividerError::NoMatch {
                    v_src,
                    v_out,
                    max_margin: last,
                });
            }
        };
    }
}

fn step_too_small(opts: &WidenOptions) -> DividerError {
    DividerError::StepTooSmall {
        step: opts.step,
        start: opts.start,
        max: opts.max,
        limit: MAX_ATTEMPTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_to_five_found_below_hundred() {
        let w = widen_until_match(&Catalog::standard(), 9.0, 5.0, &WidenOptions::default()).unwrap();
        assert!(w.margin <= 100.0);
        assert!((w.margin - 9.0).abs() < 1e-9);
        assert_eq!(w.attempts, 10);
        assert_eq!(w.candidates.len(), 1);
        assert_eq!((w.candidates[0].r1, w.candidates[0].r2), (2_200.0, 3_300.0));
    }

    #[test]
    fn test_stops_at_first_matching_margin() {
        let c = Catalog::standard();
        let w = widen_until_match(&c, 5.0, 3.3, &WidenOptions::default()).unwrap();
        // 3.2 % error, so 4 % is the first integer margin that admits it.
        assert!((w.margin - 4.0).abs() < 1e-9);
        let earlier = find_resistors(&c, 5.0, 3.3, w.margin - 1.0).unwrap();
        assert!(earlier.is_empty());
    }

    #[test]
    fn test_small_target_needs_large_margin() {
        let w = widen_until_match(&Catalog::standard(), 5.0, 0.1, &WidenOptions::default()).unwrap();
        assert!((w.margin - 2_900.0).abs() < 1e-9);
        assert_eq!((w.candidates[0].r1, w.candidates[0].r2), (2_200.0, 3_300.0));
    }

    #[test]
    fn test_cap_reports_no_match() {
        let opts = WidenOptions {
            max: 100.0,
            ..WidenOptions::default()
        };
        let err = widen_until_match(&Catalog::standard(), 5.0, 0.1, &opts).unwrap_err();
        assert_eq!(
            err,
            DividerError::NoMatch {
                v_src: 5.0,
                v_out: 0.1,
                max_margin: 100.0,
            }
        );
    }

    #[test]
    fn test_start_above_max_is_exhausted() {
        let opts = WidenOptions {
            start: 50.0,
            step: 1.0,
            max: 10.0,
        };
        assert!(matches!(
            widen_until_match(&Catalog::standard(), 9.0, 5.0, &opts),
            Err(DividerError::NoMatch { .. })
        ));
    }

    #[test]
    fn test_custom_start_and_step() {
        let opts = WidenOptions {
            start: 2.5,
            step: 5.0,
            max: 100.0,
        };
        let w = widen_until_match(&Catalog::standard(), 9.0, 5.0, &opts).unwrap();
        assert!((w.margin - 12.5).abs() < 1e-9);
        assert_eq!(w.attempts, 3);
    }

    #[test]
    fn test_rejects_bad_options() {
        let c = Catalog::standard();
        let zero_step = WidenOptions {
            step: 0.0,
            ..WidenOptions::default()
        };
        assert_eq!(
            widen_until_match(&c, 9.0, 5.0, &zero_step),
            Err(DividerError::InvalidStep(0.0))
        );
        let negative_start = WidenOptions {
            start: -1.0,
            ..WidenOptions::default()
        };
        assert_eq!(
            widen_until_match(&c, 9.0, 5.0, &negative_start),
            Err(DividerError::InvalidMargin(-1.0))
        );
        assert_eq!(
            widen_until_match(&c, 9.0, 0.0, &WidenOptions::default()),
            Err(DividerError::ZeroTarget)
        );
    }

    #[test]
    fn test_tiny_step_is_rejected() {
        let opts = WidenOptions {
            step: 1e-20,
            ..WidenOptions::default()
        };
        assert_eq!(
            widen_until_match(&Catalog::standard(), 5.0, 3.3, &opts),
            Err(DividerError::StepTooSmall {
                step: 1e-20,
                start: 0.0,
                max: DEFAULT_MAX_MARGIN,
                limit: MAX_ATTEMPTS,
            })
        );
    }

    #[test]
    fn test_step_lost_at_huge_margins_is_rejected() {
        // Doubles near 1e16 are 2 apart, so adding 1.0 leaves the margin unchanged.
        let wide = WidenOptions {
            start: 1e16,
            step: 1.0,
            max: 1e17,
        };
        assert!(matches!(
            widen_until_match(&Catalog::standard(), 1e10, 1e-10, &wide),
            Err(DividerError::StepTooSmall { .. })
        ));
        let narrow = WidenOptions {
            start: 1e16,
            step: 1.0,
            max: 1e16 + 4.0,
        };
        assert!(matches!(
            widen_until_match(&Catalog::standard(), 1e10, 1e-10, &narrow),
            Err(DividerError::StepTooSmall { .. })
        ));
    }
}
