/// Default command: find resistor pairs for `<V_SRC> <V_OUT>`.
use crate::cli::OutputCtx;
use crate::cli::args::SolveArgs;
use crate::cli::output::write_solve;
use crate::divider::{
    Candidate, Catalog, DEFAULT_MARGIN, DividerError, WidenOptions, find_resistors,
    widen_until_match,
};
use crate::types::{CandidateOutput, SolveOutput};

/// Run the solve mode.
///
/// # Errors
///
/// Returns `DividerError` on invalid voltages or margins, or when no pair
/// fits within the allowed margin.
pub fn run(args: &SolveArgs, catalog: &Catalog, ctx: &OutputCtx) -> Result<(), DividerError> {
    let result = solve(args, catalog, ctx)?;
    write_solve(&result, ctx);
    Ok(())
}

/// Compute the ranked output for `args` without printing it.
///
/// # Errors
///
/// Same as [`run`].
pub fn solve(
    args: &SolveArgs,
    catalog: &Catalog,
    ctx: &OutputCtx,
) -> Result<SolveOutput, DividerError> {
    let (v_src, v_out) = args.voltages()?;

    let fixed = args.margin.map(|m| m.unwrap_or(DEFAULT_MARGIN));
    let (margin, attempts, mut candidates) = if let Some(margin) = fixed {
        let _t_search = ctx.timer("search");
        let found = find_resistors(catalog, v_src, v_out, margin)?;
        if found.is_empty() {
            return Err(DividerError::NoMatch {
                v_src,
                v_out,
                max_margin: margin,
            });
        }
        (margin, 1, found)
    } else {
        let opts = WidenOptions {
            start: args.start_margin,
            step: args.step,
            max: args.max_margin,
        };
        let _t_widen = ctx.timer("widen");
        let widened = widen_until_match(catalog, v_src, v_out, &opts)?;
        ctx.debug_note(&format!(
            "matched at {}% after {} searches",
            widened.margin, widened.attempts
        ));
        (widened.margin, widened.attempts, widened.candidates)
    };

    if let Some(limit) = args.limit {
        candidates.truncate(limit);
    }

    Ok(SolveOutput {
        v_src,
        v_target: v_out,
        margin,
        attempts,
        candidates: ranked(&candidates),
    })
}

fn ranked(candidates: &[Candidate]) -> Vec<CandidateOutput> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| CandidateOutput::from_candidate(i + 1, c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use crate::divider::DEFAULT_MAX_MARGIN;

    fn args(v_src: f64, v_out: f64) -> SolveArgs {
        SolveArgs {
            v_src: Some(v_src),
            v_out: Some(v_out),
            margin: None,
            start_margin: 0.0,
            step: 1.0,
            max_margin: DEFAULT_MAX_MARGIN,
            limit: None,
        }
    }

    fn ctx() -> OutputCtx {
        OutputCtx::new(OutputFormat::Plain, false, false, false)
    }

    #[test]
    fn test_widening_solve() {
        let out = solve(&args(5.0, 3.3), &Catalog::standard(), &ctx()).unwrap();
        assert!((out.margin - 4.0).abs() < 1e-9);
        assert_eq!(out.attempts, 5);
        assert_eq!(out.candidates.len(), 1);
        assert_eq!(out.candidates[0].rank, 1);
        assert_eq!(out.candidates[0].r1_label, "2.2k\u{2126}");
        assert_eq!(out.candidates[0].r2_label, "4.7k\u{2126}");
    }

    #[test]
    fn test_fixed_margin_and_limit() {
        let mut a = args(12.0, 10.0);
        a.margin = Some(None);
        a.limit = Some(3);
        let out = solve(&a, &Catalog::standard(), &ctx()).unwrap();
        assert_eq!(out.attempts, 1);
        assert_eq!(out.candidates.len(), 3);
        let ranks: Vec<usize> = out.candidates.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!((out.candidates[0].r1, out.candidates[0].r2), (2_000.0, 10_000.0));
    }

    #[test]
    fn test_fixed_margin_without_match() {
        let mut a = args(5.0, 0.1);
        a.margin = Some(Some(50.0));
        assert!(matches!(
            solve(&a, &Catalog::standard(), &ctx()),
            Err(DividerError::NoMatch { .. })
        ));
    }

    #[test]
    fn test_zero_target_rejected() {
        assert_eq!(
            solve(&args(5.0, 0.0), &Catalog::standard(), &ctx()).unwrap_err(),
            DividerError::ZeroTarget
        );
    }

    #[test]
    fn test_missing_voltage() {
        let mut a = args(5.0, 3.3);
        a.v_out = None;
        assert_eq!(
            solve(&a, &Catalog::standard(), &ctx()).unwrap_err(),
            DividerError::MissingArgument("V_OUT")
        );
    }

    #[test]
    fn test_tiny_step_returns_error() {
        let mut a = args(5.0, 3.3);
        a.step = 1e-20;
        let err = solve(&a, &Catalog::standard(), &ctx()).unwrap_err();
        assert!(matches!(err, DividerError::StepTooSmall { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::parse("1k,2k2,3k3,4k7").unwrap();
        let out = solve(&args(10.0, 6.0), &catalog, &ctx()).unwrap();
        for c in &out.candidates {
            assert!(catalog.low().contains(&c.r1));
            assert!(catalog.high().contains(&c.r2));
        }
    }
}
