/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand, ValueEnum};

use crate::divider::{DEFAULT_MAX_MARGIN, DividerError, Half};

/// divcalc: pick two standard resistors for a voltage divider.
#[derive(Debug, Parser)]
#[command(
    name = "divcalc",
    about = "Find standard resistor pairs that divide a source voltage down to a target",
    version,
    arg_required_else_help = true,
    subcommand_negates_reqs = true
)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "plain")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers.
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Print timing spans to stderr for debugging.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Replace the built-in catalog with a comma-separated list of
    /// resistances, e.g. "1k,2k2,4.7k,10k". Order decides the R1/R2 split.
    #[arg(long, global = true, value_name = "VALUES")]
    pub catalog: Option<String>,

    #[command(flatten)]
    pub solve: SolveArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Fixed-width lines: R1, R2, output voltage.
    #[default]
    Plain,
    /// Aligned table with headers, including the error column.
    Table,
    /// JSON object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

/// Subcommands. Without one, divcalc solves for the positional voltages.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the resistor catalog and its R1/R2 split.
    Catalog(CatalogArgs),
}

/// Arguments for the default solve mode.
#[derive(Debug, clap::Args)]
pub struct SolveArgs {
    /// Source voltage.
    #[arg(required = true, allow_negative_numbers = true)]
    pub v_src: Option<f64>,

    /// Desired output voltage (non-zero).
    #[arg(required = true, allow_negative_numbers = true)]
    pub v_out: Option<f64>,

    /// Search once at this error margin (percent) instead of widening.
    /// Without a value, uses 5%.
    #[arg(
        long,
        value_name = "PCT",
        num_args = 0..=1,
        conflicts_with_all = ["start_margin", "step", "max_margin"]
    )]
    pub margin: Option<Option<f64>>,

    /// First margin (percent) tried when widening.
    #[arg(long, value_name = "PCT", default_value_t = 0.0)]
    pub start_margin: f64,

    /// Margin increase (percent) after each empty search.
    #[arg(long, value_name = "PCT", default_value_t = 1.0)]
    pub step: f64,

    /// Give up once the margin would exceed this (percent).
    #[arg(long, value_name = "PCT", default_value_t = DEFAULT_MAX_MARGIN)]
    pub max_margin: f64,

    /// Maximum number of pairs to print.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

impl SolveArgs {
    /// The `(source, target)` voltages.
    ///
    /// clap's `required` guarantees both when parsed from the command line;
    /// the error only arises for a `SolveArgs` built by hand.
    ///
    /// # Errors
    ///
    /// `DividerError::MissingArgument` naming the first absent voltage.
    pub fn voltages(&self) -> Result<(f64, f64), DividerError> {
        let v_src = self.v_src.ok_or(DividerError::MissingArgument("V_SRC"))?;
        let v_out = self.v_out.ok_or(DividerError::MissingArgument("V_OUT"))?;
        Ok((v_src, v_out))
    }
}

/// Arguments for `divcalc catalog`.
#[derive(Debug, clap::Args)]
pub struct CatalogArgs {
    /// Only list one half of the split.
    #[arg(long, value_name = "HALF")]
    pub half: Option<Half>,
}
