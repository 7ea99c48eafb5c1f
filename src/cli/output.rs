/// Output formatting: plain lines, table, JSON modes. Error rendering.
use std::io::Write;

use comfy_table::{CellAlignment, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::divider::Half;
use crate::types::{CandidateOutput, CatalogEntryOutput, ErrorOutput, SolveOutput};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, print timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Print a free-form diagnostic line to stderr when `--debug` is set.
    pub fn debug_note(&self, message: &str) {
        if self.debug {
            eprintln!("[debug] {message}");
        }
    }
}

// --- Solve results ---

/// One plain-mode line: right-aligned R1 and R2 labels, then volts to 2 places.
#[must_use]
pub fn format_plain_line(c: &CandidateOutput) -> String {
    format!("{:>5}   {:>5}   {:.2}", c.r1_label, c.r2_label, c.v_out)
}

/// Write solve results to stdout.
pub fn write_solve(result: &SolveOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Plain => {
            for c in &result.candidates {
                println!("{}", format_plain_line(c));
            }
        }
        OutputFormat::Table => println!("{}", solve_table(result, ctx)),
        OutputFormat::Json => print_json(result),
        OutputFormat::Compact => print_compact_json(result),
        OutputFormat::Ndjson => print_ndjson(&result.candidates),
    }
}

fn solve_table(result: &SolveOutput, ctx: &OutputCtx) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["#", "R1", "R2", "VOUT", "ERROR"]);
    }
    for c in &result.candidates {
        table.add_row([
            c.rank.to_string(),
            c.r1_label.clone(),
            c.r2_label.clone(),
            format!("{:.2}", c.v_out),
            format!("{:.2}%", c.error_percent),
        ]);
    }
    for index in 0..5 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

// --- Catalog ---

/// Write catalog entries to stdout.
pub fn write_catalog(entries: &[CatalogEntryOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Plain => {
            for e in entries {
                println!("{:>3}   {:>7}   {}", e.index, e.label, half_name(e));
            }
        }
        OutputFormat::Table => write_catalog_table(entries, ctx),
        OutputFormat::Json => print_json(entries),
        OutputFormat::Compact => print_compact_json(entries),
        OutputFormat::Ndjson => print_ndjson(entries),
    }
}

fn write_catalog_table(entries: &[CatalogEntryOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["INDEX", "VALUE", "OHMS", "HALF"]);
    }
    for e in entries {
        table.add_row([
            e.index.to_string(),
            e.label.clone(),
            e.ohms.to_string(),
            half_name(e).to_owned(),
        ]);
    }
    println!("{table}");
}

fn half_name(e: &CatalogEntryOutput) -> &'static str {
    match e.half {
        Half::Low => "low (R1)",
        Half::High => "high (R2)",
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Plain | OutputFormat::Table => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_ndjson<T: Serialize>(values: &[T]) {
    for v in values {
        match serde_json::to_string(v) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    }
}
