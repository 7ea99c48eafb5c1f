/// Command dispatch: routes the parsed CLI to its implementation.
pub mod catalog;
pub mod solve;

use crate::cli::output::OutputCtx;
use crate::cli::{Cli, Command};
use crate::divider::{Catalog, DividerError};

/// Dispatch a parsed `Cli` to its handler.
///
/// # Errors
///
/// Returns `DividerError` on any command failure.
pub fn dispatch(cli: &Cli, ctx: &OutputCtx) -> Result<(), DividerError> {
    let catalog = load_catalog(cli.catalog.as_deref(), ctx)?;
    match &cli.command {
        Some(Command::Catalog(args)) => catalog::run(args, &catalog, ctx),
        None => solve::run(&cli.solve, &catalog, ctx),
    }
}

/// The standard catalog, or the one given with `--catalog`.
fn load_catalog(list: Option<&str>, ctx: &OutputCtx) -> Result<Catalog, DividerError> {
    let _t_catalog = ctx.timer("load_catalog");
    list.map_or_else(|| Ok(Catalog::standard()), Catalog::parse)
}
