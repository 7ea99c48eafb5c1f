/// `catalog` command: list the active catalog and its R1/R2 split.
use crate::cli::OutputCtx;
use crate::cli::args::CatalogArgs;
use crate::cli::output::write_catalog;
use crate::divider::{Catalog, DividerError, ohms};
use crate::types::CatalogEntryOutput;

/// Run `divcalc catalog`.
///
/// # Errors
///
/// Cannot currently fail once the catalog is loaded.
pub fn run(args: &CatalogArgs, catalog: &Catalog, ctx: &OutputCtx) -> Result<(), DividerError> {
    write_catalog(&entries(args, catalog), ctx);
    Ok(())
}

fn entries(args: &CatalogArgs, catalog: &Catalog) -> Vec<CatalogEntryOutput> {
    catalog
        .values()
        .iter()
        .enumerate()
        .map(|(index, &value)| CatalogEntryOutput {
            index,
            ohms: value,
            label: ohms(value),
            half: catalog.half_of(index),
        })
        .filter(|e| args.half.is_none_or(|h| h == e.half))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divider::Half;

    #[test]
    fn test_all_entries() {
        let list = entries(&CatalogArgs { half: None }, &Catalog::standard());
        assert_eq!(list.len(), 30);
        assert_eq!(list[14].label, "2.2k\u{2126}");
        assert_eq!(list[14].half, Half::Low);
        assert_eq!(list[15].label, "3.3k\u{2126}");
        assert_eq!(list[15].half, Half::High);
    }

    #[test]
    fn test_half_filter() {
        let list = entries(
            &CatalogArgs {
                half: Some(Half::High),
            },
            &Catalog::standard(),
        );
        assert_eq!(list.len(), 15);
        assert_eq!(list[0].index, 15);
        assert!(list.iter().all(|e| e.half == Half::High));
    }
}
