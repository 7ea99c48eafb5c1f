/// Divider domain layer: formula, catalog, search, margin widening, units.
pub mod catalog;
pub mod errors;
pub mod formula;
pub mod search;
pub mod units;
pub mod widen;

pub use catalog::{Catalog, Half};
pub use errors::DividerError;
pub use search::{Candidate, DEFAULT_MARGIN, find_resistors};
pub use units::ohms;
pub use widen::{DEFAULT_MAX_MARGIN, WidenOptions, widen_until_match};
