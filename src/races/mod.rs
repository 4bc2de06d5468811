pub mod catalog;
pub mod format;
pub mod resolver;

pub use catalog::{load_catalog, CatalogError, RaceRecord};
pub use format::format_race_info;
pub use resolver::{next_race, race_this_week, ResolvedRace};
