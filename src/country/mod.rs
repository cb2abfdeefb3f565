//! Country data model and the derived views over it.

mod model;
mod search;

pub use model::{CountryRecord, Flag};
pub use search::{
    cycle_region, distinct_regions, matches_query, matches_region, paginate, visible,
    SearchField, PAGE_STEP,
};
