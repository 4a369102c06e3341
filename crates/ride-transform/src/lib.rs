pub mod coverage;
pub mod date;
pub mod insight;
pub mod normalize;
pub mod numeric;
pub mod schema;
pub mod station;

pub use coverage::temperature_coverage;
pub use date::{parse_date, parse_datetime};
pub use insight::{filter_rows, summarize, trips_by_weekday};
pub use normalize::normalize;
pub use numeric::{parse_count, parse_f64};
pub use schema::{SchemaMatch, find_candidate, resolve_schema};
pub use station::rank_stations;
