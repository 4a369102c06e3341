pub mod error;
pub mod hints;
pub mod record;
pub mod schema;

pub use error::{NormalizeError, Result};
pub use hints::ColumnHint;
pub use record::{CoverageGap, DailyRecord, DatasetSummary, StationCount, WeekdayCount};
pub use schema::{
    DATE_COLUMN, RIDER_TYPE_COLUMN, STATION_COLUMN, STATION_VALUE_COLUMN, SchemaSearch,
    SchemaVariant,
};
