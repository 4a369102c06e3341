pub mod error;
pub mod hints;
pub mod table;

pub use error::{IngestError, Result};
pub use hints::build_column_hints;
pub use table::{RawTable, read_csv_table};
