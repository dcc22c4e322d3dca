//! Export encoders for generated records.
//!
//! Each encoder is a pure function from the finished record list to a UTF-8
//! string. Encoders do not validate records; the generator is responsible
//! for producing well-formed ones.

mod csv;
mod json;
mod sql;
mod text;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::ExportError;
use crate::record::EmailRecord;

pub use self::csv::encode_csv;
pub use self::json::encode_json;
pub use self::sql::{DEFAULT_TABLE_NAME, INSERT_BATCH_SIZE, encode_sql, is_valid_table_name};
pub use self::text::encode_text;

/// File name stem used for default export file names.
const FILE_STEM: &str = "synthetic_emails";

/// Supported export formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// One email address per line.
    #[default]
    Text,
    /// Comma-separated values with a header row.
    Csv,
    /// A pretty-printed JSON array of objects.
    Json,
    /// `CREATE TABLE` followed by batched `INSERT` statements.
    Sql,
}

impl ExportFormat {
    /// Returns the file extension for this format, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Sql => "sql",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "sql" => Ok(Self::Sql),
            _ => Err(ExportError::UnknownFormat {
                value: value.to_owned(),
            }),
        }
    }
}

/// Encodes records in the requested format.
///
/// `table` is only used by the SQL encoder.
///
/// # Errors
///
/// Returns [`ExportError`] if the encoder fails or the SQL table name is
/// invalid.
///
/// # Example
///
/// ```
/// use synthetic_email::{EmailRecord, ExportFormat, encode};
///
/// let records = vec![EmailRecord {
///     name: "Ann Lee".to_owned(),
///     email: "ann.lee@example.com".to_owned(),
///     domain: "example.com".to_owned(),
///     pattern: "first-dot-last".to_owned(),
///     username: "ann.lee".to_owned(),
/// }];
///
/// let text = encode(&records, ExportFormat::Text, "synthetic_emails").expect("encode");
/// assert_eq!(text, "ann.lee@example.com\n");
/// ```
pub fn encode(
    records: &[EmailRecord],
    format: ExportFormat,
    table: &str,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Text => Ok(encode_text(records)),
        ExportFormat::Csv => encode_csv(records),
        ExportFormat::Json => encode_json(records),
        ExportFormat::Sql => encode_sql(records, table),
    }
}

/// Returns a timestamped default file name such as
/// `synthetic_emails_20260102_030405.csv`.
#[must_use]
pub fn default_file_name(format: ExportFormat, timestamp: NaiveDateTime) -> String {
    format!(
        "{FILE_STEM}_{}.{}",
        timestamp.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}
