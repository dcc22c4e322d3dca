//! JSON export: a pretty-printed array of record objects.

use crate::error::ExportError;
use crate::record::EmailRecord;

/// Encodes records as an indented JSON array.
///
/// Keys follow the record field order and non-ASCII characters are written
/// as-is rather than escaped.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn encode_json(records: &[EmailRecord]) -> Result<String, ExportError> {
    let mut json = serde_json::to_string_pretty(records).map_err(|err| ExportError::Json {
        message: err.to_string(),
    })?;
    json.push('\n');
    Ok(json)
}
