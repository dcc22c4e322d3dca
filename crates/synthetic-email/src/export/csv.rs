//! CSV export with a `name,email,domain,pattern,username` header.

use ::csv::WriterBuilder;

use crate::error::ExportError;
use crate::record::{EmailRecord, RECORD_FIELDS};

/// Encodes records as CSV.
///
/// Fields containing commas, quotes, or line breaks are quoted, with
/// embedded quotes doubled. The header row is written even when there are
/// no records.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if the writer fails.
pub fn encode_csv(records: &[EmailRecord]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(RECORD_FIELDS).map_err(csv_error)?;
    for record in records {
        writer.write_record(record.fields()).map_err(csv_error)?;
    }
    let bytes = writer.into_inner().map_err(|err| ExportError::Csv {
        message: err.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|err| ExportError::Csv {
        message: err.to_string(),
    })
}

fn csv_error(err: ::csv::Error) -> ExportError {
    ExportError::Csv {
        message: err.to_string(),
    }
}
