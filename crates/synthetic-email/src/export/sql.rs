//! SQL export: a `CREATE TABLE` statement plus batched `INSERT`s.
//!
//! Output sticks to syntax shared by SQLite and ANSI-leaning engines: plain
//! identifiers, `TEXT` columns, and single-quoted literals with embedded
//! quotes doubled.

use crate::error::ExportError;
use crate::record::{EmailRecord, RECORD_FIELDS};

/// Table name used when none is configured.
pub const DEFAULT_TABLE_NAME: &str = "synthetic_emails";

/// Maximum rows per multi-row `INSERT`; SQLite caps compound rows at 500.
pub const INSERT_BATCH_SIZE: usize = 500;

/// Encodes records as SQL statements targeting `table`.
///
/// # Errors
///
/// Returns [`ExportError::InvalidTableName`] unless `table` matches
/// `[A-Za-z_][A-Za-z0-9_]*`.
///
/// # Example
///
/// ```
/// use synthetic_email::{EmailRecord, encode_sql};
///
/// let records = [EmailRecord {
///     name: "Ann O'Lee".to_owned(),
///     ..EmailRecord::default()
/// }];
/// let sql = encode_sql(&records, "people").expect("encode");
///
/// assert!(sql.contains("CREATE TABLE people ("));
/// assert!(sql.contains("'Ann O''Lee'"));
/// ```
pub fn encode_sql(records: &[EmailRecord], table: &str) -> Result<String, ExportError> {
    if !is_valid_table_name(table) {
        return Err(ExportError::InvalidTableName {
            name: table.to_owned(),
        });
    }

    let mut sql = String::new();
    sql.push_str("-- Synthetic/test data export\n");
    sql.push_str(&format!("-- Table: {table}\n\n"));
    sql.push_str(&format!("CREATE TABLE {table} (\n"));
    let columns: Vec<String> = RECORD_FIELDS
        .iter()
        .map(|column| format!("  {column} TEXT"))
        .collect();
    sql.push_str(&columns.join(",\n"));
    sql.push_str("\n);\n");

    let column_list = RECORD_FIELDS.join(", ");
    for chunk in records.chunks(INSERT_BATCH_SIZE) {
        sql.push_str(&format!("\nINSERT INTO {table} ({column_list}) VALUES\n"));
        let rows: Vec<String> = chunk.iter().map(value_row).collect();
        sql.push_str(&rows.join(",\n"));
        sql.push_str(";\n");
    }
    Ok(sql)
}

/// Returns `true` if `name` is a plain, unquoted SQL identifier.
#[must_use]
pub fn is_valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|head| head.is_ascii_alphabetic() || head == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn value_row(record: &EmailRecord) -> String {
    let values: Vec<String> = record.fields().iter().map(|value| quote(value)).collect();
    format!("  ({})", values.join(", "))
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
