//! Generated email record type.

use serde::{Deserialize, Serialize};

/// Column names shared by every structured export, in output order.
pub const RECORD_FIELDS: [&str; 5] = ["name", "email", "domain", "pattern", "username"];

/// One generated email record.
///
/// Field order matches [`RECORD_FIELDS`], which is also the order used by
/// the CSV, JSON, and SQL encoders.
///
/// # Example
///
/// ```
/// use synthetic_email::EmailRecord;
///
/// let record = EmailRecord {
///     name: "Ann Lee".to_owned(),
///     email: "ann.lee@example.com".to_owned(),
///     domain: "example.com".to_owned(),
///     pattern: "first-dot-last".to_owned(),
///     username: "ann.lee".to_owned(),
/// };
///
/// assert_eq!(record.fields()[1], "ann.lee@example.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Display name the record was generated from.
    pub name: String,
    /// Full address, `username@domain`.
    pub email: String,
    /// Domain part of the address.
    pub domain: String,
    /// Identifier of the pattern that produced the username.
    pub pattern: String,
    /// Local part of the address.
    pub username: String,
}

impl EmailRecord {
    /// Returns the field values in [`RECORD_FIELDS`] order.
    #[must_use]
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.name,
            &self.email,
            &self.domain,
            &self.pattern,
            &self.username,
        ]
    }
}
