//! Plain-text export: one address per line.

use crate::record::EmailRecord;

/// Encodes records as newline-terminated email addresses.
#[must_use]
pub fn encode_text(records: &[EmailRecord]) -> String {
    records
        .iter()
        .map(|record| format!("{}\n", record.email))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_email_per_line() {
        let records: Vec<EmailRecord> = ["ann.lee@example.com", "bo.chan@example.org"]
            .into_iter()
            .map(|email| EmailRecord {
                email: email.to_owned(),
                ..EmailRecord::default()
            })
            .collect();
        assert_eq!(
            encode_text(&records),
            "ann.lee@example.com\nbo.chan@example.org\n"
        );
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(encode_text(&[]), "");
    }
}
