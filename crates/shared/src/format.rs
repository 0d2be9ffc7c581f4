use chrono::NaiveDate;

use crate::error::DateFormatError;

const ISO_DATE_PREFIX_LEN: usize = 10;

/// Converts an ISO `YYYY-MM-DD...` timestamp into `MM/DD/YYYY`.
///
/// Only the leading date is read; anything after it (time, offset) is
/// ignored. Input whose prefix is not a real calendar date is rejected
/// rather than sliced blindly.
pub fn format_birthday(iso: &str) -> Result<String, DateFormatError> {
    let prefix = iso
        .get(..ISO_DATE_PREFIX_LEN)
        .ok_or_else(|| DateFormatError::TooShort {
            input: iso.to_string(),
        })?;

    let date = NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(|_| {
        DateFormatError::InvalidDate {
            input: iso.to_string(),
        }
    })?;

    Ok(date.format("%m/%d/%Y").to_string())
}

/// Formatted birthday, or the raw value when it cannot be parsed.
pub fn birthday_or_raw(iso: &str) -> String {
    format_birthday(iso).unwrap_or_else(|err| err.input().to_string())
}
