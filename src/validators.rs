//! Stateless field validators used by the service layer before every write.

use crate::consts;
use chrono::NaiveDate;

/// True iff the string has a `local@domain.tld` shape: letters, digits and
/// `._%+-` before the `@`, letters, digits, `.` and `-` for the domain, and
/// an alphabetic TLD of at least two characters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    local_ok && host_ok && tld_ok
}

/// True iff the string is an optional leading `+` followed by 7 to 15
/// digits and nothing else (no spaces, dashes or letters).
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);

    (consts::PHONE_MIN_DIGITS..=consts::PHONE_MAX_DIGITS).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
}

/// False on empty or whitespace-only strings.
pub fn is_not_empty(text: &str) -> bool {
    !text.trim().is_empty()
}

/// True iff the number is strictly greater than zero.
pub fn is_positive_number(number: f64) -> bool {
    number > 0.0
}

/// True iff the number is zero or greater.
pub fn is_non_negative(number: i64) -> bool {
    number >= 0
}

/// Parses a calendar date under the exact `YYYY-MM-DD` pattern. Impossible
/// dates (february 30th) and any other format come back as `None`.
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, consts::DATE_INPUT_FORMAT).ok()
}

/// True iff [`parse_date`] accepts the string.
pub fn is_valid_date(date_str: &str) -> bool {
    parse_date(date_str).is_some()
}
