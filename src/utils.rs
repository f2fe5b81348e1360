use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for contact details
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]{8,}$").unwrap());

const UAE_COUNTRY_CODE: &str = "971";

/// Loose shape check: something@something.tld with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// At least eight digits, spaces, dashes or parentheses, optionally led by `+`.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Parse the integer prefix of `input` the way browsers coerce number fields:
/// leading whitespace and an optional sign are accepted, parsing stops at the
/// first non-digit. Returns `None` when no digit is found.
///
/// ```
/// use kif_realty_web::utils::parse_leading_int;
/// assert_eq!(parse_leading_int(" 1500000.00"), Some(1_500_000));
/// assert_eq!(parse_leading_int("-42abc"), Some(-42));
/// assert_eq!(parse_leading_int("abc"), None);
/// ```
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    // Saturate rather than fail on absurdly long inputs.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Format an amount in rupees with Indian digit grouping, e.g. `₹12,34,567`.
pub fn format_inr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let sign = if amount < 0 { "-" } else { "" };
    if digits.len() <= 3 {
        return format!("{}₹{}", sign, digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{}₹{},{}", sign, groups.join(","), tail)
}

/// Reformat free-typed phone input into the UAE display form.
///
/// Non-digits are stripped; a leading `0` or a bare nine-digit number gets
/// the `971` country code; the result is grouped as `+971 50 123 4567`.
pub fn format_phone_input(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if !digits.is_empty() && !digits.starts_with(UAE_COUNTRY_CODE) {
        if let Some(rest) = digits.strip_prefix('0') {
            digits = format!("{}{}", UAE_COUNTRY_CODE, rest);
        } else if digits.len() == 9 {
            digits = format!("{}{}", UAE_COUNTRY_CODE, digits);
        }
    }

    let d = digits.as_str();
    match d.len() {
        0 => String::new(),
        1..=3 => format!("+{}", d),
        4..=5 => format!("+{} {}", &d[..3], &d[3..]),
        6..=8 => format!("+{} {} {}", &d[..3], &d[3..5], &d[5..]),
        len => {
            let cut = len.min(12);
            format!("+{} {} {} {}{}", &d[..3], &d[3..5], &d[5..8], &d[8..cut], &d[cut..])
        }
    }
}

/// Percent-encode a value for use inside a query string.
pub fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@agency.co.ae"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a @b.com"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+971 50 123 4567"));
        assert!(is_valid_phone("(04) 123-4567"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("call me maybe"));
    }

    #[test]
    fn leading_int_stops_at_first_non_digit() {
        assert_eq!(parse_leading_int("5000"), Some(5000));
        assert_eq!(parse_leading_int("  3000 AED"), Some(3000));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("1e5"), Some(1));
    }

    #[test]
    fn inr_grouping() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(1_000), "₹1,000");
        assert_eq!(format_inr(1_500_000), "₹15,00,000");
        assert_eq!(format_inr(123_456_789), "₹12,34,56,789");
        assert_eq!(format_inr(-25_000), "-₹25,000");
    }

    #[test]
    fn phone_formatting() {
        assert_eq!(format_phone_input(""), "");
        assert_eq!(format_phone_input("97"), "+97");
        assert_eq!(format_phone_input("0501234567"), "+971 50 123 4567");
        assert_eq!(format_phone_input("501234567"), "+971 50 123 4567");
        assert_eq!(format_phone_input("+971 50 12"), "+971 50 12");
        assert_eq!(format_phone_input("97150"), "+971 50");
        assert_eq!(format_phone_input("9715012345678"), "+971 50 123 45678");
    }

    #[test]
    fn query_encoding() {
        assert_eq!(encode_component("dubai marina"), "dubai+marina");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    }
}
