//! US phone number input formatting and validation.

use thiserror::Error;

/// Number of digits in a US phone number without country code.
pub const US_NUMBER_DIGITS: usize = 10;

/// Input rejected before any lookup is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneInputError {
    #[error("Please enter a phone number")]
    Empty,

    #[error("Please enter a valid 10-digit US phone number")]
    Invalid,
}

/// Strip everything except ASCII digits.
pub fn clean(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format input as the user types: `(DDD`, `(DDD) DDD`, `(DDD) DDD-DDDD`.
pub fn format_as_typed(raw: &str) -> String {
    let digits = clean(raw);

    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({}", digits),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        n => format!(
            "({}) {}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..n.min(US_NUMBER_DIGITS)]
        ),
    }
}

/// True iff the input contains exactly ten digits.
pub fn is_valid(raw: &str) -> bool {
    clean(raw).len() == US_NUMBER_DIGITS
}

/// Validate user input, returning the cleaned digits on success.
pub fn validate_input(raw: &str) -> Result<String, PhoneInputError> {
    if raw.trim().is_empty() {
        return Err(PhoneInputError::Empty);
    }

    if !is_valid(raw) {
        return Err(PhoneInputError::Invalid);
    }

    Ok(clean(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouping_by_length() {
        let expected = [
            "",
            "(5",
            "(55",
            "(555",
            "(555) 1",
            "(555) 12",
            "(555) 123",
            "(555) 123-4",
            "(555) 123-45",
            "(555) 123-456",
            "(555) 123-4567",
        ];
        let digits = "5551234567";

        for (len, want) in expected.iter().enumerate() {
            assert_eq!(format_as_typed(&digits[..len]), *want, "length {}", len);
        }
    }

    #[test]
    fn test_format_ignores_punctuation() {
        assert_eq!(format_as_typed("(555) 123-4567"), "(555) 123-4567");
        assert_eq!(format_as_typed("555.123"), "(555) 123");
        assert_eq!(format_as_typed("abc"), "");
    }

    #[test]
    fn test_format_drops_digits_past_ten() {
        assert_eq!(format_as_typed("555123456789"), "(555) 123-4567");
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean("+1 (555) 123-4567"), "15551234567");
        assert_eq!(clean("no digits"), "");
    }

    #[test]
    fn test_is_valid_matches_digit_count() {
        let inputs = [
            "5551234567",
            "(555) 123-4567",
            "555-abc-123-4567",
            "555123456",
            "15551234567",
            "",
            "phone: 555 123 4567!",
        ];

        for input in inputs {
            assert_eq!(is_valid(input), clean(input).len() == 10, "input {:?}", input);
        }
    }

    #[test]
    fn test_validate_input() {
        assert_eq!(validate_input("   "), Err(PhoneInputError::Empty));
        assert_eq!(validate_input("555-1234"), Err(PhoneInputError::Invalid));
        assert_eq!(validate_input("(555) 123-4567"), Ok("5551234567".into()));
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(PhoneInputError::Empty.to_string(), "Please enter a phone number");
        assert_eq!(
            PhoneInputError::Invalid.to_string(),
            "Please enter a valid 10-digit US phone number"
        );
    }
}
