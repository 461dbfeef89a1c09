//! Pure predicates for user-supplied registration fields.

/// A name is non-empty and alphabetic only.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

/// A phone number is exactly 10 ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// A location is non-empty and contains only letters, spaces and commas.
pub fn is_valid_location(location: &str) -> bool {
    !location.is_empty()
        && location
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == ' ' || c == ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_must_be_alphabetic() {
        assert!(is_valid_name("Alice"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Alice2"));
        assert!(!is_valid_name("Alice Smith"));
    }

    #[test]
    fn phone_must_be_ten_digits() {
        assert!(is_valid_phone("1234567890"));
        assert!(!is_valid_phone("123456789"));
        assert!(!is_valid_phone("12345678901"));
        assert!(!is_valid_phone("12345678x0"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn location_allows_letters_spaces_commas() {
        assert!(is_valid_location("Berlin"));
        assert!(is_valid_location("Berlin, Mitte"));
        assert!(!is_valid_location(""));
        assert!(!is_valid_location("Sector 7"));
    }
}
