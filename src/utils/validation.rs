use regex::Regex;

use crate::error::ValidationError;

lazy_static::lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("email pattern is a valid regex");
}

/// `local@domain.tld` shape check, nothing stricter.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

fn is_digits(phone: &str) -> bool {
    !phone.is_empty() && phone.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_phone_exact(phone: &str, digits: usize) -> Result<(), ValidationError> {
    if is_digits(phone) && phone.len() == digits {
        Ok(())
    } else {
        Err(ValidationError::PhoneExactLength(digits))
    }
}

pub fn validate_phone_range(phone: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    if is_digits(phone) && (min..=max).contains(&phone.len()) {
        Ok(())
    } else {
        Err(ValidationError::PhoneLengthRange { min, max })
    }
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        Err(ValidationError::EmptyPassword)
    } else {
        Ok(())
    }
}

/// Splits comma separated keywords, trimming each and dropping blanks.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn require_keywords(input: &str) -> Result<Vec<String>, ValidationError> {
    let keywords = parse_keywords(input);
    if keywords.is_empty() {
        Err(ValidationError::NoKeywords)
    } else {
        Ok(keywords)
    }
}

pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("jane@acme.io"));
        assert!(is_valid_email("a.b+c@mail.example.com"));
        assert!(!is_valid_email("jane@acme"));
        assert!(!is_valid_email("jane acme@x.io"));
        assert!(!is_valid_email("@acme.io"));
        assert!(!is_valid_email("jane@@acme.io"));
        assert!(!is_valid_email("jane@acme."));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn sign_up_phone_needs_exactly_nine_digits() {
        assert!(validate_phone_exact("612345678", 9).is_ok());
        assert!(validate_phone_exact("61234567", 9).is_err());
        assert!(validate_phone_exact("6123456789", 9).is_err());
        assert!(validate_phone_exact("61234567a", 9).is_err());
    }

    #[test]
    fn post_phone_accepts_nine_to_fifteen_digits() {
        assert!(validate_phone_range("612345678", 9, 15).is_ok());
        assert!(validate_phone_range("123456789012345", 9, 15).is_ok());
        assert!(validate_phone_range("1234567890123456", 9, 15).is_err());
        assert!(validate_phone_range("12345678", 9, 15).is_err());
        assert!(validate_phone_range("", 9, 15).is_err());
    }

    #[test]
    fn empty_password_is_rejected() {
        assert_eq!(validate_password(""), Err(ValidationError::EmptyPassword));
        assert!(validate_password(" ").is_ok());
    }

    #[test]
    fn keywords_are_trimmed_and_blanks_dropped() {
        assert_eq!(parse_keywords(" rust, wasm ,, ,yew "), vec!["rust", "wasm", "yew"]);
        assert!(parse_keywords("").is_empty());
    }

    #[test]
    fn zero_keywords_are_rejected() {
        assert_eq!(require_keywords(" , ,"), Err(ValidationError::NoKeywords));
        assert_eq!(require_keywords("rust").unwrap(), vec!["rust"]);
    }

    #[test]
    fn only_images_are_accepted() {
        assert!(is_image_mime("image/png"));
        assert!(!is_image_mime("application/pdf"));
    }
}
