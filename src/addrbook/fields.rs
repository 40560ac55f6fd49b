//! Validated field types.
//!
//! Each type checks its value at construction, so a `Name`, `Phone` or
//! `Birthday` that exists is always valid. The rules themselves are plain
//! predicates ([`is_valid_name`], [`is_valid_phone`], [`parse_birthday`]) so
//! they can be tested, and reused, on their own.

use crate::error::ValidationError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Characters allowed in a phone number besides ASCII digits.
const PHONE_PUNCTUATION: &[char] = &['+', '-', '.', '(', ')', 'x', ' '];

pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty()
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || PHONE_PUNCTUATION.contains(&c))
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// chrono's parser accepts unpadded fields (`2020-1-5`), so the shape is
/// checked before handing the text over.
pub fn parse_birthday(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT).ok()
}

/// A contact name. Also the contact's key in the book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number, stored exactly as entered.
///
/// The check is a permissive shape test (digits plus common punctuation and
/// `x` for extensions), not full E.164 validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        if !is_valid_phone(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }
        Ok(Self(phone))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        parse_birthday(text)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidBirthday(text.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_keeps_text_as_given() {
        let name = Name::new("  Bill ").unwrap();
        assert_eq!(name.as_str(), "  Bill ");
    }

    #[test]
    fn name_rejects_blank() {
        assert_eq!(Name::new(""), Err(ValidationError::EmptyName));
        assert_eq!(Name::new("   "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn phone_accepts_common_shapes() {
        assert!(Phone::new("1234567890").is_ok());
        assert!(Phone::new("+1 (555) 123-4567").is_ok());
        assert!(Phone::new("555.123.4567x89").is_ok());
        assert_eq!(Phone::new("+380-44").unwrap().as_str(), "+380-44");
    }

    #[test]
    fn phone_rejects_other_characters() {
        assert_eq!(
            Phone::new(""),
            Err(ValidationError::InvalidPhone(String::new()))
        );
        assert!(Phone::new("555-CALL").is_err());
        assert!(Phone::new("123_456").is_err());
        assert!(Phone::new("invalid@phone").is_err());
        assert!(Phone::new("12\t34").is_err());
    }

    #[test]
    fn birthday_parses_strict_format() {
        let b = Birthday::parse("1990-02-03").unwrap();
        assert_eq!(b.date(), NaiveDate::from_ymd_opt(1990, 2, 3).unwrap());
        assert_eq!(b.to_string(), "1990-02-03");
    }

    #[test]
    fn birthday_rejects_loose_or_impossible_dates() {
        for text in [
            "1990-2-3",
            "03-02-1990",
            "1990/02/03",
            "1990-02-30",
            "1990-13-01",
            "",
            " 1990-02-03",
        ] {
            assert!(Birthday::parse(text).is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn birthday_from_str_matches_parse() {
        let b: Birthday = "2000-02-29".parse().unwrap();
        assert_eq!(b, Birthday::parse("2000-02-29").unwrap());
    }
}
