//! Keypad tokens accepted by digit entry.

use crate::entry::violations::TokenError;
use std::fmt;

/// A digit `0`-`9` or the decimal point.
///
/// # Example
///
/// ```rust
/// use abacus::entry::DigitToken;
///
/// let seven = DigitToken::digit(7).unwrap();
/// assert_eq!(seven.as_char(), '7');
/// assert!(DigitToken::try_from('.').unwrap().is_point());
/// assert!(DigitToken::try_from('x').is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct DigitToken(char);

impl DigitToken {
    pub const POINT: DigitToken = DigitToken('.');

    /// Token for a single decimal digit.
    pub fn digit(n: u8) -> Option<Self> {
        (n <= 9).then(|| Self(char::from(b'0' + n)))
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for DigitToken {
    type Error = TokenError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c == '.' || c.is_ascii_digit() {
            Ok(Self(c))
        } else {
            Err(TokenError::Unrecognised(c))
        }
    }
}

impl TryFrom<u8> for DigitToken {
    type Error = TokenError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::digit(n).ok_or(TokenError::DigitOutOfRange(n))
    }
}

impl fmt::Display for DigitToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_chars() {
        for n in 0..=9u8 {
            let token = DigitToken::digit(n).unwrap();
            assert_eq!(token.as_char().to_digit(10), Some(u32::from(n)));
            assert!(!token.is_point());
        }
    }

    #[test]
    fn out_of_range_digit_is_rejected() {
        assert_eq!(DigitToken::digit(10), None);
        assert_eq!(
            DigitToken::try_from(12u8),
            Err(TokenError::DigitOutOfRange(12))
        );
    }

    #[test]
    fn chars_parse_into_tokens() {
        assert_eq!(DigitToken::try_from('.'), Ok(DigitToken::POINT));
        assert_eq!(DigitToken::try_from('3'), Ok(DigitToken::digit(3).unwrap()));
        assert_eq!(
            DigitToken::try_from(','),
            Err(TokenError::Unrecognised(','))
        );
    }

    #[test]
    fn display_writes_the_char() {
        assert_eq!(DigitToken::POINT.to_string(), ".");
        assert_eq!(DigitToken::digit(0).unwrap().to_string(), "0");
    }
}
