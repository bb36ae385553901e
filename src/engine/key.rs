//! Keypad keys and their labels.

use crate::core::Operator;
use crate::entry::DigitToken;

/// One press on the calculator keypad.
///
/// A front end maps its buttons to keys and hands them to
/// [`Calculator::press`](crate::engine::Calculator::press).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    /// A digit or the decimal point
    Digit(DigitToken),
    /// One of the four operators
    Operator(Operator),
    /// `=`
    Equals,
    /// `AC`
    Clear,
    /// `%`
    Percent,
    /// `+/-`
    ToggleSign,
}

impl Key {
    /// Standard keypad, row by row.
    pub const LAYOUT: [&'static str; 19] = [
        "AC", "+/-", "%", "÷", "7", "8", "9", "×", "4", "5", "6", "-", "1", "2", "3", "+", "0",
        ".", "=",
    ];

    /// Resolve a button label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "=" => Some(Self::Equals),
            "AC" => Some(Self::Clear),
            "%" => Some(Self::Percent),
            "+/-" | "±" => Some(Self::ToggleSign),
            _ => {
                if let Some(op) = Operator::from_symbol(label) {
                    return Some(Self::Operator(op));
                }
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => DigitToken::try_from(c).ok().map(Self::Digit),
                    _ => None,
                }
            }
        }
    }

    /// Label printed on the button.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(token) => token.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Percent => "%".to_string(),
            Self::ToggleSign => "+/-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_layout_label_resolves() {
        for label in Key::LAYOUT {
            let key = Key::from_label(label);
            assert!(key.is_some(), "unmapped label {label}");
            assert_eq!(key.map(|k| k.label()).as_deref(), Some(label));
        }
    }

    #[test]
    fn function_keys_resolve() {
        assert_eq!(Key::from_label("AC"), Some(Key::Clear));
        assert_eq!(Key::from_label("±"), Some(Key::ToggleSign));
        assert_eq!(Key::from_label("="), Some(Key::Equals));
        assert_eq!(Key::from_label("÷"), Some(Key::Operator(Operator::Divide)));
    }

    #[test]
    fn unknown_labels_are_none() {
        assert_eq!(Key::from_label("sin"), None);
        assert_eq!(Key::from_label("12"), None);
        assert_eq!(Key::from_label(""), None);
    }
}
