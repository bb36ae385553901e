//! Validation of digit entry.
//!
//! Appending a token to the input buffer is checked against [`EntryRules`],
//! which use Stillwater's `Validation` to report every rule a token breaks
//! rather than the first one. The engine treats any violation as a silently
//! ignored keypress.
//!
//! # Example
//!
//! ```rust
//! use abacus::entry::{DigitToken, EntryRules};
//!
//! let rules = EntryRules::default();
//!
//! assert!(rules.allows("12", DigitToken::POINT));
//! assert!(!rules.allows("1.2", DigitToken::POINT));
//! assert!(!rules.allows("123456789", DigitToken::digit(1).unwrap()));
//! ```

pub mod rules;
pub mod token;
pub mod violations;

pub use rules::{digit_count, EntryRules, DEFAULT_MAX_DIGITS};
pub use token::DigitToken;
pub use violations::{EntryViolation, TokenError};
