//! The configured secret and pattern verification
//!
//! A [`Secret`] is an ordered sequence of grid indices 1-9, stored as a digit
//! string. Verification is exact string equality against the code built from
//! a drag's visited indices: same digits, same order, same length. There is
//! no prefix or subsequence matching.

use thiserror::Error;

/// Errors raised when constructing a [`Secret`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecretError {
    /// An empty secret would make every release a failure
    #[error("secret must not be empty")]
    Empty,

    /// Secrets may only reference grid indices 1-9
    #[error("secret contains {found:?} at position {position}; only digits 1-9 are allowed")]
    InvalidDigit { found: char, position: usize },
}

/// Outcome of comparing a completed drag against the secret
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Error,
}

impl Outcome {
    pub fn is_pass(self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

/// A validated pattern secret
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Validate and construct a secret from a digit string
    ///
    /// Every character must be a digit in `1..=9` and the string must be
    /// non-empty. A secret that repeats a digit is accepted but logged as a
    /// warning: visited dots are de-duplicated during a drag, so a repeated
    /// digit can never appear in an entered code.
    pub fn new(digits: impl Into<String>) -> Result<Self, SecretError> {
        let digits = digits.into();
        if digits.is_empty() {
            return Err(SecretError::Empty);
        }
        for (position, found) in digits.chars().enumerate() {
            if !('1'..='9').contains(&found) {
                return Err(SecretError::InvalidDigit { found, position });
            }
        }
        let mut seen = [false; 9];
        for ch in digits.chars() {
            let slot = (ch as u8 - b'1') as usize;
            if seen[slot] {
                tracing::warn!(secret_len = digits.len(), "secret repeats digit {ch}; no drag can ever match it");
                break;
            }
            seen[slot] = true;
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify an entered code against this secret
    ///
    /// Pure comparison; PASS iff the code equals the secret exactly.
    pub fn verify(&self, code: &str) -> Outcome {
        if self.0 == code {
            Outcome::Pass
        } else {
            Outcome::Error
        }
    }
}

impl Default for Secret {
    /// The widget's historical default secret
    fn default() -> Self {
        Self("123456".to_string())
    }
}
