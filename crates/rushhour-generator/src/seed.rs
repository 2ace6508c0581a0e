use std::{fmt, str::FromStr};

use sha2::{Digest as _, Sha256};

/// The 256-bit seed a level is generated from.
///
/// Seeds are written as 64 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use rushhour_generator::LevelSeed;
///
/// let seed = LevelSeed::from_phrase("rush hour");
/// let parsed: LevelSeed = seed.to_string().parse()?;
/// assert_eq!(parsed, seed);
/// # Ok::<(), rushhour_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelSeed([u8; 32]);

impl LevelSeed {
    /// Draws a seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from arbitrary text by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for LevelSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for LevelSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`LevelSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {length} characters")]
    InvalidLength {
        /// Length of the rejected text in bytes.
        length: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit at index {index}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        index: usize,
    },
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

impl FromStr for LevelSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.as_bytes();
        if digits.len() != 64 {
            return Err(SeedParseError::InvalidLength {
                length: digits.len(),
            });
        }
        let mut bytes = [0; 32];
        for (i, pair) in digits.chunks_exact(2).enumerate() {
            let hi = hex_value(pair[0]).ok_or(SeedParseError::InvalidDigit { index: 2 * i })?;
            let lo = hex_value(pair[1]).ok_or(SeedParseError::InvalidDigit { index: 2 * i + 1 })?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";

    #[test]
    fn test_parse_and_display() {
        let seed: LevelSeed = SEED.parse().unwrap();
        assert_eq!(seed.as_bytes()[..4], [0x12, 0x34, 0x56, 0x78]);
        assert_eq!(seed.to_string(), SEED);

        let upper: LevelSeed = SEED.to_uppercase().parse().unwrap();
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<LevelSeed>(),
            Err(SeedParseError::InvalidLength { length: 3 })
        );
        let bad = SEED.replacen('7', "x", 1);
        assert_eq!(
            bad.parse::<LevelSeed>(),
            Err(SeedParseError::InvalidDigit { index: 6 })
        );
    }

    #[test]
    fn test_from_phrase_is_sha256() {
        assert_eq!(
            LevelSeed::from_phrase("").to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(LevelSeed::from_phrase("a"), LevelSeed::from_phrase("a"));
        assert_ne!(LevelSeed::from_phrase("a"), LevelSeed::from_phrase("b"));
    }
}
