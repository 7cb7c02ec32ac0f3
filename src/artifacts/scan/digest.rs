//! Content digest (SHA-256 hash)
//!
//! Digests are 64-character lowercase hexadecimal strings. Equal content
//! yields equal digests; anything else is treated as a modification.

use crate::artifacts::scan::DIGEST_LENGTH;

/// Validated 256-bit content digest in hexadecimal form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(String);

impl Digest {
    /// Parse and validate a digest from its hexadecimal form
    ///
    /// Uppercase input is accepted and normalised to lowercase.
    pub fn try_parse(hex: &str) -> anyhow::Result<Self> {
        if hex.len() != DIGEST_LENGTH {
            return Err(anyhow::anyhow!("Invalid digest length: {}", hex.len()));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid digest characters: {}", hex));
        }
        Ok(Self(hex.to_ascii_lowercase()))
    }

    /// Build a digest from raw hash output
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let hex = bytes
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect::<String>();
        Self::try_parse(&hex)
    }

    /// Abbreviated form used in diagnostics
    pub fn to_short(&self) -> &str {
        &self.0[..12]
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
