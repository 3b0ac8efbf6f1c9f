use core::fmt;
use std::str::FromStr;

/// Length in bytes of an ed25519 public key.
pub const PUBKEY_LEN: usize = 32;

/// An account public key as exposed by Solana wallets.
///
/// The textual form is the base58 encoding of the raw 32 bytes, which is the
/// form wallet providers hand back from their connect call.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pubkey([u8; PUBKEY_LEN]);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePubkeyError {
    #[error("Invalid base58 string: {0}")]
    Encoding(String),
    #[error("Expected {PUBKEY_LEN} bytes of key material, got {0}")]
    Length(usize),
}

impl Pubkey {
    pub fn new(bytes: [u8; PUBKEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBKEY_LEN] {
        &self.0
    }

    /// the base58 textual form, e.g. `"AbCnE1vG…"`
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl FromStr for Pubkey {
    type Err = ParsePubkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|error| ParsePubkeyError::Encoding(error.to_string()))?;
        let bytes: [u8; PUBKEY_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| ParsePubkeyError::Length(bytes.len()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self.to_base58())
    }
}

impl From<[u8; PUBKEY_LEN]> for Pubkey {
    fn from(bytes: [u8; PUBKEY_LEN]) -> Self {
        Self(bytes)
    }
}
