use std::fmt;
use std::ops::BitXor;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Width in bytes of both selectors and capability identifiers.
pub const ID_LEN: usize = 4;

/// Four-byte identifier of a single operation signature.
///
/// Selectors are derived by hashing the canonical signature text (see
/// `interlock-crypto`). This type only carries the bytes; it never computes
/// them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Selector([u8; ID_LEN]);

impl Selector {
    /// Wrap raw selector bytes.
    pub const fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Take the leading four bytes of a digest.
    pub fn from_digest(digest: &[u8; 32]) -> Self {
        let mut bytes = [0u8; ID_LEN];
        bytes.copy_from_slice(&digest[..ID_LEN]);
        Self(bytes)
    }

    /// The raw selector bytes.
    pub const fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Big-endian numeric view of the selector.
    pub const fn as_u32(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        parse_hex4(s).map(Self)
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({})", self.to_hex())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.to_hex()
    }
}

impl TryFrom<String> for Selector {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

/// Combined identifier for a set of operations.
///
/// A `CapabilityId` is the XOR of every member selector. XOR is associative
/// and commutative, so the identifier depends only on the set and never on
/// the order in which members were folded in. [`CapabilityId::EMPTY`] is the
/// identity element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CapabilityId([u8; ID_LEN]);

impl CapabilityId {
    /// Identifier of the empty operation set.
    pub const EMPTY: Self = Self([0u8; ID_LEN]);

    /// Wrap raw identifier bytes.
    pub const fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw identifier bytes.
    pub const fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Big-endian numeric view of the identifier.
    pub const fn as_u32(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// Fold one more selector into this identifier.
    pub fn with(self, selector: Selector) -> Self {
        self ^ selector
    }

    /// `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        parse_hex4(s).map(Self)
    }
}

impl Default for CapabilityId {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BitXor<Selector> for CapabilityId {
    type Output = CapabilityId;

    fn bitxor(self, rhs: Selector) -> Self::Output {
        let mut out = self.0;
        for (byte, other) in out.iter_mut().zip(rhs.0) {
            *byte ^= other;
        }
        Self(out)
    }
}

impl From<Selector> for CapabilityId {
    /// A single-operation capability set.
    fn from(selector: Selector) -> Self {
        Self(selector.0)
    }
}

impl fmt::Debug for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CapabilityId({})", self.to_hex())
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<CapabilityId> for String {
    fn from(id: CapabilityId) -> Self {
        id.to_hex()
    }
}

impl TryFrom<String> for CapabilityId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

fn parse_hex4(s: &str) -> Result<[u8; ID_LEN], TypeError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(digits).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
    if bytes.len() != ID_LEN {
        return Err(TypeError::InvalidLength {
            expected: ID_LEN,
            actual: bytes.len(),
        });
    }
    let mut arr = [0u8; ID_LEN];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}
