//! Canonical operation signatures.
//!
//! A signature is written `name(type1,type2)`. The canonical form has no
//! whitespace and uses full type names, so `setValue( int )` and
//! `setValue(int256)` are the same operation and hash to the same selector.

use std::fmt;
use std::str::FromStr;

use interlock_types::Selector;
use serde::{Deserialize, Serialize};

use crate::hasher::compute_selector;

/// Parameter types accepted in a signature. Each occupies one call word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Int256,
    Uint256,
    Bytes4,
    Address,
    Bool,
}

impl ParamType {
    /// Parse a type name, resolving the `int`/`uint` aliases.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "int" | "int256" => Some(Self::Int256),
            "uint" | "uint256" => Some(Self::Uint256),
            "bytes4" => Some(Self::Bytes4),
            "address" => Some(Self::Address),
            "bool" => Some(Self::Bool),
            _ => None,
        }
    }

    /// The canonical type name.
    pub fn canonical(&self) -> &'static str {
        match self {
            Self::Int256 => "int256",
            Self::Uint256 => "uint256",
            Self::Bytes4 => "bytes4",
            Self::Address => "address",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

/// Errors from parsing signature text.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("signature is empty")]
    Empty,

    #[error("signature '{0}' has no parameter list")]
    MissingParameters(String),

    #[error("signature '{0}' has unbalanced parentheses")]
    Unbalanced(String),

    #[error("invalid operation name '{0}'")]
    InvalidName(String),

    #[error("empty parameter at position {index} in '{signature}'")]
    EmptyParameter { signature: String, index: usize },

    #[error("unknown parameter type '{0}'")]
    UnknownType(String),
}

/// A parsed, canonical operation signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Signature {
    name: String,
    params: Vec<ParamType>,
}

impl Signature {
    /// Build a signature from parts that are already known to be valid.
    pub fn new(name: impl Into<String>, params: Vec<ParamType>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Parse and canonicalise signature text.
    pub fn parse(text: &str) -> Result<Self, SignatureError> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(SignatureError::Empty);
        }

        let open = compact
            .find('(')
            .ok_or_else(|| SignatureError::MissingParameters(compact.clone()))?;
        let balanced = compact.ends_with(')')
            && compact.matches('(').count() == 1
            && compact.matches(')').count() == 1;
        if !balanced {
            return Err(SignatureError::Unbalanced(compact));
        }

        let name = &compact[..open];
        if !is_valid_name(name) {
            return Err(SignatureError::InvalidName(name.to_string()));
        }

        let inner = &compact[open + 1..compact.len() - 1];
        let mut params = Vec::new();
        if !inner.is_empty() {
            for (index, raw) in inner.split(',').enumerate() {
                if raw.is_empty() {
                    return Err(SignatureError::EmptyParameter {
                        signature: compact.clone(),
                        index,
                    });
                }
                let ty = ParamType::parse(raw)
                    .ok_or_else(|| SignatureError::UnknownType(raw.to_string()))?;
                params.push(ty);
            }
        }

        Ok(Self {
            name: name.to_string(),
            params,
        })
    }

    /// The operation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter types in declaration order.
    pub fn params(&self) -> &[ParamType] {
        &self.params
    }

    /// Canonical text, e.g. `setValue(int256)`.
    pub fn canonical(&self) -> String {
        let params: Vec<&str> = self.params.iter().map(ParamType::canonical).collect();
        format!("{}({})", self.name, params.join(","))
    }

    /// Selector of the canonical text.
    pub fn selector(&self) -> Selector {
        compute_selector(&self.canonical())
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromStr for Signature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Signature> for String {
    fn from(signature: Signature) -> Self {
        signature.canonical()
    }
}

impl TryFrom<String> for Signature {
    type Error = SignatureError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}
