use interlock_types::abi::{decode_bytes4, decode_int, ZERO_WORD};
use interlock_types::{Call, CapabilityId, Selector, TypeError};
use serde::Serialize;

use crate::hasher::compute_capability_id;
use crate::signature::{Signature, SignatureError};

/// Shape of an operation's successful reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnKind {
    /// Empty reply.
    Unit,
    /// One `int256` word that must fit in an `i64`.
    Int,
    /// One left-aligned four-byte word.
    Bytes4,
}

impl ReturnKind {
    /// Check that a reply has this shape.
    pub fn check_reply(&self, reply: &[u8]) -> Result<(), TypeError> {
        match self {
            Self::Unit if reply.is_empty() => Ok(()),
            Self::Unit => Err(TypeError::InvalidLength {
                expected: 0,
                actual: reply.len(),
            }),
            Self::Int => decode_int(reply).map(drop),
            Self::Bytes4 => decode_bytes4(reply).map(drop),
        }
    }
}

/// One operation of an interface: canonical signature, cached selector, and
/// the reply shape callers should expect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Operation {
    signature: Signature,
    selector: Selector,
    returns: ReturnKind,
}

impl Operation {
    /// Build an operation from an already-canonical signature.
    pub fn new(signature: Signature, returns: ReturnKind) -> Self {
        let selector = signature.selector();
        Self {
            signature,
            selector,
            returns,
        }
    }

    /// Parse signature text and build an operation from it.
    pub fn parse(text: &str, returns: ReturnKind) -> Result<Self, SignatureError> {
        Ok(Self::new(Signature::parse(text)?, returns))
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn selector(&self) -> Selector {
        self.selector
    }

    pub fn returns(&self) -> ReturnKind {
        self.returns
    }

    /// A call to this operation with every argument set to the zero word.
    pub fn zero_call(&self) -> Call {
        self.signature
            .params()
            .iter()
            .fold(Call::new(self.selector), |call, _| call.with_word(ZERO_WORD))
    }
}

/// A named set of operations plus the error signatures its members may
/// revert with.
///
/// The [`CapabilityId`] is computed from the operation selectors when the
/// interface is built and is never supplied by the caller.
#[derive(Clone, Debug, Serialize)]
pub struct InterfaceSpec {
    name: String,
    operations: Vec<Operation>,
    errors: Vec<Operation>,
    id: CapabilityId,
}

impl InterfaceSpec {
    pub fn new(
        name: impl Into<String>,
        operations: Vec<Operation>,
        errors: Vec<Signature>,
    ) -> Self {
        let id = compute_capability_id(operations.iter().map(Operation::selector));
        let errors = errors
            .into_iter()
            .map(|sig| Operation::new(sig, ReturnKind::Unit))
            .collect();
        Self {
            name: name.into(),
            operations,
            errors,
            id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// The interface's capability identifier.
    pub fn id(&self) -> CapabilityId {
        self.id
    }

    /// Recompute the identifier from the operation signatures.
    pub fn recompute_id(&self) -> CapabilityId {
        compute_capability_id(self.operations.iter().map(|op| op.signature().selector()))
    }

    /// Declared error signatures.
    pub fn errors(&self) -> impl Iterator<Item = &Signature> + '_ {
        self.errors.iter().map(Operation::signature)
    }

    /// Returns `true` if revert data carries exactly one declared error selector.
    pub fn declares_error(&self, revert_data: &[u8]) -> bool {
        self.errors
            .iter()
            .any(|err| revert_data == err.selector().as_bytes())
    }
}
