use interlock_types::{CapabilityId, Selector};

/// Domain-separated BLAKE3 selector hasher.
///
/// Each hasher carries a domain tag that is prepended to every hash
/// computation, so a selector computed here can never coincide by
/// construction with a content hash computed elsewhere over the same text.
/// Only the first four bytes of the digest survive into the [`Selector`].
pub struct SelectorHasher {
    domain: &'static str,
}

impl SelectorHasher {
    /// Hasher for operation and error signatures.
    pub const SIGNATURE: Self = Self {
        domain: "interlock-selector-v1",
    };

    /// Create a hasher with a custom domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// Full 32-byte domain-separated digest.
    pub fn digest(&self, data: &[u8]) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        *hasher.finalize().as_bytes()
    }

    /// Hash signature text into a selector. The text is hashed as given.
    pub fn selector(&self, signature: &str) -> Selector {
        Selector::from_digest(&self.digest(signature.as_bytes()))
    }
}

/// Selector of a signature under the standard signature domain.
///
/// Total over all strings. Callers that accept human-written signatures
/// should canonicalise through [`crate::Signature`] first.
pub fn compute_selector(signature: &str) -> Selector {
    SelectorHasher::SIGNATURE.selector(signature)
}

/// Combine selectors into a capability identifier.
///
/// XOR is associative and commutative, so iteration order never affects the
/// result. The empty set yields [`CapabilityId::EMPTY`].
pub fn compute_capability_id<I>(selectors: I) -> CapabilityId
where
    I: IntoIterator<Item = Selector>,
{
    selectors
        .into_iter()
        .fold(CapabilityId::EMPTY, CapabilityId::with)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn selector_is_deterministic() {
        assert_eq!(compute_selector("getValue()"), compute_selector("getValue()"));
    }

    #[test]
    fn known_selectors() {
        assert_eq!(compute_selector("getValue()").to_hex(), "0xdeed2fe5");
        assert_eq!(compute_selector("setValue(int256)").to_hex(), "0x30fd4e13");
        assert_eq!(compute_selector("capabilityId()").to_hex(), "0x5e296119");
        assert_eq!(compute_selector("EmptyStore()").to_hex(), "0xd9fd6e2f");
    }

    #[test]
    fn selector_hashes_text_verbatim() {
        // No canonicalisation happens at this layer.
        assert_ne!(
            compute_selector("setValue(int)"),
            compute_selector("setValue(int256)")
        );
    }

    #[test]
    fn empty_string_has_a_selector() {
        let sel = compute_selector("");
        assert_eq!(sel, compute_selector(""));
    }

    #[test]
    fn custom_domain_differs() {
        let other = SelectorHasher::new("my-custom-domain-v1");
        assert_ne!(other.selector("getValue()"), compute_selector("getValue()"));
    }

    #[test]
    fn digest_without_domain_matches_raw_blake3_prefix() {
        // Sanity check of the hashing primitive against the BLAKE3 "abc" vector.
        let raw = blake3::hash(b"abc");
        assert_eq!(hex::encode(&raw.as_bytes()[..4]), "6437b3ac");
    }

    #[test]
    fn capability_id_of_store_pair() {
        let id = compute_capability_id([
            compute_selector("getValue()"),
            compute_selector("setValue(int256)"),
        ]);
        assert_eq!(id.to_hex(), "0xee1061f6");
    }

    #[test]
    fn capability_id_of_empty_set_is_zero() {
        assert_eq!(compute_capability_id([]), CapabilityId::EMPTY);
    }

    #[test]
    fn capability_id_of_single_selector_is_that_selector() {
        let sel = compute_selector("getValue()");
        assert_eq!(compute_capability_id([sel]), CapabilityId::from(sel));
    }

    proptest! {
        #[test]
        fn capability_id_ignores_order(
            names in proptest::collection::vec(
                "[a-zA-Z]{1,12}\\((int256|uint256|bytes4)?\\)",
                0..8,
            ),
            seed in any::<u64>(),
        ) {
            let selectors: Vec<Selector> = names.iter().map(|n| compute_selector(n)).collect();
            let forward = compute_capability_id(selectors.iter().copied());
            let backward = compute_capability_id(selectors.iter().rev().copied());
            prop_assert_eq!(forward, backward);

            let mut rotated = selectors.clone();
            if !rotated.is_empty() {
                let k = (seed as usize) % rotated.len();
                rotated.rotate_left(k);
            }
            prop_assert_eq!(compute_capability_id(rotated), forward);
        }
    }
}
