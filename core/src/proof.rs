//! Membership proofs and proof verification.
//!
//! A proof is the ordered list of sibling digests met while walking from a leaf up to the root,
//! lowest first. Because internal nodes hash their children in sorted order, a proof carries no
//! information about which side each sibling sits on. Verification folds the proof into a
//! candidate root and compares it against a known root.
//!
//! The functions in this module need nothing but the root digest and a hash factory, so they can be
//! used by parties who never see the tree itself.

use crate::{hasher::HashFactory, tree::Digest};

use core::fmt;

/// Verification was asked to check a proof with no siblings.
///
/// A tree always has a depth of at least one, so such a proof is malformed rather than
/// merely wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyProof;

impl fmt::Display for EmptyProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a merkle proof must contain at least one sibling")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptyProof {}

/// Fold the siblings of a proof into the root they imply for the given payload.
///
/// The payload is hashed, then combined with each sibling in turn using the canonical pair hash.
/// An empty proof folds to the digest of the payload itself.
pub fn fold_proof<F: HashFactory>(factory: &F, payload: &[u8], siblings: &[Digest]) -> Digest {
    siblings
        .iter()
        .fold(factory.hash(payload), |acc, sibling| {
            factory.hash_pair(&acc, sibling)
        })
}

/// Verify that `siblings` witness the membership of `payload` under `root`.
///
/// Returns `Ok(false)` when the proof folds to some other root, and an error only if the proof is
/// empty.
pub fn verify_proof<F: HashFactory>(
    factory: &F,
    root: &Digest,
    payload: &[u8],
    siblings: &[Digest],
) -> Result<bool, EmptyProof> {
    if siblings.is_empty() {
        return Err(EmptyProof);
    }

    Ok(&fold_proof(factory, payload, siblings) == root)
}
