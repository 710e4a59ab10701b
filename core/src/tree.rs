//! This module defines the types of a binary merkle tree over an authenticated set, generalized
//! over the output of an arbitrary hash function.
//!
//! There are two kinds of nodes.
//!   1. Leaf nodes, which carry a payload. The digest of a leaf is the hash of its payload.
//!   2. Internal nodes, which each have two children. The digest of an internal node is given by
//!      hashing the digests of its children, smaller digest first. See
//!      [`crate::hasher::HashFactory::hash_pair`].
//!
//! Because children are hashed in sorted order, the digest of an internal node does not depend on
//! which side each child sits on. Proofs therefore carry no direction bits, and they do not
//! authenticate the position of a leaf within the tree.
//!
//! Every level of the tree is padded to an even number of nodes by pairing its last node with
//! itself.

use alloc::vec::Vec;
use core::{borrow::Borrow, fmt};

/// The output of a hash function: a leaf digest, an internal node digest, or a root.
///
/// The length is fixed by the hash factory which produced it. Digests are ordered
/// lexicographically by their bytes, which is the order used by the canonical pair hash.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshDeserialize, borsh::BorshSerialize)
)]
pub struct Digest(Vec<u8>);

impl Digest {
    /// Wrap raw digest bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Digest(bytes.into())
    }

    /// The raw bytes of the digest.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Unwrap into the raw bytes of the digest.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// `Hash`, `Eq` and `Ord` all agree with those of the underlying byte slice.
impl Borrow<[u8]> for Digest {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Digest(bytes)
    }
}

impl From<&[u8]> for Digest {
    fn from(bytes: &[u8]) -> Self {
        Digest(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Digest {
    fn from(bytes: [u8; N]) -> Self {
        Digest(bytes.to_vec())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", hex::encode(&self.0))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

/// Order two digests ascending. Equal digests keep the given order.
pub fn sort_pair<'a>(a: &'a Digest, b: &'a Digest) -> (&'a Digest, &'a Digest) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// The kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A leaf node carries a payload and has no children.
    Leaf,
    /// An internal node has two children, which may be the same node.
    Internal,
}
