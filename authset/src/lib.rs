//! An in-memory authenticated set, built as a binary merkle tree over a sequence of opaque byte
//! payloads.
//!
//! The holder of a [`Tree`] commits to the whole set with a single root digest, issues membership
//! proofs for any payload, and can replace a payload while rehashing only the path above it.
//! Anyone holding the root can check a proof with [`authset_core::proof::verify_proof`], without
//! the tree.
//!
//! ```
//! use authset::{Options, Sha2Factory, Tree};
//!
//! let options = Options::new(Sha2Factory::new());
//! let mut tree = Tree::build(options, ["one", "two", "three"]).unwrap();
//! let proof = tree.get_proof(b"two").unwrap();
//! assert!(tree.verify_proof(b"two", &proof).unwrap());
//!
//! tree.update_leaf(b"two", b"four").unwrap();
//! assert!(tree.get_proof(b"two").is_err());
//! ```
//!
//! Internal nodes hash their children smaller-digest-first, so proofs are bare lists of sibling
//! digests and do not authenticate the position of a payload within the set.
//!
//! A tree is not safe for concurrent mutation. Proof issuance and verification only need a shared
//! borrow, updates need an exclusive one.

pub use authset_core::{
    hash_pair, proof, Digest, DigestFactory, DigestHasher, HashFactory, Hasher, NodeKind,
};

#[cfg(feature = "blake3-hasher")]
pub use authset_core::Blake3Factory;
#[cfg(feature = "sha2-hasher")]
pub use authset_core::Sha2Factory;

pub use arena::{NodeId, NodeRef};
pub use error::Error;
pub use options::Options;

use arena::Arena;
use std::collections::HashMap;

mod arena;
mod build;
mod error;
mod options;
mod prove;
mod update;

/// Maps the digest of every leaf payload to its leaf.
type LeafIndex = HashMap<Digest, NodeId, ahash::RandomState>;

/// A binary merkle tree over a set of payloads.
///
/// Every level below the root has an even number of slots: when a level has an odd number of
/// nodes, its last node is paired with itself. All leaves therefore sit at the same depth.
#[derive(Clone)]
pub struct Tree<F> {
    options: Options<F>,
    arena: Arena,
    root: NodeId,
    leaves: LeafIndex,
    depth: usize,
}

impl<F: HashFactory> Tree<F> {
    /// The root node. Its children and digests can be observed through the returned view.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(&self.arena, self.root)
    }

    /// The digest committing to the whole set.
    pub fn root_digest(&self) -> &Digest {
        &self.arena.get(self.root).digest
    }

    /// The number of leaves reachable through the leaf index.
    ///
    /// Payloads which appeared more than once in the input are counted once.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// The number of edges between the root and any leaf. This is also the length of every proof.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the digest of `payload` indexes a leaf of this tree.
    pub fn contains(&self, payload: &[u8]) -> bool {
        let digest = self.options.hash_factory.hash(payload);
        self.leaves.contains_key(&digest)
    }

    /// The hash factory this tree was built with.
    pub fn hash_factory(&self) -> &F {
        &self.options.hash_factory
    }

    pub fn options(&self) -> &Options<F> {
        &self.options
    }
}
