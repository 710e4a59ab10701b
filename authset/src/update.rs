//! Replacing the payload of a single leaf.

use crate::{Error, NodeId, Tree};
use authset_core::HashFactory;

impl<F: HashFactory> Tree<F> {
    /// Replace the payload `old` with `new`, rehashing every node on the path to the root.
    ///
    /// The leaf keeps its identity and position; only its payload and digest change, and the leaf
    /// index is moved from the digest of `old` to the digest of `new`. A leaf which was paired with
    /// itself to fill an odd level occupies both slots of its parent, so the duplicate follows the
    /// update. The same holds for every internal node paired with itself above it.
    ///
    /// If the parent holds two distinct leaves with equal digests, as happens when a payload was
    /// repeated in the input, both of its slots are pointed at the updated leaf. The other leaf is
    /// no longer reachable from the root.
    ///
    /// Errors are checked in this order:
    ///   1. [`Error::UpdateWithNilData`] if `new` is empty.
    ///   2. [`Error::UpdateWithExistingData`] if the digest of `new` already indexes a leaf. This
    ///      includes `old == new`.
    ///   3. [`Error::DataNotInTree`] if the digest of `old` indexes no leaf.
    ///
    /// The tree is left untouched when an error is returned.
    pub fn update_leaf(&mut self, old: &[u8], new: &[u8]) -> Result<(), Error> {
        if new.is_empty() {
            return Err(Error::UpdateWithNilData);
        }

        let factory = &self.options.hash_factory;
        let new_digest = factory.hash(new);
        if self.leaves.contains_key(&new_digest) {
            return Err(Error::UpdateWithExistingData);
        }

        let old_digest = factory.hash(old);
        let leaf = self
            .leaves
            .remove(&old_digest)
            .ok_or(Error::DataNotInTree)?;
        self.leaves.insert(new_digest.clone(), leaf);

        tracing::trace!(old = %old_digest, new = %new_digest, "updating leaf");

        self.repair_duplicate(leaf);

        let node = self.arena.get_mut(leaf);
        node.payload = Some(new.to_vec());
        node.digest = new_digest;

        self.rehash_to_root(leaf);
        Ok(())
    }

    /// Point both slots of the leaf's parent at the leaf when the two children carry equal
    /// digests.
    fn repair_duplicate(&mut self, leaf: NodeId) {
        let parent = match self.arena.get(leaf).parent {
            Some(parent) => parent,
            None => return,
        };
        if let Some((left, right)) = self.arena.get(parent).children {
            if left != right && self.arena.get(left).digest == self.arena.get(right).digest {
                self.arena.get_mut(parent).children = Some((leaf, leaf));
            }
        }
    }

    fn rehash_to_root(&mut self, from: NodeId) {
        let factory = &self.options.hash_factory;
        let mut node = from;
        while let Some(parent) = self.arena.get(node).parent {
            self.arena.rehash(factory, parent);
            node = parent;
        }
    }
}
