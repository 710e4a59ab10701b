//! Issuing and verifying membership proofs.

use crate::{Error, Tree};
use authset_core::{proof, Digest, HashFactory};

impl<F: HashFactory> Tree<F> {
    /// Create a membership proof for `payload`.
    ///
    /// The proof lists the digest of the sibling at every level, from the leaf up to but not
    /// including the root. Its length is always [`Tree::depth`]. A leaf paired with itself is its
    /// own sibling.
    ///
    /// The proof does not say on which side each sibling sits, so it proves membership in the set,
    /// not the position of the payload.
    ///
    /// Fails with [`Error::DataNotInTree`] when no leaf is indexed by the digest of `payload`.
    pub fn get_proof(&self, payload: &[u8]) -> Result<Vec<Digest>, Error> {
        let digest = self.options.hash_factory.hash(payload);
        let leaf = *self.leaves.get(&digest).ok_or(Error::DataNotInTree)?;

        let mut siblings = Vec::with_capacity(self.depth);
        let mut node = leaf;
        while let Some((parent, sibling)) = self.arena.parent_and_sibling(node) {
            siblings.push(self.arena.get(sibling).digest.clone());
            node = parent;
        }

        tracing::trace!(leaf = %digest, len = siblings.len(), "issued merkle proof");
        Ok(siblings)
    }

    /// Check whether `proof` witnesses the membership of `payload` under the current root.
    ///
    /// This only folds the proof, it does not consult the leaf index. `Ok(false)` means the proof
    /// folds to a different root.
    ///
    /// Fails with [`Error::EmptyProof`] when `proof` has no siblings.
    pub fn verify_proof(&self, payload: &[u8], proof: &[Digest]) -> Result<bool, Error> {
        let valid = proof::verify_proof(
            &self.options.hash_factory,
            self.root_digest(),
            payload,
            proof,
        )?;
        Ok(valid)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Options, Tree};
    use authset_core::{HashFactory, Sha2Factory};

    fn build(data: &[&str]) -> Tree<Sha2Factory> {
        Tree::build(Options::default(), data).unwrap()
    }

    #[test]
    fn proof_of_lone_leaf_is_its_own_digest() {
        let tree = build(&["x"]);
        let proof = tree.get_proof(b"x").unwrap();
        assert_eq!(proof, vec![Sha2Factory::new().hash(b"x")]);
        assert_eq!(tree.verify_proof(b"x", &proof), Ok(true));
    }

    #[test]
    fn proof_walks_up_to_root() {
        let tree = build(&["a", "b", "c"]);
        let root = tree.root();
        let proof = tree.get_proof(b"c").unwrap();

        let c = root.right().unwrap().left().unwrap();
        assert_eq!(proof, vec![c.digest().clone(), root.left().unwrap().digest().clone()]);
    }

    #[test]
    fn proof_of_missing_data() {
        let tree = build(&["a", "b", "c"]);
        assert_eq!(tree.get_proof(b"d"), Err(Error::DataNotInTree));
    }

    #[test]
    fn proof_for_one_payload_does_not_verify_another() {
        let tree = build(&["a", "b", "c"]);
        let proof = tree.get_proof(b"a").unwrap();
        assert_eq!(tree.verify_proof(b"c", &proof), Ok(false));
    }

    #[test]
    fn truncated_proof_does_not_verify() {
        let tree = build(&["a", "b", "c", "d"]);
        let proof = tree.get_proof(b"a").unwrap();
        assert_eq!(tree.verify_proof(b"a", &proof[..1]), Ok(false));
    }

    #[test]
    fn empty_proof_is_an_error() {
        let tree = build(&["a"]);
        assert_eq!(tree.verify_proof(b"a", &[]), Err(Error::EmptyProof));
    }
}
