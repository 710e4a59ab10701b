//! Building a tree from a sequence of payloads.

use crate::{arena::Arena, Error, LeafIndex, NodeId, Options, Tree};
use authset_core::HashFactory;

impl<F: HashFactory> Tree<F> {
    /// Build a tree over a non-empty sequence of payloads.
    ///
    /// Each payload becomes a leaf, in order. Leaves are paired left to right under internal
    /// nodes, and levels are paired in the same way until a single root remains. When a level has
    /// an odd number of nodes its last node is paired with itself; a single payload still yields a
    /// root whose two children are the same leaf.
    ///
    /// If the same payload appears more than once, every occurrence becomes a leaf but only the
    /// last one is reachable through the leaf index.
    ///
    /// Fails with [`Error::EmptyTreeData`] when `data` is empty.
    pub fn build<I>(options: Options<F>, data: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let data = data.into_iter();
        let capacity = options.leaf_capacity_hint.max(data.size_hint().0);

        // a full binary tree over n leaves has fewer than 2n nodes, plus one for a lone leaf.
        let mut arena = Arena::with_capacity(2 * capacity + 1);
        let mut leaves = LeafIndex::with_capacity_and_hasher(capacity, Default::default());
        let mut level = Vec::with_capacity(capacity);

        for payload in data {
            let payload = payload.as_ref();
            let digest = options.hash_factory.hash(payload);
            let leaf = arena.push_leaf(payload.to_vec(), digest.clone());
            leaves.insert(digest, leaf);
            level.push(leaf);
        }

        if level.is_empty() {
            return Err(Error::EmptyTreeData);
        }

        let leaf_slots = level.len();
        let mut depth = 0;
        loop {
            level = pair_level(&options.hash_factory, &mut arena, &level);
            depth += 1;
            if level.len() == 1 {
                break;
            }
        }

        let root = level[0];
        tracing::debug!(
            leaves = leaf_slots,
            nodes = arena.len(),
            depth,
            root = %arena.get(root).digest,
            "built merkle tree"
        );

        Ok(Tree {
            options,
            arena,
            root,
            leaves,
            depth,
        })
    }
}

/// Create the parents of one level, pairing nodes `2k` and `2k + 1`. A trailing odd node is
/// paired with itself.
fn pair_level<F: HashFactory>(factory: &F, arena: &mut Arena, level: &[NodeId]) -> Vec<NodeId> {
    level
        .chunks(2)
        .map(|pair| {
            let (left, right) = (pair[0], pair[pair.len() - 1]);
            let digest = factory.hash_pair(&arena.get(left).digest, &arena.get(right).digest);
            arena.push_internal(left, right, digest)
        })
        .collect()
}
