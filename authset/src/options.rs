#[cfg(feature = "sha2-hasher")]
use authset_core::Sha2Factory;

/// Options when building a [`crate::Tree`].
#[derive(Debug, Clone)]
pub struct Options<F> {
    /// The factory producing a fresh hasher for every hash computation.
    pub(crate) hash_factory: F,
    /// The expected number of payloads. Only used to pre-size storage.
    pub(crate) leaf_capacity_hint: usize,
}

impl<F> Options<F> {
    /// Create a new `Options` instance using the given hash factory.
    pub fn new(hash_factory: F) -> Self {
        Self {
            hash_factory,
            leaf_capacity_hint: 0,
        }
    }

    /// Replace the hash factory.
    ///
    /// Digests produced by different factories are not comparable, so trees built with different
    /// factories have unrelated roots and proofs.
    pub fn hash_factory(&mut self, hash_factory: F) {
        self.hash_factory = hash_factory;
    }

    /// Set the number of payloads expected to be passed to [`crate::Tree::build`].
    ///
    /// This has no effect on the resulting tree. The default is 0, in which case storage is sized
    /// from the size hint of the payload iterator.
    pub fn leaf_capacity_hint(&mut self, leaves: usize) {
        self.leaf_capacity_hint = leaves;
    }
}

#[cfg(feature = "sha2-hasher")]
impl Default for Options<Sha2Factory> {
    fn default() -> Self {
        Self::new(Sha2Factory::new())
    }
}
