//! Hashers (feature-gated) and the factory capability which produces them.
//!
//! A [`HashFactory`] yields a fresh [`Hasher`] for every hash computation. Hashers are never
//! reused: each one ingests some bytes and is consumed when it is finalized.
//!
//! Any closure returning a [`Hasher`] is a factory, and any implementation of
//! [`digest::Digest`] can be turned into one with [`DigestFactory`].

use crate::tree::{sort_pair, Digest};

use core::{fmt, marker::PhantomData};

/// A stateful hash computation.
///
/// All digests produced by hashers of one factory must have the same length.
pub trait Hasher {
    /// Ingest a byte sequence.
    fn update(&mut self, bytes: &[u8]);

    /// Consume the hasher and produce its digest.
    fn finalize(self) -> Digest;
}

/// A capability producing fresh, independent hashers.
pub trait HashFactory {
    /// The hasher produced by this factory.
    type Hasher: Hasher;

    /// Construct a fresh hasher.
    fn hasher(&self) -> Self::Hasher;

    /// Hash a single byte sequence, e.g. the payload of a leaf.
    fn hash(&self, bytes: &[u8]) -> Digest {
        let mut hasher = self.hasher();
        hasher.update(bytes);
        hasher.finalize()
    }

    /// The canonical pair hash.
    ///
    /// The smaller of the two digests (in lexicographic byte order) is fed first. This makes the
    /// function commutative in its inputs.
    fn hash_pair(&self, a: &Digest, b: &Digest) -> Digest {
        let (first, second) = sort_pair(a, b);
        let mut hasher = self.hasher();
        hasher.update(first.as_bytes());
        hasher.update(second.as_bytes());
        hasher.finalize()
    }
}

impl<F, H> HashFactory for F
where
    F: Fn() -> H,
    H: Hasher,
{
    type Hasher = H;

    fn hasher(&self) -> H {
        self()
    }
}

/// Free-standing form of [`HashFactory::hash_pair`].
pub fn hash_pair<F: HashFactory>(factory: &F, a: &Digest, b: &Digest) -> Digest {
    factory.hash_pair(a, b)
}

/// A [`Hasher`] wrapping any implementation of [`digest::Digest`].
pub struct DigestHasher<D>(D);

impl<D: digest::Digest> DigestHasher<D> {
    pub fn new() -> Self {
        DigestHasher(D::new())
    }
}

impl<D: digest::Digest> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: digest::Digest> Hasher for DigestHasher<D> {
    fn update(&mut self, bytes: &[u8]) {
        digest::Digest::update(&mut self.0, bytes);
    }

    fn finalize(self) -> Digest {
        Digest::new(digest::Digest::finalize(self.0).to_vec())
    }
}

/// A [`HashFactory`] producing a [`DigestHasher`] for the hash function `D`.
pub struct DigestFactory<D>(PhantomData<fn() -> D>);

impl<D> DigestFactory<D> {
    pub const fn new() -> Self {
        DigestFactory(PhantomData)
    }
}

impl<D> Default for DigestFactory<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for DigestFactory<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for DigestFactory<D> {}

impl<D> fmt::Debug for DigestFactory<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigestFactory<{}>", core::any::type_name::<D>())
    }
}

impl<D: digest::Digest> HashFactory for DigestFactory<D> {
    type Hasher = DigestHasher<D>;

    fn hasher(&self) -> DigestHasher<D> {
        DigestHasher::new()
    }
}

#[cfg(feature = "blake3-hasher")]
pub use self::blake3::Blake3Factory;

/// A hash factory making use of blake3.
#[cfg(feature = "blake3-hasher")]
pub mod blake3 {
    use super::{HashFactory, Hasher};
    use crate::tree::Digest;

    /// A [`HashFactory`] producing blake3 hashers with 32-byte output.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct Blake3Factory;

    impl Hasher for ::blake3::Hasher {
        fn update(&mut self, bytes: &[u8]) {
            ::blake3::Hasher::update(self, bytes);
        }

        fn finalize(self) -> Digest {
            Digest::from(*::blake3::Hasher::finalize(&self).as_bytes())
        }
    }

    impl HashFactory for Blake3Factory {
        type Hasher = ::blake3::Hasher;

        fn hasher(&self) -> ::blake3::Hasher {
            ::blake3::Hasher::new()
        }
    }
}

#[cfg(feature = "sha2-hasher")]
pub use self::sha2::Sha2Factory;

/// A hash factory making use of sha2-256.
#[cfg(feature = "sha2-hasher")]
pub mod sha2 {
    use super::DigestFactory;

    /// A [`super::HashFactory`] producing sha2-256 hashers with 32-byte output.
    pub type Sha2Factory = DigestFactory<::sha2::Sha256>;
}
