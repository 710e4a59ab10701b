//! Core types, hashers and proof verification of an authenticated set built as a binary merkle
//! tree.
//!
//! This crate holds everything a verifier needs: the [`Digest`] type, the [`HashFactory`]
//! capability and the canonical pair hash, and the folding of membership proofs against a root.
//! Building and updating trees is the business of the `authset` crate.
//!
//! The types and proof verification routines of this crate do not require the standard library,
//! but do require Rust's alloc crate.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod hasher;
pub mod proof;
pub mod tree;

pub use hasher::{hash_pair, DigestFactory, DigestHasher, HashFactory, Hasher};
pub use tree::{Digest, NodeKind};

#[cfg(feature = "blake3-hasher")]
pub use hasher::Blake3Factory;
#[cfg(feature = "sha2-hasher")]
pub use hasher::Sha2Factory;
