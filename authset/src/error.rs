use authset_core::proof::EmptyProof;
use std::fmt;

/// Errors returned by the operations of a [`crate::Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A tree was built from an empty sequence of payloads.
    EmptyTreeData,
    /// A proof with no siblings was passed for verification.
    EmptyProof,
    /// The digest of the given payload does not index any leaf.
    DataNotInTree,
    /// A leaf was updated with an empty payload.
    UpdateWithNilData,
    /// A leaf was updated with a payload whose digest already indexes a leaf.
    UpdateWithExistingData,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyTreeData => f.write_str("cannot build a merkle tree without any data"),
            Error::EmptyProof => f.write_str("cannot verify an empty merkle proof"),
            Error::DataNotInTree => f.write_str("data is not part of the merkle tree"),
            Error::UpdateWithNilData => f.write_str("cannot update a leaf with empty data"),
            Error::UpdateWithExistingData => {
                f.write_str("cannot update a leaf with data already present in the merkle tree")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<EmptyProof> for Error {
    fn from(_: EmptyProof) -> Self {
        Error::EmptyProof
    }
}
