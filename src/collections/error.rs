//! Error types for the collections.
//!
//! Each structure reports its own failures through a dedicated enum so callers
//! can match on exactly the cases an operation can produce:
//!
//! - [`SequenceError`]: positional and value-based failures on a [`Sequence`]
//! - [`MapError`]: lookup misses and rejected resize policies
//! - [`StackError`]: reads from an empty stack
//!
//! [`CollectionError`] wraps all three, so code that touches several
//! structures can propagate with `?`.
//!
//! [`Sequence`]: super::Sequence

use thiserror::Error;

/// Errors produced by [`Sequence`](super::Sequence) operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A read, replace or delete addressed a position outside `[0, length)`.
    #[error("index {index} is outside of sequence range (length {length})")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The sequence length at the time of the call.
        length: usize,
    },

    /// An insert addressed a position outside `[0, length]`.
    #[error("cannot insert at position {index} of a sequence of length {length}")]
    InvalidIndex {
        /// The requested position.
        index: usize,
        /// The sequence length at the time of the call.
        length: usize,
    },

    /// A value-based search found no matching element.
    #[error("value not found in the sequence")]
    NotFound,

    /// A bulk constructor was given input of the wrong shape.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// Description of the accepted input.
        expected: &'static str,
        /// Description of what was supplied.
        found: String,
    },
}

impl SequenceError {
    /// Returns whether this is the `IndexOutOfRange` variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkhash::collections::SequenceError;
    ///
    /// let error = SequenceError::IndexOutOfRange { index: 3, length: 1 };
    /// assert!(error.is_index_out_of_range());
    /// ```
    #[must_use]
    pub const fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Returns whether this is the `InvalidIndex` variant.
    #[must_use]
    pub const fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }

    /// Returns whether this is the `NotFound` variant.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Returns whether this is the `TypeMismatch` variant.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

/// Errors produced by [`BucketedMap`](super::BucketedMap) operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MapError {
    /// The requested key is not present.
    #[error("key not found in map")]
    KeyNotFound,

    /// A [`ResizePolicy`](super::ResizePolicy) failed validation.
    #[error("invalid resize policy: {reason}")]
    InvalidPolicy {
        /// Which constraint was violated.
        reason: &'static str,
    },
}

/// Errors produced by [`Stack`](super::Stack) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StackError {
    /// `pop` or `peek` was called on an empty stack.
    #[error("stack is empty")]
    EmptyStack,
}

/// Any error raised by the collections in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A sequence operation failed.
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// A map operation failed.
    #[error(transparent)]
    Map(#[from] MapError),

    /// A stack operation failed.
    #[error(transparent)]
    Stack(#[from] StackError),
}
