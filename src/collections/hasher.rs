//! Default hash function for [`BucketedMap`](super::BucketedMap).
//!
//! The map accepts any [`BuildHasher`](std::hash::BuildHasher) as its hash
//! collaborator. When none is supplied, [`DefaultHashBuilder`] is used:
//!
//! | Feature  | Hasher |
//! |----------|--------|
//! | (none)   | SipHash via `BuildHasherDefault<DefaultHasher>` (fixed keys) |
//! | `fxhash` | `rustc_hash::FxBuildHasher` |
//! | `ahash`  | `ahash::RandomState` (seeded once per map) |
//!
//! `fxhash` wins when both hasher features are enabled. Every choice is
//! deterministic for the lifetime of a map, which is all bucket placement needs.

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
use std::collections::hash_map::DefaultHasher;
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
use std::hash::BuildHasherDefault;

/// Hash builder used by [`BucketedMap::new`](super::BucketedMap::new).
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by [`BucketedMap::new`](super::BucketedMap::new).
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by [`BucketedMap::new`](super::BucketedMap::new).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;
