//! # linkhash
//!
//! A small collections library built around one primitive: a singly linked
//! [`Sequence`](collections::Sequence). Two structures are layered on top of it:
//!
//! - **`BucketedMap`**: a chained hash map whose buckets are sequences of
//!   key-value pairs. It grows and shrinks its bucket vector to keep the load
//!   factor inside the bounds of a [`ResizePolicy`](collections::ResizePolicy).
//! - **`Stack`**: a LIFO stack that pushes and pops at sequence position 0.
//!
//! ## Feature Flags
//!
//! - `map`: `BucketedMap` and `ResizePolicy` (default)
//! - `stack`: `Stack` (default)
//! - `serde`: serde support and JSON bulk constructors
//! - `fxhash`: use `rustc-hash` as the default hasher
//! - `ahash`: use `ahash` as the default hasher
//! - `full`: `map`, `stack` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use linkhash::prelude::*;
//!
//! let mut map = BucketedMap::new();
//! map.put("a", 1);
//! map.put("b", 2);
//! assert_eq!(map.get("a"), Ok(&1));
//! assert!(!map.contains("z"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every collection, the error types and the resize policy.
///
/// # Usage
///
/// ```rust
/// use linkhash::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
}

pub mod collections;
