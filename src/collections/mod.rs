//! Mutable collections built on a singly linked sequence.
//!
//! - [`Sequence`]: singly linked list with positional and value-based edits
//! - [`BucketedMap`]: chained hash map whose buckets are sequences
//! - [`Stack`]: LIFO stack over sequence position 0
//!
//! # Examples
//!
//! ## `Sequence`
//!
//! ```rust
//! use linkhash::collections::Sequence;
//!
//! let mut sequence = Sequence::from_array(vec!["a", "c"]);
//! sequence.insert_at(1, "b").unwrap();
//! assert_eq!(sequence.to_array(), vec!["a", "b", "c"]);
//! assert_eq!(sequence.to_string(), "a -> b -> c -> None");
//! ```
//!
//! ## `BucketedMap`
//!
//! ```rust
//! use linkhash::collections::BucketedMap;
//!
//! let mut map = BucketedMap::new();
//! assert_eq!(map.bucket_count(), 1);
//!
//! for number in 0..20 {
//!     map.put(number, number * 10);
//! }
//! assert_eq!(map.get(&7), Ok(&70));
//! assert_eq!(map.bucket_count(), 32);
//! assert_eq!(map.len(), 20);
//! ```
//!
//! ## `Stack`
//!
//! ```rust
//! use linkhash::collections::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.peek(), Ok(&1));
//! ```

mod error;
mod sequence;

#[cfg(feature = "map")]
mod bucketed_map;
#[cfg(feature = "map")]
mod hasher;
#[cfg(feature = "map")]
mod policy;

#[cfg(feature = "stack")]
mod stack;

pub use error::CollectionError;
pub use error::MapError;
pub use error::SequenceError;
pub use error::StackError;
pub use sequence::Sequence;
pub use sequence::SequenceIntoIterator;
pub use sequence::SequenceIterator;
pub use sequence::SequenceIteratorMut;

#[cfg(feature = "map")]
pub use bucketed_map::BucketedMap;
#[cfg(feature = "map")]
pub use bucketed_map::BucketedMapIterator;
#[cfg(feature = "map")]
pub use hasher::DefaultHashBuilder;
#[cfg(feature = "map")]
pub use policy::ResizePolicy;

#[cfg(feature = "stack")]
pub use stack::Stack;

// =============================================================================
// Auto-trait Checks
// =============================================================================

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(SequenceError: std::error::Error, Send, Sync);

#[cfg(feature = "map")]
static_assertions::assert_impl_all!(BucketedMap<String, i32>: Send, Clone, Default);

#[cfg(feature = "stack")]
static_assertions::assert_impl_all!(Stack<i32>: Send, Clone, Default);
