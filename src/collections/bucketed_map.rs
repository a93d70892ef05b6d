//! Chained hash map built on [`Sequence`] buckets.
//!
//! This module provides [`BucketedMap`], a hash map that resolves collisions
//! by chaining: every bucket is a [`Sequence`] of `(key, value)` pairs, and a
//! key lives in bucket `hash(key) mod bucket_count`.
//!
//! # Overview
//!
//! - `put` checks the load factor *before* inserting and resizes if needed
//! - growing doubles the bucket count, shrinking halves it
//! - a resize rehashes every pair into a freshly built bucket vector, which
//!   then replaces the old one in a single assignment
//! - lookups scan one bucket linearly
//!
//! Resize thresholds come from a [`ResizePolicy`]; the hash function is any
//! [`BuildHasher`], defaulting to [`DefaultHashBuilder`].
//!
//! # Examples
//!
//! ```rust
//! use linkhash::collections::{BucketedMap, MapError};
//!
//! let mut map = BucketedMap::new();
//! assert_eq!(map.put("x", 1), None);
//! assert_eq!(map.put("x", 2), Some(1));
//! assert_eq!(map.get("x"), Ok(&2));
//! assert_eq!(map.len(), 1);
//! assert_eq!(map.get("y"), Err(MapError::KeyNotFound));
//! ```
//!
//! # Resize ordering
//!
//! Because the check runs before the insert, the pair that triggers a resize
//! is placed using the new bucket count:
//!
//! ```text
//! put #1: 0 elements / 1 bucket  = 0.00 -> stay   (1 bucket,  1 element)
//! put #2: 1 element  / 1 bucket  = 1.00 -> grow   (2 buckets, 2 elements)
//! put #3: 2 elements / 2 buckets = 1.00 -> grow   (4 buckets, 3 elements)
//! put #4: 3 elements / 4 buckets = 0.75 -> grow   (8 buckets, 4 elements)
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

use super::{DefaultHashBuilder, MapError, ResizePolicy, Sequence, SequenceIterator};

/// Bucket storage: the pairs that hashed to one slot, in insertion order.
type Bucket<K, V> = Sequence<(K, V)>;

/// Computes the bucket index of `key` for a vector of `bucket_count` buckets.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn bucket_index<Q, S>(hash_builder: &S, key: &Q, bucket_count: usize) -> usize
where
    Q: Hash + ?Sized,
    S: BuildHasher,
{
    (hash_builder.hash_one(key) % bucket_count as u64) as usize
}

/// Allocates `bucket_count` empty buckets.
fn empty_buckets<K, V>(bucket_count: usize) -> Vec<Bucket<K, V>> {
    (0..bucket_count).map(|_| Sequence::new()).collect()
}

/// A hash map with chained buckets and load-factor driven resizing.
///
/// # Time Complexity
///
/// | Operation      | Complexity                |
/// |----------------|---------------------------|
/// | `new`          | O(1)                      |
/// | `put`          | O(1) amortized, O(n) on resize |
/// | `get`          | O(1) average              |
/// | `contains`     | O(1) average              |
/// | `len`          | O(1)                      |
/// | `dump`         | O(n + buckets)            |
///
/// # Examples
///
/// ```rust
/// use linkhash::collections::BucketedMap;
///
/// let map: BucketedMap<String, i32> =
///     [("one".to_string(), 1), ("two".to_string(), 2)].into_iter().collect();
/// assert_eq!(map.get("two"), Ok(&2));
/// assert!(map.contains("one"));
/// ```
pub struct BucketedMap<K, V, S = DefaultHashBuilder> {
    /// One sequence per bucket.
    buckets: Vec<Bucket<K, V>>,
    /// Live pairs across all buckets.
    total_elements: usize,
    /// Grow/shrink thresholds.
    policy: ResizePolicy,
    /// The hash function collaborator.
    hash_builder: S,
}

impl<K, V> BucketedMap<K, V, DefaultHashBuilder> {
    /// Creates an empty map with the default policy and hasher.
    ///
    /// The map starts with a single bucket.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkhash::collections::BucketedMap;
    ///
    /// let map: BucketedMap<&str, i32> = BucketedMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.bucket_count(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy_and_hasher(ResizePolicy::default(), DefaultHashBuilder::default())
    }

    /// Creates an empty map with `policy` and the default hasher.
    ///
    /// An invalid policy is replaced by the default one; use
    /// [`BucketedMap::try_with_policy`] to reject it instead.
    #[must_use]
    pub fn with_policy(policy: ResizePolicy) -> Self {
        Self::with_policy_and_hasher(policy, DefaultHashBuilder::default())
    }

    /// Creates an empty map with `policy` and the default hasher.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidPolicy`] if `policy` fails validation.
    pub fn try_with_policy(policy: ResizePolicy) -> Result<Self, MapError> {
        Self::try_with_policy_and_hasher(policy, DefaultHashBuilder::default())
    }
}

impl<K, V, S> BucketedMap<K, V, S> {
    /// Creates an empty map that hashes keys with `hash_builder`.
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_policy_and_hasher(ResizePolicy::default(), hash_builder)
    }

    /// Creates an empty map with both a policy and a hasher.
    ///
    /// An invalid policy is logged and replaced by the default one.
    #[must_use]
    pub fn with_policy_and_hasher(policy: ResizePolicy, hash_builder: S) -> Self {
        let policy = match policy.validate() {
            Ok(()) => policy,
            Err(error) => {
                tracing::warn!(%error, "falling back to the default resize policy");
                ResizePolicy::default()
            }
        };
        Self {
            buckets: empty_buckets(policy.initial_buckets),
            total_elements: 0,
            policy,
            hash_builder,
        }
    }

    /// Creates an empty map with both a policy and a hasher.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidPolicy`] if `policy` fails validation.
    pub fn try_with_policy_and_hasher(policy: ResizePolicy, hash_builder: S) -> Result<Self, MapError> {
        policy.validate()?;
        Ok(Self::with_policy_and_hasher(policy, hash_builder))
    }

    /// Returns the number of live key-value pairs.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total_elements
    }

    /// Returns `true` if the map holds no pairs.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_elements == 0
    }

    /// Returns the current number of buckets.
    #[inline]
    #[must_use]
    pub const fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns live pairs divided by bucket count.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.total_elements as f64 / self.buckets.len() as f64
    }

    /// Returns the resize policy in effect.
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> &ResizePolicy {
        &self.policy
    }

    /// Returns the hash function collaborator.
    #[inline]
    #[must_use]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns the pairs of every bucket, indexed by bucket.
    ///
    /// Intended for inspection and tests.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkhash::collections::BucketedMap;
    ///
    /// let mut map = BucketedMap::new();
    /// map.put('k', 7);
    /// assert_eq!(map.dump(), vec![vec![(&'k', &7)]]);
    /// ```
    #[must_use]
    pub fn dump(&self) -> Vec<Vec<(&K, &V)>> {
        self.buckets
            .iter()
            .map(|bucket| bucket.iter().map(|(key, value)| (key, value)).collect())
            .collect()
    }

    /// Returns an iterator over all pairs, bucket by bucket.
    #[must_use]
    pub fn iter(&self) -> BucketedMapIterator<'_, K, V> {
        BucketedMapIterator {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.total_elements,
        }
    }

    /// Returns an iterator over all keys, bucket by bucket.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over all values, bucket by bucket.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> BucketedMap<K, V, S> {
    /// Associates `value` with `key`, returning the value it replaced.
    ///
    /// The load factor is checked first, so a resize triggered by this call
    /// already applies to the new pair. An existing key keeps its position in
    /// its bucket and the element count is unchanged.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.maybe_resize();
        let index = bucket_index(&self.hash_builder, &key, self.buckets.len());
        let bucket = &mut self.buckets[index];
        if let Some((_, slot)) = bucket.iter_mut().find(|(existing, _)| *existing == key) {
            tracing::trace!(bucket = index, "replacing value of existing key");
            return Some(std::mem::replace(slot, value));
        }
        bucket.append((key, value));
        self.total_elements += 1;
        tracing::trace!(bucket = index, elements = self.total_elements, "appended new key");
        None
    }

    /// Grows or shrinks the bucket vector when the load factor leaves the
    /// policy bounds.
    ///
    /// Returns `true` if the buckets were rebuilt. Old buckets are drained in
    /// index order and each bucket in stored order, so the new layout is
    /// deterministic for a given hasher.
    pub fn maybe_resize(&mut self) -> bool {
        let bucket_count = self.buckets.len();
        let Some(new_bucket_count) = self
            .policy
            .next_bucket_count(self.total_elements, bucket_count)
        else {
            return false;
        };

        let mut rebuilt = empty_buckets(new_bucket_count);
        for bucket in self.buckets.drain(..) {
            for (key, value) in bucket {
                let index = bucket_index(&self.hash_builder, &key, new_bucket_count);
                rebuilt[index].append((key, value));
            }
        }
        self.buckets = rebuilt;

        tracing::debug!(
            from = bucket_count,
            to = new_bucket_count,
            elements = self.total_elements,
            "rehashed buckets"
        );
        true
    }

    /// Returns the value associated with `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if `key` is absent.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, MapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bucket_for(key)
            .iter()
            .find(|(existing, _)| existing.borrow() == key)
            .map(|(_, value)| value)
            .ok_or(MapError::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if `key` is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, MapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = bucket_index(&self.hash_builder, key, self.buckets.len());
        self.buckets[index]
            .iter_mut()
            .find(|(existing, _)| existing.borrow() == key)
            .map(|(_, value)| value)
            .ok_or(MapError::KeyNotFound)
    }

    /// Returns `true` if `key` is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bucket_for(key)
            .iter()
            .any(|(existing, _)| existing.borrow() == key)
    }

    fn bucket_for<Q>(&self, key: &Q) -> &Bucket<K, V>
    where
        Q: Hash + ?Sized,
    {
        &self.buckets[bucket_index(&self.hash_builder, key, self.buckets.len())]
    }
}

impl<K: fmt::Display, V: fmt::Display, S> BucketedMap<K, V, S> {
    /// Writes every bucket to stdout, one `Slot {i}: ...` line per bucket.
    pub fn print(&self) {
        print!("{self}");
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over `(key, value)` references of a [`BucketedMap`], in bucket
/// order.
pub struct BucketedMapIterator<'a, K, V> {
    buckets: std::slice::Iter<'a, Bucket<K, V>>,
    current: Option<SequenceIterator<'a, (K, V)>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for BucketedMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, value)) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some((key, value));
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for BucketedMapIterator<'_, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a BucketedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = BucketedMapIterator<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for BucketedMap<K, V, DefaultHashBuilder> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, S: Clone> Clone for BucketedMap<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            total_elements: self.total_elements,
            policy: self.policy,
            hash_builder: self.hash_builder.clone(),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> FromIterator<(K, V)> for BucketedMap<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for BucketedMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V, S> PartialEq for BucketedMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_ok_and(|other_value| value == other_value))
    }
}

impl<K: Hash + Eq, V: Eq, S: BuildHasher> Eq for BucketedMap<K, V, S> {}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for BucketedMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for BucketedMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            write!(formatter, "Slot {index}: ")?;
            for (key, value) in bucket {
                write!(formatter, "({key}, {value}) -> ")?;
            }
            writeln!(formatter, "None")?;
        }
        Ok(())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for BucketedMap<K, V, S>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
struct BucketedMapVisitor<K, V, S> {
    marker: std::marker::PhantomData<BucketedMap<K, V, S>>,
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::de::Visitor<'de> for BucketedMapVisitor<K, V, S>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = BucketedMap<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = BucketedMap::with_hasher(S::default());
        while let Some((key, value)) = access.next_entry()? {
            map.put(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::Deserialize<'de> for BucketedMap<K, V, S>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(BucketedMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
