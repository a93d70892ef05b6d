//! Mutable singly linked sequence.
//!
//! This module provides [`Sequence`], an ordered collection of nodes where
//! each node owns its element and the link to the next node.
//!
//! # Overview
//!
//! `Sequence` favours a plain, predictable layout over asymptotic tricks:
//!
//! - O(1) `prepend`, `len` and head access
//! - O(n) `append` (there is no tail pointer)
//! - O(n) positional reads, inserts, replaces and deletes
//! - O(n) value searches by `PartialEq`
//!
//! Positions are zero-based. Reads, replaces and deletes accept `[0, len)`;
//! inserts also accept `len` itself, meaning "after the last element".
//!
//! # Examples
//!
//! ```rust
//! use linkhash::collections::{Sequence, SequenceError};
//!
//! let mut sequence = Sequence::new();
//! sequence.append(1);
//! sequence.append(3);
//! sequence.insert_at(1, 2).unwrap();
//! assert_eq!(sequence.to_array(), vec![1, 2, 3]);
//!
//! assert_eq!(sequence.find_first(&3), Ok(2));
//! assert_eq!(sequence.find_first(&9), Err(SequenceError::NotFound));
//! ```
//!
//! # Guarded operations
//!
//! Two operations report their outcome instead of failing:
//! [`Sequence::insert_after`] does nothing when the anchor is absent, and
//! [`Sequence::clear`] does nothing unless explicitly confirmed.
//!
//! ```rust
//! use linkhash::collections::Sequence;
//!
//! let mut sequence = Sequence::from_array(vec!['a', 'b']);
//! assert!(!sequence.insert_after(&'z', 'c'));
//! assert!(!sequence.clear(false));
//! assert_eq!(sequence.len(), 2);
//! assert!(sequence.clear(true));
//! assert!(sequence.is_empty());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::SequenceError;

/// A link to the next node, or `None` at the end of the chain.
type Link<T> = Option<Box<Node<T>>>;

/// Internal node of a [`Sequence`].
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// Exclusive link to the next node.
    next: Link<T>,
}

impl<T> Node<T> {
    const fn new(element: T, next: Link<T>) -> Self {
        Self { element, next }
    }
}

/// Walks `steps` links forward from `link`.
///
/// Returns `None` if the chain ends before `steps` links were followed.
fn seek<T>(mut link: &mut Link<T>, steps: usize) -> Option<&mut Link<T>> {
    for _ in 0..steps {
        link = &mut link.as_mut()?.next;
    }
    Some(link)
}

/// A mutable singly linked list.
///
/// # Time Complexity
///
/// | Operation            | Complexity |
/// |----------------------|------------|
/// | `new`                | O(1)       |
/// | `len`                | O(1)       |
/// | `prepend`            | O(1)       |
/// | `append`             | O(n)       |
/// | `get_at`             | O(n)       |
/// | `insert_at`          | O(n)       |
/// | `insert_sequence_at` | O(n + m)   |
/// | `delete_at`          | O(n)       |
/// | `find_*`             | O(n)       |
/// | `to_array`           | O(n)       |
///
/// # Examples
///
/// ```rust
/// use linkhash::collections::Sequence;
///
/// let sequence = Sequence::from_chars("abc");
/// assert_eq!(sequence.len(), 3);
/// assert_eq!(sequence.get_at(1), Ok(&'b'));
/// ```
pub struct Sequence<T> {
    /// The first node, if any.
    head: Link<T>,
    /// Number of reachable nodes.
    length: usize,
}

impl<T> Sequence<T> {
    /// Creates a new empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkhash::collections::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Builds a sequence from a vector, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkhash::collections::Sequence;
    ///
    /// let values = vec![3, 1, 2];
    /// let sequence = Sequence::from_array(values.clone());
    /// assert_eq!(sequence.to_array(), values);
    /// ```
    #[must_use]
    pub fn from_array(values: Vec<T>) -> Self {
        let mut sequence = Self::new();
        for value in values {
            sequence.append(value);
        }
        sequence
    }

    /// Appends an element after the current last element.
    ///
    /// # Complexity
    ///
    /// O(n): the chain is walked to find the tail.
    pub fn append(&mut self, element: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node::new(element, None)));
        self.length += 1;
    }

    /// Inserts an element at position 0.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn prepend(&mut self, element: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node::new(element, next)));
        self.length += 1;
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkhash::collections::{Sequence, SequenceError};
    ///
    /// let sequence: Sequence<&str> = Sequence::new();
    /// assert_eq!(
    ///     sequence.get_at(0),
    ///     Err(SequenceError::IndexOutOfRange { index: 0, length: 0 })
    /// );
    /// ```
    pub fn get_at(&self, index: usize) -> Result<&T, SequenceError> {
        self.check_bounds(index)?;
        let missing = self.out_of_range(index);
        self.iter().nth(index).ok_or(missing)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index >= len()`.
    pub fn get_at_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        self.check_bounds(index)?;
        let missing = self.out_of_range(index);
        self.iter_mut().nth(index).ok_or(missing)
    }

    /// Inserts `element` before the element currently at `index`.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::InvalidIndex`] if `index > len()`.
    /// - [`SequenceError::IndexOutOfRange`] if the chain ends before `index`,
    ///   which means the length counter disagrees with the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkhash::collections::Sequence;
    ///
    /// let mut sequence = Sequence::new();
    /// sequence.insert_at(0, "z").unwrap();
    /// assert_eq!(sequence.get_at(0), Ok(&"z"));
    /// assert!(sequence.insert_at(5, "q").unwrap_err().is_invalid_index());
    /// ```
    pub fn insert_at(&mut self, index: usize, element: T) -> Result<(), SequenceError> {
        self.check_insert_position(index)?;
        let missing = self.out_of_range(index);
        let link = seek(&mut self.head, index).ok_or(missing)?;
        let next = link.take();
        *link = Some(Box::new(Node::new(element, next)));
        self.length += 1;
        Ok(())
    }

    /// Inserts every value from `values` starting at `index`, keeping their
    /// relative order.
    ///
    /// Returns the number of inserted values.
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::insert_at`]. Nothing is inserted on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkhash::collections::Sequence;
    ///
    /// let mut sequence = Sequence::from_array(vec![1, 5]);
    /// assert_eq!(sequence.insert_sequence_at(1, [2, 3, 4]), Ok(3));
    /// assert_eq!(sequence.to_array(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_sequence_at<I>(&mut self, index: usize, values: I) -> Result<usize, SequenceError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_insert_position(index)?;
        let missing = self.out_of_range(index);
        let mut link = seek(&mut self.head, index).ok_or(missing)?;
        let rest = link.take();
        let mut inserted = 0;
        for element in values {
            let node = link.insert(Box::new(Node::new(element, None)));
            link = &mut node.next;
            inserted += 1;
        }
        *link = rest;
        self.length += inserted;
        Ok(inserted)
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index >= len()`.
    pub fn delete_at(&mut self, index: usize) -> Result<T, SequenceError> {
        self.check_bounds(index)?;
        let missing = self.out_of_range(index);
        let Some(link) = seek(&mut self.head, index) else {
            return Err(missing);
        };
        let Some(node) = link.take() else {
            return Err(missing);
        };
        let Node { element, next } = *node;
        *link = next;
        self.length -= 1;
        Ok(element)
    }

    /// Overwrites the element at `index`, returning the previous element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index >= len()`.
    pub fn replace_at(&mut self, index: usize, element: T) -> Result<T, SequenceError> {
        let slot = self.get_at_mut(index)?;
        Ok(std::mem::replace(slot, element))
    }

    /// Empties the sequence when `confirm` is `true`.
    ///
    /// Without confirmation nothing changes. Returns whether the sequence was
    /// cleared.
    pub fn clear(&mut self, confirm: bool) -> bool {
        if !confirm {
            tracing::info!(
                length = self.length,
                "clear cancelled; pass confirm = true to empty the sequence"
            );
            return false;
        }
        self.unlink_all();
        true
    }

    /// Drops every node iteratively.
    fn unlink_all(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.length = 0;
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SequenceIterator<'_, T> {
        SequenceIterator {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> SequenceIteratorMut<'_, T> {
        SequenceIteratorMut {
            current: self.head.as_deref_mut(),
            remaining: self.length,
        }
    }

    /// Removes and returns the first element, if any.
    fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { element, next } = *node;
            self.head = next;
            self.length -= 1;
            element
        })
    }

    const fn check_bounds(&self, index: usize) -> Result<(), SequenceError> {
        if index < self.length {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    const fn check_insert_position(&self, index: usize) -> Result<(), SequenceError> {
        if index <= self.length {
            Ok(())
        } else {
            Err(SequenceError::InvalidIndex {
                index,
                length: self.length,
            })
        }
    }

    const fn out_of_range(&self, index: usize) -> SequenceError {
        SequenceError::IndexOutOfRange {
            index,
            length: self.length,
        }
    }
}

// =============================================================================
// Value-based Operations
// =============================================================================

impl<T: PartialEq> Sequence<T> {
    /// Returns the position of the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NotFound`] if no element matches.
    pub fn find_first(&self, value: &T) -> Result<usize, SequenceError> {
        self.iter()
            .position(|element| element == value)
            .ok_or(SequenceError::NotFound)
    }

    /// Returns the position of the last element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NotFound`] if no element matches.
    pub fn find_last(&self, value: &T) -> Result<usize, SequenceError> {
        self.iter()
            .enumerate()
            .filter(|(_, element)| *element == value)
            .map(|(position, _)| position)
            .last()
            .ok_or(SequenceError::NotFound)
    }

    /// Returns every position holding an element equal to `value`, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NotFound`] if no element matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkhash::collections::Sequence;
    ///
    /// let sequence = Sequence::from_chars("banana");
    /// assert_eq!(sequence.find_all(&'a'), Ok(vec![1, 3, 5]));
    /// assert!(sequence.find_all(&'x').unwrap_err().is_not_found());
    /// ```
    pub fn find_all(&self, value: &T) -> Result<Vec<usize>, SequenceError> {
        let positions: Vec<usize> = self
            .iter()
            .enumerate()
            .filter(|(_, element)| *element == value)
            .map(|(position, _)| position)
            .collect();
        if positions.is_empty() {
            Err(SequenceError::NotFound)
        } else {
            Ok(positions)
        }
    }

    /// Inserts `element` right after the first element equal to `anchor`.
    ///
    /// Returns `false` and leaves the sequence untouched when `anchor` is not
    /// present. Use [`Sequence::find_first`] beforehand if the caller needs to
    /// tell the two outcomes apart before inserting.
    pub fn insert_after(&mut self, anchor: &T, element: T) -> bool {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.element == *anchor {
                let next = node.next.take();
                node.next = Some(Box::new(Node::new(element, next)));
                self.length += 1;
                return true;
            }
            cursor = node.next.as_deref_mut();
        }
        false
    }
}

impl<T: PartialEq + Clone> Sequence<T> {
    /// Overwrites every element equal to `old` with a clone of `new`.
    ///
    /// Returns how many elements were replaced; zero means nothing matched.
    pub fn replace_all(&mut self, old: &T, new: T) -> usize {
        let mut replaced = 0;
        for element in self.iter_mut().filter(|element| **element == *old) {
            element.clone_from(&new);
            replaced += 1;
        }
        replaced
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns the elements as a vector, in order.
    ///
    /// The vector is a snapshot; later edits to the sequence do not affect it.
    #[must_use]
    pub fn to_array(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Display> Sequence<T> {
    /// Writes the sequence to stdout as `a -> b -> None`.
    pub fn print(&self) {
        println!("{self}");
    }
}

// =============================================================================
// Bulk Constructors for Specific Shapes
// =============================================================================

impl<K, V> Sequence<(K, V)> {
    /// Builds a sequence of key-value pairs in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkhash::collections::Sequence;
    ///
    /// let sequence = Sequence::from_pairs([("one", 1), ("two", 2)]);
    /// assert_eq!(sequence.get_at(1), Ok(&("two", 2)));
    /// ```
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut sequence = Self::new();
        for pair in pairs {
            sequence.append(pair);
        }
        sequence
    }
}

impl Sequence<char> {
    /// Builds a sequence holding one node per character of `text`.
    #[must_use]
    pub fn from_chars(text: &str) -> Self {
        let mut sequence = Self::new();
        for character in text.chars() {
            sequence.append(character);
        }
        sequence
    }
}

// =============================================================================
// JSON Bulk Constructors
// =============================================================================

#[cfg(feature = "serde")]
fn describe_json(value: &serde_json::Value) -> String {
    use serde_json::Value;
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "a boolean".to_string(),
        Value::Number(_) => "a number".to_string(),
        Value::String(_) => "a string".to_string(),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}

#[cfg(feature = "serde")]
fn convert_json<T: serde::de::DeserializeOwned>(
    value: &serde_json::Value,
    expected: &'static str,
) -> Result<T, SequenceError> {
    serde_json::from_value(value.clone()).map_err(|error| SequenceError::TypeMismatch {
        expected,
        found: format!("{} ({error})", describe_json(value)),
    })
}

#[cfg(feature = "serde")]
impl<T: serde::de::DeserializeOwned> Sequence<T> {
    /// Builds a sequence from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::TypeMismatch`] if `value` is not an array or
    /// an element cannot be read as `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linkhash::collections::Sequence;
    /// use serde_json::json;
    ///
    /// let sequence: Sequence<i32> = Sequence::from_json_array(&json!([1, 2, 3])).unwrap();
    /// assert_eq!(sequence.to_array(), vec![1, 2, 3]);
    ///
    /// let error = Sequence::<i32>::from_json_array(&json!({"a": 1})).unwrap_err();
    /// assert!(error.is_type_mismatch());
    /// ```
    pub fn from_json_array(value: &serde_json::Value) -> Result<Self, SequenceError> {
        let serde_json::Value::Array(items) = value else {
            return Err(SequenceError::TypeMismatch {
                expected: "a JSON array",
                found: describe_json(value),
            });
        };
        let mut sequence = Self::new();
        for item in items {
            sequence.append(convert_json(item, "array elements of the element type")?);
        }
        Ok(sequence)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::de::DeserializeOwned> Sequence<(String, T)> {
    /// Builds a sequence of `(key, value)` pairs from a JSON object, in
    /// document order.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::TypeMismatch`] if `value` is not an object or
    /// a member value cannot be read as `T`.
    pub fn from_json_object(value: &serde_json::Value) -> Result<Self, SequenceError> {
        let serde_json::Value::Object(members) = value else {
            return Err(SequenceError::TypeMismatch {
                expected: "a JSON object",
                found: describe_json(value),
            });
        };
        let mut sequence = Self::new();
        for (key, member) in members {
            sequence.append((key.clone(), convert_json(member, "object values of the element type")?));
        }
        Ok(sequence)
    }
}

#[cfg(feature = "serde")]
impl Sequence<char> {
    /// Builds a character sequence from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::TypeMismatch`] if `value` is not a string.
    pub fn from_json_string(value: &serde_json::Value) -> Result<Self, SequenceError> {
        value
            .as_str()
            .map(Self::from_chars)
            .ok_or_else(|| SequenceError::TypeMismatch {
                expected: "a JSON string",
                found: describe_json(value),
            })
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`Sequence`].
pub struct SequenceIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for SequenceIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for SequenceIterator<'_, T> {}

/// An iterator over mutable references to elements of a [`Sequence`].
pub struct SequenceIteratorMut<'a, T> {
    current: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for SequenceIteratorMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            self.current = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for SequenceIteratorMut<'_, T> {}

/// An owning iterator over elements of a [`Sequence`].
pub struct SequenceIntoIterator<T> {
    sequence: Sequence<T>,
}

impl<T> Iterator for SequenceIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequence.length, Some(self.sequence.length))
    }
}

impl<T> ExactSizeIterator for SequenceIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

impl<T> Default for Sequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        let mut sequence = Self::new();
        let mut link = &mut sequence.head;
        for element in self {
            let node = link.insert(Box::new(Node::new(element.clone(), None)));
            link = &mut node.next;
        }
        sequence.length = self.length;
        sequence
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        for element in iter {
            let node = link.insert(Box::new(Node::new(element, None)));
            link = &mut node.next;
            self.length += 1;
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = SequenceIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SequenceIntoIterator { sequence: self }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = SequenceIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = SequenceIteratorMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self {
            write!(formatter, "{element} -> ")?;
        }
        write!(formatter, "None")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct SequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Sequence<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut sequence = Sequence::new();
        let mut link = &mut sequence.head;
        while let Some(element) = seq.next_element()? {
            let node = link.insert(Box::new(Node::new(element, None)));
            link = &mut node.next;
            sequence.length += 1;
        }
        Ok(sequence)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
