//! LIFO stack over a [`Sequence`].
//!
//! The top of the stack is sequence position 0, so `push` and `pop` are O(1).

use std::fmt;
use std::iter::FromIterator;

use super::{Sequence, StackError};

/// A last-in, first-out stack.
///
/// # Examples
///
/// ```rust
/// use linkhash::collections::{Stack, StackError};
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert_eq!(stack.pop(), Err(StackError::EmptyStack));
/// ```
#[derive(Clone)]
pub struct Stack<T> {
    sequence: Sequence<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sequence: Sequence::new(),
        }
    }

    /// Pushes `element` on top of the stack.
    pub fn push(&mut self, element: T) {
        self.sequence.prepend(element);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::EmptyStack`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, StackError> {
        if self.is_empty() {
            return Err(StackError::EmptyStack);
        }
        self.sequence
            .delete_at(0)
            .map_err(|_| StackError::EmptyStack)
    }

    /// Returns a reference to the top element.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::EmptyStack`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.sequence.get_at(0).map_err(|_| StackError::EmptyStack)
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.sequence.len()
    }
}

impl<T: fmt::Display> Stack<T> {
    /// Writes the stack to stdout from top to bottom.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes elements in iteration order; the last one ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for element in iter {
            stack.push(element);
        }
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Stack").field(&self.sequence).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.sequence)
    }
}
