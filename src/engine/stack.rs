use thiserror::Error;

use crate::error::EvalError;

/// Default number of entries each evaluator stack may hold.
pub const DEFAULT_CAPACITY: usize = 100;

/// Returned when pushing onto a stack that is already full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expression exceeds stack capacity of {capacity}")]
pub struct Overflow {
    /// The capacity of the stack that rejected the push.
    pub capacity: usize,
}

impl From<Overflow> for EvalError {
    fn from(overflow: Overflow) -> Self {
        Self::malformed(overflow.to_string())
    }
}

/// A last-in, first-out container with a fixed upper bound on its length.
///
/// # Example
/// ```
/// use reckon::engine::stack::{Overflow, Stack};
///
/// let mut stack = Stack::with_capacity(2);
/// assert!(stack.push(1).is_ok());
/// assert!(stack.push(2).is_ok());
/// assert_eq!(stack.push(3), Err(Overflow { capacity: 2 }));
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items:    Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    /// Creates an empty stack that holds at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity),
               capacity }
    }

    /// Pushes `item` on top of the stack.
    ///
    /// # Errors
    /// Returns [`Overflow`] and leaves the stack untouched when it is full.
    pub fn push(&mut self, item: T) -> Result<(), Overflow> {
        if self.is_full() {
            return Err(Overflow { capacity: self.capacity });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the top entry, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top entry without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every entry, keeping the capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
