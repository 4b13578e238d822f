//! Reusable scratch containers for pooling.
//!
//! Each keeps its allocation across [`Recycle::reset`], so renting one from
//! an [`ObjectPool`](crate::ObjectPool) avoids allocating on hot paths.

use std::fmt;

use crate::pool::Recycle;

/// Accumulates items before freezing them into an immutable slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayBuilder<T> {
    items: Vec<T>,
}

impl<T> Default for ArrayBuilder<T> {
    fn default() -> Self {
        ArrayBuilder { items: Vec::new() }
    }
}

impl<T> ArrayBuilder<T> {
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// The most recently pushed item.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Move the contents out, leaving the builder empty with its capacity.
    pub fn to_boxed_slice(&mut self) -> Box<[T]> {
        self.items.drain(..).collect()
    }
}

impl<T> Recycle for ArrayBuilder<T> {
    fn with_capacity(capacity: usize) -> Self {
        ArrayBuilder {
            items: Vec::with_capacity(capacity),
        }
    }

    fn capacity(&self) -> usize {
        self.items.capacity()
    }

    fn reset(&mut self) {
        self.items.clear();
    }
}

/// A growable text buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Write for StringBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl fmt::Display for StringBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Recycle for StringBuffer {
    fn with_capacity(capacity: usize) -> Self {
        StringBuffer {
            text: String::with_capacity(capacity),
        }
    }

    fn capacity(&self) -> usize {
        self.text.capacity()
    }

    fn reset(&mut self) {
        self.text.clear();
    }
}

/// LIFO work stack for iterative tree walks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuxStack<T> {
    items: Vec<T>,
}

impl<T> Default for AuxStack<T> {
    fn default() -> Self {
        AuxStack { items: Vec::new() }
    }
}

impl<T> AuxStack<T> {
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Recycle for AuxStack<T> {
    fn with_capacity(capacity: usize) -> Self {
        AuxStack {
            items: Vec::with_capacity(capacity),
        }
    }

    fn capacity(&self) -> usize {
        self.items.capacity()
    }

    fn reset(&mut self) {
        self.items.clear();
    }
}
