//! A minimal LIFO container.
//!
//! Used by the maze generator to hold the current backtracking trail and by
//! the depth-first path search as its frontier.

use std::fmt;

/// Width of the text column used by the [`Display`](fmt::Display) box.
const BOX_WIDTH: usize = 15;
/// Items rendered longer than the box are cut to this many characters.
const SHORTENED: usize = 10;

/// Last-in, first-out stack. The top is the most recently pushed element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty stack able to hold `capacity` elements without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Push `x` on top of the stack.
    #[inline]
    pub fn push(&mut self, x: T) {
        self.items.push(x);
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Return the top element without removing it.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// The last element of the vector becomes the top of the stack.
impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Draws the stack as an open box, top element first.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "T{:w$}T", "", w = BOX_WIDTH + 2)?;
        for item in self.items.iter().rev() {
            let mut s = item.to_string();
            if s.chars().count() > BOX_WIDTH {
                s = s.chars().take(SHORTENED).collect::<String>() + "[...]";
            }
            writeln!(f, "| {s:^w$} |", w = BOX_WIDTH)?;
        }
        write!(f, "\\{:_<w$}/", "", w = BOX_WIDTH + 2)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned by [`Stack`] accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// `pop` or `peek` was called on an empty stack.
    Empty,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty stack"),
        }
    }
}

impl std::error::Error for StackError {}
