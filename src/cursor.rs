use std::fmt;

use crate::util;

/// Anything a [`Cursor`] can walk over.
///
/// `str` is indexed by byte offset (always left on a char boundary by the leaf
/// parsers), slices by element offset.
pub trait Input {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Up to `max` items of input starting at `index`, rendered for logs and error messages
    fn preview(&self, index: usize, max: usize) -> String;
}

impl Input for str {
    #[inline]
    fn len(&self) -> usize {
        str::len(self)
    }

    fn preview(&self, index: usize, max: usize) -> String {
        self.get(index..).unwrap_or_default().chars().take(max).collect()
    }
}

impl<T: fmt::Debug> Input for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn preview(&self, index: usize, max: usize) -> String {
        let rest = self.get(index..).unwrap_or_default();
        format!("{:?}", &rest[..rest.len().min(max)])
    }
}

/// An immutable snapshot of parsing progress: the whole input plus a read position.
///
/// Cursors are `Copy` values. Parsers never mutate one, they hand back a new cursor,
/// so backtracking is simply reusing an older cursor.
pub struct Cursor<'i, I: ?Sized> {
    input: &'i I,
    index: usize,
}

// derives would demand `I: Clone`, which `str` and `[T]` can never satisfy
impl<'i, I: ?Sized> Clone for Cursor<'i, I> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'i, I: ?Sized> Copy for Cursor<'i, I> {}

impl<'i, I: Input + ?Sized> Cursor<'i, I> {
    /// A cursor at index 0
    #[inline]
    pub fn new(input: &'i I) -> Self {
        Self { input, index: 0 }
    }

    #[inline]
    pub fn input(&self) -> &'i I {
        self.input
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// true once every element of the input has been consumed
    #[inline]
    pub fn is_eos(&self) -> bool {
        self.index >= self.input.len()
    }

    /// A new cursor `n` items further on. The receiver is left untouched.
    #[inline]
    pub fn advance(self, n: usize) -> Self {
        debug_assert!(self.index + n <= self.input.len(), "cursor advanced past end of input");
        Self {
            input: self.input,
            index: self.index + n,
        }
    }

    pub fn preview(&self, max: usize) -> String {
        self.input.preview(self.index, max)
    }
}

impl<'i> Cursor<'i, str> {
    /// The unconsumed remainder of the text
    #[inline]
    pub fn rest(&self) -> &'i str {
        self.input.get(self.index..).unwrap_or_default()
    }
}

impl<'i, T: fmt::Debug> Cursor<'i, [T]> {
    /// The unconsumed remainder of the slice
    #[inline]
    pub fn rest(&self) -> &'i [T] {
        self.input.get(self.index..).unwrap_or_default()
    }

    #[inline]
    pub fn peek(&self) -> Option<&'i T> {
        self.input.get(self.index)
    }
}

impl<'i> From<&'i str> for Cursor<'i, str> {
    #[inline]
    fn from(s: &'i str) -> Self {
        Cursor::new(s)
    }
}

impl<'i, T: fmt::Debug> From<&'i [T]> for Cursor<'i, [T]> {
    #[inline]
    fn from(s: &'i [T]) -> Self {
        Cursor::new(s)
    }
}

// equal when positioned at the same index of equal inputs
impl<'i, I: PartialEq + ?Sized> PartialEq for Cursor<'i, I> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && (std::ptr::eq(self.input, other.input) || self.input == other.input)
    }
}

impl<'i, I: Input + ?Sized> fmt::Debug for Cursor<'i, I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("rest", &self.preview(20))
            .finish()
    }
}

impl<'i, I: Input + ?Sized> fmt::Display for Cursor<'i, I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.index, util::formatter_str(&self.preview(33)).trim_end())
    }
}
