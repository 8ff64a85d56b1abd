use std::rc::Rc;
use std::str::FromStr;

use crate::combo::{Chain, Label, Map, MapError};
use crate::cursor::{Cursor, Input};
use crate::error::ParseError;
use crate::text_parser::ParseAs;

/// `Ok((advanced cursor, value))` or `Err(failure)`
pub type ParseResult<'i, I, T> = Result<(Cursor<'i, I>, T), ParseError>;

/// A type-erased parser. Needed wherever a grammar rule refers back to itself
/// through a named function, since `impl Parser` return types cannot be recursive.
pub type BoxedParser<'i, I, T> = Box<dyn Parser<'i, I, Output = T> + 'i>;

/// A parser is a pure function from a cursor to a [`ParseResult`].
///
/// Any `Fn(Cursor) -> ParseResult` is a parser, so leaf parsers can be written as plain functions:
///
/// ```
/// use chainweave::prelude::*;
///
/// fn comma<'i>(c: Cursor<'i, str>) -> ParseResult<'i, str, char> {
///     match c.rest().starts_with(',') {
///         true => Ok((c.advance(1), ',')),
///         false => Err(failure(ErrorKind::Literal, "expected ','").at(c.index())),
///     }
/// }
///
/// let (c, values) = run("1,2,3", &sep_by(comma, digits())).unwrap();
/// assert_eq!(values, vec!["1", "2", "3"]);
/// assert!(c.is_eos());
/// ```
pub trait Parser<'i, I: Input + ?Sized + 'i> {
    type Output;

    /// Attempt a parse starting at `cursor`. Must not panic on any input.
    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, Self::Output>;

    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, f)
    }

    fn chain<P, F>(self, f: F) -> Chain<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> P,
        P: Parser<'i, I>,
    {
        Chain::new(self, f)
    }

    fn map_error<F>(self, f: F) -> MapError<Self, F>
    where
        Self: Sized,
        F: Fn(ParseError) -> ParseError,
    {
        MapError::new(self, f)
    }

    fn bimap<U, F, G>(self, f: F, g: G) -> MapError<Map<Self, F>, G>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
        G: Fn(ParseError) -> ParseError,
    {
        MapError::new(Map::new(self, f), g)
    }

    /// Names this rule in failures and trace logs
    fn label(self, name: &'static str) -> Label<Self>
    where
        Self: Sized,
    {
        Label::new(self, name)
    }

    /// Reads the matched text through [`FromStr`]
    fn parse_as<T>(self) -> ParseAs<Self, T>
    where
        Self: Sized,
        Self::Output: AsRef<str>,
        T: FromStr,
    {
        ParseAs::new(self)
    }

    /// Borrows this parser, so one value can sit inside several combinators
    fn by_ref(&self) -> ByRef<'_, Self>
    where
        Self: Sized,
    {
        ByRef { parser: self }
    }

    fn boxed(self) -> BoxedParser<'i, I, Self::Output>
    where
        Self: Sized + 'i,
    {
        Box::new(self)
    }
}

impl<'i, I, T, F> Parser<'i, I> for F
where
    I: Input + ?Sized + 'i,
    F: Fn(Cursor<'i, I>) -> ParseResult<'i, I, T>,
{
    type Output = T;

    #[inline]
    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, T> {
        (self)(cursor)
    }
}

impl<'i, 'p, I, T> Parser<'i, I> for Box<dyn Parser<'i, I, Output = T> + 'p>
where
    I: Input + ?Sized + 'i,
{
    type Output = T;

    #[inline]
    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, T> {
        (**self).parse(cursor)
    }
}

pub struct ByRef<'p, P: ?Sized> {
    parser: &'p P,
}

impl<'p, P: ?Sized> Clone for ByRef<'p, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'p, P: ?Sized> Copy for ByRef<'p, P> {}

impl<'i, 'p, I, P> Parser<'i, I> for ByRef<'p, P>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I> + ?Sized,
{
    type Output = P::Output;

    #[inline]
    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, P::Output> {
        self.parser.parse(cursor)
    }
}

/// A reference counted parser: clones share the one parser
pub struct Shared<P: ?Sized> {
    parser: Rc<P>,
}

impl<P: ?Sized> Clone for Shared<P> {
    fn clone(&self) -> Self {
        Self {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<P: ?Sized> From<Rc<P>> for Shared<P> {
    fn from(parser: Rc<P>) -> Self {
        Self { parser }
    }
}

impl<'i, I, P> Parser<'i, I> for Shared<P>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I> + ?Sized,
{
    type Output = P::Output;

    #[inline]
    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, P::Output> {
        self.parser.parse(cursor)
    }
}

#[inline]
pub fn shared<P>(parser: P) -> Shared<P> {
    Shared {
        parser: Rc::new(parser),
    }
}

/// Runs `parser` from the start of `input`
pub fn run<'i, I, P>(input: &'i I, parser: &P) -> ParseResult<'i, I, P::Output>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
{
    parser.parse(Cursor::new(input))
}
