//! Leaf parsers: the only parsers that look at input directly.
use std::{fmt::Debug, marker::PhantomData, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    cursor::{Cursor, Input},
    error::{failure, ErrorKind},
    logging::Loggable,
    parser::{ParseResult, Parser},
    util,
};

const FOUND_WIDTH: usize = 10;

#[derive(Clone, Debug)]
pub struct Literal<S> {
    expected: S,
}

impl<'i, S: AsRef<str>> Parser<'i, str> for Literal<S> {
    type Output = &'i str;

    fn parse(&self, cursor: Cursor<'i, str>) -> ParseResult<'i, str, &'i str> {
        let expected = self.expected.as_ref();
        let rest = cursor.rest();
        if rest.starts_with(expected) {
            let next = cursor.advance(expected.len());
            next.log_success("literal", expected);
            return Ok((next, &rest[..expected.len()]));
        }
        let e = failure(
            ErrorKind::Literal,
            format!("expected {expected:?} but found {:?}", cursor.preview(FOUND_WIDTH)),
        )
        .at(cursor.index());
        cursor.log_failure("literal", expected, &e);
        Err(e)
    }
}

/// Matches `expected` exactly
#[inline]
pub fn literal<S: AsRef<str>>(expected: S) -> Literal<S> {
    Literal { expected }
}

#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
}

impl<'i> Parser<'i, str> for Pattern {
    type Output = &'i str;

    fn parse(&self, cursor: Cursor<'i, str>) -> ParseResult<'i, str, &'i str> {
        let index = cursor.index();
        match self.regex.find_at(cursor.input(), index) {
            Some(m) if m.start() == index => {
                let next = cursor.advance(m.end() - index);
                next.log_success("pattern", self.regex.as_str());
                Ok((next, m.as_str()))
            }
            _ => {
                let e = failure(
                    ErrorKind::Pattern,
                    format!("{:?} does not match /{}/", cursor.preview(FOUND_WIDTH), self.regex),
                )
                .at(cursor.index());
                cursor.log_failure("pattern", self.regex.as_str(), &e);
                Err(e)
            }
        }
    }
}

/// Matches `regex` starting exactly at the cursor.
///
/// The regex sees the whole input, so `\b` and friends judge the text before the cursor
/// correctly, and `^` only ever matches at index 0.
///
/// A pattern that can match the empty string succeeds without advancing,
/// so never hand one to [`many`](crate::many) or [`many_one`](crate::many_one).
#[inline]
pub fn pattern(regex: Regex) -> Pattern {
    Pattern { regex }
}

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("digits regex"));
static WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// One or more ascii digits
pub fn digits() -> Pattern {
    pattern(DIGITS.clone())
}

/// One or more whitespace chars. Wrap in [`optional`](crate::optional) where whitespace may be absent.
pub fn ws() -> Pattern {
    pattern(WS.clone())
}

pub struct Satisfy<F> {
    description: &'static str,
    predicate: F,
}

impl<'i, T, F> Parser<'i, [T]> for Satisfy<F>
where
    T: Debug + 'i,
    F: Fn(&T) -> bool,
{
    type Output = &'i T;

    fn parse(&self, cursor: Cursor<'i, [T]>) -> ParseResult<'i, [T], &'i T> {
        match cursor.peek() {
            Some(t) if (self.predicate)(t) => {
                let next = cursor.advance(1);
                next.log_success("satisfy", self.description);
                Ok((next, t))
            }
            found => {
                let e = failure(
                    ErrorKind::Custom(self.description.into()),
                    format!("expected {} but found {found:?}", self.description),
                )
                .at(cursor.index());
                cursor.log_failure("satisfy", self.description, &e);
                Err(e)
            }
        }
    }
}

/// Matches one element of slice input for which `predicate` holds
#[inline]
pub fn satisfy<T, F: Fn(&T) -> bool>(description: &'static str, predicate: F) -> Satisfy<F> {
    Satisfy {
        description,
        predicate,
    }
}

/// Converts matched text with [`FromStr`]; fails without consuming when conversion fails
pub struct ParseAs<P, T> {
    parser: P,
    pd: PhantomData<fn() -> T>,
}

impl<P, T> ParseAs<P, T> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            pd: PhantomData,
        }
    }
}

impl<'i, I, P, T> Parser<'i, I> for ParseAs<P, T>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
    P::Output: AsRef<str>,
    T: FromStr,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, T> {
        let (next, text) = self.parser.parse(cursor)?;
        let text = text.as_ref();
        match text.parse::<T>() {
            Ok(t) => Ok((next, t)),
            Err(..) => {
                let target = util::type_suffix(std::any::type_name::<T>());
                let e = failure(
                    ErrorKind::Custom("FromStr".into()),
                    format!("cannot read {text:?} as {target}"),
                )
                .at(cursor.index());
                cursor.log_failure("parse_as", target, &e);
                Err(e)
            }
        }
    }
}
