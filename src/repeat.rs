//! Repetition.
//!
//! None of these guard against a parser that succeeds without consuming input:
//! repeating such a parser never terminates. Callers must hand over parsers that
//! strictly advance the cursor on success.
use crate::cursor::{Cursor, Input};
use crate::error::{ErrorKind, ParseError};
use crate::logging::Loggable;
use crate::parser::{ParseResult, Parser};

/// Applies `parser` until it fails, collecting into `values`.
/// Returns the cursor after the last success; the final failure is dropped.
fn repeat_from<'i, I, P>(parser: &P, mut cursor: Cursor<'i, I>, values: &mut Vec<P::Output>) -> Cursor<'i, I>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
{
    while let Ok((next, value)) = parser.parse(cursor) {
        values.push(value);
        cursor = next;
    }
    cursor
}

pub struct Many<P> {
    parser: P,
}

impl<'i, I, P> Parser<'i, I> for Many<P>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, Self::Output> {
        cursor.log_inputs("many", "");
        let mut values = vec![];
        let cursor = repeat_from(&self.parser, cursor, &mut values);
        cursor.log_success("many", values.len());
        Ok((cursor, values))
    }
}

/// Zero or more. Never fails.
#[inline]
pub fn many<P>(parser: P) -> Many<P> {
    Many { parser }
}

pub struct ManyOne<P> {
    parser: P,
}

impl<'i, I, P> Parser<'i, I> for ManyOne<P>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, Self::Output> {
        cursor.log_inputs("many_one", "");
        match self.parser.parse(cursor) {
            Ok((next, first)) => {
                let mut values = vec![first];
                let next = repeat_from(&self.parser, next, &mut values);
                next.log_success("many_one", values.len());
                Ok((next, values))
            }
            Err(cause) => {
                let e = ParseError::new(ErrorKind::ManyOne, "expected at least one match")
                    .at(cursor.index())
                    .caused_by(cause);
                cursor.log_failure("many_one", "", &e);
                Err(e)
            }
        }
    }
}

/// One or more. Fails exactly when the first application fails.
#[inline]
pub fn many_one<P>(parser: P) -> ManyOne<P> {
    ManyOne { parser }
}

pub struct SepBy<S, P> {
    separator: S,
    item: P,
}

impl<'i, I, S, P> Parser<'i, I> for SepBy<S, P>
where
    I: Input + ?Sized + 'i,
    S: Parser<'i, I>,
    P: Parser<'i, I>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, Self::Output> {
        cursor.log_inputs("sep_by", "");
        let (mut cursor, first) = match self.item.parse(cursor) {
            Ok(success) => success,
            Err(..) => return Ok((cursor, vec![])),
        };
        let mut values = vec![first];
        loop {
            let Ok((after_sep, _)) = self.separator.parse(cursor) else {
                break;
            };
            let Ok((next, value)) = self.item.parse(after_sep) else {
                break;
            };
            values.push(value);
            cursor = next;
        }
        cursor.log_success("sep_by", values.len());
        Ok((cursor, values))
    }
}

/// Items separated by `separator`. Never fails: no leading item gives an empty `Vec`,
/// and a dangling separator is left unconsumed.
#[inline]
pub fn sep_by<S, P>(separator: S, item: P) -> SepBy<S, P> {
    SepBy { separator, item }
}
