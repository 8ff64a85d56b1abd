//! Slice input and context sensitive parsing
//!
//! Parsers are generic over the input, so the same combinators work on `&[u8]`.
//! Here a record is a length byte followed by that many payload bytes: the length is
//! only known once it has been parsed, which is what [`chain`](crate::Parser::chain) is for.
//!
use crate::prelude::*;

/// Exactly `n` elements of slice input
pub struct Take(pub usize);

impl<'i, T: std::fmt::Debug + 'i> Parser<'i, [T]> for Take {
    type Output = &'i [T];

    fn parse(&self, c: Cursor<'i, [T]>) -> ParseResult<'i, [T], &'i [T]> {
        let rest = c.rest();
        if rest.len() < self.0 {
            return Err(failure(
                ErrorKind::Custom("take".into()),
                format!("wanted {} elements but only {} remain", self.0, rest.len()),
            )
            .at(c.index()));
        }
        Ok((c.advance(self.0), &rest[..self.0]))
    }
}

fn any_byte<'i>() -> impl Parser<'i, [u8], Output = u8> {
    satisfy("byte", |_: &u8| true).map(|b: &u8| *b)
}

/// `len payload[len]`
pub fn record<'i>() -> impl Parser<'i, [u8], Output = &'i [u8]> {
    any_byte().chain(|len| Take(len as usize))
}

/// Records up to the terminating zero byte
pub fn records<'i>() -> impl Parser<'i, [u8], Output = Vec<&'i [u8]>> {
    let terminator = satisfy("terminator", |b: &u8| *b == 0);
    sequence_of((many(satisfy("length", |b: &u8| *b != 0).chain(|len: &u8| Take(*len as usize))), terminator))
        .map(|(records, _)| records)
}
