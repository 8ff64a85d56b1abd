use crate::cursor::{Cursor, Input};
use crate::logging::Loggable;
use crate::parser::{ParseResult, Parser};

/// Runs parsers left to right, threading the cursor through.
///
/// A tuple of parsers yields a tuple of values; a `Vec` of parsers sharing one
/// output type yields a `Vec`. The first failure aborts the whole sequence and is
/// returned unchanged, any partial results are dropped.
pub struct Sequence<Ps> {
    parsers: Ps,
}

#[inline]
pub fn sequence_of<Ps>(parsers: Ps) -> Sequence<Ps> {
    Sequence { parsers }
}

macro_rules! sequence_tuple {
    ($($p:ident $v:ident),+) => {
        impl<'i, I, $($p),+> Parser<'i, I> for Sequence<($($p,)+)>
        where
            I: Input + ?Sized + 'i,
            $($p: Parser<'i, I>),+
        {
            type Output = ($($p::Output,)+);

            #[allow(non_snake_case)]
            fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, Self::Output> {
                cursor.log_inputs("sequence_of", [$(stringify!($p)),+].len());
                let ($($p,)+) = &self.parsers;
                $(let (cursor, $v) = $p.parse(cursor)?;)+
                Ok((cursor, ($($v,)+)))
            }
        }
    };
}

sequence_tuple!(P1 v1);
sequence_tuple!(P1 v1, P2 v2);
sequence_tuple!(P1 v1, P2 v2, P3 v3);
sequence_tuple!(P1 v1, P2 v2, P3 v3, P4 v4);
sequence_tuple!(P1 v1, P2 v2, P3 v3, P4 v4, P5 v5);
sequence_tuple!(P1 v1, P2 v2, P3 v3, P4 v4, P5 v5, P6 v6);
sequence_tuple!(P1 v1, P2 v2, P3 v3, P4 v4, P5 v5, P6 v6, P7 v7);
sequence_tuple!(P1 v1, P2 v2, P3 v3, P4 v4, P5 v5, P6 v6, P7 v7, P8 v8);

impl<'i, I, P> Parser<'i, I> for Sequence<Vec<P>>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'i, I>) -> ParseResult<'i, I, Self::Output> {
        cursor.log_inputs("sequence_of", self.parsers.len());
        let mut values = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            let (next, value) = parser.parse(cursor)?;
            values.push(value);
            cursor = next;
        }
        Ok((cursor, values))
    }
}

/// `content` enclosed by `left` and `right`, keeping only the content's value
pub struct Between<L, C, R> {
    inner: Sequence<(L, C, R)>,
}

impl<'i, I, L, C, R> Parser<'i, I> for Between<L, C, R>
where
    I: Input + ?Sized + 'i,
    L: Parser<'i, I>,
    C: Parser<'i, I>,
    R: Parser<'i, I>,
{
    type Output = C::Output;

    #[inline]
    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, C::Output> {
        let (cursor, (_, value, _)) = self.inner.parse(cursor)?;
        Ok((cursor, value))
    }
}

#[inline]
pub fn between<L, R, C>(left: L, right: R, content: C) -> Between<L, C, R> {
    Between {
        inner: sequence_of((left, content, right)),
    }
}
