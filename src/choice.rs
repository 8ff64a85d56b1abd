use crate::cursor::{Cursor, Input};
use crate::error::{Cause, ErrorKind, ParseError};
use crate::logging::Loggable;
use crate::parser::{ParseResult, Parser};

/// Ordered alternation: first success wins.
///
/// Every alternative starts from the same cursor, so nothing needs rewinding.
/// Alternatives are a tuple of parsers with a common output type, or a `Vec`.
pub struct Choice<Ps> {
    alternatives: Ps,
}

#[inline]
pub fn choice<Ps>(alternatives: Ps) -> Choice<Ps> {
    Choice { alternatives }
}

/// The composite error for when every alternative failed
fn exhausted<I: Input + ?Sized>(cursor: Cursor<'_, I>, errors: Vec<ParseError>) -> ParseError {
    let e = ParseError::new(
        ErrorKind::Choice,
        format!("no alternative matched at index {}", cursor.index()),
    )
    .at(cursor.index());
    let e = match Cause::from_errors(errors) {
        Some(cause) => e.with_cause(cause),
        None => e,
    };
    cursor.log_failure("choice", "", &e);
    e
}

macro_rules! choice_tuple {
    ($($p:ident),+) => {
        impl<'i, I, T, $($p),+> Parser<'i, I> for Choice<($($p,)+)>
        where
            I: Input + ?Sized + 'i,
            $($p: Parser<'i, I, Output = T>),+
        {
            type Output = T;

            #[allow(non_snake_case)]
            fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, T> {
                cursor.log_inputs("choice", [$(stringify!($p)),+].len());
                let ($($p,)+) = &self.alternatives;
                let mut errors = vec![];
                $(
                    match $p.parse(cursor) {
                        Ok(success) => return Ok(success),
                        Err(e) => errors.push(e),
                    }
                )+
                Err(exhausted(cursor, errors))
            }
        }
    };
}

choice_tuple!(P1);
choice_tuple!(P1, P2);
choice_tuple!(P1, P2, P3);
choice_tuple!(P1, P2, P3, P4);
choice_tuple!(P1, P2, P3, P4, P5);
choice_tuple!(P1, P2, P3, P4, P5, P6);
choice_tuple!(P1, P2, P3, P4, P5, P6, P7);
choice_tuple!(P1, P2, P3, P4, P5, P6, P7, P8);

impl<'i, I, P> Parser<'i, I> for Choice<Vec<P>>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, P::Output> {
        cursor.log_inputs("choice", self.alternatives.len());
        let mut errors = Vec::with_capacity(self.alternatives.len());
        for p in &self.alternatives {
            match p.parse(cursor) {
                Ok(success) => return Ok(success),
                Err(e) => errors.push(e),
            }
        }
        Err(exhausted(cursor, errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{run, BoxedParser};
    use crate::sequence::sequence_of;
    use crate::text_parser::{digits, literal};
    use regex::Regex;
    use test_log::test;

    #[test]
    fn test_first_match_wins() {
        // both can match; declaration order decides, not match length
        let p = choice((literal("a"), literal("ab")));
        let (c, v) = run("abc", &p).unwrap();
        assert_eq!(v, "a");
        assert_eq!(c.index(), 1);
        assert_eq!(run("abc", &p), run("abc", &literal("a")));

        let swapped = choice((literal("ab"), literal("a")));
        assert_eq!(run("abc", &swapped).unwrap().1, "ab");
    }

    #[test]
    fn test_falls_through_to_later_alternative() {
        let p = choice((literal("x"), digits(), literal("1")));
        assert_eq!(run("123", &p), run("123", &digits()));
    }

    #[test]
    fn test_backtracks_from_same_cursor() {
        // the first alternative consumes "ab" before failing, the second still starts at 0
        let p = choice((
            sequence_of((literal("a"), literal("b"), literal("c"))).map(|_| "abc"),
            sequence_of((literal("a"), literal("b"))).map(|_| "ab"),
        ));
        let (c, v) = run("abd", &p).unwrap();
        assert_eq!(v, "ab");
        assert_eq!(c.rest(), "d");
    }

    #[test]
    fn test_all_fail_aggregates_in_order() {
        let p = choice((literal("a"), literal("b"), digits()));
        let c = Cursor::new("zz?").advance(2);
        let e = p.parse(c).unwrap_err();
        assert_eq!(e.kind(), &ErrorKind::Choice);
        assert_eq!(e.position(), Some(2));
        assert_eq!(e.message(), "no alternative matched at index 2");
        let causes = e.cause().unwrap().errors();
        assert!(matches!(e.cause(), Some(Cause::Many(_))));
        assert_eq!(causes.len(), 3);
        assert_eq!(causes[0], literal("a").parse(c).unwrap_err());
        assert_eq!(causes[1], literal("b").parse(c).unwrap_err());
        assert_eq!(causes[2].kind(), &ErrorKind::Pattern);
    }

    #[test]
    fn test_single_alternative_cause() {
        let e = run("z", &choice((literal("a"),))).unwrap_err();
        assert_eq!(
            e.cause(),
            Some(&Cause::Single(Box::new(run("z", &literal("a")).unwrap_err())))
        );
    }

    #[test]
    fn test_choice_of_vec() {
        let keywords = ["let", "fn", "if"];
        let p = choice(keywords.iter().map(|k| literal(*k)).collect::<Vec<_>>());
        assert_eq!(run("fn main", &p).unwrap().1, "fn");
        assert_eq!(run("while", &p).unwrap_err().cause().unwrap().errors().len(), 3);

        let mixed: Vec<BoxedParser<str, &str>> = vec![
            literal("0x").boxed(),
            crate::text_parser::pattern(Regex::new("[0-7]+").unwrap()).boxed(),
        ];
        assert_eq!(run("17", &choice(mixed)).unwrap().1, "17");

        let none: Vec<BoxedParser<str, &str>> = vec![];
        let e = run("x", &choice(none)).unwrap_err();
        assert_eq!(e.kind(), &ErrorKind::Choice);
        assert!(e.is_leaf());
    }
}
