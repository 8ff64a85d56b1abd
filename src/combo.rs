//! The functor/monad/applicative core: everything else is built from these shapes.
use std::marker::PhantomData;

use crate::cursor::{Cursor, Input};
use crate::error::{ErrorKind, ParseError};
use crate::logging::Loggable;
use crate::parser::{ParseResult, Parser};
use crate::LABEL;

pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        Self { parser, f }
    }
}

impl<'i, I, P, F, U> Parser<'i, I> for Map<P, F>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    #[inline]
    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, U> {
        let (cursor, value) = self.parser.parse(cursor)?;
        Ok((cursor, (self.f)(value)))
    }
}

/// Monadic bind: the value parsed so far picks the parser that runs next
pub struct Chain<P, F> {
    parser: P,
    f: F,
}

impl<P, F> Chain<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        Self { parser, f }
    }
}

impl<'i, I, P, F, P2> Parser<'i, I> for Chain<P, F>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'i, I>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, P2::Output> {
        let (cursor, value) = self.parser.parse(cursor)?;
        (self.f)(value).parse(cursor)
    }
}

pub struct Ap<PF, PA> {
    function: PF,
    argument: PA,
}

impl<'i, I, PF, PA, F, U> Parser<'i, I> for Ap<PF, PA>
where
    I: Input + ?Sized + 'i,
    PF: Parser<'i, I, Output = F>,
    PA: Parser<'i, I>,
    F: FnOnce(PA::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, U> {
        let (cursor, f) = self.function.parse(cursor)?;
        let (cursor, a) = self.argument.parse(cursor)?;
        Ok((cursor, f(a)))
    }
}

pub struct MapError<P, F> {
    parser: P,
    f: F,
}

impl<P, F> MapError<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        Self { parser, f }
    }
}

impl<'i, I, P, F> Parser<'i, I> for MapError<P, F>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
    F: Fn(ParseError) -> ParseError,
{
    type Output = P::Output;

    #[inline]
    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, P::Output> {
        self.parser.parse(cursor).map_err(&self.f)
    }
}

#[derive(Clone, Debug)]
pub struct Succeed<T> {
    value: T,
}

impl<'i, I, T> Parser<'i, I> for Succeed<T>
where
    I: Input + ?Sized + 'i,
    T: Clone,
{
    type Output = T;

    #[inline]
    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, T> {
        Ok((cursor, self.value.clone()))
    }
}

#[derive(Clone, Debug)]
pub struct Fail<T> {
    error: ParseError,
    pd: PhantomData<fn() -> T>,
}

impl<'i, I, T> Parser<'i, I> for Fail<T>
where
    I: Input + ?Sized + 'i,
{
    type Output = T;

    #[inline]
    fn parse(&self, _cursor: Cursor<'i, I>) -> ParseResult<'i, I, T> {
        Err(self.error.clone())
    }
}

pub struct Label<P> {
    parser: P,
    name: &'static str,
}

impl<P> Label<P> {
    pub fn new(parser: P, name: &'static str) -> Self {
        Self { parser, name }
    }
}

impl<'i, I, P> Parser<'i, I> for Label<P>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, P::Output> {
        let outer = LABEL.with(|l| l.replace(self.name));
        cursor.log_inputs("label", self.name);
        let result = self.parser.parse(cursor).map_err(|e| {
            ParseError::new(ErrorKind::Rule(self.name.into()), format!("expected {}", self.name))
                .at(cursor.index())
                .caused_by(e)
        });
        if let Err(e) = &result {
            cursor.log_failure("label", self.name, e);
        }
        LABEL.with(|l| l.set(outer));
        result
    }
}

#[inline]
pub fn map<'i, I, P, F, U>(parser: P, f: F) -> Map<P, F>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, f)
}

#[inline]
pub fn chain<'i, I, P, F, P2>(parser: P, f: F) -> Chain<P, F>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'i, I>,
{
    Chain::new(parser, f)
}

/// Runs `function` then `argument`, applying one to the other.
/// Chaining `ap` calls sequences any number of parsers with a curried function.
#[inline]
pub fn ap<PF, PA>(function: PF, argument: PA) -> Ap<PF, PA> {
    Ap { function, argument }
}

#[inline]
pub fn map_error<'i, I, P, F>(parser: P, f: F) -> MapError<P, F>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
    F: Fn(ParseError) -> ParseError,
{
    MapError::new(parser, f)
}

#[inline]
pub fn bimap<'i, I, P, F, G, U>(parser: P, f: F, g: G) -> MapError<Map<P, F>, G>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
    F: Fn(P::Output) -> U,
    G: Fn(ParseError) -> ParseError,
{
    MapError::new(Map::new(parser, f), g)
}

/// Always succeeds with `value`, consuming nothing.
///
/// `Succeed` is a parser for every input type, so the method forms (`succeed(v).map(..)`)
/// need the input pinned, e.g. `map::<str, _, _, _>(succeed(v), ..)`.
#[inline]
pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed { value }
}

/// Always fails with `error`, consuming nothing.
/// As with [`succeed`], method forms need the input type pinned.
#[inline]
pub fn fail<T>(error: ParseError) -> Fail<T> {
    Fail {
        error,
        pd: PhantomData,
    }
}

#[inline]
pub fn label<'i, I, P>(parser: P, name: &'static str) -> Label<P>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
{
    Label::new(parser, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::failure;
    use crate::parser::run;
    use crate::text_parser::{digits, literal};
    use test_log::test;

    fn id<T>(t: T) -> T {
        t
    }

    #[test]
    fn test_map() {
        let p = digits().map(|s| s.len());
        let (c, n) = run("1234x", &p).unwrap();
        assert_eq!(n, 4);
        assert_eq!(c.rest(), "x");

        // failure passes through untouched
        assert_eq!(run("x", &p).unwrap_err(), run("x", &digits()).unwrap_err());
    }

    #[test]
    fn test_map_and_map_error_identity() {
        for input in ["42", "x", ""] {
            assert_eq!(run(input, &map(digits(), id)), run(input, &digits()));
            assert_eq!(run(input, &map_error(digits(), id)), run(input, &digits()));
        }
    }

    #[test]
    fn test_chain() {
        // the first digit says how many 'a's follow
        let p = chain(pattern_digit(), |n: usize| {
            move |c: Cursor<'static, str>| -> ParseResult<'static, str, usize> {
                match c.rest().get(..n) {
                    Some(head) if head.chars().all(|ch| ch == 'a') => Ok((c.advance(n), n)),
                    _ => Err(failure(ErrorKind::Custom("count".into()), "too few a's").at(c.index())),
                }
            }
        });
        let (c, n) = run("3aaab", &p).unwrap();
        assert_eq!(n, 3);
        assert_eq!(c.rest(), "b");
        assert_eq!(run("4aaab", &p).unwrap_err().position(), Some(1));

        // the first failure short circuits and is returned as is
        let e = run("x", &p).unwrap_err();
        assert_eq!(e, run("x", &pattern_digit()).unwrap_err());
    }

    fn pattern_digit<'i>() -> impl Parser<'i, str, Output = usize> {
        digits().parse_as::<usize>()
    }

    #[test]
    fn test_ap() {
        let add = literal("+").map(|_| |(a, b): (i32, i32)| a + b);
        let pair = crate::sequence::sequence_of((
            digits().parse_as::<i32>(),
            literal(","),
            digits().parse_as::<i32>(),
        ))
        .map(|(a, _, b)| (a, b));
        let (c, sum) = run("+1,2;", &ap(add, pair)).unwrap();
        assert_eq!(sum, 3);
        assert_eq!(c.rest(), ";");

        // curried functions sequence several parsers
        let curried = map::<str, _, _, _>(succeed(()), |_| |a: i32| move |b: &str| format!("{a}{b}"));
        let p = ap(ap(curried, digits().parse_as::<i32>()), literal("!"));
        assert_eq!(run("7!", &p).unwrap().1, "7!");

        let e = run("-12", &ap(literal("+").map(|_| |x: i32| x), digits().parse_as::<i32>())).unwrap_err();
        assert_eq!(e.kind(), &ErrorKind::Literal);

        // the function parsed, then the argument failed: its error comes back as is
        let e = run("+x", &ap(literal("+").map(|_| |x: i32| x), digits().parse_as::<i32>())).unwrap_err();
        let argument_error = digits().parse(Cursor::new("+x").advance(1)).unwrap_err();
        assert_eq!(e, argument_error);
        assert_eq!(e.kind(), &ErrorKind::Pattern);
        assert_eq!(e.position(), Some(1));
    }

    #[test]
    fn test_bimap() {
        let p = bimap(
            digits(),
            |s| s.len(),
            |e| failure(ErrorKind::Custom("number".into()), e.message()).at(99),
        );
        assert_eq!(run("12", &p).unwrap().1, 2);
        let e = run("ab", &p).unwrap_err();
        assert_eq!(e.kind().as_str(), "number");
        assert_eq!(e.position(), Some(99));
    }

    #[test]
    fn test_succeed_and_fail() {
        let (c, v) = run("abc", &succeed(5)).unwrap();
        assert_eq!(v, 5);
        assert_eq!(c.index(), 0);

        let err = failure(ErrorKind::Custom("nope".into()), "never matches");
        let e = run("abc", &fail::<()>(err.clone())).unwrap_err();
        assert_eq!(e, err);
    }

    #[test]
    fn test_label() {
        let p = label(literal("("), "open paren");
        assert_eq!(run("(", &p).unwrap().1, "(");

        let e = run("x(", &p.map(|_| ())).unwrap_err();
        assert_eq!(e.kind(), &ErrorKind::Rule("open paren".into()));
        assert_eq!(e.message(), "expected open paren");
        assert_eq!(e.position(), Some(0));
        assert_eq!(e.cause().unwrap().errors()[0].kind(), &ErrorKind::Literal);

        // the label is restored once the rule finishes
        assert_eq!(LABEL.with(|l| l.get()), "");
    }
}
