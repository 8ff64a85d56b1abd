use crate::cursor::{Cursor, Input};
use crate::logging::Loggable;
use crate::parser::{ParseResult, Parser};

/// Defers building a parser until it is run.
///
/// This is what lets a grammar rule mention itself, directly or through other rules:
///
/// ```
/// use chainweave::prelude::*;
///
/// // nested = "(" nested ")" | "x"
/// fn nested<'i>() -> BoxedParser<'i, str, usize> {
///     choice((
///         between(literal("("), literal(")"), lazy(nested)).map(|depth: usize| depth + 1),
///         literal("x").map(|_| 0),
///     ))
///     .boxed()
/// }
///
/// assert_eq!(run("((x))", &nested()).unwrap().1, 2);
/// ```
///
/// The factory is called on every parse. Recursion depth follows the nesting depth of the
/// input, so very deep nesting can overflow the stack.
pub struct Lazy<F> {
    factory: F,
}

impl<'i, I, F, P> Parser<'i, I> for Lazy<F>
where
    I: Input + ?Sized + 'i,
    F: Fn() -> P,
    P: Parser<'i, I>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, P::Output> {
        cursor.log_inputs("lazy", "");
        (self.factory)().parse(cursor)
    }
}

#[inline]
pub fn lazy<F>(factory: F) -> Lazy<F> {
    Lazy { factory }
}

pub struct Optional<P> {
    parser: P,
}

impl<'i, I, P> Parser<'i, I> for Optional<P>
where
    I: Input + ?Sized + 'i,
    P: Parser<'i, I>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'i, I>) -> ParseResult<'i, I, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((next, value)) => Ok((next, Some(value))),
            Err(..) => {
                cursor.log_success("optional", "absent");
                Ok((cursor, None))
            }
        }
    }
}

/// `Some` on success, otherwise `None` without consuming anything
#[inline]
pub fn optional<P>(parser: P) -> Optional<P> {
    Optional { parser }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::choice;
    use crate::parser::{run, BoxedParser};
    use crate::sequence::{between, sequence_of};
    use crate::text_parser::{digits, literal};
    use std::cell::Cell;
    use test_log::test;

    fn list<'i>() -> BoxedParser<'i, str, usize> {
        // list = "[" list* "]", counting every list
        between(literal("["), literal("]"), crate::repeat::many(lazy(list)))
            .map(|children: Vec<usize>| 1 + children.iter().sum::<usize>())
            .boxed()
    }

    #[test]
    fn test_lazy_recursion() {
        assert_eq!(run("[]", &list()).unwrap().1, 1);
        assert_eq!(run("[[][[]]]", &list()).unwrap().1, 4);
        assert!(run("[[]", &list()).is_err());
    }

    #[test]
    fn test_lazy_builds_on_each_run() {
        let built = Cell::new(0);
        let p = lazy(|| {
            built.set(built.get() + 1);
            literal("a")
        });
        assert_eq!(built.get(), 0);
        assert!(run("a", &p).is_ok());
        assert!(run("b", &p).is_err());
        assert_eq!(built.get(), 2);
    }

    #[test]
    fn test_deep_nesting_needs_stack() {
        const DEPTH: usize = 2_000;
        let input = format!("{}{}", "[".repeat(DEPTH), "]".repeat(DEPTH));
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024 * 1024)
            .spawn(move || run(input.as_str(), &list()).map(|(c, n)| (c.is_eos(), n)))
            .unwrap();
        assert_eq!(handle.join().unwrap(), Ok((true, DEPTH)));
    }

    #[test]
    fn test_optional() {
        let p = sequence_of((optional(literal("-")), digits()));
        let (_, (sign, n)) = run("-12", &p).unwrap();
        assert_eq!((sign, n), (Some("-"), "12"));
        let (_, (sign, n)) = run("12", &p).unwrap();
        assert_eq!((sign, n), (None, "12"));

        // absent leaves the cursor alone and swallows the error
        let c = Cursor::new("ab").advance(1);
        assert_eq!(optional(literal("x")).parse(c), Ok((c, None)));
    }

    #[test]
    fn test_optional_choice() {
        let sign = optional(choice((literal("+"), literal("-"))));
        assert_eq!(run("+", &sign).unwrap().1, Some("+"));
        assert_eq!(run("*", &sign).unwrap().1, None);
    }
}
