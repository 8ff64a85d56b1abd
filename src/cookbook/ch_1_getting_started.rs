//! Getting started
//!
//! ```
//! use chainweave::prelude::*;
//!
//! let number = between(literal("("), literal(")"), digits());
//! assert_eq!(run("(42)", &number).unwrap().1, "42");
//! ```
//!
//! Running the chapter tests with tracing
//!
//! RUST_LOG=cw=trace cargo test --features cookbook ch_1 -- --nocapture
//!
use crate::prelude::*;
use once_cell::sync::Lazy;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z]+").expect("word regex"));

#[derive(Debug, PartialEq)]
pub enum Token<'i> {
    Number(i64),
    Word(&'i str),
}

/// A number or a lower case word
pub fn token<'i>() -> impl Parser<'i, str, Output = Token<'i>> {
    choice((
        digits().parse_as::<i64>().map(Token::Number),
        pattern(WORD.clone()).map(Token::Word),
    ))
}

/// Tokens separated by whitespace
pub fn tokens<'i>() -> impl Parser<'i, str, Output = Vec<Token<'i>>> {
    sep_by(ws(), token())
}
