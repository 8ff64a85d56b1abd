//! An arithmetic calculator
//!
//! ```text
//! program    = expression (";" expression)*
//! expression = term (("+" | "-") term)*
//! term       = factor (("*" | "/") factor)*
//! factor     = number | "(" expression ")"
//! ```
//!
//! `expression` mentions itself through `factor`, so it returns a boxed parser and
//! `factor` refers to it through [`lazy`](crate::lazy). Operators are read with
//! [`parse_as`](crate::Parser::parse_as) into an enum whose `FromStr` is derived by strum.
//!
use crate::prelude::*;
use once_cell::sync::Lazy;
use strum_macros::{Display, EnumString};

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+(\.[0-9]+)?").expect("number regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

impl Operator {
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

/// `p` followed by any whitespace
fn token<'i, P: Parser<'i, str>>(p: P) -> impl Parser<'i, str, Output = P::Output> {
    sequence_of((p, optional(ws()))).map(|(value, _)| value)
}

fn number<'i>() -> impl Parser<'i, str, Output = f64> {
    token(pattern(NUMBER.clone()).parse_as::<f64>())
}

fn additive<'i>() -> impl Parser<'i, str, Output = Operator> {
    token(choice((literal("+"), literal("-"))).parse_as::<Operator>())
}

fn multiplicative<'i>() -> impl Parser<'i, str, Output = Operator> {
    token(choice((literal("*"), literal("/"))).parse_as::<Operator>())
}

/// Left-associative evaluation of `first op rhs op rhs ...`
fn fold_left((first, rest): (f64, Vec<(Operator, f64)>)) -> f64 {
    rest.into_iter().fold(first, |acc, (op, rhs)| op.apply(acc, rhs))
}

fn factor<'i>() -> impl Parser<'i, str, Output = f64> {
    choice((
        number(),
        between(token(literal("(")), token(literal(")")), lazy(expression)),
    ))
    .label("factor")
}

fn term<'i>() -> impl Parser<'i, str, Output = f64> {
    sequence_of((factor(), many(sequence_of((multiplicative(), factor()))))).map(fold_left)
}

pub fn expression<'i>() -> BoxedParser<'i, str, f64> {
    sequence_of((term(), many(sequence_of((additive(), term())))))
        .map(fold_left)
        .boxed()
}

/// Expressions separated by `;`
pub fn program<'i>() -> impl Parser<'i, str, Output = Vec<f64>> {
    sequence_of((optional(ws()), sep_by(token(literal(";")), expression()))).map(|(_, values)| values)
}

/// Evaluates every expression in `text`, which must be consumed entirely
pub fn evaluate(text: &str) -> Result<Vec<f64>, ParseError> {
    let (c, values) = run(text, &program())?;
    if !c.is_eos() {
        return Err(failure(
            ErrorKind::Custom("end of input".into()),
            format!("unexpected {:?}", c.preview(10)),
        )
        .at(c.index()));
    }
    Ok(values)
}
