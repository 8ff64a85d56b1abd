#![allow(dead_code)]
/*!
# Cookbook
Worked grammars, from a single enclosed number up to an arithmetic calculator.

Main concepts:

# Cursor
an immutable position in the input. Parsing never moves a cursor, it returns a new one,
so trying another alternative is simply parsing again from the old cursor.

# Parser
anything implementing [`Parser`](crate::Parser). Different styles are encouraged:

- a combinator expression returned from a function, `fn number<'i>() -> impl Parser<'i, str, Output = f64>`
- a plain function `fn(Cursor) -> ParseResult`, for hand-written leaves
- a struct with its own `Parser` impl

A composition pattern is typical, with small parsers handling constituent tokens, being
combined by the parsers of larger structures in turn. Rules that refer back to themselves
return a [`BoxedParser`](crate::cw::BoxedParser) and are mentioned through [`lazy`](crate::lazy).

# Testing

Failures are [`ParseError`](crate::cw::ParseError) trees. `{:#}` prints the whole tree, and
[`ParseError::furthest`](crate::cw::ParseError::furthest) is usually the most useful leaf to report.

Using a logging framework in test-harnesses is encouraged

```toml
[dev-dependencies]
env_logger = "0.10"
test-log = {version = "0.2"}
```

This will allow the action of parsing to be traced with
```sh
RUST_LOG=cw=trace cargo test --features cookbook mytest -- --nocapture
```

*/

pub mod ch_1_getting_started;
pub mod ch_2_calculator;
pub mod ch_3_binary_input;
