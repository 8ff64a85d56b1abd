#![warn(clippy::all)]
#![warn(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]
#![allow(mixed_script_confusables)]
/*!
# Chainweave
- a parser combinator engine: small parsers are composed into grammars with plain functions
- parsers are pure: a parser maps an immutable [`Cursor`](cw::Cursor) to a
  [`ParseResult`](cw::ParseResult), so backtracking is free and parsers can be reused on any input
- failures are values ([`ParseError`](cw::ParseError)) that form a diagnostic tree, never panics

```
use chainweave::prelude::*;

let item = digits().parse_as::<i32>();
let list = between(literal("["), literal("]"), sep_by(literal(","), item));
let (c, values) = run("[1,2,3]", &list).unwrap();
assert_eq!(values, vec![1, 2, 3]);
assert!(c.is_eos());
```

# Logging
Every combinator traces what it is doing. In tests use `test-log` and
```sh
RUST_LOG=cw=trace cargo test mytest -- --nocapture
```
*/

use std::cell::Cell;

mod choice;
mod combo;
mod cursor;
mod error;
mod logging;
mod parser;
mod recursive;
mod repeat;
mod sequence;
mod text_parser;
mod util;

pub mod prelude;

#[cfg(any(feature = "cookbook", doc))]
pub mod cookbook;

pub(crate) const LOG_TARGET: &str = "cw";

thread_local!(pub(crate) static LABEL: Cell<&'static str> = Cell::new(""));

pub use crate::choice::choice;
pub use crate::combo::{ap, bimap, chain, fail, label, map, map_error, succeed};
pub use crate::parser::{run, shared, Parser};
pub use crate::recursive::{lazy, optional};
pub use crate::repeat::{many, many_one, sep_by};
pub use crate::sequence::{between, sequence_of};
pub use crate::text_parser::{digits, literal, pattern, satisfy, ws};

pub mod cw {
    pub use crate::cursor::{Cursor, Input};
    pub use crate::error::{failure, Cause, ErrorKind, ParseError};
    pub use crate::parser::{BoxedParser, ParseResult};
}

/// The combinator types, for naming a parser's concrete type
pub mod combinators {
    pub use crate::choice::Choice;
    pub use crate::combo::{Ap, Chain, Fail, Label, Map, MapError, Succeed};
    pub use crate::parser::{ByRef, Shared};
    pub use crate::recursive::{Lazy, Optional};
    pub use crate::repeat::{Many, ManyOne, SepBy};
    pub use crate::sequence::{Between, Sequence};
    pub use crate::text_parser::{Literal, ParseAs, Pattern, Satisfy};
}
