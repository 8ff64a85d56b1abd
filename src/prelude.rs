pub use crate::cw;
pub use crate::cw::*;
pub use crate::*;
pub use regex::Regex;
