use std::{borrow::Cow, error::Error, fmt};

/// What went wrong. Leaf parsers report `Literal`/`Pattern`/`Custom`,
/// combinators report `Choice`/`ManyOne`, and [`label`](crate::label) reports `Rule`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Literal,
    Pattern,
    Choice,
    ManyOne,
    Rule(Cow<'static, str>),
    Custom(Cow<'static, str>),
}

impl ErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal => "literal",
            Self::Pattern => "pattern",
            Self::Choice => "choice",
            Self::ManyOne => "manyOne",
            Self::Rule(name) | Self::Custom(name) => name.as_ref(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The failures a composite error was built from.
///
/// `Many` always holds at least two errors; use [`Cause::from_errors`] to build one.
#[derive(Debug, Clone, PartialEq)]
pub enum Cause {
    Single(Box<ParseError>),
    Many(Vec<ParseError>),
}

impl Cause {
    /// `None` for no errors, `Single` for one, `Many` otherwise
    pub fn from_errors(mut errors: Vec<ParseError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop().map(|e| Self::Single(Box::new(e))),
            _ => Some(Self::Many(errors)),
        }
    }

    pub fn errors(&self) -> &[ParseError] {
        match self {
            Self::Single(e) => std::slice::from_ref(e.as_ref()),
            Self::Many(errors) => errors,
        }
    }
}

/// A structured parse failure. Composite failures form a tree through [`ParseError::cause`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    kind: ErrorKind,
    message: String,
    position: Option<usize>,
    cause: Option<Cause>,
}

#[inline]
pub fn failure(kind: ErrorKind, message: impl Into<String>) -> ParseError {
    ParseError::new(kind, message)
}

impl ParseError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            position: None,
            cause: None,
        }
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    pub fn caused_by(self, error: ParseError) -> Self {
        self.with_cause(Cause::Single(Box::new(error)))
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Offset into the input where the failure was detected, if known
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.cause.is_none()
    }

    /// Leaf errors of the tree, depth first, in alternative order
    pub fn leaves(&self) -> Vec<&ParseError> {
        let mut leaves = vec![];
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'e>(&'e self, leaves: &mut Vec<&'e ParseError>) {
        match &self.cause {
            None => leaves.push(self),
            Some(cause) => cause.errors().iter().for_each(|e| e.collect_leaves(leaves)),
        }
    }

    /// The leaf that got furthest into the input, usually the most helpful one to show.
    /// Ties go to the earliest alternative.
    pub fn furthest(&self) -> &ParseError {
        let mut best = self;
        for (i, leaf) in self.leaves().into_iter().enumerate() {
            if i == 0 || leaf.position > best.position {
                best = leaf;
            }
        }
        best
    }

    fn headline(&self) -> String {
        match self.position {
            Some(pos) => format!("{kind} at {pos}: {msg}", kind = self.kind, msg = self.message),
            None => format!("{kind}: {msg}", kind = self.kind, msg = self.message),
        }
    }

    fn tree_lines(&self, indent: &str, lines: &mut Vec<String>) {
        lines.push(format!("{indent}{headline}", headline = self.headline()));
        if let Some(cause) = &self.cause {
            let indent = format!("{}└──", indent.replace("└──", "|  "));
            for e in cause.errors() {
                e.tree_lines(&indent, lines);
            }
        }
    }
}

/// `{}` prints the top-level failure, `{:#}` the whole cause tree
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            let mut lines = vec![];
            self.tree_lines("", &mut lines);
            write!(f, "{}", lines.join("\n"))
        } else {
            write!(f, "{}", self.headline())
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .and_then(|c| c.errors().first())
            .map(|e| e as &(dyn Error + 'static))
    }
}
