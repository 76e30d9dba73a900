//! Source positions.
//!
//! The parser records where each construct begins as a line/column pair.
//! Nodes synthesized after parsing (CFG pseudo-statements) carry
//! [`Span::SYNTH`].

use std::fmt;

/// Source position of a node: the line and column where it begins.
///
/// Layout: 8 bytes total. Lines are 1-based as reported by the lexer;
/// columns are 0-based byte offsets within the line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub line: u32,
    pub col: u32,
}

impl Span {
    /// Position for synthesized nodes that have no source location.
    pub const SYNTH: Span = Span { line: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Span { line, col }
    }

    /// True for positions of synthesized nodes.
    #[inline]
    pub const fn is_synthetic(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Trait for nodes that carry a source position.
pub trait Spanned {
    fn span(&self) -> Span;
}
