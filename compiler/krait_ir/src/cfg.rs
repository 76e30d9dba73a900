//! Control-flow-graph handles.
//!
//! CFG construction lowers control constructs by inserting
//! [`Branch`](crate::ast::Branch) and [`Jump`](crate::ast::Jump)
//! pseudo-statements into already-parsed statement sequences. Their
//! successor references are `BlockId` handles into a basic-block table that
//! the CFG phase alone owns; the syntax tree never owns or traverses a
//! block. Keeping the reference an index makes the non-ownership explicit
//! and avoids coupling block lifetimes to the tree.

use std::fmt;

/// Index of a basic block in the CFG phase's block table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BlockId(u32);

impl BlockId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        BlockId(index)
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({})", self.0)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Branch, ExprContext, Jump, Name};
    use crate::span::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn block_id_round_trips_index() {
        assert_eq!(BlockId::new(7).index(), 7);
        assert_eq!(BlockId::new(7).to_string(), "b7");
    }

    #[test]
    fn pseudo_node_constructors_are_synthetic() {
        let test = crate::ast::Expr::Name(Name {
            id: "done".to_owned(),
            ctx: ExprContext::Load,
            span: Span::new(4, 2),
        });
        let branch = Branch::new(test, BlockId::new(1), BlockId::new(2));
        assert_eq!(branch.span, Span::SYNTH);
        assert_eq!(Jump::new(BlockId::new(0)).span, Span::SYNTH);
    }
}
