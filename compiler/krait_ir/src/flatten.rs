//! Tree linearization.
//!
//! [`flatten`] produces the pre-order sequence of a subtree using the same
//! child order as the dispatch driver, with an explicit worklist so deeply
//! nested trees cannot overflow the stack. `expand_scopes` controls whether
//! traversal crosses scope boundaries: when false, a scope-introducing node
//! (`FunctionDef`, `ClassDef`, `Lambda`) is included in the output but none
//! of its children are.

use crate::ast::{Expr, NodeKind, NodeRef, Stmt};

/// Pre-order linearization of `roots` and their subtrees.
pub fn flatten<'a, I>(roots: I, expand_scopes: bool) -> Vec<NodeRef<'a>>
where
    I: IntoIterator<Item = NodeRef<'a>>,
{
    let mut out = Vec::new();
    let mut worklist: Vec<NodeRef<'a>> = roots.into_iter().collect();
    worklist.reverse();
    while let Some(node) = worklist.pop() {
        out.push(node);
        if !expand_scopes && node.kind().introduces_scope() {
            continue;
        }
        let mut children = node.children();
        children.reverse();
        worklist.extend(children);
    }
    tracing::trace!(nodes = out.len(), expand_scopes, "flattened subtree");
    out
}

/// Flatten a statement sequence, e.g. a suite or a module body.
pub fn flatten_stmts(stmts: &[Stmt], expand_scopes: bool) -> Vec<NodeRef<'_>> {
    flatten(stmts.iter().map(NodeRef::Stmt), expand_scopes)
}

/// Flatten a single expression subtree.
pub fn flatten_expr(expr: &Expr, expand_scopes: bool) -> Vec<NodeRef<'_>> {
    flatten([NodeRef::Expr(expr)], expand_scopes)
}

/// All nodes of `kind` under `roots`, in pre-order. Scope handling follows
/// [`flatten`]: with `expand_scopes` false, occurrences inside nested
/// function, class and lambda bodies are not reported.
pub fn find_kind<'a, I>(roots: I, kind: NodeKind, expand_scopes: bool) -> Vec<NodeRef<'a>>
where
    I: IntoIterator<Item = NodeRef<'a>>,
{
    flatten(roots, expand_scopes)
        .into_iter()
        .filter(|node| node.kind() == kind)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ExprContext;
    use crate::cfg::BlockId;
    use crate::fixtures;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_node_is_the_root() {
        let module = fixtures::everything_module();
        let root = NodeRef::Module(&module);
        let nodes = flatten([root], true);
        assert_eq!(nodes[0], root);
        assert!(nodes.len() > 1);
    }

    #[test]
    fn scope_nodes_stop_traversal_when_not_expanded() {
        let stmt = fixtures::nested_function();
        let nodes = flatten([NodeRef::Stmt(&stmt)], false);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind(), NodeKind::FunctionDef);
    }

    #[test]
    fn find_kind_respects_scope_boundaries() {
        // One global directive at module level, one in a function body, one
        // in a class body.
        let module = fixtures::globals_at_three_depths();
        let root = [NodeRef::Module(&module)];

        let all = find_kind(root, NodeKind::Global, true);
        assert_eq!(all.len(), 3);
        let spans: Vec<u32> = all.iter().map(|n| n.span().map_or(0, |s| s.line)).collect();
        let mut sorted = spans.clone();
        sorted.sort_unstable();
        assert_eq!(spans, sorted);

        let top_level_only = find_kind(root, NodeKind::Global, false);
        assert_eq!(top_level_only.len(), 1);
    }

    #[test]
    fn conditional_assignment_flattens_in_pre_order() {
        // x = 1 if y else 2
        let stmt = fixtures::ifexp_assign();
        let nodes = flatten([NodeRef::Stmt(&stmt)], true);
        let kinds: Vec<NodeKind> = nodes.iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Assign,
                NodeKind::Name,
                NodeKind::IfExp,
                NodeKind::Name,
                NodeKind::Num,
                NodeKind::Num,
            ]
        );
        let contexts: Vec<ExprContext> = nodes
            .iter()
            .filter_map(|n| match n {
                NodeRef::Expr(crate::ast::Expr::Name(name)) => Some(name.ctx),
                _ => None,
            })
            .collect();
        assert_eq!(contexts, vec![ExprContext::Store, ExprContext::Load]);
    }

    #[test]
    fn branch_yields_only_its_test() {
        let branch = Stmt::Branch(crate::ast::Branch::new(
            fixtures::load("done", 1),
            BlockId::new(1),
            BlockId::new(2),
        ));
        let kinds: Vec<NodeKind> = flatten([NodeRef::Stmt(&branch)], true)
            .iter()
            .map(|n| n.kind())
            .collect();
        assert_eq!(kinds, vec![NodeKind::Branch, NodeKind::Name]);

        let jump = Stmt::Jump(crate::ast::Jump::new(BlockId::new(0)));
        assert_eq!(flatten([NodeRef::Stmt(&jump)], true).len(), 1);
    }

    #[test]
    fn multiple_roots_keep_their_order() {
        let first = fixtures::ifexp_assign();
        let second = Stmt::Pass(crate::ast::Pass {
            span: crate::span::Span::new(2, 0),
        });
        let nodes = flatten_stmts(std::slice::from_ref(&first), true);
        let combined = flatten(
            [NodeRef::Stmt(&first), NodeRef::Stmt(&second)],
            true,
        );
        // The second root and its (empty) subtree come after the whole first
        // subtree.
        assert_eq!(combined.len(), nodes.len() + 1);
        assert_eq!(combined[combined.len() - 1].kind(), NodeKind::Pass);
        assert_eq!(&combined[..nodes.len()], &nodes[..]);
    }
}
