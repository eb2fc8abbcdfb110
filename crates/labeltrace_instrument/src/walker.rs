//! Generic pre-order rewriting walk.
//!
//! The visit function sees a node before its children. Whatever it returns
//! is the node whose children are walked next, so a visitor that replaces a
//! node decides which children get visited.

use labeltrace_syntax::{Node, visit_each_child};

use crate::context::Context;

/// Signature of a per-node visit function.
pub type VisitFn = fn(Node, &Context<'_>) -> Node;

/// Applies `visitor` to `node`, then recursively to every child of the
/// result, rebuilding each node from its rewritten children.
#[must_use]
pub fn visit_node_and_children<V>(node: Node, visitor: &V, ctx: &Context<'_>) -> Node
where
    V: Fn(Node, &Context<'_>) -> Node + ?Sized,
{
    visit_each_child(visitor(node, ctx), &mut |child: Node| {
        visit_node_and_children(child, visitor, ctx)
    })
}

/// A visit function bound to its context, ready to rewrite whole trees.
#[derive(Clone, Copy)]
pub struct NodeAndChildrenVisitor<'a> {
    visitor: VisitFn,
    ctx: Context<'a>,
}

impl<'a> NodeAndChildrenVisitor<'a> {
    /// Binds `visitor` to `ctx`.
    #[must_use]
    pub fn new(visitor: VisitFn, ctx: Context<'a>) -> Self {
        Self { visitor, ctx }
    }

    /// The context every visit receives.
    #[must_use]
    pub fn context(&self) -> &Context<'a> {
        &self.ctx
    }

    /// Rewrites `node` and everything below it.
    #[must_use]
    pub fn visit(&self, node: Node) -> Node {
        visit_node_and_children(node, &self.visitor, &self.ctx)
    }
}
