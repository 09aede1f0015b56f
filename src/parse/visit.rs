use crate::common::{BinaryOperator, Int, UnaryOperator};
use crate::parse::ast::{DiceSpec, Node, NodeKind, Span};

/// A read-only traversal of a parsed roll body. The span of the node being
/// visited is passed alongside its payload so result trees can carry it
/// forward.
pub trait AstVisitor {
    type Output;

    fn visit<T>(&mut self, node: &T) -> Self::Output
    where
        T: ?Sized + Accept<Self>,
    {
        node.accept(self)
    }

    fn visit_literal(&mut self, value: Int, span: &Span) -> Self::Output;

    fn visit_dice(&mut self, dice: &DiceSpec, span: &Span) -> Self::Output;

    fn visit_unary(&mut self, op: UnaryOperator, value: &Node, span: &Span) -> Self::Output;

    fn visit_binary(
        &mut self,
        left: &Node,
        op: BinaryOperator,
        right: &Node,
        span: &Span,
    ) -> Self::Output;

    fn visit_group(&mut self, inner: &Node, span: &Span) -> Self::Output;
}

pub trait Accept<V: AstVisitor + ?Sized> {
    fn accept(&self, v: &mut V) -> V::Output;
}

impl<V: AstVisitor + ?Sized> Accept<V> for Node {
    fn accept(&self, v: &mut V) -> V::Output {
        match &self.kind {
            NodeKind::Literal(x) => v.visit_literal(*x, &self.span),
            NodeKind::Dice(spec) => v.visit_dice(spec, &self.span),
            NodeKind::Unary(op, x) => v.visit_unary(*op, x, &self.span),
            NodeKind::Binary(l, op, r) => v.visit_binary(l, *op, r, &self.span),
            NodeKind::Group(x) => v.visit_group(x, &self.span),
        }
    }
}
