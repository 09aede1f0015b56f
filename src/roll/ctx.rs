use super::{
    bag::DiceBag,
    error::RollError,
    roller::Roller,
    tree::{Binary, Dice, Grouping, Literal, RollNode, RollTree, Unary},
    RResult,
};
use crate::common::{BinaryOperator, Int, UnaryOperator};
use crate::config::RollLimits;
use crate::parse::ast::{self, Span};
use crate::parse::visit::{Accept, AstVisitor};

pub type DefaultRoller = rand::prelude::ThreadRng;

/// Evaluates parsed roll bodies. Owns the random source and the roll
/// limits for the duration of one or more evaluations; holds no other
/// state, so evaluation is a pure function of the tree and the roller's
/// output sequence.
pub struct RollContext<R = DefaultRoller> {
    limits: RollLimits,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(limits: RollLimits, roller: R) -> Self {
        Self { limits, roller }
    }

    /// Walks the tree depth-first and post-order, producing the annotated
    /// result tree. The input tree is never mutated.
    pub fn eval(&mut self, root: &ast::Node) -> RResult<RollTree> {
        root.accept(self)
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(RollLimits::default(), rand::thread_rng())
    }
}

impl<R: Roller> AstVisitor for RollContext<R> {
    type Output = RResult<RollTree>;

    fn visit_literal(&mut self, value: Int, span: &Span) -> Self::Output {
        Ok(RollTree::new(
            RollNode::Literal(Literal::new(value)),
            span.clone(),
        ))
    }

    fn visit_dice(&mut self, dice: &ast::DiceSpec, span: &Span) -> Self::Output {
        let limits = self.limits;
        if dice.num > limits.max_count || dice.sides > limits.max_sides {
            return Err(RollError::DiceSpecOutOfBounds {
                count: dice.num,
                sides: dice.sides,
                limits,
            });
        }

        let faces = DiceBag::roll(dice.num, dice.sides, &mut self.roller)?;
        tracing::trace!(spec = %dice, ?faces, "rolled dice");
        Ok(RollTree::new(
            RollNode::Dice(Dice::new(dice.num, dice.sides, faces)),
            span.clone(),
        ))
    }

    fn visit_unary(&mut self, op: UnaryOperator, value: &ast::Node, span: &Span) -> Self::Output {
        let operand = value.accept(self)?;
        Ok(RollTree::new(
            RollNode::Unary(Unary::new(op, operand)),
            span.clone(),
        ))
    }

    fn visit_binary(
        &mut self,
        left: &ast::Node,
        op: BinaryOperator,
        right: &ast::Node,
        span: &Span,
    ) -> Self::Output {
        let left = left.accept(self)?;
        let right = right.accept(self)?;
        let node = Binary::new(left, op, right)?;
        Ok(RollTree::new(RollNode::Binary(node), span.clone()))
    }

    fn visit_group(&mut self, inner: &ast::Node, span: &Span) -> Self::Output {
        let inner = inner.accept(self)?;
        Ok(RollTree::new(
            RollNode::Grouping(Grouping::new(inner)),
            span.clone(),
        ))
    }
}
