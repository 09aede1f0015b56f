use super::{error::RollError, RResult};
use crate::common::{BinaryOperator, Int, NonEmpty, UInt, UnaryOperator};
use crate::parse::ast::Span;

/// Computed value of an evaluated node. Values are filled in while the
/// evaluator walks the expression tree, so reading them cannot fail.
#[enum_dispatch::enum_dispatch]
pub trait Eval {
    fn value(&self) -> Int;
}

/// One evaluated roll request: the annotated result tree plus the label
/// carried over from the roll string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roll<'a> {
    pub tree: RollTree,
    pub label: Option<&'a str>,
}

impl<'a> Roll<'a> {
    pub(crate) fn new(tree: RollTree, label: Option<&'a str>) -> Self {
        Self { tree, label }
    }

    pub fn total(&self) -> Int {
        self.tree.value()
    }
}

impl Eval for Roll<'_> {
    fn value(&self) -> Int {
        self.tree.value()
    }
}

/// A result node together with the span of the source text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollTree {
    pub node: RollNode,
    pub span: Span,
}

impl RollTree {
    pub(crate) fn new(node: RollNode, span: Span) -> Self {
        Self { node, span }
    }
}

impl Eval for RollTree {
    fn value(&self) -> Int {
        self.node.value()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[enum_dispatch::enum_dispatch(Eval, AcceptRoll)]
pub enum RollNode {
    Literal(Literal),
    Dice(Dice),
    Grouping(Grouping),
    Unary(Unary),
    Binary(Binary),
}

/// A bare integer operand.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Literal {
    value: Int,
}

impl Literal {
    pub(crate) fn new(value: Int) -> Self {
        Self { value }
    }
}

impl Eval for Literal {
    fn value(&self) -> Int {
        self.value
    }
}

/// The outcome of rolling one dice spec: every face in roll order, plus
/// the spec that produced them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dice {
    pub num: UInt,
    pub sides: UInt,
    pub faces: NonEmpty<UInt>,
    total: Int,
}

impl Dice {
    pub(crate) fn new(num: UInt, sides: UInt, faces: NonEmpty<UInt>) -> Self {
        let total = faces.iter().map(|&face| Int::from(face)).sum();
        Self {
            num,
            sides,
            faces,
            total,
        }
    }
}

impl Eval for Dice {
    fn value(&self) -> Int {
        self.total
    }
}

/// A parenthesized subexpression; its value is the inner value.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grouping {
    pub inner: Box<RollTree>,
}

impl Grouping {
    pub(crate) fn new(inner: RollTree) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Eval for Grouping {
    fn value(&self) -> Int {
        self.inner.value()
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Unary {
    pub op: UnaryOperator,
    pub operand: Box<RollTree>,
    total: Int,
}

impl Unary {
    pub(crate) fn new(op: UnaryOperator, operand: RollTree) -> Self {
        let value = operand.value();
        let total = match op {
            UnaryOperator::Pos => value,
            UnaryOperator::Neg => -value,
        };
        Self {
            op,
            operand: Box::new(operand),
            total,
        }
    }
}

impl Eval for Unary {
    fn value(&self) -> Int {
        self.total
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Binary {
    pub op: BinaryOperator,
    pub left: Box<RollTree>,
    pub right: Box<RollTree>,
    total: Int,
}

impl Binary {
    /// Combines two evaluated children. Division truncates toward zero and
    /// reports a zero divisor instead of producing a result.
    pub(crate) fn new(left: RollTree, op: BinaryOperator, right: RollTree) -> RResult<Self> {
        let l = left.value();
        let r = right.value();
        let total = match op {
            BinaryOperator::Add => l + r,
            BinaryOperator::Sub => l - r,
            BinaryOperator::Mul => l * r,
            BinaryOperator::Div => {
                if r == 0 {
                    return Err(RollError::DivisionByZero);
                }
                l / r
            }
        };
        Ok(Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
            total,
        })
    }
}

impl Eval for Binary {
    fn value(&self) -> Int {
        self.total
    }
}
