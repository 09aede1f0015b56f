mod bag;
mod ctx;
mod error;
mod roller;
mod stringify;
mod tree;
mod visit;

type RResult<T> = Result<T, RollError>;

pub use bag::DiceBag;
pub use ctx::{DefaultRoller, RollContext};
pub use error::RollError;
pub use roller::Roller;
pub use stringify::{LegacyStringifier, MarkdownStringifier, Stringify};
pub use tree::{Binary, Dice, Eval, Grouping, Literal, Roll, RollNode, RollTree, Unary};
pub use visit::{AcceptRoll, VisitRoll};

#[cfg(test)]
pub(crate) use roller::StepRoller;

use crate::config::RollLimits;
use crate::parse::ast;

/// Evaluates a parsed roll body with the given limits and random source.
pub fn eval<R: Roller>(root: &ast::Node, limits: RollLimits, roller: R) -> RResult<RollTree> {
    RollContext::new(limits, roller).eval(root)
}
