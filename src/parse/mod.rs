pub mod ast;
mod error;
mod lexer;
mod parser;
pub mod visit;

pub use error::{ParseError, SourcePosition};
pub use parser::Parser;

use crate::config::GrammarVariant;

/// Parses one roll body under the given grammar variant.
pub fn parse(s: &str, variant: GrammarVariant) -> Result<ast::Node, ParseError> {
    Parser::new(s, variant).parse()
}
