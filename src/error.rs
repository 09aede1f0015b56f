use crate::parse::ParseError;
use crate::roll::RollError;
use thiserror::Error;

/// Domain identifier carried by every error this crate reports.
pub const ERROR_DOMAIN: &str = "dicebot";

/// Any failure the bot core reports to the command layer. Every kind maps
/// to a stable integer code so callers can build replies without matching
/// on internals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Roll(#[from] RollError),
    #[error("unrecognized command {0:?}")]
    UnknownCommand(String),
    #[error("the {0} command requires at least one roll string")]
    NoParameters(&'static str),
    #[error("expected a label after {0:?}")]
    MissingLabel(char),
}

impl DiceError {
    pub fn domain(&self) -> &'static str {
        ERROR_DOMAIN
    }

    /// The error's code in the fixed catalog.
    pub fn code(&self) -> u32 {
        match self {
            Self::Parse(ParseError::EmptyExpression) => 100,
            Self::Parse(ParseError::UnexpectedToken { .. }) => 101,
            Self::Parse(ParseError::UnbalancedParentheses(_)) => 102,
            Self::Parse(ParseError::MalformedDiceSpec(_)) => 103,
            Self::Roll(RollError::DivisionByZero) => 200,
            Self::Roll(RollError::DiceSpecOutOfBounds { .. }) => 201,
            Self::Roll(RollError::InvalidDiceSpec { .. }) => 202,
            Self::UnknownCommand(_) => 300,
            Self::NoParameters(_) => 301,
            Self::MissingLabel(_) => 302,
        }
    }
}
