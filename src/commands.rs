//! The command layer: keyword dispatch, roll-string splitting, and reply
//! construction. Everything below this module works on a single roll body;
//! everything above it is message transport and belongs to the embedding
//! bot.

use crate::config::Settings;
use crate::error::DiceError;
use crate::parse::{self, ast};
use crate::roll::{DefaultRoller, LegacyStringifier, Roll, RollContext, Roller};

/// The commands the responder recognizes, enumerable for auditing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    Roll,
    Try,
    Echo,
}

impl Command {
    /// Every recognized command, in dispatch order.
    pub const ALL: [Command; 3] = [Command::Roll, Command::Try, Command::Echo];

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Roll => "roll",
            Self::Try => "try",
            Self::Echo => "echo",
        }
    }

    /// Case-insensitive keyword lookup: `roll`, `ROLL`, and `rOLl` all
    /// dispatch the same command.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| command.keyword().eq_ignore_ascii_case(word))
    }
}

/// One parsed roll string: the roll-body expression plus the label split
/// off the submitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollRequest<'a> {
    pub expression: ast::Node,
    pub label: Option<&'a str>,
}

/// The result of one roll string. A failure here never affects sibling
/// roll strings from the same command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome<'a> {
    pub label: Option<&'a str>,
    pub result: Result<Roll<'a>, DiceError>,
}

/// One outbound reply message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
}

/// Dispatches command lines and formats one reply per roll string.
///
/// Owns the evaluator (and through it the random source) plus the
/// formatter, mirroring how a bot instance holds one of each.
pub struct Responder<R = DefaultRoller> {
    settings: Settings,
    ctx: RollContext<R>,
    formatter: LegacyStringifier,
}

impl Responder {
    pub fn new(settings: Settings) -> Self {
        Self::with_roller_inner(settings, RollContext::new(settings.limits, rand::thread_rng()))
    }
}

impl<R: Roller> Responder<R> {
    pub fn with_roller(settings: Settings, roller: R) -> Self {
        Self::with_roller_inner(settings, RollContext::new(settings.limits, roller))
    }

    fn with_roller_inner(settings: Settings, ctx: RollContext<R>) -> Self {
        Self {
            settings,
            ctx,
            formatter: LegacyStringifier::new(),
        }
    }

    /// Runs one command line (e.g. `roll 2d4 1d20+19;fort_save`) and
    /// returns the replies to send, one per roll string.
    pub fn replies_for_command(&mut self, line: &str) -> Result<Vec<Reply>, DiceError> {
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or("");
        let command = Command::from_keyword(keyword)
            .ok_or_else(|| DiceError::UnknownCommand(keyword.to_string()))?;
        let params: Vec<&str> = words.collect();
        tracing::debug!(command = command.keyword(), params = params.len(), "dispatching");

        match command {
            Command::Roll | Command::Try => {
                let outcomes = self.outcomes_for_params(&params, command)?;
                Ok(outcomes
                    .into_iter()
                    .map(|outcome| self.reply_for_outcome(outcome))
                    .collect())
            }
            Command::Echo => Ok(vec![Reply {
                text: params.join(" "),
            }]),
        }
    }

    /// Structured per-roll-string results, one entry per parameter, in
    /// submission order. Partial success is the norm: a malformed string
    /// yields its own `Err` entry and the rest still roll.
    pub fn outcomes_for_params<'a>(
        &mut self,
        params: &[&'a str],
        command: Command,
    ) -> Result<Vec<RollOutcome<'a>>, DiceError> {
        if params.is_empty() {
            return Err(DiceError::NoParameters(command.keyword()));
        }
        Ok(params
            .iter()
            .map(|&roll_string| self.outcome_for_roll_string(roll_string, command))
            .collect())
    }

    fn outcome_for_roll_string<'a>(
        &mut self,
        roll_string: &'a str,
        command: Command,
    ) -> RollOutcome<'a> {
        let (body, label) = match split_roll_string(roll_string, self.settings.label_delimiter) {
            Ok(split) => split,
            Err(err) => {
                return RollOutcome {
                    label: None,
                    result: Err(err),
                }
            }
        };

        let request = match self.request_for_body(body, label, command) {
            Ok(request) => request,
            Err(err) => {
                return RollOutcome {
                    label,
                    result: Err(err),
                }
            }
        };

        let result = self
            .ctx
            .eval(&request.expression)
            .map(|tree| Roll::new(tree, request.label))
            .map_err(DiceError::from);
        RollOutcome { label, result }
    }

    fn request_for_body<'a>(
        &self,
        body: &str,
        label: Option<&'a str>,
        command: Command,
    ) -> Result<RollRequest<'a>, DiceError> {
        let expression = match command {
            // TRY is a textual rewrite, not a grammar construct.
            Command::Try => parse::parse(&format!("1d20+{}", body), self.settings.variant)?,
            _ => parse::parse(body, self.settings.variant)?,
        };
        Ok(RollRequest { expression, label })
    }

    fn reply_for_outcome(&mut self, outcome: RollOutcome<'_>) -> Reply {
        let text = match &outcome.result {
            Ok(roll) => self.formatter.stringify(roll),
            Err(err) => format!("error {}: {}", err.code(), err),
        };
        Reply { text }
    }
}

/// Splits one roll string into its body and optional label at the first
/// occurrence of the delimiter. A delimiter with nothing after it is an
/// error rather than an empty label.
fn split_roll_string(roll_string: &str, delimiter: char) -> Result<(&str, Option<&str>), DiceError> {
    match roll_string.split_once(delimiter) {
        None => Ok((roll_string, None)),
        Some((_, label)) if label.is_empty() => Err(DiceError::MissingLabel(delimiter)),
        Some((body, label)) => Ok((body, Some(label))),
    }
}
