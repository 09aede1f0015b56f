use crate::common::UInt;

/// Which grammar the parser accepts.
///
/// A variant changes only which constructs are recognized; evaluation
/// semantics are identical across variants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GrammarVariant {
    /// An alias for whatever the crate-wide default behavior currently is.
    Default,
    /// The grammar of the classic IRC dice bots: integer literals, `NdS`
    /// dice, `+ - * /`, unary sign, and parentheses.
    Legacy,
}

impl GrammarVariant {
    /// Resolves the [`Default`](Self::Default) alias to a concrete variant.
    pub fn resolve(self) -> Self {
        match self {
            Self::Default => Self::Legacy,
            other => other,
        }
    }

    pub fn supports_parentheses(self) -> bool {
        matches!(self.resolve(), Self::Legacy)
    }
}

impl Default for GrammarVariant {
    fn default() -> Self {
        Self::Default
    }
}

/// Per-node caps on dice specs, checked by the evaluator before any die
/// is rolled.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RollLimits {
    pub max_count: UInt,
    pub max_sides: UInt,
}

impl RollLimits {
    pub const DEFAULT_MAX_COUNT: UInt = 100;
    pub const DEFAULT_MAX_SIDES: UInt = 1000;

    pub fn new(max_count: UInt, max_sides: UInt) -> Self {
        Self {
            max_count,
            max_sides,
        }
    }
}

impl Default for RollLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_COUNT, Self::DEFAULT_MAX_SIDES)
    }
}

/// One consistent snapshot of the bot's configuration, threaded explicitly
/// into `parse` and `eval` calls. Nothing in this crate reads settings from
/// ambient state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Settings {
    pub variant: GrammarVariant,
    pub limits: RollLimits,
    /// Separates a roll body from its label within one roll string.
    pub label_delimiter: char,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: GrammarVariant::default(),
            limits: RollLimits::default(),
            label_delimiter: ';',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant_resolves_to_legacy() {
        assert_eq!(GrammarVariant::Default.resolve(), GrammarVariant::Legacy);
        assert_eq!(GrammarVariant::Legacy.resolve(), GrammarVariant::Legacy);
        assert!(GrammarVariant::default().supports_parentheses());
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.label_delimiter, ';');
        assert_eq!(settings.limits.max_count, RollLimits::DEFAULT_MAX_COUNT);
        assert_eq!(settings.limits.max_sides, RollLimits::DEFAULT_MAX_SIDES);
    }
}
