use super::tree::{Binary, Dice, Eval, Grouping, Literal, Roll, RollTree, Unary};
use super::visit::{AcceptRoll, VisitRoll};

/// Renders evaluated result trees as one line of text per roll.
///
/// The default methods produce the classic bot output; implementors
/// override only the pieces they format differently.
pub trait Stringify {
    fn stringify<A: AcceptRoll>(&mut self, a: &A) -> String {
        a.accept(self)
    }

    fn str_roll(&mut self, roll: &Roll<'_>) -> String {
        let tree = self.stringify(&roll.tree);
        let total = roll.total();
        match roll.label {
            Some(label) => format!("({}) {} = {}", label, tree, total),
            None => format!("{} = {}", tree, total),
        }
    }

    fn str_roll_tree(&mut self, tree: &RollTree) -> String {
        self.stringify(&tree.node)
    }

    fn str_literal(&mut self, lit: &Literal) -> String {
        lit.value().to_string()
    }

    fn str_dice(&mut self, dice: &Dice) -> String {
        let faces = dice
            .faces
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "{}d{} < {} = {} >",
            dice.num,
            dice.sides,
            faces,
            dice.value()
        )
    }

    fn str_grouping(&mut self, group: &Grouping) -> String {
        format!("({})", self.stringify(&*group.inner))
    }

    fn str_unary(&mut self, unary: &Unary) -> String {
        format!("{}{}", unary.op, self.stringify(&*unary.operand))
    }

    fn str_binary(&mut self, binary: &Binary) -> String {
        let left = self.stringify(&*binary.left);
        let right = self.stringify(&*binary.right);
        format!("{} {} {}", left, binary.op, right)
    }
}

/// The output format of the classic IRC dice bots:
/// `2d4 < 3 1 = 4 > = 4`, `(fort_save) 1d20 < 8 = 8 > + 4 = 12`.
#[derive(Default)]
pub struct LegacyStringifier;

impl LegacyStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify<A: AcceptRoll>(&mut self, roll: &A) -> String {
        Stringify::stringify(self, roll)
    }
}

impl Stringify for LegacyStringifier {}

/// Markdown output: faces listed in parentheses, max and min faces bolded,
/// the total in backticks.
#[derive(Default)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify<A: AcceptRoll>(&mut self, roll: &A) -> String {
        Stringify::stringify(self, roll)
    }
}

impl Stringify for MarkdownStringifier {
    fn str_roll(&mut self, roll: &Roll<'_>) -> String {
        let tree = Stringify::stringify(self, &roll.tree);
        let total = roll.total();
        match roll.label {
            Some(label) => format!("({}) {} = `{}`", label, tree, total),
            None => format!("{} = `{}`", tree, total),
        }
    }

    fn str_dice(&mut self, dice: &Dice) -> String {
        let faces = dice
            .faces
            .iter()
            .map(|&face| {
                if face == 1 || face == dice.sides {
                    format!("**{}**", face)
                } else {
                    face.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}d{} ({})", dice.num, dice.sides, faces)
    }
}

impl<S: ?Sized> VisitRoll for S
where
    S: Stringify,
{
    type Output = String;

    fn visit_roll(&mut self, x: &Roll<'_>) -> Self::Output {
        self.str_roll(x)
    }

    fn visit_roll_tree(&mut self, x: &RollTree) -> Self::Output {
        self.str_roll_tree(x)
    }

    fn visit_literal(&mut self, x: &Literal) -> Self::Output {
        self.str_literal(x)
    }

    fn visit_dice(&mut self, x: &Dice) -> Self::Output {
        self.str_dice(x)
    }

    fn visit_grouping(&mut self, x: &Grouping) -> Self::Output {
        self.str_grouping(x)
    }

    fn visit_unary(&mut self, x: &Unary) -> Self::Output {
        self.str_unary(x)
    }

    fn visit_binary(&mut self, x: &Binary) -> Self::Output {
        self.str_binary(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::NonZeroUInt;
    use crate::config::{GrammarVariant, RollLimits};
    use crate::roll::roller::StepRoller;
    use crate::roll::RollContext;

    fn roll(s: &str, label: Option<&'static str>) -> Roll<'static> {
        let ast = crate::parse::parse(s, GrammarVariant::Legacy).unwrap();
        let roller = StepRoller::new(NonZeroUInt::new(10).unwrap(), 1);
        let tree = RollContext::new(RollLimits::default(), roller)
            .eval(&ast)
            .unwrap();
        Roll::new(tree, label)
    }

    macro_rules! check {
        ($cls:ident, $input:expr, $expected:expr) => {
            check!($cls, $input, None, $expected)
        };
        ($cls:ident, $input:expr, $label:expr, $expected:expr) => {
            let mut stringifier = $cls::default();
            let actual = stringifier.stringify(&roll($input, $label));
            assert_eq!(&actual, $expected);
        };
    }

    #[test]
    fn test_legacy_stringify() {
        check!(LegacyStringifier, "2+4-5", "2 + 4 - 5 = 1");
        check!(LegacyStringifier, "1d20", "1d20 < 10 = 10 > = 10");
        check!(LegacyStringifier, "2d4", "2d4 < 2 3 = 5 > = 5");
        check!(LegacyStringifier, "1d20+19", "1d20 < 10 = 10 > + 19 = 29");
        check!(LegacyStringifier, "4d10", "4d10 < 10 1 2 3 = 16 > = 16");
        check!(LegacyStringifier, "2*(1-3)", "2 * (1 - 3) = -4");
        check!(LegacyStringifier, "-1d4", "-1d4 < 2 = 2 > = -2");
    }

    #[test]
    fn test_legacy_stringify_label() {
        check!(
            LegacyStringifier,
            "1d20+4",
            Some("fort_save"),
            "(fort_save) 1d20 < 10 = 10 > + 4 = 14"
        );
    }

    #[test]
    fn test_markdown_stringify() {
        check!(MarkdownStringifier, "2+3", "2 + 3 = `5`");
        check!(MarkdownStringifier, "2d20", "2d20 (10, 11) = `21`");
        check!(MarkdownStringifier, "4d10", "4d10 (**10**, **1**, 2, 3) = `16`");
        check!(
            MarkdownStringifier,
            "1d20+4",
            Some("fort_save"),
            "(fort_save) 1d20 (10) + 4 = `14`"
        );
    }
}
