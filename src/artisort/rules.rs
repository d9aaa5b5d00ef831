//! # Strategy Model
//!
//! Typed conditions, the [`Rule`] that combines them with an outcome, and the
//! ordered [`RuleSet`]. Every condition on a rule is optional; a missing
//! condition is a wildcard and never causes a mismatch.
//!
//! Rules are built by the translator (see [`crate::translate`]), which is the
//! only way to get a non-empty [`RuleSet`].

use crate::model::Item;
use crate::vocab::{AttributeKind, CategoryKind};
use std::fmt;

/// What to do with an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Lock it.
    Keep,
    /// Leave it unlocked.
    Discard,
    /// No rule applied; the caller must not act.
    Undetermined,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Keep => "锁",
            Outcome::Discard => "不锁",
            Outcome::Undetermined => "没有决断",
        }
    }

    /// Parses the outcome column. Only Keep and Discard can be written there.
    pub fn from_cell(cell: &str) -> Option<Self> {
        match cell {
            "锁" => Some(Outcome::Keep),
            "不锁" => Some(Outcome::Discard),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Greater,
    Less,
    Equal,
}

impl Comparator {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::Greater => ">",
            Comparator::Less => "<",
            Comparator::Equal => "=",
        }
    }

    pub fn holds(self, value: u32, threshold: u32) -> bool {
        match self {
            Comparator::Greater => value > threshold,
            Comparator::Less => value < threshold,
            Comparator::Equal => value == threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericCondition {
    pub comparator: Comparator,
    pub threshold: u32,
}

impl NumericCondition {
    pub fn new(comparator: Comparator, threshold: u32) -> Self {
        Self {
            comparator,
            threshold,
        }
    }

    pub fn holds(&self, value: u32) -> bool {
        self.comparator.holds(value, self.threshold)
    }
}

impl fmt::Display for NumericCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparator.symbol(), self.threshold)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// "Has" or "lacks" a given attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributePredicate {
    pub attribute: AttributeKind,
    pub polarity: Polarity,
}

impl AttributePredicate {
    pub fn positive(attribute: AttributeKind) -> Self {
        Self {
            attribute,
            polarity: Polarity::Positive,
        }
    }

    pub fn negative(attribute: AttributeKind) -> Self {
        Self {
            attribute,
            polarity: Polarity::Negative,
        }
    }

    /// Checks against a single attribute (the primary slot).
    pub fn holds_for(&self, kind: AttributeKind) -> bool {
        match self.polarity {
            Polarity::Positive => kind == self.attribute,
            Polarity::Negative => kind != self.attribute,
        }
    }

    /// Checks against a set of attributes (the secondary slots): positive
    /// needs any of them to be the attribute, negative needs none to be.
    pub fn holds_among<I>(&self, kinds: I) -> bool
    where
        I: IntoIterator<Item = AttributeKind>,
    {
        let mut kinds = kinds.into_iter();
        match self.polarity {
            Polarity::Positive => kinds.any(|k| k == self.attribute),
            Polarity::Negative => kinds.all(|k| k != self.attribute),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryCondition(pub AttributePredicate);

impl PrimaryCondition {
    pub fn matches(&self, item: &Item) -> bool {
        self.0.holds_for(item.primary_kind())
    }
}

impl fmt::Display for PrimaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self.0.polarity {
            Polarity::Positive => "是",
            Polarity::Negative => "不是",
        };
        write!(f, "{}{}", word, self.0.attribute)
    }
}

/// Conjunction of predicates over the secondary attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryCondition(pub Vec<AttributePredicate>);

impl SecondaryCondition {
    pub fn matches(&self, item: &Item) -> bool {
        self.0.iter().all(|p| p.holds_among(item.secondary_kinds()))
    }
}

impl fmt::Display for SecondaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, predicate) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            let word = match predicate.polarity {
                Polarity::Positive => "有",
                Polarity::Negative => "没有",
            };
            write!(f, "{}{}", word, predicate.attribute)?;
        }
        Ok(())
    }
}

/// One row of the rule sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub categories: Option<Vec<CategoryKind>>,
    pub tier: Option<NumericCondition>,
    pub level: Option<NumericCondition>,
    pub primary: Option<PrimaryCondition>,
    pub secondary: Option<SecondaryCondition>,
    pub outcome: Outcome,
    /// Spreadsheet row this rule was read from.
    pub row: usize,
}

impl Rule {
    /// A rule with no conditions: it matches everything.
    pub fn any(outcome: Outcome, row: usize) -> Self {
        Self {
            categories: None,
            tier: None,
            level: None,
            primary: None,
            secondary: None,
            outcome,
            row,
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        if let Some(categories) = &self.categories {
            if !categories.contains(&item.category()) {
                return false;
            }
        }
        if let Some(tier) = &self.tier {
            if !tier.holds(item.tier()) {
                return false;
            }
        }
        if let Some(level) = &self.level {
            if !level.holds(item.level()) {
                return false;
            }
        }
        if let Some(primary) = &self.primary {
            if !primary.matches(item) {
                return false;
            }
        }
        if let Some(secondary) = &self.secondary {
            if !secondary.matches(item) {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.outcome)?;
        match &self.categories {
            Some(categories) => {
                let labels: Vec<_> = categories.iter().map(|c| c.to_string()).collect();
                write!(f, "{}", labels.join(","))?;
            }
            None => f.write_str("任意圣遗物类型")?,
        }
        match &self.level {
            Some(level) => write!(f, ", 等级{}", level)?,
            None => f.write_str(", 任意等级")?,
        }
        match &self.tier {
            Some(tier) => write!(f, ", 星级{}", tier)?,
            None => f.write_str(", 任意星级")?,
        }
        match &self.primary {
            Some(primary) => write!(f, ", 主词条{}", primary)?,
            None => f.write_str(", 任意主词条")?,
        }
        match &self.secondary {
            Some(secondary) => write!(f, ", 副词条{}", secondary),
            None => f.write_str(", 任意副词条"),
        }
    }
}

/// Rules in sheet order; the first matching rule decides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn first_match(&self, item: &Item) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stat;

    fn item(category: CategoryKind, tier: u32, level: u32, secondary: &[AttributeKind]) -> Item {
        Item::new(
            "",
            category,
            tier,
            level,
            Stat::new(AttributeKind::HpPercent, ""),
            secondary.iter().map(|&k| Stat::new(k, "")).collect(),
        )
        .unwrap()
    }

    #[test]
    fn wildcard_rule_matches_everything() {
        let rule = Rule::any(Outcome::Keep, 2);
        for &category in <CategoryKind as crate::vocab::Labeled>::ALL {
            assert!(rule.matches(&item(category, 1, 0, &[])));
            assert!(rule.matches(&item(category, 5, 20, &[AttributeKind::CritRate])));
        }
    }

    #[test]
    fn comparators() {
        assert!(Comparator::Greater.holds(5, 4));
        assert!(!Comparator::Greater.holds(4, 4));
        assert!(Comparator::Less.holds(3, 4));
        assert!(!Comparator::Less.holds(4, 4));
        assert!(Comparator::Equal.holds(4, 4));
    }

    #[test]
    fn category_tier_and_level_restrict() {
        let mut rule = Rule::any(Outcome::Discard, 2);
        rule.categories = Some(vec![CategoryKind::Sands, CategoryKind::Goblet]);
        rule.tier = Some(NumericCondition::new(Comparator::Greater, 4));
        rule.level = Some(NumericCondition::new(Comparator::Less, 4));

        assert!(rule.matches(&item(CategoryKind::Sands, 5, 0, &[])));
        assert!(!rule.matches(&item(CategoryKind::Flower, 5, 0, &[])));
        assert!(!rule.matches(&item(CategoryKind::Goblet, 4, 0, &[])));
        assert!(!rule.matches(&item(CategoryKind::Goblet, 5, 4, &[])));
    }

    #[test]
    fn primary_polarity() {
        let sands = item(CategoryKind::Sands, 5, 0, &[]);
        let is_hp = PrimaryCondition(AttributePredicate::positive(AttributeKind::HpPercent));
        let is_not_hp = PrimaryCondition(AttributePredicate::negative(AttributeKind::HpPercent));
        let is_em = PrimaryCondition(AttributePredicate::positive(AttributeKind::ElementalMastery));
        assert!(is_hp.matches(&sands));
        assert!(!is_not_hp.matches(&sands));
        assert!(!is_em.matches(&sands));
    }

    #[test]
    fn secondary_conditions_are_conjunctive() {
        let def_hp = item(
            CategoryKind::Flower,
            5,
            0,
            &[AttributeKind::Def, AttributeKind::Hp],
        );
        let both = SecondaryCondition(vec![
            AttributePredicate::positive(AttributeKind::Def),
            AttributePredicate::positive(AttributeKind::DefPercent),
        ]);
        assert!(!both.matches(&def_hp));

        let def_without_crit = SecondaryCondition(vec![
            AttributePredicate::positive(AttributeKind::Def),
            AttributePredicate::negative(AttributeKind::CritRate),
        ]);
        assert!(def_without_crit.matches(&def_hp));
    }

    #[test]
    fn negative_secondary_holds_on_empty_set() {
        let bare = item(CategoryKind::Plume, 5, 0, &[]);
        let lacks = SecondaryCondition(vec![AttributePredicate::negative(AttributeKind::Atk)]);
        let has = SecondaryCondition(vec![AttributePredicate::positive(AttributeKind::Atk)]);
        assert!(lacks.matches(&bare));
        assert!(!has.matches(&bare));
    }

    #[test]
    fn first_match_follows_order() {
        let target = item(CategoryKind::Sands, 5, 0, &[]);
        let mut narrow = Rule::any(Outcome::Discard, 2);
        narrow.categories = Some(vec![CategoryKind::Sands]);
        let wide = Rule::any(Outcome::Keep, 3);

        let set = RuleSet::from_rules(vec![narrow.clone(), wide.clone()]);
        assert_eq!(set.first_match(&target).map(|r| r.outcome), Some(Outcome::Discard));

        let set = RuleSet::from_rules(vec![wide, narrow]);
        assert_eq!(set.first_match(&target).map(|r| r.outcome), Some(Outcome::Keep));
    }

    #[test]
    fn describes_rule_in_sheet_words() {
        let mut rule = Rule::any(Outcome::Keep, 2);
        rule.categories = Some(vec![CategoryKind::Sands]);
        rule.tier = Some(NumericCondition::new(Comparator::Greater, 4));
        rule.primary = Some(PrimaryCondition(AttributePredicate::positive(
            AttributeKind::ElementalMastery,
        )));
        assert_eq!(
            rule.to_string(),
            "[锁] 时之沙, 任意等级, 星级>4, 主词条是元素精通, 任意副词条"
        );

        let mut rule = Rule::any(Outcome::Discard, 3);
        rule.secondary = Some(SecondaryCondition(vec![
            AttributePredicate::positive(AttributeKind::Atk),
            AttributePredicate::negative(AttributeKind::CritRate),
        ]));
        assert_eq!(
            rule.to_string(),
            "[不锁] 任意圣遗物类型, 任意等级, 任意星级, 任意主词条, 副词条有攻击力,没有暴击率"
        );
    }

    #[test]
    fn only_keep_and_discard_are_writable() {
        assert_eq!(Outcome::from_cell("锁"), Some(Outcome::Keep));
        assert_eq!(Outcome::from_cell("不锁"), Some(Outcome::Discard));
        assert_eq!(Outcome::from_cell("没有决断"), None);
    }
}
