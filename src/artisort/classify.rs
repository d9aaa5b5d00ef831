//! # Classifier
//!
//! With user rules, the first matching rule decides and an artifact no rule
//! matches is [`Outcome::Undetermined`]. Without user rules, a fixed decision
//! tree runs instead:
//!
//! ```text
//! 1. upgraded at all                                   -> Keep
//! 2. fewer than 5 stars                                -> Discard
//! 3. sands/goblet/circlet with a primary other than
//!    hp% / atk% / def%                                 -> Keep
//! 4. both crit rate and crit damage among secondaries  -> Keep
//! 5. four secondaries, not all of hp/atk/def among them -> Keep
//! 6. at least two of hp/atk/def among secondaries      -> Discard
//! 7. anything else                                     -> Keep
//! ```
//!
//! The two never mix: any user rule, matching or not, replaces the tree.

use crate::model::{Item, MAX_SECONDARY};
use crate::rules::{Outcome, RuleSet};
use crate::vocab::{AttributeKind, CategoryKind};
use std::fmt;

/// The heuristic step that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicStep {
    LevelledUp,
    LowTier,
    RarePrimary,
    DoubleCrit,
    FourLinesNotAllFlat,
    TwoFlatStats,
    Fallback,
}

impl HeuristicStep {
    pub fn number(self) -> u8 {
        match self {
            HeuristicStep::LevelledUp => 1,
            HeuristicStep::LowTier => 2,
            HeuristicStep::RarePrimary => 3,
            HeuristicStep::DoubleCrit => 4,
            HeuristicStep::FourLinesNotAllFlat => 5,
            HeuristicStep::TwoFlatStats => 6,
            HeuristicStep::Fallback => 7,
        }
    }

    pub fn outcome(self) -> Outcome {
        match self {
            HeuristicStep::LowTier | HeuristicStep::TwoFlatStats => Outcome::Discard,
            _ => Outcome::Keep,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            HeuristicStep::LevelledUp => "already upgraded",
            HeuristicStep::LowTier => "below 5 stars",
            HeuristicStep::RarePrimary => "slot-exclusive primary attribute",
            HeuristicStep::DoubleCrit => "both crit rate and crit damage",
            HeuristicStep::FourLinesNotAllFlat => "four lines without every flat stat",
            HeuristicStep::TwoFlatStats => "two or more flat stats",
            HeuristicStep::Fallback => "nothing else applied",
        }
    }
}

impl fmt::Display for HeuristicStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}: {}", self.number(), self.describe())
    }
}

/// Why a decision came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// A user rule matched; `row` is its spreadsheet row.
    Rule { row: usize },
    /// User rules exist but none matched.
    NoRuleMatched,
    Heuristic(HeuristicStep),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Rule { row } => write!(f, "rule on row {}", row),
            Reason::NoRuleMatched => f.write_str("no rule matched"),
            Reason::Heuristic(step) => write!(f, "heuristic {}", step),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub outcome: Outcome,
    pub reason: Reason,
}

pub fn classify(item: &Item, rules: &RuleSet) -> Outcome {
    explain(item, rules).outcome
}

pub fn explain(item: &Item, rules: &RuleSet) -> Decision {
    if rules.is_empty() {
        let step = heuristic(item);
        return Decision {
            outcome: step.outcome(),
            reason: Reason::Heuristic(step),
        };
    }
    match rules.first_match(item) {
        Some(rule) => Decision {
            outcome: rule.outcome,
            reason: Reason::Rule { row: rule.row },
        },
        None => Decision {
            outcome: Outcome::Undetermined,
            reason: Reason::NoRuleMatched,
        },
    }
}

/// Runs the built-in decision tree and returns the step that fired.
pub fn heuristic(item: &Item) -> HeuristicStep {
    if item.level() > 0 {
        return HeuristicStep::LevelledUp;
    }
    if item.tier() < 5 {
        return HeuristicStep::LowTier;
    }
    let fixed_primary_slot = matches!(item.category(), CategoryKind::Flower | CategoryKind::Plume);
    if !fixed_primary_slot && !item.primary_kind().is_base_percent() {
        return HeuristicStep::RarePrimary;
    }
    if item.has_secondary(AttributeKind::CritDamage) && item.has_secondary(AttributeKind::CritRate)
    {
        return HeuristicStep::DoubleCrit;
    }
    let flat = item.secondary_kinds().filter(|k| k.is_flat()).count();
    if item.secondary().len() == MAX_SECONDARY && flat < 3 {
        return HeuristicStep::FourLinesNotAllFlat;
    }
    if flat >= 2 {
        return HeuristicStep::TwoFlatStats;
    }
    HeuristicStep::Fallback
}
