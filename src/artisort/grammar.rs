//! # Condition Grammar
//!
//! Parses one rule-sheet cell into a typed condition. Each translator works on
//! a cell that has already been through [`normalize`] and returns the bare
//! [`RuleErrorKind`] on failure; the row translator in [`crate::translate`]
//! adds the row and column.
//!
//! Cell syntax, by column:
//!
//! ```text
//! categories   生之花,时之沙           labels separated by ','
//! level, tier  >4   <16               '>' or '<' then a whole number
//! primary      是攻击力百分比 | 不是元素精通   exactly one condition
//! secondary    有暴击率,没有防御力        any number, all must hold
//! outcome      锁 | 不锁
//! ```
//!
//! An empty cell is a wildcard in every column but the outcome.

use crate::error::RuleErrorKind;
use crate::rules::{
    AttributePredicate, Comparator, NumericCondition, Outcome, PrimaryCondition,
    SecondaryCondition,
};
use crate::vocab::{AttributeKind, CategoryKind};

pub const SEPARATOR: char = ',';
const FULL_WIDTH_SEPARATOR: char = '，';

pub const PRIMARY_POSITIVE: &str = "是";
pub const PRIMARY_NEGATIVE: &str = "不是";
pub const SECONDARY_POSITIVE: &str = "有";
pub const SECONDARY_NEGATIVE: &str = "没有";

/// The header row every rule sheet starts with.
pub const HEADERS: [&str; 6] = [
    "圣遗物类型条件",
    "等级条件",
    "星级条件",
    "主词条条件",
    "副词条条件",
    "期望结果",
];

/// A rule-sheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Categories,
    Level,
    Tier,
    Primary,
    Secondary,
    Outcome,
}

impl Column {
    /// Columns in sheet order.
    pub const ALL: [Column; 6] = [
        Column::Categories,
        Column::Level,
        Column::Tier,
        Column::Primary,
        Column::Secondary,
        Column::Outcome,
    ];

    pub fn index(self) -> usize {
        match self {
            Column::Categories => 0,
            Column::Level => 1,
            Column::Tier => 2,
            Column::Primary => 3,
            Column::Secondary => 4,
            Column::Outcome => 5,
        }
    }

    pub fn label(self) -> &'static str {
        HEADERS[self.index()]
    }
}

/// Drops all whitespace and turns the full-width comma into [`SEPARATOR`].
pub fn normalize(cell: &str) -> String {
    cell.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == FULL_WIDTH_SEPARATOR { SEPARATOR } else { c })
        .collect()
}

pub fn translate_categories(
    cell: &str,
) -> Result<Option<Vec<CategoryKind>>, RuleErrorKind> {
    if cell.is_empty() {
        return Ok(None);
    }
    cell.split(SEPARATOR)
        .map(|token| {
            CategoryKind::from_label(token)
                .ok_or_else(|| RuleErrorKind::BadCategory(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Parses a level or tier cell. The number is checked before the comparator.
pub fn translate_numeric(cell: &str) -> Result<Option<NumericCondition>, RuleErrorKind> {
    if cell.is_empty() {
        return Ok(None);
    }
    let split = cell.find(|c: char| ascii_digit(c).is_some());
    let (operator, number) = match split {
        Some(at) => cell.split_at(at),
        None => return Err(RuleErrorKind::BadNumber(cell.to_string())),
    };
    let threshold: u32 = number
        .chars()
        .map(|c| ascii_digit(c).unwrap_or(c))
        .collect::<String>()
        .parse()
        .map_err(|_| RuleErrorKind::BadNumber(number.to_string()))?;

    // '=' is a valid comparator but not one the sheet accepts.
    let comparator = match operator {
        ">" => Comparator::Greater,
        "<" => Comparator::Less,
        other => return Err(RuleErrorKind::BadComparator(other.to_string())),
    };
    Ok(Some(NumericCondition::new(comparator, threshold)))
}

/// Folds full-width digits (what an IME in full-width mode types) to ASCII.
fn ascii_digit(c: char) -> Option<char> {
    match c {
        '0'..='9' => Some(c),
        '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32),
        _ => None,
    }
}

pub fn translate_primary(cell: &str) -> Result<Option<PrimaryCondition>, RuleErrorKind> {
    if cell.is_empty() {
        return Ok(None);
    }
    let mut predicates = translate_predicates(cell, PRIMARY_POSITIVE, PRIMARY_NEGATIVE)?;
    if predicates.len() > 1 {
        return Err(RuleErrorKind::RedundantPrimaryAttribute(predicates.len()));
    }
    Ok(predicates.pop().map(PrimaryCondition))
}

pub fn translate_secondary(cell: &str) -> Result<Option<SecondaryCondition>, RuleErrorKind> {
    if cell.is_empty() {
        return Ok(None);
    }
    let predicates = translate_predicates(cell, SECONDARY_POSITIVE, SECONDARY_NEGATIVE)?;
    Ok(Some(SecondaryCondition(predicates)))
}

pub fn translate_outcome(cell: &str) -> Result<Outcome, RuleErrorKind> {
    Outcome::from_cell(cell).ok_or_else(|| RuleErrorKind::BadOutcome(cell.to_string()))
}

fn translate_predicates(
    cell: &str,
    positive: &'static str,
    negative: &'static str,
) -> Result<Vec<AttributePredicate>, RuleErrorKind> {
    check_separator(cell)?;
    cell.split(SEPARATOR)
        .map(|token| translate_predicate(token, positive, negative))
        .collect()
}

fn translate_predicate(
    token: &str,
    positive: &'static str,
    negative: &'static str,
) -> Result<AttributePredicate, RuleErrorKind> {
    // the whole matched word is stripped, whatever its length
    if let Some(rest) = token.strip_prefix(negative) {
        return attribute(rest).map(AttributePredicate::negative);
    }
    if let Some(rest) = token.strip_prefix(positive) {
        return attribute(rest).map(AttributePredicate::positive);
    }
    Err(RuleErrorKind::BadPredicateOperator { positive, negative })
}

fn attribute(label: &str) -> Result<AttributeKind, RuleErrorKind> {
    AttributeKind::from_label(label).ok_or_else(|| RuleErrorKind::BadAttributeKind(label.to_string()))
}

/// Attribute cells may only hold CJK ideographs and the separator.
fn check_separator(cell: &str) -> Result<(), RuleErrorKind> {
    if cell.chars().all(|c| is_cjk_ideograph(c) || c == SEPARATOR) {
        Ok(())
    } else {
        Err(RuleErrorKind::BadSeparator(cell.to_string()))
    }
}

fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}
