//! # Rule Translation
//!
//! Turns a selected sheet into a [`RuleSet`]. The header row is checked
//! first; then every data row runs through the column translators of
//! [`crate::grammar`] in a fixed order:
//!
//! ```text
//! categories -> tier -> level -> primary -> secondary -> outcome
//! ```
//!
//! The first failing cell aborts the whole sheet. Its error carries the
//! spreadsheet row (the header is row 1) and the column label. There is no
//! partial result: callers get every rule or an error.

use crate::error::{RuleError, RuleErrorKind};
use crate::grammar::{self, Column, HEADERS};
use crate::rules::{Rule, RuleSet};
use crate::source::{Row, Sheet};

/// Spreadsheet row number of the first data row.
pub const FIRST_DATA_ROW: usize = 2;

/// Checks the header row against [`HEADERS`]. Cells are trimmed and trailing
/// empty cells ignored.
pub fn check_header(header: &[Option<String>]) -> Result<(), RuleError> {
    let mut found: Vec<String> = header
        .iter()
        .map(|cell| cell.as_deref().unwrap_or("").trim().to_string())
        .collect();
    while found.last().is_some_and(|cell| cell.is_empty()) {
        found.pop();
    }
    if found.iter().map(String::as_str).eq(HEADERS.iter().copied()) {
        Ok(())
    } else {
        Err(RuleErrorKind::BadHeader { found }.into())
    }
}

/// Normalized cell text for `column`; missing cells read as empty.
fn cell(cells: &[String], column: Column) -> &str {
    cells.get(column.index()).map(String::as_str).unwrap_or("")
}

/// Translates one data row. `row` is its 1-based spreadsheet row number.
pub fn translate_row(cells: &[Option<String>], row: usize) -> Result<Rule, RuleError> {
    let cells: Vec<String> = cells
        .iter()
        .take(HEADERS.len())
        .map(|c| grammar::normalize(c.as_deref().unwrap_or("")))
        .collect();
    let at = |column: Column| move |kind: RuleErrorKind| RuleError::at(kind, row, column);

    let categories = grammar::translate_categories(cell(&cells, Column::Categories))
        .map_err(at(Column::Categories))?;
    let tier = grammar::translate_numeric(cell(&cells, Column::Tier)).map_err(at(Column::Tier))?;
    let level =
        grammar::translate_numeric(cell(&cells, Column::Level)).map_err(at(Column::Level))?;
    let primary =
        grammar::translate_primary(cell(&cells, Column::Primary)).map_err(at(Column::Primary))?;
    let secondary = grammar::translate_secondary(cell(&cells, Column::Secondary))
        .map_err(at(Column::Secondary))?;
    let outcome =
        grammar::translate_outcome(cell(&cells, Column::Outcome)).map_err(at(Column::Outcome))?;

    Ok(Rule {
        categories,
        tier,
        level,
        primary,
        secondary,
        outcome,
        row,
    })
}

fn is_blank(row: &Row) -> bool {
    row.iter()
        .take(HEADERS.len())
        .all(|c| grammar::normalize(c.as_deref().unwrap_or("")).is_empty())
}

/// Translates a whole sheet, header included.
pub fn translate_sheet(sheet: &Sheet) -> Result<RuleSet, RuleError> {
    let Some((header, data)) = sheet.rows.split_first() else {
        return Err(RuleErrorKind::BadHeader { found: Vec::new() }.into());
    };
    check_header(header)?;

    let mut rules = Vec::with_capacity(data.len());
    for (offset, cells) in data.iter().enumerate() {
        let row = FIRST_DATA_ROW + offset;
        if is_blank(cells) {
            tracing::debug!(row, "Skipping blank row");
            continue;
        }
        rules.push(translate_row(cells, row)?);
    }
    Ok(RuleSet::from_rules(rules))
}
