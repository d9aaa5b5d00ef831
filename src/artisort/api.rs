//! # Judge Facade
//!
//! [`Judge`] is the entry point for embedding artisort: load a rule set once,
//! then ask it about as many artifacts as needed. It is a thin layer over
//! [`crate::translate`] and [`crate::classify`] that adds logging.
//!
//! ## Rules or Heuristic
//!
//! - [`Judge::heuristic`]: no user rules, every artifact goes through the
//!   built-in decision tree.
//! - [`Judge::load`]: rules from a [`SheetSource`]. A load that fails returns
//!   the error; it never quietly becomes a heuristic judge, since the user
//!   asked for their own rules.
//!
//! A sheet with a valid header and no rules loads as an empty rule set, which
//! means the heuristic.

use crate::classify::{self, Decision, Reason};
use crate::config::ArtisortConfig;
use crate::error::{ArtisortError, Result};
use crate::model::Item;
use crate::rules::RuleSet;
use crate::source::json::JsonWorkbook;
use crate::source::tsv::TsvSheet;
use crate::source::{select_sheet, SheetSource};
use crate::translate;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Judge {
    rules: RuleSet,
}

impl Judge {
    pub fn heuristic() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn load<S: SheetSource + ?Sized>(source: &S, config: &ArtisortConfig) -> Result<Self> {
        let sheet = select_sheet(source.sheets()?, &config.active_sheet)?;
        tracing::debug!(sheet = %sheet.name, rows = sheet.rows.len(), "Translating rule sheet");

        let rules = translate::translate_sheet(&sheet)?;
        tracing::info!("Loaded {} rules from sheet {}", rules.len(), sheet.name);
        for rule in rules.rules() {
            tracing::debug!(row = rule.row, "{}", rule);
        }
        Ok(Self { rules })
    }

    /// Loads rules from a workbook file, picking the reader by extension.
    pub fn load_file<P: AsRef<Path>>(path: P, config: &ArtisortConfig) -> Result<Self> {
        let source = open_source(path.as_ref())?;
        Self::load(source.as_ref(), config)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn uses_heuristic(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn judge(&self, item: &Item) -> Decision {
        let decision = classify::explain(item, &self.rules);
        match decision.reason {
            Reason::Rule { row } => {
                tracing::debug!(item = %item, row, outcome = %decision.outcome, "Rule matched");
            }
            Reason::NoRuleMatched => {
                tracing::info!(item = %item, "No rule matched");
            }
            Reason::Heuristic(step) => {
                tracing::debug!(item = %item, step = step.number(), outcome = %decision.outcome, "Heuristic decided");
            }
        }
        decision
    }

    pub fn judge_all(&self, items: &[Item]) -> Vec<Decision> {
        items.iter().map(|item| self.judge(item)).collect()
    }
}

/// Opens a workbook file: `.json` is a JSON workbook, `.tsv` and `.txt` are
/// tab-separated sheets.
pub fn open_source(path: &Path) -> Result<Box<dyn SheetSource>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => Ok(Box::new(JsonWorkbook::new(path))),
        "tsv" | "txt" => Ok(Box::new(TsvSheet::new(path))),
        _ => Err(ArtisortError::Config(format!(
            "cannot read rules from {}: expected a .json, .tsv or .txt file",
            path.display()
        ))),
    }
}
