use crate::api::Judge;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::ArtisortConfig;
use crate::error::Result;
use std::path::Path;

/// Loads a rule workbook and reports the rules it holds.
pub fn run(path: &Path, config: &ArtisortConfig) -> Result<CmdResult> {
    let judge = Judge::load_file(path, config)?;
    let rules = judge.rules().rules().to_vec();

    let mut result = CmdResult::default();
    if rules.is_empty() {
        result.add_message(CmdMessage::warning(
            "The sheet has no rules; the built-in heuristic will be used.",
        ));
    } else {
        result.add_message(CmdMessage::success(format!(
            "{} rules loaded from {}",
            rules.len(),
            path.display()
        )));
    }
    Ok(result.with_rules(rules))
}
