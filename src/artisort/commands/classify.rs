use crate::api::Judge;
use crate::commands::{CmdMessage, CmdResult, JudgedItem};
use crate::error::{ArtisortError, Result};
use crate::model::{items_from_json, Item};
use crate::rules::Outcome;
use std::fs;
use std::path::Path;

/// Classifies every item in a JSON item file.
pub fn run(judge: &Judge, items_path: &Path) -> Result<CmdResult> {
    let content =
        fs::read_to_string(items_path).map_err(|e| ArtisortError::read(items_path, e))?;
    let items = items_from_json(&content)?;
    Ok(judge_items(judge, items))
}

pub fn judge_items(judge: &Judge, items: Vec<Item>) -> CmdResult {
    let judged: Vec<JudgedItem> = items
        .into_iter()
        .map(|item| {
            let decision = judge.judge(&item);
            JudgedItem { item, decision }
        })
        .collect();

    let count = |outcome: Outcome| judged.iter().filter(|j| j.decision.outcome == outcome).count();
    let keep = count(Outcome::Keep);
    let discard = count(Outcome::Discard);
    let undetermined = count(Outcome::Undetermined);

    let mut result = CmdResult::default();
    if judge.uses_heuristic() {
        result.add_message(CmdMessage::info("No rules loaded; using the built-in heuristic."));
    }
    result.add_message(CmdMessage::info(format!(
        "{} items: {} keep, {} discard, {} undetermined",
        judged.len(),
        keep,
        discard,
        undetermined
    )));
    if undetermined > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} items matched no rule and were left alone",
            undetermined
        )));
    }
    result.with_judged(judged)
}
