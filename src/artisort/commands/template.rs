use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ArtisortError, Result};
use crate::grammar::HEADERS;
use crate::source::json::Workbook;
use std::fs;
use std::path::Path;

/// Writes an empty rule workbook (header row only). A `.tsv`/`.txt` path gets
/// a tab-separated header line, anything else a JSON workbook.
pub fn run(path: &Path, force: bool) -> Result<CmdResult> {
    if path.exists() && !force {
        return Err(ArtisortError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let tab_separated = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("tsv") || e.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);
    if tab_separated {
        fs::write(path, format!("{}\n", HEADERS.join("\t")))?;
    } else {
        Workbook::template().save(path)?;
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Wrote rule template to {}",
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Judge;
    use crate::config::ArtisortConfig;

    #[test]
    fn template_loads_as_empty_rule_set() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["rules.json", "rules.tsv"] {
            let path = dir.path().join(name);
            run(&path, false).unwrap();
            let judge = Judge::load_file(&path, &ArtisortConfig::default()).unwrap();
            assert!(judge.uses_heuristic());
        }
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        fs::write(&path, "my rules").unwrap();

        assert!(run(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "my rules");

        run(&path, true).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "my rules");
    }
}
