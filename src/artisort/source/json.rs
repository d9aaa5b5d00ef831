use super::{Sheet, SheetSource, DEFAULT_ACTIVE_SHEET};
use crate::error::{ArtisortError, Result};
use crate::grammar::HEADERS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout of a JSON workbook:
///
/// ```json
/// {"sheets": [{"name": "Active", "rows": [["圣遗物类型条件", ...], [null, ">4", ...]]}]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// A workbook with one `Active` sheet holding only the header row.
    pub fn template() -> Self {
        let header = HEADERS.iter().map(|h| Some(h.to_string())).collect();
        Self {
            sheets: vec![Sheet::new(DEFAULT_ACTIVE_SHEET, vec![header])],
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// A workbook stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonWorkbook {
    path: PathBuf,
}

impl JsonWorkbook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SheetSource for JsonWorkbook {
    fn sheets(&self) -> Result<Vec<Sheet>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| ArtisortError::read(&self.path, e))?;
        Ok(Workbook::parse(&content)?.sheets)
    }
}
