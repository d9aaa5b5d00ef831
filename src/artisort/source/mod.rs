//! # Sheet Sources
//!
//! Rule sheets are authored in a spreadsheet program; this module defines
//! what the rest of the crate needs from one. A [`SheetSource`] hands over
//! every sheet of a workbook as rows of optional string cells, and
//! [`select_sheet`] picks the one to translate.
//!
//! ## Implementations
//!
//! - [`json::JsonWorkbook`]: a JSON document holding named sheets
//! - [`tsv::TsvSheet`]: a tab-separated file, one sheet named after the file
//! - [`memory::MemoryWorkbook`]: sheets built in code, for tests and embedding
//!
//! ## Sheet Selection
//!
//! ```text
//! no sheets        -> NoSheetFound
//! one sheet        -> that sheet, whatever its name
//! several sheets   -> the one named `Active` (configurable), else MissingActiveSheet
//! ```

use crate::error::{Result, RuleError, RuleErrorKind};
use serde::{Deserialize, Serialize};

pub mod json;
pub mod memory;
pub mod tsv;

pub const DEFAULT_ACTIVE_SHEET: &str = "Active";

/// One row of cells; `None` is an empty cell.
pub type Row = Vec<Option<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

/// Somewhere rule sheets can be read from.
pub trait SheetSource {
    /// Every sheet, in workbook order.
    fn sheets(&self) -> Result<Vec<Sheet>>;
}

/// Picks the sheet to translate.
pub fn select_sheet(mut sheets: Vec<Sheet>, active: &str) -> std::result::Result<Sheet, RuleError> {
    match sheets.len() {
        0 => Err(RuleErrorKind::NoSheetFound.into()),
        1 => Ok(sheets.remove(0)),
        _ => match sheets.iter().position(|s| s.name == active) {
            Some(index) => Ok(sheets.swap_remove(index)),
            None => Err(RuleErrorKind::MissingActiveSheet {
                wanted: active.to_string(),
                found: sheets.into_iter().map(|s| s.name).collect(),
            }
            .into()),
        },
    }
}
