use super::{Row, Sheet, SheetSource};
use crate::error::Result;

/// Sheets held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    sheets: Vec<Sheet>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, name: impl Into<String>, rows: Vec<Row>) -> Self {
        self.sheets.push(Sheet::new(name, rows));
        self
    }

    /// Builds a row from string slices; `""` is an empty cell.
    pub fn row(cells: &[&str]) -> Row {
        cells
            .iter()
            .map(|c| {
                if c.is_empty() {
                    None
                } else {
                    Some(c.to_string())
                }
            })
            .collect()
    }
}

impl SheetSource for MemoryWorkbook {
    fn sheets(&self) -> Result<Vec<Sheet>> {
        Ok(self.sheets.clone())
    }
}
