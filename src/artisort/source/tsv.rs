use super::{Row, Sheet, SheetSource};
use crate::error::{ArtisortError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A single sheet stored as tab-separated text, which is what copying a block
/// of cells out of a spreadsheet program produces. Cells are not quoted.
#[derive(Debug, Clone)]
pub struct TsvSheet {
    path: PathBuf,
}

impl TsvSheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn sheet_name(path: &Path) -> String {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Splits tab-separated text into rows; empty cells become `None`.
pub fn parse_rows(content: &str) -> Vec<Row> {
    content
        .lines()
        .map(|line| {
            line.split('\t')
                .map(|cell| {
                    if cell.is_empty() {
                        None
                    } else {
                        Some(cell.to_string())
                    }
                })
                .collect()
        })
        .collect()
}

impl SheetSource for TsvSheet {
    fn sheets(&self) -> Result<Vec<Sheet>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| ArtisortError::read(&self.path, e))?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        Ok(vec![Sheet::new(
            Self::sheet_name(&self.path),
            parse_rows(content),
        )])
    }
}
