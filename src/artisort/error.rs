use crate::grammar::{Column, HEADERS};
use crate::rules::Outcome;
use crate::vocab::{AttributeKind, CategoryKind, Labeled};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtisortError {
    #[error(transparent)]
    Rules(#[from] RuleError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid item: {0}")]
    Item(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ArtisortError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        ArtisortError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArtisortError>;

/// Everything that can go wrong while turning a workbook into a rule set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleErrorKind {
    #[error("the workbook has no sheets")]
    NoSheetFound,

    #[error("the workbook has several sheets ({}) and none is named {wanted}", found.join(", "))]
    MissingActiveSheet { wanted: String, found: Vec<String> },

    #[error("the header row does not match the template: found [{}]", found.join(" | "))]
    BadHeader { found: Vec<String> },

    #[error("[{0}] is not a valid artifact category")]
    BadCategory(String),

    #[error("[{0}] is not a supported comparator")]
    BadComparator(String),

    #[error("[{0}] is not a number")]
    BadNumber(String),

    #[error("[{0}] uses a separator other than ','")]
    BadSeparator(String),

    #[error("the primary attribute takes a single condition, found {0}")]
    RedundantPrimaryAttribute(usize),

    #[error("each condition must start with [{positive}] or [{negative}]")]
    BadPredicateOperator {
        positive: &'static str,
        negative: &'static str,
    },

    #[error("[{0}] is not a valid attribute")]
    BadAttributeKind(String),

    #[error("[{0}] is not a valid outcome")]
    BadOutcome(String),
}

impl RuleErrorKind {
    /// Remediation text shown below the error message.
    pub fn hint(&self) -> String {
        match self {
            RuleErrorKind::NoSheetFound => "add at least one sheet to the workbook".to_string(),
            RuleErrorKind::MissingActiveSheet { wanted, .. } => {
                format!("rename the sheet you want to use to {}", wanted)
            }
            RuleErrorKind::BadHeader { .. } => {
                format!("the header row must be: {}", HEADERS.join(" | "))
            }
            RuleErrorKind::BadCategory(_) => {
                format!("valid categories are: {}", label_list(CategoryKind::ALL))
            }
            RuleErrorKind::BadComparator(_) => {
                "numbers must be written as >N or <N, e.g. >4".to_string()
            }
            RuleErrorKind::BadNumber(_) => "write a whole number after the comparator".to_string(),
            RuleErrorKind::BadSeparator(_) => {
                "separate conditions with ',' (a full-width '，' also works)".to_string()
            }
            RuleErrorKind::RedundantPrimaryAttribute(_) => {
                "an artifact has one primary attribute, so give one condition".to_string()
            }
            RuleErrorKind::BadPredicateOperator { positive, negative } => format!(
                "prefix each attribute with {} or {}, e.g. {}元素充能效率",
                positive, negative, positive
            ),
            RuleErrorKind::BadAttributeKind(_) => {
                format!("valid attributes are: {}", label_list(AttributeKind::ALL))
            }
            RuleErrorKind::BadOutcome(_) => format!(
                "the outcome is either {} or {}",
                Outcome::Keep.label(),
                Outcome::Discard.label()
            ),
        }
    }
}

fn label_list<T: Labeled>(all: &[T]) -> String {
    all.iter().map(|t| t.label()).collect::<Vec<_>>().join(", ")
}

/// The cell a row-value error points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLocation {
    /// 1-based spreadsheet row; the header is row 1.
    pub row: usize,
    pub column: Column,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleError {
    pub kind: RuleErrorKind,
    pub location: Option<CellLocation>,
}

impl RuleError {
    pub fn new(kind: RuleErrorKind) -> Self {
        Self {
            kind,
            location: None,
        }
    }

    pub fn at(kind: RuleErrorKind, row: usize, column: Column) -> Self {
        Self {
            kind,
            location: Some(CellLocation { row, column }),
        }
    }

    pub fn row(&self) -> Option<usize> {
        self.location.map(|loc| loc.row)
    }

    pub fn column(&self) -> Option<Column> {
        self.location.map(|loc| loc.column)
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(
                f,
                "row {}, column {}: {}",
                loc.row,
                loc.column.label(),
                self.kind
            ),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for RuleError {}

impl From<RuleErrorKind> for RuleError {
    fn from(kind: RuleErrorKind) -> Self {
        RuleError::new(kind)
    }
}
