use crate::error::{ArtisortError, Result};
use crate::vocab::{AttributeKind, CategoryKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The most secondary attributes an artifact can carry.
pub const MAX_SECONDARY: usize = 4;

/// One attribute line as read off the artifact, e.g. `暴击率 = 3.9%`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub kind: AttributeKind,
    // Kept as read by the extractor; only ever displayed.
    #[serde(default)]
    pub value: String,
}

impl Stat {
    pub fn new(kind: AttributeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}={}", self.kind, self.value)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RawItem {
    #[serde(default)]
    name: String,
    category: CategoryKind,
    tier: u32,
    #[serde(default)]
    level: u32,
    primary: Stat,
    #[serde(default)]
    secondary: Vec<Stat>,
}

/// An artifact record handed over by the extraction step.
///
/// Construction goes through [`Item::new`] (or deserialization, which calls
/// it), so every `Item` has at most [`MAX_SECONDARY`] secondary attributes
/// with no kind repeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItem", into = "RawItem")]
pub struct Item {
    name: String,
    category: CategoryKind,
    tier: u32,
    level: u32,
    primary: Stat,
    secondary: Vec<Stat>,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        category: CategoryKind,
        tier: u32,
        level: u32,
        primary: Stat,
        secondary: Vec<Stat>,
    ) -> Result<Self> {
        if secondary.len() > MAX_SECONDARY {
            return Err(ArtisortError::Item(format!(
                "an artifact has at most {} secondary attributes, found {}",
                MAX_SECONDARY,
                secondary.len()
            )));
        }
        for (i, stat) in secondary.iter().enumerate() {
            if secondary[..i].iter().any(|s| s.kind == stat.kind) {
                return Err(ArtisortError::Item(format!(
                    "secondary attribute {} appears more than once",
                    stat.kind
                )));
            }
        }
        Ok(Self {
            name: name.into(),
            category,
            tier,
            level,
            primary,
            secondary,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> CategoryKind {
        self.category
    }

    /// Star rating.
    pub fn tier(&self) -> u32 {
        self.tier
    }

    /// Upgrade level, 0 for a fresh artifact.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn primary(&self) -> &Stat {
        &self.primary
    }

    /// Secondary attributes in the order they were read.
    pub fn secondary(&self) -> &[Stat] {
        &self.secondary
    }

    pub fn primary_kind(&self) -> AttributeKind {
        self.primary.kind
    }

    pub fn secondary_kinds(&self) -> impl Iterator<Item = AttributeKind> + '_ {
        self.secondary.iter().map(|s| s.kind)
    }

    pub fn has_secondary(&self, kind: AttributeKind) -> bool {
        self.secondary_kinds().any(|k| k == kind)
    }
}

impl TryFrom<RawItem> for Item {
    type Error = ArtisortError;

    fn try_from(raw: RawItem) -> Result<Self> {
        Item::new(
            raw.name,
            raw.category,
            raw.tier,
            raw.level,
            raw.primary,
            raw.secondary,
        )
    }
}

impl From<Item> for RawItem {
    fn from(item: Item) -> Self {
        RawItem {
            name: item.name,
            category: item.category,
            tier: item.tier,
            level: item.level,
            primary: item.primary,
            secondary: item.secondary,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            write!(f, "{} | ", self.name)?;
        }
        write!(
            f,
            "{} | {} | {}星 | +{}",
            self.category, self.primary, self.tier, self.level
        )?;
        for stat in &self.secondary {
            write!(f, " | {}", stat)?;
        }
        Ok(())
    }
}

/// Reads a JSON array of item records.
pub fn items_from_json(content: &str) -> Result<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(content)?;
    Ok(items)
}
