//! # Domain Vocabulary
//!
//! Closed enumerations for artifact categories and attribute kinds. Every
//! variant has one canonical label, the exact text a rule sheet uses for it.
//! Labels are resolved through lookup tables built once on first use; the
//! tables refuse to build if two variants share a label.
//!
//! In JSON (item records, workbooks) the variants use their snake_case names
//! instead, e.g. `hp_percent` or `sands`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A closed enumeration whose variants each have a canonical label.
pub trait Labeled: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Builds a label -> variant table, panicking if a label is used twice.
fn label_table<T: Labeled>(all: &'static [T]) -> HashMap<&'static str, T> {
    let mut table = HashMap::with_capacity(all.len());
    for &variant in all {
        if let Some(previous) = table.insert(variant.label(), variant) {
            panic!(
                "label {} is shared by {:?} and {:?}",
                variant.label(),
                previous,
                variant
            );
        }
    }
    table
}

static CATEGORY_LABELS: Lazy<HashMap<&'static str, CategoryKind>> =
    Lazy::new(|| label_table(CategoryKind::ALL));

static ATTRIBUTE_LABELS: Lazy<HashMap<&'static str, AttributeKind>> =
    Lazy::new(|| label_table(AttributeKind::ALL));

/// The equipment slot an artifact occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Flower,
    Plume,
    Sands,
    Goblet,
    Circlet,
}

impl Labeled for CategoryKind {
    const ALL: &'static [Self] = &[
        CategoryKind::Flower,
        CategoryKind::Plume,
        CategoryKind::Sands,
        CategoryKind::Goblet,
        CategoryKind::Circlet,
    ];

    fn label(self) -> &'static str {
        match self {
            CategoryKind::Flower => "生之花",
            CategoryKind::Plume => "死之羽",
            CategoryKind::Sands => "时之沙",
            CategoryKind::Goblet => "空之杯",
            CategoryKind::Circlet => "理之冠",
        }
    }
}

impl CategoryKind {
    pub fn from_label(label: &str) -> Option<Self> {
        CATEGORY_LABELS.get(label).copied()
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A stat an artifact can roll, either as its primary or a secondary attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Hp,
    HpPercent,
    Atk,
    AtkPercent,
    Def,
    DefPercent,
    CritDamage,
    CritRate,
    ElementalMastery,
    EnergyRecharge,
    PyroDamage,
    HydroDamage,
    CryoDamage,
    ElectroDamage,
    DendroDamage,
    AnemoDamage,
    GeoDamage,
    PhysicalDamage,
    HealingBonus,
}

impl Labeled for AttributeKind {
    const ALL: &'static [Self] = &[
        AttributeKind::Hp,
        AttributeKind::HpPercent,
        AttributeKind::Atk,
        AttributeKind::AtkPercent,
        AttributeKind::Def,
        AttributeKind::DefPercent,
        AttributeKind::CritDamage,
        AttributeKind::CritRate,
        AttributeKind::ElementalMastery,
        AttributeKind::EnergyRecharge,
        AttributeKind::PyroDamage,
        AttributeKind::HydroDamage,
        AttributeKind::CryoDamage,
        AttributeKind::ElectroDamage,
        AttributeKind::DendroDamage,
        AttributeKind::AnemoDamage,
        AttributeKind::GeoDamage,
        AttributeKind::PhysicalDamage,
        AttributeKind::HealingBonus,
    ];

    fn label(self) -> &'static str {
        match self {
            AttributeKind::Hp => "生命值",
            AttributeKind::HpPercent => "生命值百分比",
            AttributeKind::Atk => "攻击力",
            AttributeKind::AtkPercent => "攻击力百分比",
            AttributeKind::Def => "防御力",
            AttributeKind::DefPercent => "防御力百分比",
            AttributeKind::CritDamage => "暴击伤害",
            AttributeKind::CritRate => "暴击率",
            AttributeKind::ElementalMastery => "元素精通",
            AttributeKind::EnergyRecharge => "元素充能效率",
            AttributeKind::PyroDamage => "火元素伤害加成",
            AttributeKind::HydroDamage => "水元素伤害加成",
            AttributeKind::CryoDamage => "冰元素伤害加成",
            AttributeKind::ElectroDamage => "雷元素伤害加成",
            AttributeKind::DendroDamage => "草元素伤害加成",
            AttributeKind::AnemoDamage => "风元素伤害加成",
            AttributeKind::GeoDamage => "岩元素伤害加成",
            AttributeKind::PhysicalDamage => "物理伤害加成",
            AttributeKind::HealingBonus => "治疗加成",
        }
    }
}

impl AttributeKind {
    pub fn from_label(label: &str) -> Option<Self> {
        ATTRIBUTE_LABELS.get(label).copied()
    }

    /// Flat health, attack or defense: the low-value secondary rolls.
    pub fn is_flat(self) -> bool {
        matches!(
            self,
            AttributeKind::Hp | AttributeKind::Atk | AttributeKind::Def
        )
    }

    /// Percentage health, attack or defense: primaries every slot but flower and plume can roll.
    pub fn is_base_percent(self) -> bool {
        matches!(
            self,
            AttributeKind::HpPercent | AttributeKind::AtkPercent | AttributeKind::DefPercent
        )
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
