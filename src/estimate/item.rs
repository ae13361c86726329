use crate::model::EstimateSystem;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ItemKind {
    #[serde(rename = "работа")]
    Work,
    #[serde(rename = "материал")]
    Material,
}

impl ItemKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Work => "работа",
            ItemKind::Material => "материал",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Group an item belongs to. A work item and its materials share one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Collector,
    CompensatorBig,
    CompensatorSmall,
    EndNode,
    Insulation,
    Ivpt,
    IvptValve,
    Meter,
    Pex(u32),
    RentalNode,
    Steel(u32),
    Support,
    Sleeve,
    Commissioning,
}

impl SortKey {
    /// Pipe diameter carried by the key itself.
    #[must_use]
    pub fn diameter(self) -> Option<u32> {
        match self {
            SortKey::Steel(dn) | SortKey::Pex(dn) => Some(dn),
            _ => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Steel(dn) => write!(f, "steel-{dn}"),
            SortKey::Pex(dn) => write!(f, "pex-{dn}"),
            SortKey::Insulation => f.write_str("insulation"),
            SortKey::Sleeve => f.write_str("zz-sleeve"),
            SortKey::CompensatorSmall => f.write_str("compensator-small"),
            SortKey::CompensatorBig => f.write_str("compensator-big"),
            SortKey::Support => f.write_str("support"),
            SortKey::Meter => f.write_str("meter-15"),
            SortKey::RentalNode => f.write_str("rental-water-meter"),
            SortKey::EndNode => f.write_str("endnode"),
            SortKey::Ivpt => f.write_str("ivpt"),
            SortKey::IvptValve => f.write_str("ivpt-valve"),
            SortKey::Collector => f.write_str("collector"),
            SortKey::Commissioning => f.write_str("zzz-commissioning"),
        }
    }
}

/// One line of an estimate list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateItem {
    pub kind: ItemKind,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub sort_key: SortKey,
    /// Position inside the group; the work item is always 1.
    pub sort_order: u32,
}

impl EstimateItem {
    pub fn work(sort_key: SortKey, name: impl Into<String>, unit: &str, quantity: f64) -> Self {
        Self {
            kind: ItemKind::Work,
            name: name.into(),
            unit: unit.to_string(),
            quantity,
            sort_key,
            sort_order: 1,
        }
    }

    pub fn material(
        sort_key: SortKey,
        sort_order: u32,
        name: impl Into<String>,
        unit: &str,
        quantity: f64,
    ) -> Self {
        Self {
            kind: ItemKind::Material,
            name: name.into(),
            unit: unit.to_string(),
            quantity,
            sort_key,
            sort_order,
        }
    }

    #[must_use]
    pub fn is_work(&self) -> bool {
        self.kind == ItemKind::Work
    }
}

/// Cold and hot lists of one section, or of the whole building.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionEstimate {
    pub cold: Vec<EstimateItem>,
    pub hot: Vec<EstimateItem>,
}

impl SectionEstimate {
    #[must_use]
    pub fn get(&self, system: EstimateSystem) -> &[EstimateItem] {
        match system {
            EstimateSystem::Cold => &self.cold,
            EstimateSystem::Hot => &self.hot,
        }
    }

    pub fn get_mut(&mut self, system: EstimateSystem) -> &mut Vec<EstimateItem> {
        match system {
            EstimateSystem::Cold => &mut self.cold,
            EstimateSystem::Hot => &mut self.hot,
        }
    }

    pub fn push(&mut self, system: EstimateSystem, item: EstimateItem) {
        self.get_mut(system).push(item);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cold.is_empty() && self.hot.is_empty()
    }

    /// First item in `system` with this kind and name.
    #[must_use]
    pub fn find(&self, system: EstimateSystem, kind: ItemKind, name: &str) -> Option<&EstimateItem> {
        self.get(system)
            .iter()
            .find(|item| item.kind == kind && item.name == name)
    }
}
