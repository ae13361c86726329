use super::zones::ZonesData;
use serde::Serialize;
use std::collections::BTreeMap;

/// Row text for a zone whose album has no template lines.
pub const EMPTY_BOM: &str = "(состав не задан)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBomRow {
    pub section_index: usize,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomRow {
    pub name: String,
    pub unit: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpecsAggregates {
    pub per_section: Vec<SectionBomRow>,
    pub overall: Vec<BomRow>,
}

/// Album BOM lines merged by (name, unit) per section and for the building.
#[must_use]
pub fn specs_aggregates(zones: &ZonesData, section_count: usize) -> SpecsAggregates {
    let mut per_section: Vec<BTreeMap<(&str, &str), f64>> = vec![BTreeMap::new(); section_count];
    let mut overall: BTreeMap<(&str, &str), f64> = BTreeMap::new();

    for zone in &zones.zones {
        for item in &zone.bom {
            let key = (item.name.as_str(), item.unit.as_str());
            if let Some(section) = per_section.get_mut(zone.section_index) {
                *section.entry(key).or_default() += item.quantity;
            }
            *overall.entry(key).or_default() += item.quantity;
        }
    }

    SpecsAggregates {
        per_section: per_section
            .into_iter()
            .enumerate()
            .flat_map(|(section_index, merged)| {
                merged.into_iter().map(move |((name, unit), quantity)| SectionBomRow {
                    section_index,
                    name: name.to_string(),
                    unit: unit.to_string(),
                    quantity,
                })
            })
            .collect(),
        overall: overall
            .into_iter()
            .map(|((name, unit), quantity)| BomRow {
                name: name.to_string(),
                unit: unit.to_string(),
                quantity,
            })
            .collect(),
    }
}

/// One export line per zone BOM item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomLine {
    pub section_index: usize,
    pub zone_name: String,
    pub album_name: String,
    pub n_auto: u32,
    pub from: u32,
    pub to: u32,
    pub name: String,
    pub unit: String,
    /// `None` on the placeholder row of an empty album.
    pub quantity: Option<f64>,
}

#[must_use]
pub fn bom_data(zones: &ZonesData) -> Vec<BomLine> {
    let mut lines = Vec::new();
    for zone in &zones.zones {
        let line = |name: &str, unit: &str, quantity| BomLine {
            section_index: zone.section_index,
            zone_name: zone.zone_name.clone(),
            album_name: zone.album_name.clone(),
            n_auto: zone.n_auto,
            from: zone.from,
            to: zone.to,
            name: name.to_string(),
            unit: unit.to_string(),
            quantity,
        };
        if zone.bom.is_empty() {
            lines.push(line(EMPTY_BOM, "", None));
        } else {
            lines.extend(
                zone.bom
                    .iter()
                    .map(|item| line(&item.name, &item.unit, Some(item.quantity))),
            );
        }
    }
    lines
}
