use super::round2;
use super::zones::{DiameterKey, RiserAggregate};
use crate::model::System;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionRiserRow {
    pub section_index: usize,
    pub system: System,
    pub diameter: u32,
    pub count: u32,
    pub length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiserRow {
    pub system: System,
    pub diameter: u32,
    pub count: u32,
    pub length: f64,
}

/// Riser rows per section, ordered by section, system (В1, Т3, Т4), then diameter.
#[must_use]
pub fn risers_by_diameter(by_diameter: &BTreeMap<DiameterKey, RiserAggregate>) -> Vec<SectionRiserRow> {
    by_diameter
        .iter()
        .map(|(&(section_index, system, diameter), agg)| SectionRiserRow {
            section_index,
            system,
            diameter,
            count: agg.count,
            length: agg.length,
        })
        .collect()
}

/// Riser rows for the whole building, lengths rounded to centimetres.
#[must_use]
pub fn risers_overall(by_diameter: &BTreeMap<DiameterKey, RiserAggregate>) -> Vec<RiserRow> {
    let mut merged: BTreeMap<(System, u32), RiserAggregate> = BTreeMap::new();
    for (&(_, system, diameter), agg) in by_diameter {
        let entry = merged.entry((system, diameter)).or_default();
        entry.count += agg.count;
        entry.length += agg.length;
    }
    merged
        .into_iter()
        .map(|((system, diameter), agg)| RiserRow {
            system,
            diameter,
            count: agg.count,
            length: round2(agg.length),
        })
        .collect()
}
