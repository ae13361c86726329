//! Commissioning work (ПНР), billed per metre of installed pipe.

use super::mop::mop_lengths_for_section;
use super::round2;
use super::zones::ZonesData;
use crate::model::{Section, System};
use serde::Serialize;
use std::collections::BTreeMap;

/// Commissioning units per metre of pipe.
pub const COMMISSIONING_COEFFICIENT: f64 = 0.02;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissioningRow {
    pub section_index: usize,
    pub building: String,
    pub system: System,
    pub system_name: &'static str,
    pub name: String,
    pub unit: &'static str,
    pub pipe_length: f64,
    pub quantity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommissioningData {
    pub by_section_and_system: BTreeMap<usize, BTreeMap<System, f64>>,
    pub by_section: BTreeMap<usize, f64>,
    pub by_system: BTreeMap<System, f64>,
    pub grand_total: f64,
    /// Billable rows, cold and hot supply only.
    pub rows: Vec<CommissioningRow>,
}

impl CommissioningData {
    fn add(&mut self, section_index: usize, system: System, length: f64) {
        *self
            .by_section_and_system
            .entry(section_index)
            .or_default()
            .entry(system)
            .or_default() += length;
        *self.by_section.entry(section_index).or_default() += length;
        *self.by_system.entry(system).or_default() += length;
        self.grand_total += length;
    }

    #[must_use]
    pub fn length(&self, section_index: usize, system: System) -> f64 {
        self.by_section_and_system
            .get(&section_index)
            .and_then(|systems| systems.get(&system))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Pipe lengths by section and system plus the billable rows.
///
/// Risers of all three systems count, corridor runs count for В1 and Т3.
/// Recirculation (Т4) is tracked in the totals but never billed.
#[must_use]
pub fn compute_commissioning_data(zones: &ZonesData, sections: &[Section]) -> CommissioningData {
    let mut data = CommissioningData::default();

    for zone in &zones.zones {
        for (system, _) in zone.diameters.piped() {
            data.add(zone.section_index, system, zone.len_all_risers);
        }
    }

    for (section_index, section) in sections.iter().enumerate() {
        let mop = mop_lengths_for_section(section);
        if mop.cold > 0.0 {
            data.add(section_index, System::V1, mop.cold);
        }
        if mop.hot > 0.0 {
            data.add(section_index, System::T3, mop.hot);
        }
    }

    let section_indices: Vec<usize> = data.by_section.keys().copied().collect();
    for section_index in section_indices {
        for (system, short) in [(System::V1, "ХВС"), (System::T3, "ГВС")] {
            let length = data.length(section_index, system);
            if length <= 0.0 {
                continue;
            }
            data.rows.push(CommissioningRow {
                section_index,
                building: format!("Корпус {}", section_index + 1),
                system,
                system_name: short,
                name: format!("Пусконаладочные работы по системе {short}"),
                unit: "усл. ед.",
                pipe_length: round2(length),
                quantity: round2(length * COMMISSIONING_COEFFICIENT),
            });
        }
    }
    data
}
