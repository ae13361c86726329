//! Material take-off grouped by category, for supplier requests.

use super::collectors::{collector_name, section_riser_collectors, CollectorHistogram};
use super::geometry::compensators_per_riser;
use super::mop::mop_lengths_for_section;
use super::round2;
use super::zones::ZonesData;
use crate::estimate::names;
use crate::model::{Catalog, Section, System};
use serde::Serialize;
use std::collections::BTreeMap;

/// Length of one floor sleeve, m.
pub const SLEEVE_LENGTH: f64 = 0.35;

pub const WATER_METER: &str =
    "Счетчик воды Ду 15 универс. крыльчатый одноструйный с цифровым выходом RS485";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecLine {
    pub name: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub unit: &'static str,
    pub lines: Vec<SpecLine>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Specification {
    pub categories: Vec<SpecCategory>,
    /// Fixed supports, two per compensator.
    pub supports_total: u32,
}

impl Specification {
    #[must_use]
    pub fn category(&self, key: &str) -> Option<&SpecCategory> {
        self.categories.iter().find(|c| c.key == key)
    }
}

fn category<K, F>(
    key: &'static str,
    title: &'static str,
    unit: &'static str,
    values: &BTreeMap<K, f64>,
    name: F,
) -> SpecCategory
where
    F: Fn(&K) -> String,
{
    let lines: Vec<SpecLine> = values
        .iter()
        .filter(|(_, qty)| **qty > 0.0)
        .map(|(k, qty)| SpecLine {
            name: name(k),
            quantity: round2(*qty),
        })
        .collect();
    let total = round2(values.values().sum());
    SpecCategory {
        key,
        title,
        unit,
        lines,
        total,
    }
}

/// Building-wide material take-off.
#[must_use]
pub fn compute_specification(
    zones: &ZonesData,
    sections: &[Section],
    catalog: &Catalog,
) -> Specification {
    let mut steel: BTreeMap<u32, f64> = BTreeMap::new();
    let mut sleeves: BTreeMap<u32, f64> = BTreeMap::new();
    let mut insulation: BTreeMap<u32, f64> = BTreeMap::new();
    let mut compensators: BTreeMap<u32, f64> = BTreeMap::new();
    let mut end_node_risers = 0;

    for zone in &zones.zones {
        let sleeve_count = zone.risers * zone.floor_count();
        for (system, dia) in zone.diameters.piped() {
            *steel.entry(dia).or_default() += zone.len_all_risers;
            *insulation.entry(dia).or_default() += zone.len_all_risers;
            *sleeves.entry(catalog.sleeve_diameter(dia)).or_default() +=
                f64::from(sleeve_count) * SLEEVE_LENGTH;
            if system != System::V1 {
                let count = compensators_per_riser(zone.height, dia) * zone.risers;
                if count > 0 {
                    *compensators.entry(dia).or_default() += f64::from(count);
                }
            }
            if system != System::T4 {
                end_node_risers += zone.risers;
            }
        }
    }

    let mut pex: BTreeMap<u32, f64> = BTreeMap::new();
    let mut meters = 0;
    let mut collectors = CollectorHistogram::new();
    for section in sections {
        let mop = mop_lengths_for_section(section);
        let length = mop.cold + mop.hot;
        if length > 0.0 {
            *pex.entry(mop.dn).or_default() += length;
            *insulation.entry(mop.dn).or_default() += length;
        }
        meters += (section.apartment_count() + section.rental_units()) * 2;
        for (outlets, count) in section_riser_collectors(section) {
            *collectors.entry(outlets).or_default() += count;
        }
    }
    let collectors_total: u32 = collectors.values().sum();

    let mut valves: BTreeMap<&str, f64> = BTreeMap::new();
    if end_node_risers > 0 {
        valves.insert(names::AIR_VENT, f64::from(end_node_risers));
        valves.insert(names::BALL_VALVE_15, f64::from(end_node_risers));
    }
    if collectors_total > 0 {
        let total = f64::from(collectors_total);
        for name in names::COLLECTOR_BINDING {
            *valves.entry(name).or_default() += total;
        }
    }

    let compensators_total: f64 = compensators.values().sum();
    let meter_lines: BTreeMap<&str, f64> = if meters > 0 {
        BTreeMap::from([(WATER_METER, f64::from(meters))])
    } else {
        BTreeMap::new()
    };
    let collector_counts: BTreeMap<u32, f64> = collectors
        .iter()
        .map(|(outlets, count)| (*outlets, f64::from(*count)))
        .collect();

    Specification {
        categories: vec![
            category("steel-galvanized", "Трубы стальные оцинкованные", "м", &steel, |d| {
                format!("Труба стальная ВГП Ду {d}")
            }),
            category("steel-sleeves", "Гильзы стальные", "м", &sleeves, |d| {
                format!("Гильза стальная Ду {d}")
            }),
            category("ppr-pipes", "Трубы из сшитого полиэтилена", "м", &pex, |d| {
                format!("Труба из сшитого полиэтилена Ду {d} мм")
            }),
            category("insulation", "Теплоизоляция", "м", &insulation, |d| {
                format!("Цилиндр из вспененного полиэтилена (каучука) Дн {d} мм")
            }),
            category("water-meters", "Приборы учёта воды", "шт", &meter_lines, |n| {
                (*n).to_string()
            }),
            category("compensators", "Компенсаторы сильфонные", "шт", &compensators, |d| {
                format!("Компенсатор сильфонный Ду {d}")
            }),
            category("collectors", "Узлы коллекторные", "шт", &collector_counts, |n| {
                collector_name(*n)
            }),
            category("shutoff-valves", "Запорная арматура", "шт", &valves, |n| {
                (*n).to_string()
            }),
        ],
        supports_total: compensators_total as u32 * 2,
    }
}
