//! Expansion of the zone aggregates into itemized cold and hot lists.
//!
//! Each stage appends its items to the section lists; the lists are sorted
//! once at the end.

use super::item::{EstimateItem, SectionEstimate, SortKey};
use super::names;
use super::sort::sort_items;
use crate::calc::collectors::{collector_name, section_riser_collectors};
use crate::calc::geometry::compensators_per_riser;
use crate::calc::mop::mop_lengths_for_section;
use crate::calc::specification::WATER_METER;
use crate::calc::zones::ZonesData;
use crate::calc::{round1, round2};
use crate::model::{CalcParams, Catalog, EstimateSystem, Section, System};
use std::collections::BTreeMap;

/// Compensators at or below this diameter are installed as the small group.
pub const SMALL_COMPENSATOR_MAX_DN: u32 = 50;

/// Discrete pieces needed for `length` metres at `norm` pieces per metre. Never rounds down.
#[must_use]
pub fn pieces(length: f64, norm: f64) -> f64 {
    let raw = length * norm;
    if raw <= 0.0 {
        0.0
    } else {
        raw.ceil()
    }
}

/// Length and per-diameter split of one (section, estimate list).
#[derive(Debug, Default)]
struct ByDiameter<T> {
    total: T,
    by_dn: BTreeMap<u32, T>,
}

impl<T: Copy + Default + std::ops::AddAssign> ByDiameter<T> {
    fn add(&mut self, dn: u32, value: T) {
        self.total += value;
        *self.by_dn.entry(dn).or_default() += value;
    }
}

/// Itemized estimate of every section, sorted.
#[must_use]
pub fn aggregate_estimate(
    zones: &ZonesData,
    sections: &[Section],
    params: &CalcParams,
    catalog: &Catalog,
) -> Vec<SectionEstimate> {
    let mut estimate = vec![SectionEstimate::default(); sections.len()];

    steel_risers(&mut estimate, zones, catalog);
    branch_pipes(&mut estimate, sections, catalog);
    insulation(&mut estimate, zones, sections);
    sleeves(&mut estimate, zones, catalog);
    compensators_and_supports(&mut estimate, zones);
    water_meters(&mut estimate, sections);
    rental_nodes(&mut estimate, sections);
    end_nodes(&mut estimate, zones);
    if params.fire_suppression {
        fire_suppression(&mut estimate, sections);
    }
    collectors(&mut estimate, sections, params);
    commissioning(&mut estimate);

    for (section_index, lists) in estimate.iter_mut().enumerate() {
        lists.cold = sort_items(std::mem::take(&mut lists.cold));
        lists.hot = sort_items(std::mem::take(&mut lists.hot));
        tracing::debug!(
            section = section_index + 1,
            cold = lists.cold.len(),
            hot = lists.hot.len(),
            "estimate section aggregated"
        );
    }
    estimate
}

fn steel_risers(estimate: &mut [SectionEstimate], zones: &ZonesData, catalog: &Catalog) {
    let mut merged: BTreeMap<(usize, EstimateSystem, u32), f64> = BTreeMap::new();
    for (&(section_index, system, dn), agg) in &zones.by_diameter {
        *merged
            .entry((section_index, system.estimate_system(), dn))
            .or_default() += agg.length;
    }

    for ((section_index, system, dn), length) in merged {
        let Some(lists) = estimate.get_mut(section_index) else {
            continue;
        };
        let length = round2(length);
        if length <= 0.0 {
            continue;
        }
        let key = SortKey::Steel(dn);
        lists.push(
            system,
            EstimateItem::work(key, format!("{}: Ду {dn}", names::STEEL_WORK), "м", length),
        );
        lists.push(
            system,
            EstimateItem::material(key, 2, format!("Труба стальная ВГП Ду {dn}"), "м", length),
        );
        if let Some(rule) = catalog.clamp_rule(dn) {
            let qty = pieces(length, rule.norm);
            if qty > 0.0 {
                lists.push(system, EstimateItem::material(key, 3, rule.name.clone(), "шт", qty));
            }
        }
    }
}

fn branch_pipes(estimate: &mut [SectionEstimate], sections: &[Section], catalog: &Catalog) {
    for (lists, section) in estimate.iter_mut().zip(sections) {
        let mop = mop_lengths_for_section(section);
        let dn = mop.dn;
        let key = SortKey::Pex(dn);
        for (system, length) in [(EstimateSystem::Cold, mop.cold), (EstimateSystem::Hot, mop.hot)] {
            if length <= 0.0 {
                continue;
            }
            let shown = round1(length);
            lists.push(
                system,
                EstimateItem::work(
                    key,
                    format!("{} Ду {dn} мм (включая фитинги)", names::PEX_WORK),
                    "м",
                    shown,
                ),
            );
            lists.push(
                system,
                EstimateItem::material(
                    key,
                    2,
                    format!("Труба из сшитого полиэтилена Ду {dn} мм"),
                    "м",
                    shown,
                ),
            );
            let mut order = 3;
            for rule in catalog.fitting_rules(dn) {
                let qty = pieces(length, rule.norm);
                if qty > 0.0 {
                    lists.push(
                        system,
                        EstimateItem::material(key, order, rule.name.clone(), &rule.unit, qty),
                    );
                    order += 1;
                }
            }
        }
    }
}

fn insulation(estimate: &mut [SectionEstimate], zones: &ZonesData, sections: &[Section]) {
    let mut runs: BTreeMap<(usize, EstimateSystem), ByDiameter<f64>> = BTreeMap::new();
    for (&(section_index, system, dn), agg) in &zones.by_diameter {
        runs.entry((section_index, system.estimate_system()))
            .or_default()
            .add(dn, agg.length);
    }
    for (section_index, section) in sections.iter().enumerate() {
        let mop = mop_lengths_for_section(section);
        if mop.cold > 0.0 {
            runs.entry((section_index, EstimateSystem::Cold))
                .or_default()
                .add(mop.dn, mop.cold);
        }
        if mop.hot > 0.0 {
            runs.entry((section_index, EstimateSystem::Hot))
                .or_default()
                .add(mop.dn, mop.hot);
        }
    }

    for ((section_index, system), run) in runs {
        let Some(lists) = estimate.get_mut(section_index) else {
            continue;
        };
        if run.total <= 0.0 {
            continue;
        }
        lists.push(
            system,
            EstimateItem::work(SortKey::Insulation, names::INSULATION_WORK, "м", round1(run.total)),
        );
        for (dn, length) in run.by_dn {
            lists.push(
                system,
                EstimateItem::material(
                    SortKey::Insulation,
                    100 + dn,
                    format!("Цилиндр из вспененного полиэтилена (каучука) Дн {dn} мм"),
                    "м",
                    round1(length),
                ),
            );
        }
    }
}

fn sleeves(estimate: &mut [SectionEstimate], zones: &ZonesData, catalog: &Catalog) {
    let mut counts: BTreeMap<(usize, EstimateSystem), ByDiameter<u32>> = BTreeMap::new();
    for zone in &zones.zones {
        let per_system = zone.risers * zone.floor_count();
        for (system, dn) in zone.diameters.piped() {
            counts
                .entry((zone.section_index, system.estimate_system()))
                .or_default()
                .add(catalog.sleeve_diameter(dn), per_system);
        }
    }

    for ((section_index, system), count) in counts {
        let Some(lists) = estimate.get_mut(section_index) else {
            continue;
        };
        if count.total == 0 {
            continue;
        }
        lists.push(
            system,
            EstimateItem::work(SortKey::Sleeve, names::SLEEVE_WORK, "шт", f64::from(count.total)),
        );
        for (dn, qty) in count.by_dn {
            lists.push(
                system,
                EstimateItem::material(
                    SortKey::Sleeve,
                    100 + dn,
                    format!("Гильза стальная Ду {dn}"),
                    "шт",
                    f64::from(qty),
                ),
            );
        }
    }
}

#[derive(Debug, Default)]
struct HotRiserFittings {
    small: ByDiameter<u32>,
    big: ByDiameter<u32>,
    supports: ByDiameter<u32>,
}

fn compensators_and_supports(estimate: &mut [SectionEstimate], zones: &ZonesData) {
    let mut per_section: BTreeMap<usize, HotRiserFittings> = BTreeMap::new();
    for zone in &zones.zones {
        for system in [System::T3, System::T4] {
            let dn = zone.diameters.get(system);
            let count = compensators_per_riser(zone.height, dn) * zone.risers;
            if count == 0 {
                continue;
            }
            let fittings = per_section.entry(zone.section_index).or_default();
            if dn <= SMALL_COMPENSATOR_MAX_DN {
                fittings.small.add(dn, count);
            } else {
                fittings.big.add(dn, count);
            }
            fittings.supports.add(dn, count * 2);
        }
    }

    for (section_index, fittings) in per_section {
        let Some(lists) = estimate.get_mut(section_index) else {
            continue;
        };
        for (key, work, group) in [
            (SortKey::CompensatorSmall, names::COMPENSATOR_SMALL_WORK, &fittings.small),
            (SortKey::CompensatorBig, names::COMPENSATOR_BIG_WORK, &fittings.big),
        ] {
            if group.total == 0 {
                continue;
            }
            lists.hot.push(EstimateItem::work(key, work, "шт", f64::from(group.total)));
            for (dn, qty) in &group.by_dn {
                lists.hot.push(EstimateItem::material(
                    key,
                    100 + dn,
                    format!("Компенсатор сильфонный Ду {dn}"),
                    "шт",
                    f64::from(*qty),
                ));
            }
        }

        if fittings.supports.total > 0 {
            lists.hot.push(EstimateItem::work(
                SortKey::Support,
                names::SUPPORT_WORK,
                "шт",
                f64::from(fittings.supports.total),
            ));
            for (dn, qty) in &fittings.supports.by_dn {
                lists.hot.push(EstimateItem::material(
                    SortKey::Support,
                    100 + dn,
                    format!("Опора неподвижная Ду {dn}"),
                    "шт",
                    f64::from(*qty),
                ));
            }
        }
    }
}

fn water_meters(estimate: &mut [SectionEstimate], sections: &[Section]) {
    for (lists, section) in estimate.iter_mut().zip(sections) {
        let units = section.apartment_count() + section.rental_units();
        if units == 0 {
            continue;
        }
        let qty = f64::from(units);
        for system in EstimateSystem::ALL {
            lists.push(system, EstimateItem::work(SortKey::Meter, names::METER_WORK, "шт", qty));
            lists.push(
                system,
                EstimateItem::material(SortKey::Meter, 2, WATER_METER, "шт", qty),
            );
        }
    }
}

fn rental_nodes(estimate: &mut [SectionEstimate], sections: &[Section]) {
    for (lists, section) in estimate.iter_mut().zip(sections) {
        let rentals = section.rental_units();
        if rentals == 0 {
            continue;
        }
        let qty = f64::from(rentals);
        for system in EstimateSystem::ALL {
            lists.push(
                system,
                EstimateItem::work(SortKey::RentalNode, names::RENTAL_NODE_WORK, "шт", qty),
            );
            for (order, name) in (2..).zip(names::RENTAL_NODE_MATERIALS) {
                lists.push(
                    system,
                    EstimateItem::material(SortKey::RentalNode, order, name, "шт", qty),
                );
            }
        }
    }
}

fn end_nodes(estimate: &mut [SectionEstimate], zones: &ZonesData) {
    let mut risers: BTreeMap<(usize, EstimateSystem), u32> = BTreeMap::new();
    for zone in &zones.zones {
        for (system, estimate_system) in
            [(System::V1, EstimateSystem::Cold), (System::T3, EstimateSystem::Hot)]
        {
            if zone.diameters.get(system) > 0 {
                *risers.entry((zone.section_index, estimate_system)).or_default() += zone.risers;
            }
        }
    }

    for ((section_index, system), count) in risers {
        let Some(lists) = estimate.get_mut(section_index) else {
            continue;
        };
        if count == 0 {
            continue;
        }
        let qty = f64::from(count);
        lists.push(system, EstimateItem::work(SortKey::EndNode, names::END_NODE_WORK, "шт", qty));
        lists.push(
            system,
            EstimateItem::material(SortKey::EndNode, 2, names::AIR_VENT, "шт", qty),
        );
        lists.push(
            system,
            EstimateItem::material(SortKey::EndNode, 3, names::BALL_VALVE_15, "шт", qty),
        );
    }
}

fn fire_suppression(estimate: &mut [SectionEstimate], sections: &[Section]) {
    for (lists, section) in estimate.iter_mut().zip(sections) {
        let apartments = section.apartment_count();
        if apartments == 0 {
            continue;
        }
        let qty = f64::from(apartments);
        lists.cold.extend([
            EstimateItem::work(SortKey::Ivpt, names::IVPT_WORK, "шт", qty),
            EstimateItem::material(SortKey::Ivpt, 2, names::IVPT_DEVICE, "шт", qty),
            EstimateItem::work(SortKey::IvptValve, names::IVPT_VALVE_WORK, "шт", qty),
            EstimateItem::material(SortKey::IvptValve, 2, names::IVPT_VALVE, "шт", qty),
        ]);
    }
}

fn collectors(estimate: &mut [SectionEstimate], sections: &[Section], params: &CalcParams) {
    let vendor = params.collector_vendor;
    let (work, targets) = if vendor.combined_assembly() {
        (names::COLLECTOR_COMBINED_WORK, &EstimateSystem::ALL[..1])
    } else {
        (names::COLLECTOR_WORK, &EstimateSystem::ALL[..])
    };

    for (lists, section) in estimate.iter_mut().zip(sections) {
        let histogram = section_riser_collectors(section);
        let total: u32 = histogram.values().sum();
        if total == 0 {
            continue;
        }
        let total = f64::from(total);
        for system in targets {
            let list = lists.get_mut(*system);
            list.push(EstimateItem::work(SortKey::Collector, work, "шт", total));
            for (outlets, count) in &histogram {
                list.push(EstimateItem::material(
                    SortKey::Collector,
                    100 + outlets,
                    collector_name(*outlets),
                    "шт",
                    f64::from(*count),
                ));
            }
            for (order, name) in (500..).zip(names::COLLECTOR_BINDING) {
                list.push(EstimateItem::material(SortKey::Collector, order, name, "шт", total));
            }
        }
    }
}

fn commissioning(estimate: &mut [SectionEstimate]) {
    for lists in estimate.iter_mut() {
        for system in EstimateSystem::ALL {
            let list = lists.get_mut(system);
            let length = list
                .iter()
                .find(|item| item.is_work() && item.sort_key == SortKey::Insulation)
                .map_or(0.0, |item| item.quantity);
            if length > 0.0 {
                list.push(EstimateItem::work(
                    SortKey::Commissioning,
                    names::COMMISSIONING_WORK,
                    "м",
                    length,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::zones::compute_zones_data;
    use crate::estimate::item::ItemKind;
    use crate::model::{CollectorVendor, Diameters, Mop, Zone};
    use pretty_assertions::assert_eq;

    fn section() -> Section {
        let mut section = Section::with_floors(3);
        section.apts = BTreeMap::from([(2, 4), (3, 4)]);
        section.mop = Mop {
            length: 0.0,
            ..Mop::default()
        };
        section.zones = vec![Zone::new("Зона 1", 3, 2, Diameters::new(32, 32, 25))];
        section
    }

    fn params() -> CalcParams {
        CalcParams {
            h1: 3.0,
            hn: 2.8,
            ..CalcParams::default()
        }
    }

    fn build(sections: &[Section], params: &CalcParams) -> Vec<SectionEstimate> {
        let catalog = Catalog::default();
        let zones = compute_zones_data(sections, params, &catalog);
        aggregate_estimate(&zones, sections, params, &catalog)
    }

    fn qty(list: &SectionEstimate, system: EstimateSystem, kind: ItemKind, name: &str) -> Option<f64> {
        list.find(system, kind, name).map(|item| item.quantity)
    }

    #[test]
    fn pieces_round_up() {
        assert_eq!(pieces(17.2, 0.35), 7.0);
        assert_eq!(pieces(10.0, 0.5), 5.0);
        assert_eq!(pieces(0.0, 0.5), 0.0);
        assert_eq!(pieces(0.01, 0.1), 1.0);
    }

    #[test]
    fn steel_recirculation_joins_hot_list() {
        let estimate = build(&[section()], &params());
        let lists = &estimate[0];
        let cold_work = format!("{}: Ду 32", names::STEEL_WORK);
        assert_eq!(qty(lists, EstimateSystem::Cold, ItemKind::Work, &cold_work), Some(17.2));
        assert_eq!(
            qty(lists, EstimateSystem::Hot, ItemKind::Material, "Труба стальная ВГП Ду 25"),
            Some(17.2)
        );
        // 17.2 m × 0.35 clamps per metre = 6.02 → 7
        assert_eq!(
            qty(
                lists,
                EstimateSystem::Cold,
                ItemKind::Material,
                "Хомут для стальной оцинкованной трубы Ду 32"
            ),
            Some(7.0)
        );
        assert_eq!(lists.hot[0].sort_key, SortKey::Steel(25));
        assert_eq!(lists.hot[3].sort_key, SortKey::Steel(32));
    }

    #[test]
    fn insulation_and_commissioning_share_length() {
        let estimate = build(&[section()], &params());
        let lists = &estimate[0];
        assert_eq!(
            qty(lists, EstimateSystem::Hot, ItemKind::Work, names::INSULATION_WORK),
            Some(34.4)
        );
        assert_eq!(
            qty(lists, EstimateSystem::Hot, ItemKind::Work, names::COMMISSIONING_WORK),
            Some(34.4)
        );
        assert_eq!(lists.hot.last().map(|i| i.sort_key), Some(SortKey::Commissioning));
    }

    #[test]
    fn sleeves_compensators_and_meters() {
        let mut s = section();
        s.floors = 10;
        s.zones = vec![
            Zone::new("Зона 1", 3, 2, Diameters::new(32, 32, 25)),
            Zone::new("Зона 2", 10, 2, Diameters::new(65, 65, 50)),
        ];
        s.rent.enabled = true;
        s.rent.qty = 3;
        let p = CalcParams {
            h1: 3.0,
            hn: 3.0,
            ..CalcParams::default()
        };
        let estimate = build(&[s], &p);
        let lists = &estimate[0];

        // zone 2 spans floors 4-10: 2 risers × 7 floors per system
        assert_eq!(
            qty(lists, EstimateSystem::Hot, ItemKind::Material, "Гильза стальная Ду 80"),
            Some(14.0)
        );
        assert_eq!(
            qty(lists, EstimateSystem::Cold, ItemKind::Work, names::SLEEVE_WORK),
            Some(6.0 + 14.0)
        );
        // zone 2 is 21 m tall: Т3 Ду 65 every 35 m → none, Т4 Ду 50 → none
        assert_eq!(qty(lists, EstimateSystem::Hot, ItemKind::Work, names::COMPENSATOR_BIG_WORK), None);
        assert!(lists.hot.iter().all(|i| i.sort_key != SortKey::Support));

        assert_eq!(qty(lists, EstimateSystem::Cold, ItemKind::Work, names::METER_WORK), Some(11.0));
        assert_eq!(qty(lists, EstimateSystem::Hot, ItemKind::Material, WATER_METER), Some(11.0));
        assert_eq!(
            qty(lists, EstimateSystem::Hot, ItemKind::Material, "Регулятор давления Ду 15"),
            Some(3.0)
        );
    }

    #[test]
    fn compensators_split_by_size() {
        let mut s = section();
        s.floors = 25;
        s.zones = vec![Zone::new("Зона 1", 25, 2, Diameters::new(65, 65, 50))];
        let p = CalcParams {
            h1: 3.0,
            hn: 3.0,
            ..CalcParams::default()
        };
        let estimate = build(&[s], &p);
        let lists = &estimate[0];
        // 75 m riser: Ду 65 → 2 per riser, Ду 50 → 2 per riser
        assert_eq!(
            qty(lists, EstimateSystem::Hot, ItemKind::Work, names::COMPENSATOR_BIG_WORK),
            Some(4.0)
        );
        assert_eq!(
            qty(lists, EstimateSystem::Hot, ItemKind::Work, names::COMPENSATOR_SMALL_WORK),
            Some(4.0)
        );
        assert_eq!(qty(lists, EstimateSystem::Hot, ItemKind::Work, names::SUPPORT_WORK), Some(16.0));
        assert_eq!(
            qty(lists, EstimateSystem::Hot, ItemKind::Material, "Опора неподвижная Ду 65"),
            Some(8.0)
        );
        let order: Vec<SortKey> = lists
            .hot
            .iter()
            .filter(|i| i.is_work())
            .map(|i| i.sort_key)
            .filter(|k| {
                matches!(
                    k,
                    SortKey::CompensatorSmall | SortKey::CompensatorBig | SortKey::Support
                )
            })
            .collect();
        assert_eq!(
            order,
            vec![SortKey::CompensatorSmall, SortKey::CompensatorBig, SortKey::Support]
        );
    }

    #[test]
    fn fire_suppression_is_cold_only() {
        let p = CalcParams {
            fire_suppression: true,
            ..params()
        };
        let estimate = build(&[section()], &p);
        let lists = &estimate[0];
        assert_eq!(qty(lists, EstimateSystem::Cold, ItemKind::Material, names::IVPT_DEVICE), Some(8.0));
        assert_eq!(qty(lists, EstimateSystem::Cold, ItemKind::Material, names::IVPT_VALVE), Some(8.0));
        assert!(lists.hot.iter().all(|i| !matches!(i.sort_key, SortKey::Ivpt | SortKey::IvptValve)));
    }

    #[test]
    fn collector_vendor_decides_lists() {
        let ridan = CalcParams {
            collector_vendor: CollectorVendor::Ridan,
            ..params()
        };
        let estimate = build(&[section()], &ridan);
        let lists = &estimate[0];
        // 4 apartments on 2 risers, floors 2 and 3
        assert_eq!(
            qty(lists, EstimateSystem::Cold, ItemKind::Work, names::COLLECTOR_COMBINED_WORK),
            Some(4.0)
        );
        assert_eq!(
            qty(lists, EstimateSystem::Cold, ItemKind::Material, "Коллектор на 2 выхода"),
            Some(4.0)
        );
        assert_eq!(qty(lists, EstimateSystem::Cold, ItemKind::Material, "Манометр"), Some(4.0));
        assert!(lists.hot.iter().all(|i| i.sort_key != SortKey::Collector));

        let estimate = build(&[section()], &params());
        let lists = &estimate[0];
        for system in EstimateSystem::ALL {
            assert_eq!(qty(lists, system, ItemKind::Work, names::COLLECTOR_WORK), Some(4.0));
        }
    }

    #[test]
    fn end_nodes_count_risers() {
        let estimate = build(&[section()], &params());
        let lists = &estimate[0];
        assert_eq!(qty(lists, EstimateSystem::Cold, ItemKind::Work, names::END_NODE_WORK), Some(2.0));
        assert_eq!(qty(lists, EstimateSystem::Hot, ItemKind::Material, names::AIR_VENT), Some(2.0));
    }

    #[test]
    fn end_nodes_skip_unpiped_zones() {
        let mut s = section();
        s.floors = 6;
        s.zones = vec![
            // hot only: no cold riser to close off
            Zone::new("Зона 1", 3, 2, Diameters::new(0, 32, 25)),
            Zone::new("Зона 2", 6, 3, Diameters::new(32, 32, 25)),
        ];
        let estimate = build(&[s], &params());
        let lists = &estimate[0];
        assert_eq!(qty(lists, EstimateSystem::Cold, ItemKind::Work, names::END_NODE_WORK), Some(3.0));
        assert_eq!(qty(lists, EstimateSystem::Hot, ItemKind::Work, names::END_NODE_WORK), Some(5.0));
        assert_eq!(qty(lists, EstimateSystem::Cold, ItemKind::Material, names::AIR_VENT), Some(3.0));
    }

    #[test]
    fn branch_pipes_with_fittings() {
        let mut s = section();
        s.mop = Mop {
            length: 40.0,
            position: 0.0,
            dn: 20,
        };
        let estimate = build(&[s], &params());
        let lists = &estimate[0];
        let work = format!("{} Ду 20 мм (включая фитинги)", names::PEX_WORK);
        // 8 apartments × 21.8 m
        assert_eq!(qty(lists, EstimateSystem::Cold, ItemKind::Work, &work), Some(174.4));
        // 174.4 × 0.3 = 52.32 → 53
        assert_eq!(
            qty(
                lists,
                EstimateSystem::Hot,
                ItemKind::Material,
                "Угольник для трубы из сшитого полиэтилена Ø20"
            ),
            Some(53.0)
        );
        let pex: Vec<u32> = lists
            .cold
            .iter()
            .filter(|i| i.sort_key == SortKey::Pex(20))
            .map(|i| i.sort_order)
            .collect();
        assert_eq!(pex, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_section_has_empty_lists() {
        let estimate = build(&[Section::with_floors(5)], &params());
        assert!(estimate[0].is_empty());
    }
}
