use pretty_assertions::assert_eq;
use riser_estimator::calc::collectors::{collectors_distribution, split_over_risers, MIN_OUTLETS};
use riser_estimator::calc::geometry::skipped_zones;
use riser_estimator::calc::mop::mop_average_length;
use riser_estimator::calc::{
    compute_commissioning_data, compute_zones_data, floor_range_height_meters, format_collectors,
    mop_lengths_for_section, risers_overall, zone_floor_range, zone_height_meters, zone_ranges,
};
use riser_estimator::config::Config;
use riser_estimator::estimate::{build_estimate, pieces, EstimateItem, ItemKind, SortKey};
use riser_estimator::model::{
    CalcParams, Catalog, CollectorVendor, Diameters, EstimateSystem, Mop, Project, Section, System,
    Zone,
};
use riser_estimator::report::build_report;
use std::collections::BTreeMap;

fn section(floors: u32, zones: Vec<Zone>, apts: &[(u32, u32)]) -> Section {
    let mut section = Section::with_floors(floors);
    section.zones = zones;
    section.apts = apts.iter().copied().collect();
    section
}

fn params(h1: f64, hn: f64) -> CalcParams {
    CalcParams {
        h1,
        hn,
        ..CalcParams::default()
    }
}

#[test]
fn scenario_a_single_zone_risers() {
    let sections = vec![section(
        3,
        vec![Zone::new("Зона 1", 3, 2, Diameters::new(32, 32, 25))],
        &[(2, 4), (3, 4)],
    )];
    let zones = compute_zones_data(&sections, &params(3.0, 2.8), &Catalog::default());

    assert_eq!(zones.zones.len(), 1);
    assert_eq!(zones.zones[0].height, zone_height_meters(3.0, 2.8, 3));
    assert!((zones.zones[0].height - 8.6).abs() < 1e-9);

    let rows = risers_overall(&zones.by_diameter);
    let summary: Vec<(System, u32, u32, f64)> = rows
        .iter()
        .map(|r| (r.system, r.diameter, r.count, r.length))
        .collect();
    assert_eq!(
        summary,
        vec![
            (System::V1, 32, 2, 17.2),
            (System::T3, 32, 2, 17.2),
            (System::T4, 25, 2, 17.2),
        ]
    );
}

#[test]
fn scenario_b_collector_formatting() {
    let sizes: Vec<u32> = split_over_risers(10, 3).collect();
    assert_eq!(sizes, vec![4, 3, 3]);
    assert_eq!(format_collectors(10, 3), "2×3 вых. + 1×4 вых.");
}

#[test]
fn scenario_c_corridor_branches() {
    let mut s = section(2, vec![Zone::new("Зона 1", 2, 1, Diameters::new(32, 32, 25))], &[(2, 10)]);
    s.mop = Mop {
        length: 40.0,
        position: 0.0,
        dn: 20,
    };
    let lengths = mop_lengths_for_section(&s);
    assert_eq!(lengths.apartments, 10);
    assert_eq!(lengths.per_apartment, 21.8);
    assert_eq!(lengths.cold, 218.0);
    assert_eq!(lengths.hot, 218.0);
}

#[test]
fn scenario_d_sleeves_two_sizes_up() {
    let sections = vec![section(
        5,
        vec![
            Zone::new("Зона 1", 3, 2, Diameters::new(25, 25, 20)),
            Zone::new("Зона 2", 5, 2, Diameters::new(32, 32, 32)),
        ],
        &[],
    )];
    assert_eq!(zone_floor_range(&sections[0], 1), Some((4, 5)));

    let catalog = Catalog::default();
    assert_eq!(catalog.sleeve_diameter(32), 50);

    let p = params(3.0, 3.0);
    let zones = compute_zones_data(&sections, &p, &catalog);
    let estimate = build_estimate(&zones, &sections, &p, &catalog);
    let lists = &estimate.sections[0];

    let sleeve = |system, name: &str| {
        lists
            .find(system, ItemKind::Material, name)
            .map(|item| item.quantity)
    };
    // zone 2: 2 risers × 2 floors per pipe
    assert_eq!(sleeve(EstimateSystem::Cold, "Гильза стальная Ду 50"), Some(4.0));
    assert_eq!(sleeve(EstimateSystem::Hot, "Гильза стальная Ду 50"), Some(8.0));
    // zone 1: Ду 25 → Ду 40, 2 risers × 3 floors
    assert_eq!(sleeve(EstimateSystem::Cold, "Гильза стальная Ду 40"), Some(6.0));
}

#[test]
fn zone_ranges_partition_the_section() {
    let s = section(
        12,
        vec![
            Zone::new("Зона 1", 3, 1, Diameters::new(32, 32, 25)),
            Zone::new("Зона 2", 7, 1, Diameters::new(32, 32, 25)),
            Zone::new("Зона 3", 12, 1, Diameters::new(32, 32, 25)),
        ],
        &[],
    );
    let ranges: Vec<(u32, u32)> = zone_ranges(&s).iter().map(|r| (r.from, r.to)).collect();
    assert_eq!(ranges, vec![(1, 3), (4, 7), (8, 12)]);

    let covered: Vec<u32> = zone_ranges(&s)
        .iter()
        .flat_map(|r| r.from..=r.to)
        .collect();
    assert_eq!(covered, (1..=12).collect::<Vec<_>>());
}

#[test]
fn zone_below_cursor_is_skipped_without_moving_it() {
    let s = section(
        12,
        vec![
            Zone::new("Зона 1", 5, 1, Diameters::new(32, 32, 25)),
            Zone::new("Зона 2", 3, 1, Diameters::new(32, 32, 25)),
            Zone::new("Зона 3", 12, 1, Diameters::new(32, 32, 25)),
        ],
        &[],
    );
    let ranges: Vec<(usize, u32, u32)> = zone_ranges(&s)
        .iter()
        .map(|r| (r.zone_index, r.from, r.to))
        .collect();
    assert_eq!(ranges, vec![(0, 1, 5), (2, 6, 12)]);
    assert_eq!(skipped_zones(&s), vec![1]);
    assert_eq!(zone_floor_range(&s, 1), None);
}

#[test]
fn range_height_adds_up_to_zone_height() {
    for n in 1..=40 {
        let range = floor_range_height_meters(4.2, 3.15, 1, n);
        let zone = zone_height_meters(4.2, 3.15, n);
        assert!((range - zone).abs() < 1e-9, "floor {n}: {range} != {zone}");
    }
    assert_eq!(floor_range_height_meters(4.0, 3.0, 5, 4), 0.0);
    assert_eq!(floor_range_height_meters(4.0, 3.0, 0, 4), 0.0);
}

#[test]
fn collectors_never_below_two_outlets() {
    for units in 1..=20 {
        for risers in 1..=6 {
            assert!(
                split_over_risers(units, risers).all(|n| n >= MIN_OUTLETS),
                "{units} units on {risers} risers"
            );
        }
    }

    let s = section(
        6,
        vec![Zone::new("Зона 1", 6, 1, Diameters::new(32, 32, 25))],
        &[(2, 1), (3, 1), (4, 2), (5, 0), (6, 3)],
    );
    let range = zone_ranges(&s)[0];
    let histogram = collectors_distribution(&s, &range);
    assert!(histogram.keys().all(|n| *n >= MIN_OUTLETS));
    assert_eq!(histogram, BTreeMap::from([(2, 3), (3, 1)]));
}

#[test]
fn discrete_pieces_round_up() {
    for (length, norm) in [(17.2, 0.5), (3.0, 1.0 / 3.0), (0.1, 0.4), (100.0, 0.25), (9.99, 1.1)] {
        let qty = pieces(length, norm);
        assert_eq!(qty, (length * norm).ceil());
        assert!(qty >= length * norm);
    }
    assert_eq!(pieces(0.0, 0.5), 0.0);
}

#[test]
fn corridor_length_is_symmetric_around_the_middle() {
    for length in [10.0, 40.0, 75.5] {
        assert_eq!(mop_average_length(length, 5, 0.5, 1.0), length * 0.25);
        assert_eq!(mop_average_length(length, 5, 0.0, 1.0), length * 0.5);
        assert_eq!(mop_average_length(length, 5, 1.0, 1.0), length * 0.5);
    }
    assert_eq!(mop_average_length(0.0, 5, 0.5, 1.0), 0.0);
    assert_eq!(mop_average_length(40.0, 0, 0.5, 1.0), 0.0);
}

fn rich_project(vendor: CollectorVendor) -> Project {
    let mut s = section(
        25,
        vec![
            Zone::new("Зона 1", 12, 3, Diameters::new(50, 50, 40)),
            Zone::new("Зона 2", 25, 2, Diameters::new(65, 65, 50)),
        ],
        &[],
    );
    s.autofill_apartments(2, 25, 6);
    s.rent.enabled = true;
    s.rent.qty = 2;
    let params = CalcParams {
        fire_suppression: true,
        collector_vendor: vendor,
        ..params(4.0, 3.0)
    };
    Project::new("Дом".into(), vec![s.clone(), s], params)
}

fn assert_groups_contiguous(items: &[EstimateItem]) {
    let mut seen: Vec<SortKey> = Vec::new();
    for item in items {
        if seen.last() == Some(&item.sort_key) {
            continue;
        }
        assert!(
            !seen.contains(&item.sort_key),
            "group {} is split",
            item.sort_key
        );
        seen.push(item.sort_key);
    }
}

#[test]
fn estimate_groups_stay_together() {
    for vendor in [CollectorVendor::Ridan, CollectorVendor::Giacomini] {
        let report = build_report(&rich_project(vendor), &Config::default(), None);
        for lists in report
            .estimate
            .sections
            .iter()
            .chain(std::iter::once(&report.estimate.summary))
        {
            assert!(!lists.cold.is_empty());
            assert!(!lists.hot.is_empty());
            assert_groups_contiguous(&lists.cold);
            assert_groups_contiguous(&lists.hot);
        }
    }
}

#[test]
fn recirculation_is_left_out_of_commissioning_rows() {
    let sections = vec![section(
        3,
        vec![Zone::new("Зона 1", 3, 2, Diameters::new(32, 32, 25))],
        &[(2, 4), (3, 4)],
    )];
    let zones = compute_zones_data(&sections, &params(3.0, 2.8), &Catalog::default());
    let data = compute_commissioning_data(&zones, &sections);

    assert!(data.by_system.get(&System::T4).copied().unwrap_or(0.0) > 0.0);
    assert_eq!(data.rows.len(), 2);
    assert!(data.rows.iter().all(|row| row.system != System::T4));
}

#[test]
fn calculation_is_idempotent() {
    let project = rich_project(CollectorVendor::Domestic);
    let config = Config::default();
    let first = build_report(&project, &config, Some(120.0));
    let second = build_report(&project, &config, Some(120.0));
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn degenerate_input_never_panics() {
    let config = Config::default();
    let p = params(3.0, 3.0);

    // no sections at all
    let report = build_report(&Project::new("Пусто".into(), Vec::new(), p), &config, None);
    assert!(report.floors.rows.is_empty());
    assert!(report.zones.zones.is_empty());
    assert!(report.estimate.sections.is_empty());
    assert!(report.estimate.summary.is_empty());
    assert!(report.commissioning.rows.is_empty());

    // one storey, floor 1 listed in apartments
    let mut one_storey = section(
        1,
        vec![Zone::new("Зона 1", 1, 2, Diameters::new(32, 32, 25))],
        &[(1, 2)],
    );
    one_storey.rent.enabled = true;
    one_storey.rent.qty = 1;
    let report = build_report(&Project::new("Дом".into(), vec![one_storey], p), &config, None);
    assert_eq!(report.total_apartments, 0);
    assert_eq!(report.total_rental_units, 1);
    assert_eq!(report.zones.zones.len(), 1);

    // floors missing from the saved file decode to zero
    let zero: Section = serde_json::from_str(r#"{"apts": {"2": 4}, "zones": []}"#).unwrap();
    let report = build_report(&Project::new("Дом".into(), vec![zero], p), &config, None);
    assert_eq!(report.total_apartments, 0);
    assert!(report.floors.rows.is_empty());

    // zero risers count as one
    let no_risers = section(
        3,
        vec![Zone::new("Зона 1", 3, 0, Diameters::new(32, 32, 25))],
        &[(2, 4), (3, 4)],
    );
    let report = build_report(&Project::new("Дом".into(), vec![no_risers], p), &config, None);
    assert_eq!(report.zones.zones[0].risers, 1);
    let lists = &report.estimate.sections[0];
    let work = |system, name: &str| lists.find(system, ItemKind::Work, name).map(|i| i.quantity);
    assert_eq!(work(EstimateSystem::Cold, "Монтаж гильз"), Some(3.0));
    assert_eq!(work(EstimateSystem::Hot, "Монтаж гильз"), Some(6.0));
    assert_eq!(work(EstimateSystem::Cold, "Монтаж узла концевого"), Some(1.0));

    // a zone without pipes
    let dry = section(3, vec![Zone::new("Зона 1", 3, 2, Diameters::new(0, 0, 0))], &[(2, 4)]);
    let report = build_report(&Project::new("Дом".into(), vec![dry], p), &config, None);
    assert!(report.risers_overall.is_empty());
    // the riser shafts are still measured
    assert_eq!(report.zones.grand_total_risers_len, 18.0);
    let lists = &report.estimate.sections[0];
    assert!(lists
        .cold
        .iter()
        .chain(&lists.hot)
        .all(|i| !matches!(i.sort_key, SortKey::Steel(_) | SortKey::Sleeve | SortKey::EndNode)));
}
