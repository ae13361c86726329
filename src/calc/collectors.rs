//! Apartment distribution over riser collectors.

use super::geometry::{zone_ranges, ZoneRange};
use crate::model::Section;
use std::collections::BTreeMap;

/// Smallest collector that is manufactured.
pub const MIN_OUTLETS: u32 = 2;

/// Collector size → number of collectors.
pub type CollectorHistogram = BTreeMap<u32, u32>;

/// Splits `units` over `risers` collectors as evenly as possible.
///
/// Collectors left without units are dropped, the rest are raised to [`MIN_OUTLETS`].
pub fn split_over_risers(units: u32, risers: u32) -> impl Iterator<Item = u32> {
    let (base, rem) = if risers == 0 {
        (0, 0)
    } else {
        (units / risers, units % risers)
    };
    (0..risers)
        .map(move |i| if i < rem { base + 1 } else { base })
        .filter(|n| *n > 0)
        .map(|n| n.max(MIN_OUTLETS))
}

fn join_groups<'a>(groups: impl Iterator<Item = (&'a u32, &'a u32)>) -> String {
    let parts: Vec<String> = groups
        .filter(|(_, count)| **count > 0)
        .map(|(outlets, count)| format!("{count}×{outlets} вых."))
        .collect();
    if parts.is_empty() {
        "—".to_string()
    } else {
        parts.join(" + ")
    }
}

/// `"1×6 вых. + 2×3 вых."`, largest collectors first; `"—"` when empty.
#[must_use]
pub fn format_histogram(histogram: &CollectorHistogram) -> String {
    join_groups(histogram.iter().rev())
}

/// Collector set for `units` apartments on `risers` risers, smallest collectors first.
#[must_use]
pub fn format_collectors(units: u32, risers: u32) -> String {
    let mut histogram = CollectorHistogram::new();
    for outlets in split_over_risers(units, risers) {
        *histogram.entry(outlets).or_default() += 1;
    }
    join_groups(histogram.iter())
}

/// One collector per residential floor of the zone, sized `max(apartments, risers)`.
#[must_use]
pub fn collectors_distribution(section: &Section, range: &ZoneRange<'_>) -> CollectorHistogram {
    let risers = range.zone.risers_per_floor();
    let mut histogram = CollectorHistogram::new();
    for floor in range.residential_floors() {
        let apartments = section.apartments_on(floor);
        if apartments == 0 {
            continue;
        }
        let outlets = apartments.max(risers).max(MIN_OUTLETS);
        *histogram.entry(outlets).or_default() += 1;
    }
    histogram
}

/// Largest collector the zone needs, used to size the metering album.
#[must_use]
pub fn auto_n_for_zone_range(section: &Section, range: &ZoneRange<'_>) -> u32 {
    let risers = range.zone.risers_per_floor();
    range
        .residential_floors()
        .map(|floor| section.apartments_on(floor).max(risers))
        .fold(MIN_OUTLETS, u32::max)
}

/// Collectors of a whole section, one per riser per residential floor.
#[must_use]
pub fn section_riser_collectors(section: &Section) -> CollectorHistogram {
    let mut histogram = CollectorHistogram::new();
    for range in zone_ranges(section) {
        let risers = range.zone.risers_per_floor();
        for floor in range.residential_floors() {
            for outlets in split_over_risers(section.apartments_on(floor), risers) {
                *histogram.entry(outlets).or_default() += 1;
            }
        }
    }
    histogram
}

/// "выход", "выхода" or "выходов" to agree with `n`.
#[must_use]
pub fn outlets_suffix(n: u32) -> &'static str {
    if (11..=19).contains(&(n % 100)) {
        return "ов";
    }
    match n % 10 {
        1 => "",
        2..=4 => "а",
        _ => "ов",
    }
}

#[must_use]
pub fn collector_name(outlets: u32) -> String {
    format!("Коллектор на {outlets} выход{}", outlets_suffix(outlets))
}
