//! Floor heights and the zone-to-floor cursor walk.

use crate::model::{Section, Zone};

/// Height from the bottom of floor 1 to the top of floor `to`.
#[must_use]
pub fn zone_height_meters(h1: f64, hn: f64, to: u32) -> f64 {
    match to {
        0 => 0.0,
        1 => h1,
        _ => h1 + f64::from(to - 1) * hn,
    }
}

/// Height of floors `from..=to`. Floor 1 counts as `h1`, every other floor as `hn`.
#[must_use]
pub fn floor_range_height_meters(h1: f64, hn: f64, from: u32, to: u32) -> f64 {
    if to < from || from == 0 {
        return 0.0;
    }
    let floors = to - from + 1;
    if from == 1 {
        h1 + f64::from(floors - 1) * hn
    } else {
        f64::from(floors) * hn
    }
}

/// Floors a zone actually covers once the zones before it are laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRange<'a> {
    pub zone_index: usize,
    pub zone: &'a Zone,
    pub from: u32,
    pub to: u32,
}

impl ZoneRange<'_> {
    #[must_use]
    pub fn floor_count(&self) -> u32 {
        self.to - self.from + 1
    }

    #[must_use]
    pub fn contains(&self, floor: u32) -> bool {
        (self.from..=self.to).contains(&floor)
    }

    /// Residential floors of the range; floor 1 belongs to rental units.
    pub fn residential_floors(&self) -> std::ops::RangeInclusive<u32> {
        self.from.max(2)..=self.to
    }
}

/// Walks the zones of a section bottom-up.
///
/// The cursor starts at floor 1. Each zone ends at `min(zone.to, floors)`;
/// a zone ending below the cursor is skipped and leaves the cursor where it is.
#[must_use]
pub fn zone_ranges(section: &Section) -> Vec<ZoneRange<'_>> {
    let mut cursor = 1;
    let mut ranges = Vec::with_capacity(section.zones.len());
    for (zone_index, zone) in section.zones.iter().enumerate() {
        let to = zone.to.min(section.floors);
        if to < cursor {
            continue;
        }
        ranges.push(ZoneRange {
            zone_index,
            zone,
            from: cursor,
            to,
        });
        cursor = to + 1;
    }
    ranges
}

/// Indices of zones the cursor walk skips because they end below the floors already covered.
#[must_use]
pub fn skipped_zones(section: &Section) -> Vec<usize> {
    let covered = zone_ranges(section);
    (0..section.zones.len())
        .filter(|idx| !covered.iter().any(|r| r.zone_index == *idx))
        .collect()
}

/// The zone covering `floor`, if any.
#[must_use]
pub fn section_zone_for_floor(section: &Section, floor: u32) -> Option<ZoneRange<'_>> {
    if floor == 0 {
        return None;
    }
    zone_ranges(section).into_iter().find(|r| r.contains(floor))
}

/// Effective `(from, to)` of the zone at `zone_index`, `None` when it is skipped.
#[must_use]
pub fn zone_floor_range(section: &Section, zone_index: usize) -> Option<(u32, u32)> {
    zone_ranges(section)
        .into_iter()
        .find(|r| r.zone_index == zone_index)
        .map(|r| (r.from, r.to))
}

/// Riser length between bellows compensators, m.
#[must_use]
pub fn compensator_step(dn: u32) -> f64 {
    match dn {
        0..=25 => 25.0,
        26..=40 => 30.0,
        _ => 35.0,
    }
}

/// Compensators on one riser of the given height.
#[must_use]
pub fn compensators_per_riser(height: f64, dn: u32) -> u32 {
    if height <= 0.0 || dn == 0 {
        return 0;
    }
    (height / compensator_step(dn)).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Diameters;
    use pretty_assertions::assert_eq;

    fn section(floors: u32, tops: &[u32]) -> Section {
        let mut section = Section::with_floors(floors);
        section.zones = tops
            .iter()
            .enumerate()
            .map(|(i, to)| Zone::new(format!("Зона {}", i + 1), *to, 2, Diameters::new(32, 32, 25)))
            .collect();
        section
    }

    fn spans(section: &Section) -> Vec<(usize, u32, u32)> {
        zone_ranges(section)
            .iter()
            .map(|r| (r.zone_index, r.from, r.to))
            .collect()
    }

    #[test]
    fn heights() {
        assert_eq!(zone_height_meters(3.0, 2.8, 0), 0.0);
        assert_eq!(zone_height_meters(3.0, 2.8, 1), 3.0);
        assert_eq!(zone_height_meters(3.0, 3.0, 4), 12.0);
        assert_eq!(floor_range_height_meters(3.0, 3.0, 1, 4), 12.0);
        assert_eq!(floor_range_height_meters(3.0, 3.0, 4, 5), 6.0);
        assert_eq!(floor_range_height_meters(3.0, 3.0, 5, 4), 0.0);
        assert_eq!(floor_range_height_meters(3.0, 3.0, 0, 4), 0.0);
    }

    #[test]
    fn zones_partition_floors() {
        let s = section(12, &[6, 12]);
        assert_eq!(spans(&s), vec![(0, 1, 6), (1, 7, 12)]);
        assert!(skipped_zones(&s).is_empty());
    }

    #[test]
    fn zone_tops_clamp_to_section_height() {
        let s = section(9, &[5, 14]);
        assert_eq!(spans(&s), vec![(0, 1, 5), (1, 6, 9)]);
    }

    #[test]
    fn out_of_order_zone_is_skipped_without_moving_cursor() {
        // zone 2 ends below zone 1, floors 9-12 stay with zone 3
        let s = section(12, &[8, 4, 12]);
        assert_eq!(spans(&s), vec![(0, 1, 8), (2, 9, 12)]);
        assert_eq!(skipped_zones(&s), vec![1]);
        assert_eq!(zone_floor_range(&s, 1), None);
        assert_eq!(zone_floor_range(&s, 2), Some((9, 12)));
    }

    #[test]
    fn floors_above_last_zone_are_uncovered() {
        let s = section(10, &[3, 7]);
        assert_eq!(section_zone_for_floor(&s, 7).map(|r| r.zone_index), Some(1));
        assert!(section_zone_for_floor(&s, 8).is_none());
        assert!(section_zone_for_floor(&s, 0).is_none());
    }

    #[test]
    fn compensator_spacing_by_diameter() {
        assert_eq!(compensator_step(25), 25.0);
        assert_eq!(compensator_step(32), 30.0);
        assert_eq!(compensator_step(40), 30.0);
        assert_eq!(compensator_step(50), 35.0);
        assert_eq!(compensators_per_riser(61.0, 32), 2);
        assert_eq!(compensators_per_riser(24.9, 20), 0);
        assert_eq!(compensators_per_riser(70.0, 0), 0);
    }
}
