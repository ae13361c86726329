//! Corridor branch runs (MOP) from the riser collector to each apartment.

use super::round2;
use crate::model::Section;
use serde::Serialize;

/// Drop and entry length per apartment pipe, m.
pub const DROP_HEIGHT: f64 = 1.8;
/// Routing coefficient; 1.0 is a straight corridor.
pub const ROUTING_COEFFICIENT: f64 = 1.0;

/// Mean horizontal distance from the collector to an apartment door.
///
/// `position` is where the collector sits along the corridor: 0.5 is the middle
/// (`L/4`), 0 and 1 are the ends (`L/2`).
#[must_use]
pub fn mop_average_length(length: f64, apartments: u32, position: f64, gamma: f64) -> f64 {
    if length <= 0.0 || apartments == 0 {
        return 0.0;
    }
    length * (0.25 + 0.25 * (2.0 * position - 1.0).abs()) * gamma
}

/// Branch pipe lengths of one section. Cold (В1) and hot (Т3) runs are identical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MopLengths {
    pub apartments: u32,
    pub corridor_length: f64,
    pub position: f64,
    pub dn: u32,
    pub per_apartment: f64,
    pub cold: f64,
    pub hot: f64,
}

impl MopLengths {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cold <= 0.0 && self.hot <= 0.0
    }
}

#[must_use]
pub fn mop_lengths_for_section(section: &Section) -> MopLengths {
    let apartments = section.apartment_count();
    let mop = &section.mop;
    let mut lengths = MopLengths {
        apartments,
        corridor_length: mop.length,
        position: mop.position,
        dn: mop.dn_or_default(),
        per_apartment: 0.0,
        cold: 0.0,
        hot: 0.0,
    };
    if apartments == 0 || mop.length <= 0.0 {
        return lengths;
    }

    let per_apartment =
        mop_average_length(mop.length, apartments, mop.position, ROUTING_COEFFICIENT) + DROP_HEIGHT;
    let per_system = per_apartment * f64::from(apartments);
    lengths.per_apartment = round2(per_apartment);
    lengths.cold = round2(per_system);
    lengths.hot = round2(per_system);
    lengths
}

/// Building totals `(cold, hot)`.
#[must_use]
pub fn mop_totals(sections: &[Section]) -> (f64, f64) {
    let (cold, hot) = sections
        .iter()
        .map(mop_lengths_for_section)
        .fold((0.0, 0.0), |(c, h), l| (c + l.cold, h + l.hot));
    (round2(cold), round2(hot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mop;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[test]
    fn average_length_by_collector_position() {
        assert_eq!(mop_average_length(40.0, 10, 0.5, 1.0), 10.0);
        assert_eq!(mop_average_length(40.0, 10, 0.0, 1.0), 20.0);
        assert_eq!(mop_average_length(40.0, 10, 1.0, 1.0), 20.0);
        assert_eq!(mop_average_length(0.0, 10, 0.5, 1.0), 0.0);
        assert_eq!(mop_average_length(40.0, 0, 0.5, 1.0), 0.0);
    }

    #[test]
    fn end_mounted_collector_section() {
        let mut section = Section::with_floors(5);
        section.apts = BTreeMap::from([(2, 10)]);
        section.mop = Mop {
            length: 40.0,
            position: 0.0,
            dn: 20,
        };
        let lengths = mop_lengths_for_section(&section);
        assert_eq!(lengths.apartments, 10);
        assert_eq!(lengths.per_apartment, 21.8);
        assert_eq!(lengths.cold, 218.0);
        assert_eq!(lengths.hot, 218.0);
    }

    #[test]
    fn rental_floor_is_not_counted() {
        let mut section = Section::with_floors(2);
        section.apts = BTreeMap::from([(1, 5)]);
        section.rent.enabled = true;
        let lengths = mop_lengths_for_section(&section);
        assert!(lengths.is_empty());
        assert_eq!(lengths.per_apartment, 0.0);
    }

    #[test]
    fn totals_sum_sections() {
        let mut section = Section::with_floors(3);
        section.apts = BTreeMap::from([(2, 2), (3, 2)]);
        // default corridor: 30 m, centred → 7.5 + 1.8 = 9.3 per apartment
        let sections = vec![section.clone(), section];
        assert_eq!(mop_totals(&sections), (74.4, 74.4));
    }
}
