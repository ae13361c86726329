use super::collectors::format_collectors;
use super::geometry::{section_zone_for_floor, skipped_zones};
use crate::model::Section;
use serde::Serialize;

/// What one section shows on one floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorCell {
    pub zone: String,
    pub diameters: String,
    pub collectors: String,
}

impl FloorCell {
    fn empty() -> Self {
        Self {
            zone: "—".to_string(),
            diameters: "—".to_string(),
            collectors: "—".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorRow {
    pub floor: u32,
    pub sections: Vec<FloorCell>,
    pub apartments: u32,
    pub rentals: u32,
    pub risers: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FloorsData {
    pub rows: Vec<FloorRow>,
    pub warnings: Vec<String>,
}

/// Floor-by-floor table of the whole building, bottom floor first.
///
/// Warns about floors that have apartments or rental units but no covering
/// zone in any section, and about zones the cursor walk skips.
#[must_use]
pub fn compute_floors_data(sections: &[Section]) -> FloorsData {
    let max_floors = sections.iter().map(|s| s.floors).max().unwrap_or(0);
    let mut data = FloorsData::default();

    for (section_index, section) in sections.iter().enumerate() {
        for zone_index in skipped_zones(section) {
            data.warnings.push(format!(
                "Корпус {}: зона «{}» заканчивается ниже уже покрытых этажей и не учитывается.",
                section_index + 1,
                section.zones[zone_index].name
            ));
        }
    }

    for floor in 1..=max_floors {
        let mut row = FloorRow {
            floor,
            sections: Vec::with_capacity(sections.len()),
            apartments: 0,
            rentals: 0,
            risers: 0,
        };
        let mut covered = false;

        for section in sections {
            let units = if floor == 1 {
                section.rental_units()
            } else {
                section.apartments_on(floor)
            };
            if floor == 1 {
                row.rentals += units;
            } else {
                row.apartments += units;
            }

            let Some(range) = section_zone_for_floor(section, floor) else {
                row.sections.push(FloorCell::empty());
                continue;
            };
            covered = true;
            let risers = range.zone.risers_per_floor();
            row.risers += risers;
            row.sections.push(FloorCell {
                zone: format!("{} ({}–{})", range.zone.name, range.from, range.to),
                diameters: range.zone.fixed_d.to_string(),
                collectors: format_collectors(units, risers),
            });
        }

        if (row.apartments > 0 || row.rentals > 0) && !covered {
            data.warnings.push(format!(
                "Этаж {floor}: заданы квартиры/аренда, но ни одна зона корпуса не покрывает этот этаж."
            ));
        }
        data.rows.push(row);
    }

    for warning in &data.warnings {
        tracing::warn!("{warning}");
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Diameters, Zone};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn section(floors: u32, apts: &[(u32, u32)], tops: &[u32]) -> Section {
        let mut section = Section::with_floors(floors);
        section.apts = apts.iter().copied().collect::<BTreeMap<_, _>>();
        section.zones = tops
            .iter()
            .enumerate()
            .map(|(i, to)| Zone::new(format!("Зона {}", i + 1), *to, 2, Diameters::new(32, 32, 25)))
            .collect();
        section
    }

    #[test]
    fn rows_span_tallest_section() {
        let mut low = section(2, &[(2, 3)], &[2]);
        low.rent.enabled = true;
        low.rent.qty = 3;
        let high = section(4, &[(2, 4), (4, 5)], &[4]);
        let data = compute_floors_data(&[low, high]);

        assert_eq!(data.rows.len(), 4);
        let first = &data.rows[0];
        assert_eq!((first.rentals, first.apartments, first.risers), (3, 0, 4));
        // three rental units on two risers: 2 + 1, the single one raised to 2
        assert_eq!(first.sections[0].collectors, "2×2 вых.");
        assert_eq!(data.rows[1].apartments, 7);
        assert_eq!(data.rows[3].sections[0], FloorCell::empty());
        assert_eq!(data.rows[3].sections[1].zone, "Зона 1 (1–4)");
        assert_eq!(data.rows[3].sections[1].diameters, "В1 32 мм/Т3 32 мм/Т4 25 мм");
        assert!(data.warnings.is_empty());
    }

    #[test]
    fn uncovered_floor_with_apartments_warns() {
        let s = section(5, &[(2, 4), (5, 2)], &[3]);
        let data = compute_floors_data(&[s]);
        assert_eq!(data.warnings.len(), 1);
        assert!(data.warnings[0].starts_with("Этаж 5:"));
        assert_eq!(data.rows[3].risers, 0);
    }

    #[test]
    fn skipped_zone_warns() {
        let s = section(6, &[(2, 1)], &[4, 2, 6]);
        let data = compute_floors_data(&[s]);
        assert_eq!(data.warnings.len(), 1);
        assert!(data.warnings[0].contains("«Зона 2»"));
    }
}
