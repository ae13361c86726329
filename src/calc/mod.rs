//! Quantity derivation: geometry, collectors, corridor runs and the per-zone sweep.
//!
//! Everything here is a pure function of the project model and the catalog.

pub mod bom;
pub mod collectors;
pub mod commissioning;
pub mod cost;
pub mod floors;
pub mod geometry;
pub mod mop;
pub mod risers;
pub mod specification;
pub mod zones;

pub use bom::{bom_data, specs_aggregates, BomLine, BomRow, SectionBomRow, SpecsAggregates};
pub use collectors::{collector_name, format_collectors, format_histogram, CollectorHistogram};
pub use commissioning::{compute_commissioning_data, CommissioningData, CommissioningRow};
pub use cost::{underground_cost, UndergroundCost};
pub use floors::{compute_floors_data, FloorCell, FloorRow, FloorsData};
pub use geometry::{
    floor_range_height_meters, section_zone_for_floor, zone_floor_range, zone_height_meters,
    zone_ranges, ZoneRange,
};
pub use mop::{mop_lengths_for_section, mop_totals, MopLengths};
pub use risers::{risers_by_diameter, risers_overall, RiserRow, SectionRiserRow};
pub use specification::{compute_specification, SpecCategory, SpecLine, Specification};
pub use zones::{
    album_summary, collectors_summary, compute_zones_data, materialize_kuu_bom, AlbumSummaryRow,
    BomItem, CollectorsSummary, ZoneData, ZonesData,
};

/// Rounds to one decimal place.
#[must_use]
pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Rounds to two decimal places.
#[must_use]
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rounding() {
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(12.36), 12.4);
        assert_eq!(round2(0.344), 0.34);
        assert_eq!(round2(2.0 / 3.0), 0.67);
    }
}
