//! Every derived view of a project, computed in one pass.

use crate::calc::{
    album_summary, bom_data, collectors_summary, compute_commissioning_data, compute_floors_data,
    compute_specification, compute_zones_data, mop_lengths_for_section, risers_by_diameter,
    risers_overall, specs_aggregates, underground_cost, AlbumSummaryRow, BomLine,
    CollectorsSummary, CommissioningData, FloorsData, MopLengths, RiserRow, SectionRiserRow,
    Specification, SpecsAggregates, UndergroundCost, ZonesData,
};
use crate::config::Config;
use crate::estimate::{build_estimate, Estimate};
use crate::model::{CalcParams, Project};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub name: String,
    pub params: CalcParams,
    pub section_count: usize,
    pub total_apartments: u32,
    pub total_rental_units: u32,
    pub floors: FloorsData,
    pub zones: ZonesData,
    pub risers_by_diameter: Vec<SectionRiserRow>,
    pub risers_overall: Vec<RiserRow>,
    pub bom: Vec<BomLine>,
    pub specs: SpecsAggregates,
    pub albums: Vec<AlbumSummaryRow>,
    pub collectors: CollectorsSummary,
    pub mop: Vec<MopLengths>,
    pub commissioning: CommissioningData,
    pub specification: Specification,
    pub estimate: Estimate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underground: Option<UndergroundCost>,
}

/// Runs the whole calculation for `project`.
#[must_use]
pub fn build_report(project: &Project, config: &Config, underground_area: Option<f64>) -> Report {
    let sections = &project.sections;
    let params = &project.params;
    let catalog = &config.catalog;

    let floors = compute_floors_data(sections);
    let zones = compute_zones_data(sections, params, catalog);
    let commissioning = compute_commissioning_data(&zones, sections);
    let specification = compute_specification(&zones, sections, catalog);
    let estimate = build_estimate(&zones, sections, params, catalog);

    tracing::info!(
        project = %project.name,
        sections = sections.len(),
        zones = zones.zones.len(),
        estimate_items = estimate.item_count(),
        "calculation finished"
    );

    Report {
        name: project.name.clone(),
        params: *params,
        section_count: sections.len(),
        total_apartments: project.total_apartments(),
        total_rental_units: project.total_rental_units(),
        risers_by_diameter: risers_by_diameter(&zones.by_diameter),
        risers_overall: risers_overall(&zones.by_diameter),
        bom: bom_data(&zones),
        specs: specs_aggregates(&zones, sections.len()),
        albums: album_summary(&zones, catalog),
        collectors: collectors_summary(&zones),
        mop: sections.iter().map(mop_lengths_for_section).collect(),
        underground: underground_area.and_then(|area| underground_cost(area, &config.rates)),
        floors,
        zones,
        commissioning,
        specification,
        estimate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_project_report() {
        let project = Project::new(
            "Дом".into(),
            vec![Section::default(), Section::default()],
            CalcParams::default(),
        );
        let report = build_report(&project, &Config::default(), None);
        assert_eq!(report.section_count, 2);
        assert_eq!(report.floors.rows.len(), 12);
        assert_eq!(report.zones.zones.len(), 4);
        assert_eq!(report.estimate.sections.len(), 2);
        assert!(report.underground.is_none());
        // no apartments entered yet, so no meters or collectors
        assert_eq!(report.total_apartments, 0);
        assert!(report.bom.iter().all(|line| line.quantity.unwrap_or(0.0) == 0.0));
    }

    #[test]
    fn underground_area_is_priced() {
        let project = Project::new("Дом".into(), vec![Section::default()], CalcParams::default());
        let report = build_report(&project, &Config::default(), Some(10.0));
        assert_eq!(report.underground.map(|u| u.cold.work), Some(6790.3));
    }
}
