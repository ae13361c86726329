//! Itemized cost estimate: work and material lines per section and system.

mod aggregate;
pub mod item;
pub mod names;
pub mod sort;
mod summary;

pub use aggregate::{aggregate_estimate, pieces};
pub use item::{EstimateItem, ItemKind, SectionEstimate, SortKey};
pub use sort::{diameter_from_name, sort_items, work_priority};
pub use summary::building_summary;

use crate::calc::ZonesData;
use crate::model::{CalcParams, Catalog, Section};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Estimate {
    pub sections: Vec<SectionEstimate>,
    pub summary: SectionEstimate,
}

impl Estimate {
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.cold.len() + s.hot.len())
            .sum()
    }
}

/// Section estimates plus the building summary.
#[must_use]
pub fn build_estimate(
    zones: &ZonesData,
    sections: &[Section],
    params: &CalcParams,
    catalog: &Catalog,
) -> Estimate {
    let sections = aggregate_estimate(zones, sections, params, catalog);
    let summary = building_summary(&sections);
    let estimate = Estimate { sections, summary };
    tracing::debug!(
        sections = estimate.sections.len(),
        items = estimate.item_count(),
        "estimate built"
    );
    estimate
}
