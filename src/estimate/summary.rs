use super::item::{EstimateItem, ItemKind, SectionEstimate};
use super::sort::sort_items;
use crate::calc::round2;
use crate::model::EstimateSystem;
use std::collections::HashMap;

/// Building-wide lists: items of every section merged by kind and name.
///
/// A merged item keeps the unit and group of its first occurrence.
#[must_use]
pub fn building_summary(sections: &[SectionEstimate]) -> SectionEstimate {
    let mut summary = SectionEstimate::default();
    for system in EstimateSystem::ALL {
        let mut index: HashMap<(ItemKind, &str), usize> = HashMap::new();
        let mut merged: Vec<EstimateItem> = Vec::new();
        for item in sections.iter().flat_map(|s| s.get(system)) {
            match index.get(&(item.kind, item.name.as_str())) {
                Some(&slot) => merged[slot].quantity += item.quantity,
                None => {
                    index.insert((item.kind, item.name.as_str()), merged.len());
                    merged.push(item.clone());
                }
            }
        }
        for item in &mut merged {
            item.quantity = round2(item.quantity);
        }
        *summary.get_mut(system) = sort_items(merged);
    }
    summary
}
