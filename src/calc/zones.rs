//! Per-zone sweep over all sections.

use super::collectors::{auto_n_for_zone_range, collectors_distribution, CollectorHistogram};
use super::geometry::{floor_range_height_meters, skipped_zones, zone_ranges};
use crate::model::{Album, AlbumType, CalcParams, Catalog, Diameters, Section, System};
use serde::Serialize;
use std::collections::BTreeMap;

/// Collector size used when the album is sized without a zone.
pub const DEFAULT_ALBUM_N: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomItem {
    pub name: String,
    pub unit: String,
    pub quantity: f64,
}

/// Accumulated risers of one (section, system, diameter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RiserAggregate {
    pub length: f64,
    pub count: u32,
}

pub type DiameterKey = (usize, System, u32);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneData {
    pub section_index: usize,
    pub zone_index: usize,
    pub zone_name: String,
    pub from: u32,
    pub to: u32,
    pub apartments: u32,
    pub rentals: u32,
    pub risers: u32,
    pub diameters: Diameters,
    /// Vertical height of the zone, equal to the length of one riser.
    pub height: f64,
    pub len_all_risers: f64,
    pub album: AlbumType,
    pub album_name: String,
    pub n_auto: u32,
    pub bom: Vec<BomItem>,
    pub collectors: CollectorHistogram,
}

impl ZoneData {
    #[must_use]
    pub fn floor_count(&self) -> u32 {
        self.to - self.from + 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ZonesData {
    pub zones: Vec<ZoneData>,
    pub grand_total_risers_len: f64,
    #[serde(skip)]
    pub by_diameter: BTreeMap<DiameterKey, RiserAggregate>,
    #[serde(skip)]
    pub by_album: BTreeMap<AlbumType, u32>,
}

/// Fills an album template for `apartments` apartments.
///
/// `n` sizes the collector in the template name; zero or `None` means
/// [`DEFAULT_ALBUM_N`]. With fire suppression every apartment also gets a
/// suppression device and its shutoff valve.
#[must_use]
pub fn materialize_kuu_bom(
    album: &Album,
    apartments: u32,
    n: Option<u32>,
    fire_suppression: bool,
) -> Vec<BomItem> {
    let n = n.filter(|n| *n > 0).unwrap_or(DEFAULT_ALBUM_N).max(1);
    let apartments_f = f64::from(apartments);
    let mut bom: Vec<BomItem> = album
        .bom
        .iter()
        .map(|tpl| BomItem {
            name: tpl.name.replacen("{n}", &n.to_string(), 1),
            unit: if tpl.unit.is_empty() {
                "шт".to_string()
            } else {
                tpl.unit.clone()
            },
            quantity: tpl.qty_per_apt * apartments_f,
        })
        .collect();

    if fire_suppression && apartments > 0 {
        bom.push(BomItem {
            name: "устройство внутриквартирного пожаротушения".to_string(),
            unit: "шт".to_string(),
            quantity: apartments_f,
        });
        bom.push(BomItem {
            name: "кран шаровый Ду 15".to_string(),
            unit: "шт".to_string(),
            quantity: apartments_f,
        });
    }
    bom
}

/// Walks every section's zones and derives the per-zone quantities.
#[must_use]
pub fn compute_zones_data(
    sections: &[Section],
    params: &CalcParams,
    catalog: &Catalog,
) -> ZonesData {
    let mut data = ZonesData {
        by_album: AlbumType::ALL.iter().map(|a| (*a, 0)).collect(),
        ..ZonesData::default()
    };

    for (section_index, section) in sections.iter().enumerate() {
        for zone_index in skipped_zones(section) {
            tracing::warn!(
                section = section_index + 1,
                zone = %section.zones[zone_index].name,
                "zone ends below the floors already covered and is skipped"
            );
        }

        for range in zone_ranges(section) {
            let zone = range.zone;
            let apartments: u32 = range
                .residential_floors()
                .map(|floor| section.apartments_on(floor))
                .sum();
            let rentals = if range.contains(1) {
                section.rental_units()
            } else {
                0
            };

            let risers = zone.risers_per_floor();
            let height = floor_range_height_meters(params.h1, params.hn, range.from, range.to);
            let len_all_risers = height * f64::from(risers);
            data.grand_total_risers_len += len_all_risers;

            for (system, dia) in zone.fixed_d.piped() {
                let entry = data
                    .by_diameter
                    .entry((section_index, system, dia))
                    .or_default();
                entry.length += len_all_risers;
                entry.count += risers;
            }
            *data.by_album.entry(zone.album_type).or_default() += apartments;

            let album = catalog.albums.get(zone.album_type);
            let n_auto = auto_n_for_zone_range(section, &range);
            data.zones.push(ZoneData {
                section_index,
                zone_index: range.zone_index,
                zone_name: zone.name.clone(),
                from: range.from,
                to: range.to,
                apartments,
                rentals,
                risers,
                diameters: zone.fixed_d,
                height,
                len_all_risers,
                album: zone.album_type,
                album_name: album.name.clone(),
                n_auto,
                bom: materialize_kuu_bom(album, apartments, Some(n_auto), params.fire_suppression),
                collectors: collectors_distribution(section, &range),
            });
        }
    }

    tracing::debug!(
        zones = data.zones.len(),
        total_len = data.grand_total_risers_len,
        "zones computed"
    );
    data
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumSummaryRow {
    pub album: AlbumType,
    pub name: String,
    pub apartments: u32,
}

/// Apartments served by each album, every album listed.
#[must_use]
pub fn album_summary(zones: &ZonesData, catalog: &Catalog) -> Vec<AlbumSummaryRow> {
    AlbumType::ALL
        .iter()
        .map(|album| AlbumSummaryRow {
            album: *album,
            name: catalog.albums.get(*album).name.clone(),
            apartments: zones.by_album.get(album).copied().unwrap_or(0),
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectorsSummary {
    pub by_section: BTreeMap<usize, CollectorHistogram>,
    pub overall: CollectorHistogram,
}

impl CollectorsSummary {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.overall.values().sum()
    }
}

/// Zone collector distributions added up per section and for the building.
#[must_use]
pub fn collectors_summary(zones: &ZonesData) -> CollectorsSummary {
    let mut summary = CollectorsSummary::default();
    for zone in &zones.zones {
        let section = summary.by_section.entry(zone.section_index).or_default();
        for (outlets, count) in &zone.collectors {
            *section.entry(*outlets).or_default() += count;
            *summary.overall.entry(*outlets).or_default() += count;
        }
    }
    summary
}
