//! Static lookup tables consumed by the calculation core.
//!
//! Every table has a built-in default and can be overridden from the
//! `[catalog]` table of the configuration file.

use super::section::AlbumType;
use serde::{Deserialize, Serialize};

/// Standard steel pipe diameters, mm, ascending.
pub const REAL_DN: [u32; 11] = [15, 20, 25, 32, 40, 50, 65, 80, 100, 125, 150];

/// One line of a metering album template. `{n}` in the name is replaced by the collector size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomTemplate {
    pub name: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    pub qty_per_apt: f64,
}

fn default_unit() -> String {
    "шт".to_string()
}

impl BomTemplate {
    fn new(name: &str, qty_per_apt: f64) -> Self {
        Self {
            name: name.to_string(),
            unit: default_unit(),
            qty_per_apt,
        }
    }
}

/// Display name and BOM template of a metering album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    #[serde(default)]
    pub bom: Vec<BomTemplate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Albums {
    pub collector: Album,
    pub collector_pre_apt: Album,
    pub pre_apt: Album,
}

impl Albums {
    #[must_use]
    pub fn get(&self, album: AlbumType) -> &Album {
        match album {
            AlbumType::Collector => &self.collector,
            AlbumType::CollectorPreApt => &self.collector_pre_apt,
            AlbumType::PreApt => &self.pre_apt,
        }
    }
}

impl Default for Albums {
    fn default() -> Self {
        let meters = [
            BomTemplate::new("Счётчик воды Ду 15", 2.0),
            BomTemplate::new("Кран шаровый Ду 15", 2.0),
            BomTemplate::new("Фильтр сетчатый Ду 15", 2.0),
        ];
        let mut collector_pre_apt = meters.to_vec();
        collector_pre_apt.insert(
            0,
            BomTemplate::new("Узел учёта квартирный коллекторный, коллектор на {n} вых.", 1.0),
        );
        collector_pre_apt.push(BomTemplate::new("Регулятор давления Ду 15", 2.0));
        let mut pre_apt = vec![BomTemplate::new("Узел учёта квартирный поэтажный", 1.0)];
        pre_apt.extend(meters.iter().cloned());
        pre_apt.push(BomTemplate::new("Клапан обратный Ду 15", 2.0));

        Self {
            collector: Album {
                name: "КУУ коллекторный".to_string(),
                bom: std::iter::once(BomTemplate::new(
                    "Узел учёта квартирный коллекторный, коллектор на {n} вых.",
                    1.0,
                ))
                .chain(meters.iter().cloned())
                .collect(),
            },
            collector_pre_apt: Album {
                name: "КУУ коллекторный с поквартирной разводкой".to_string(),
                bom: collector_pre_apt,
            },
            pre_apt: Album {
                name: "КУУ поквартирный".to_string(),
                bom: pre_apt,
            },
        }
    }
}

/// Clamp consumption for a galvanized steel riser of one diameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClampRule {
    pub dn: u32,
    pub name: String,
    /// Clamps per metre of pipe.
    pub norm: f64,
}

/// Fitting consumption for a branch pipe of one diameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittingRule {
    pub dn: u32,
    pub name: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Fittings per metre of pipe.
    pub norm: f64,
}

fn default_clamps() -> Vec<ClampRule> {
    [
        (15, 0.5),
        (20, 0.4),
        (25, 0.4),
        (32, 0.35),
        (40, 0.35),
        (50, 0.3),
        (65, 0.3),
        (80, 0.25),
        (100, 0.25),
    ]
    .into_iter()
    .map(|(dn, norm)| ClampRule {
        dn,
        name: format!("Хомут для стальной оцинкованной трубы Ду {dn}"),
        norm,
    })
    .collect()
}

fn default_fittings() -> Vec<FittingRule> {
    let per_dn = [
        ("Угольник", 0.3),
        ("Муфта соединительная", 0.15),
        ("Тройник", 0.1),
        ("Клипса крепёжная", 1.0),
    ];
    [16, 20, 25, 32, 40]
        .into_iter()
        .flat_map(|dn| {
            per_dn.iter().map(move |(kind, norm)| FittingRule {
                dn,
                name: format!("{kind} для трубы из сшитого полиэтилена Ø{dn}"),
                unit: default_unit(),
                norm: *norm,
            })
        })
        .collect()
}

/// Every static table the calculation core reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub diameters: Vec<u32>,
    pub albums: Albums,
    pub clamps: Vec<ClampRule>,
    pub fittings: Vec<FittingRule>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            diameters: REAL_DN.to_vec(),
            albums: Albums::default(),
            clamps: default_clamps(),
            fittings: default_fittings(),
        }
    }
}

impl Catalog {
    #[must_use]
    pub fn clamp_rule(&self, dn: u32) -> Option<&ClampRule> {
        self.clamps.iter().find(|rule| rule.dn == dn)
    }

    pub fn fitting_rules(&self, dn: u32) -> impl Iterator<Item = &FittingRule> + '_ {
        self.fittings.iter().filter(move |rule| rule.dn == dn)
    }

    /// Sleeve size for a pipe: two table positions up, clamped to the largest size.
    ///
    /// A pipe size missing from the table starts from the nearest larger entry.
    #[must_use]
    pub fn sleeve_diameter(&self, dn: u32) -> u32 {
        let Some(last) = self.diameters.len().checked_sub(1) else {
            return dn;
        };
        let start = self
            .diameters
            .iter()
            .position(|d| *d >= dn)
            .unwrap_or(last);
        self.diameters[(start + 2).min(last)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sleeve_is_two_sizes_up() {
        let catalog = Catalog::default();
        assert_eq!(catalog.sleeve_diameter(32), 50);
        assert_eq!(catalog.sleeve_diameter(15), 25);
        assert_eq!(catalog.sleeve_diameter(125), 150);
        assert_eq!(catalog.sleeve_diameter(150), 150);
        // 33 is not a standard size, 40 is the next one up
        assert_eq!(catalog.sleeve_diameter(33), 65);
    }

    #[test]
    fn empty_diameter_table_keeps_pipe_size() {
        let catalog = Catalog {
            diameters: Vec::new(),
            ..Catalog::default()
        };
        assert_eq!(catalog.sleeve_diameter(32), 32);
    }

    #[test]
    fn default_rules_cover_standard_sizes() {
        let catalog = Catalog::default();
        assert_eq!(catalog.clamp_rule(32).map(|r| r.norm), Some(0.35));
        assert!(catalog.clamp_rule(125).is_none());
        assert_eq!(catalog.fitting_rules(20).count(), 4);
        assert_eq!(catalog.fitting_rules(18).count(), 0);
    }

    #[test]
    fn album_templates_carry_placeholder() {
        let albums = Albums::default();
        assert!(albums.get(AlbumType::Collector).bom[0].name.contains("{n}"));
        assert_eq!(albums.get(AlbumType::PreApt).bom.len(), 5);
        assert_eq!(albums.get(AlbumType::CollectorPreApt).bom.len(), 5);
    }
}
