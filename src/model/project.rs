use super::Section;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Collector manufacturer. Decides which estimate lists carry the collector assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectorVendor {
    /// One combined assembly for cold and hot, billed to the cold list.
    #[serde(rename = "Ридан", alias = "ridan")]
    Ridan,
    #[serde(rename = "Giacomini", alias = "giacomini")]
    Giacomini,
    #[default]
    #[serde(rename = "РФ", alias = "domestic")]
    Domestic,
}

impl CollectorVendor {
    /// Whether cold and hot collectors are billed as one assembly.
    #[must_use]
    pub fn combined_assembly(self) -> bool {
        matches!(self, CollectorVendor::Ridan)
    }
}

impl fmt::Display for CollectorVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CollectorVendor::Ridan => "Ридан",
            CollectorVendor::Giacomini => "Giacomini",
            CollectorVendor::Domestic => "РФ",
        })
    }
}

impl FromStr for CollectorVendor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ridan" | "ридан" => Ok(CollectorVendor::Ridan),
            "giacomini" => Ok(CollectorVendor::Giacomini),
            "domestic" | "рф" => Ok(CollectorVendor::Domestic),
            other => Err(format!(
                "unknown collector vendor '{other}' (expected ridan, giacomini or domestic)"
            )),
        }
    }
}

/// Per-run calculation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcParams {
    /// First floor height, m.
    pub h1: f64,
    /// Typical floor height, m.
    pub hn: f64,
    /// In-apartment fire suppression (ИВПТ).
    #[serde(rename = "ivptEnabled")]
    pub fire_suppression: bool,
    pub collector_vendor: CollectorVendor,
}

impl Default for CalcParams {
    fn default() -> Self {
        Self {
            h1: 4.0,
            hn: 3.3,
            fire_suppression: false,
            collector_vendor: CollectorVendor::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub name: String,
    pub sections: Vec<Section>,
    pub params: CalcParams,
}

impl Project {
    #[must_use]
    pub fn new(name: String, sections: Vec<Section>, params: CalcParams) -> Self {
        Self {
            name,
            sections,
            params,
        }
    }

    #[must_use]
    pub fn max_floors(&self) -> u32 {
        self.sections.iter().map(|s| s.floors).max().unwrap_or(0)
    }

    #[must_use]
    pub fn total_apartments(&self) -> u32 {
        self.sections.iter().map(Section::apartment_count).sum()
    }

    #[must_use]
    pub fn total_rental_units(&self) -> u32 {
        self.sections.iter().map(Section::rental_units).sum()
    }
}
