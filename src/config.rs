//! Tool configuration loaded from an optional TOML file.
//!
//! ```toml
//! [defaults]
//! h1 = 4.2
//!
//! [rates.cold]
//! work = 700.0
//!
//! [[catalog.clamps]]
//! dn = 32
//! name = "Хомут Ду 32"
//! norm = 0.4
//! ```
//!
//! Any key left out keeps its built-in value.

use crate::error::ConfigError;
use crate::model::Catalog;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Cost per square metre of underground floor area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub work: f64,
    pub material: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RatesFile")]
pub struct Rates {
    pub cold: Rate,
    pub hot: Rate,
}

/// A rate table as written in the file, every key optional.
#[derive(Deserialize)]
struct PartialRate {
    work: Option<f64>,
    material: Option<f64>,
}

impl PartialRate {
    fn over(self, base: Rate) -> Rate {
        Rate {
            work: self.work.unwrap_or(base.work),
            material: self.material.unwrap_or(base.material),
        }
    }
}

#[derive(Deserialize)]
struct RatesFile {
    #[serde(default)]
    cold: Option<PartialRate>,
    #[serde(default)]
    hot: Option<PartialRate>,
}

impl From<RatesFile> for Rates {
    fn from(file: RatesFile) -> Self {
        let base = Rates::default();
        Self {
            cold: file.cold.map_or(base.cold, |r| r.over(base.cold)),
            hot: file.hot.map_or(base.hot, |r| r.over(base.hot)),
        }
    }
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            cold: Rate {
                work: 679.03,
                material: 480.12,
            },
            hot: Rate {
                work: 452.69,
                material: 329.68,
            },
        }
    }
}

/// Floor heights used when a project file does not set them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub h1: f64,
    pub hn: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self { h1: 4.0, hn: 3.3 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: Catalog,
    pub rates: Rates,
    pub defaults: Defaults,
}

impl Config {
    /// Reads the configuration at `path`, or returns the built-in one when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
