//! # Riser Estimator
//!
//! Water riser calculator for multi-section residential buildings.
//!
//! ## Features
//!
//! - Load saved projects (JSON) or import apartment tables (CSV)
//! - Split each section into vertical zones and size cold, hot and recirculation risers
//! - Metering assembly BOM per zone, collector selection, corridor (МОП) runs
//! - Commissioning volumes, material specification and an itemized estimate
//! - Browse every table in a terminal UI, export to CSV and JSON
//!
//! ## Example
//!
//! ```no_run
//! use riser_estimator::config::Config;
//! use riser_estimator::parser::load_project;
//! use riser_estimator::report::build_report;
//!
//! let config = Config::default();
//! let project = load_project("house.json", &config.defaults).expect("Failed to load");
//! let report = build_report(&project, &config, None);
//! println!("Risers: {:.1} m", report.zones.grand_total_risers_len);
//! println!("Estimate lines: {}", report.estimate.item_count());
//! ```

pub mod calc;
pub mod config;
pub mod error;
pub mod estimate;
pub mod export;
pub mod model;
pub mod parser;
pub mod report;
pub mod ui;
