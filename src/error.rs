//! Error types for the riser estimator.
//!
//! The calculation core never fails on domain input; these cover the file
//! boundaries only (project loading, apartment import, configuration, export).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a project or importing apartment tables.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the input file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The project file is not valid JSON or has the wrong shape.
    #[error("invalid project file '{path}': {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The apartment table could not be read as CSV.
    #[error("invalid apartment table: {source}")]
    InvalidCsv {
        #[from]
        source: csv::Error,
    },

    /// No "Корпус N" headers with floor/apartment columns were found.
    #[error("no buildings found: expected 'Корпус N' headers with 'Этаж' and 'Кол-во кв' columns")]
    NoBuildings,
}

/// Errors that can occur when loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has the wrong shape.
    #[error("invalid config: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file or directory.
    #[error("failed to create '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
