use crate::config::Defaults;
use crate::error::ParseError;
use crate::model::{CalcParams, CollectorVendor, Project, Section};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct ProjectFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    sections: Vec<Section>,
    #[serde(default)]
    params: Option<ParamsFile>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParamsFile {
    #[serde(default)]
    h1: Option<f64>,
    #[serde(default)]
    hn: Option<f64>,
    #[serde(default)]
    ivpt_enabled: bool,
    #[serde(default)]
    collector_vendor: Option<CollectorVendor>,
}

/// Loads a project saved in the calculator's storage shape.
///
/// Floor heights missing from `params` come from `defaults`. Sections saved
/// before corridor runs existed get the default corridor (30 m, centred, Ø20).
///
/// # Errors
///
/// Returns [`ParseError::FileRead`] if the file cannot be read.
/// Returns [`ParseError::InvalidJson`] if it is not a project file.
///
/// # Example
///
/// ```no_run
/// use riser_estimator::config::Defaults;
/// use riser_estimator::parser::load_project;
///
/// let project = load_project("house.json", &Defaults::default())?;
/// println!("{}: {} sections", project.name, project.sections.len());
/// # Ok::<(), riser_estimator::error::ParseError>(())
/// ```
pub fn load_project<P: AsRef<Path>>(path: P, defaults: &Defaults) -> Result<Project, ParseError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let fallback_name = path
        .file_stem()
        .map_or_else(|| "Проект".to_string(), |s| s.to_string_lossy().to_string());

    let project = parse_project(&content, &fallback_name, defaults).map_err(|source| {
        ParseError::InvalidJson {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::info!(
        path = %path.display(),
        sections = project.sections.len(),
        "loaded project"
    );
    Ok(project)
}

/// Parses project JSON. `fallback_name` is used when the file carries no name.
pub fn parse_project(
    content: &str,
    fallback_name: &str,
    defaults: &Defaults,
) -> Result<Project, serde_json::Error> {
    let file: ProjectFile = serde_json::from_str(content)?;

    let params = match file.params {
        Some(p) => CalcParams {
            h1: p.h1.filter(|h| *h > 0.0).unwrap_or(defaults.h1),
            hn: p.hn.filter(|h| *h > 0.0).unwrap_or(defaults.hn),
            fire_suppression: p.ivpt_enabled,
            collector_vendor: p.collector_vendor.unwrap_or_default(),
        },
        None => CalcParams {
            h1: defaults.h1,
            hn: defaults.hn,
            ..CalcParams::default()
        },
    };

    let name = file
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| fallback_name.to_string());

    Ok(Project::new(name, file.sections, params))
}
