use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use riser_estimator::config::Config;
use riser_estimator::export::{export_csv, export_json};
use riser_estimator::model::{CalcParams, CollectorVendor, Project};
use riser_estimator::parser::{convert_to_sections, import_apartments, load_project};
use riser_estimator::report::build_report;
use riser_estimator::ui::App;

#[derive(Parser, Debug)]
#[command(name = "riser-estimator")]
#[command(about = "Riser Estimator - water riser lengths, metering BOM and estimates")]
#[command(version)]
struct Args {
    /// Path to a saved project (JSON)
    #[arg(required_unless_present = "import_csv")]
    project: Option<PathBuf>,

    /// Start from an apartment table instead of a project file
    #[arg(long, value_name = "FILE", conflicts_with = "project")]
    import_csv: Option<PathBuf>,

    /// Configuration file (TOML) with catalog, rates and default heights
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// First floor height, m
    #[arg(long)]
    h1: Option<f64>,

    /// Typical floor height, m
    #[arg(long)]
    hn: Option<f64>,

    /// Collector vendor: ridan, giacomini or domestic
    #[arg(long)]
    vendor: Option<CollectorVendor>,

    /// Include in-apartment fire suppression
    #[arg(long)]
    fire_suppression: bool,

    /// Underground floor area to price, m²
    #[arg(long, value_name = "M2")]
    underground_area: Option<f64>,

    /// Export every table as CSV into this directory
    #[arg(long, value_name = "DIR")]
    csv: Option<PathBuf>,

    /// Export the full report to JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

impl Args {
    fn batch(&self) -> bool {
        self.csv.is_some() || self.json.is_some()
    }

    fn apply_overrides(&self, params: &mut CalcParams) {
        if let Some(h1) = self.h1.filter(|h| *h > 0.0) {
            params.h1 = h1;
        }
        if let Some(hn) = self.hn.filter(|h| *h > 0.0) {
            params.hn = hn;
        }
        if let Some(vendor) = self.vendor {
            params.collector_vendor = vendor;
        }
        if self.fire_suppression {
            params.fire_suppression = true;
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("riser_estimator=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn imported_project(path: &Path, config: &Config) -> Result<Project> {
    let buildings = import_apartments(path)?;
    let name = path
        .file_stem()
        .map_or_else(|| "Проект".to_string(), |s| s.to_string_lossy().to_string());
    let params = CalcParams {
        h1: config.defaults.h1,
        hn: config.defaults.hn,
        ..CalcParams::default()
    };
    Ok(Project::new(name, convert_to_sections(&buildings), params))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // the TUI owns the terminal, so logs go out only in batch mode
    if args.batch() {
        init_logging();
    }

    let config = Config::load(args.config.as_deref())?;

    let mut project = match (&args.import_csv, &args.project) {
        (Some(table), _) => imported_project(table, &config)?,
        (None, Some(path)) => load_project(path, &config.defaults)?,
        (None, None) => return Err(eyre!("no project file or apartment table given")),
    };
    args.apply_overrides(&mut project.params);

    let report = build_report(&project, &config, args.underground_area);

    if let Some(csv_dir) = &args.csv {
        let written = export_csv(&report, csv_dir)?;
        println!(
            "Exported {} CSV tables to: {}",
            written.len(),
            csv_dir.display()
        );
    }

    if let Some(json_path) = &args.json {
        export_json(&report, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if args.batch() {
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(project, report).run(terminal);
    ratatui::restore();
    result
}
