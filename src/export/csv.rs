use crate::error::ExportError;
use crate::estimate::SectionEstimate;
use crate::model::EstimateSystem;
use crate::report::Report;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Section label used for the building summary rows of `estimate.csv`.
pub const SUMMARY_LABEL: &str = "Сводка";

fn building(section_index: usize) -> String {
    format!("Корпус {}", section_index + 1)
}

fn dn(value: u32) -> String {
    if value == 0 {
        "—".to_string()
    } else {
        value.to_string()
    }
}

struct Table {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl Table {
    fn create(dir: &Path, name: &str, header: &[&str]) -> Result<Self, ExportError> {
        let path = dir.join(name);
        let file = File::create(&path).map_err(|source| ExportError::FileCreate {
            path: path.clone(),
            source,
        })?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(header)?;
        Ok(Self { path, writer })
    }

    fn row<I, T>(&mut self, record: I) -> Result<(), ExportError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer.write_record(record)?;
        Ok(())
    }

    fn finish(mut self) -> Result<PathBuf, ExportError> {
        self.writer.flush().map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;
        Ok(self.path)
    }
}

/// Writes every table of `report` as a separate CSV file into `dir`.
///
/// The directory is created when missing. Returns the written paths.
pub fn export_csv<P: AsRef<Path>>(report: &Report, dir: P) -> Result<Vec<PathBuf>, ExportError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| ExportError::FileCreate {
        path: dir.to_path_buf(),
        source,
    })?;

    let written = vec![
        write_floors(report, dir)?,
        write_zones(report, dir)?,
        write_risers(report, dir)?,
        write_risers_overall(report, dir)?,
        write_bom(report, dir)?,
        write_spec_by_section(report, dir)?,
        write_spec_overall(report, dir)?,
        write_specification(report, dir)?,
        write_commissioning(report, dir)?,
        write_estimate(report, dir)?,
    ];
    tracing::info!(dir = %dir.display(), files = written.len(), "exported CSV tables");
    Ok(written)
}

fn write_floors(report: &Report, dir: &Path) -> Result<PathBuf, ExportError> {
    let mut header = vec!["Этаж".to_string()];
    for section_index in 0..report.section_count {
        let label = building(section_index);
        header.push(format!("{label}: зона"));
        header.push(format!("{label}: диаметры"));
        header.push(format!("{label}: коллекторы"));
    }
    header.extend(["Квартир", "Аренда", "Стояков"].map(String::from));
    let header: Vec<&str> = header.iter().map(String::as_str).collect();

    let mut table = Table::create(dir, "floors.csv", &header)?;
    for row in report.floors.rows.iter().rev() {
        let mut record = vec![row.floor.to_string()];
        for cell in &row.sections {
            record.push(cell.zone.clone());
            record.push(cell.diameters.clone());
            record.push(cell.collectors.clone());
        }
        record.push(row.apartments.to_string());
        record.push(row.rentals.to_string());
        record.push(row.risers.to_string());
        table.row(&record)?;
    }
    table.finish()
}

fn write_zones(report: &Report, dir: &Path) -> Result<PathBuf, ExportError> {
    let mut table = Table::create(
        dir,
        "zones.csv",
        &[
            "Корпус", "Зона", "С этажа", "По этаж", "Квартир", "Аренда", "Стояков", "В1", "Т3",
            "Т4", "Высота, м", "Длина стояков, м", "Альбом", "N",
        ],
    )?;
    for zone in &report.zones.zones {
        table.row([
            building(zone.section_index),
            zone.zone_name.clone(),
            zone.from.to_string(),
            zone.to.to_string(),
            zone.apartments.to_string(),
            zone.rentals.to_string(),
            zone.risers.to_string(),
            dn(zone.diameters.v1),
            dn(zone.diameters.t3),
            dn(zone.diameters.t4),
            zone.height.to_string(),
            zone.len_all_risers.to_string(),
            zone.album_name.clone(),
            zone.n_auto.to_string(),
        ])?;
    }
    table.finish()
}

fn write_risers(report: &Report, dir: &Path) -> Result<PathBuf, ExportError> {
    let mut table = Table::create(
        dir,
        "risers_by_diameter.csv",
        &["Корпус", "Система", "Ду", "Стояков", "Длина, м"],
    )?;
    for row in &report.risers_by_diameter {
        table.row([
            building(row.section_index),
            row.system.label().to_string(),
            row.diameter.to_string(),
            row.count.to_string(),
            row.length.to_string(),
        ])?;
    }
    table.finish()
}

fn write_risers_overall(report: &Report, dir: &Path) -> Result<PathBuf, ExportError> {
    let mut table = Table::create(
        dir,
        "risers_overall.csv",
        &["Система", "Ду", "Стояков", "Длина, м"],
    )?;
    for row in &report.risers_overall {
        table.row([
            row.system.label().to_string(),
            row.diameter.to_string(),
            row.count.to_string(),
            row.length.to_string(),
        ])?;
    }
    table.finish()
}

fn write_bom(report: &Report, dir: &Path) -> Result<PathBuf, ExportError> {
    let mut table = Table::create(
        dir,
        "bom.csv",
        &[
            "Корпус", "Зона", "Альбом", "N", "С этажа", "По этаж", "Наименование", "Ед.", "Кол-во",
        ],
    )?;
    for line in &report.bom {
        table.row([
            building(line.section_index),
            line.zone_name.clone(),
            line.album_name.clone(),
            line.n_auto.to_string(),
            line.from.to_string(),
            line.to.to_string(),
            line.name.clone(),
            line.unit.clone(),
            line.quantity.map(|q| q.to_string()).unwrap_or_default(),
        ])?;
    }
    table.finish()
}

fn write_spec_by_section(report: &Report, dir: &Path) -> Result<PathBuf, ExportError> {
    let mut table = Table::create(
        dir,
        "spec_by_section.csv",
        &["Корпус", "Наименование", "Ед.", "Кол-во"],
    )?;
    for row in &report.specs.per_section {
        table.row([
            building(row.section_index),
            row.name.clone(),
            row.unit.clone(),
            row.quantity.to_string(),
        ])?;
    }
    table.finish()
}

fn write_spec_overall(report: &Report, dir: &Path) -> Result<PathBuf, ExportError> {
    let mut table = Table::create(dir, "spec_overall.csv", &["Наименование", "Ед.", "Кол-во"])?;
    for row in &report.specs.overall {
        table.row([row.name.clone(), row.unit.clone(), row.quantity.to_string()])?;
    }
    table.finish()
}

fn write_specification(report: &Report, dir: &Path) -> Result<PathBuf, ExportError> {
    let mut table = Table::create(
        dir,
        "specification.csv",
        &["Раздел", "Наименование", "Ед.", "Кол-во"],
    )?;
    for category in &report.specification.categories {
        for line in &category.lines {
            table.row([
                category.title,
                line.name.as_str(),
                category.unit,
                line.quantity.to_string().as_str(),
            ])?;
        }
    }
    table.finish()
}

fn write_commissioning(report: &Report, dir: &Path) -> Result<PathBuf, ExportError> {
    let mut table = Table::create(
        dir,
        "commissioning.csv",
        &["Корпус", "Система", "Наименование", "Ед.", "Длина труб, м", "Кол-во"],
    )?;
    for row in &report.commissioning.rows {
        table.row([
            row.building.clone(),
            row.system_name.to_string(),
            row.name.clone(),
            row.unit.to_string(),
            row.pipe_length.to_string(),
            row.quantity.to_string(),
        ])?;
    }
    table.finish()
}

fn write_estimate_lists(
    table: &mut Table,
    label: &str,
    lists: &SectionEstimate,
) -> Result<(), ExportError> {
    for system in EstimateSystem::ALL {
        for item in lists.get(system) {
            table.row([
                label,
                system.title(),
                item.kind.label(),
                item.name.as_str(),
                item.unit.as_str(),
                item.quantity.to_string().as_str(),
            ])?;
        }
    }
    Ok(())
}

fn write_estimate(report: &Report, dir: &Path) -> Result<PathBuf, ExportError> {
    let mut table = Table::create(
        dir,
        "estimate.csv",
        &["Корпус", "Система", "Тип", "Наименование", "Ед.", "Кол-во"],
    )?;
    for (section_index, lists) in report.estimate.sections.iter().enumerate() {
        write_estimate_lists(&mut table, &building(section_index), lists)?;
    }
    write_estimate_lists(&mut table, SUMMARY_LABEL, &report.estimate.summary)?;
    table.finish()
}
