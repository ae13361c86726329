//! Apartment table import.
//!
//! The table lists every building as a pair of columns, "Этаж" (floor) and
//! "Кол-во кв" (apartments), under a "Корпус N" header cell somewhere in the
//! first rows of the sheet.

use crate::error::ParseError;
use crate::model::{AlbumType, Diameters, Section, Zone};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

const HEADER_SEARCH_ROWS: usize = 10;
const COLUMN_SEARCH_SPAN: usize = 5;
const GAP_LOOKAHEAD_ROWS: usize = 4;
const MAX_FLOOR: u32 = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct ImportedBuilding {
    pub number: u32,
    pub name: String,
    pub apts: BTreeMap<u32, u32>,
    pub max_floor: u32,
    pub total_apts: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BuildingColumns {
    number: u32,
    floor_col: usize,
    apts_col: usize,
    data_start_row: usize,
}

/// Reads an apartment table from a CSV file.
pub fn import_apartments<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedBuilding>, ParseError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| ParseError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let buildings = read_apartments(file)?;
    tracing::info!(
        path = %path.display(),
        buildings = buildings.len(),
        apartments = buildings.iter().map(|b| b.total_apts).sum::<u32>(),
        "imported apartment table"
    );
    Ok(buildings)
}

/// Reads an apartment table from any CSV source.
pub fn read_apartments<R: Read>(reader: R) -> Result<Vec<ImportedBuilding>, ParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        rows.push(record?.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let buildings = find_buildings(&rows);
    if buildings.is_empty() {
        return Err(ParseError::NoBuildings);
    }
    Ok(buildings
        .iter()
        .map(|columns| extract_building(&rows, columns))
        .collect())
}

/// Builds calculator sections with default zones from imported buildings.
#[must_use]
pub fn convert_to_sections(buildings: &[ImportedBuilding]) -> Vec<Section> {
    buildings
        .iter()
        .map(|building| {
            let mut section = Section::with_floors(building.max_floor);
            section.apts = building.apts.clone();
            section.zones = default_zones(building.max_floor);
            section
        })
        .collect()
}

/// One zone for low-rise buildings, otherwise chunks of at most twelve-ish floors.
#[must_use]
pub fn default_zones(max_floor: u32) -> Vec<Zone> {
    let zone_size = if max_floor <= 15 {
        max_floor
    } else {
        max_floor.div_ceil(max_floor.div_ceil(12))
    };
    let mut zones = Vec::new();
    let mut current_to = 0;
    while current_to < max_floor {
        let next_to = (current_to + zone_size).min(max_floor);
        zones.push(
            Zone::new(
                format!("Зона {}", zones.len() + 1),
                next_to,
                2,
                Diameters::new(32, 32, 32),
            )
            .with_album(AlbumType::Collector),
        );
        current_to = next_to;
    }
    zones
}

fn cell(rows: &[Vec<String>], row: usize, col: usize) -> &str {
    rows.get(row)
        .and_then(|r| r.get(col))
        .map_or("", |c| c.trim())
}

/// Parses "Корпус 3" / "корпус3" into the building number.
fn building_number(text: &str) -> Option<u32> {
    let lower = text.to_lowercase();
    let start = lower.find("корпус")? + "корпус".len();
    let digits: String = lower[start..]
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Leading numeric prefix of a cell, the way spreadsheet exports write numbers.
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let end = text
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || *c == ',' || (*i == 0 && *c == '-')))
        .map_or(text.len(), |(i, _)| i);
    text[..end].replace(',', ".").parse().ok()
}

fn find_buildings(rows: &[Vec<String>]) -> Vec<BuildingColumns> {
    let mut found: Vec<BuildingColumns> = Vec::new();

    for (row, cells) in rows.iter().enumerate().take(HEADER_SEARCH_ROWS) {
        for (col, text) in cells.iter().enumerate() {
            let Some(number) = building_number(text) else {
                continue;
            };
            if found.iter().any(|b| b.number == number) {
                continue;
            }
            if let Some(columns) = find_columns(rows, row, col, number) {
                found.push(columns);
            }
        }
    }

    found.sort_by_key(|b| b.number);
    found
}

fn find_columns(
    rows: &[Vec<String>],
    header_row: usize,
    start_col: usize,
    number: u32,
) -> Option<BuildingColumns> {
    for row in header_row..(header_row + COLUMN_SEARCH_SPAN).min(rows.len()) {
        let width = rows[row].len();
        for col in start_col..(start_col + COLUMN_SEARCH_SPAN).min(width) {
            if !cell(rows, row, col).to_lowercase().contains("этаж") || col + 1 >= width {
                continue;
            }
            let next = cell(rows, row, col + 1).to_lowercase();
            if next.contains("кол") || next.contains("кв") {
                return Some(BuildingColumns {
                    number,
                    floor_col: col,
                    apts_col: col + 1,
                    data_start_row: row + 1,
                });
            }
        }
    }

    // No labelled columns: take the two cells under the header when they look right.
    let next_row = header_row + 1;
    if next_row >= rows.len() {
        return None;
    }
    let first = cell(rows, next_row, start_col).to_lowercase();
    let second = cell(rows, next_row, start_col + 1).to_lowercase();
    let first_is_floor = first.contains("этаж");
    let first_ok = first_is_floor || leading_number(&first).is_some();
    let second_ok =
        second.contains("кол") || second.contains("кв") || leading_number(&second).is_some();

    (first_ok && second_ok).then_some(BuildingColumns {
        number,
        floor_col: start_col,
        apts_col: start_col + 1,
        data_start_row: if first_is_floor { next_row + 1 } else { next_row },
    })
}

fn valid_floor(text: &str) -> Option<f64> {
    leading_number(text).filter(|f| *f > 0.0)
}

fn extract_building(rows: &[Vec<String>], columns: &BuildingColumns) -> ImportedBuilding {
    let mut apts = BTreeMap::new();
    let mut max_floor = 0;
    let mut total_apts = 0;

    for row in columns.data_start_row..rows.len() {
        let floor_text = cell(rows, row, columns.floor_col);
        let Some(floor) = valid_floor(floor_text) else {
            if floor_text.is_empty() {
                let more_below = (row + 1..(row + 1 + GAP_LOOKAHEAD_ROWS).min(rows.len()))
                    .any(|r| valid_floor(cell(rows, r, columns.floor_col)).is_some());
                if !more_below {
                    break;
                }
            }
            continue;
        };

        let count = leading_number(cell(rows, row, columns.apts_col))
            .map_or(0, |n| n.trunc().max(0.0) as u32);
        let floor = floor.floor() as u32;
        if (1..=MAX_FLOOR).contains(&floor) {
            apts.insert(floor, count);
            max_floor = max_floor.max(floor);
            total_apts += count;
        }
    }

    ImportedBuilding {
        number: columns.number,
        name: format!("Корпус {}", columns.number),
        apts,
        max_floor,
        total_apts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TABLE: &str = "\
Квартирография,,,,
Корпус 2,,,Корпус 1,
Этаж,Кол-во кв,,Этаж,Кол-во кв
1,0,,1,0
2,6,,2,4
3,6,,3,4
,,,4,5
4,5,,,
";

    #[test]
    fn finds_buildings_sorted_by_number() {
        let buildings = read_apartments(TABLE.as_bytes()).unwrap();
        let names: Vec<&str> = buildings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Корпус 1", "Корпус 2"]);

        assert_eq!(buildings[0].apts, BTreeMap::from([(1, 0), (2, 4), (3, 4), (4, 5)]));
        assert_eq!(buildings[0].max_floor, 4);
        assert_eq!(buildings[0].total_apts, 13);
    }

    #[test]
    fn blank_row_inside_data_is_skipped() {
        let buildings = read_apartments(TABLE.as_bytes()).unwrap();
        assert_eq!(buildings[1].apts.get(&4), Some(&5));
        assert_eq!(buildings[1].total_apts, 17);
    }

    #[test]
    fn unlabelled_columns_under_header() {
        let table = "Корпус 7,\n1,0\n2,3\n3,3.0\n";
        let buildings = read_apartments(table.as_bytes()).unwrap();
        assert_eq!(buildings[0].apts, BTreeMap::from([(1, 0), (2, 3), (3, 3)]));
    }

    #[test]
    fn table_without_buildings_is_rejected() {
        let result = read_apartments("Этаж,Квартиры\n1,2\n".as_bytes());
        assert!(matches!(result, Err(ParseError::NoBuildings)));
    }

    #[test]
    fn default_zones_split_tall_buildings() {
        let tops = |floors| -> Vec<u32> { default_zones(floors).iter().map(|z| z.to).collect() };
        assert_eq!(tops(9), vec![9]);
        assert_eq!(tops(15), vec![15]);
        // 25 floors: ceil(25 / ceil(25 / 12)) = 9 floors per zone
        assert_eq!(tops(25), vec![9, 18, 25]);
        assert!(default_zones(0).is_empty());
    }

    #[test]
    fn sections_get_imported_apartments() {
        let buildings = read_apartments(TABLE.as_bytes()).unwrap();
        let sections = convert_to_sections(&buildings);
        assert_eq!(sections[0].floors, 4);
        assert_eq!(sections[0].apartment_count(), 13);
        assert_eq!(sections[0].zones.len(), 1);
        assert_eq!(sections[0].zones[0].risers, 2);
        assert!(!sections[0].rent.enabled);
    }
}
