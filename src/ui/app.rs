use crate::model::{EstimateSystem, Project};
use crate::report::Report;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Floors,
    Zones,
    Risers,
    Bom,
    Commissioning,
    EstimateCold,
    EstimateHot,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Floors,
        Tab::Zones,
        Tab::Risers,
        Tab::Bom,
        Tab::Commissioning,
        Tab::EstimateCold,
        Tab::EstimateHot,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Tab::Floors => "Этажи",
            Tab::Zones => "Зоны",
            Tab::Risers => "Стояки",
            Tab::Bom => "КУУ",
            Tab::Commissioning => "ПНР",
            Tab::EstimateCold => "Смета ХВС",
            Tab::EstimateHot => "Смета ГВС",
        }
    }

    fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn previous(self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Sections,
    Table,
}

/// Header and rows of the table shown in the main panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableData {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }
}

pub struct App {
    pub project: Project,
    pub report: Report,
    pub tab: Tab,
    pub focus_panel: FocusPanel,
    pub selected_section: usize, // 0 = whole building, 1+ = section index + 1
    pub selected_row: usize,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(project: Project, report: Report) -> Self {
        Self {
            project,
            report,
            tab: Tab::Floors,
            focus_panel: FocusPanel::Table,
            selected_section: 0,
            selected_row: 0,
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        super::dashboard::draw_dashboard(frame, self);
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key.code);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Left | KeyCode::Char('h') => self.switch_tab(self.tab.previous()),
            KeyCode::Right | KeyCode::Char('l') => self.switch_tab(self.tab.next()),
            KeyCode::Up | KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Home | KeyCode::Char('g') => self.selected_row = 0,
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus_panel = match self.focus_panel {
            FocusPanel::Sections => FocusPanel::Table,
            FocusPanel::Table => FocusPanel::Sections,
        };
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.selected_row = 0;
    }

    fn navigate_up(&mut self) {
        match self.focus_panel {
            FocusPanel::Sections => {
                if self.selected_section > 0 {
                    self.selected_section -= 1;
                    self.selected_row = 0;
                }
            }
            FocusPanel::Table => self.selected_row = self.selected_row.saturating_sub(1),
        }
    }

    fn navigate_down(&mut self) {
        match self.focus_panel {
            FocusPanel::Sections => {
                if self.selected_section < self.project.sections.len() {
                    self.selected_section += 1;
                    self.selected_row = 0;
                }
            }
            FocusPanel::Table => {
                if self.selected_row < self.current_table().rows.len().saturating_sub(1) {
                    self.selected_row += 1;
                }
            }
        }
    }

    /// Index of the selected section, `None` for the whole building.
    #[must_use]
    pub fn section_filter(&self) -> Option<usize> {
        self.selected_section.checked_sub(1)
    }

    #[must_use]
    pub fn section_title(&self) -> String {
        match self.section_filter() {
            None => "Здание".to_string(),
            Some(index) => format!("Корпус {}", index + 1),
        }
    }

    fn shows(&self, section_index: usize) -> bool {
        !matches!(self.section_filter(), Some(s) if s != section_index)
    }

    #[must_use]
    pub fn current_table(&self) -> TableData {
        match self.tab {
            Tab::Floors => self.floors_table(),
            Tab::Zones => self.zones_table(),
            Tab::Risers => self.risers_table(),
            Tab::Bom => self.bom_table(),
            Tab::Commissioning => self.commissioning_table(),
            Tab::EstimateCold => self.estimate_table(EstimateSystem::Cold),
            Tab::EstimateHot => self.estimate_table(EstimateSystem::Hot),
        }
    }

    fn floors_table(&self) -> TableData {
        let rows = self.report.floors.rows.iter().rev();
        match self.section_filter() {
            None => {
                let mut table = TableData::new(&["Этаж", "Квартир", "Аренда", "Стояков"]);
                table.rows = rows
                    .map(|row| {
                        vec![
                            row.floor.to_string(),
                            row.apartments.to_string(),
                            row.rentals.to_string(),
                            row.risers.to_string(),
                        ]
                    })
                    .collect();
                table
            }
            Some(index) => {
                let mut table =
                    TableData::new(&["Этаж", "Квартир", "Зона", "Диаметры", "Коллекторы"]);
                let section = self.project.sections.get(index);
                table.rows = rows
                    .filter_map(|row| {
                        let cell = row.sections.get(index)?;
                        let units = section.map_or(0, |s| {
                            if row.floor == 1 {
                                s.rental_units()
                            } else {
                                s.apartments_on(row.floor)
                            }
                        });
                        Some(vec![
                            row.floor.to_string(),
                            units.to_string(),
                            cell.zone.clone(),
                            cell.diameters.clone(),
                            cell.collectors.clone(),
                        ])
                    })
                    .collect();
                table
            }
        }
    }

    fn zones_table(&self) -> TableData {
        let mut table = TableData::new(&[
            "Корпус", "Зона", "Этажи", "Квартир", "Стояков", "Диаметры", "Длина, м", "Альбом",
            "N",
        ]);
        table.rows = self
            .report
            .zones
            .zones
            .iter()
            .filter(|z| self.shows(z.section_index))
            .map(|z| {
                vec![
                    (z.section_index + 1).to_string(),
                    z.zone_name.clone(),
                    format!("{}–{}", z.from, z.to),
                    (z.apartments + z.rentals).to_string(),
                    z.risers.to_string(),
                    z.diameters.to_string(),
                    quantity(z.len_all_risers),
                    z.album_name.clone(),
                    z.n_auto.to_string(),
                ]
            })
            .collect();
        table
    }

    fn risers_table(&self) -> TableData {
        let mut table = TableData::new(&["Система", "Ду", "Стояков", "Длина, м"]);
        table.rows = match self.section_filter() {
            None => self
                .report
                .risers_overall
                .iter()
                .map(|r| {
                    vec![
                        r.system.label().to_string(),
                        r.diameter.to_string(),
                        r.count.to_string(),
                        quantity(r.length),
                    ]
                })
                .collect(),
            Some(index) => self
                .report
                .risers_by_diameter
                .iter()
                .filter(|r| r.section_index == index)
                .map(|r| {
                    vec![
                        r.system.label().to_string(),
                        r.diameter.to_string(),
                        r.count.to_string(),
                        quantity(r.length),
                    ]
                })
                .collect(),
        };
        table
    }

    fn bom_table(&self) -> TableData {
        let mut table = TableData::new(&["Наименование", "Ед.", "Кол-во"]);
        let specs = &self.report.specs;
        table.rows = match self.section_filter() {
            None => specs
                .overall
                .iter()
                .map(|r| vec![r.name.clone(), r.unit.clone(), quantity(r.quantity)])
                .collect(),
            Some(index) => specs
                .per_section
                .iter()
                .filter(|r| r.section_index == index)
                .map(|r| vec![r.name.clone(), r.unit.clone(), quantity(r.quantity)])
                .collect(),
        };
        table
    }

    fn commissioning_table(&self) -> TableData {
        let mut table =
            TableData::new(&["Корпус", "Наименование", "Ед.", "Длина труб, м", "Кол-во"]);
        table.rows = self
            .report
            .commissioning
            .rows
            .iter()
            .filter(|r| self.shows(r.section_index))
            .map(|r| {
                vec![
                    r.building.clone(),
                    r.name.clone(),
                    r.unit.to_string(),
                    quantity(r.pipe_length),
                    quantity(r.quantity),
                ]
            })
            .collect();
        table
    }

    fn estimate_table(&self, system: EstimateSystem) -> TableData {
        let mut table = TableData::new(&["Тип", "Наименование", "Ед.", "Кол-во"]);
        let estimate = &self.report.estimate;
        let lists = match self.section_filter() {
            None => Some(&estimate.summary),
            Some(index) => estimate.sections.get(index),
        };
        if let Some(lists) = lists {
            table.rows = lists
                .get(system)
                .iter()
                .map(|item| {
                    vec![
                        item.kind.label().to_string(),
                        item.name.clone(),
                        item.unit.clone(),
                        quantity(item.quantity),
                    ]
                })
                .collect();
        }
        table
    }
}

/// Whole numbers without a fraction, everything else as computed.
fn quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
