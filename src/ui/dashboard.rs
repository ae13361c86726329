use crate::ui::app::{App, FocusPanel, Tab, TableData};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table, Tabs,
    },
    Frame,
};

const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C);
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68);
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C);
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65);

const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const COUNT_COLOR: Color = BRAND_GREEN;

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(3), // Tabs
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_tabs(frame, chunks[1], app);
    draw_main_content(frame, chunks[2], app);
    draw_footer(
        frame,
        chunks[3],
        " ←→ Вкладка | Tab Панель | ↑↓ Строка | q Выход ",
    );
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let report = &app.report;
    let mut title = format!(
        " Riser Estimator | {} | {} корп. | {} кв. | аренда {} | стояки {:.1} м ",
        report.name,
        report.section_count,
        report.total_apartments,
        report.total_rental_units,
        report.zones.grand_total_risers_len,
    );
    if let Some(underground) = &report.underground {
        title.push_str(&format!("| подземная часть {:.2} ", underground.total));
    }

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<&str> = Tab::ALL.iter().map(|tab| tab.title()).collect();
    let selected = Tab::ALL.iter().position(|t| *t == app.tab).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(SELECTED_STYLE)
        .divider(Span::styled("|", Style::default().fg(BRAND_MUTED)))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(tabs, area);
}

fn draw_main_content(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(20), // Sections
        Constraint::Percentage(80), // Table
    ])
    .split(area);

    draw_sections(frame, chunks[0], app);
    draw_table(frame, chunks[1], app);
}

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default()
    }
}

fn draw_sections(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Sections;

    let entries = std::iter::once(("Здание".to_string(), app.report.total_apartments)).chain(
        app.project
            .sections
            .iter()
            .enumerate()
            .map(|(i, s)| (format!("Корпус {}", i + 1), s.apartment_count())),
    );

    let items: Vec<ListItem> = entries
        .enumerate()
        .map(|(i, (label, apartments))| {
            let is_selected = i == app.selected_section;
            let style = if is_selected && is_focused {
                SELECTED_STYLE
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if is_selected && is_focused {
                " ◄"
            } else {
                ""
            };

            ListItem::new(Line::from(vec![
                Span::styled(label, style),
                Span::raw(" "),
                Span::styled(format!("({apartments})"), Style::default().fg(COUNT_COLOR)),
                Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Корпуса ")
            .borders(Borders::ALL)
            .border_style(border_style(is_focused)),
    );

    frame.render_widget(list, area);
}

/// Name columns take the slack, the rest share what is left.
fn column_widths(data: &TableData) -> Vec<Constraint> {
    data.header
        .iter()
        .map(|h| {
            if h == "Наименование" {
                Constraint::Min(30)
            } else {
                Constraint::Fill(1)
            }
        })
        .collect()
}

fn draw_table(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Table;
    let data = app.current_table();

    // borders and header row
    let visible_rows = (area.height as usize).saturating_sub(3);

    let scroll_offset = if app.selected_row >= visible_rows {
        app.selected_row - visible_rows + 1
    } else {
        0
    };

    let header = Row::new(data.header.clone()).style(HEADER_STYLE).height(1);

    let rows: Vec<Row> = data
        .rows
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, cells)| {
            let style = if i == app.selected_row && is_focused {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            Row::new(cells.clone()).style(style)
        })
        .collect();

    let title = format!(
        " {} | {} ({}) ",
        app.section_title(),
        app.tab.title(),
        data.rows.len()
    );
    let table = Table::new(rows, column_widths(&data)).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style(is_focused)),
    );

    frame.render_widget(table, area);

    if data.rows.len() > visible_rows {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state = ScrollbarState::new(data.rows.len()).position(app.selected_row);

        let scrollbar_area = Rect {
            x: area.x + area.width - 1,
            y: area.y + 2,
            width: 1,
            height: area.height.saturating_sub(3),
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}
