//! Picker and two-pane calculator rendering

use calc_core::template::{NoticeLevel, Pane, RowStyle};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::app::{App, Mode};

const ACCENT: Color = Color::Cyan;
const DIM: Color = Color::DarkGray;

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(2)])
        .split(frame.area());

    match app.mode {
        Mode::Picker => {
            render_header(frame, chunks[0], "Calcdeck", "Pick a calculator");
            render_picker(app, frame, chunks[1]);
            render_footer(frame, chunks[2], None, "↑/↓ select   Enter open   q quit");
        }
        Mode::Calculator => render_calculator(app, frame, &chunks),
    }
}

fn render_header(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let line = Line::from(vec![
        Span::styled(title.to_string(), Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(subtitle.to_string(), Style::default().fg(DIM)),
    ]);
    let header = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, area: Rect, status: Option<Line<'static>>, keys: &str) {
    let lines = vec![
        status.unwrap_or_default(),
        Line::from(Span::styled(keys.to_string(), Style::default().fg(DIM))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_picker(app: &App, frame: &mut Frame, area: Rect) {
    let name_width = app.entries().iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
    let items: Vec<ListItem> = app
        .entries()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<width$}", entry.name, width = name_width)),
                Span::styled(format!("  {:<9}", entry.category.display_name()), Style::default().fg(ACCENT)),
                Span::styled(format!("  {}", entry.description), Style::default().fg(DIM)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Calculators "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.picker));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_calculator(app: &App, frame: &mut Frame, chunks: &[Rect]) {
    let Some(screen) = app.screen.as_ref() else {
        return;
    };
    let layout = screen.layout();
    let info = screen.info();
    render_header(frame, chunks[0], &layout.title, info.category.display_name());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    // Inputs: the editable fields rather than the formatted input rows.
    let fields = app.fields();
    let label_width = fields.iter().map(|f| f.label.chars().count()).max().unwrap_or(0);
    let items: Vec<ListItem> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let value = match (&app.edit, i == app.selected) {
                (Some(buffer), true) => format!("{}▏", buffer),
                _ => field.value.clone(),
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<width$}  ", field.label, width = label_width)),
                Span::styled(value, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            ]))
        })
        .collect();
    let inputs = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", layout.inputs.heading)))
        .highlight_style(Style::default().bg(Color::Rgb(40, 44, 52)))
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(inputs, panes[0], &mut state);

    let results = Paragraph::new(pane_lines(&layout.results))
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", layout.results.heading)))
        .wrap(Wrap { trim: false });
    frame.render_widget(results, panes[1]);

    let status = match &layout.notice {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Info => ACCENT,
                NoticeLevel::Success => Color::Green,
                NoticeLevel::Error => Color::Red,
            };
            Some(Line::from(Span::styled(notice.message.clone(), Style::default().fg(color))))
        }
        None => fields
            .get(app.selected)
            .and_then(|f| f.hint)
            .map(|hint| Line::from(Span::styled(hint.to_string(), Style::default().fg(DIM)))),
    };
    render_footer(
        frame,
        chunks[2],
        status,
        "↑/↓ field  type to edit  Tab cycle  Enter calculate  Ctrl-r reset  Ctrl-e export PDF  Esc back",
    );
}

fn pane_lines(pane: &Pane) -> Vec<Line<'static>> {
    if pane.is_empty() {
        return vec![Line::from(Span::styled(
            "Press Enter to calculate",
            Style::default().fg(DIM),
        ))];
    }

    let label_width = pane
        .rows
        .iter()
        .filter(|r| r.style != RowStyle::Section)
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);

    pane.rows
        .iter()
        .map(|row| match row.style {
            RowStyle::Section => Line::from(Span::styled(
                row.label.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )),
            RowStyle::Highlight => Line::from(vec![
                Span::raw(format!("{:<width$}  ", row.label, width = label_width)),
                Span::styled(
                    row.value.clone(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
            ]),
            RowStyle::Normal => Line::from(vec![
                Span::raw(format!("{:<width$}  ", row.label, width = label_width)),
                Span::raw(row.value.clone()),
            ]),
        })
        .collect()
}
