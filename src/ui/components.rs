//! Widgets shared by both example screens.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::field::InputField;
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR};

const PLACEHOLDER: &str = "Insert a numerical value";

/// Numeric input box, transient notice line and ordered list of entries.
///
/// Both example screens render through this; only the state they feed in
/// differs.
pub fn render_number_pane(
    frame: &mut Frame<'_>,
    area: Rect,
    field: &InputField,
    notice: Option<&str>,
    entries: &[i64],
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(input_box(field), chunks[0]);

    if let Some(text) = notice {
        let line = Line::from(Span::styled(
            format!(" {}", text),
            Style::default().fg(STATUS_ERROR),
        ));
        frame.render_widget(Paragraph::new(line), chunks[1]);
    }

    frame.render_widget(entry_list(entries, chunks[2].height as usize), chunks[2]);
}

fn input_box(field: &InputField) -> Paragraph<'static> {
    let line = if field.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(DIM_TEXT),
        ))
    } else {
        Line::from(vec![
            Span::styled(field.text().to_string(), Style::default().fg(HEADER_TEXT)),
            Span::styled("▏", Style::default().fg(ACCENT)),
        ])
    };

    Paragraph::new(line).block(
        Block::default()
            .title(Span::styled(" Add ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn entry_list(entries: &[i64], visible_rows: usize) -> Paragraph<'static> {
    // Keep the tail visible once the list outgrows the pane.
    let skip = entries.len().saturating_sub(visible_rows);
    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(index, value)| {
            Line::from(vec![
                Span::styled(format!(" {:>3} ", index + 1), Style::default().fg(DIM_TEXT)),
                Span::styled("│ ", Style::default().fg(HEADER_SEPARATOR)),
                Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
            ])
        })
        .collect();

    Paragraph::new(lines)
}
