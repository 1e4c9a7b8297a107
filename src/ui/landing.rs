//! Landing screen: titled cards describing the two examples.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::Route;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};

struct Card {
    title: &'static str,
    blurb: &'static str,
    route: Route,
}

const CARDS: [Card; 2] = [
    Card {
        title: "1. Snapshot example",
        blurb: "The collection lives in a wrapper whose storage can only be \
                mutated through its append accessor. After every append the \
                screen publishes a new snapshot copied from the previous one; \
                the update rule never touches the wrapper's storage directly.",
        route: Route::Snapshot,
    },
    Card {
        title: "2. Reducer example",
        blurb: "The same collection consumed through a dispatch/reducer pair. \
                The reducer returns a modified copy of the snapshot instead of \
                mutating it in place, and only the add intent carries a \
                reduction rule.",
        route: Route::Reducer,
    },
];

/// Selection state for the landing screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingState {
    selected: usize,
}

impl LandingState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_prev(&mut self) {
        self.selected = if self.selected == 0 {
            CARDS.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn select_next(&mut self) {
        self.selected = if self.selected + 1 >= CARDS.len() {
            0
        } else {
            self.selected + 1
        };
    }

    pub fn selected_route(&self) -> Route {
        CARDS[self.selected].route
    }
}

pub fn render_landing(frame: &mut Frame<'_>, area: Rect, state: &LandingState) {
    let content = centered_rect(80, 90, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(content);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Component State.",
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    frame.render_widget(heading, chunks[0]);

    for (index, card) in CARDS.iter().enumerate() {
        let selected = index == state.selected();
        let border_style = if selected {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(GLOBAL_BORDER)
        };
        let mut body = Paragraph::new(card.blurb)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(HEADER_TEXT))
            .block(
                Block::default()
                    .title(Span::styled(card.title, Style::default().fg(ACCENT)))
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        if selected {
            body = body.style(Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT));
        }
        frame.render_widget(body, chunks[index + 1]);
    }
}
