use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::{App, Route};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::landing::render_landing;
use crate::ui::layout::layout_regions;
use crate::ui::reducer::render_reducer_example;
use crate::ui::snapshot::render_snapshot_example;

const LANDING_HINTS: &str = " ↑/↓: Select │ Enter: Open │ 1/2: Jump │ q: Quit";
const EXAMPLE_HINTS: &str = " 0-9 -: Type │ Enter: Add │ Esc: Back │ Ctrl+Q: Quit";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.route().title()), header);
    frame.render_widget(Clear, body);

    match app.route() {
        Route::Landing => render_landing(frame, body, app.landing()),
        Route::Snapshot => {
            if let Some(example) = app.snapshot() {
                render_snapshot_example(frame, body, example);
            }
        }
        Route::Reducer => {
            if let Some(example) = app.reducer() {
                render_reducer_example(frame, body, example);
            }
        }
    }

    let hints = match app.route() {
        Route::Landing => LANDING_HINTS,
        Route::Snapshot | Route::Reducer => EXAMPLE_HINTS,
    };
    frame.render_widget(Footer::new().widget(hints, footer), footer);
}
