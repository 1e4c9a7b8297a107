use ratatui::layout::Rect;
use ratatui::Frame;

use crate::ui::components::render_number_pane;
use crate::ui::reducer::example::ReducerExample;

pub fn render_reducer_example(frame: &mut Frame<'_>, area: Rect, example: &ReducerExample) {
    render_number_pane(
        frame,
        area,
        example.field(),
        example.notice(),
        example.entries(),
    );
}
