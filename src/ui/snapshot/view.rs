use ratatui::layout::Rect;
use ratatui::Frame;

use crate::ui::components::render_number_pane;
use crate::ui::snapshot::state::SnapshotExample;

pub fn render_snapshot_example(frame: &mut Frame<'_>, area: Rect, example: &SnapshotExample) {
    render_number_pane(
        frame,
        area,
        example.field(),
        example.notice(),
        example.visible(),
    );
}
