use crossterm::event::KeyCode;
use statepad::ui::snapshot::SnapshotExample;

fn type_text(example: &mut SnapshotExample, text: &str) {
    for ch in text.chars() {
        example.on_key(KeyCode::Char(ch));
    }
}

#[test]
fn new_screen_renders_the_seed() {
    let example = SnapshotExample::new(&[1, 2, 3]);
    assert_eq!(example.visible(), &[1, 2, 3]);
}

#[test]
fn appends_render_in_submission_order() {
    let mut example = SnapshotExample::new(&[1, 2, 3]);
    example.append(5);
    example.append(10);
    assert_eq!(example.visible(), &[1, 2, 3, 5, 10]);
}

#[test]
fn snapshot_tracks_the_backing_collection() {
    let mut example = SnapshotExample::new(&[1, 2, 3]);
    example.append(42);
    assert_eq!(example.visible(), example.backing_entries());
}

#[test]
fn submit_parses_appends_and_clears_the_field() {
    let mut example = SnapshotExample::new(&[1, 2, 3]);
    type_text(&mut example, "5");
    example.submit();
    type_text(&mut example, "10");
    example.submit();
    assert_eq!(example.visible(), &[1, 2, 3, 5, 10]);
    assert!(example.field().is_empty());
    assert!(example.notice().is_none());
}

#[test]
fn invalid_submission_never_reaches_the_collection() {
    let mut example = SnapshotExample::new(&[1, 2, 3]);
    type_text(&mut example, "-");
    example.submit();
    assert_eq!(example.visible(), &[1, 2, 3]);
    assert_eq!(example.backing_entries(), &[1, 2, 3]);
    assert!(example.notice().is_some());
    // Rejected input stays in the field for correction.
    assert_eq!(example.field().text(), "-");
}

#[test]
fn empty_submission_is_rejected_with_a_notice() {
    let mut example = SnapshotExample::new(&[]);
    example.submit();
    assert!(example.visible().is_empty());
    assert!(example.notice().is_some());
}

#[test]
fn independent_screens_do_not_share_state() {
    let mut first = SnapshotExample::new(&[1, 2, 3]);
    let second = SnapshotExample::new(&[1, 2, 3]);
    first.append(7);
    assert_eq!(first.visible(), &[1, 2, 3, 7]);
    assert_eq!(second.visible(), &[1, 2, 3]);
}
