use crossterm::event::KeyCode;
use statepad::ui::reducer::{EntriesIntent, ReducerExample};

fn type_text(example: &mut ReducerExample, text: &str) {
    for ch in text.chars() {
        example.on_key(KeyCode::Char(ch));
    }
}

#[test]
fn new_screen_renders_the_seed() {
    let example = ReducerExample::new(&[1, 2, 3]);
    assert_eq!(example.entries(), &[1, 2, 3]);
}

#[test]
fn submit_pushes_then_dispatches_add() {
    let mut example = ReducerExample::new(&[1, 2, 3]);
    type_text(&mut example, "5");
    example.submit();
    type_text(&mut example, "10");
    example.submit();
    assert_eq!(example.entries(), &[1, 2, 3, 5, 10]);
    assert_eq!(example.backing_entries(), &[1, 2, 3, 5, 10]);
    assert!(example.field().is_empty());
}

#[test]
fn dispatching_an_unhandled_intent_changes_nothing() {
    let mut example = ReducerExample::new(&[1, 2, 3]);
    example.dispatch(EntriesIntent::Rejected);
    assert_eq!(example.entries(), &[1, 2, 3]);
}

#[test]
fn invalid_submission_keeps_log_and_snapshot_untouched() {
    let mut example = ReducerExample::new(&[1, 2, 3]);
    type_text(&mut example, "99999999999999999999");
    example.submit();
    assert_eq!(example.entries(), &[1, 2, 3]);
    assert_eq!(example.backing_entries(), &[1, 2, 3]);
    assert!(example.notice().is_some());
}

#[test]
fn duplicate_submissions_grow_the_list_twice() {
    let mut example = ReducerExample::new(&[]);
    type_text(&mut example, "4");
    example.submit();
    type_text(&mut example, "4");
    example.submit();
    assert_eq!(example.entries(), &[4, 4]);
}

#[test]
fn independent_screens_do_not_share_state() {
    let mut first = ReducerExample::new(&[1, 2, 3]);
    let second = ReducerExample::new(&[1, 2, 3]);
    first.dispatch(EntriesIntent::Add { value: 8 });
    assert_eq!(first.entries(), &[1, 2, 3, 8]);
    assert_eq!(second.entries(), &[1, 2, 3]);
}
