use statepad::ui::mvi::Reducer;
use statepad::ui::reducer::{EntriesIntent, EntriesReducer, EntriesState};

fn seeded() -> EntriesState {
    EntriesState::from_entries(vec![1, 2, 3])
}

#[test]
fn add_appends_to_the_snapshot() {
    let state = EntriesReducer::reduce(seeded(), EntriesIntent::Add { value: 7 });
    assert_eq!(state.entries(), &[1, 2, 3, 7]);
}

#[test]
fn add_on_empty_state_starts_the_list() {
    let state = EntriesReducer::reduce(EntriesState::default(), EntriesIntent::Add { value: 5 });
    assert_eq!(state.entries(), &[5]);
}

#[test]
fn add_twice_with_same_value_keeps_both() {
    let state = EntriesReducer::reduce(seeded(), EntriesIntent::Add { value: 4 });
    let state = EntriesReducer::reduce(state, EntriesIntent::Add { value: 4 });
    assert_eq!(state.entries(), &[1, 2, 3, 4, 4]);
}

#[test]
fn unhandled_intent_returns_state_unchanged() {
    let before = seeded();
    let after = EntriesReducer::reduce(before.clone(), EntriesIntent::Rejected);
    assert_eq!(after, before);
}

#[test]
fn reduce_does_not_mutate_the_previous_snapshot() {
    let before = seeded();
    let kept = before.clone();
    let _after = EntriesReducer::reduce(before, EntriesIntent::Add { value: 9 });
    // The clone taken before reduction still holds the old contents.
    assert_eq!(kept.entries(), &[1, 2, 3]);
}
