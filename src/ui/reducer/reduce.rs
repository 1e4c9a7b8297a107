use crate::ui::mvi::Reducer;
use crate::ui::reducer::intent::EntriesIntent;
use crate::ui::reducer::state::EntriesState;

pub struct EntriesReducer;

impl Reducer for EntriesReducer {
    type State = EntriesState;
    type Intent = EntriesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EntriesIntent::Add { value } => {
                // Functional update: the next snapshot is a fresh vector,
                // the previous one is never extended in place.
                let mut entries = state.entries().to_vec();
                entries.push(value);
                EntriesState::from_entries(entries)
            }
            // Intents with no reduction rule fall through unchanged.
            _ => state,
        }
    }
}
