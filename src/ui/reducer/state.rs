use crate::ui::mvi::UiState;

/// Rendered snapshot of the entries list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntriesState {
    entries: Vec<i64>,
}

impl UiState for EntriesState {}

impl EntriesState {
    pub fn from_entries(entries: Vec<i64>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[i64] {
        &self.entries
    }
}
