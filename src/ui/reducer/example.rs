use crossterm::event::KeyCode;
use tracing::debug;

use crate::collection::NumberLog;
use crate::ui::field::InputField;
use crate::ui::mvi::Reducer as _;
use crate::ui::notice::{tick_notice, Notice};
use crate::ui::reducer::intent::EntriesIntent;
use crate::ui::reducer::reduce::EntriesReducer;
use crate::ui::reducer::state::EntriesState;

/// Reduce-into-snapshot adapter.
///
/// Owns a private [`NumberLog`] and a reducer-driven snapshot of it.
/// Submissions append to the log and dispatch an [`EntriesIntent::Add`]
/// carrying the value read back from it; the reducer computes each new
/// snapshot without touching the previous one.
#[derive(Debug)]
pub struct ReducerExample {
    log: NumberLog,
    entries: EntriesState,
    field: InputField,
    notice: Option<Notice>,
}

impl ReducerExample {
    pub fn new(seed: &[i64]) -> Self {
        let log = NumberLog::new(seed.iter().copied());
        let entries = EntriesState::from_entries(log.snapshot());
        Self {
            log,
            entries,
            field: InputField::new(),
            notice: None,
        }
    }

    /// The snapshot the view renders from.
    pub fn entries(&self) -> &[i64] {
        self.entries.entries()
    }

    /// The backing collection's contents, for sanity checks only; the view
    /// never reads this.
    pub fn backing_entries(&self) -> &[i64] {
        self.log.entries()
    }

    pub fn field(&self) -> &InputField {
        &self.field
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(Notice::text)
    }

    pub fn on_key(&mut self, code: KeyCode) {
        self.field.handle_key(code);
    }

    pub fn on_tick(&mut self) {
        tick_notice(&mut self.notice);
    }

    /// Submit the current field contents.
    ///
    /// A parsed value is pushed into the log and then dispatched; a parse
    /// failure is kept away from the log, shows a notice, and dispatches an
    /// intent the reducer deliberately ignores.
    pub fn submit(&mut self) {
        match self.field.submit() {
            Ok(value) => {
                self.log.push(value);
                let value = self.log.last().unwrap_or(value);
                self.dispatch(EntriesIntent::Add { value });
                self.notice = None;
            }
            Err(err) => {
                debug!(error = %err, "reducer example rejected input");
                self.notice = Some(Notice::new(err.to_string()));
                self.dispatch(EntriesIntent::Rejected);
            }
        }
    }

    /// Run one intent through the reducer and store the resulting state.
    pub fn dispatch(&mut self, intent: EntriesIntent) {
        self.entries = EntriesReducer::reduce(std::mem::take(&mut self.entries), intent);
        debug!(total = self.entries.entries().len(), "reducer example dispatched");
    }
}
