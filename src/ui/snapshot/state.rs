use crossterm::event::KeyCode;
use tracing::debug;

use crate::collection::NumberLog;
use crate::ui::field::InputField;
use crate::ui::notice::{tick_notice, Notice};

/// Snapshot-replace adapter.
///
/// Owns a private [`NumberLog`] and a visible snapshot of it. Every
/// submission appends to the log, then republishes the snapshot as a new
/// vector built from the previous snapshot plus the element read back from
/// the log. Rendering reads only the snapshot.
#[derive(Debug)]
pub struct SnapshotExample {
    log: NumberLog,
    visible: Vec<i64>,
    field: InputField,
    notice: Option<Notice>,
}

impl SnapshotExample {
    pub fn new(seed: &[i64]) -> Self {
        let log = NumberLog::new(seed.iter().copied());
        let visible = log.snapshot();
        Self {
            log,
            visible,
            field: InputField::new(),
            notice: None,
        }
    }

    /// The snapshot the view renders from.
    pub fn visible(&self) -> &[i64] {
        &self.visible
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
    /// Parse failures never reach the collection: the value is rejected at
    /// the form boundary and a notice is shown instead.
    pub fn submit(&mut self) {
        match self.field.submit() {
            Ok(value) => {
                self.append(value);
                self.notice = None;
            }
            Err(err) => {
                debug!(error = %err, "snapshot example rejected input");
                self.notice = Some(Notice::new(err.to_string()));
            }
        }
    }

    /// Append one value: push into the log, then replace the visible
    /// snapshot with a copy of the previous snapshot plus the value most
    /// recently read back from the log.
    pub fn append(&mut self, value: i64) {
        self.log.push(value);
        let mut next = self.visible.clone();
        if let Some(last) = self.log.last() {
            next.push(last);
        }
        debug!(value, total = next.len(), "snapshot example appended");
        self.visible = next;
    }
}
