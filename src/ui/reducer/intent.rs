use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntriesIntent {
    /// Append one value to the rendered snapshot.
    Add { value: i64 },
    /// A submission that failed numeric parsing. Deliberately has no
    /// reduction rule; dispatching it leaves the snapshot untouched.
    Rejected,
}

impl Intent for EntriesIntent {}
