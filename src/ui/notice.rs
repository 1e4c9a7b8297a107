/// Ticks a notice stays on screen (~3s at the default tick rate).
const NOTICE_TICKS: u8 = 12;

/// Transient status line shown under an input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    text: String,
    ticks_left: u8,
}

impl Notice {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ticks_left: NOTICE_TICKS,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Count down the notice in `slot`, clearing it once expired.
pub fn tick_notice(slot: &mut Option<Notice>) {
    if let Some(notice) = slot {
        notice.ticks_left = notice.ticks_left.saturating_sub(1);
        if notice.ticks_left == 0 {
            *slot = None;
        }
    }
}
