use crossterm::event::KeyCode;
use thiserror::Error;

/// `-9223372036854775808` is the longest text an `i64` can need.
const MAX_LEN: usize = 20;

/// Why a submission was rejected at the form boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("enter a value first")]
    Empty,
    #[error("not a valid number")]
    Invalid,
}

/// Single-line numeric input field.
///
/// Accepts ASCII digits and one leading minus sign; everything else is
/// ignored at the keyboard. Submission parses the buffer as `i64` and
/// clears it on success. Rejected input stays in the buffer so the user
/// can correct it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    buffer: String,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key into the field. Returns true if the key was consumed.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(ch) if ch.is_ascii_digit() && self.buffer.len() < MAX_LEN => {
                self.buffer.push(ch);
                true
            }
            KeyCode::Char('-') if self.buffer.is_empty() => {
                self.buffer.push('-');
                true
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                true
            }
            _ => false,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Parse the buffer as a number.
    ///
    /// On success the field is cleared. On failure the buffer is left
    /// untouched; with digit-only keyboard filtering, failure means an
    /// empty buffer, a lone minus sign, or an out-of-range value.
    pub fn submit(&mut self) -> Result<i64, FieldError> {
        if self.buffer.is_empty() {
            return Err(FieldError::Empty);
        }
        match self.buffer.parse::<i64>() {
            Ok(value) => {
                self.buffer.clear();
                Ok(value)
            }
            Err(_) => Err(FieldError::Invalid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputField {
        let mut field = InputField::new();
        for ch in text.chars() {
            field.handle_key(KeyCode::Char(ch));
        }
        field
    }

    #[test]
    fn accepts_digits_and_leading_minus() {
        assert_eq!(typed("-42").text(), "-42");
    }

    #[test]
    fn rejects_letters_and_interior_minus() {
        let mut field = typed("12");
        assert!(!field.handle_key(KeyCode::Char('x')));
        assert!(!field.handle_key(KeyCode::Char('-')));
        assert_eq!(field.text(), "12");
    }

    #[test]
    fn backspace_edits() {
        let mut field = typed("123");
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.text(), "12");
    }

    #[test]
    fn submit_parses_and_clears() {
        let mut field = typed("37");
        assert_eq!(field.submit(), Ok(37));
        assert!(field.is_empty());
    }

    #[test]
    fn submit_on_empty_is_rejected() {
        let mut field = InputField::new();
        assert_eq!(field.submit(), Err(FieldError::Empty));
    }

    #[test]
    fn lone_minus_is_rejected_and_preserved() {
        let mut field = typed("-");
        assert_eq!(field.submit(), Err(FieldError::Invalid));
        assert_eq!(field.text(), "-");
    }

    #[test]
    fn overflow_is_rejected_and_preserved() {
        let mut field = typed("99999999999999999999");
        assert_eq!(field.submit(), Err(FieldError::Invalid));
        assert_eq!(field.text(), "99999999999999999999");
    }

    #[test]
    fn buffer_is_length_capped() {
        let mut field = typed("99999999999999999999");
        assert!(!field.handle_key(KeyCode::Char('9')));
        assert_eq!(field.text().len(), MAX_LEN);
    }
}
