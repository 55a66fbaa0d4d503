//! ui error type

use std::error::Error;
use std::fmt::{Display, Formatter};

/// what went wrong, so callers can branch without parsing the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorKind {
    /// value below the store's lower bound
    NegativeValue,
    /// NaN or infinity written to a store
    NonFiniteValue,
}

#[derive(Debug)]
pub struct UiError {
    kind: UiErrorKind,
    err: String,
}

impl UiError {
    pub fn new(kind: UiErrorKind, err: &str) -> UiError {
        UiError {
            kind,
            err: err.to_string(),
        }
    }

    pub fn kind(&self) -> UiErrorKind {
        self.kind
    }
}

impl Display for UiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[UiError::{:?}]: {}", self.kind, self.err)
    }
}

impl Error for UiError {}

/// build a [`UiError`] tagged with source location
#[macro_export]
macro_rules! ui_err {
    ( $kind:expr, $x:expr ) => {{
        $crate::ui_error::UiError::new(
            $kind,
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}

#[cfg(test)]
mod test_ui_error {
    use super::*;

    #[test]
    fn test_ui_err_display() {
        let err = ui_err!(UiErrorKind::NegativeValue, "height -1 is negative");
        let msg = err.to_string();
        assert_eq!(err.kind(), UiErrorKind::NegativeValue);
        assert!(msg.starts_with("[UiError::NegativeValue]: "));
        assert!(msg.contains("ui_error.rs"));
        assert!(msg.ends_with("height -1 is negative"));
    }
}
