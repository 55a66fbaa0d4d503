use std::error::Error;

use tracing::{debug, warn};

use super::*;
use crate::ui_error::UiErrorKind;

/// navbar height on startup, in px
pub const DEFAULT_NAVBAR_HEIGHT: f64 = 0.0;

/// height of the bottom bar in px, written by layout code and read by rendering code
#[derive(Debug)]
pub struct NavbarHeight(Writable<f64>);

impl NavbarHeight {
    pub fn new() -> Self {
        NavbarHeight(Writable::new(DEFAULT_NAVBAR_HEIGHT))
    }

    pub fn get(&self) -> f64 {
        self.0.get()
    }

    /// height must be finite and not negative, otherwise current height is kept
    pub fn set(&mut self, height: f64) -> Result<(), Box<dyn Error>> {
        let kind = if !height.is_finite() {
            Some(UiErrorKind::NonFiniteValue)
        } else if height < 0.0 {
            Some(UiErrorKind::NegativeValue)
        } else {
            None
        };
        if let Some(kind) = kind {
            warn!(height, "rejected navbar height");
            return Err(Box::new(ui_err!(
                kind,
                format!(
                    "navbar height must be a finite non-negative number, got {}",
                    height
                )
            )));
        }
        debug!(height, "navbar height set");
        self.0.set(height);
        Ok(())
    }

    pub fn subscribe<F>(&mut self, f: F) -> SubscriberId
    where
        F: Fn(&f64) + Send + Sync + 'static,
    {
        self.0.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.0.unsubscribe(id)
    }
}

impl Default for NavbarHeight {
    fn default() -> Self {
        NavbarHeight::new()
    }
}

#[cfg(test)]
mod test_navbar {
    use super::*;
    use crate::ui_error::UiError;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_default_height() {
        assert_eq!(NavbarHeight::new().get(), 0.0);
        assert_eq!(NavbarHeight::default().get(), DEFAULT_NAVBAR_HEIGHT);
    }

    #[test]
    fn test_set_notifies() {
        let mut navbar = NavbarHeight::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        navbar.subscribe(move |h| sink.lock().unwrap().push(*h));
        navbar.set(48.5).unwrap();
        assert_eq!(navbar.get(), 48.5);
        assert_eq!(*seen.lock().unwrap(), vec![0.0, 48.5]);
    }

    #[test]
    fn test_reject_invalid_height() {
        let mut navbar = NavbarHeight::new();
        navbar.set(32.0).unwrap();
        let cases = [
            (-1.0, UiErrorKind::NegativeValue),
            (f64::NAN, UiErrorKind::NonFiniteValue),
            (f64::INFINITY, UiErrorKind::NonFiniteValue),
        ];
        for (bad, kind) in cases {
            let err = navbar.set(bad).unwrap_err();
            assert!(err.to_string().contains("navbar height"));
            let ui_error = err.downcast_ref::<UiError>().unwrap();
            assert_eq!(ui_error.kind(), kind);
            assert_eq!(navbar.get(), 32.0);
        }
    }
}
