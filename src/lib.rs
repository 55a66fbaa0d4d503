//! Ui kit
//!
//! 2D vector math for layout and geometry code
//!
//! Or observable stores shared across ui code: navbar height and toast queue

#[macro_use]
pub mod ui_error;
pub mod singleton_store;
pub mod store;
pub mod vector;

use std::error::Error;

use singleton_store::{read_store, write_store};

// The root functions lock the global stores. Subscribers run while the write
// lock is held, so a subscriber must not call back into them for its own
// store (a navbar subscriber calling `get_navbar_height` deadlocks), it gets
// the new value as its argument instead.

/// push a message to the global toast queue, return its id
pub fn push_toast(msg: &str) -> u64 {
    let toasts = singleton_store::toasts();
    let mut toasts = write_store(&toasts);
    toasts.push(msg)
}

/// remove a message from the global toast queue, false if `id` is not queued
pub fn remove_toast(id: u64) -> bool {
    let toasts = singleton_store::toasts();
    let mut toasts = write_store(&toasts);
    toasts.remove(id)
}

/// current global navbar height in px
pub fn get_navbar_height() -> f64 {
    let navbar = singleton_store::navbar_height();
    let navbar = read_store(&navbar);
    navbar.get()
}

/// update global navbar height, rejects negative or non-finite values
pub fn set_navbar_height(height: f64) -> Result<(), Box<dyn Error>> {
    let navbar = singleton_store::navbar_height();
    let mut navbar = write_store(&navbar);
    navbar.set(height)
}
