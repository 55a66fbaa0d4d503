use tracing::{debug, warn};

use super::*;

/// id handed to the first pushed toast
pub const FIRST_TOAST_ID: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastItem {
    pub msg: String,
    pub id: u64,
}

/// ordered list of toast messages
///
/// ids grow monotonically and are never reused, even after a toast is removed
#[derive(Debug)]
pub struct Toasts {
    list: Writable<Vec<ToastItem>>,
    last_id: u64,
}

impl Toasts {
    pub fn new() -> Self {
        Toasts {
            list: Writable::new(Vec::new()),
            last_id: FIRST_TOAST_ID - 1,
        }
    }

    /// append `msg`, return an id handle to remove the message early if needed
    pub fn push(&mut self, msg: &str) -> u64 {
        self.last_id += 1;
        let id = self.last_id;
        self.list.update(|items| {
            items.push(ToastItem {
                msg: msg.to_string(),
                id,
            })
        });
        debug!(id, "toast pushed");
        id
    }

    /// remove the first toast with `id`, unknown id is a no-op and returns false
    pub fn remove(&mut self, id: u64) -> bool {
        match self.list.value().iter().position(|item| item.id == id) {
            Some(idx) => {
                self.list.update(|items| {
                    items.remove(idx);
                });
                debug!(id, "toast removed");
                true
            }
            None => {
                warn!(id, "no toast to remove");
                false
            }
        }
    }

    pub fn items(&self) -> Vec<ToastItem> {
        self.list.get()
    }

    pub fn len(&self) -> usize {
        self.list.value().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.value().is_empty()
    }

    pub fn subscribe<F>(&mut self, f: F) -> SubscriberId
    where
        F: Fn(&Vec<ToastItem>) + Send + Sync + 'static,
    {
        self.list.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.list.unsubscribe(id)
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Toasts::new()
    }
}
