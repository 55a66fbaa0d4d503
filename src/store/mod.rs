//! Observable value containers
//!
//! A [`Writable`] holds one value and a list of subscribers, every write
//! calls each subscriber synchronously, in subscription order.

use std::fmt::Debug;

use tracing::debug;

mod navbar;
mod toast;

pub use self::navbar::*;
pub use self::toast::*;

pub type Subscriber<T> = Box<dyn Fn(&T) + Send + Sync>;

/// handle returned by [`Writable::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

pub struct Writable<T> {
    value: T,
    subscribers: Vec<(SubscriberId, Subscriber<T>)>,
    next_id: u64,
}

impl<T> Writable<T> {
    pub fn new(value: T) -> Self {
        Writable {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// borrow current value without cloning
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// mutate value in place, then notify
    pub fn update<F: FnOnce(&mut T)>(&mut self, f: F) {
        f(&mut self.value);
        self.notify();
    }

    /// register `f`, it is called once right away with the current value
    pub fn subscribe<F>(&mut self, f: F) -> SubscriberId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        f(&self.value);
        self.subscribers.push((id, Box::new(f)));
        debug!(subscriber = id.0, total = self.subscribers.len(), "store subscribe");
        id
    }

    /// return false if `id` is not subscribed
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        match self.subscribers.iter().position(|(sub_id, _)| *sub_id == id) {
            Some(idx) => {
                let _removed = self.subscribers.remove(idx);
                debug!(subscriber = id.0, total = self.subscribers.len(), "store unsubscribe");
                true
            }
            None => false,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&self) {
        debug!(subscribers = self.subscribers.len(), "store write");
        for (_, f) in &self.subscribers {
            f(&self.value);
        }
    }
}

impl<T: Clone> Writable<T> {
    /// snapshot of current value
    pub fn get(&self) -> T {
        self.value.clone()
    }
}

impl<T: Default> Default for Writable<T> {
    fn default() -> Self {
        Writable::new(T::default())
    }
}

impl<T: Debug> Debug for Writable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Writable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
