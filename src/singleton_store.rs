use lazy_static::lazy_static;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

use crate::store::{NavbarHeight, Toasts};

// process wide stores shared by all ui code
lazy_static! {
    static ref NAVBAR_HEIGHT: Arc<RwLock<NavbarHeight>> =
        Arc::new(RwLock::new(NavbarHeight::new()));
    static ref TOASTS: Arc<RwLock<Toasts>> = Arc::new(RwLock::new(Toasts::new()));
}

/// global navbar height store
///
/// subscribers run under the write lock, they must not lock this store again
pub fn navbar_height() -> Arc<RwLock<NavbarHeight>> {
    Arc::clone(&NAVBAR_HEIGHT)
}

/// global toast queue, same locking rule as [`navbar_height`]
pub fn toasts() -> Arc<RwLock<Toasts>> {
    Arc::clone(&TOASTS)
}

/// write lock a store, recovering it if a subscriber panicked while it was held
///
/// the store value is always consistent when subscribers run, so the data
/// left behind by a panicking subscriber is kept as is
pub fn write_store<T>(store: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    store.write().unwrap_or_else(|err| {
        warn!("store lock poisoned by a panicking subscriber, recovering");
        store.clear_poison();
        err.into_inner()
    })
}

/// read lock a store, same recovery as [`write_store`]
pub fn read_store<T>(store: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    store.read().unwrap_or_else(|err| {
        warn!("store lock poisoned by a panicking subscriber, recovering");
        store.clear_poison();
        err.into_inner()
    })
}

#[cfg(test)]
mod test_singleton_store {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_instance() {
        assert!(Arc::ptr_eq(&toasts(), &toasts()));
        assert!(Arc::ptr_eq(&navbar_height(), &navbar_height()));
    }

    #[test]
    fn test_recover_after_panicking_subscriber() {
        let store = Arc::new(RwLock::new(Toasts::new()));
        let sub = write_store(&store).subscribe(|items| {
            if items.iter().any(|t| t.msg == "boom") {
                panic!("subscriber failed");
            }
        });

        let shared = Arc::clone(&store);
        let res = thread::spawn(move || {
            write_store(&shared).push("boom");
        })
        .join();
        assert!(res.is_err());
        assert!(store.is_poisoned());

        // toast pushed before the panic is still readable
        let items = read_store(&store).items();
        assert!(!store.is_poisoned());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].msg, "boom");

        let mut toasts = write_store(&store);
        assert!(toasts.unsubscribe(sub));
        assert_eq!(toasts.push("after"), 2);
        assert!(toasts.remove(1));
    }
}
