//! Selection Callback Port
//!
//! Application logic invoked after the host reports a selection. One callback
//! is shared between a menu and the submenus it was propagated into, so the
//! handle is reference-counted; the item tree itself never is.

use std::fmt;
use std::sync::Arc;

use crate::domain::entities::MenuItem;

/// Shared handle to a selection callback.
///
/// Called with the chosen index within the menu that owns the item, and the
/// chosen item itself.
///
/// The menu model is driven from a single thread. The `Send + Sync` bound
/// lets a finished menu be built on one thread and handed to the UI thread;
/// share mutable state through `Arc<Mutex<_>>` or atomics.
#[derive(Clone)]
pub struct MenuCallback(Arc<dyn Fn(usize, &MenuItem) + Send + Sync>);

impl MenuCallback {
    /// Wrap a closure as a menu callback
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(usize, &MenuItem) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the callback
    pub fn call(&self, index: usize, item: &MenuItem) {
        (self.0)(index, item)
    }

    /// Returns true if both handles point at the same callback
    pub fn same_as(&self, other: &MenuCallback) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of menus (and other holders) sharing this callback
    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl fmt::Debug for MenuCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MenuCallback")
            .field(&Arc::as_ptr(&self.0))
            .finish()
    }
}
