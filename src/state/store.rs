//! Access seam for widget state.
//!
//! Components hold their state in an `RwSignal`; the async flows in this
//! module tree only need read and write access, so they take any `Store`.

use leptos::prelude::*;

/// Read/write access to one piece of widget state.
///
/// Both methods return `None` if the state has been disposed (the owning
/// component unmounted mid-flight).
pub trait Store<T> {
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;

    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> Store<T> for RwSignal<T> {
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[cfg(test)]
impl<T> Store<T> for std::cell::RefCell<T> {
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
