//! Client-side state for the auth page.
//!
//! DESIGN
//! ======
//! State is split by concern (`tabs`, `feedback`, `options`, `forms`) into
//! plain structs. Components hold them in `RwSignal`s; controllers and
//! submit flows only see the `Store` trait, so tests drive the same code
//! with a `RefCell`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;

use leptos::prelude::*;

pub mod feedback;
pub mod forms;
pub mod options;
pub mod tabs;

/// Read/modify access to a piece of page state.
pub trait Store<T> {
    /// Current value, without subscribing to changes.
    fn snapshot(&self) -> T;

    /// Mutate the value in place, notifying subscribers once.
    fn modify(&self, f: impl FnOnce(&mut T));
}

impl<T> Store<T> for RwSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn snapshot(&self) -> T {
        self.get_untracked()
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

impl<T: Clone> Store<T> for RefCell<T> {
    fn snapshot(&self) -> T {
        self.borrow().clone()
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }
}
