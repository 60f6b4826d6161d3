//! # Deferred computations
//!
//! Single threaded: a `Lazy` runs on the thread that forces it, at the moment it is forced.

/// A computation that runs at most once, when its value is requested.
pub struct Lazy<'a, T> {
    computation: Box<dyn FnOnce() -> T + 'a>,
}

impl<'a, T: 'a> Lazy<'a, T> {
    pub fn new(computation: impl FnOnce() -> T + 'a) -> Self {
        Self { computation: Box::new(computation) }
    }

    /// A computation whose value is already known.
    pub fn ready(value: T) -> Self {
        Self::new(move || value)
    }

    /// Transform the value once it is computed.
    pub fn map<U: 'a>(self, f: impl FnOnce(T) -> U + 'a) -> Lazy<'a, U> {
        Lazy::new(move || f(self.sync_get()))
    }

    /// Continue with another deferred computation that depends on this value.
    pub fn and_then<U: 'a>(self, f: impl FnOnce(T) -> Lazy<'a, U> + 'a) -> Lazy<'a, U> {
        Lazy::new(move || f(self.sync_get()).sync_get())
    }

    /// Run the computation to completion on the current thread.
    pub fn sync_get(self) -> T {
        (self.computation)()
    }
}
