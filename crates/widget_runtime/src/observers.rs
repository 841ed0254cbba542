//! Ordered observer lists used for widget event broadcast.

/// An ordered list of callbacks notified synchronously in registration order.
pub struct Observers<T> {
    handlers: Vec<Box<dyn Fn(&T)>>,
}

impl<T> Observers<T> {
    /// Creates an empty observer list.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Registers an observer at the end of the list.
    pub fn push(&mut self, handler: impl Fn(&T) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Invokes every observer with `value`, in registration order.
    pub fn notify(&self, value: &T) {
        for handler in &self.handlers {
            handler(value);
        }
    }

    /// Returns the number of registered observers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` when no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.handlers.len())
            .finish()
    }
}
