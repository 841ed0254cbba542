//! One-shot element attach hook.

use crate::interop;

/// Invokes `handler` once the element with `id` is present in the
/// document. Fires immediately when the element already exists, otherwise
/// registers a mutation observer that disconnects after the first match.
///
/// # Errors
///
/// Fails when the observer cannot be registered.
pub fn on_attach(id: &str, handler: impl FnOnce() + 'static) -> Result<(), String> {
    interop::on_element_attach(id, Box::new(handler))
}
