//! Shared transport interop for DOM access.
//!
//! This module routes calls to target-specific implementations while
//! preserving a uniform API for the higher-level `dom`, `media`, and
//! `attach` modules.

use widget_runtime::Breakpoint;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub use imp::MediaWatch;

pub fn set_body_class(class: &str, present: bool) -> Result<(), String> {
    imp::set_body_class(class, present)
}

pub fn set_element_class(id: &str, class: &str, present: bool) -> Result<(), String> {
    imp::set_element_class(id, class, present)
}

pub fn set_element_style(id: &str, property: &str, value: Option<&str>) -> Result<(), String> {
    imp::set_element_style(id, property, value)
}

pub fn element_height(id: &str) -> Result<i32, String> {
    imp::element_height(id)
}

pub fn set_document_title(title: &str) -> Result<(), String> {
    imp::set_document_title(title)
}

pub fn watch_media(query: &str, handler: Box<dyn Fn(bool)>) -> Result<MediaWatch, String> {
    imp::watch_media(query, handler)
}

pub fn current_breakpoint(queries: &[(Breakpoint, &str)]) -> Result<Option<Breakpoint>, String> {
    imp::current_breakpoint(queries)
}

pub fn on_element_attach(id: &str, handler: Box<dyn FnOnce()>) -> Result<(), String> {
    imp::on_element_attach(id, handler)
}
