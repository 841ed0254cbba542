//! Browser (`wasm32`) execution layer for `widget_runtime` effects.
//!
//! The crate turns the side-effect intents emitted by the layout reducer
//! into DOM mutations, watches `matchMedia` for responsive breakpoint
//! changes, and offers a one-shot attach hook for elements that need
//! measuring once they enter the document.
//!
//! DOM access is split by target under `interop`: the `wasm32` build talks
//! to `web-sys`, other targets get inert stubs so the crate stays testable
//! on the host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod attach;
pub mod dom;
mod interop;
pub mod media;

pub use attach::on_attach;
pub use dom::{LayoutDom, LayoutDomTargets, PANEL_SLIDE_OUT_OFFSET};
pub use media::{query_for, BreakpointWatcher};
