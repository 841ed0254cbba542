//! Shared UI primitive library for the shell component kit.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*`
//! DOM contract consumed by the shell CSS layers. Widget state lives in
//! `widget_runtime`; these primitives render its tokens and forward DOM
//! events back to the state machines.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    BlockHeading, Chip, ChipGroup, ContentRegion, FooterBar, LayoutGap, LayoutJustify,
    LayoutPadding, NavMenuButton, NavigationBar, PageShell, ShellOverlay, SidePanel, StepActions,
    StepList, StepView, TreeHeader, TreeItemView, TreeSeparator, TreeSurface,
};

/// Convenience imports for application crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        BlockHeading, Chip, ChipGroup, ContentRegion, FooterBar, LayoutGap, LayoutJustify,
        LayoutPadding, NavMenuButton, NavigationBar, PageShell, ShellOverlay, SidePanel,
        StepActions, StepList, StepView, TreeHeader, TreeItemView, TreeSeparator, TreeSurface,
    };
}
