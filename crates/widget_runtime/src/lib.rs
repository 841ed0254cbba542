//! Widget state machines for the shell component kit.
//!
//! The crate owns the plain-data models, transition logic, side-effect
//! intents, and observer lists behind every stateful widget: chip groups,
//! block headers, the application shell layout, the step wizard, and the
//! navigation tree. Nothing in here touches the DOM; view crates render
//! these states and the platform crate executes the emitted effects.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod block_header;
mod chips;
mod layout;
mod media;
mod observers;
mod stepper;
mod tree;

pub use block_header::{BlockHeader, DescriptionPlacement};
pub use chips::{ChipState, ChipTone, ChipsGroup, ChipsGroupState};
pub use layout::{
    reduce_layout, LayoutAction, LayoutEffect, LayoutState, PanelSide, BODY_PANEL_CLOSED_CLASS,
};
pub use media::Breakpoint;
pub use observers::Observers;
pub use stepper::{
    reduce_stepper, StepState, StepStatus, StepTransition, Stepper, StepperAction, StepperEffect,
    StepperError, StepperState,
};
pub use tree::{Tree, TreeItem, TreeNode, TreePath, TreeState};
