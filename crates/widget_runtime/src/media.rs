//! Responsive breakpoint vocabulary shared by the layout and stepper machines.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Responsive viewport width class reported by the platform media watcher.
pub enum Breakpoint {
    /// Phones in portrait.
    XSmall,
    /// Phones in landscape and small tablets.
    Small,
    /// Tablets.
    Medium,
    /// Laptop-class viewports.
    Large,
    /// Wide desktop viewports.
    XLarge,
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::Large
    }
}

impl Breakpoint {
    /// Returns `true` for the small-and-down range where directional
    /// animations downgrade and the fixed footer releases.
    pub fn is_small_down(self) -> bool {
        matches!(self, Self::XSmall | Self::Small)
    }

    /// Stable attribute token for the breakpoint.
    pub fn token(self) -> &'static str {
        match self {
            Self::XSmall => "xsmall",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
        }
    }
}
