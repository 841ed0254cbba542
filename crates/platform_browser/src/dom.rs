//! DOM executor for layout reducer effects.

use widget_runtime::{LayoutAction, LayoutEffect, PanelSide};

use crate::interop;

/// Slide-out offset applied to a hidden panel.
pub const PANEL_SLIDE_OUT_OFFSET: &str = "-300px";

const NAVIGATION_COLLAPSED_CLASS: &str = "collapse";
const FOOTER_PINNED_CLASS: &str = "fixed";

/// Element ids of the shell regions the executor mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDomTargets {
    /// Left side panel element.
    pub left_panel: String,
    /// Right side panel element.
    pub right_panel: String,
    /// Click-to-dismiss overlay element.
    pub overlay: String,
    /// Top navigation bar element.
    pub navigation_bar: String,
    /// Menu toggle button element.
    pub menu_toggle: String,
    /// Shell footer element.
    pub footer: String,
    /// Main content element.
    pub content: String,
}

/// Applies [`LayoutEffect`] batches to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDom {
    targets: LayoutDomTargets,
}

impl LayoutDom {
    /// Creates an executor bound to the given shell elements.
    pub fn new(targets: LayoutDomTargets) -> Self {
        Self { targets }
    }

    /// Applies a reducer effect batch in order.
    ///
    /// Measurement effects produce follow-up actions the caller feeds back
    /// into the reducer.
    ///
    /// # Errors
    ///
    /// Fails when a target element is missing or a DOM call is rejected.
    pub fn apply(&self, effects: &[LayoutEffect]) -> Result<Vec<LayoutAction>, String> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                LayoutEffect::SlidePanel { side, visible } => {
                    let offset = if *visible { "0px" } else { PANEL_SLIDE_OUT_OFFSET };
                    interop::set_element_style(self.panel(*side), side.token(), Some(offset))?;
                }
                LayoutEffect::SetOverlay { visible } => {
                    self.set_display(&self.targets.overlay, *visible)?;
                }
                LayoutEffect::SetNavigationBarCollapsed { collapsed } => {
                    interop::set_element_class(
                        &self.targets.navigation_bar,
                        NAVIGATION_COLLAPSED_CLASS,
                        *collapsed,
                    )?;
                }
                LayoutEffect::AddBodyClass(class) => interop::set_body_class(class, true)?,
                LayoutEffect::RemoveBodyClass(class) => interop::set_body_class(class, false)?,
                LayoutEffect::SetLeftPanelDisplay { hidden } => {
                    self.set_display(&self.targets.left_panel, !hidden)?;
                }
                LayoutEffect::SetMenuToggleDisplay { hidden } => {
                    self.set_display(&self.targets.menu_toggle, !hidden)?;
                }
                LayoutEffect::SetFooterPinned { pinned } => {
                    interop::set_element_class(
                        &self.targets.footer,
                        FOOTER_PINNED_CLASS,
                        *pinned,
                    )?;
                }
                LayoutEffect::MeasureFooterHeight => {
                    let height = interop::element_height(&self.targets.footer)?;
                    follow_ups.push(LayoutAction::FooterAttached { height });
                }
                LayoutEffect::SetContentBottomMargin { px } => {
                    let value = px.map(|px| format!("{px}px"));
                    interop::set_element_style(
                        &self.targets.content,
                        "margin-bottom",
                        value.as_deref(),
                    )?;
                }
                LayoutEffect::SetFooterDisplay { visible } => {
                    self.set_display(&self.targets.footer, *visible)?;
                }
                LayoutEffect::SetTitle(title) => interop::set_document_title(title)?,
            }
        }
        Ok(follow_ups)
    }

    fn panel(&self, side: PanelSide) -> &str {
        match side {
            PanelSide::Left => &self.targets.left_panel,
            PanelSide::Right => &self.targets.right_panel,
        }
    }

    fn set_display(&self, id: &str, visible: bool) -> Result<(), String> {
        let value = if visible { None } else { Some("none") };
        interop::set_element_style(id, "display", value)
    }
}
