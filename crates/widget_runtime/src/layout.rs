//! Application shell layout state machine.
//!
//! The shell coordinates a fixed set of regions: navigation bar, left and
//! right slide-in panels, content, footer, and a dimming overlay. All
//! transitions are expressed as [`LayoutAction`]s reduced against
//! [`LayoutState`]; the resulting [`LayoutEffect`] intents describe the DOM
//! class/style mutations a platform host must apply. An empty effect list
//! means the action was ignored or redundant.

use serde::{Deserialize, Serialize};

use crate::media::Breakpoint;

/// Body class toggled while the left panel is not pinned open.
pub const BODY_PANEL_CLOSED_CLASS: &str = "ls-closed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Which slide-in panel an effect targets.
pub enum PanelSide {
    /// The left navigation panel.
    Left,
    /// The right utility panel.
    Right,
}

impl PanelSide {
    /// Stable attribute token for the side.
    pub fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Visibility and pinning flags for every shell region.
pub struct LayoutState {
    /// Whether the left panel is slid in.
    pub left_panel_visible: bool,
    /// Whether the right panel is slid in.
    pub right_panel_visible: bool,
    /// Whether the navigation bar is expanded.
    pub navigation_bar_expanded: bool,
    /// Whether the dimming overlay is shown.
    pub overlay_visible: bool,
    /// Hard override removing the left panel from the toggle surface.
    pub left_panel_disabled: bool,
    /// Whether the left panel is pinned open outside the overlay cycle.
    pub fixed_left_panel: bool,
    /// Whether the footer is visually pinned to the viewport bottom.
    pub footer_fixed: bool,
    /// Whether the footer renders at all.
    pub footer_visible: bool,
    /// Bottom margin applied to the content region while the footer is
    /// pinned, measured from the footer's rendered height.
    pub content_bottom_margin: Option<i32>,
    /// Last breakpoint reported by the media watcher.
    pub breakpoint: Breakpoint,
    /// Application title shown in the navigation bar.
    pub title: String,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            left_panel_visible: false,
            right_panel_visible: false,
            navigation_bar_expanded: false,
            overlay_visible: false,
            left_panel_disabled: false,
            fixed_left_panel: false,
            footer_fixed: false,
            footer_visible: true,
            content_bottom_margin: None,
            breakpoint: Breakpoint::default(),
            title: String::new(),
        }
    }
}

impl LayoutState {
    /// Returns `true` while either panel is slid in.
    pub fn any_panel_open(&self) -> bool {
        self.left_panel_visible || self.right_panel_visible
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_layout`] to mutate [`LayoutState`].
pub enum LayoutAction {
    /// Slide the left panel in (ignored while disabled).
    ShowLeftPanel,
    /// Slide the left panel out (ignored while pinned or disabled).
    HideLeftPanel,
    /// Toggle the left panel.
    ToggleLeftPanel,
    /// Slide the right panel in.
    ShowRightPanel,
    /// Slide the right panel out.
    HideRightPanel,
    /// Toggle the right panel.
    ToggleRightPanel,
    /// Expand or collapse the navigation bar; expanding closes both panels.
    ToggleNavigationBar,
    /// Overlay click: close both panels and collapse the navigation bar.
    HidePanels,
    /// Pin the left panel open, independent of the overlay cycle.
    FixLeftPanel,
    /// Release a pinned left panel.
    UnfixLeftPanel,
    /// Remove the left panel from the interactive toggle surface.
    DisableLeftPanel,
    /// Restore a disabled left panel.
    EnableLeftPanel,
    /// Pin the footer and request a height measurement once attached.
    FixFooter,
    /// Release a pinned footer and clear the content bottom margin.
    UnfixFooter,
    /// Deferred completion of the footer height measurement.
    FooterAttached {
        /// Rendered footer height in pixels.
        height: i32,
    },
    /// Show the footer.
    ShowFooter,
    /// Hide the footer.
    HideFooter,
    /// Replace the navigation bar title.
    SetTitle {
        /// New application title.
        title: String,
    },
    /// Responsive breakpoint change; small-and-down releases a pinned footer.
    BreakpointChanged {
        /// Breakpoint that was entered.
        breakpoint: Breakpoint,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// DOM class/style intents emitted by [`reduce_layout`] for the platform
/// host to execute.
pub enum LayoutEffect {
    /// Slide a panel in (`visible`) or out.
    SlidePanel {
        /// Panel to move.
        side: PanelSide,
        /// Target visibility.
        visible: bool,
    },
    /// Show or hide the dimming overlay.
    SetOverlay {
        /// Target visibility.
        visible: bool,
    },
    /// Add or remove the navigation bar `collapse` class.
    SetNavigationBarCollapsed {
        /// Whether the bar collapses.
        collapsed: bool,
    },
    /// Add a class on the document body.
    AddBodyClass(&'static str),
    /// Remove a class from the document body.
    RemoveBodyClass(&'static str),
    /// Force or restore the left panel display.
    SetLeftPanelDisplay {
        /// `true` removes the panel from rendering entirely.
        hidden: bool,
    },
    /// Force or restore the panel toggle control display.
    SetMenuToggleDisplay {
        /// `true` removes the toggle from rendering entirely.
        hidden: bool,
    },
    /// Pin or release the footer.
    SetFooterPinned {
        /// Whether the footer is pinned.
        pinned: bool,
    },
    /// Ask the host to measure the footer height once it is attached to
    /// the document, then dispatch [`LayoutAction::FooterAttached`].
    MeasureFooterHeight,
    /// Apply or clear the content bottom margin.
    SetContentBottomMargin {
        /// Margin in pixels, or `None` to clear.
        px: Option<i32>,
    },
    /// Show or hide the footer region.
    SetFooterDisplay {
        /// Target visibility.
        visible: bool,
    },
    /// Replace the rendered navigation bar title.
    SetTitle(String),
}

/// Applies a [`LayoutAction`] to the shell state and collects the DOM
/// intents it produces.
///
/// Invalid calls (toggling a disabled panel, hiding a pinned panel) are
/// silent no-ops that return an empty effect list.
pub fn reduce_layout(state: &mut LayoutState, action: LayoutAction) -> Vec<LayoutEffect> {
    let mut effects = Vec::new();
    match action {
        LayoutAction::ShowLeftPanel => show_left_panel(state, &mut effects),
        LayoutAction::HideLeftPanel => hide_left_panel(state, &mut effects),
        LayoutAction::ToggleLeftPanel => {
            if state.left_panel_visible {
                hide_left_panel(state, &mut effects);
            } else {
                show_left_panel(state, &mut effects);
            }
        }
        LayoutAction::ShowRightPanel => show_right_panel(state, &mut effects),
        LayoutAction::HideRightPanel => hide_right_panel(state, &mut effects),
        LayoutAction::ToggleRightPanel => {
            if state.right_panel_visible {
                hide_right_panel(state, &mut effects);
            } else {
                show_right_panel(state, &mut effects);
            }
        }
        LayoutAction::ToggleNavigationBar => {
            if state.navigation_bar_expanded {
                collapse_navigation_bar(state, &mut effects);
            } else {
                hide_left_panel(state, &mut effects);
                hide_right_panel(state, &mut effects);
                state.navigation_bar_expanded = true;
                effects.push(LayoutEffect::SetNavigationBarCollapsed { collapsed: false });
            }
        }
        LayoutAction::HidePanels => {
            hide_right_panel(state, &mut effects);
            hide_left_panel(state, &mut effects);
            collapse_navigation_bar(state, &mut effects);
        }
        LayoutAction::FixLeftPanel => {
            if !state.left_panel_disabled {
                state.fixed_left_panel = true;
                show_left_panel(state, &mut effects);
                effects.push(LayoutEffect::RemoveBodyClass(BODY_PANEL_CLOSED_CLASS));
            }
        }
        LayoutAction::UnfixLeftPanel => {
            if !state.left_panel_disabled {
                state.fixed_left_panel = false;
                effects.push(LayoutEffect::AddBodyClass(BODY_PANEL_CLOSED_CLASS));
            }
        }
        LayoutAction::DisableLeftPanel => {
            if state.fixed_left_panel {
                state.fixed_left_panel = false;
                effects.push(LayoutEffect::AddBodyClass(BODY_PANEL_CLOSED_CLASS));
            }
            hide_left_panel(state, &mut effects);
            state.left_panel_disabled = true;
            effects.push(LayoutEffect::SetLeftPanelDisplay { hidden: true });
            effects.push(LayoutEffect::SetMenuToggleDisplay { hidden: true });
        }
        LayoutAction::EnableLeftPanel => {
            state.left_panel_disabled = false;
            effects.push(LayoutEffect::SetLeftPanelDisplay { hidden: false });
            effects.push(LayoutEffect::SetMenuToggleDisplay { hidden: false });
        }
        LayoutAction::FixFooter => {
            state.footer_fixed = true;
            effects.push(LayoutEffect::SetFooterPinned { pinned: true });
            effects.push(LayoutEffect::MeasureFooterHeight);
        }
        LayoutAction::UnfixFooter => unfix_footer(state, &mut effects),
        LayoutAction::FooterAttached { height } => {
            if state.footer_fixed {
                state.content_bottom_margin = Some(height);
                effects.push(LayoutEffect::SetContentBottomMargin { px: Some(height) });
            }
        }
        LayoutAction::ShowFooter => {
            if !state.footer_visible {
                state.footer_visible = true;
                effects.push(LayoutEffect::SetFooterDisplay { visible: true });
            }
        }
        LayoutAction::HideFooter => {
            if state.footer_visible {
                state.footer_visible = false;
                effects.push(LayoutEffect::SetFooterDisplay { visible: false });
            }
        }
        LayoutAction::SetTitle { title } => {
            state.title = title.clone();
            effects.push(LayoutEffect::SetTitle(title));
        }
        LayoutAction::BreakpointChanged { breakpoint } => {
            state.breakpoint = breakpoint;
            if breakpoint.is_small_down() && state.footer_fixed {
                unfix_footer(state, &mut effects);
            }
        }
    }
    effects
}

fn overlay_needed(state: &LayoutState) -> bool {
    (state.left_panel_visible && !state.fixed_left_panel) || state.right_panel_visible
}

fn sync_overlay(state: &mut LayoutState, effects: &mut Vec<LayoutEffect>) {
    let needed = overlay_needed(state);
    if state.overlay_visible != needed {
        state.overlay_visible = needed;
        effects.push(LayoutEffect::SetOverlay { visible: needed });
    }
}

fn show_left_panel(state: &mut LayoutState, effects: &mut Vec<LayoutEffect>) {
    if state.left_panel_disabled {
        return;
    }
    hide_right_panel(state, effects);
    collapse_navigation_bar(state, effects);
    if !state.left_panel_visible {
        state.left_panel_visible = true;
        effects.push(LayoutEffect::SlidePanel {
            side: PanelSide::Left,
            visible: true,
        });
    }
    sync_overlay(state, effects);
}

fn hide_left_panel(state: &mut LayoutState, effects: &mut Vec<LayoutEffect>) {
    if state.fixed_left_panel || state.left_panel_disabled {
        return;
    }
    if state.left_panel_visible {
        state.left_panel_visible = false;
        effects.push(LayoutEffect::SlidePanel {
            side: PanelSide::Left,
            visible: false,
        });
    }
    sync_overlay(state, effects);
}

fn show_right_panel(state: &mut LayoutState, effects: &mut Vec<LayoutEffect>) {
    hide_left_panel(state, effects);
    collapse_navigation_bar(state, effects);
    if !state.right_panel_visible {
        state.right_panel_visible = true;
        effects.push(LayoutEffect::SlidePanel {
            side: PanelSide::Right,
            visible: true,
        });
    }
    sync_overlay(state, effects);
}

fn hide_right_panel(state: &mut LayoutState, effects: &mut Vec<LayoutEffect>) {
    if state.right_panel_visible {
        state.right_panel_visible = false;
        effects.push(LayoutEffect::SlidePanel {
            side: PanelSide::Right,
            visible: false,
        });
    }
    sync_overlay(state, effects);
}

fn collapse_navigation_bar(state: &mut LayoutState, effects: &mut Vec<LayoutEffect>) {
    if state.navigation_bar_expanded {
        state.navigation_bar_expanded = false;
        effects.push(LayoutEffect::SetNavigationBarCollapsed { collapsed: true });
    }
}

fn unfix_footer(state: &mut LayoutState, effects: &mut Vec<LayoutEffect>) {
    state.footer_fixed = false;
    effects.push(LayoutEffect::SetFooterPinned { pinned: false });
    if state.content_bottom_margin.take().is_some() {
        effects.push(LayoutEffect::SetContentBottomMargin { px: None });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn apply(state: &mut LayoutState, actions: Vec<LayoutAction>) -> Vec<LayoutEffect> {
        let mut effects = Vec::new();
        for action in actions {
            effects.extend(reduce_layout(state, action));
        }
        effects
    }

    #[test]
    fn panels_are_mutually_exclusive() {
        let mut state = LayoutState::default();
        apply(
            &mut state,
            vec![LayoutAction::ShowLeftPanel, LayoutAction::ShowRightPanel],
        );

        assert!(!state.left_panel_visible);
        assert!(state.right_panel_visible);
        assert!(state.overlay_visible);
    }

    #[test]
    fn overlay_tracks_panel_visibility() {
        let mut state = LayoutState::default();

        reduce_layout(&mut state, LayoutAction::ShowLeftPanel);
        assert!(state.overlay_visible);

        reduce_layout(&mut state, LayoutAction::HideLeftPanel);
        assert!(!state.overlay_visible);
        assert!(!state.any_panel_open());
    }

    #[test]
    fn disabled_left_panel_ignores_show() {
        let mut state = LayoutState::default();
        reduce_layout(&mut state, LayoutAction::DisableLeftPanel);

        let effects = reduce_layout(&mut state, LayoutAction::ShowLeftPanel);

        assert!(effects.is_empty());
        assert!(!state.left_panel_visible);
        assert!(!state.overlay_visible);
    }

    #[test]
    fn enable_restores_toggle_surface() {
        let mut state = LayoutState::default();
        reduce_layout(&mut state, LayoutAction::DisableLeftPanel);
        reduce_layout(&mut state, LayoutAction::EnableLeftPanel);

        reduce_layout(&mut state, LayoutAction::ShowLeftPanel);
        assert!(state.left_panel_visible);
    }

    #[test]
    fn fixed_left_panel_survives_hide_and_overlay_cycle() {
        let mut state = LayoutState::default();
        let effects = reduce_layout(&mut state, LayoutAction::FixLeftPanel);

        assert!(state.fixed_left_panel);
        assert!(state.left_panel_visible);
        assert!(!state.overlay_visible);
        assert!(effects.contains(&LayoutEffect::RemoveBodyClass(BODY_PANEL_CLOSED_CLASS)));

        let effects = reduce_layout(&mut state, LayoutAction::HideLeftPanel);
        assert!(effects.is_empty());
        assert!(state.left_panel_visible);
    }

    #[test]
    fn unfix_restores_closed_body_class() {
        let mut state = LayoutState::default();
        reduce_layout(&mut state, LayoutAction::FixLeftPanel);
        let effects = reduce_layout(&mut state, LayoutAction::UnfixLeftPanel);

        assert!(!state.fixed_left_panel);
        assert!(effects.contains(&LayoutEffect::AddBodyClass(BODY_PANEL_CLOSED_CLASS)));
    }

    #[test]
    fn disabled_panel_ignores_fix_requests() {
        let mut state = LayoutState::default();
        reduce_layout(&mut state, LayoutAction::DisableLeftPanel);

        let effects = reduce_layout(&mut state, LayoutAction::FixLeftPanel);

        assert!(effects.is_empty());
        assert!(!state.fixed_left_panel);
        assert!(!state.left_panel_visible);
    }

    #[test]
    fn expanding_navigation_bar_closes_both_panels() {
        let mut state = LayoutState::default();
        reduce_layout(&mut state, LayoutAction::ShowRightPanel);

        let effects = reduce_layout(&mut state, LayoutAction::ToggleNavigationBar);

        assert!(state.navigation_bar_expanded);
        assert!(!state.any_panel_open());
        assert!(!state.overlay_visible);
        assert!(effects.contains(&LayoutEffect::SetNavigationBarCollapsed { collapsed: false }));
    }

    #[test]
    fn showing_a_panel_collapses_expanded_navigation_bar() {
        let mut state = LayoutState::default();
        reduce_layout(&mut state, LayoutAction::ToggleNavigationBar);
        assert!(state.navigation_bar_expanded);

        reduce_layout(&mut state, LayoutAction::ShowLeftPanel);
        assert!(!state.navigation_bar_expanded);
        assert!(state.left_panel_visible);
    }

    #[test]
    fn overlay_click_closes_everything() {
        let mut state = LayoutState::default();
        reduce_layout(&mut state, LayoutAction::ShowLeftPanel);

        reduce_layout(&mut state, LayoutAction::HidePanels);

        assert!(!state.any_panel_open());
        assert!(!state.navigation_bar_expanded);
        assert!(!state.overlay_visible);
    }

    #[test]
    fn fix_footer_requests_measurement_then_applies_margin() {
        let mut state = LayoutState::default();
        let effects = reduce_layout(&mut state, LayoutAction::FixFooter);
        assert!(effects.contains(&LayoutEffect::MeasureFooterHeight));
        assert!(state.footer_fixed);

        let effects = reduce_layout(&mut state, LayoutAction::FooterAttached { height: 56 });
        assert_eq!(state.content_bottom_margin, Some(56));
        assert!(effects.contains(&LayoutEffect::SetContentBottomMargin { px: Some(56) }));
    }

    #[test]
    fn stale_footer_measurement_is_dropped_after_unfix() {
        let mut state = LayoutState::default();
        reduce_layout(&mut state, LayoutAction::FixFooter);
        reduce_layout(&mut state, LayoutAction::UnfixFooter);

        let effects = reduce_layout(&mut state, LayoutAction::FooterAttached { height: 56 });

        assert!(effects.is_empty());
        assert_eq!(state.content_bottom_margin, None);
    }

    #[test]
    fn small_breakpoint_unfixes_the_footer() {
        let mut state = LayoutState::default();
        reduce_layout(&mut state, LayoutAction::FixFooter);
        reduce_layout(&mut state, LayoutAction::FooterAttached { height: 40 });

        let effects = reduce_layout(
            &mut state,
            LayoutAction::BreakpointChanged {
                breakpoint: Breakpoint::Small,
            },
        );

        assert!(!state.footer_fixed);
        assert_eq!(state.content_bottom_margin, None);
        assert!(effects.contains(&LayoutEffect::SetFooterPinned { pinned: false }));
        assert_eq!(state.breakpoint, Breakpoint::Small);
    }

    #[test]
    fn large_breakpoint_keeps_fixed_footer() {
        let mut state = LayoutState::default();
        reduce_layout(&mut state, LayoutAction::FixFooter);

        reduce_layout(
            &mut state,
            LayoutAction::BreakpointChanged {
                breakpoint: Breakpoint::XLarge,
            },
        );

        assert!(state.footer_fixed);
    }

    #[test]
    fn toggles_flip_panel_state() {
        let mut state = LayoutState::default();

        reduce_layout(&mut state, LayoutAction::ToggleLeftPanel);
        assert!(state.left_panel_visible);
        reduce_layout(&mut state, LayoutAction::ToggleLeftPanel);
        assert!(!state.left_panel_visible);

        reduce_layout(&mut state, LayoutAction::ToggleRightPanel);
        assert!(state.right_panel_visible);
        reduce_layout(&mut state, LayoutAction::ToggleRightPanel);
        assert!(!state.right_panel_visible);
    }

    #[test]
    fn footer_visibility_flags_emit_display_effects() {
        let mut state = LayoutState::default();

        let effects = reduce_layout(&mut state, LayoutAction::HideFooter);
        assert!(effects.contains(&LayoutEffect::SetFooterDisplay { visible: false }));

        let effects = reduce_layout(&mut state, LayoutAction::HideFooter);
        assert!(effects.is_empty());

        let effects = reduce_layout(&mut state, LayoutAction::ShowFooter);
        assert!(effects.contains(&LayoutEffect::SetFooterDisplay { visible: true }));
    }

    #[test]
    fn right_panel_opens_over_a_fixed_left_panel() {
        let mut state = LayoutState::default();
        reduce_layout(&mut state, LayoutAction::FixLeftPanel);

        reduce_layout(&mut state, LayoutAction::ShowRightPanel);

        assert!(state.left_panel_visible);
        assert!(state.right_panel_visible);
        assert!(state.overlay_visible);
    }
}
