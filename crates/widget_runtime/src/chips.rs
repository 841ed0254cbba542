//! Single-selection chip group.

use serde::{Deserialize, Serialize};

use crate::observers::Observers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Color-scheme token cascaded from a group to every chip in it.
pub enum ChipTone {
    /// Default chip styling.
    Standard,
    /// Accent-colored chip.
    Accent,
    /// Success-colored chip.
    Success,
    /// Warning-colored chip.
    Warning,
    /// Danger-colored chip.
    Danger,
}

impl Default for ChipTone {
    fn default() -> Self {
        Self::Standard
    }
}

impl ChipTone {
    /// Stable attribute token for the tone.
    pub fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single selectable chip.
pub struct ChipState {
    /// Visible chip label.
    pub label: String,
    /// Whether the chip participates in selection. Adding a chip to a
    /// group forces this on.
    pub selectable: bool,
    /// Whether the chip accepts interaction.
    pub enabled: bool,
    /// Whether the chip is the current group selection.
    pub selected: bool,
    /// Color-scheme token.
    pub tone: ChipTone,
}

impl ChipState {
    /// Creates an enabled, unselected chip with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            selectable: false,
            enabled: true,
            selected: false,
            tone: ChipTone::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Plain-data model for a chip group: an ordered chip list plus at most
/// one recorded selection.
pub struct ChipsGroupState {
    /// Chips in insertion order.
    pub chips: Vec<ChipState>,
    /// Index of the selected chip, if any.
    pub selected: Option<usize>,
}

impl ChipsGroupState {
    /// Selects the chip at `index`, deselecting every sibling.
    ///
    /// Returns `false` for an out-of-range index, leaving the selection
    /// unchanged.
    pub fn select_at(&mut self, index: usize) -> bool {
        if index >= self.chips.len() {
            return false;
        }
        for (i, chip) in self.chips.iter_mut().enumerate() {
            chip.selected = i == index;
        }
        self.selected = Some(index);
        true
    }

    /// Returns the chip at `index`, if present.
    pub fn chip(&self, index: usize) -> Option<&ChipState> {
        self.chips.get(index)
    }

    /// Returns the selected chip, if any.
    pub fn selected_chip(&self) -> Option<&ChipState> {
        self.selected.and_then(|index| self.chips.get(index))
    }

    /// Returns `true` only when every chip is enabled.
    pub fn is_enabled(&self) -> bool {
        self.chips.iter().all(|chip| chip.enabled)
    }
}

/// Chip group component: the state plus group-level selection observers
/// notified after the selection has been recorded.
pub struct ChipsGroup {
    state: ChipsGroupState,
    selection_observers: Observers<usize>,
}

impl ChipsGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self {
            state: ChipsGroupState::default(),
            selection_observers: Observers::new(),
        }
    }

    /// Appends a chip to the group, forcing it selectable.
    pub fn add_chip(&mut self, mut chip: ChipState) -> &mut Self {
        chip.selectable = true;
        self.state.chips.push(chip);
        self
    }

    /// Selects the chip at `index`. Out-of-range indices are ignored;
    /// observers fire only after a selection was actually recorded.
    pub fn select_at(&mut self, index: usize) -> &mut Self {
        if self.state.select_at(index) {
            self.selection_observers.notify(&index);
        }
        self
    }

    /// Enables every chip in the group.
    pub fn enable(&mut self) -> &mut Self {
        for chip in &mut self.state.chips {
            chip.enabled = true;
        }
        self
    }

    /// Disables every chip in the group.
    pub fn disable(&mut self) -> &mut Self {
        for chip in &mut self.state.chips {
            chip.enabled = false;
        }
        self
    }

    /// Returns `true` only when every chip is enabled.
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    /// Cascades a color-scheme token to every chip.
    pub fn set_tone(&mut self, tone: ChipTone) -> &mut Self {
        for chip in &mut self.state.chips {
            chip.tone = tone;
        }
        self
    }

    /// Registers a selection observer receiving the selected index.
    pub fn on_selection(&mut self, handler: impl Fn(&usize) + 'static) -> &mut Self {
        self.selection_observers.push(handler);
        self
    }

    /// Returns the chip at `index`, if present.
    pub fn chip(&self, index: usize) -> Option<&ChipState> {
        self.state.chip(index)
    }

    /// Returns the selected chip, if any.
    pub fn selected_chip(&self) -> Option<&ChipState> {
        self.state.selected_chip()
    }

    /// Chips in insertion order.
    pub fn chips(&self) -> &[ChipState] {
        &self.state.chips
    }

    /// The underlying plain-data state.
    pub fn state(&self) -> &ChipsGroupState {
        &self.state
    }
}

impl Default for ChipsGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChipsGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChipsGroup")
            .field("state", &self.state)
            .field("selection_observers", &self.selection_observers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn group_of(labels: &[&str]) -> ChipsGroup {
        let mut group = ChipsGroup::new();
        for label in labels {
            group.add_chip(ChipState::new(*label));
        }
        group
    }

    #[test]
    fn at_most_one_chip_selected_after_any_sequence() {
        let mut group = group_of(&["a", "b", "c"]);
        group.select_at(0).select_at(2).select_at(1).select_at(1);

        let selected: Vec<usize> = group
            .chips()
            .iter()
            .enumerate()
            .filter(|(_, chip)| chip.selected)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(selected, vec![1]);
        assert_eq!(group.state().selected, Some(1));
    }

    #[test]
    fn out_of_range_selection_leaves_selection_unchanged() {
        let mut group = group_of(&["a", "b"]);
        group.select_at(1);
        group.select_at(2);
        group.select_at(usize::MAX);

        assert_eq!(group.state().selected, Some(1));
        assert!(group.chips()[1].selected);
    }

    #[test]
    fn selection_observers_fire_after_state_update() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut group = group_of(&["a", "b"]);
        let sink = Rc::clone(&seen);
        group.on_selection(move |index| sink.borrow_mut().push(*index));

        group.select_at(1);
        group.select_at(5);

        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn added_chips_become_selectable() {
        let mut group = ChipsGroup::new();
        let mut chip = ChipState::new("a");
        chip.selectable = false;
        group.add_chip(chip);

        assert!(group.chips()[0].selectable);
    }

    #[test]
    fn enable_and_disable_cascade() {
        let mut group = group_of(&["a", "b", "c"]);
        assert!(group.is_enabled());

        group.disable();
        assert!(!group.is_enabled());
        assert!(group.chips().iter().all(|chip| !chip.enabled));

        group.enable();
        assert!(group.is_enabled());
    }

    #[test]
    fn empty_group_reports_enabled() {
        assert!(ChipsGroup::new().is_enabled());
    }

    #[test]
    fn tone_cascades_to_every_chip() {
        let mut group = group_of(&["a", "b"]);
        group.set_tone(ChipTone::Accent);
        assert!(group.chips().iter().all(|chip| chip.tone == ChipTone::Accent));
    }
}
