//! Linear wizard state machine.
//!
//! Exactly one step is active once any step exists. Forward navigation
//! requires the active step to be valid; backward navigation is always
//! allowed. Transitions are reduced through [`reduce_stepper`]; the
//! [`Stepper`] wrapper fans the resulting effects out to activation,
//! deactivation, and completion observers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::media::Breakpoint;
use crate::observers::Observers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Entry animation token chosen when a step activates.
pub enum StepTransition {
    /// Forward entry on horizontal steppers.
    SlideInRight,
    /// Backward entry on horizontal steppers.
    SlideInLeft,
    /// Vertical and small-viewport entry.
    FadeIn,
}

impl StepTransition {
    /// Stable attribute token for the transition.
    pub fn token(self) -> &'static str {
        match self {
            Self::SlideInRight => "slide-in-right",
            Self::SlideInLeft => "slide-in-left",
            Self::FadeIn => "fade-in",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Render token derived from stepper state for a single step.
pub enum StepStatus {
    /// Current active step.
    Current,
    /// Completed prior step.
    Complete,
    /// Pending future step.
    Pending,
    /// Step flagged with a validation error.
    Error,
}

impl StepStatus {
    /// Stable attribute token for the status.
    pub fn token(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Complete => "complete",
            Self::Pending => "pending",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One stage of the wizard.
pub struct StepState {
    /// Step header label.
    pub label: String,
    /// Whether the step currently passes validation.
    pub valid: bool,
    /// Whether the step has been completed.
    pub done: bool,
    /// Whether the step shows an error marker.
    pub error: bool,
    /// Whether clicking the step header may activate it.
    pub allow_click_activation: bool,
}

impl StepState {
    /// Creates a valid, not-done step.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            valid: true,
            done: false,
            error: false,
            allow_click_activation: false,
        }
    }

    /// Enables header-click activation for this step.
    pub fn click_activated(mut self) -> Self {
        self.allow_click_activation = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Plain-data model for the wizard.
pub struct StepperState {
    /// Steps in insertion order.
    pub steps: Vec<StepState>,
    /// Index of the active step; `None` only before the first step is added.
    pub active: Option<usize>,
    /// Horizontal orientation flag (vertical steppers always fade).
    pub horizontal: bool,
    /// Last breakpoint reported by the media watcher.
    pub breakpoint: Breakpoint,
}

impl StepperState {
    /// Returns the step at `index`, if present.
    pub fn step(&self, index: usize) -> Option<&StepState> {
        self.steps.get(index)
    }

    /// Returns the active step, if any step has been added.
    pub fn active_step(&self) -> Option<&StepState> {
        self.active.and_then(|index| self.steps.get(index))
    }

    /// Derives the render token for the step at `index`.
    pub fn status_of(&self, index: usize) -> Option<StepStatus> {
        let step = self.steps.get(index)?;
        Some(if step.error {
            StepStatus::Error
        } else if self.active == Some(index) {
            StepStatus::Current
        } else if step.done {
            StepStatus::Complete
        } else {
            StepStatus::Pending
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_stepper`].
pub enum StepperAction {
    /// Append a step; the first one added becomes active.
    AddStep(StepState),
    /// Activate the step at the given index.
    ActivateStep(usize),
    /// Advance to the next step when the active step is valid.
    Next,
    /// Return to the previous step unconditionally.
    Back,
    /// Complete the wizard from a valid final state.
    Finish,
    /// Flag the active step as erroneous.
    Invalidate,
    /// Header click on the step at the given index.
    HeaderClicked(usize),
    /// Switch between horizontal and vertical orientation.
    SetHorizontal(bool),
    /// Record the validation result for a step.
    SetValid {
        /// Step index.
        index: usize,
        /// New validity.
        valid: bool,
    },
    /// Responsive breakpoint change; small viewports fade instead of slide.
    BreakpointChanged(Breakpoint),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Effects emitted by [`reduce_stepper`] for observers and the view layer.
pub enum StepperEffect {
    /// A previously active step was deactivated.
    StepDeactivated(usize),
    /// A step became active with the chosen entry transition.
    StepActivated {
        /// Activated step index.
        index: usize,
        /// Entry animation to play.
        transition: StepTransition,
    },
    /// A step was flagged as erroneous.
    StepInvalidated(usize),
    /// The wizard finished from a valid final step.
    Completed,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions referencing a missing step.
pub enum StepperError {
    /// The target step index was not found.
    #[error("step not found")]
    StepNotFound,
}

/// Applies a [`StepperAction`] to the wizard state and collects the
/// resulting effects.
///
/// # Errors
///
/// Returns [`StepperError::StepNotFound`] when an action references a step
/// index that is not present.
pub fn reduce_stepper(
    state: &mut StepperState,
    action: StepperAction,
) -> Result<Vec<StepperEffect>, StepperError> {
    let mut effects = Vec::new();
    match action {
        StepperAction::AddStep(step) => {
            state.steps.push(step);
            if state.active.is_none() {
                activate(state, 0, &mut effects);
            }
        }
        StepperAction::ActivateStep(index) => {
            if index >= state.steps.len() {
                return Err(StepperError::StepNotFound);
            }
            activate(state, index, &mut effects);
        }
        StepperAction::Next => {
            if let Some(current) = state.active {
                if state.steps.len() > 1 && current < state.steps.len() - 1 {
                    if state.steps[current].valid {
                        state.steps[current].done = true;
                        activate(state, current + 1, &mut effects);
                    } else {
                        state.steps[current].error = true;
                        effects.push(StepperEffect::StepInvalidated(current));
                    }
                }
            }
        }
        StepperAction::Back => {
            if let Some(current) = state.active {
                if current > 0 {
                    state.steps[current].done = false;
                    activate(state, current - 1, &mut effects);
                }
            }
        }
        StepperAction::Finish => {
            if let Some(current) = state.active {
                if state.steps[current].valid {
                    state.steps[current].error = false;
                    state.steps[current].done = true;
                    effects.push(StepperEffect::Completed);
                } else {
                    state.steps[current].error = true;
                    effects.push(StepperEffect::StepInvalidated(current));
                }
            }
        }
        StepperAction::Invalidate => {
            if let Some(current) = state.active {
                state.steps[current].error = true;
                effects.push(StepperEffect::StepInvalidated(current));
            }
        }
        StepperAction::HeaderClicked(index) => {
            if index >= state.steps.len() {
                return Err(StepperError::StepNotFound);
            }
            if let Some(current) = state.active {
                if state.steps[index].allow_click_activation {
                    if state.steps[current].valid && index == current + 1 {
                        state.steps[current].done = true;
                        activate(state, index, &mut effects);
                    } else if index < current {
                        activate(state, index, &mut effects);
                    } else if !state.steps[current].valid && index != current {
                        state.steps[current].error = true;
                        effects.push(StepperEffect::StepInvalidated(current));
                    }
                }
            }
        }
        StepperAction::SetHorizontal(horizontal) => {
            state.horizontal = horizontal;
        }
        StepperAction::SetValid { index, valid } => {
            if index >= state.steps.len() {
                return Err(StepperError::StepNotFound);
            }
            state.steps[index].valid = valid;
        }
        StepperAction::BreakpointChanged(breakpoint) => {
            state.breakpoint = breakpoint;
        }
    }
    Ok(effects)
}

fn activate(state: &mut StepperState, target: usize, effects: &mut Vec<StepperEffect>) {
    let transition = entry_transition(state, target);
    if let Some(current) = state.active {
        effects.push(StepperEffect::StepDeactivated(current));
    }
    state.steps[target].done = false;
    state.active = Some(target);
    effects.push(StepperEffect::StepActivated {
        index: target,
        transition,
    });
}

fn entry_transition(state: &StepperState, target: usize) -> StepTransition {
    if !state.horizontal {
        return StepTransition::FadeIn;
    }
    if state.breakpoint.is_small_down() {
        return StepTransition::FadeIn;
    }
    // An empty stepper activates its first step with a forward slide.
    let forward = state.active.map(|current| target > current).unwrap_or(true);
    if forward {
        StepTransition::SlideInRight
    } else {
        StepTransition::SlideInLeft
    }
}

/// Wizard component: the state plus activation, deactivation, and
/// completion observer lists fed from the effect stream.
pub struct Stepper {
    state: StepperState,
    activation_observers: Observers<usize>,
    deactivation_observers: Observers<usize>,
    completion_observers: Observers<()>,
}

impl Stepper {
    /// Creates an empty stepper.
    pub fn new() -> Self {
        Self {
            state: StepperState::default(),
            activation_observers: Observers::new(),
            deactivation_observers: Observers::new(),
            completion_observers: Observers::new(),
        }
    }

    fn apply(&mut self, action: StepperAction) {
        // Missing-step references degrade to the silent no-op the fluent
        // surface promises.
        if let Ok(effects) = reduce_stepper(&mut self.state, action) {
            for effect in effects {
                match effect {
                    StepperEffect::StepActivated { index, .. } => {
                        self.activation_observers.notify(&index);
                    }
                    StepperEffect::StepDeactivated(index) => {
                        self.deactivation_observers.notify(&index);
                    }
                    StepperEffect::Completed => self.completion_observers.notify(&()),
                    StepperEffect::StepInvalidated(_) => {}
                }
            }
        }
    }

    /// Appends a step; the first step added becomes active.
    pub fn add_step(&mut self, step: StepState) -> &mut Self {
        self.apply(StepperAction::AddStep(step));
        self
    }

    /// Activates the step at `index`; unknown indices are ignored.
    pub fn activate_step(&mut self, index: usize) -> &mut Self {
        self.apply(StepperAction::ActivateStep(index));
        self
    }

    /// Advances when the active step is valid, otherwise flags it.
    pub fn next(&mut self) -> &mut Self {
        self.apply(StepperAction::Next);
        self
    }

    /// Returns to the previous step; always succeeds off the first step.
    pub fn back(&mut self) -> &mut Self {
        self.apply(StepperAction::Back);
        self
    }

    /// Completes the wizard when the active step is valid.
    pub fn finish(&mut self) -> &mut Self {
        self.apply(StepperAction::Finish);
        self
    }

    /// Flags the active step as erroneous.
    pub fn invalidate(&mut self) -> &mut Self {
        self.apply(StepperAction::Invalidate);
        self
    }

    /// Routes a header click on the step at `index`.
    pub fn click_header(&mut self, index: usize) -> &mut Self {
        self.apply(StepperAction::HeaderClicked(index));
        self
    }

    /// Switches between horizontal and vertical orientation.
    pub fn set_horizontal(&mut self, horizontal: bool) -> &mut Self {
        self.apply(StepperAction::SetHorizontal(horizontal));
        self
    }

    /// Records the validation result for the step at `index`.
    pub fn set_step_valid(&mut self, index: usize, valid: bool) -> &mut Self {
        self.apply(StepperAction::SetValid { index, valid });
        self
    }

    /// Feeds a breakpoint change from the media watcher.
    pub fn breakpoint_changed(&mut self, breakpoint: Breakpoint) -> &mut Self {
        self.apply(StepperAction::BreakpointChanged(breakpoint));
        self
    }

    /// Registers an observer for step activation.
    pub fn on_step_activated(&mut self, handler: impl Fn(&usize) + 'static) -> &mut Self {
        self.activation_observers.push(handler);
        self
    }

    /// Registers an observer for step deactivation.
    pub fn on_step_deactivated(&mut self, handler: impl Fn(&usize) + 'static) -> &mut Self {
        self.deactivation_observers.push(handler);
        self
    }

    /// Registers a completion observer.
    pub fn on_finish(&mut self, handler: impl Fn(&()) + 'static) -> &mut Self {
        self.completion_observers.push(handler);
        self
    }

    /// The underlying plain-data state.
    pub fn state(&self) -> &StepperState {
        &self.state
    }

    /// Returns the step at `index`, if present.
    pub fn step(&self, index: usize) -> Option<&StepState> {
        self.state.step(index)
    }

    /// Returns the active step, if any.
    pub fn active_step(&self) -> Option<&StepState> {
        self.state.active_step()
    }
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Stepper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stepper")
            .field("state", &self.state)
            .finish()
    }
}
