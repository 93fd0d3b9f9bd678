//! TransitionGuard - 未保存修改的导航守卫
//!
//! A deterministic state machine that intercepts zone/table selection
//! changes while unsaved edits exist and resolves them via
//! Save / Discard / Cancel. No sequence of events can reach a new
//! selection while edits are dirty without passing through a save
//! success or an explicit discard.
//!
//! The guard is pure: it never touches the tracker or the store itself,
//! it only tells the caller what to do next. Invalid events for the
//! current state are rejected (warn-logged) and leave the state
//! unchanged; nothing here panics.

/// A selection change being requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionTarget {
    /// Switch the edited zone
    Zone(String),
    /// Select (or clear) a table within the current zone
    Table(Option<String>),
}

/// Guard states
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GuardState {
    /// No transition in flight
    #[default]
    Idle,
    /// Dirty edits blocked a transition; a confirmation is on screen
    PendingTransition { target: SelectionTarget },
    /// A save is in flight; cancel/discard controls are disabled
    Saving { target: SelectionTarget },
}

/// What the caller must do after feeding an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Apply this selection change now
    Apply(SelectionTarget),
    /// Keep the current selection and show the blocking confirmation
    Prompt,
    /// A save has started; disable the confirmation's controls
    Saving,
    /// Back to idle, current selection kept
    Stay,
    /// Event not valid in the current state; nothing changed
    Rejected,
}

/// Save/Discard/Cancel decision machine
#[derive(Debug, Default)]
pub struct TransitionGuard {
    state: GuardState,
}

impl TransitionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zone/table selection change was requested.
    ///
    /// Clean state applies immediately; dirty state parks the target and
    /// demands a decision. Further requests while a decision is pending
    /// are rejected (the confirmation is modal).
    pub fn request_transition(&mut self, target: SelectionTarget, dirty: bool) -> GuardOutcome {
        match &self.state {
            GuardState::Idle if !dirty => GuardOutcome::Apply(target),
            GuardState::Idle => {
                self.state = GuardState::PendingTransition { target };
                GuardOutcome::Prompt
            }
            state => {
                tracing::warn!(?state, "request_transition while a decision is pending");
                GuardOutcome::Rejected
            }
        }
    }

    /// User chose Cancel: abort the transition, keep edits and selection.
    pub fn cancel(&mut self) -> GuardOutcome {
        match &self.state {
            GuardState::PendingTransition { .. } => {
                self.state = GuardState::Idle;
                GuardOutcome::Stay
            }
            state => {
                tracing::warn!(?state, "cancel outside PendingTransition");
                GuardOutcome::Rejected
            }
        }
    }

    /// User chose Discard: the caller must drop the edits, then apply the
    /// returned target.
    pub fn discard(&mut self) -> GuardOutcome {
        match std::mem::take(&mut self.state) {
            GuardState::PendingTransition { target } => GuardOutcome::Apply(target),
            state => {
                tracing::warn!(?state, "discard outside PendingTransition");
                self.state = state;
                GuardOutcome::Rejected
            }
        }
    }

    /// User chose Save: the caller must now run the batch save and report
    /// back with [`save_succeeded`](Self::save_succeeded) or
    /// [`save_failed`](Self::save_failed).
    pub fn begin_save(&mut self) -> GuardOutcome {
        match std::mem::take(&mut self.state) {
            GuardState::PendingTransition { target } => {
                self.state = GuardState::Saving { target };
                GuardOutcome::Saving
            }
            state => {
                tracing::warn!(?state, "begin_save outside PendingTransition");
                self.state = state;
                GuardOutcome::Rejected
            }
        }
    }

    /// The save confirmed: apply the parked target.
    pub fn save_succeeded(&mut self) -> GuardOutcome {
        match std::mem::take(&mut self.state) {
            GuardState::Saving { target } => GuardOutcome::Apply(target),
            state => {
                tracing::warn!(?state, "save_succeeded outside Saving");
                self.state = state;
                GuardOutcome::Rejected
            }
        }
    }

    /// The save failed: back to the confirmation with the same target, so
    /// the user may retry, discard, or cancel.
    pub fn save_failed(&mut self) -> GuardOutcome {
        match std::mem::take(&mut self.state) {
            GuardState::Saving { target } => {
                self.state = GuardState::PendingTransition { target };
                GuardOutcome::Prompt
            }
            state => {
                tracing::warn!(?state, "save_failed outside Saving");
                self.state = state;
                GuardOutcome::Rejected
            }
        }
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// Target parked behind the confirmation, in Pending or Saving.
    pub fn pending_target(&self) -> Option<&SelectionTarget> {
        match &self.state {
            GuardState::Idle => None,
            GuardState::PendingTransition { target } | GuardState::Saving { target } => {
                Some(target)
            }
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.state, GuardState::Saving { .. })
    }
}
