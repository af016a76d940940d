// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::DEBUG_FIELD_MOD;

/// Focus / validation state of a field. Exactly one is current at any time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Normal,
    Active,
    /// The most recent validation failed. The message is [`None`] if the validator did
    /// not supply one, in which case only the error styling is shown.
    Error { maybe_message: Option<String> },
}

impl FieldState {
    #[must_use]
    pub fn is_error(&self) -> bool { matches!(self, FieldState::Error { .. }) }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FieldState::Error { maybe_message } => maybe_message.as_deref(),
            _ => None,
        }
    }
}

/// Events that drive [`FieldStateMachine`]. Focus events come from the host toolkit,
/// validation events from [`crate::ValidationCoordinator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    FocusGained,
    FocusLost,
    ValidationSucceeded,
    ValidationFailed(Option<String>),
}

/// What focus events do to an existing error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorDisplayPolicy {
    /// Focus events never clear [`FieldState::Error`]. Only a successful validation
    /// does.
    #[default]
    StickyUntilValid,
    /// [`FieldEvent::FocusGained`] while in error moves to [`FieldState::Active`] and
    /// discards the message.
    ClearOnFocusGained,
    /// [`FieldEvent::FocusLost`] always moves to [`FieldState::Normal`], discarding any
    /// error before the next validation runs.
    ClearOnFocusLost,
}

/// Result of [`FieldStateMachine::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateTransition {
    pub from: FieldState,
    pub to: FieldState,
}

impl StateTransition {
    #[must_use]
    pub fn is_change(&self) -> bool { self.from != self.to }
}

/// The `Normal` / `Active` / `Error` state machine. It has no side effects of its own,
/// the caller ([`crate::ValidateField`]) decides what to do with the transition (start a
/// validation, fire notifications, recompute the display).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldStateMachine {
    state: FieldState,
    policy: ErrorDisplayPolicy,
}

impl FieldStateMachine {
    #[must_use]
    pub fn new(policy: ErrorDisplayPolicy) -> Self {
        Self {
            state: FieldState::Normal,
            policy,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FieldState { &self.state }

    #[must_use]
    pub fn policy(&self) -> ErrorDisplayPolicy { self.policy }

    pub fn apply(&mut self, event: FieldEvent) -> StateTransition {
        let from = self.state.clone();
        let to = Self::next_state(&self.state, &event, self.policy);

        DEBUG_FIELD_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🚦 FieldStateMachine::apply",
                event = ?event,
                from = ?from,
                to = ?to,
                policy = ?self.policy
            );
        });

        self.state = to.clone();
        StateTransition { from, to }
    }

    fn next_state(
        current: &FieldState,
        event: &FieldEvent,
        policy: ErrorDisplayPolicy,
    ) -> FieldState {
        use ErrorDisplayPolicy::{ClearOnFocusGained, ClearOnFocusLost, StickyUntilValid};

        match (event, current) {
            (FieldEvent::FocusGained, FieldState::Error { .. }) => match policy {
                ClearOnFocusGained => FieldState::Active,
                StickyUntilValid | ClearOnFocusLost => current.clone(),
            },
            (FieldEvent::FocusGained, _) => FieldState::Active,

            (FieldEvent::FocusLost, FieldState::Error { .. }) => match policy {
                ClearOnFocusLost => FieldState::Normal,
                StickyUntilValid | ClearOnFocusGained => current.clone(),
            },
            (FieldEvent::FocusLost, _) => FieldState::Normal,

            (FieldEvent::ValidationSucceeded, _) => FieldState::Normal,

            (FieldEvent::ValidationFailed(maybe_message), _) => FieldState::Error {
                maybe_message: maybe_message.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    fn error(msg: &str) -> FieldState {
        FieldState::Error {
            maybe_message: Some(msg.into()),
        }
    }

    fn machine_in(state: FieldState, policy: ErrorDisplayPolicy) -> FieldStateMachine {
        let mut it = FieldStateMachine::new(policy);
        it.state = state;
        it
    }

    #[test]
    fn test_starts_normal() {
        let it = FieldStateMachine::default();
        assert_eq2!(it.state(), &FieldState::Normal);
        assert_eq2!(it.policy(), ErrorDisplayPolicy::StickyUntilValid);
    }

    #[test_case(FieldState::Normal, FieldEvent::FocusGained, FieldState::Active)]
    #[test_case(FieldState::Active, FieldEvent::FocusLost, FieldState::Normal)]
    #[test_case(FieldState::Normal, FieldEvent::FocusLost, FieldState::Normal)]
    #[test_case(FieldState::Active, FieldEvent::FocusGained, FieldState::Active)]
    #[test_case(error("bad"), FieldEvent::FocusGained, error("bad"))]
    #[test_case(error("bad"), FieldEvent::FocusLost, error("bad"))]
    #[test_case(error("bad"), FieldEvent::ValidationSucceeded, FieldState::Normal)]
    #[test_case(FieldState::Active, FieldEvent::ValidationSucceeded, FieldState::Normal)]
    #[test_case(
        FieldState::Active,
        FieldEvent::ValidationFailed(Some("bad".into())),
        error("bad")
    )]
    #[test_case(
        error("old"),
        FieldEvent::ValidationFailed(None),
        FieldState::Error { maybe_message: None }
    )]
    fn test_sticky_until_valid(from: FieldState, event: FieldEvent, expected: FieldState) {
        let mut it = machine_in(from, ErrorDisplayPolicy::StickyUntilValid);
        let transition = it.apply(event);
        assert_eq2!(transition.to, expected);
        assert_eq2!(it.state(), &expected);
    }

    #[test]
    fn test_clear_on_focus_gained() {
        let mut it = machine_in(error("bad"), ErrorDisplayPolicy::ClearOnFocusGained);
        assert_eq2!(it.apply(FieldEvent::FocusLost).to, error("bad"));
        assert_eq2!(it.apply(FieldEvent::FocusGained).to, FieldState::Active);
        assert_eq2!(it.state().error_message(), None);
    }

    #[test]
    fn test_clear_on_focus_lost() {
        let mut it = machine_in(error("bad"), ErrorDisplayPolicy::ClearOnFocusLost);
        assert_eq2!(it.apply(FieldEvent::FocusGained).to, error("bad"));
        assert_eq2!(it.apply(FieldEvent::FocusLost).to, FieldState::Normal);
    }

    #[test]
    fn test_transition_reports_change() {
        let mut it = FieldStateMachine::default();
        assert!(it.apply(FieldEvent::FocusGained).is_change());
        assert!(!it.apply(FieldEvent::FocusGained).is_change());
        assert_eq2!(
            it.apply(FieldEvent::ValidationFailed(Some("x".into()))),
            StateTransition {
                from: FieldState::Active,
                to: error("x"),
            }
        );
        assert!(it.state().is_error());
        assert_eq2!(it.state().error_message(), Some("x"));
    }
}
