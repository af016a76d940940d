// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Async validation protocol
//!
//! On every focus loss the field hands its text to a caller supplied [`Validator`]
//! along with a one shot [`ValidationCompleter`]. The validator may complete right
//! away, or later from any task or thread. The field never blocks waiting for it.
//!
//! Completions travel over a [`tokio::sync::mpsc`] channel back to the owner of the
//! field, and are applied only when the owner drains the channel (from its own event
//! loop). That's how a result produced on another thread gets marshaled back before it
//! touches [`crate::FieldState`].
//!
//! Each call is tagged with a [`ValidationSeq`]. With
//! [`ValidationRacePolicy::LatestRequestWins`] an outcome for anything but the most
//! recent call is discarded as stale. There is no timeout and no retry: a validator
//! that never completes leaves the field as it is.

use std::{fmt::{Debug, Formatter},
          future::Future,
          sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::DEBUG_FIELD_MOD;

/// What a [`Validator`] reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Success,
    /// Provide an error message, or [`None`] to show just the error styling.
    Failure(Option<String>),
}

/// What to do when validations overlap, ie: a second focus loss starts a new validation
/// before the previous one has completed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationRacePolicy {
    /// Only the outcome of the most recently started validation is applied.
    #[default]
    LatestRequestWins,
    /// Every outcome is applied in arrival order, so the last one to arrive wins even if
    /// it is stale.
    LastArrivalWins,
}

/// Monotonically increasing id of one validation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidationSeq(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub seq: ValidationSeq,
    pub result: ValidationResult,
}

/// One shot completion handle given to a [`Validator`]. [`ValidationCompleter::complete`]
/// consumes it, so a validator can't complete the same call twice. Dropping it without
/// completing is logged, and the field is left unchanged.
pub struct ValidationCompleter {
    seq: ValidationSeq,
    maybe_sender: Option<UnboundedSender<ValidationOutcome>>,
}

impl Debug for ValidationCompleter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationCompleter")
            .field("seq", &self.seq)
            .field("is_pending", &self.maybe_sender.is_some())
            .finish()
    }
}

impl ValidationCompleter {
    fn new(seq: ValidationSeq, sender: UnboundedSender<ValidationOutcome>) -> Self {
        Self {
            seq,
            maybe_sender: Some(sender),
        }
    }

    #[must_use]
    pub fn seq(&self) -> ValidationSeq { self.seq }

    pub fn complete(mut self, result: ValidationResult) {
        let Some(sender) = self.maybe_sender.take() else {
            return;
        };

        let seq = self.seq;
        if sender.send(ValidationOutcome { seq, result }).is_err() {
            DEBUG_FIELD_MOD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "📭 ValidationCompleter::complete -> field is gone, outcome dropped",
                    seq = ?seq
                );
            });
        }
    }
}

impl Drop for ValidationCompleter {
    fn drop(&mut self) {
        if self.maybe_sender.is_some() {
            tracing::warn!(
                message = "⚠️ ValidationCompleter dropped without completing",
                seq = ?self.seq
            );
        }
    }
}

/// Caller supplied validation logic. Implemented for any
/// `Fn(Option<String>, ValidationCompleter)`, so a closure works:
///
/// ```
/// use r3bl_validate_field::{ValidationCompleter, ValidationResult, Validator};
///
/// let validator = |maybe_text: Option<String>, completer: ValidationCompleter| {
///     match maybe_text.as_deref() {
///         Some(text) if text.contains('@') => completer.complete(ValidationResult::Success),
///         _ => completer.complete(ValidationResult::Failure(Some("Missing @".into()))),
///     }
/// };
/// fn assert_validator(_: &impl Validator) {}
/// assert_validator(&validator);
/// ```
pub trait Validator: Send + Sync + 'static {
    /// Must call [`ValidationCompleter::complete`] at most once, now or later.
    fn validate(&self, maybe_text: Option<String>, completer: ValidationCompleter);
}

impl<F> Validator for F
where
    F: Fn(Option<String>, ValidationCompleter) + Send + Sync + 'static,
{
    fn validate(&self, maybe_text: Option<String>, completer: ValidationCompleter) {
        self(maybe_text, completer);
    }
}

/// A [`Validator`] that can be shared with other fields, or swapped at runtime with
/// [`crate::ValidateField::set_validator`].
pub type SharedValidator = Arc<dyn Validator>;

/// Adapt an async function into a [`Validator`]. Each call is spawned on the current
/// tokio runtime. If there is no runtime, the call is logged and never completes.
pub fn validator_from_async<F, Fut>(fun: F) -> impl Validator
where
    F: Fn(Option<String>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ValidationResult> + Send + 'static,
{
    move |maybe_text: Option<String>, completer: ValidationCompleter| {
        let future = fun(maybe_text);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    completer.complete(future.await);
                });
            }
            Err(error) => {
                tracing::warn!(
                    message = "⚠️ validator_from_async -> no tokio runtime, can't validate",
                    seq = ?completer.seq(),
                    error = %error
                );
            }
        }
    }
}

/// Starts validation calls and filters their outcomes. Holds no reference to the field,
/// [`crate::ValidateField`] feeds accepted outcomes into its state machine.
#[derive(Debug)]
pub struct ValidationCoordinator {
    race_policy: ValidationRacePolicy,
    last_issued_seq: u64,
    sender: UnboundedSender<ValidationOutcome>,
    receiver: UnboundedReceiver<ValidationOutcome>,
}

impl ValidationCoordinator {
    #[must_use]
    pub fn new(race_policy: ValidationRacePolicy) -> Self {
        let (sender, receiver) = unbounded_channel();
        Self {
            race_policy,
            last_issued_seq: 0,
            sender,
            receiver,
        }
    }

    #[must_use]
    pub fn race_policy(&self) -> ValidationRacePolicy { self.race_policy }

    /// The most recently issued call, if any.
    #[must_use]
    pub fn latest_seq(&self) -> Option<ValidationSeq> {
        (self.last_issued_seq > 0).then_some(ValidationSeq(self.last_issued_seq))
    }

    /// Fire and forget. Returns as soon as the validator returns, which may be before it
    /// completes.
    pub fn run_validation(
        &mut self,
        maybe_text: Option<String>,
        validator: &dyn Validator,
    ) -> ValidationSeq {
        self.last_issued_seq += 1;
        let seq = ValidationSeq(self.last_issued_seq);

        DEBUG_FIELD_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🔎 ValidationCoordinator::run_validation",
                seq = ?seq,
                maybe_text = ?maybe_text
            );
        });

        validator.validate(maybe_text, ValidationCompleter::new(seq, self.sender.clone()));
        seq
    }

    /// Non blocking. Returns every outcome that has arrived so far and passes the race
    /// policy, in arrival order.
    pub fn drain_accepted_outcomes(&mut self) -> Vec<ValidationOutcome> {
        let mut acc = vec![];
        while let Ok(outcome) = self.receiver.try_recv() {
            if self.accept(&outcome) {
                acc.push(outcome);
            }
        }
        acc
    }

    /// Waits for the next outcome that passes the race policy. Stale ones are skipped.
    /// This waits forever if no validation ever completes; wrap it in a timeout or a
    /// `select!` if that matters.
    pub async fn recv_accepted_outcome(&mut self) -> Option<ValidationOutcome> {
        loop {
            let outcome = self.receiver.recv().await?;
            if self.accept(&outcome) {
                return Some(outcome);
            }
        }
    }

    fn accept(&self, outcome: &ValidationOutcome) -> bool {
        let accepted = match self.race_policy {
            ValidationRacePolicy::LastArrivalWins => true,
            ValidationRacePolicy::LatestRequestWins => {
                outcome.seq.0 == self.last_issued_seq
            }
        };

        if !accepted {
            DEBUG_FIELD_MOD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "🗑️ ValidationCoordinator -> discard stale outcome",
                    outcome = ?outcome,
                    last_issued_seq = %self.last_issued_seq
                );
            });
        }

        accepted
    }
}

impl Default for ValidationCoordinator {
    fn default() -> Self { Self::new(ValidationRacePolicy::default()) }
}
