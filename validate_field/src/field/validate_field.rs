// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          sync::{Arc,
                 atomic::{AtomicUsize, Ordering}}};

use crate::{AccessorySlot, AccessorySlotManager, ArrangedElements, ConfigResolver,
            ContentType, DEBUG_FIELD_MOD, FieldDisplay, FieldEvent, FieldState,
            FieldStateMachine, FieldTheme, ResolvedConfig, SharedValidator,
            StateTransition, ValidateFieldOptions, ValidationCoordinator,
            ValidationOutcome, ValidationResult};

/// Unique per process, assigned at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub usize);

impl FieldId {
    fn next() -> Self {
        static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Identifies the field that fired a notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRef {
    pub id: FieldId,
    pub content_type: ContentType,
}

/// Fire and forget notification. Receives the field and its current text.
pub type OnFieldEventFn = Box<dyn Fn(&FieldRef, Option<&str>) + Send + Sync>;

/// A headless labeled text field with a header, placeholder, optional assistive / error
/// region, left and right accessory views, and async validation on focus loss.
///
/// The host toolkit forwards focus and edit events to this struct, and draws whatever
/// [`ValidateField::display`] returns. `V` is the type of the caller owned accessory
/// views.
///
/// Validation outcomes are never applied behind your back. Call
/// [`ValidateField::apply_pending_validation_outcomes`] from your event loop (or await
/// [`ValidateField::await_next_validation_outcome`] in a `select!`) to feed them into the
/// state machine. [`ValidateField::focus_lost`] also drains the channel, so a validator
/// that completes synchronously is reflected as soon as it returns.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use r3bl_validate_field::{ContentType, FieldState, ValidateField, ValidateFieldOptions,
///                           ValidationCompleter, ValidationResult};
///
/// let validator = |maybe_text: Option<String>, completer: ValidationCompleter| {
///     let is_valid = maybe_text.is_some_and(|it| it.contains('@'));
///     completer.complete(match is_valid {
///         true => ValidationResult::Success,
///         false => ValidationResult::Failure(Some("Invalid email".into())),
///     });
/// };
///
/// let mut field: ValidateField = ValidateField::new(
///     ContentType::EmailAddress,
///     ValidateFieldOptions::default(),
///     None,
///     None,
///     Some(Arc::new(validator)),
/// );
/// assert_eq!(field.display().placeholder_text, "Email Address");
///
/// field.focus_gained();
/// field.edit_text("nope");
/// field.focus_lost();
/// assert_eq!(field.state().error_message(), Some("Invalid email"));
/// ```
pub struct ValidateField<V = ()> {
    field_ref: FieldRef,
    config: ResolvedConfig,
    state_machine: FieldStateMachine,
    coordinator: ValidationCoordinator,
    accessories: AccessorySlotManager<V>,
    text: String,
    maybe_validator: Option<SharedValidator>,
    maybe_on_focus_gained: Option<OnFieldEventFn>,
    maybe_on_text_changed: Option<OnFieldEventFn>,
    maybe_on_focus_lost: Option<OnFieldEventFn>,
}

impl<V> Debug for ValidateField<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidateField")
            .field("field_ref", &self.field_ref)
            .field("state", self.state_machine.state())
            .field("text", &self.text)
            .field("has_validator", &self.maybe_validator.is_some())
            .field("left_view", &self.accessories.is_attached(AccessorySlot::Left))
            .field("right_view", &self.accessories.is_attached(AccessorySlot::Right))
            .finish_non_exhaustive()
    }
}

impl<V> ValidateField<V> {
    /// Uses [`FieldTheme::default`] for default colors.
    pub fn new(
        content_type: ContentType,
        options: impl Into<ValidateFieldOptions>,
        maybe_left_view: Option<&Arc<V>>,
        maybe_right_view: Option<&Arc<V>>,
        maybe_validator: Option<SharedValidator>,
    ) -> Self {
        Self::new_with_theme(
            content_type,
            options,
            &FieldTheme::default(),
            maybe_left_view,
            maybe_right_view,
            maybe_validator,
        )
    }

    pub fn new_with_theme(
        content_type: ContentType,
        options: impl Into<ValidateFieldOptions>,
        theme: &FieldTheme,
        maybe_left_view: Option<&Arc<V>>,
        maybe_right_view: Option<&Arc<V>>,
        maybe_validator: Option<SharedValidator>,
    ) -> Self {
        let config = ConfigResolver::resolve(&options.into(), &content_type, theme);
        let field_ref = FieldRef {
            id: FieldId::next(),
            content_type,
        };

        DEBUG_FIELD_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🌱 ValidateField::new",
                field_ref = ?field_ref,
                config = ?config
            );
        });

        Self {
            field_ref,
            text: config.text.clone(),
            state_machine: FieldStateMachine::new(config.error_policy),
            coordinator: ValidationCoordinator::new(config.race_policy),
            accessories: AccessorySlotManager::new(maybe_left_view, maybe_right_view),
            config,
            maybe_validator,
            maybe_on_focus_gained: None,
            maybe_on_text_changed: None,
            maybe_on_focus_lost: None,
        }
    }

    #[must_use]
    pub fn field_ref(&self) -> &FieldRef { &self.field_ref }

    #[must_use]
    pub fn config(&self) -> &ResolvedConfig { &self.config }

    #[must_use]
    pub fn state(&self) -> &FieldState { self.state_machine.state() }

    #[must_use]
    pub fn display(&self) -> FieldDisplay {
        FieldDisplay::project(&self.config, self.state(), &self.text)
    }

    #[must_use]
    pub fn arranged_elements(&self) -> ArrangedElements {
        self.accessories
            .arranged_elements(self.config.assistive_position.is_inside_field())
    }
}

/// Text.
impl<V> ValidateField<V> {
    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// Programmatic change. Does not fire `on_text_changed`.
    pub fn set_text(&mut self, text: impl Into<String>) { self.text = text.into(); }

    /// A user edit. Fires `on_text_changed` exactly once.
    pub fn edit_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        Self::notify(self.maybe_on_text_changed.as_ref(), &self.field_ref, &self.text);
    }
}

/// Focus.
impl<V> ValidateField<V> {
    pub fn focus_gained(&mut self) -> StateTransition {
        let transition = self.state_machine.apply(FieldEvent::FocusGained);
        Self::notify(self.maybe_on_focus_gained.as_ref(), &self.field_ref, &self.text);
        transition
    }

    /// Programmatic focus, same as [`ValidateField::focus_gained`].
    pub fn become_first_responder(&mut self) -> StateTransition { self.focus_gained() }

    /// Chain onto a constructor to create a field that starts out focused, ie: in
    /// [`FieldState::Active`]. No notification fires, since no handler can be set yet.
    #[must_use]
    pub fn into_first_responder(mut self) -> Self {
        self.become_first_responder();
        self
    }

    #[must_use]
    pub fn is_active_responder(&self) -> bool {
        matches!(self.state(), FieldState::Active)
    }

    /// Moves out of [`FieldState::Active`] and starts exactly one validation with the
    /// current text. Returns the focus transition, plus any validation outcome that was
    /// already available (eg: from a validator that completes synchronously).
    pub fn focus_lost(&mut self) -> Vec<StateTransition> {
        let mut acc = vec![self.state_machine.apply(FieldEvent::FocusLost)];

        match &self.maybe_validator {
            Some(validator) => {
                self.coordinator
                    .run_validation(Some(self.text.clone()), validator.as_ref());
            }
            None => {
                DEBUG_FIELD_MOD.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "🤷 ValidateField::focus_lost -> no validator",
                        field_ref = ?self.field_ref
                    );
                });
            }
        }

        Self::notify(self.maybe_on_focus_lost.as_ref(), &self.field_ref, &self.text);

        acc.extend(self.apply_pending_validation_outcomes());
        acc
    }

    /// The return key. Fires `on_focus_lost` so the caller can move focus along. Does not
    /// change state or validate.
    pub fn return_pressed(&self) {
        Self::notify(self.maybe_on_focus_lost.as_ref(), &self.field_ref, &self.text);
    }
}

/// Validation.
impl<V> ValidateField<V> {
    pub fn set_validator(&mut self, maybe_validator: Option<SharedValidator>) {
        self.maybe_validator = maybe_validator;
    }

    #[must_use]
    pub fn has_validator(&self) -> bool { self.maybe_validator.is_some() }

    /// Non blocking. Applies every outcome that has arrived so far, stale ones are
    /// dropped according to the race policy.
    pub fn apply_pending_validation_outcomes(&mut self) -> Vec<StateTransition> {
        self.coordinator
            .drain_accepted_outcomes()
            .into_iter()
            .map(|outcome| self.apply_validation_outcome(outcome))
            .collect()
    }

    /// Waits for the next accepted outcome and applies it. Waits forever if no
    /// validation completes.
    pub async fn await_next_validation_outcome(&mut self) -> Option<StateTransition> {
        let outcome = self.coordinator.recv_accepted_outcome().await?;
        Some(self.apply_validation_outcome(outcome))
    }

    fn apply_validation_outcome(&mut self, outcome: ValidationOutcome) -> StateTransition {
        DEBUG_FIELD_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "✅ ValidateField::apply_validation_outcome",
                field_ref = ?self.field_ref,
                outcome = ?outcome
            );
        });

        let event = match outcome.result {
            ValidationResult::Success => FieldEvent::ValidationSucceeded,
            ValidationResult::Failure(maybe_message) => {
                FieldEvent::ValidationFailed(maybe_message)
            }
        };
        self.state_machine.apply(event)
    }
}

/// Notifications.
impl<V> ValidateField<V> {
    pub fn set_on_focus_gained(
        &mut self,
        handler: impl Fn(&FieldRef, Option<&str>) + Send + Sync + 'static,
    ) {
        self.maybe_on_focus_gained = Some(Box::new(handler));
    }

    pub fn set_on_text_changed(
        &mut self,
        handler: impl Fn(&FieldRef, Option<&str>) + Send + Sync + 'static,
    ) {
        self.maybe_on_text_changed = Some(Box::new(handler));
    }

    pub fn set_on_focus_lost(
        &mut self,
        handler: impl Fn(&FieldRef, Option<&str>) + Send + Sync + 'static,
    ) {
        self.maybe_on_focus_lost = Some(Box::new(handler));
    }

    fn notify(maybe_handler: Option<&OnFieldEventFn>, field_ref: &FieldRef, text: &str) {
        if let Some(handler) = maybe_handler {
            handler(field_ref, Some(text));
        }
    }
}

/// Accessory views.
impl<V> ValidateField<V> {
    #[must_use]
    pub fn left_view(&self) -> Option<Arc<V>> { self.accessories.get(AccessorySlot::Left) }

    /// [`None`] clears the slot. Replacing a view releases the old one.
    pub fn set_left_view(&mut self, maybe_view: Option<&Arc<V>>) {
        self.accessories.set(AccessorySlot::Left, maybe_view);
    }

    #[must_use]
    pub fn right_view(&self) -> Option<Arc<V>> {
        self.accessories.get(AccessorySlot::Right)
    }

    /// [`None`] clears the slot. Replacing a view releases the old one.
    pub fn set_right_view(&mut self, maybe_view: Option<&Arc<V>>) {
        self.accessories.set(AccessorySlot::Right, maybe_view);
    }
}
