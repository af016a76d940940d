// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end scenarios that drive a [`ValidateField`] the way a host toolkit would.

use std::{sync::{Arc, Mutex,
                 atomic::{AtomicUsize, Ordering}},
          time::Duration};

use crate::{ArrangedElement, AssistiveViewPosition, ContentType, ErrorDisplayPolicy,
            FieldState, InsideVerticalAlignment, OptionBag, TextAlignment,
            ValidateField, ValidateFieldOptions, ValidationCompleter, ValidationRacePolicy,
            ValidationResult, Validator, assert_eq2, validator_from_async};

type Parked = Arc<Mutex<Vec<(Option<String>, ValidationCompleter)>>>;

/// Records every call, and parks the completer so the test completes it later.
fn parking_validator() -> (Parked, impl Validator) {
    let parked = Parked::default();
    let parked_clone = parked.clone();
    let validator = move |maybe_text: Option<String>, completer: ValidationCompleter| {
        parked_clone.lock().unwrap().push((maybe_text, completer));
    };
    (parked, validator)
}

fn error(msg: &str) -> FieldState {
    FieldState::Error {
        maybe_message: Some(msg.into()),
    }
}

#[test]
fn test_email_scenario_with_sticky_error() {
    let (parked, validator) = parking_validator();
    let mut field: ValidateField = ValidateField::new(
        ContentType::EmailAddress,
        ValidateFieldOptions::default(),
        None,
        None,
        Some(Arc::new(validator)),
    );

    let display = field.display();
    assert_eq2!(display.header_text, "Email Address");
    assert_eq2!(display.placeholder_text, "Email Address");
    assert_eq2!(field.state(), &FieldState::Normal);

    field.focus_gained();
    assert_eq2!(field.state(), &FieldState::Active);
    assert!(field.is_active_responder());

    field.edit_text("a@b.com");
    field.focus_lost();
    assert_eq2!(field.state(), &FieldState::Normal);

    // Exactly one validation, with the current text.
    let (maybe_text, completer) = {
        let mut parked = parked.lock().unwrap();
        assert_eq2!(parked.len(), 1);
        parked.remove(0)
    };
    assert_eq2!(maybe_text.as_deref(), Some("a@b.com"));
    completer.complete(ValidationResult::Failure(Some("invalid".into())));

    // Not applied until the owner drains.
    assert_eq2!(field.state(), &FieldState::Normal);
    assert_eq2!(field.apply_pending_validation_outcomes().len(), 1);
    assert_eq2!(field.state(), &error("invalid"));

    // Sticky across refocus.
    field.focus_gained();
    assert_eq2!(field.state(), &error("invalid"));
    assert!(!field.is_active_responder());

    field.edit_text("c@d.com");
    field.focus_lost();
    assert_eq2!(field.state(), &error("invalid"));
    let (_, completer) = parked.lock().unwrap().remove(0);
    completer.complete(ValidationResult::Success);
    field.apply_pending_validation_outcomes();

    assert_eq2!(field.state(), &FieldState::Normal);
    assert_eq2!(field.state().error_message(), None);
}

#[test]
fn test_overlapping_validations_discard_stale_result() {
    let (parked, validator) = parking_validator();
    let mut field: ValidateField = ValidateField::new(
        ContentType::Username,
        ValidateFieldOptions::default(),
        None,
        None,
        Some(Arc::new(validator)),
    );

    field.focus_gained();
    field.edit_text("x");
    field.focus_lost();
    field.focus_gained();
    field.edit_text("y");
    field.focus_lost();

    let (text_y, completer_y) = parked.lock().unwrap().remove(1);
    let (text_x, completer_x) = parked.lock().unwrap().remove(0);
    assert_eq2!(text_x.as_deref(), Some("x"));
    assert_eq2!(text_y.as_deref(), Some("y"));

    completer_y.complete(ValidationResult::Success);
    completer_x.complete(ValidationResult::Failure(Some("x is taken".into())));

    let transitions = field.apply_pending_validation_outcomes();
    assert_eq2!(transitions.len(), 1);
    assert_eq2!(field.state(), &FieldState::Normal);
}

#[test]
fn test_overlapping_validations_last_arrival_wins() {
    let (parked, validator) = parking_validator();
    let mut field: ValidateField = ValidateField::new(
        ContentType::Username,
        ValidateFieldOptions::default().race_policy(ValidationRacePolicy::LastArrivalWins),
        None,
        None,
        Some(Arc::new(validator)),
    );

    field.edit_text("x");
    field.focus_lost();
    field.edit_text("y");
    field.focus_lost();

    let (_, completer_y) = parked.lock().unwrap().remove(1);
    let (_, completer_x) = parked.lock().unwrap().remove(0);
    completer_y.complete(ValidationResult::Success);
    completer_x.complete(ValidationResult::Failure(Some("x is taken".into())));

    assert_eq2!(field.apply_pending_validation_outcomes().len(), 2);
    assert_eq2!(field.state(), &error("x is taken"));
}

#[test]
fn test_sync_validator_is_applied_on_focus_lost() {
    let validator = |maybe_text: Option<String>, completer: ValidationCompleter| {
        completer.complete(match maybe_text.as_deref() {
            Some("") | None => ValidationResult::Failure(None),
            Some(_) => ValidationResult::Success,
        });
    };
    let mut field: ValidateField = ValidateField::new(
        ContentType::GivenName,
        ValidateFieldOptions::default(),
        None,
        None,
        Some(Arc::new(validator)),
    );

    field.focus_gained();
    let transitions = field.focus_lost();
    assert_eq2!(transitions.len(), 2);
    assert_eq2!(
        field.state(),
        &FieldState::Error {
            maybe_message: None
        }
    );
    // Error styling without a message.
    assert_eq2!(field.display().header_color, field.config().header_error_color);
}

#[test]
fn test_no_validator_just_changes_focus_state() {
    let mut field: ValidateField = ValidateField::new(
        ContentType::Nickname,
        ValidateFieldOptions::default(),
        None,
        None,
        None,
    );
    assert!(!field.has_validator());
    field.become_first_responder();
    assert!(field.is_active_responder());
    assert_eq2!(field.focus_lost().len(), 1);
    assert_eq2!(field.state(), &FieldState::Normal);
}

#[test]
fn test_field_focused_at_construction_starts_active() {
    let field: ValidateField = ValidateField::new(
        ContentType::OneTimeCode,
        ValidateFieldOptions::default(),
        None,
        None,
        None,
    )
    .into_first_responder();
    assert_eq2!(field.state(), &FieldState::Active);
    assert!(field.is_active_responder());
}

#[test]
fn test_clear_on_focus_lost_policy() {
    let (parked, validator) = parking_validator();
    let mut field: ValidateField = ValidateField::new(
        ContentType::EmailAddress,
        ValidateFieldOptions::default().error_policy(ErrorDisplayPolicy::ClearOnFocusLost),
        None,
        None,
        None,
    );
    field.set_validator(Some(Arc::new(validator)));

    field.focus_lost();
    let (_, completer) = parked.lock().unwrap().remove(0);
    completer.complete(ValidationResult::Failure(Some("bad".into())));
    field.apply_pending_validation_outcomes();
    assert_eq2!(field.state(), &error("bad"));

    field.focus_gained();
    assert_eq2!(field.state(), &error("bad"));
    field.focus_lost();
    assert_eq2!(field.state(), &FieldState::Normal);
    assert_eq2!(parked.lock().unwrap().len(), 1);
}

#[test]
fn test_notifications_fire_exactly_once() {
    let focus_gained_count = Arc::new(AtomicUsize::new(0));
    let text_changed = Arc::new(Mutex::new(Vec::<String>::new()));
    let focus_lost_count = Arc::new(AtomicUsize::new(0));

    let mut field: ValidateField = ValidateField::new(
        ContentType::FamilyName,
        ValidateFieldOptions::default().text("initial"),
        None,
        None,
        None,
    );
    let field_ref = field.field_ref().clone();
    assert_eq2!(field.text(), "initial");

    {
        let count = focus_gained_count.clone();
        field.set_on_focus_gained(move |_, _| {
            count.fetch_add(1, Ordering::SeqCst);
        });
    }
    {
        let acc = text_changed.clone();
        let expected_ref = field_ref.clone();
        field.set_on_text_changed(move |it, maybe_text| {
            assert_eq!(it, &expected_ref);
            acc.lock().unwrap().push(maybe_text.unwrap_or_default().to_string());
        });
    }
    {
        let count = focus_lost_count.clone();
        field.set_on_focus_lost(move |_, _| {
            count.fetch_add(1, Ordering::SeqCst);
        });
    }

    field.focus_gained();
    field.edit_text("S");
    field.edit_text("Sm");
    // Programmatic changes are silent.
    field.set_text("Smith");
    field.return_pressed();
    assert_eq2!(field.state(), &FieldState::Active);
    field.focus_lost();

    assert_eq2!(focus_gained_count.load(Ordering::SeqCst), 1);
    assert_eq2!(*text_changed.lock().unwrap(), vec!["S".to_string(), "Sm".to_string()]);
    assert_eq2!(focus_lost_count.load(Ordering::SeqCst), 2);
    assert_eq2!(field.text(), "Smith");
}

#[test]
fn test_header_visibility_tracks_text() {
    let mut field: ValidateField = ValidateField::new(
        ContentType::Other("pet".into()),
        OptionBag::default().with(crate::ConfigKey::HeaderText, "Pet name"),
        None,
        None,
        None,
    );
    assert_eq2!(field.display().placeholder_text, "Pet name");
    assert!(!field.display().is_header_visible);
    field.edit_text("Rex");
    assert!(field.display().is_header_visible);
    field.edit_text("");
    assert!(!field.display().is_header_visible);
}

#[test]
fn test_accessory_replacement_and_arrangement() {
    #[derive(Debug, PartialEq)]
    struct Button(&'static str);

    let reveal = Arc::new(Button("reveal"));
    let clear = Arc::new(Button("clear"));
    let icon = Arc::new(Button("icon"));

    let mut field = ValidateField::new(
        ContentType::Password,
        ValidateFieldOptions::default()
            .assistive_text("8+ characters")
            .assistive_position(AssistiveViewPosition::InsideField {
                vertical: InsideVerticalAlignment::Center,
                horizontal: TextAlignment::Trailing,
            }),
        Some(&icon),
        Some(&reveal),
        None,
    );
    assert!(field.display().is_secure_text_entry);
    assert_eq2!(
        field.arranged_elements().as_slice(),
        &[
            ArrangedElement::LeftAccessory,
            ArrangedElement::Fields,
            ArrangedElement::AssistiveRegion,
            ArrangedElement::RightAccessory,
        ]
    );

    field.set_right_view(Some(&clear));
    assert_eq2!(field.right_view(), Some(clear.clone()));
    assert_eq2!(Arc::weak_count(&reveal), 0);
    assert_eq2!(Arc::strong_count(&reveal), 1);

    field.set_right_view(None);
    field.set_left_view(None);
    assert_eq2!(field.left_view(), None);
    assert_eq2!(
        field.arranged_elements().as_slice(),
        &[ArrangedElement::Fields, ArrangedElement::AssistiveRegion]
    );
}

#[tokio::test]
async fn test_async_validator_marshaled_back_to_owner() {
    let validator = validator_from_async(|maybe_text: Option<String>| async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        match maybe_text.as_deref() {
            Some(text) if text.chars().all(|it| it.is_ascii_digit()) => {
                ValidationResult::Success
            }
            _ => ValidationResult::Failure(Some("Digits only".into())),
        }
    });
    let mut field: ValidateField = ValidateField::new(
        ContentType::OneTimeCode,
        ValidateFieldOptions::default(),
        None,
        None,
        Some(Arc::new(validator)),
    );

    field.focus_gained();
    field.edit_text("12a4");
    field.focus_lost();
    assert_eq2!(field.state(), &FieldState::Normal);

    let transition = tokio::time::timeout(
        Duration::from_secs(5),
        field.await_next_validation_outcome(),
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq2!(transition.to, error("Digits only"));
    assert_eq2!(field.state(), &error("Digits only"));
}
