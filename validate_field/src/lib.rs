// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_validate_field
//!
//! A headless, labeled text input field with a header, placeholder, optional assistive
//! / error message region, left and right accessory views, and asynchronous validation
//! that runs every time the field loses focus.
//!
//! Nothing in here draws anything. The host toolkit forwards focus and edit events to a
//! [`ValidateField`] and renders the plain data [`FieldDisplay`] snapshot it returns.
//!
//! # Pieces
//!
//! 1. [`ContentTypeLabeler`] maps a [`ContentType`] (eg: email address, password) to a
//!    default label, used for the header and placeholder when the caller supplies
//!    neither.
//! 2. [`ConfigResolver`] turns sparse [`ValidateFieldOptions`] (or a loosely typed
//!    [`OptionBag`], which can be parsed from JSON) plus an injected [`FieldTheme`] into
//!    a fully resolved, immutable [`ResolvedConfig`]. It never fails, missing or
//!    mistyped values fall back to defaults.
//! 3. [`FieldStateMachine`] holds the `Normal` / `Active` / `Error` state. What focus
//!    does to an existing error is an explicit [`ErrorDisplayPolicy`], the default keeps
//!    the error until a validation succeeds.
//! 4. [`ValidationCoordinator`] calls the caller's [`Validator`] on focus loss. The
//!    validator completes a one shot [`ValidationCompleter`], now or later, from any
//!    thread. Outcomes are sent over a tokio channel and applied only when the owner of
//!    the field drains it. Overlapping validations are resolved with a
//!    [`ValidationRacePolicy`], the default discards stale outcomes using sequence
//!    numbers.
//! 5. [`AccessorySlotManager`] keeps weak references to the left and right accessory
//!    views, and answers where each element goes in left to right order.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use r3bl_validate_field::{ContentType, FieldState, ValidateField, ValidateFieldOptions,
//!                           ValidationCompleter, ValidationResult};
//!
//! let mut field: ValidateField = ValidateField::new(
//!     ContentType::Username,
//!     ValidateFieldOptions::default().assistive_text("At least 3 characters"),
//!     None,
//!     None,
//!     Some(Arc::new(|maybe_text: Option<String>, completer: ValidationCompleter| {
//!         match maybe_text.is_some_and(|it| it.len() >= 3) {
//!             true => completer.complete(ValidationResult::Success),
//!             false => completer.complete(ValidationResult::Failure(Some("Too short".into()))),
//!         }
//!     })),
//! );
//!
//! field.focus_gained();
//! field.edit_text("ab");
//! field.focus_lost();
//! assert_eq!(field.state(), &FieldState::Error { maybe_message: Some("Too short".into()) });
//!
//! field.focus_gained();
//! field.edit_text("abc");
//! field.focus_lost();
//! assert_eq!(field.state(), &FieldState::Normal);
//! ```
//!
//! # Logging
//!
//! The crate logs with [`tracing`], gated by [`DEBUG_FIELD_MOD`]. It never installs a
//! subscriber on its own. Use [`try_initialize_logging_global`] with a [`TracingConfig`]
//! to log to stdout, stderr, a file, or a file and the display.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod field;

// Re-export.
pub use core::*;
pub use field::*;
