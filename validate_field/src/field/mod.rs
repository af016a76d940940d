// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Module scoped `DEBUG` const. If set to `true`, state transitions, validation calls
/// and their outcomes, accessory changes and option fallbacks are logged with
/// [`tracing::debug!`]. A subscriber still has to be installed, eg: with
/// [`crate::try_initialize_logging_global`].
pub const DEBUG_FIELD_MOD: bool = true;

// Attach sources.
pub mod accessory;
pub mod config;
pub mod content_type;
pub mod display;
pub mod field_state;
pub mod theme;
pub mod validate_field;
pub mod validation;

// Re-export.
pub use accessory::*;
pub use config::*;
pub use content_type::*;
pub use display::*;
pub use field_state::*;
pub use theme::*;
pub use validate_field::*;
pub use validation::*;

// Tests.
#[cfg(test)]
mod test_validate_field;
