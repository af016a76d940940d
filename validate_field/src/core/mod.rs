// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod color;
pub mod common;
pub mod log;

// Re-export.
pub use color::*;
pub use common::*;
pub use log::*;
