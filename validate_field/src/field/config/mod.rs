// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod config_resolver;
pub mod option_bag;
pub mod options;

// Re-export.
pub use config_resolver::*;
pub use option_bag::*;
pub use options::*;
