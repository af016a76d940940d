// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use tracing_appender::rolling::RollingFileAppender;

use crate::{CommonError, CommonErrorType, CommonResult, ok};

/// Log file appender that never rotates. Note that if you wrap this up in a non
/// blocking writer, it doesn't work, eg:
/// `tracing_appender::non_blocking(try_create("foo")?)`
///
/// # Errors
///
/// Returns [`CommonErrorType::IOError`] if the path has no parent directory or no file
/// name.
pub fn try_create(path_str: &str) -> CommonResult<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let Some(parent) = path.parent() else {
        return CommonError::new_error_result(
            CommonErrorType::IOError,
            &format!("Can't access parent folder of log file {}", path.display()),
        );
    };

    let Some(file_name) = path.file_name() else {
        return CommonError::new_error_result(
            CommonErrorType::IOError,
            &format!("Can't access file name of log file {}", path.display()),
        );
    };

    ok!(tracing_appender::rolling::never(parent, file_name))
}
