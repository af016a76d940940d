// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::{error::Error,
          fmt::{Debug, Display, Formatter, Result}};

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`CommonError`] and any other type of error.
///
/// # Example
///
/// ```
/// use r3bl_validate_field::{CommonError, CommonErrorType, CommonResult, RgbValue};
///
/// let result: CommonResult<RgbValue> = RgbValue::try_from_hex_color("#zz0000");
/// let report = result.unwrap_err();
/// assert!(matches!(
///     report.downcast_ref::<CommonError>(),
///     Some(CommonError { error_type: CommonErrorType::InvalidHexColorFormat, .. })
/// ));
/// ```
pub type CommonResult<T> = miette::Result<T>;

/// Common error struct. Read custom error docs
/// [here](https://learning-rust.github.io/docs/e7.custom_error_types.html).
#[derive(Debug, Clone)]
pub struct CommonError {
    pub error_type: CommonErrorType,
    pub error_message: Option<String>,
}

/// Some common errors that can occur.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonErrorType {
    InvalidHexColorFormat,
    IOError,
}

/// Implement [`Error`] trait.
impl Error for CommonError {}

/// Implement [`Display`] trait (needed by [`Error`] trait). This is the same as the
/// [`Debug`] implementation (which is derived above).
impl Display for CommonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { Debug::fmt(self, f) }
}

impl CommonError {
    /// Both [`CommonError::error_type`] and [`CommonError::error_message`] available.
    ///
    /// # Errors
    ///
    /// Always returns an error, that's the point.
    pub fn new_error_result<T>(err_type: CommonErrorType, msg: &str) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: Some(msg.to_string()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_error_can_be_downcast() {
        let result: CommonResult<()> =
            CommonError::new_error_result(CommonErrorType::IOError, "nope");
        let report = result.err().unwrap();

        assert_eq2!(report.is::<CommonError>(), true);

        let it = report.downcast_ref::<CommonError>().unwrap();
        assert_eq2!(it.error_type, CommonErrorType::IOError);
        assert_eq2!(it.error_message.as_deref(), Some("nope"));
    }

    #[test]
    fn test_invalid_hex_color_reports_its_error_type() {
        let report = crate::RgbValue::try_from_hex_color("#12345").err().unwrap();
        let it = report.downcast_ref::<CommonError>().unwrap();
        assert_eq2!(it.error_type, CommonErrorType::InvalidHexColorFormat);
    }
}
