// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{CommonError, CommonErrorType, CommonResult, parse_hex_color};

/// Represents a color in RGB (24-bit truecolor) format.
///
/// Serializes to (and deserializes from) a `#rrggbb` string, which is the form used in a
/// JSON [`crate::OptionBag`].
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<u32> for RgbValue {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl Default for RgbValue {
    fn default() -> Self { Self::from_u8(255, 255, 255) }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// # Errors
    ///
    /// Returns an error if the input string is not a valid hex color format. Trailing
    /// characters after `#rrggbb` are not allowed.
    pub fn try_from_hex_color(input: &str) -> CommonResult<RgbValue> {
        match parse_hex_color(input) {
            Ok(("", color)) => Ok(color),
            _ => CommonError::new_error_result(
                CommonErrorType::InvalidHexColorFormat,
                &format!("Invalid hex color format: {input}"),
            ),
        }
    }
}

impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl TryFrom<String> for RgbValue {
    type Error = miette::Report;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from_hex_color(&value)
    }
}

impl From<RgbValue> for String {
    fn from(value: RgbValue) -> Self { value.to_string() }
}
