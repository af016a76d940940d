// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{CommonResult, RgbValue};

/// A color that a renderer paints a part of the field with. [`FieldColor::Clear`] means
/// "paint nothing", and is the default for the assistive and error backgrounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldColor {
    #[default]
    Clear,
    Rgb(RgbValue),
}

impl FieldColor {
    pub const CLEAR_STR: &str = "clear";

    /// Accepts `clear` (case insensitive) or a `#rrggbb` hex string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is neither `clear` nor a valid hex color.
    pub fn try_from_str(input: &str) -> CommonResult<Self> {
        if input.eq_ignore_ascii_case(Self::CLEAR_STR) {
            return Ok(FieldColor::Clear);
        }
        RgbValue::try_from_hex_color(input).map(FieldColor::Rgb)
    }

    #[must_use]
    pub fn is_clear(&self) -> bool { matches!(self, FieldColor::Clear) }
}

impl From<RgbValue> for FieldColor {
    fn from(value: RgbValue) -> Self { FieldColor::Rgb(value) }
}

impl From<(u8, u8, u8)> for FieldColor {
    fn from(value: (u8, u8, u8)) -> Self { FieldColor::Rgb(value.into()) }
}

impl Display for FieldColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldColor::Clear => write!(f, "{}", Self::CLEAR_STR),
            FieldColor::Rgb(rgb) => write!(f, "{rgb}"),
        }
    }
}

impl TryFrom<String> for FieldColor {
    type Error = miette::Report;

    fn try_from(value: String) -> Result<Self, Self::Error> { Self::try_from_str(&value) }
}

impl From<FieldColor> for String {
    fn from(value: FieldColor) -> Self { value.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_try_from_str() {
        assert_eq2!(FieldColor::try_from_str("Clear").unwrap(), FieldColor::Clear);
        assert_eq2!(
            FieldColor::try_from_str("#000000").unwrap(),
            FieldColor::Rgb(RgbValue::from_u8(0, 0, 0))
        );
        assert!(FieldColor::try_from_str("transparent").is_err());
    }

    #[test]
    fn test_display_round_trips_through_serde() {
        let color = FieldColor::from((255, 0, 0));
        assert_eq2!(color.to_string(), "#ff0000");
        assert_eq2!(
            serde_json::to_value(FieldColor::Clear).unwrap(),
            serde_json::json!("clear")
        );
    }
}
