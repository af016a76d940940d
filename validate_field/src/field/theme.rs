// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{FieldColor, RgbValue};

/// The explicit style table that [`crate::ConfigResolver`] reads its default colors
/// from. It is passed in by the caller, so nothing depends on a global appearance
/// setting, and tests can pin it.
///
/// Two presets are provided, [`FieldTheme::light`] (which is also the [`Default`]) and
/// [`FieldTheme::dark`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTheme {
    pub error_color: FieldColor,
    pub header_in_focus_color: FieldColor,
    pub header_off_focus_color: FieldColor,
    pub text_color: FieldColor,
    pub placeholder_color: FieldColor,
    pub background_color: FieldColor,
    pub border_in_focus_color: FieldColor,
    pub border_off_focus_color: FieldColor,
}

impl Default for FieldTheme {
    fn default() -> Self { Self::light() }
}

#[rustfmt::skip]
mod theme_constants {
    use super::RgbValue;

    pub const LIGHT_ERROR: RgbValue =            RgbValue::from_u8(255, 0, 0);
    pub const LIGHT_LABEL: RgbValue =            RgbValue::from_u8(0, 0, 0);
    pub const LIGHT_SECONDARY_LABEL: RgbValue =  RgbValue::from_u8(102, 102, 102);
    pub const LIGHT_PLACEHOLDER: RgbValue =      RgbValue::from_u8(174, 174, 178);
    pub const LIGHT_BACKGROUND: RgbValue =       RgbValue::from_u8(242, 242, 247);
    pub const LIGHT_SYSTEM_BACKGROUND: RgbValue = RgbValue::from_u8(255, 255, 255);

    pub const DARK_ERROR: RgbValue =             RgbValue::from_u8(176, 0, 32);
    pub const DARK_LABEL: RgbValue =             RgbValue::from_u8(255, 255, 255);
    pub const DARK_SECONDARY_LABEL: RgbValue =   RgbValue::from_u8(152, 152, 159);
    pub const DARK_PLACEHOLDER: RgbValue =       RgbValue::from_u8(99, 99, 102);
    pub const DARK_BACKGROUND: RgbValue =        RgbValue::from_u8(28, 28, 30);
    pub const DARK_SYSTEM_BACKGROUND: RgbValue = RgbValue::from_u8(0, 0, 0);
}

impl FieldTheme {
    #[must_use]
    pub fn light() -> Self {
        use theme_constants::{LIGHT_BACKGROUND, LIGHT_ERROR, LIGHT_LABEL,
                              LIGHT_PLACEHOLDER, LIGHT_SECONDARY_LABEL,
                              LIGHT_SYSTEM_BACKGROUND};
        Self {
            error_color: LIGHT_ERROR.into(),
            header_in_focus_color: LIGHT_LABEL.into(),
            header_off_focus_color: LIGHT_SECONDARY_LABEL.into(),
            text_color: LIGHT_LABEL.into(),
            placeholder_color: LIGHT_PLACEHOLDER.into(),
            background_color: LIGHT_BACKGROUND.into(),
            border_in_focus_color: LIGHT_LABEL.into(),
            border_off_focus_color: LIGHT_SYSTEM_BACKGROUND.into(),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        use theme_constants::{DARK_BACKGROUND, DARK_ERROR, DARK_LABEL, DARK_PLACEHOLDER,
                              DARK_SECONDARY_LABEL, DARK_SYSTEM_BACKGROUND};
        Self {
            error_color: DARK_ERROR.into(),
            header_in_focus_color: DARK_LABEL.into(),
            header_off_focus_color: DARK_SECONDARY_LABEL.into(),
            text_color: DARK_LABEL.into(),
            placeholder_color: DARK_PLACEHOLDER.into(),
            background_color: DARK_BACKGROUND.into(),
            border_in_focus_color: DARK_LABEL.into(),
            border_off_focus_color: DARK_SYSTEM_BACKGROUND.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_is_light() { assert_eq2!(FieldTheme::default(), FieldTheme::light()); }

    #[test]
    fn test_presets_differ_in_error_color() {
        assert_eq2!(
            FieldTheme::dark().error_color,
            FieldColor::Rgb(RgbValue::from_u8(176, 0, 32))
        );
        assert_ne!(FieldTheme::light().error_color, FieldTheme::dark().error_color);
    }
}
