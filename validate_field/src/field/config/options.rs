// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{ErrorDisplayPolicy, FieldColor, ValidationRacePolicy};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFont {
    pub point_size: f32,
    pub weight: FontWeight,
}

impl FieldFont {
    #[must_use]
    pub const fn new(point_size: f32, weight: FontWeight) -> Self {
        Self { point_size, weight }
    }

    #[must_use]
    pub const fn regular(point_size: f32) -> Self {
        Self::new(point_size, FontWeight::Regular)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    #[must_use]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

/// Vertical placement of an assistive region that sits outside the field's border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutsideVerticalAlignment {
    Above,
    Below,
}

/// Vertical placement of an assistive region that sits inside the field's border, next
/// to the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InsideVerticalAlignment {
    Top,
    Center,
    Bottom,
}

/// Whether an assistive / error message region exists at all, and where it goes. Fixed
/// at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AssistiveViewPosition {
    #[default]
    None,
    OutsideField {
        vertical: OutsideVerticalAlignment,
    },
    InsideField {
        vertical: InsideVerticalAlignment,
        horizontal: TextAlignment,
    },
}

impl AssistiveViewPosition {
    #[must_use]
    pub fn has_assistive_region(&self) -> bool {
        !matches!(self, AssistiveViewPosition::None)
    }

    #[must_use]
    pub fn is_inside_field(&self) -> bool {
        matches!(self, AssistiveViewPosition::InsideField { .. })
    }
}

/// Sparse, typed set of options for a [`crate::ValidateField`]. Every field is optional,
/// missing ones are filled in by [`crate::ConfigResolver`]. The camelCase serde names
/// are the same names that [`crate::ConfigKey`] uses, so a JSON [`crate::OptionBag`]
/// maps onto this struct key for key.
///
/// # Example
///
/// ```
/// use r3bl_validate_field::{AssistiveViewPosition, OutsideVerticalAlignment,
///                           ValidateFieldOptions};
///
/// let options = ValidateFieldOptions::default()
///     .header_text("Work email")
///     .assistive_text("We never share it")
///     .assistive_position(AssistiveViewPosition::OutsideField {
///         vertical: OutsideVerticalAlignment::Below,
///     })
///     .border_width(2.0);
/// assert_eq!(options.header_text.as_deref(), Some("Work email"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidateFieldOptions {
    // Container.
    pub background_color: Option<FieldColor>,
    pub spacing: Option<f32>,

    // Header.
    pub header_off_focus_text_color: Option<FieldColor>,
    pub header_in_focus_text_color: Option<FieldColor>,
    pub header_text_font: Option<FieldFont>,
    pub header_text: Option<String>,

    // Text.
    pub text_color: Option<FieldColor>,
    pub text_font: Option<FieldFont>,
    pub text: Option<String>,
    pub tint_color: Option<FieldColor>,

    // Placeholder.
    pub placeholder_text_color: Option<FieldColor>,
    pub placeholder_text_font: Option<FieldFont>,
    pub placeholder_text: Option<String>,

    // Error.
    pub error_text_color: Option<FieldColor>,
    pub error_text_font: Option<FieldFont>,
    pub error_background_color: Option<FieldColor>,

    // Assistive.
    pub assistive_in_focus_text_color: Option<FieldColor>,
    pub assistive_off_focus_text_color: Option<FieldColor>,
    pub assistive_text_font: Option<FieldFont>,
    pub assistive_text: Option<String>,
    pub assistive_text_alignment: Option<TextAlignment>,
    pub assistive_background_color: Option<FieldColor>,
    pub assistive_corner_radius: Option<f32>,
    pub assistive_position: Option<AssistiveViewPosition>,

    // Layout and border.
    pub content_margins: Option<EdgeInsets>,
    pub corner_radius: Option<f32>,
    pub border_width: Option<f32>,
    pub border_off_focus_color: Option<FieldColor>,
    pub border_in_focus_color: Option<FieldColor>,
    pub error_border_color: Option<FieldColor>,

    // Behavior.
    pub error_policy: Option<ErrorDisplayPolicy>,
    pub race_policy: Option<ValidationRacePolicy>,
}

/// Generates one chainable setter per option, eg: `.header_text("Email")`.
macro_rules! generate_option_setters {
    ($($field:ident : $ty:ty),* $(,)?) => {
        impl ValidateFieldOptions {
            $(
                #[must_use]
                pub fn $field(mut self, it: impl Into<$ty>) -> Self {
                    self.$field = Some(it.into());
                    self
                }
            )*
        }
    };
}

generate_option_setters! {
    background_color: FieldColor,
    spacing: f32,
    header_off_focus_text_color: FieldColor,
    header_in_focus_text_color: FieldColor,
    header_text_font: FieldFont,
    header_text: String,
    text_color: FieldColor,
    text_font: FieldFont,
    text: String,
    tint_color: FieldColor,
    placeholder_text_color: FieldColor,
    placeholder_text_font: FieldFont,
    placeholder_text: String,
    error_text_color: FieldColor,
    error_text_font: FieldFont,
    error_background_color: FieldColor,
    assistive_in_focus_text_color: FieldColor,
    assistive_off_focus_text_color: FieldColor,
    assistive_text_font: FieldFont,
    assistive_text: String,
    assistive_text_alignment: TextAlignment,
    assistive_background_color: FieldColor,
    assistive_corner_radius: f32,
    assistive_position: AssistiveViewPosition,
    content_margins: EdgeInsets,
    corner_radius: f32,
    border_width: f32,
    border_off_focus_color: FieldColor,
    border_in_focus_color: FieldColor,
    error_border_color: FieldColor,
    error_policy: ErrorDisplayPolicy,
    race_policy: ValidationRacePolicy,
}
