// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{AssistiveViewPosition, ContentType, ContentTypeLabeler, DEBUG_FIELD_MOD,
            EdgeInsets, ErrorDisplayPolicy, FieldColor, FieldFont, FieldTheme,
            FontWeight, OptionBag, TextAlignment, ValidateFieldOptions,
            ValidationRacePolicy};

/// Defaults for the options that don't come from the [`FieldTheme`].
#[rustfmt::skip]
pub mod config_defaults {
    use super::{EdgeInsets, FieldFont, FontWeight, TextAlignment};

    pub const SPACING: f32 = 8.0;
    pub const CONTENT_MARGINS: EdgeInsets = EdgeInsets::new(8.0, 16.0, 8.0, 16.0);
    pub const CORNER_RADIUS: f32 = 4.0;
    pub const BORDER_WIDTH: f32 = 1.0;
    pub const ASSISTIVE_CORNER_RADIUS: f32 = 0.0;
    pub const ASSISTIVE_TEXT_ALIGNMENT: TextAlignment = TextAlignment::Center;

    pub const HEADER_TEXT_FONT: FieldFont =      FieldFont::new(12.0, FontWeight::Medium);
    pub const TEXT_FONT: FieldFont =             FieldFont::regular(15.0);
    pub const PLACEHOLDER_TEXT_FONT: FieldFont = FieldFont::regular(16.0);
    pub const ASSISTIVE_TEXT_FONT: FieldFont =   FieldFont::regular(14.0);
    pub const ERROR_TEXT_FONT: FieldFont =       FieldFont::regular(14.0);
}

/// Every option with a concrete value. Produced once by [`ConfigResolver::resolve`] at
/// construction and never changed afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub content_type: String,
    pub is_secure_text_entry: bool,

    // Container.
    pub background_color: FieldColor,
    pub spacing: f32,

    // Header.
    pub header_off_focus_text_color: FieldColor,
    pub header_in_focus_text_color: FieldColor,
    pub header_text_font: FieldFont,
    pub header_text: String,
    /// Header color in the error state. Always the theme's error color, the
    /// `errorTextColor` option does not affect it.
    pub header_error_color: FieldColor,

    // Text.
    pub text_color: FieldColor,
    pub text_font: FieldFont,
    pub text: String,
    pub tint_color: FieldColor,

    // Placeholder.
    pub placeholder_text_color: FieldColor,
    pub placeholder_text_font: FieldFont,
    pub placeholder_text: String,

    // Error.
    pub error_text_color: FieldColor,
    pub error_text_font: FieldFont,
    pub error_background_color: FieldColor,

    // Assistive.
    pub assistive_in_focus_text_color: FieldColor,
    pub assistive_off_focus_text_color: FieldColor,
    pub assistive_text_font: FieldFont,
    pub assistive_text: Option<String>,
    pub assistive_text_alignment: TextAlignment,
    pub assistive_background_color: FieldColor,
    pub assistive_corner_radius: f32,
    pub assistive_position: AssistiveViewPosition,

    // Layout and border.
    pub content_margins: EdgeInsets,
    pub corner_radius: f32,
    pub border_width: f32,
    pub border_off_focus_color: FieldColor,
    pub border_in_focus_color: FieldColor,
    pub error_border_color: FieldColor,

    // Behavior.
    pub error_policy: ErrorDisplayPolicy,
    pub race_policy: ValidationRacePolicy,
}

/// Turns sparse options plus a [`ContentType`] into a [`ResolvedConfig`]. Resolution
/// can't fail: missing values fall back to defaults. It is deterministic, the same
/// inputs always give an equal output.
#[derive(Debug)]
pub struct ConfigResolver;

impl ConfigResolver {
    #[must_use]
    pub fn resolve(
        options: &ValidateFieldOptions,
        content_type: &ContentType,
        theme: &FieldTheme,
    ) -> ResolvedConfig {
        use config_defaults::{ASSISTIVE_CORNER_RADIUS, ASSISTIVE_TEXT_FONT, BORDER_WIDTH,
                              CONTENT_MARGINS, CORNER_RADIUS, ERROR_TEXT_FONT,
                              HEADER_TEXT_FONT, PLACEHOLDER_TEXT_FONT, SPACING,
                              TEXT_FONT};

        let (header_text, placeholder_text) = Self::resolve_header_and_placeholder(
            non_empty(options.header_text.as_deref()),
            non_empty(options.placeholder_text.as_deref()),
            content_type,
        );

        ResolvedConfig {
            content_type: content_type.tag().to_string(),
            is_secure_text_entry: content_type.is_masked(),

            background_color: options.background_color.unwrap_or(theme.background_color),
            spacing: options.spacing.unwrap_or(SPACING),

            header_off_focus_text_color: options
                .header_off_focus_text_color
                .unwrap_or(theme.header_off_focus_color),
            header_in_focus_text_color: options
                .header_in_focus_text_color
                .unwrap_or(theme.header_in_focus_color),
            header_text_font: options.header_text_font.unwrap_or(HEADER_TEXT_FONT),
            header_text,
            header_error_color: theme.error_color,

            text_color: options.text_color.unwrap_or(theme.text_color),
            text_font: options.text_font.unwrap_or(TEXT_FONT),
            text: options.text.clone().unwrap_or_default(),
            tint_color: options.tint_color.unwrap_or(theme.text_color),

            placeholder_text_color: options
                .placeholder_text_color
                .unwrap_or(theme.placeholder_color),
            placeholder_text_font: options
                .placeholder_text_font
                .unwrap_or(PLACEHOLDER_TEXT_FONT),
            placeholder_text,

            error_text_color: options.error_text_color.unwrap_or(theme.error_color),
            error_text_font: options.error_text_font.unwrap_or(ERROR_TEXT_FONT),
            error_background_color: options.error_background_color.unwrap_or_default(),

            assistive_in_focus_text_color: options
                .assistive_in_focus_text_color
                .unwrap_or(theme.header_in_focus_color),
            assistive_off_focus_text_color: options
                .assistive_off_focus_text_color
                .unwrap_or(theme.placeholder_color),
            assistive_text_font: options.assistive_text_font.unwrap_or(ASSISTIVE_TEXT_FONT),
            assistive_text: options.assistive_text.clone(),
            assistive_text_alignment: Self::resolve_assistive_text_alignment(
                options.assistive_text_alignment,
                options.assistive_position,
            ),
            assistive_background_color: options
                .assistive_background_color
                .unwrap_or_default(),
            assistive_corner_radius: options
                .assistive_corner_radius
                .unwrap_or(ASSISTIVE_CORNER_RADIUS),
            assistive_position: options.assistive_position.unwrap_or_default(),

            content_margins: options.content_margins.unwrap_or(CONTENT_MARGINS),
            corner_radius: options.corner_radius.unwrap_or(CORNER_RADIUS),
            border_width: options.border_width.unwrap_or(BORDER_WIDTH),
            border_off_focus_color: options
                .border_off_focus_color
                .unwrap_or(theme.border_off_focus_color),
            border_in_focus_color: options
                .border_in_focus_color
                .unwrap_or(theme.border_in_focus_color),
            error_border_color: options
                .error_border_color
                .unwrap_or(theme.border_off_focus_color),

            error_policy: options.error_policy.unwrap_or_default(),
            race_policy: options.race_policy.unwrap_or_default(),
        }
    }

    /// Same as [`ConfigResolver::resolve`] for a loosely typed [`OptionBag`].
    #[must_use]
    pub fn resolve_bag(
        bag: &OptionBag,
        content_type: &ContentType,
        theme: &FieldTheme,
    ) -> ResolvedConfig {
        Self::resolve(&ValidateFieldOptions::from(bag), content_type, theme)
    }

    /// The explicit option wins, then the horizontal alignment of an
    /// [`AssistiveViewPosition::InsideField`], then
    /// [`config_defaults::ASSISTIVE_TEXT_ALIGNMENT`].
    fn resolve_assistive_text_alignment(
        maybe_alignment: Option<TextAlignment>,
        maybe_position: Option<AssistiveViewPosition>,
    ) -> TextAlignment {
        match (maybe_alignment, maybe_position) {
            (Some(alignment), _) => alignment,
            (None, Some(AssistiveViewPosition::InsideField { horizontal, .. })) => {
                horizontal
            }
            _ => config_defaults::ASSISTIVE_TEXT_ALIGNMENT,
        }
    }

    /// - Neither supplied: both use the [`ContentTypeLabeler`] label (empty if there is
    ///   none).
    /// - One supplied: it is mirrored into the other.
    /// - Both supplied: used as is.
    fn resolve_header_and_placeholder(
        maybe_header_text: Option<&str>,
        maybe_placeholder_text: Option<&str>,
        content_type: &ContentType,
    ) -> (String, String) {
        match (maybe_header_text, maybe_placeholder_text) {
            (Some(header), Some(placeholder)) => (header.into(), placeholder.into()),
            (Some(it), None) | (None, Some(it)) => (it.into(), it.into()),
            (None, None) => {
                let label = ContentTypeLabeler::label(content_type).unwrap_or_default();

                DEBUG_FIELD_MOD.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "🏷️ ConfigResolver -> header & placeholder from content type",
                        content_type = ?content_type,
                        label = %label
                    );
                });

                (label.into(), label.into())
            }
        }
    }
}

/// Empty strings count as "not supplied".
fn non_empty(maybe_text: Option<&str>) -> Option<&str> {
    maybe_text.filter(|it| !it.is_empty())
}
