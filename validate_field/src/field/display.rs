// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Headless render projection. A renderer reads a [`FieldDisplay`] and draws it however
//! it likes, nothing in here knows about any toolkit.

use serde::Serialize;

use crate::{AssistiveViewPosition, EdgeInsets, FieldColor, FieldFont, FieldState,
            ResolvedConfig, TextAlignment};

/// Everything needed to draw the field in its current state.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDisplay {
    pub header_text: String,
    pub is_header_visible: bool,
    pub header_color: FieldColor,
    pub header_font: FieldFont,

    pub text: String,
    pub text_color: FieldColor,
    pub text_font: FieldFont,
    pub tint_color: FieldColor,
    pub is_secure_text_entry: bool,

    pub placeholder_text: String,
    pub placeholder_color: FieldColor,
    pub placeholder_font: FieldFont,

    pub background_color: FieldColor,
    pub border_color: FieldColor,
    pub border_width: f32,
    pub corner_radius: f32,
    pub content_margins: EdgeInsets,
    pub spacing: f32,

    /// [`None`] when no assistive region is configured.
    pub maybe_assistive: Option<AssistiveDisplay>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistiveDisplay {
    /// In the error state this is the error message (if any) instead of the assistive
    /// text.
    pub maybe_text: Option<String>,
    pub color: FieldColor,
    pub font: FieldFont,
    pub background_color: FieldColor,
    pub alignment: TextAlignment,
    pub position: AssistiveViewPosition,
    pub corner_radius: f32,
}

impl FieldDisplay {
    /// Colors depend only on `state`. `Normal` uses the off focus colors, `Active` the in
    /// focus ones, and `Error` overrides the header, border and assistive colors.
    #[must_use]
    pub fn project(config: &ResolvedConfig, state: &FieldState, text: &str) -> Self {
        let (header_color, border_color) = match state {
            FieldState::Normal => (
                config.header_off_focus_text_color,
                config.border_off_focus_color,
            ),
            FieldState::Active => (
                config.header_in_focus_text_color,
                config.border_in_focus_color,
            ),
            FieldState::Error { .. } => {
                (config.header_error_color, config.error_border_color)
            }
        };

        Self {
            header_text: config.header_text.clone(),
            is_header_visible: !text.is_empty(),
            header_color,
            header_font: config.header_text_font,

            text: text.to_string(),
            text_color: config.text_color,
            text_font: config.text_font,
            tint_color: config.tint_color,
            is_secure_text_entry: config.is_secure_text_entry,

            placeholder_text: config.placeholder_text.clone(),
            placeholder_color: config.placeholder_text_color,
            placeholder_font: config.placeholder_text_font,

            background_color: config.background_color,
            border_color,
            border_width: config.border_width,
            corner_radius: config.corner_radius,
            content_margins: config.content_margins,
            spacing: config.spacing,

            maybe_assistive: AssistiveDisplay::project(config, state),
        }
    }
}

impl AssistiveDisplay {
    fn project(config: &ResolvedConfig, state: &FieldState) -> Option<Self> {
        if !config.assistive_position.has_assistive_region() {
            return None;
        }

        let common = |maybe_text: Option<String>, color, font, background_color| Self {
            maybe_text,
            color,
            font,
            background_color,
            alignment: config.assistive_text_alignment,
            position: config.assistive_position,
            corner_radius: config.assistive_corner_radius,
        };

        Some(match state {
            FieldState::Error { maybe_message } => common(
                maybe_message.clone(),
                config.error_text_color,
                config.error_text_font,
                config.error_background_color,
            ),
            FieldState::Active => common(
                config.assistive_text.clone(),
                config.assistive_in_focus_text_color,
                config.assistive_text_font,
                config.assistive_background_color,
            ),
            FieldState::Normal => common(
                config.assistive_text.clone(),
                config.assistive_off_focus_text_color,
                config.assistive_text_font,
                config.assistive_background_color,
            ),
        })
    }
}
