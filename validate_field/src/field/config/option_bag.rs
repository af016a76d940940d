// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashMap, str::FromStr};

use serde_json::{Map, Value};
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::{DEBUG_FIELD_MOD, ValidateFieldOptions};

/// The closed set of option names. Each one names a field of [`ValidateFieldOptions`]
/// (same camelCase spelling).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum ConfigKey {
    // Container.
    BackgroundColor,
    Spacing,
    // Header.
    HeaderOffFocusTextColor,
    HeaderInFocusTextColor,
    HeaderTextFont,
    HeaderText,
    // Text.
    TextColor,
    TextFont,
    Text,
    TintColor,
    // Placeholder.
    PlaceholderTextColor,
    PlaceholderTextFont,
    PlaceholderText,
    // Error.
    ErrorTextColor,
    ErrorTextFont,
    ErrorBackgroundColor,
    // Assistive.
    AssistiveInFocusTextColor,
    AssistiveOffFocusTextColor,
    AssistiveTextFont,
    AssistiveText,
    AssistiveTextAlignment,
    AssistiveBackgroundColor,
    AssistiveCornerRadius,
    AssistivePosition,
    // Layout and border.
    ContentMargins,
    CornerRadius,
    BorderWidth,
    BorderOffFocusColor,
    BorderInFocusColor,
    ErrorBorderColor,
    // Behavior.
    ErrorPolicy,
    RacePolicy,
}

/// Loosely typed option bag: [`ConfigKey`] to any JSON value. Values that don't have the
/// type the key expects are dropped when the bag is turned into
/// [`ValidateFieldOptions`], so the field falls back to its default for that key.
///
/// # Example
///
/// ```
/// use r3bl_validate_field::{ConfigKey, OptionBag, ValidateFieldOptions};
///
/// let bag = OptionBag::default()
///     .with(ConfigKey::HeaderText, "Email")
///     .with(ConfigKey::BorderWidth, "thick"); // Wrong type, ignored.
/// let options = ValidateFieldOptions::from(&bag);
/// assert_eq!(options.header_text.as_deref(), Some("Email"));
/// assert_eq!(options.border_width, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionBag {
    pub map: HashMap<ConfigKey, Value>,
}

pub mod option_bag_error {
    #[derive(thiserror::Error, Debug, miette::Diagnostic)]
    pub enum OptionBagErrorCouldNot {
        #[error("📑 Could not parse option bag JSON")]
        ParseJson(#[from] serde_json::Error),

        #[error("📦 Could not use option bag JSON, expected an object, got: {json}")]
        UseNonObjectJson { json: String },
    }
}
pub use option_bag_error::OptionBagErrorCouldNot;

impl OptionBag {
    pub fn insert(&mut self, key: ConfigKey, value: impl Into<Value>) -> Option<Value> {
        self.map.insert(key, value.into())
    }

    #[must_use]
    pub fn with(mut self, key: ConfigKey, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: ConfigKey) -> Option<&Value> { self.map.get(&key) }

    #[must_use]
    pub fn len(&self) -> usize { self.map.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Parse a JSON object whose keys are [`ConfigKey`] names, eg:
    /// `{ "headerText": "Email", "borderWidth": 2 }`. Unknown keys are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not JSON, or is JSON but not an object. Value
    /// types are not checked here.
    pub fn try_from_json(json: &str) -> Result<Self, OptionBagErrorCouldNot> {
        let Value::Object(object) = serde_json::from_str::<Value>(json)? else {
            return Err(OptionBagErrorCouldNot::UseNonObjectJson {
                json: json.to_string(),
            });
        };

        let mut it = OptionBag::default();
        for (name, value) in object {
            match ConfigKey::from_str(&name) {
                Ok(key) => {
                    it.insert(key, value);
                }
                Err(_) => {
                    DEBUG_FIELD_MOD.then(|| {
                        // % is Display, ? is Debug.
                        tracing::debug!(
                            message = "🔑 OptionBag::try_from_json -> skip unknown key",
                            name = %name
                        );
                    });
                }
            }
        }

        Ok(it)
    }
}

impl From<&OptionBag> for ValidateFieldOptions {
    /// Keys whose value does not deserialize into the type of the matching field are
    /// dropped (one at a time), the rest are kept.
    fn from(bag: &OptionBag) -> Self {
        let mut accepted = Map::new();

        for (key, value) in &bag.map {
            let name = key.as_ref().to_string();

            let mut single = Map::new();
            single.insert(name.clone(), value.clone());

            match serde_json::from_value::<ValidateFieldOptions>(Value::Object(single)) {
                Ok(_) => {
                    accepted.insert(name, value.clone());
                }
                Err(error) => {
                    DEBUG_FIELD_MOD.then(|| {
                        // % is Display, ? is Debug.
                        tracing::debug!(
                            message = "🔑 OptionBag -> fall back to default for mistyped value",
                            key = ?key,
                            value = %value,
                            error = %error
                        );
                    });
                }
            }
        }

        // Every entry deserialized on its own, so together they do too.
        serde_json::from_value(Value::Object(accepted)).unwrap_or_default()
    }
}

impl From<OptionBag> for ValidateFieldOptions {
    fn from(bag: OptionBag) -> Self { Self::from(&bag) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AssistiveViewPosition, FieldColor, OutsideVerticalAlignment, RgbValue,
                assert_eq2};
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_key_names_an_option_field() {
        let Value::Object(fields) =
            serde_json::to_value(ValidateFieldOptions::default()).unwrap()
        else {
            panic!("options must serialize to an object");
        };

        let mut field_names = fields.keys().cloned().collect::<Vec<_>>();
        field_names.sort();

        let mut key_names = ConfigKey::iter()
            .map(|it| it.as_ref().to_string())
            .collect::<Vec<_>>();
        key_names.sort();

        assert_eq2!(key_names, field_names);
    }

    #[test]
    fn test_try_from_json() {
        let bag = OptionBag::try_from_json(
            r##"{
                "headerText": "Work email",
                "borderInFocusColor": "#102030",
                "assistivePosition": { "kind": "outsideField", "vertical": "below" },
                "notAKey": 42
            }"##,
        )
        .unwrap();
        assert_eq2!(bag.len(), 3);

        let options = ValidateFieldOptions::from(bag);
        assert_eq2!(options.header_text.as_deref(), Some("Work email"));
        assert_eq2!(
            options.border_in_focus_color,
            Some(FieldColor::Rgb(RgbValue::from_u8(0x10, 0x20, 0x30)))
        );
        assert_eq2!(
            options.assistive_position,
            Some(AssistiveViewPosition::OutsideField {
                vertical: OutsideVerticalAlignment::Below
            })
        );
    }

    #[test]
    fn test_try_from_json_errors() {
        assert!(matches!(
            OptionBag::try_from_json("{ not json"),
            Err(OptionBagErrorCouldNot::ParseJson(_))
        ));
        assert!(matches!(
            OptionBag::try_from_json("[1, 2]"),
            Err(OptionBagErrorCouldNot::UseNonObjectJson { .. })
        ));
    }

    #[test]
    fn test_mistyped_values_are_dropped_individually() {
        let bag = OptionBag::default()
            .with(ConfigKey::Spacing, json!("wide"))
            .with(ConfigKey::BackgroundColor, json!("not a color"))
            .with(ConfigKey::CornerRadius, json!(10.0))
            .with(ConfigKey::PlaceholderText, json!("you@example.com"));

        let options = ValidateFieldOptions::from(&bag);
        assert_eq2!(
            options,
            ValidateFieldOptions {
                corner_radius: Some(10.0),
                placeholder_text: Some("you@example.com".into()),
                ..Default::default()
            }
        );
    }
}
