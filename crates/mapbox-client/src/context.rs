//! Locale-suffixed names
//!
//! MapBox returns one copy of the naming keys per requested language:
//!
//! ```json
//! {"text": "Paris", "text_en": "Paris", "language_en": "en", "text_fr": "Paris", "language_fr": "fr"}
//! ```
//!
//! [`LocalizedNames`] is flattened into features and context entries. The
//! leftover keys arrive as a JSON map; the `text`, `place_name` and
//! `language` keys are then grouped by suffix into one [`LocalizedText`] per
//! locale, the unsuffixed group being the default. Serializing writes the
//! same flat keys back out.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

const TEXT: &str = "text";
const PLACE_NAME: &str = "place_name";
const LANGUAGE: &str = "language";

/// Names for a single locale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    /// Key suffix, e.g. `fr` for `text_fr`; `None` for the unsuffixed keys
    pub locale: Option<String>,
    /// Value of the `language` key for this locale
    pub language: Option<String>,
    pub text: Option<String>,
    /// Features only
    pub place_name: Option<String>,
    pub is_default: bool,
}

impl LocalizedText {
    fn default_record() -> Self {
        Self {
            is_default: true,
            ..Default::default()
        }
    }

    fn for_locale(locale: &str) -> Self {
        Self {
            locale: Some(locale.to_string()),
            ..Default::default()
        }
    }

    fn set(&mut self, field: &str, value: String) {
        match field {
            TEXT => self.text = Some(value),
            PLACE_NAME => self.place_name = Some(value),
            _ => self.language = Some(value),
        }
    }

    fn key(&self, field: &str) -> String {
        match &self.locale {
            Some(locale) => format!("{field}_{locale}"),
            None => field.to_string(),
        }
    }
}

/// All locale variants of an entity's names; the default record comes first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedNames {
    records: Vec<LocalizedText>,
}

impl Default for LocalizedNames {
    fn default() -> Self {
        Self {
            records: vec![LocalizedText::default_record()],
        }
    }
}

impl LocalizedNames {
    pub fn records(&self) -> &[LocalizedText] {
        &self.records
    }

    pub fn default_record(&self) -> &LocalizedText {
        // The default record is created first and never removed
        &self.records[0]
    }

    /// Record for a locale suffix such as `fr`
    pub fn get(&self, locale: &str) -> Option<&LocalizedText> {
        self.records
            .iter()
            .find(|r| r.locale.as_deref() == Some(locale))
    }

    /// Unsuffixed `text`
    pub fn text(&self) -> Option<&str> {
        self.default_record().text.as_deref()
    }

    /// Unsuffixed `place_name`
    pub fn place_name(&self) -> Option<&str> {
        self.default_record().place_name.as_deref()
    }

    /// Group the naming keys of `map` by locale suffix; other keys are ignored
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mut default = LocalizedText::default_record();
        let mut by_locale: BTreeMap<&str, LocalizedText> = BTreeMap::new();

        for (key, value) in map {
            let Some((field, locale)) = split_key(key) else {
                continue;
            };
            let Some(value) = value.as_str() else {
                continue;
            };
            match locale {
                None => default.set(field, value.to_string()),
                Some(locale) => by_locale
                    .entry(locale)
                    .or_insert_with(|| LocalizedText::for_locale(locale))
                    .set(field, value.to_string()),
            }
        }

        let mut records = Vec::with_capacity(by_locale.len() + 1);
        records.push(default);
        records.extend(by_locale.into_values());
        Self { records }
    }

    /// Write the records back as flat `text`/`text_{locale}`... keys
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for record in &self.records {
            for (field, value) in [
                (TEXT, &record.text),
                (PLACE_NAME, &record.place_name),
                (LANGUAGE, &record.language),
            ] {
                if let Some(value) = value {
                    map.insert(record.key(field), Value::String(value.clone()));
                }
            }
        }
        map
    }
}

/// `text_fr` -> (`text`, Some(`fr`)), `text` -> (`text`, None)
fn split_key(key: &str) -> Option<(&'static str, Option<&str>)> {
    for field in [PLACE_NAME, TEXT, LANGUAGE] {
        if key == field {
            return Some((field, None));
        }
        if let Some(locale) = key
            .strip_prefix(field)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            if !locale.is_empty() {
                return Some((field, Some(locale)));
            }
        }
    }
    None
}

impl<'de> Deserialize<'de> for LocalizedNames {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_map(&map))
    }
}

impl Serialize for LocalizedNames {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map = self.to_map();
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (key, value) in &map {
            out.serialize_entry(key, value)?;
        }
        out.end()
    }
}
