// src/slides/record.rs
// SlideRecord model and field-level extraction from raw JSON objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Text color scheme used on top of a slide image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTheme {
    #[default]
    Light,
    Dark,
}

impl TextTheme {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(TextTheme::Light),
            "dark" => Some(TextTheme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextTheme::Light => "light",
            TextTheme::Dark => "dark",
        }
    }
}

/// Overall brightness of the slide image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageTone {
    Light,
    Dark,
}

impl ImageTone {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(ImageTone::Light),
            "dark" => Some(ImageTone::Dark),
            _ => None,
        }
    }
}

/// Background and text colors applied to the call-to-action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPalette {
    pub background: &'static str,
    pub text: &'static str,
}

pub const DARK_BUTTON: ButtonPalette = ButtonPalette {
    background: "#0D474E",
    text: "#ffffff",
};

pub const LIGHT_BUTTON: ButtonPalette = ButtonPalette {
    background: "#ffffff",
    text: "#0D474E",
};

/// Authored `buttonColor` value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum ButtonColor {
    #[default]
    Unset,
    Dark,
    Light,
    /// Kept verbatim so it can be reported, but produces no override
    Unrecognized(String),
}

impl ButtonColor {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" => ButtonColor::Unset,
            "dark" => ButtonColor::Dark,
            "light" => ButtonColor::Light,
            _ => ButtonColor::Unrecognized(s.to_string()),
        }
    }

    pub fn palette(&self) -> Option<ButtonPalette> {
        match self {
            ButtonColor::Dark => Some(DARK_BUTTON),
            ButtonColor::Light => Some(LIGHT_BUTTON),
            ButtonColor::Unset | ButtonColor::Unrecognized(_) => None,
        }
    }
}

impl From<ButtonColor> for String {
    fn from(color: ButtonColor) -> Self {
        match color {
            ButtonColor::Unset => String::new(),
            ButtonColor::Dark => "dark".to_string(),
            ButtonColor::Light => "light".to_string(),
            ButtonColor::Unrecognized(raw) => raw,
        }
    }
}

/// Single call-to-action link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Attribution shown under a slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Credit {
    Plain(String),
    Structured(StructuredCredit),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredCredit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl StructuredCredit {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.source.is_none() && self.text.is_none() && self.image_url.is_none()
    }
}

/// Slide-scoped overrides for the embedded search form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label: Option<String>,
}

/// One unit of carousel content.
///
/// Every field is optional at the source; defaults are applied when the
/// record is rendered, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_tone: Option<ImageTone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_theme: Option<TextTheme>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
    pub button_color: ButtonColor,
    pub include_search: bool,
    pub search: SearchOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<Credit>,
    pub is_active: bool,
}

impl SlideRecord {
    /// Build a record from a raw JSON object.
    ///
    /// Never fails: each field is read independently and dropped when it is
    /// missing, empty, or of the wrong shape.
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            id: text_field(obj, "id"),
            title: text_field(obj, "title"),
            tagline: text_field(obj, "tagline"),
            eyebrow: text_field(obj, "eyebrow"),
            aria_label: text_field(obj, "ariaLabel"),
            image: text_field(obj, "image"),
            image_tone: text_field(obj, "imageTone").and_then(|t| ImageTone::parse(&t)),
            text_theme: text_field(obj, "textTheme").and_then(|t| TextTheme::parse(&t)),
            tags: tags_field(obj),
            tags_label: text_field(obj, "tagsLabel"),
            cta: cta_field(obj),
            button_color: text_field(obj, "buttonColor")
                .map(|c| ButtonColor::parse(&c))
                .unwrap_or_default(),
            include_search: obj.get("includeSearch").is_some_and(truthy),
            search: SearchOptions {
                label: text_field(obj, "searchLabel"),
                placeholder: text_field(obj, "searchPlaceholder"),
                action: text_field(obj, "searchAction"),
                method: text_field(obj, "searchMethod"),
                name: text_field(obj, "searchName"),
                button_label: text_field(obj, "searchButtonLabel"),
            },
            credit: credit_field(obj),
            is_active: obj.get("isActive").is_some_and(truthy),
        }
    }

    /// Text theme after applying the image-tone fallback.
    ///
    /// A light image needs dark text; anything else gets light text.
    pub fn resolved_text_theme(&self) -> TextTheme {
        if let Some(theme) = self.text_theme {
            return theme;
        }
        match self.image_tone {
            Some(ImageTone::Light) => TextTheme::Dark,
            _ => TextTheme::Light,
        }
    }
}

/// JSON truthiness: false, null, 0, "" and NaN are falsy
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(text_value)
}

fn tags_field(obj: &Map<String, Value>) -> Vec<String> {
    obj.get("tags")
        .and_then(Value::as_array)
        .map(|tags| tags.iter().filter_map(text_value).collect())
        .unwrap_or_default()
}

fn cta_field(obj: &Map<String, Value>) -> Option<CallToAction> {
    if let Some(cta) = obj.get("cta").and_then(Value::as_object) {
        return text_field(cta, "text").map(|text| CallToAction {
            text,
            href: text_field(cta, "href"),
            icon: text_field(cta, "icon"),
        });
    }

    // Flat authoring form
    text_field(obj, "ctaText").map(|text| CallToAction {
        text,
        href: text_field(obj, "ctaHref"),
        icon: text_field(obj, "ctaIcon"),
    })
}

fn credit_field(obj: &Map<String, Value>) -> Option<Credit> {
    match obj.get("credit")? {
        Value::String(s) if !s.trim().is_empty() => Some(Credit::Plain(s.clone())),
        Value::Object(credit) => {
            let structured = StructuredCredit {
                prefix: text_field(credit, "prefix"),
                name: text_field(credit, "name"),
                profile_url: text_field(credit, "profileUrl"),
                image_url: text_field(credit, "imageUrl"),
                image_label: text_field(credit, "imageLabel"),
                source: text_field(credit, "source"),
                text: text_field(credit, "text"),
            };
            (!structured.is_empty()).then_some(Credit::Structured(structured))
        }
        _ => None,
    }
}
