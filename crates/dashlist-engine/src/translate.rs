//! Localization capability.
//!
//! Pages never reach for an ambient message catalog; every string goes
//! through a `Translate` passed in by the caller. Messages carry an English
//! default so an empty catalog still renders a usable screen.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"));

/// A translatable message: stable id plus English default text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Message {
    pub id: &'static str,
    pub default: &'static str,
}

impl Message {
    pub const fn new(id: &'static str, default: &'static str) -> Self {
        Self { id, default }
    }
}

pub trait Translate {
    fn translate(&self, message: &Message, params: &[(&str, String)]) -> String;
}

/// Uses each message's default text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl Translate for DefaultMessages {
    fn translate(&self, message: &Message, params: &[(&str, String)]) -> String {
        interpolate(message.default, params)
    }
}

/// Message overrides by id, falling back to the default text.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(id.into(), text.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for Catalog {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl Translate for Catalog {
    fn translate(&self, message: &Message, params: &[(&str, String)]) -> String {
        let template = self
            .entries
            .get(message.id)
            .map(String::as_str)
            .unwrap_or(message.default);
        interpolate(template, params)
    }
}

/// Replace `{name}` placeholders. Unknown placeholders are left as written.
pub fn interpolate(template: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            params
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.clone())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTER: Message = Message::new("test.counter", "{count}/{max} channels used");

    #[test]
    fn test_default_messages_interpolate_params() {
        let text = DefaultMessages.translate(
            &COUNTER,
            &[("count", "1".to_string()), ("max", "3".to_string())],
        );
        assert_eq!(text, "1/3 channels used");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        assert_eq!(
            interpolate("{count} of {total}", &[("count", "2".to_string())]),
            "2 of {total}"
        );
    }

    #[test]
    fn test_catalog_overrides_by_id() {
        let catalog = Catalog::new().with("test.counter", "{count} von {max} Kanälen");
        let text = catalog.translate(
            &COUNTER,
            &[("count", "1".to_string()), ("max", "3".to_string())],
        );
        assert_eq!(text, "1 von 3 Kanälen");

        let other = Message::new("test.other", "Untouched");
        assert_eq!(catalog.translate(&other, &[]), "Untouched");
    }
}
