//! Locale entry domain model.
//!
//! # Responsibility
//! - Define the per-language text payload attached to one article.
//!
//! # Invariants
//! - Fields are optional only to let the validator tell "absent from the
//!   loaded document" apart from "present but empty"; every accessor
//!   exposes an empty-string default so no other component performs
//!   presence checks.
//! - Entries created inside the core always carry all four fields.

use serde::{Deserialize, Serialize};

/// One field of a [`LocaleEntry`], with its document key name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleField {
    Title,
    Text,
    Link,
    LinkLabel,
}

impl LocaleField {
    /// All fields in document order.
    pub const ALL: [LocaleField; 4] = [
        LocaleField::Title,
        LocaleField::Text,
        LocaleField::Link,
        LocaleField::LinkLabel,
    ];

    /// Stable key name used in the persisted document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Text => "text",
            Self::Link => "link",
            Self::LinkLabel => "linkLabel",
        }
    }
}

/// Per-language text payload for one article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_label: Option<String>,
}

impl LocaleEntry {
    /// Creates an entry with all four fields present and empty, the
    /// default shape for lazily created entries.
    pub fn empty() -> Self {
        Self {
            title: Some(String::new()),
            text: Some(String::new()),
            link: Some(String::new()),
            link_label: Some(String::new()),
        }
    }

    /// Returns one field's value, empty when the field is unset.
    pub fn get(&self, field: LocaleField) -> &str {
        let value = match field {
            LocaleField::Title => &self.title,
            LocaleField::Text => &self.text,
            LocaleField::Link => &self.link,
            LocaleField::LinkLabel => &self.link_label,
        };
        value.as_deref().unwrap_or("")
    }

    /// Sets one field's value, making the field present.
    pub fn set(&mut self, field: LocaleField, value: impl Into<String>) {
        let slot = match field {
            LocaleField::Title => &mut self.title,
            LocaleField::Text => &mut self.text,
            LocaleField::Link => &mut self.link,
            LocaleField::LinkLabel => &mut self.link_label,
        };
        *slot = Some(value.into());
    }

    /// Lists fields absent from this entry (loaded from an incomplete
    /// document). An empty string counts as present.
    pub fn missing_fields(&self) -> Vec<LocaleField> {
        LocaleField::ALL
            .into_iter()
            .filter(|field| {
                match field {
                    LocaleField::Title => &self.title,
                    LocaleField::Text => &self.text,
                    LocaleField::Link => &self.link,
                    LocaleField::LinkLabel => &self.link_label,
                }
                .is_none()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{LocaleEntry, LocaleField};

    #[test]
    fn empty_entry_has_all_fields_present() {
        let entry = LocaleEntry::empty();
        assert!(entry.missing_fields().is_empty());
        assert_eq!(entry.get(LocaleField::Title), "");
    }

    #[test]
    fn deserialized_entry_reports_absent_fields() {
        let entry: LocaleEntry =
            serde_json::from_str(r#"{"title":"Sun","text":"body","linkLabel":"more"}"#)
                .expect("valid entry json");
        assert_eq!(entry.missing_fields(), vec![LocaleField::Link]);
        assert_eq!(entry.get(LocaleField::Link), "");
        assert_eq!(entry.get(LocaleField::LinkLabel), "more");
    }

    #[test]
    fn link_label_uses_camel_case_document_key() {
        let mut entry = LocaleEntry::empty();
        entry.set(LocaleField::LinkLabel, "Read more");
        let json = serde_json::to_string(&entry).expect("entry serializes");
        assert!(json.contains("\"linkLabel\":\"Read more\""));
    }
}
