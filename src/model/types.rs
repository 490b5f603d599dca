use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A student seeking supervision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Main subject area; required, drives hard-exclusion checks.
    pub primary_subject: String,
    /// Optional secondary subject; empty or whitespace-only counts as absent.
    #[serde(default)]
    pub secondary_subject: Option<String>,
    /// Methodology tags the project needs; may be empty.
    #[serde(default)]
    pub methodology_needs: Vec<String>,
    /// Project abstract used for similarity and judgment scoring.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl Student {
    /// Secondary subject, filtered to a non-empty trimmed tag.
    pub fn secondary_subject_tag(&self) -> Option<&str> {
        self.secondary_subject
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// A supervisor with bounded capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supervisor {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Maximum number of students this supervisor may accept.
    pub capacity: u32,
    /// Subject/methodology tag -> confidence on a 1-5 scale.
    #[serde(default)]
    pub confidence: HashMap<String, u8>,
    /// Subjects this supervisor will never take; overrides all scoring.
    #[serde(default)]
    pub will_not_supervise: Vec<String>,
    /// Research interests used for similarity and judgment scoring.
    #[serde(default)]
    pub research_interests: String,
    /// Fallback-eligible flag. Tabular sources deliver this as a boolean,
    /// "true"/"1" text, or the integer 1.
    #[serde(default, deserialize_with = "deserialize_flexible_bool")]
    pub is_default: bool,
}

impl Supervisor {
    /// Recorded confidence for `tag`, matched case-insensitively.
    ///
    /// A recorded zero counts as unrecorded; the scale starts at 1.
    pub fn confidence_for(&self, tag: &str) -> Option<u8> {
        let tag = tag.trim();
        self.confidence
            .iter()
            .find_map(|(key, &value)| key.trim().eq_ignore_ascii_case(tag).then_some(value))
            .filter(|&value| value > 0)
    }

    /// Returns `true` if `subject` is in the hard-exclusion set.
    pub fn excludes(&self, subject: &str) -> bool {
        let subject = subject.trim();
        self.will_not_supervise
            .iter()
            .any(|entry| entry.trim().eq_ignore_ascii_case(subject))
    }
}

/// Deserializes a boolean that may arrive as a genuine bool, the strings
/// "true"/"1" (case-insensitive), or the integer 1.
///
/// Anything else is `false`; normalizing here keeps the quirk at the
/// ingestion boundary instead of leaking string comparisons into scoring.
pub fn deserialize_flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flexible {
        Bool(bool),
        Number(i64),
        Text(String),
    }

    Ok(match Flexible::deserialize(deserializer)? {
        Flexible::Bool(value) => value,
        Flexible::Number(value) => value == 1,
        Flexible::Text(value) => {
            let value = value.trim();
            value.eq_ignore_ascii_case("true") || value == "1"
        }
    })
}
