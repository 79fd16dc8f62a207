//! The note record stored under each ID.

use serde::{Deserialize, Deserializer, Serialize};

/// A bookmarked item: where it came from, what it's called, a quoted passage,
/// and a free-text annotation.
///
/// All fields are free-form and may be empty. Fields missing from the backing
/// file, or stored as `null`, deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    #[serde(deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub quote: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub note: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Note {
    /// Creates a note from its four fields.
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        quote: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            quote: quote.into(),
            note: note.into(),
        }
    }

    /// Returns the lower-cased text that search matches against.
    ///
    /// Fields are joined with a single space, so a query may span the end of
    /// one field and the start of the next.
    pub fn search_text(&self) -> String {
        format!("{} {} {} {}", self.url, self.title, self.quote, self.note).to_lowercase()
    }

    /// Returns the title, falling back to the URL when the title is blank.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}
