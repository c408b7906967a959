use serde::{Deserialize, Serialize};
use std::fmt;

/// Clipboard format identifier (e.g. `public.utf8-plain-text`, `com.example.custom`).
///
/// Opaque and case-sensitive. Two identifiers are the same format only if
/// their strings are byte-equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatId(String);

impl FormatId {
    /// The well-known plain UTF-8 text identifier.
    pub const PLAIN_TEXT: &'static str = "public.utf8-plain-text";

    pub fn plain_text() -> Self {
        Self(Self::PLAIN_TEXT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FormatId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FormatId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for FormatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FormatId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FormatId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
