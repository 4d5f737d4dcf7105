use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::TagError;

static TAG_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\w+$").expect("tag token regex is valid"));

/// A single hashtag as it appears in a file name, e.g. `#sunset`.
///
/// The stored form is always lowercase and always starts with `#`, so two
/// tokens compare equal exactly when their spellings match case-insensitively.
/// Ordering is plain string ordering of that canonical form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagToken(String);

impl TagToken {
    /// Validate an exact `#word` token.
    ///
    /// # Errors
    /// * `TagError::Empty` for empty input.
    /// * `TagError::Invalid` when the text is not `#` followed by word characters.
    pub fn new(text: &str) -> Result<Self, TagError> {
        if text.is_empty() {
            return Err(TagError::Empty);
        }
        let lowered = text.to_lowercase();
        if !TAG_TOKEN_RE.is_match(&lowered) {
            return Err(TagError::Invalid { tag: text.to_string() });
        }
        Ok(Self(lowered))
    }

    /// Normalize free-form user input (`Sunset`, ` #sunset `) into a token.
    ///
    /// # Errors
    /// Same as [`TagToken::new`]; whitespace-only input or a bare `#` is `TagError::Empty`.
    pub fn normalize(input: &str) -> Result<Self, TagError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed == "#" {
            return Err(TagError::Empty);
        }
        if trimmed.starts_with('#') {
            Self::new(trimmed)
        } else {
            Self::new(&format!("#{trimmed}"))
        }
    }

    /// Build a token from text the grammar already matched as `#\w+`.
    pub(crate) fn from_matched(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tag text without the leading `#`
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0[1..]
    }

    /// The priority this token encodes, if it is one of `#1`..`#5`
    #[must_use]
    pub fn priority(&self) -> Option<Priority> {
        match self.name().as_bytes() {
            [digit @ b'1'..=b'5'] => Some(Priority(digit - b'0')),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_priority(&self) -> bool {
        self.priority().is_some()
    }
}

impl fmt::Display for TagToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TagToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for TagToken {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}

impl TryFrom<String> for TagToken {
    type Error = TagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::normalize(&value)
    }
}

impl From<TagToken> for String {
    fn from(token: TagToken) -> Self {
        token.0
    }
}

/// Mutually exclusive rank `#1`..`#5`; at most one survives canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// # Errors
    /// Returns `TagError::PriorityOutOfRange` unless `1 <= value <= 5`.
    pub const fn new(value: u8) -> Result<Self, TagError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(TagError::PriorityOutOfRange { value })
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The hashtag spelling of this priority, e.g. `#3`
    #[must_use]
    pub fn tag(self) -> TagToken {
        TagToken(format!("#{}", self.0))
    }
}

impl TryFrom<u8> for Priority {
    type Error = TagError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
