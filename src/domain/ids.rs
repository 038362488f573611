//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trello card short link
///
/// The stable short identifier of a card. It keys every per-card lookup
/// table built during a run and is accepted by the Trello API wherever a
/// card id is expected.
///
/// # Examples
///
/// ```
/// use trello2youtrack::domain::ids::ShortLink;
/// use std::str::FromStr;
///
/// let link = ShortLink::from_str("a1B2c3D4").unwrap();
/// assert_eq!(link.as_str(), "a1B2c3D4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortLink(String);

impl ShortLink {
    /// Creates a new ShortLink
    ///
    /// Short links are URL path segments, so blanks and slashes are rejected.
    pub fn new(link: impl Into<String>) -> Result<Self, String> {
        let link = link.into();
        if link.trim().is_empty() {
            return Err("Card short link cannot be empty".to_string());
        }
        if link.contains('/') || link.chars().any(char::is_whitespace) {
            return Err(format!("Invalid card short link: {link}"));
        }
        Ok(Self(link))
    }

    /// Returns the short link as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShortLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShortLink {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ShortLink {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShortLink> for String {
    fn from(link: ShortLink) -> Self {
        link.0
    }
}

impl AsRef<str> for ShortLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
