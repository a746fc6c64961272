use crate::error::StyleError;
use crate::slug::{create, create_github, create_gitlab};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anchor naming convention used by a renderer
///
/// Each style maps to exactly one slug function; the enum only selects
/// which one runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SlugStyle {
    /// [`create`]: separator runs collapse to one dash, no dash at the edges
    #[default]
    Generic,
    /// [`create_github`]: one dash per space or dash, other punctuation dropped
    GitHub,
    /// [`create_gitlab`]: like GitHub, but dash runs collapse
    GitLab,
}

impl SlugStyle {
    pub const ALL: [SlugStyle; 3] = [SlugStyle::Generic, SlugStyle::GitHub, SlugStyle::GitLab];

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            SlugStyle::Generic => "generic",
            SlugStyle::GitHub => "github",
            SlugStyle::GitLab => "gitlab",
        }
    }

    /// Build the anchor name for `text` using this style.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_core::SlugStyle;
    ///
    /// assert_eq!(SlugStyle::Generic.anchor("main.go"), "main-go");
    /// assert_eq!(SlugStyle::GitHub.anchor("main.go"), "maingo");
    /// assert_eq!(SlugStyle::GitLab.anchor("A  B"), "a-b");
    /// ```
    pub fn anchor(self, text: &str) -> String {
        let slug = match self {
            SlugStyle::Generic => create(text),
            SlugStyle::GitHub => create_github(text),
            SlugStyle::GitLab => create_gitlab(text),
        };
        log::trace!("{} anchor for {:?}: {:?}", self, text, slug);
        slug
    }
}

impl fmt::Display for SlugStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SlugStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name.to_ascii_lowercase().as_str() {
            "generic" | "default" => Ok(SlugStyle::Generic),
            "github" | "gfm" => Ok(SlugStyle::GitHub),
            "gitlab" => Ok(SlugStyle::GitLab),
            _ => Err(StyleError::UnknownStyle(name.to_string())),
        }
    }
}

impl TryFrom<String> for SlugStyle {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SlugStyle> for String {
    fn from(style: SlugStyle) -> Self {
        style.name().to_string()
    }
}
