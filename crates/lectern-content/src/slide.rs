//! The [`Slide`] record.

use lectern_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// One displayable unit of a presentation.
///
/// `content` and `ul` are independent: a slide may carry either, neither,
/// or both. Text fields may contain inline markup (see [`crate::markup`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Slide {
    title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    ul: Option<Vec<String>>,
}

impl Slide {
    /// Create a slide with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
            ul: None,
        }
    }

    /// Set the body text.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the bullet list, in presentation order.
    pub fn with_bullets<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ul = Some(items.into_iter().map(Into::into).collect());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn ul(&self) -> Option<&[String]> {
        self.ul.as_deref()
    }

    /// Whether the slide has body text or bullets.
    pub fn has_body(&self) -> bool {
        self.content.is_some() || self.ul.is_some()
    }

    /// Check the slide invariants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] for a blank title, blank content,
    /// an empty bullet list, or a blank bullet item.
    pub fn validate(&self) -> Result<()> {
        match self.problem() {
            Some(problem) => Err(Error::invalid_data(problem)),
            None => Ok(()),
        }
    }

    pub(crate) fn problem(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("title is empty".to_string());
        }
        if self.content.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Some(format!("'{}': content is empty", self.title));
        }
        if let Some(items) = &self.ul {
            if items.is_empty() {
                return Some(format!("'{}': bullet list is empty", self.title));
            }
            if let Some(pos) = items.iter().position(|i| i.trim().is_empty()) {
                return Some(format!("'{}': bullet {} is empty", self.title, pos + 1));
            }
        }
        None
    }
}
