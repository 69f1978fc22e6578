//! Core traits for Lectern content abstraction.
//!
//! [`DeckProvider`] is the read-only contract a rendering layer consumes:
//! a fixed set of topic keys, each mapping to an ordered slide sequence.
//! [`ConfigProvider`] abstracts where an application finds its content.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Summary information about one topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicInfo {
    /// Topic key.
    pub id: String,
    /// Number of slides in the topic.
    pub slide_count: usize,
    /// Title of the first slide.
    pub title: String,
}

/// Trait for read-only slide content access.
///
/// Implementations are immutable once built, so any number of readers may
/// share one provider without coordination.
///
/// # Example
///
/// ```rust,ignore
/// struct MyDecks { /* ... */ }
///
/// impl DeckProvider for MyDecks {
///     type Slide = MySlide;
///
///     fn topics(&self) -> BTreeSet<&str> {
///         // Return every topic key
///     }
///
///     fn slides(&self, topic: &str) -> Result<&[MySlide]> {
///         // Return slides in presentation order, or Error::UnknownTopic
///     }
///
///     fn topic_info(&self) -> Vec<TopicInfo> {
///         // Summaries for listing
///     }
/// }
/// ```
pub trait DeckProvider: Send + Sync {
    /// Slide record type handed to renderers.
    type Slide: Serialize + Send + Sync;

    /// The full set of available topic keys.
    fn topics(&self) -> BTreeSet<&str>;

    /// Slides for `topic` in presentation order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTopic`](crate::Error::UnknownTopic) when the
    /// key is not in the table.
    fn slides(&self, topic: &str) -> Result<&[Self::Slide]>;

    /// Summaries of every topic, ordered by key.
    fn topic_info(&self) -> Vec<TopicInfo>;

    /// Whether `topic` is a known key.
    fn contains(&self, topic: &str) -> bool {
        self.slides(topic).is_ok()
    }

    /// Total number of slides across all topics.
    fn slide_count(&self) -> usize {
        self.topics()
            .into_iter()
            .filter_map(|t| self.slides(t).ok())
            .map(<[Self::Slide]>::len)
            .sum()
    }

    /// Returns the content type name for this provider (e.g., "topic").
    fn content_type_name(&self) -> &str {
        "topic"
    }

    /// Returns the plural content type name (e.g., "topics").
    fn content_type_name_plural(&self) -> &str {
        "topics"
    }
}

/// Trait for application configuration.
///
/// The CLI is generic over this so embedding applications can supply their
/// own configuration type.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use lectern_core::traits::ConfigProvider;
///
/// #[derive(Clone)]
/// struct CourseConfig {
///     decks: Option<PathBuf>,
/// }
///
/// impl ConfigProvider for CourseConfig {
///     fn project_name(&self) -> &str {
///         "practical-frontend"
///     }
///
///     fn content_source(&self) -> Option<PathBuf> {
///         self.decks.clone()
///     }
/// }
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used in messages and default paths.
    fn project_name(&self) -> &str;

    /// File or directory holding content tables.
    ///
    /// `None` means the built-in table is used.
    fn content_source(&self) -> Option<PathBuf>;

    /// Whether slide text should be shown with markup stripped by default.
    fn plain_output(&self) -> bool {
        false
    }
}
