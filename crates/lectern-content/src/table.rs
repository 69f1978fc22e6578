//! The [`ContentTable`]: topic keys mapped to ordered slide sequences.
//!
//! A table is validated when it is built and never mutated afterwards.
//! Lookups on unknown keys fail with [`Error::UnknownTopic`].

use std::collections::{BTreeMap, BTreeSet};

use lectern_core::{DeckProvider, Error, Result, TopicInfo};
use serde::Serialize;

use crate::slide::Slide;

// ============================================================================
// ContentTable
// ============================================================================

/// Read-only mapping from topic key to slides in presentation order.
///
/// Serializes to `{ "<topic>": [ { "title": ..., ... }, ... ], ... }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContentTable {
    topics: BTreeMap<String, Vec<Slide>>,
}

impl ContentTable {
    /// Start building a table.
    pub fn builder() -> ContentTableBuilder {
        ContentTableBuilder::default()
    }

    /// Build a table from an already-assembled map, checking every invariant.
    pub fn from_map(topics: BTreeMap<String, Vec<Slide>>) -> Result<Self> {
        let table = Self { topics };
        table.validate()?;
        Ok(table)
    }

    /// Wrap content that is correct by construction.
    pub(crate) fn from_validated(topics: BTreeMap<String, Vec<Slide>>) -> Self {
        let table = Self { topics };
        debug_assert!(table.validate().is_ok());
        table
    }

    /// The full set of topic keys.
    pub fn topics(&self) -> BTreeSet<&str> {
        self.topics.keys().map(String::as_str).collect()
    }

    /// Slides for `topic` in presentation order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTopic`] if `topic` is not in the table.
    pub fn slides(&self, topic: &str) -> Result<&[Slide]> {
        self.get(topic).ok_or_else(|| Error::unknown_topic(topic))
    }

    /// Slides for `topic`, or `None` if it is not in the table.
    pub fn get(&self, topic: &str) -> Option<&[Slide]> {
        self.topics.get(topic).map(Vec::as_slice)
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.topics.contains_key(topic)
    }

    /// Number of topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Total number of slides across all topics.
    pub fn slide_count(&self) -> usize {
        self.topics.values().map(Vec::len).sum()
    }

    /// One summary per topic, ordered by key. The title is the first slide's.
    pub fn topic_info(&self) -> Vec<TopicInfo> {
        self.iter()
            .map(|(id, slides)| TopicInfo {
                id: id.to_string(),
                slide_count: slides.len(),
                title: slides
                    .first()
                    .map(|s| s.title().to_string())
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Iterate `(topic, slides)` pairs ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Slide])> {
        self.topics
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Check every topic and slide invariant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] naming the first offending topic.
    pub fn validate(&self) -> Result<()> {
        for (key, slides) in &self.topics {
            validate_topic(key, slides)?;
        }
        Ok(())
    }

    /// Combine two tables. Topics may not overlap.
    pub fn merge(mut self, other: ContentTable) -> Result<Self> {
        for (key, slides) in other.topics {
            if self.topics.contains_key(&key) {
                return Err(Error::invalid_data(format!(
                    "topic '{key}' is defined more than once"
                )));
            }
            self.topics.insert(key, slides);
        }
        Ok(self)
    }
}

fn validate_topic(key: &str, slides: &[Slide]) -> Result<()> {
    if key.trim().is_empty() {
        return Err(Error::invalid_data("topic key is empty"));
    }
    if slides.is_empty() {
        return Err(Error::invalid_data(format!("topic '{key}' has no slides")));
    }
    for (i, slide) in slides.iter().enumerate() {
        if let Some(problem) = slide.problem() {
            return Err(Error::invalid_data(format!(
                "topic '{key}', slide {}: {problem}",
                i + 1
            )));
        }
    }
    Ok(())
}

impl DeckProvider for ContentTable {
    type Slide = Slide;

    fn topics(&self) -> BTreeSet<&str> {
        ContentTable::topics(self)
    }

    fn slides(&self, topic: &str) -> Result<&[Slide]> {
        ContentTable::slides(self, topic)
    }

    fn topic_info(&self) -> Vec<TopicInfo> {
        ContentTable::topic_info(self)
    }

    fn contains(&self, topic: &str) -> bool {
        ContentTable::contains(self, topic)
    }

    fn slide_count(&self) -> usize {
        ContentTable::slide_count(self)
    }
}

// ============================================================================
// ContentTableBuilder
// ============================================================================

/// Incremental construction of a [`ContentTable`].
///
/// Duplicate keys are reported by [`build`](Self::build) rather than
/// silently overwritten.
#[derive(Debug, Default)]
pub struct ContentTableBuilder {
    topics: BTreeMap<String, Vec<Slide>>,
    duplicates: Vec<String>,
}

impl ContentTableBuilder {
    /// Add a topic with its slides in presentation order.
    pub fn topic(mut self, key: impl Into<String>, slides: impl IntoIterator<Item = Slide>) -> Self {
        let key = key.into();
        if self.topics.contains_key(&key) {
            self.duplicates.push(key);
        } else {
            self.topics.insert(key, slides.into_iter().collect());
        }
        self
    }

    /// Validate and freeze the table.
    pub fn build(self) -> Result<ContentTable> {
        if let Some(key) = self.duplicates.first() {
            return Err(Error::invalid_data(format!(
                "topic '{key}' is defined more than once"
            )));
        }
        ContentTable::from_map(self.topics)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContentTable {
        ContentTable::builder()
            .topic(
                "alpha",
                [Slide::new("First"), Slide::new("Second").with_content("x")],
            )
            .topic("beta", [Slide::new("Only").with_bullets(["a", "b"])])
            .build()
            .unwrap()
    }

    #[test]
    fn test_topics() {
        let table = sample();
        assert_eq!(table.topics(), BTreeSet::from(["alpha", "beta"]));
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_slides_preserve_order() {
        let table = sample();
        let titles: Vec<_> = table
            .slides("alpha")
            .unwrap()
            .iter()
            .map(Slide::title)
            .collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn test_slides_unknown_topic() {
        let err = sample().slides("gamma").unwrap_err();
        assert!(err.is_unknown_topic());
        assert!(err.to_string().contains("gamma"));
    }

    #[test]
    fn test_get_absent() {
        assert!(sample().get("gamma").is_none());
        assert!(sample().get("beta").is_some());
    }

    #[test]
    fn test_builder_duplicate_topic() {
        let err = ContentTable::builder()
            .topic("alpha", [Slide::new("A")])
            .topic("alpha", [Slide::new("B")])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_builder_empty_topic() {
        let err = ContentTable::builder()
            .topic("alpha", Vec::new())
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("has no slides"));
    }

    #[test]
    fn test_builder_blank_key() {
        let err = ContentTable::builder()
            .topic(" ", [Slide::new("A")])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("topic key is empty"));
    }

    #[test]
    fn test_builder_invalid_slide_reports_position() {
        let err = ContentTable::builder()
            .topic("alpha", [Slide::new("A"), Slide::new("")])
            .build()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("topic 'alpha', slide 2"));
        assert!(msg.contains("title is empty"));
    }

    #[test]
    fn test_empty_builder_is_valid() {
        let table = ContentTable::builder().build().unwrap();
        assert!(table.is_empty());
        assert!(table.topics().is_empty());
    }

    #[test]
    fn test_merge_disjoint() {
        let other = ContentTable::builder()
            .topic("gamma", [Slide::new("G")])
            .build()
            .unwrap();
        let merged = sample().merge(other).unwrap();
        assert_eq!(merged.len(), 3);
        assert!(merged.contains("gamma"));
    }

    #[test]
    fn test_merge_overlap() {
        let other = ContentTable::builder()
            .topic("beta", [Slide::new("B")])
            .build()
            .unwrap();
        assert!(sample().merge(other).is_err());
    }

    #[test]
    fn test_deck_provider_impl() {
        let table = sample();
        let provider: &dyn DeckProvider<Slide = Slide> = &table;
        assert_eq!(provider.slide_count(), 3);
        assert!(provider.contains("beta"));
        let info = provider.topic_info();
        assert_eq!(info.len(), 2);
        assert_eq!(info[0].id, "alpha");
        assert_eq!(info[0].slide_count, 2);
        assert_eq!(info[0].title, "First");
    }

    #[test]
    fn test_slide_count_and_topic_info() {
        let table = sample();
        assert_eq!(table.slide_count(), 3);
        assert_eq!(ContentTable::default().slide_count(), 0);

        let info = table.topic_info();
        assert_eq!(info.len(), 2);
        assert_eq!(info[1].id, "beta");
        assert_eq!(info[1].slide_count, 1);
        assert_eq!(info[1].title, "Only");
        assert!(ContentTable::default().topic_info().is_empty());
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["beta"][0]["title"], "Only");
        assert_eq!(json["beta"][0]["ul"][1], "b");
        assert!(json["alpha"][0].get("content").is_none());
    }

    #[test]
    fn test_table_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ContentTable>();
    }
}
