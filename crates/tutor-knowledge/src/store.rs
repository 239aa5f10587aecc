//! Topic store: insertion-ordered name → content map.

use indexmap::IndexMap;

use crate::seed::SEED_TOPICS;

/// Marker line that names a course inside inserted content.
pub const COURSE_MARKER: &str = "Course:";

/// In-memory knowledge store.
///
/// Iteration order is insertion order. Re-inserting an existing name
/// replaces its content but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeStore {
    topics: IndexMap<String, String>,
}

impl KnowledgeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the built-in seed topics.
    pub fn seeded() -> Self {
        let topics = SEED_TOPICS
            .iter()
            .map(|(name, content)| (name.to_string(), content.to_string()))
            .collect();
        Self { topics }
    }

    /// Insert structured content under the course name found in it.
    ///
    /// Returns the extracted name, or `None` when the content has no
    /// `Course:` line. An empty extracted name is returned but not stored.
    pub fn insert(&mut self, content: &str) -> Option<String> {
        let name = extract_course_name(content)?;
        if name.is_empty() {
            tracing::debug!("Course line without a name, nothing stored");
            return Some(name);
        }
        let replaced = self.topics.insert(name.clone(), content.to_string());
        tracing::info!(
            "📚 Course '{}' {} ({} topics)",
            name,
            if replaced.is_some() { "replaced" } else { "added" },
            self.topics.len()
        );
        Some(name)
    }

    /// Topic names in insertion order.
    pub fn list_topics(&self) -> Vec<String> {
        self.topics.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.topics.get(name).map(String::as_str)
    }

    /// `(name, content)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.topics.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

/// Find the course name in structured content.
///
/// The first line starting with `Course:` wins. Every marker on that line
/// is removed, the remainder trimmed and lowercased.
pub fn extract_course_name(content: &str) -> Option<String> {
    content
        .split('\n')
        .find(|line| line.starts_with(COURSE_MARKER))
        .map(|line| line.replace(COURSE_MARKER, "").trim().to_lowercase())
}
