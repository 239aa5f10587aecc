//! Keyword resolver: question → topic content.

use serde::Serialize;
use serde_json::Value;

use crate::store::KnowledgeStore;

/// Returned when no topic name occurs in the question.
pub const FALLBACK_CONTENT: &str = "General JavaScript programming concepts and best practices.";

/// Content of the first topic (in store order) whose name is a substring
/// of the lowercased question.
///
/// Plain substring matching: "python" also matches "pythonic". That is
/// the matching policy, not a bug.
pub fn resolve<'a>(store: &'a KnowledgeStore, question: &str) -> &'a str {
    let question = question.to_lowercase();
    match store.iter().find(|(name, _)| question.contains(*name)) {
        Some((name, content)) => {
            tracing::debug!("🔍 Question matched topic '{name}'");
            content
        }
        None => {
            tracing::debug!("🔍 No topic matched, using fallback");
            FALLBACK_CONTENT
        }
    }
}

/// Resolver output plus the caller's echoed `originalData` fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    #[serde(rename = "courseContent")]
    pub course_content: String,
    pub topic: Value,
    pub question: Value,
    pub answer: Value,
}

/// Resolve `question` and echo `topic`, `question` and `answer` from
/// `original` untouched. Missing fields (or a non-object `original`)
/// echo as empty strings.
pub fn answer(store: &KnowledgeStore, question: &str, original: &Value) -> Answer {
    let echo = |key: &str| {
        original
            .get(key)
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()))
    };
    Answer {
        course_content: resolve(store, question).to_string(),
        topic: echo("topic"),
        question: echo("question"),
        answer: echo("answer"),
    }
}
