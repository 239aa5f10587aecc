//! Topic reference graph.
//!
//! One node per stored topic, numbered in store order. Topic `i` gets an
//! edge to topic `j` when `j`'s name appears anywhere in `i`'s content
//! (case-insensitive). Quadratic in the number of topics; the store is
//! small.

use serde::Serialize;

use crate::store::{COURSE_MARKER, KnowledgeStore};

/// Characters kept in a node's content preview.
pub const PREVIEW_CHARS: usize = 100;

/// Label carried by every edge.
pub const EDGE_LABEL: &str = "references";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Topic,
    Course,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: usize,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub content_preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub topics: usize,
    pub courses: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub stats: GraphStats,
}

/// Build a snapshot graph of the store as it is right now.
pub fn build_graph(store: &KnowledgeStore) -> KnowledgeGraph {
    let nodes: Vec<GraphNode> = store
        .iter()
        .enumerate()
        .map(|(id, (name, content))| GraphNode {
            id,
            label: title_case(name),
            kind: if content.contains(COURSE_MARKER) {
                NodeKind::Course
            } else {
                NodeKind::Topic
            },
            content_preview: preview(content),
        })
        .collect();

    let lowered: Vec<(String, String)> = store
        .iter()
        .map(|(name, content)| (name.to_lowercase(), content.to_lowercase()))
        .collect();

    let mut edges = Vec::new();
    for (i, (_, content)) in lowered.iter().enumerate() {
        for (j, (name, _)) in lowered.iter().enumerate() {
            if i != j && content.contains(name.as_str()) {
                edges.push(GraphEdge {
                    from: i,
                    to: j,
                    label: EDGE_LABEL.to_string(),
                });
            }
        }
    }

    let courses = nodes.iter().filter(|n| n.kind == NodeKind::Course).count();
    let stats = GraphStats {
        total_nodes: nodes.len(),
        total_edges: edges.len(),
        topics: nodes.len() - courses,
        courses,
    };
    tracing::debug!(
        "🕸️ Knowledge graph: {} nodes, {} edges",
        stats.total_nodes,
        stats.total_edges
    );

    KnowledgeGraph { nodes, edges, stats }
}

/// Upper-case the first letter of every word, lower-case the rest.
/// A word starts after any non-alphabetic character.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force_edges(store: &KnowledgeStore) -> Vec<(usize, usize)> {
        let entries: Vec<(&str, &str)> = store.iter().collect();
        let mut out = Vec::new();
        for (i, (_, content)) in entries.iter().enumerate() {
            for (j, (name, _)) in entries.iter().enumerate() {
                if i != j && content.to_lowercase().contains(&name.to_lowercase()) {
                    out.push((i, j));
                }
            }
        }
        out
    }

    #[test]
    fn test_seed_graph_edges() {
        let store = KnowledgeStore::seeded();
        let graph = build_graph(&store);
        let edges: Vec<(usize, usize)> = graph.edges.iter().map(|e| (e.from, e.to)).collect();

        // python → variables, functions; loops → arrays, objects, python;
        // classes → python; async → python
        assert_eq!(
            edges,
            vec![(4, 0), (4, 1), (5, 2), (5, 3), (5, 4), (6, 4), (7, 4)]
        );
        assert_eq!(edges, brute_force_edges(&store));
        assert!(graph.edges.iter().all(|e| e.label == "references"));
    }

    #[test]
    fn test_seed_graph_variables_has_no_outgoing_edges() {
        let graph = build_graph(&KnowledgeStore::seeded());
        assert!(graph.edges.iter().all(|e| e.from != 0));
    }

    #[test]
    fn test_seed_graph_stats() {
        let graph = build_graph(&KnowledgeStore::seeded());
        assert_eq!(
            graph.stats,
            GraphStats {
                total_nodes: 8,
                total_edges: 7,
                topics: 8,
                courses: 0,
            }
        );
    }

    #[test]
    fn test_nodes_follow_store_order() {
        let graph = build_graph(&KnowledgeStore::seeded());
        let labels: Vec<&str> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Variables", "Functions", "Arrays", "Objects", "Python", "Loops", "Classes",
                "Async"
            ]
        );
        assert!(graph.nodes.iter().enumerate().all(|(i, n)| n.id == i));
    }

    #[test]
    fn test_inserted_course_node_and_edges() {
        let mut store = KnowledgeStore::seeded();
        store.insert("Course: Intro To Testing\nWe test Arrays and async code.");
        let graph = build_graph(&store);

        let node = &graph.nodes[8];
        assert_eq!(node.label, "Intro To Testing");
        assert_eq!(node.kind, NodeKind::Course);
        assert_eq!(graph.stats.courses, 1);
        assert_eq!(graph.stats.topics, 8);

        let from_course: Vec<usize> = graph
            .edges
            .iter()
            .filter(|e| e.from == 8)
            .map(|e| e.to)
            .collect();
        assert_eq!(from_course, vec![2, 7]);
        assert_eq!(
            graph.edges.iter().map(|e| (e.from, e.to)).collect::<Vec<_>>(),
            brute_force_edges(&store)
        );
    }

    #[test]
    fn test_build_graph_is_idempotent() {
        let store = KnowledgeStore::seeded();
        assert_eq!(build_graph(&store), build_graph(&store));
    }

    #[test]
    fn test_empty_store_graph() {
        let graph = build_graph(&KnowledgeStore::new());
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
        assert_eq!(graph.stats.total_nodes, 0);
    }

    #[test]
    fn test_preview_truncation() {
        let short = "a".repeat(PREVIEW_CHARS);
        assert_eq!(preview(&short), short);

        let long = "b".repeat(PREVIEW_CHARS + 1);
        assert_eq!(preview(&long), format!("{}...", "b".repeat(PREVIEW_CHARS)));

        let wide = "é".repeat(PREVIEW_CHARS + 5);
        assert_eq!(preview(&wide).chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_seed_previews() {
        let graph = build_graph(&KnowledgeStore::seeded());
        // variables content is longer than 100 chars, arrays is shorter.
        assert!(graph.nodes[0].content_preview.ends_with("..."));
        assert!(!graph.nodes[2].content_preview.ends_with("..."));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("intro to testing"), "Intro To Testing");
        assert_eq!(title_case("c++ and rust-lang"), "C++ And Rust-Lang");
        assert_eq!(title_case("es6 features"), "Es6 Features");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_node_serializes_type_field() {
        let graph = build_graph(&KnowledgeStore::seeded());
        let value = serde_json::to_value(&graph).unwrap();
        assert_eq!(value["nodes"][0]["type"], "topic");
        assert_eq!(value["nodes"][0]["id"], 0);
        assert_eq!(value["edges"][0]["label"], "references");
        assert_eq!(value["stats"]["total_edges"], 7);
    }
}
