//! Abstract-meaning-representation graphs in MRP interchange form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One sentence's meaning graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeaningGraph {
    /// Graph identifier assigned by the server.
    pub id: String,
    /// The sentence the graph was parsed from, when echoed back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Concept nodes.
    #[serde(default)]
    pub nodes: Vec<MeaningNode>,
    /// Directed, labeled relations between nodes.
    #[serde(default)]
    pub edges: Vec<MeaningEdge>,
    /// Node ids of the graph root(s).
    #[serde(default)]
    pub tops: Vec<usize>,
    /// Interchange framework label, e.g. `"amr"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
}

/// A concept node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeaningNode {
    /// Node id, referenced by edges and `tops`.
    pub id: usize,
    /// Concept label, e.g. `"希望-01"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Attribute names, parallel to `values`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,
    /// Attribute values, parallel to `properties`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Value>,
    /// Character ranges of `input` this node is anchored to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anchors: Vec<Anchor>,
}

/// A character range within the graph's `input` sentence, end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    /// First character of the range.
    pub from: usize,
    /// One past the last character of the range.
    pub to: usize,
}

/// A directed, labeled edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeaningEdge {
    /// Id of the source node.
    pub source: usize,
    /// Id of the target node.
    pub target: usize,
    /// Relation label, e.g. `"arg0"`.
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_graph_decodes_nodes_edges_and_tops() {
        let graph: MeaningGraph = serde_json::from_value(json!({
            "id": "0",
            "input": "男孩希望女孩相信他。",
            "nodes": [
                {"id": 0, "label": "希望-01", "anchors": [{"from": 2, "to": 4}]},
                {"id": 1, "label": "男孩", "anchors": [{"from": 0, "to": 2}]},
                {"id": 2, "label": "相信-01", "anchors": [{"from": 6, "to": 8}]}
            ],
            "edges": [
                {"source": 0, "target": 1, "label": "arg0"},
                {"source": 0, "target": 2, "label": "arg1"}
            ],
            "tops": [0],
            "framework": "amr"
        }))
        .unwrap();

        assert_eq!(graph.tops, vec![0]);
        assert_eq!(graph.nodes[0].label.as_deref(), Some("希望-01"));
        assert_eq!(graph.nodes[1].anchors, vec![Anchor { from: 0, to: 2 }]);
        assert_eq!(graph.edges[1].label, "arg1");
        assert_eq!(graph.framework.as_deref(), Some("amr"));
    }

    #[test]
    fn test_sparse_graph_fields_default() {
        let graph: MeaningGraph = serde_json::from_value(json!({"id": "3"})).unwrap();
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
        assert!(graph.tops.is_empty());
        assert!(graph.input.is_none());
    }

    #[test]
    fn test_node_properties_stay_parallel() {
        let node: MeaningNode = serde_json::from_value(json!({
            "id": 4,
            "label": "国家",
            "properties": ["wiki"],
            "values": ["Q148"]
        }))
        .unwrap();
        assert_eq!(node.properties.len(), node.values.len());
        assert_eq!(node.values[0], json!("Q148"));
    }
}
