//! Lineage artifact.
//!
//! A minimal provenance graph connecting a source dataset to the feature
//! table derived from it: two nodes, one `derives` edge, serialized as
//! `lineage.json` in the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Fixed filename of the lineage artifact.
pub const LINEAGE_FILENAME: &str = "lineage.json";

/// Kind of a lineage node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// A source dataset
    Dataset,
    /// A derived feature table
    FeatureTable,
}

/// Kind of a lineage edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// Target is derived from source
    Derives,
}

/// A node in the lineage graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageNode {
    /// Node identifier (dataset or table name)
    pub id: String,

    /// Node kind
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

/// A directed edge in the lineage graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageEdge {
    /// Source node id
    #[serde(rename = "from")]
    pub from_id: String,

    /// Target node id
    #[serde(rename = "to")]
    pub to_id: String,

    /// Edge kind
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

/// A small directed lineage graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageGraph {
    /// Graph nodes
    pub nodes: Vec<LineageNode>,

    /// Graph edges
    pub edges: Vec<LineageEdge>,
}

impl LineageGraph {
    /// Builds the two-node, one-edge graph recording that `feature_table`
    /// derives from `dataset`.
    pub fn derivation(dataset: &str, feature_table: &str) -> Self {
        Self {
            nodes: vec![
                LineageNode {
                    id: dataset.to_string(),
                    node_type: NodeType::Dataset,
                },
                LineageNode {
                    id: feature_table.to_string(),
                    node_type: NodeType::FeatureTable,
                },
            ],
            edges: vec![LineageEdge {
                from_id: dataset.to_string(),
                to_id: feature_table.to_string(),
                edge_type: EdgeType::Derives,
            }],
        }
    }
}

/// Writes the lineage artifact for a dataset-to-feature-table derivation.
///
/// Creates `out_dir` if absent and writes a pretty-printed `lineage.json`
/// inside it, returning the artifact path.
///
/// # Errors
///
/// Returns `ArtifactError` if the directory cannot be created or the file
/// cannot be written; this aborts the run.
pub fn emit_lineage(out_dir: &Path, dataset: &str, feature_table: &str) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;

    let graph = LineageGraph::derivation(dataset, feature_table);
    let path = out_dir.join(LINEAGE_FILENAME);
    fs::write(&path, serde_json::to_string_pretty(&graph)?)?;

    info!(path = %path.display(), dataset, feature_table, "wrote lineage artifact");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn lineage_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = emit_lineage(dir.path(), "orders", "features_x").unwrap();
        assert_eq!(path, dir.path().join("lineage.json"));

        let raw = std::fs::read_to_string(&path).unwrap();
        let graph: LineageGraph = serde_json::from_str(&raw).unwrap();

        assert_eq!(graph, LineageGraph::derivation("orders", "features_x"));
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].node_type, NodeType::Dataset);
        assert_eq!(graph.nodes[1].node_type, NodeType::FeatureTable);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].from_id, "orders");
        assert_eq!(graph.edges[0].to_id, "features_x");
    }

    #[test]
    fn lineage_json_field_names() {
        let graph = LineageGraph::derivation("orders", "features_x");
        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nodes": [
                    {"id": "orders", "type": "dataset"},
                    {"id": "features_x", "type": "feature_table"},
                ],
                "edges": [
                    {"from": "orders", "to": "features_x", "type": "derives"},
                ],
            })
        );
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let path = emit_lineage(&nested, "d", "f").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("occupied");
        std::fs::write(&blocker, "not a directory").unwrap();

        let result = emit_lineage(&blocker, "d", "f");
        assert!(result.is_err());
    }
}
