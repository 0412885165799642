// Stats for logging after building a generalized suffix tree.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::prelude::*;
use std::path::Path;

use crate::graph::indexing::IndexType;
use crate::gst::{GeneralizedSuffixTree, Token};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct BuildStats {
    pub n_tokens: usize,
    pub boundary: usize,
    pub n_nodes: usize,
    pub n_edges: usize,
    pub n_leaves: usize,
    pub max_length: usize,
    pub elapsed_time: f32,
}

impl BuildStats {
    pub fn from_tree<T, Ix>(tree: &GeneralizedSuffixTree<T, Ix>, elapsed_time: f32) -> Self
    where
        T: Token,
        Ix: IndexType,
    {
        Self {
            n_tokens: tree.sequence().len(),
            boundary: tree.sequence().boundary(),
            n_nodes: tree.node_count(),
            n_edges: tree.edge_count(),
            n_leaves: tree.leaf_count(),
            max_length: tree.max_common_length(),
            elapsed_time,
        }
    }

    pub fn get_nodes_per_token(&self) -> f64 {
        (self.n_nodes as f64) / (self.n_tokens as f64)
    }

    pub fn get_edges_per_token(&self) -> f64 {
        (self.n_edges as f64) / (self.n_tokens as f64)
    }

    pub fn append_to_jsonl<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let blob = serde_json::to_string(self)?;

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(writeln!(file, "{}", blob)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gst::SequenceBuilder;
    use std::fs;
    use tempfile::tempdir;

    fn built_stats() -> BuildStats {
        let a: Vec<char> = "ABAB".chars().collect();
        let b: Vec<char> = "BABA".chars().collect();
        let sequence = SequenceBuilder::default().build(&a, &b).unwrap();
        let mut tree: GeneralizedSuffixTree<char> = GeneralizedSuffixTree::new(sequence);
        tree.build();
        BuildStats::from_tree(&tree, 0.5)
    }

    #[test]
    fn test_from_tree() {
        let stats = built_stats();
        assert_eq!(stats.n_tokens, 10);
        assert_eq!(stats.boundary, 4);
        assert_eq!(stats.n_leaves, 10);
        assert_eq!(stats.n_nodes, 17);
        assert_eq!(stats.n_edges, 16);
        assert_eq!(stats.max_length, 3);
        assert!((stats.get_nodes_per_token() - 1.7).abs() < 1e-9);
        assert!((stats.get_edges_per_token() - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_append_to_jsonl() {
        let tmp_dir = tempdir().unwrap();
        let path = tmp_dir.path().join("stats.jsonl");
        let stats = built_stats();
        stats.append_to_jsonl(&path).unwrap();
        stats.append_to_jsonl(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let stats2: BuildStats = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(stats2, stats);
    }
}
