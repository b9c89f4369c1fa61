//! Shortest-path tuning.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which priority queue the weighted search uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStrategy {
    /// Linear queue on dense graphs, binary heap otherwise.
    #[default]
    Auto,
    Heap,
    Linear,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub queue: QueueStrategy,
}

impl PathConfig {
    /// Parses a config such as `{"queue": "linear"}`. Missing fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Whether a search over this graph size should use the linear queue.
    pub fn use_linear_queue(&self, vertices: usize, edges: usize) -> bool {
        match self.queue {
            QueueStrategy::Auto => prefers_linear_queue(vertices, edges),
            QueueStrategy::Heap => false,
            QueueStrategy::Linear => true,
        }
    }
}

/// Dense-graph crossover: more than `n(n-1)/2 - n` edges.
///
/// Past this point nearly every extraction is followed by several priority
/// decreases, and the linear queue's O(1) decrease beats the heap.
pub fn prefers_linear_queue(vertices: usize, edges: usize) -> bool {
    let n = vertices as i128;
    edges as i128 > n * (n - 1) / 2 - n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossover_matches_complete_graph_bound() {
        // K5 has 10 edges, the threshold is 10 - 5 = 5
        assert!(!prefers_linear_queue(5, 5));
        assert!(prefers_linear_queue(5, 6));
        // tiny graphs have a negative threshold
        assert!(prefers_linear_queue(2, 0));
        assert!(!prefers_linear_queue(100, 4850));
        assert!(prefers_linear_queue(100, 4851));
    }

    #[test]
    fn parses_json() {
        assert_eq!(PathConfig::from_json("{}").unwrap(), PathConfig::default());
        let config = PathConfig::from_json(r#"{"queue":"linear"}"#).unwrap();
        assert_eq!(config.queue, QueueStrategy::Linear);
        assert_eq!(config.to_json().unwrap(), r#"{"queue":"linear"}"#);
        assert!(PathConfig::from_json(r#"{"queue":"fibonacci"}"#).is_err());
    }

    #[test]
    fn strategy_overrides_density() {
        let heap = PathConfig {
            queue: QueueStrategy::Heap,
        };
        assert!(!heap.use_linear_queue(3, 3));
        let linear = PathConfig {
            queue: QueueStrategy::Linear,
        };
        assert!(linear.use_linear_queue(100, 0));
    }
}
