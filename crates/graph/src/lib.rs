//! Undirected graph with breadth/depth-first traversal and shortest paths.
//!
//! Vertices are identified by their element and addressed internally by a
//! [`VertexId`]. Edges are undirected and carry a positive weight (1.0 for
//! [`Graph::connect`]). Weighted shortest paths run Dijkstra's algorithm over
//! one of the queues from `arboreal-heap`, picked per [`PathConfig`].
//!
//! ```
//! use arboreal_graph::Graph;
//!
//! let mut g = Graph::new();
//! for v in ["a", "b", "c"] {
//!     g.add_vertex(v).unwrap();
//! }
//! g.connect_weighted(&"a", &"b", 2.0).unwrap();
//! g.connect_weighted(&"b", &"c", 3.0).unwrap();
//!
//! let path = g.shortest_path_weighted(&"a", &"c").unwrap();
//! assert_eq!(g.path_weight(&path).unwrap(), 5.0);
//! assert_eq!(g.to_string(), "{a, b, c}, {(a, b), (b, c)}");
//! ```

pub mod config;
pub mod error;
pub mod graph;
mod paths;
mod traversal;
pub mod types;

pub use config::{PathConfig, QueueStrategy};
pub use error::{GraphError, Result};
pub use graph::{Graph, Neighbor, VertexRef};
pub use types::{Color, VertexId};
