//! A directed weighted graph implemented in three interchangeable ways:
//! an adjacency list, an adjacency matrix and an incidence matrix.
//!
//! ```rust
//! use weighted_digraph::graph::*;
//!
//! fn build(g: &mut dyn Graph<&'static str>) -> Result<()> {
//!     g.add_vertex("home")?;
//!     g.add_vertex("work")?;
//!     g.add_weighted_edge(&"home", &"work", 12.5)?;
//!     Ok(())
//! }
//!
//! for repr in Representation::ALL {
//!     let mut g = repr.new_graph::<&'static str>();
//!     build(g.as_mut()).unwrap();
//!     assert_eq!(g.edge_weight(&"home", &"work"), Ok(12.5));
//!     assert_eq!(g.adjacent(&"work", &"home"), Ok(false));
//!     assert_eq!(g.remove_edge(&"work", &"home"), Err(GraphError::EdgeNotFound));
//! }
//! ```
pub mod graph;
