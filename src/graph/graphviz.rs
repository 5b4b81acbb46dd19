//! Visualize graphs in the graphviz format.
use crate::graph::*;
use std::fmt::Display;
use std::hash::Hash;

/**
 * Dumps a graph into graphviz format.
 *
 * Vertices are named by their `Display` forms and edges are labelled by their weights.
 *
 * # Examples
 *
 * ```rust
 * use weighted_digraph::graph::{graphviz::*, *};
 *
 * let mut g = AdjacencyMatrixGraph::new();
 * g.add_vertex(0).unwrap();
 * g.add_vertex(1).unwrap();
 * g.set_edge_weight(&0, &1, 2.5).unwrap();
 * g.set_edge_weight(&1, &1, 1.0).unwrap();
 * let trial = {
 *     let mut buf = vec![];
 *     g.dump_in_graphviz(&mut buf, "trial").unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"digraph trial {
 *   0 ;
 *   1 ;
 *   0 -> 1 [label=2.5] ;
 *   1 -> 1 [label=1] ;
 * }
 * "#);
 * ```
 */
pub trait DumpInGraphviz<V>
where
    V: Hash + Eq + Clone + Display,
{
    /**
     * Dumps a graph to a `std::io::Write` object in the graphviz format.
     */
    fn dump_in_graphviz<W>(&self, out: &mut W, graph_name: &str) -> std::io::Result<()>
    where
        W: std::io::Write;
}

impl<V, G> DumpInGraphviz<V> for G
where
    V: Hash + Eq + Clone + Display,
    G: Graph<V> + ?Sized,
{
    fn dump_in_graphviz<W>(&self, out: &mut W, graph_name: &str) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        writeln!(out, "digraph {} {{", graph_name)?;
        for v in self.iter_vertices() {
            writeln!(out, "  {} ;", v)?;
        }
        for e in self.iter_edges() {
            writeln!(out, "  {} -> {} [label={}] ;", e.source, e.sink, e.weight)?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}
