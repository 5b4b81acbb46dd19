use crate::graph::*;
use std::hash::Hash;

/// A default implementation of inspecting into a graph with customized indentation.
///
/// Each vertex is listed on its own line, followed by its out-edges and their weights.
pub struct GraphDebug<'a, V>
where
    V: Hash + Eq + Clone,
{
    graph: &'a dyn Graph<V>,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, V> GraphDebug<'a, V>
where
    V: Hash + Eq + Clone,
{
    pub fn new(graph: &'a dyn Graph<V>) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, V> std::fmt::Debug for GraphDebug<'a, V>
where
    V: Hash + Eq + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}", v)?;
            let neighbors = self.graph.neighbors(v).map_err(|_| std::fmt::Error)?;
            for n in neighbors {
                let weight = self.graph.edge_weight(v, n).map_err(|_| std::fmt::Error)?;
                self.display_indent(f, 1)?;
                writeln!(f, "--{}-> {:?}", weight, n)?;
            }
        }
        Ok(())
    }
}
