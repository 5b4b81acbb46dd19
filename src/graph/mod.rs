//! Directed weighted graphs with interchangeable storages.
//!
//! # Vertices
//!
//! Vertices are addressed by user-supplied keys,
//! which may be any `Hash + Eq + Clone` type.
//! Internally each key is translated into a dense [VertexId].
//! These IDs always form the range `0..size`:
//! removing a vertex shifts all greater IDs down by one.
//!
//! # Edges
//!
//! Edges are directed and weighted.
//! A zero weight means the absence of an edge,
//! so setting a weight to zero removes the edge.
//!
//! # Representations
//!
//! All of them implement [Graph].
//!
//! *   [AdjacencyListGraph] for sparse graphs.
//! *   [AdjacencyMatrixGraph] for small and dense graphs with frequent lookups.
//! *   [IncidenceMatrixGraph] for edge-centric use.
//!
//! [Representation] picks one of them at runtime.

mod error;
pub use self::error::*;
mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod representation;
pub use self::representation::*;
pub mod graphviz;

mod adjacency_list;
pub use self::adjacency_list::*;
mod adjacency_matrix;
pub use self::adjacency_matrix::*;
mod incidence_matrix;
pub use self::incidence_matrix::*;

#[cfg(test)]
pub use self::tests::*;

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use petgraph::{graphmap::DiGraphMap, Direction};
    use quickcheck::Arbitrary;
    use rs_quickcheck_util::*;

    /// Number of distinct keys random operations pick from.
    const KEYS: u8 = 6;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Op {
        AddVertex(u8),
        RemoveVertex(u8),
        SetEdgeWeight((u8, u8, Weight)),
        AddEdge((u8, u8)),
        RemoveEdge((u8, u8)),
    }

    #[derive(Clone)]
    pub struct Ops {
        pub ops: Vec<Op>,
    }

    impl std::fmt::Debug for Ops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.ops)
        }
    }

    impl Ops {
        pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
            self.ops.iter()
        }
    }

    impl quickcheck::Arbitrary for Ops {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let key = |g: &mut quickcheck::Gen| u8::arbitrary(g) % KEYS;
            let ops = gen_bytes(g, b"abcde.", b'.', 0..)
                .iter()
                .map(|_| match u8::arbitrary(g) % 5 {
                    0 => Op::AddVertex(key(g)),
                    1 => Op::RemoveVertex(key(g)),
                    2 => {
                        let weight = Weight::from(u8::arbitrary(g) % 4) - 1.0;
                        Op::SetEdgeWeight((key(g), key(g), weight))
                    }
                    3 => Op::AddEdge((key(g), key(g))),
                    4 => Op::RemoveEdge((key(g), key(g))),
                    _ => unreachable!(),
                })
                .collect();
            Self { ops }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let l = self.ops.len();
            let me = self.clone();
            let it = std::iter::successors(Some(l / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .map(move |n| {
                let mut res = me.clone();
                res.ops = me.ops[0..n].to_vec();
                res
            });
            Box::new(it)
        }
    }

    pub fn apply<G: Graph<u8> + ?Sized>(graph: &mut G, op: &Op) -> Result<()> {
        match *op {
            Op::AddVertex(v) => graph.add_vertex(v),
            Op::RemoveVertex(v) => graph.remove_vertex(&v),
            Op::SetEdgeWeight((src, snk, weight)) => graph.set_edge_weight(&src, &snk, weight),
            Op::AddEdge((src, snk)) => graph.add_edge(&src, &snk),
            Op::RemoveEdge((src, snk)) => graph.remove_edge(&src, &snk),
        }
    }

    fn apply_to_oracle(oracle: &mut DiGraphMap<u8, Weight>, op: &Op) -> Result<()> {
        let require = |oracle: &DiGraphMap<u8, Weight>, v: u8| {
            if oracle.contains_node(v) {
                Ok(())
            } else {
                Err(GraphError::VertexNotFound)
            }
        };
        match *op {
            Op::AddVertex(v) => {
                if oracle.contains_node(v) {
                    return Err(GraphError::VertexAlreadyExists);
                }
                oracle.add_node(v);
            }
            Op::RemoveVertex(v) => {
                require(oracle, v)?;
                oracle.remove_node(v);
            }
            Op::SetEdgeWeight((src, snk, weight)) => {
                require(oracle, src)?;
                require(oracle, snk)?;
                if is_edge(weight) {
                    oracle.add_edge(src, snk, weight);
                } else {
                    oracle.remove_edge(src, snk);
                }
            }
            Op::AddEdge((src, snk)) => {
                require(oracle, src)?;
                require(oracle, snk)?;
                if oracle.contains_edge(src, snk) {
                    return Err(GraphError::EdgeAlreadyExists);
                }
                oracle.add_edge(src, snk, 1.0);
            }
            Op::RemoveEdge((src, snk)) => {
                require(oracle, src)?;
                require(oracle, snk)?;
                if oracle.remove_edge(src, snk).is_none() {
                    return Err(GraphError::EdgeNotFound);
                }
            }
        }
        Ok(())
    }

    pub fn sorted_neighbors<G: Graph<V> + ?Sized, V: std::hash::Hash + Eq + Clone + Ord>(
        graph: &G,
        vertex: &V,
    ) -> Vec<V> {
        let mut res: Vec<V> = graph.neighbors(vertex).unwrap().cloned().collect();
        res.sort();
        res
    }

    /// Replays `ops` on both `G` and an oracle and compares what they look like after each step.
    pub fn check_against_oracle<G: Graph<u8>>(ops: &Ops) {
        let mut trial = G::new();
        let mut oracle = DiGraphMap::<u8, Weight>::new();
        for op in ops.iter() {
            assert_eq!(
                apply(&mut trial, op),
                apply_to_oracle(&mut oracle, op),
                "{:?}",
                op
            );
            assert_eq!(trial.size(), oracle.node_count());
            assert_eq!(trial.edge_count(), oracle.edge_count());
            for src in 0..KEYS {
                assert_eq!(trial.contains_vertex(&src), oracle.contains_node(src));
                if !oracle.contains_node(src) {
                    assert_eq!(trial.neighbors(&src).err(), Some(GraphError::VertexNotFound));
                    continue;
                }
                let mut expected: Vec<u8> = oracle
                    .neighbors_directed(src, Direction::Outgoing)
                    .collect();
                expected.sort();
                assert_eq!(sorted_neighbors(&trial, &src), expected);
                for snk in oracle.nodes() {
                    let weight = oracle.edge_weight(src, snk).copied().unwrap_or(0.0);
                    assert_eq!(trial.edge_weight(&src, &snk), Ok(weight));
                    assert_eq!(trial.adjacent(&src, &snk), Ok(is_edge(weight)));
                }
            }
        }
    }

    /// Behaviors every representation must share.
    pub fn check_conformance<G: Graph<i32> + Clone + Default>() {
        // fresh vertices are isolated
        let mut g = G::new();
        assert!(g.is_empty());
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();
        assert_eq!(g.size(), 2);
        assert!(!g.is_empty());
        assert_eq!(g.adjacent(&1, &2), Ok(false));
        assert_eq!(g.iter_vertices().copied().collect::<Vec<_>>(), vec![1, 2]);

        // duplicated vertices are rejected without side effects
        g.set_edge_weight(&1, &2, 3.0).unwrap();
        assert_eq!(g.add_vertex(1), Err(GraphError::VertexAlreadyExists));
        assert_eq!(g.size(), 2);
        assert_eq!(g.edge_weight(&1, &2), Ok(3.0));

        // weights and direction
        assert_eq!(g.adjacent(&1, &2), Ok(true));
        assert_eq!(g.adjacent(&2, &1), Ok(false));
        g.set_edge_weight(&1, &2, 0.0).unwrap();
        assert_eq!(g.adjacent(&1, &2), Ok(false));
        assert_eq!(g.edge_weight(&1, &2), Ok(0.0));
        assert_eq!(g.edge_count(), 0);

        // missing vertices
        assert_eq!(g.adjacent(&1, &9), Err(GraphError::VertexNotFound));
        assert_eq!(g.adjacent(&9, &1), Err(GraphError::VertexNotFound));
        assert_eq!(g.neighbors(&9).err(), Some(GraphError::VertexNotFound));
        assert_eq!(g.edge_weight(&9, &1), Err(GraphError::VertexNotFound));
        assert_eq!(g.set_edge_weight(&1, &9, 1.0), Err(GraphError::VertexNotFound));
        assert_eq!(g.remove_vertex(&9), Err(GraphError::VertexNotFound));
        assert_eq!(g.vertex_visited(&9), Err(GraphError::VertexNotFound));
        assert_eq!(g.set_vertex_visited(&9, true), Err(GraphError::VertexNotFound));
        assert_eq!(g.add_edge(&9, &1), Err(GraphError::VertexNotFound));
        assert_eq!(g.remove_edge(&1, &9), Err(GraphError::VertexNotFound));
        assert_eq!(g.size(), 2);

        // neighbors
        let mut g = G::new();
        for v in [1, 2, 4] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(&1, &2).unwrap();
        g.add_edge(&2, &4).unwrap();
        g.add_edge(&1, &4).unwrap();
        assert_eq!(sorted_neighbors(&g, &1), vec![2, 4]);
        assert_eq!(sorted_neighbors(&g, &2), vec![4]);
        assert_eq!(sorted_neighbors(&g, &4), Vec::<i32>::new());
        assert_eq!(g.edge_weight(&1, &4), Ok(1.0));
        let mut edges: Vec<_> = g
            .iter_edges()
            .map(|e| (*e.source, *e.sink, e.weight))
            .collect();
        edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        assert_eq!(edges, vec![(1, 2, 1.0), (1, 4, 1.0), (2, 4, 1.0)]);

        // visited flags
        let mut g = G::new();
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();
        g.set_vertex_visited(&1, true).unwrap();
        assert_eq!(g.vertex_visited(&1), Ok(true));
        assert_eq!(g.vertex_visited(&2), Ok(false));
        g.reset_vertices_visited();
        assert_eq!(g.vertex_visited(&1), Ok(false));

        // convenience wrappers
        g.add_edge(&1, &2).unwrap();
        assert_eq!(g.add_edge(&1, &2), Err(GraphError::EdgeAlreadyExists));
        assert_eq!(
            g.add_weighted_edge(&1, &2, 7.0),
            Err(GraphError::EdgeAlreadyExists)
        );
        assert_eq!(g.edge_weight(&1, &2), Ok(1.0));
        g.remove_edge(&1, &2).unwrap();
        assert_eq!(g.remove_edge(&1, &2), Err(GraphError::EdgeNotFound));
        g.add_weighted_edge(&2, &1, 0.5).unwrap();
        assert_eq!(g.edge_weight(&2, &1), Ok(0.5));

        // self-loops
        g.set_edge_weight(&2, &2, 6.0).unwrap();
        assert_eq!(g.adjacent(&2, &2), Ok(true));
        assert_eq!(sorted_neighbors(&g, &2), vec![1, 2]);
        assert_eq!(g.edge_count(), 2);

        // removal cascades and re-adding starts afresh
        let mut g = G::new();
        for v in [1, 2, 3] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(&1, &2).unwrap();
        g.add_edge(&2, &1).unwrap();
        g.add_edge(&2, &3).unwrap();
        g.add_edge(&3, &2).unwrap();
        g.add_edge(&3, &1).unwrap();
        g.set_vertex_visited(&3, true).unwrap();
        g.remove_vertex(&2).unwrap();
        assert_eq!(g.size(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.adjacent(&3, &1), Ok(true));
        assert_eq!(g.vertex_visited(&3), Ok(true));
        assert_eq!(g.iter_vertices().copied().collect::<Vec<_>>(), vec![1, 3]);
        g.add_vertex(2).unwrap();
        assert_eq!(g.iter_vertices().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
        assert_eq!(g.adjacent(&1, &2), Ok(false));
        assert_eq!(g.adjacent(&2, &3), Ok(false));
        assert_eq!(sorted_neighbors(&g, &2), Vec::<i32>::new());
        assert_eq!(g.vertex_visited(&2), Ok(false));
        for v in [1, 2, 3] {
            g.remove_vertex(&v).unwrap();
        }
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);

        // clones are independent and taking leaves an empty graph
        let mut g = G::new();
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();
        g.add_edge(&1, &2).unwrap();
        g.add_edge(&2, &1).unwrap();
        let mut cloned = g.clone();
        cloned.remove_edge(&1, &2).unwrap();
        assert_eq!(g.adjacent(&1, &2), Ok(true));
        assert_eq!(cloned.adjacent(&1, &2), Ok(false));
        let taken = std::mem::take(&mut g);
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(taken.adjacent(&1, &2), Ok(true));
        assert_eq!(taken.adjacent(&2, &1), Ok(true));
    }
}
