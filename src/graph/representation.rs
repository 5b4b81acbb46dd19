use crate::graph::*;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

/// Storage strategies of graphs, to be chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    AdjacencyList,
    AdjacencyMatrix,
    IncidenceMatrix,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown graph representation `{0}`")]
pub struct ParseRepresentationError(pub String);

impl Representation {
    pub const ALL: [Representation; 3] = [
        Representation::AdjacencyList,
        Representation::AdjacencyMatrix,
        Representation::IncidenceMatrix,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Representation::AdjacencyList => "adjacency-list",
            Representation::AdjacencyMatrix => "adjacency-matrix",
            Representation::IncidenceMatrix => "incidence-matrix",
        }
    }

    /// Creates an empty graph stored in this way.
    pub fn new_graph<V>(&self) -> Box<dyn Graph<V>>
    where
        V: Hash + Eq + Clone + 'static,
    {
        match self {
            Representation::AdjacencyList => Box::new(AdjacencyListGraph::<V>::new()),
            Representation::AdjacencyMatrix => Box::new(AdjacencyMatrixGraph::<V>::new()),
            Representation::IncidenceMatrix => Box::new(IncidenceMatrixGraph::<V>::new()),
        }
    }
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Representation {
    type Err = ParseRepresentationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Representation::ALL
            .into_iter()
            .find(|x| x.name() == s)
            .ok_or_else(|| ParseRepresentationError(s.to_owned()))
    }
}
