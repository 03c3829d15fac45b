use itertools::Itertools;

use super::*;

/// A simple cycle: a closed walk with no repeated vertices except the
/// implicit return to the start.
///
/// `nodes` lists the vertices in cycle order without repeating the first;
/// `edges` lists the edge ids in the same order, ending with the edge
/// that closes the cycle back to the start. A self-loop is a cycle of
/// one node and one edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Cycle {
    nodes: Vec<Node>,
    edges: Vec<EdgeId>,
    weight: EdgeWeight,
}

impl Cycle {
    /// Returns the vertices of the cycle in cycle order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the edge ids of the cycle in cycle order
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns the number of edges on the cycle
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns the total weight of the cycle.
    /// For unweighted graphs this equals the number of edges.
    pub fn total_weight(&self) -> EdgeWeight {
        self.weight
    }
}

pub trait Girth: AdjacencyList + WeightedEdges {
    /// Computes a shortest cycle of the graph, or `None` if the graph is
    /// a forest. The graph is not modified.
    ///
    /// A spanning forest is computed first; each remaining back edge
    /// closes exactly one cycle against the forest, and a single
    /// Floyd-Warshall pass with every back edge masked to
    /// [`INFINITE_WEIGHT`] yields the forest-path distance between the
    /// endpoints of each of them. The shortest candidate wins; between
    /// equally short cycles the one closed by the smallest edge id is
    /// returned, but only the length is contractual.
    ///
    /// Runs in `O(n^3)` time and `O(n^2)` space and is therefore
    /// unsuitable for graphs beyond a few thousand nodes.
    ///
    /// Masking every back edge at once is an over-approximation: only
    /// the edge closing the current cycle would have to be excluded
    /// from its own path search. If the sole finite route between a
    /// back edge's endpoints crosses another back edge, the reported
    /// length can exceed the true girth; the result is still the exact
    /// weight of a valid cycle.
    fn girth(&self) -> Option<Cycle> {
        GirthSearch::new(self).compute()
    }

    /// Returns the length of a shortest cycle, or [`INFINITE_WEIGHT`]
    /// if the graph is a forest. For unweighted graphs the length is
    /// the number of edges on the cycle.
    fn girth_length(&self) -> EdgeWeight {
        self.girth().map_or(INFINITE_WEIGHT, |cycle| cycle.total_weight())
    }
}

impl<G> Girth for G where G: AdjacencyList + WeightedEdges {}

struct GirthSearch<'a, G>
where
    G: AdjacencyList + WeightedEdges,
{
    graph: &'a G,
    decomposition: ForestDecomposition,
}

impl<'a, G> GirthSearch<'a, G>
where
    G: AdjacencyList + WeightedEdges,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            decomposition: graph.spanning_forest(),
        }
    }

    fn compute(self) -> Option<Cycle> {
        if !self.decomposition.has_back_edges() {
            return None;
        }

        let back_edges = self.decomposition.back_edge_set();
        let distances = self.graph.all_pairs_shortest_paths(|e| {
            if back_edges[e as usize] {
                INFINITE_WEIGHT
            } else {
                self.graph.weight_of(e)
            }
        });

        let mut closing = None;
        let mut best_length = INFINITE_WEIGHT;

        for e in self.decomposition.back_edges() {
            let Edge(u, v) = self.graph.endpoints_of(e);
            let length = distances.distance(u, v) + self.graph.weight_of(e);

            // the forest connects the endpoints of every back edge
            debug_assert!(length.is_finite());

            if length < best_length {
                best_length = length;
                closing = Some(e);
            }
        }

        Some(self.cycle_through(&distances, closing?, best_length))
    }

    /// Assembles the cycle closed by a back edge: the forest path between
    /// its endpoints plus the edge itself.
    fn cycle_through(
        &self,
        distances: &DistanceMatrix,
        closing: EdgeId,
        length: EdgeWeight,
    ) -> Cycle {
        let Edge(u, v) = self.graph.endpoints_of(closing);

        let nodes = distances.path(u, v).unwrap();
        let mut edges = nodes
            .iter()
            .copied()
            .tuple_windows()
            .map(|(a, b)| self.forest_edge_between(a, b))
            .collect_vec();
        edges.push(closing);

        Cycle {
            nodes,
            edges,
            weight: length,
        }
    }

    /// The forest contains at most one edge per vertex pair, so the pair
    /// identifies the edge.
    fn forest_edge_between(&self, a: Node, b: Node) -> EdgeId {
        self.graph
            .incident_edges_of(a)
            .find(|&(e, node)| node == b && self.decomposition.is_forest_edge(e))
            .unwrap()
            .0
    }
}
