use bitvec::prelude::*;
use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        bitvec![0; self.len()]
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over all edge ids in insertion order
    fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        0..self.number_of_edges()
    }

    /// Returns empty bitset with one entry per edge
    fn edge_bitset_unset(&self) -> EdgeBitSet {
        bitvec![0; self.number_of_edges() as usize]
    }
}

/// Traits pertaining getters for neighborhoods & incident edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// Parallel edges contribute one entry each.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over the edges incident to a given vertex as
    /// `(id, other endpoint)` pairs. A self-loop appears once.
    /// ** Panics if `u >= n` **
    fn incident_edges_of(&self, u: Node) -> impl Iterator<Item = (EdgeId, Node)> + '_;

    /// Returns the number of incident edges of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the neighborhood of a given vertex as a bitset.
    /// ** Panics if `u >= n` **
    fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        let mut bits = self.vertex_bitset_unset();
        for v in self.neighbors_of(u) {
            bits.set(v as usize, true);
        }
        bits
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge {u,v} exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Traits pertaining per-edge getters for edge-indexed graphs
pub trait WeightedEdges: GraphEdgeOrder {
    /// Returns the (normalized) endpoints of a given edge
    /// ** Panics if `e >= m` **
    fn endpoints_of(&self, e: EdgeId) -> Edge;

    /// Returns the weight of a given edge
    /// ** Panics if `e >= m` **
    fn weight_of(&self, e: EdgeId) -> EdgeWeight;

    /// Returns an iterator over all edges with their endpoints in insertion order
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edge_ids().map(|e| self.endpoints_of(e))
    }

    /// Returns an iterator over all edges in sorted order
    fn ordered_edges(&self) -> impl Iterator<Item = Edge> {
        let mut edges = self.edges().collect_vec();
        edges.sort();
        edges.into_iter()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges.
/// The girth pipeline never mutates its input, so there is no removal surface.
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *{u,v}* with a given weight to the graph and returns its id.
    /// Parallel edges and self-loops are allowed and stored as distinct edges.
    /// ** Panics if `u >= n || v >= n` or if the weight is negative, NaN, or infinite **
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: EdgeWeight) -> EdgeId;

    /// Adds the edge *{u,v}* with [`UNIT_WEIGHT`] to the graph and returns its id.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node) -> EdgeId {
        self.add_weighted_edge(u, v, UNIT_WEIGHT)
    }

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge {
            edge: Edge(u, v),
            weight,
        } in edges.into_iter().map(|e| e.into())
        {
            self.add_weighted_edge(u, v, weight);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
