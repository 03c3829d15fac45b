use fxhash::FxHashSet;
use smallvec::SmallVec;

use super::*;

/// One entry of a vertex's adjacency array: the incident edge and the
/// endpoint on the far side (equal to the vertex itself for a self-loop).
#[derive(Copy, Clone, Debug)]
struct IncidentEdge {
    id: EdgeId,
    node: Node,
}

/// An undirected multigraph stored as adjacency arrays over an edge list.
///
/// Edges are indexed by [`EdgeId`] in insertion order and carry a finite,
/// non-negative weight. Parallel edges and self-loops are stored as
/// distinct edges: a pair of parallel edges is a cycle of two, a
/// self-loop a cycle of one. Endpoints are normalized on insertion.
#[derive(Clone)]
pub struct AdjArrayUndir {
    adj: Vec<SmallVec<[IncidentEdge; 4]>>,
    edges: Vec<WeightedEdge>,
    edge_set: FxHashSet<Edge>,
}

impl GraphNew for AdjArrayUndir {
    fn new(n: NumNodes) -> Self {
        Self {
            adj: vec![SmallVec::new(); n as usize],
            edges: Vec::new(),
            edge_set: FxHashSet::default(),
        }
    }
}

impl GraphNodeOrder for AdjArrayUndir {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }
}

impl GraphEdgeOrder for AdjArrayUndir {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl AdjacencyList for AdjArrayUndir {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adj[u as usize].iter().map(|e| e.node)
    }

    fn incident_edges_of(&self, u: Node) -> impl Iterator<Item = (EdgeId, Node)> + '_ {
        self.adj[u as usize].iter().map(|e| (e.id, e.node))
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adj[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjArrayUndir {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(u < self.number_of_nodes() && v < self.number_of_nodes());
        self.edge_set.contains(&Edge(u, v).normalized())
    }
}

impl WeightedEdges for AdjArrayUndir {
    fn endpoints_of(&self, e: EdgeId) -> Edge {
        self.edges[e as usize].edge
    }

    fn weight_of(&self, e: EdgeId) -> EdgeWeight {
        self.edges[e as usize].weight
    }
}

impl GraphEdgeEditing for AdjArrayUndir {
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: EdgeWeight) -> EdgeId {
        assert!(u < self.number_of_nodes() && v < self.number_of_nodes());
        assert!(weight >= 0.0 && weight.is_finite());

        let id = self.edges.len() as EdgeId;
        let edge = Edge(u, v).normalized();

        self.adj[u as usize].push(IncidentEdge { id, node: v });
        if !edge.is_loop() {
            self.adj[v as usize].push(IncidentEdge { id, node: u });
        }

        self.edge_set.insert(edge);
        self.edges.push(WeightedEdge { edge, weight });

        id
    }
}
