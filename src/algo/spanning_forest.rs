use super::*;

pub trait SpanningForest: GraphNodeOrder + WeightedEdges {
    /// Computes a spanning forest of the graph: an acyclic edge subset
    /// connecting each connected component, with `n - #components` edges.
    ///
    /// Edges are scanned in id order and greedily kept unless they would
    /// close a cycle. Weights play no role in which forest is chosen;
    /// every spanning forest closes the same set of independent cycles.
    fn spanning_forest(&self) -> ForestDecomposition;
}

impl<G> SpanningForest for G
where
    G: GraphNodeOrder + WeightedEdges,
{
    fn spanning_forest(&self) -> ForestDecomposition {
        let mut sets = UnionFind::new(self.number_of_nodes());
        let mut forest = self.edge_bitset_unset();

        for e in self.edge_ids() {
            let Edge(u, v) = self.endpoints_of(e);
            if sets.union(u, v) {
                forest.set(e as usize, true);
            }
        }

        ForestDecomposition {
            forest,
            num_edges: self.number_of_edges(),
            num_components: sets.number_of_sets(),
        }
    }
}

/// The split of a graph's edges into a spanning forest and its complement,
/// the back edges. Every back edge closes exactly one cycle against the
/// forest paths; a graph is acyclic exactly if it has no back edges.
pub struct ForestDecomposition {
    forest: EdgeBitSet,
    num_edges: NumEdges,
    num_components: NumNodes,
}

impl ForestDecomposition {
    /// Returns *true* if a given edge is part of the forest
    /// ** Panics if `e >= m` **
    pub fn is_forest_edge(&self, e: EdgeId) -> bool {
        self.forest[e as usize]
    }

    /// Returns an iterator over all forest edges in ascending id order
    pub fn forest_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.forest.iter_ones().map(|e| e as EdgeId)
    }

    /// Returns an iterator over all back edges in ascending id order
    pub fn back_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.num_edges).filter(|&e| !self.forest[e as usize])
    }

    /// Returns the back edges as a bitset over edge ids
    pub fn back_edge_set(&self) -> EdgeBitSet {
        !self.forest.clone()
    }

    /// Returns the number of edges in the forest
    pub fn number_of_forest_edges(&self) -> NumEdges {
        self.forest.count_ones() as NumEdges
    }

    /// Returns *true* if at least one edge lies outside the forest
    pub fn has_back_edges(&self) -> bool {
        self.number_of_forest_edges() < self.num_edges
    }

    /// Returns the number of connected components of the graph
    /// (singletons included)
    pub fn number_of_components(&self) -> NumNodes {
        self.num_components
    }
}
