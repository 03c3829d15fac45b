/*!
All-pairs shortest paths via Floyd-Warshall.

Runs in `O(n^3)` time and `O(n^2)` space, which is only practical up to a
few thousand nodes. Distances are computed under a caller-supplied weight
function, so individual edges can be masked out of the search by mapping
them to [`INFINITE_WEIGHT`] without touching the graph.
*/

use super::*;

pub trait AllPairsShortestPaths: GraphNodeOrder + WeightedEdges {
    /// Computes shortest-path distances between every pair of vertices
    /// under the given edge-weight function. The graph itself is not
    /// modified; its stored weights are consulted only through `weight`.
    fn all_pairs_shortest_paths<W>(&self, weight: W) -> DistanceMatrix
    where
        W: Fn(EdgeId) -> EdgeWeight;
}

impl<G> AllPairsShortestPaths for G
where
    G: GraphNodeOrder + WeightedEdges,
{
    fn all_pairs_shortest_paths<W>(&self, weight: W) -> DistanceMatrix
    where
        W: Fn(EdgeId) -> EdgeWeight,
    {
        DistanceMatrix::new(self, weight)
    }
}

/// Shortest-path distances between all vertex pairs, together with a
/// successor table for path reconstruction. Unreachable pairs have
/// distance [`INFINITE_WEIGHT`] and no path.
pub struct DistanceMatrix {
    n: usize,
    dist: Vec<EdgeWeight>,
    succ: Vec<Option<OptionalNode>>,
}

impl DistanceMatrix {
    pub fn new<G, W>(graph: &G, weight: W) -> Self
    where
        G: GraphNodeOrder + WeightedEdges,
        W: Fn(EdgeId) -> EdgeWeight,
    {
        let n = graph.len();
        let mut dist = vec![INFINITE_WEIGHT; n * n];
        let mut succ: Vec<Option<OptionalNode>> = vec![None; n * n];

        for u in graph.vertices() {
            let uu = u as usize * n + u as usize;
            dist[uu] = 0.0;
            succ[uu] = OptionalNode::new(u);
        }

        // Parallel edges collapse to the cheapest copy; self-loops never
        // beat the zero diagonal. An infinite weight keeps the edge out
        // of the matrix entirely.
        for e in graph.edge_ids() {
            let Edge(u, v) = graph.endpoints_of(e);
            let w = weight(e);

            let uv = u as usize * n + v as usize;
            if w < dist[uv] {
                dist[uv] = w;
                succ[uv] = OptionalNode::new(v);

                let vu = v as usize * n + u as usize;
                dist[vu] = w;
                succ[vu] = OptionalNode::new(u);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let ik = i * n + k;
                if dist[ik] == INFINITE_WEIGHT {
                    continue;
                }

                for j in 0..n {
                    let through_k = dist[ik] + dist[k * n + j];
                    if through_k < dist[i * n + j] {
                        dist[i * n + j] = through_k;
                        succ[i * n + j] = succ[ik];
                    }
                }
            }
        }

        Self { n, dist, succ }
    }

    fn idx(&self, u: Node, v: Node) -> usize {
        u as usize * self.n + v as usize
    }

    /// Returns the shortest-path distance from `u` to `v`, or
    /// [`INFINITE_WEIGHT`] if no path exists.
    /// ** Panics if `u >= n || v >= n` **
    pub fn distance(&self, u: Node, v: Node) -> EdgeWeight {
        self.dist[self.idx(u, v)]
    }

    /// Reconstructs a shortest path from `u` to `v` as a vertex sequence
    /// including both endpoints. Returns `None` if `v` is unreachable
    /// and `Some(vec![u])` for `u == v`.
    /// ** Panics if `u >= n || v >= n` **
    pub fn path(&self, u: Node, v: Node) -> Option<Vec<Node>> {
        self.succ[self.idx(u, v)]?;

        let mut path = vec![u];
        let mut current = u;
        while current != v {
            current = self.succ[self.idx(current, v)].unwrap().get();
            path.push(current);
        }

        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn path_graph_distances() {
        for n in 2..(10 as NumNodes) {
            let mut graph = AdjArrayUndir::new(n);
            for u in 0..(n - 1) {
                graph.add_edge(u, u + 1);
            }

            let matrix = graph.all_pairs_shortest_paths(|e| graph.weight_of(e));

            for u in 0..n {
                for v in 0..n {
                    assert_eq!(matrix.distance(u, v), u.abs_diff(v) as EdgeWeight);
                }
            }

            assert_eq!(
                matrix.path(0, n - 1).unwrap(),
                (0..n).collect_vec(),
            );
        }
    }

    #[test]
    fn weighted_shortcut() {
        // the direct edge 0-2 is heavier than the detour via 1
        let graph = AdjArrayUndir::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);

        let matrix = graph.all_pairs_shortest_paths(|e| graph.weight_of(e));
        assert_eq!(matrix.distance(0, 2), 2.0);
        assert_eq!(matrix.path(0, 2).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn parallel_edges_use_cheapest() {
        let graph = AdjArrayUndir::from_edges(2, [(0, 1, 3.0), (0, 1, 1.5)]);

        let matrix = graph.all_pairs_shortest_paths(|e| graph.weight_of(e));
        assert_eq!(matrix.distance(0, 1), 1.5);
        assert_eq!(matrix.distance(1, 0), 1.5);
    }

    #[test]
    fn masked_edges_are_ignored() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (0, 2)]);

        // mask the direct edge 0-2
        let matrix = graph.all_pairs_shortest_paths(|e| {
            if e == 2 {
                INFINITE_WEIGHT
            } else {
                graph.weight_of(e)
            }
        });

        assert_eq!(matrix.distance(0, 2), 2.0);
        assert_eq!(matrix.path(0, 2).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn unreachable_pairs() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (2, 3)]);

        let matrix = graph.all_pairs_shortest_paths(|e| graph.weight_of(e));
        assert_eq!(matrix.distance(0, 2), INFINITE_WEIGHT);
        assert!(matrix.path(0, 2).is_none());
        assert_eq!(matrix.distance(1, 1), 0.0);
        assert_eq!(matrix.path(3, 3).unwrap(), vec![3]);
    }
}
