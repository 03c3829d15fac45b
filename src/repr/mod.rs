/*!
# Graph Representations

A single concrete representation is provided: [`AdjArrayUndir`], an
adjacency-array undirected multigraph with per-edge weights. The girth
pipeline has exactly one algorithm variant, so there is no need for
alternative storage backends or dynamic dispatch; algorithms interact
with the representation only through the traits in [`crate::ops`].
*/

use crate::{ops::*, *};

mod undirected;

pub use undirected::*;
