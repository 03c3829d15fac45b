/*!
# Graph Algorithms

This module provides the algorithms of the girth pipeline, built on top of
the graph representation in this crate. All algorithms are re-exported at
the top level of this module, so you can simply do:
```rust
use girth::algo::*;
```
and gain access to spanning-forest construction, all-pairs shortest paths,
and the girth computation itself.
*/

mod apsp;
mod girth;
mod spanning_forest;

use crate::{prelude::*, utils::*};

pub use apsp::*;
pub use girth::*;
pub use spanning_forest::*;
