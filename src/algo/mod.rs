/*!
# Network Algorithms

This module provides the structural queries over a [`RouteNetwork`]:

- [`ShortestPath`]: single-source/single-target shortest distance,
- [`SpanningTree`]: minimum-weight spanning tree growth,
- [`Traversal`]: breadth-first level-order reachability.

All algorithms read the store's adjacency and never mutate it, so
`use skyroutes::{prelude::*, algo::*};` gives you the queries directly as
methods on the network.
*/

mod shortest_path;
mod spanning_tree;
mod traversal;

use crate::prelude::*;

pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;
