/*!
`skyroutes` models an undirected, weighted network of cities and the flights
between them, and answers three structural queries over it:

- **Shortest distance** between two cities (Dijkstra-style search with a
  lazy-deleted journey frontier), see [`algo::ShortestPath`],
- **Minimum spanning tree** of the network (Prim's greedy tree growth), see
  [`algo::SpanningTree`],
- **Breadth-first reachability order** from a city, see [`algo::Traversal`].

# Representation

Cities are interned into a dense arena and addressed by a [`City`](crate::city::City)
handle (`u32`); a name-to-handle map provides lookup by city name. An
undirected connection between `A` and `B` is stored as a **mirrored pair** of
directed [`Flight`](crate::flight::Flight) records, one in each endpoint's
flight list, both carrying the same distance. Flight lists keep insertion
order.

The store is built once via repeated [`RouteNetwork::add_connection`](crate::network::RouteNetwork::add_connection)
calls and is read-only for every query. There is no removal of cities or
connections.

# Usage

```rust
use skyroutes::prelude::*;
use skyroutes::algo::*;

let mut network = RouteNetwork::new();
network.add_connection("Detroit", "Toledo", 60);
network.add_connection("Toledo", "Cleveland", 117);

assert_eq!(network.shortest_distance_between("Detroit", "Cleveland").unwrap(), 177);
```

In most use-cases, `use skyroutes::{prelude::*, algo::*};` suffices.
*/

pub mod algo;
pub mod city;
pub mod error;
pub mod flight;
pub mod network;
#[cfg(test)]
pub(crate) mod testing;

/// `skyroutes::prelude` includes the city/flight definitions, the network
/// store, and the crate error type.
pub mod prelude {
    pub use super::{city::*, error::*, flight::*, network::*};
}
