/*!
Breadth-first level-order traversal.

Provided as a lazy iterator over city handles ([`Bfs`]) plus a name-keyed
convenience that collects discovery order as city names. Cities are marked
visited when they are enqueued, so every reachable city is yielded exactly
once; sibling order within a level follows flight insertion order and carries
no guarantee.
*/

use std::collections::VecDeque;

use super::*;

/// A BFS iterator over the network, yielding cities in breadth-first
/// discovery order from a given starting city.
pub struct Bfs<'a> {
    network: &'a RouteNetwork,
    queue: VecDeque<City>,
    visited: CityBitSet,
}

impl<'a> Bfs<'a> {
    /// Creates a new traversal starting (and first yielding) `start`.
    /// ** Panics if `start >= n` **
    pub fn new(network: &'a RouteNetwork, start: City) -> Self {
        assert!(start < network.number_of_cities());

        let mut visited = network.city_bitset_unset();
        visited.set_bit(start);

        Self {
            network,
            queue: VecDeque::from(vec![start]),
            visited,
        }
    }
}

impl Iterator for Bfs<'_> {
    type Item = City;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for flight in self.network.flights_of(u) {
            if !self.visited.set_bit(flight.destination) {
                self.queue.push_back(flight.destination);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.queue.len() + self.network.len() - self.visited.cardinality() as usize),
        )
    }
}

/// Breadth-first reachability queries on a network.
pub trait Traversal {
    /// Returns a lazy BFS iterator from `start`.
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: City) -> Bfs<'_>;

    /// Returns the names of all cities reachable from `start` in
    /// breadth-first discovery order, `start` first. Fails with
    /// [`NetworkError::UnknownCity`] if the name is absent.
    fn breadth_first(&self, start: &str) -> Result<Vec<String>>;
}

impl Traversal for RouteNetwork {
    fn bfs(&self, start: City) -> Bfs<'_> {
        Bfs::new(self, start)
    }

    fn breadth_first(&self, start: &str) -> Result<Vec<String>> {
        let start = self
            .city_of(start)
            .ok_or_else(|| NetworkError::UnknownCity(start.to_owned()))?;

        Ok(self.bfs(start).map(|u| self.name_of(u).to_owned()).collect())
    }
}
