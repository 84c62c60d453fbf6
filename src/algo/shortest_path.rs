/*!
Single-source/single-target shortest distance.

The search is Dijkstra's relaxation expressed over a frontier of candidate
**journeys** instead of per-city best-distance arrays with decrease-key: a
[`JourneyQueue`] keeps a min-heap of journeys plus an explicit visited set and
discards stale entries lazily at pop time. Because the heap always yields the
least accumulated cost first and every city is expanded at most once, the
first expansion of a city carries its true shortest distance as long as all
flight distances are non-negative, which the store enforces at insertion.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use super::*;

/// A candidate path state during shortest-distance search: the immediate
/// predecessor, the arrival city, and the cost accumulated from the source.
/// Transient per search, never stored in the network.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Journey {
    pub predecessor: City,
    pub arrival: City,
    pub cost: Distance,
}

/// Cost-first ordering; the city tie-break only keeps the order total.
impl Ord for Journey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.cost, self.arrival, self.predecessor).cmp(&(
            other.cost,
            other.arrival,
            other.predecessor,
        ))
    }
}

impl PartialOrd for Journey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier of journeys with **lazy deletion**: journeys whose
/// arrival city has already been visited stay in the heap until they surface
/// at pop time and are discarded there.
pub struct JourneyQueue {
    pending: BinaryHeap<Reverse<Journey>>,
    visited: CityBitSet,
}

impl JourneyQueue {
    /// Creates an empty frontier for `n` cities with the source already
    /// marked visited.
    pub fn new(n: NumCities, source: City) -> Self {
        let mut visited = CityBitSet::new(n);
        visited.set_bit(source);
        Self {
            pending: BinaryHeap::new(),
            visited,
        }
    }

    /// Enqueues a journey, marking its predecessor city visited: the
    /// predecessor is the city that was just expanded.
    pub fn push(&mut self, journey: Journey) {
        self.visited.set_bit(journey.predecessor);
        self.pending.push(Reverse(journey));
    }

    /// Pops the least-cost journey whose arrival city is still unvisited,
    /// marks that arrival visited, and returns it. Stale journeys surfacing
    /// before it are discarded. Returns `None` once the frontier is empty.
    pub fn pop_next_unvisited(&mut self) -> Option<Journey> {
        while let Some(Reverse(journey)) = self.pending.pop() {
            if !self.visited.set_bit(journey.arrival) {
                return Some(journey);
            }
        }
        None
    }
}

/// Shortest-distance queries on a network.
pub trait ShortestPath {
    /// Returns the minimum total distance over any path from `source` to
    /// `target`, [`INFINITE_DISTANCE`] if `target` is unreachable, and `0`
    /// (without searching) if both are the same city.
    ///
    /// Equal-cost paths are resolved in unspecified order; only the minimum
    /// value is guaranteed.
    /// ** Panics if `source >= n || target >= n` **
    fn shortest_distance(&self, source: City, target: City) -> Distance;

    /// Name-keyed variant of [`shortest_distance`](ShortestPath::shortest_distance).
    /// Fails with [`NetworkError::UnknownCity`] if either name is absent.
    fn shortest_distance_between(&self, source: &str, target: &str) -> Result<Distance>;
}

impl ShortestPath for RouteNetwork {
    fn shortest_distance(&self, source: City, target: City) -> Distance {
        if source == target {
            return 0;
        }

        let mut best = INFINITE_DISTANCE;
        let mut pending = JourneyQueue::new(self.number_of_cities(), source);

        for flight in self.flights_of(source) {
            let journey = Journey {
                predecessor: source,
                arrival: flight.destination,
                cost: flight.distance,
            };
            if journey.arrival == target {
                best = best.min(journey.cost);
            }
            pending.push(journey);
        }

        while let Some(current) = pending.pop_next_unvisited() {
            for flight in self.flights_of(current.arrival) {
                let journey = Journey {
                    predecessor: flight.source,
                    arrival: flight.destination,
                    cost: current.cost + flight.distance,
                };
                if journey.arrival == target {
                    best = best.min(journey.cost);
                }
                pending.push(journey);
            }
        }

        best
    }

    fn shortest_distance_between(&self, source: &str, target: &str) -> Result<Distance> {
        let source = self
            .city_of(source)
            .ok_or_else(|| NetworkError::UnknownCity(source.to_owned()))?;
        let target = self
            .city_of(target)
            .ok_or_else(|| NetworkError::UnknownCity(target.to_owned()))?;

        Ok(self.shortest_distance(source, target))
    }
}
