use std::fmt::{Debug, Display};

use crate::city::City;

/// Accumulated flight distance. Edge distances are non-negative by
/// construction, so an unsigned type suffices.
pub type Distance = u64;

/// Sentinel distance for an unreachable target.
pub const INFINITE_DISTANCE: Distance = Distance::MAX;

/// We limit the number of undirected connections to `2^32 - 1`.
pub type NumConnections = u32;

/// One direction of an undirected connection between two cities.
///
/// Every connection inserted into a network produces two `Flight` records
/// with the same distance: one stored at `source` and its mirror stored at
/// `destination`.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Flight {
    pub source: City,
    pub destination: City,
    pub distance: Distance,
}

impl Flight {
    pub const fn new(source: City, destination: City, distance: Distance) -> Self {
        Self {
            source,
            destination,
            distance,
        }
    }

    /// Returns the mirrored flight of the same connection.
    pub const fn reverse(&self) -> Self {
        Self::new(self.destination, self.source, self.distance)
    }
}

/// Flights are ordered by distance first so that a `BinaryHeap` over
/// `Reverse<Flight>` pops the cheapest candidate; the endpoint tie-break only
/// keeps the order total.
impl Ord for Flight {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.distance, self.source, self.destination).cmp(&(
            other.distance,
            other.source,
            other.destination,
        ))
    }
}

impl PartialOrd for Flight {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Flight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}):{}", self.source, self.destination, self.distance)
    }
}

impl Debug for Flight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(City, City, Distance)> for Flight {
    fn from(value: (City, City, Distance)) -> Self {
        Flight::new(value.0, value.1, value.2)
    }
}
