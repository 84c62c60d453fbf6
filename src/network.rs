/*!
# The Network Store

[`RouteNetwork`] owns every city and flight. Cities live in a dense arena
indexed by [`City`] handles; a `FxHashMap` maps city names to handles. The
store enforces the insertion invariants (no self-loops, no negative
distances, at most one connection per city pair) and is treated as read-only
by every query in [`crate::algo`].
*/

use std::fmt::Display;
use std::ops::Range;

use fxhash::FxHashMap;
use smallvec::SmallVec;

use crate::city::*;
use crate::flight::*;

/// One arena slot: a city name plus its outgoing flights in insertion order.
#[derive(Clone)]
struct CityRecord {
    name: String,
    flights: SmallVec<[Flight; 4]>,
}

/// An undirected, weighted network of cities and flights.
///
/// Built once via repeated [`add_connection`](RouteNetwork::add_connection)
/// calls; cities are created implicitly on first reference and never removed.
#[derive(Clone, Default)]
pub struct RouteNetwork {
    cities: Vec<CityRecord>,
    names: FxHashMap<String, City>,
    num_connections: NumConnections,
}

impl RouteNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an undirected connection of the given distance between two cities,
    /// creating either city on first reference.
    ///
    /// Returns *false* if the distance is negative, both names are equal, or
    /// the connection already exists; a failed call leaves the store
    /// completely unchanged. All checks happen before any mutation.
    pub fn add_connection(&mut self, source: &str, destination: &str, distance: i64) -> bool {
        if distance < 0 || source == destination {
            return false;
        }

        if let (Some(u), Some(v)) = (self.city_of(source), self.city_of(destination)) {
            if self.has_connection(u, v) {
                return false;
            }
        }

        let u = self.intern(source);
        let v = self.intern(destination);
        let flight = Flight::new(u, v, distance as Distance);

        self.cities[u as usize].flights.push(flight);
        self.cities[v as usize].flights.push(flight.reverse());
        self.num_connections += 1;

        true
    }

    /// Looks up a city handle by name. Never creates.
    pub fn city_of(&self, name: &str) -> Option<City> {
        self.names.get(name).copied()
    }

    /// Returns the name of a city.
    /// ** Panics if `u >= n` **
    pub fn name_of(&self, u: City) -> &str {
        &self.cities[u as usize].name
    }

    /// Returns the outgoing flights of a city in insertion order.
    /// ** Panics if `u >= n` **
    pub fn flights_of(&self, u: City) -> &[Flight] {
        &self.cities[u as usize].flights
    }

    /// Returns the number of outgoing flights of a city.
    /// ** Panics if `u >= n` **
    pub fn degree_of(&self, u: City) -> NumCities {
        self.cities[u as usize].flights.len() as NumCities
    }

    /// Returns *true* if a flight from `u` to `v` exists. Mirrored insertion
    /// makes this symmetric.
    /// ** Panics if `u >= n` **
    pub fn has_connection(&self, u: City, v: City) -> bool {
        self.flights_of(u).iter().any(|f| f.destination == v)
    }

    /// Returns the number of distinct cities.
    pub fn number_of_cities(&self) -> NumCities {
        self.cities.len() as NumCities
    }

    /// Returns the number of cities as `usize`.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns *true* if the network has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns the number of undirected connections (mirrored pairs count once).
    pub fn number_of_connections(&self) -> NumConnections {
        self.num_connections
    }

    /// Returns an iterator over all city handles in arena order. The order is
    /// stable within a single build (first-reference order) but carries no
    /// further meaning.
    pub fn cities(&self) -> Range<City> {
        0..self.number_of_cities()
    }

    /// Returns empty bitset with one entry per city.
    pub fn city_bitset_unset(&self) -> CityBitSet {
        CityBitSet::new(self.number_of_cities())
    }

    /// Interns a name, reusing the existing handle if the name is known.
    fn intern(&mut self, name: &str) -> City {
        if let Some(&u) = self.names.get(name) {
            return u;
        }

        let u = self.number_of_cities();
        self.cities.push(CityRecord {
            name: name.to_owned(),
            flights: SmallVec::new(),
        });
        self.names.insert(name.to_owned(), u);
        u
    }
}

/// Diagnostic rendering of the store, one line per city:
/// `V: <name> | E: [<src>, <dst>][<src>, <dst>]...`
impl Display for RouteNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for record in &self.cities {
            write!(f, "V: {} | E: ", record.name)?;
            for flight in &record.flights {
                write!(
                    f,
                    "[{}, {}]",
                    self.name_of(flight.source),
                    self.name_of(flight.destination)
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
