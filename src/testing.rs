/*!
Shared fixtures for the test modules: two fixed scenario networks plus a
seeded random connected-network builder.
*/

use rand::Rng;

use crate::prelude::*;

/// 13-connection midwest road network used by the scenario tests.
pub(crate) fn road_network() -> RouteNetwork {
    let mut network = RouteNetwork::new();

    for (a, b, distance) in [
        ("Chicago", "Detroit", 281),
        ("Chicago", "Toledo", 244),
        ("Chicago", "Indianapolis", 181),
        ("Detroit", "Toledo", 60),
        ("Indianapolis", "Cincinnati", 110),
        ("Cincinnati", "Toledo", 198),
        ("Cincinnati", "Columbus", 101),
        ("Columbus", "Cleveland", 143),
        ("Toledo", "Cleveland", 117),
        ("Columbus", "Pittsburgh", 185),
        ("Cleveland", "Buffalo", 191),
        ("Pittsburgh", "Buffalo", 216),
        ("Pittsburgh", "Cleveland", 135),
    ] {
        assert!(network.add_connection(a, b, distance));
    }

    network
}

/// 9-connection numeric graph used by the scenario tests.
pub(crate) fn numeric_network() -> RouteNetwork {
    let mut network = RouteNetwork::new();

    for (a, b, distance) in [
        ("1", "5", 4),
        ("1", "2", 2),
        ("1", "4", 1),
        ("5", "4", 9),
        ("4", "3", 5),
        ("2", "6", 7),
        ("6", "3", 8),
        ("2", "4", 3),
        ("2", "3", 3),
    ] {
        assert!(network.add_connection(a, b, distance));
    }

    network
}

/// Builds a connected network of `n` cities: a random spanning tree first,
/// then up to `extra` additional random connections (duplicates and
/// self-loops are simply rejected by the store).
pub(crate) fn random_connected_network<R: Rng>(
    rng: &mut R,
    n: NumCities,
    extra: u32,
) -> RouteNetwork {
    let mut network = RouteNetwork::new();

    for v in 1..n {
        let u = rng.random_range(0..v);
        let distance = rng.random_range(1..100);
        assert!(network.add_connection(&format!("c{u}"), &format!("c{v}"), distance));
    }

    for _ in 0..extra {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        let distance = rng.random_range(1..100);
        network.add_connection(&format!("c{u}"), &format!("c{v}"), distance);
    }

    assert_eq!(network.number_of_cities(), n);
    network
}
