/*!
Minimum-weight spanning tree via Prim's greedy tree growth.

A bitset tracks the cities already attached to the growing tree; a min-heap
holds the candidate flights radiating out of it. Each round pops the cheapest
candidate, skips it if its destination is already attached, and otherwise
takes the flight and widens the candidate set by the destination's flights.
Flights to already-attached cities may still enter the heap and are discarded
at pop time.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use super::*;

/// Minimum-spanning-tree queries on a network.
pub trait SpanningTree {
    /// Returns the flights of a minimum-total-distance tree connecting every
    /// city in `root`'s connected component, rooted at `root`. For a
    /// connected network this is exactly `n - 1` flights; on a disconnected
    /// network only the reachable component is spanned.
    ///
    /// Equal-distance flights are resolved in unspecified order; only the
    /// total tree distance is guaranteed minimal.
    /// ** Panics if `root >= n` **
    fn min_spanning_tree(&self, root: City) -> Vec<Flight>;

    /// Name-keyed variant of [`min_spanning_tree`](SpanningTree::min_spanning_tree).
    /// Fails with [`NetworkError::UnknownCity`] if the name is absent.
    fn min_spanning_tree_from(&self, root: &str) -> Result<Vec<Flight>>;

    /// Spanning tree rooted at an arbitrary city; empty on an empty network.
    fn min_spanning_tree_any(&self) -> Vec<Flight>;
}

impl SpanningTree for RouteNetwork {
    fn min_spanning_tree(&self, root: City) -> Vec<Flight> {
        let mut tree = Vec::new();

        let mut attached = self.city_bitset_unset();
        attached.set_bit(root);

        let mut candidates: BinaryHeap<Reverse<Flight>> =
            self.flights_of(root).iter().map(|&f| Reverse(f)).collect();

        while let Some(Reverse(flight)) = candidates.pop() {
            if attached.set_bit(flight.destination) {
                continue;
            }
            tree.push(flight);
            if tree.len() + 1 == self.len() {
                break;
            }

            for &next in self.flights_of(flight.destination) {
                if !attached.get_bit(next.destination) {
                    candidates.push(Reverse(next));
                }
            }
        }

        tree
    }

    fn min_spanning_tree_from(&self, root: &str) -> Result<Vec<Flight>> {
        let root = self
            .city_of(root)
            .ok_or_else(|| NetworkError::UnknownCity(root.to_owned()))?;

        Ok(self.min_spanning_tree(root))
    }

    fn min_spanning_tree_any(&self) -> Vec<Flight> {
        if self.is_empty() {
            return Vec::new();
        }
        self.min_spanning_tree(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn total_distance(tree: &[Flight]) -> Distance {
        tree.iter().map(|f| f.distance).sum()
    }

    /// Every flight must attach exactly one yet-unattached city, starting
    /// from the root.
    fn assert_is_tree(network: &RouteNetwork, root: City, tree: &[Flight]) {
        let mut attached = network.city_bitset_unset();
        attached.set_bit(root);

        for flight in tree {
            assert!(attached.get_bit(flight.source));
            assert!(!attached.set_bit(flight.destination));
        }
    }

    #[test]
    fn road_network_weight_is_root_invariant() {
        let network = road_network();

        for root in network.cities() {
            let tree = network.min_spanning_tree(root);
            assert_eq!(tree.len(), network.len() - 1);
            assert_eq!(total_distance(&tree), 1038);
            assert_is_tree(&network, root, &tree);
        }
    }

    #[test]
    fn numeric_network_weight() {
        let network = numeric_network();

        for root in ["5", "1", "6"] {
            let tree = network.min_spanning_tree_from(root).unwrap();
            assert_eq!(tree.len(), network.len() - 1);
            assert_eq!(total_distance(&tree), 17);
        }
    }

    #[test]
    fn arbitrary_root_spans_the_network() {
        let network = road_network();
        let tree = network.min_spanning_tree_any();

        assert_eq!(tree.len(), network.len() - 1);
        assert_eq!(total_distance(&tree), 1038);

        assert!(RouteNetwork::new().min_spanning_tree_any().is_empty());
    }

    #[test]
    fn unknown_root_is_an_error() {
        let network = road_network();
        assert_eq!(
            network.min_spanning_tree_from("Atlantis"),
            Err(NetworkError::UnknownCity("Atlantis".to_owned()))
        );
    }

    #[test]
    fn disconnected_network_spans_the_root_component_only() {
        let mut network = RouteNetwork::new();
        network.add_connection("A", "B", 1);
        network.add_connection("B", "C", 2);
        network.add_connection("X", "Y", 3);

        let a = network.city_of("A").unwrap();
        let x = network.city_of("X").unwrap();

        let tree = network.min_spanning_tree(a);
        assert_eq!(tree.len(), 2);
        assert_eq!(total_distance(&tree), 3);

        let tree = network.min_spanning_tree(x);
        assert_eq!(tree.len(), 1);
        assert_eq!(total_distance(&tree), 3);
    }

    #[test]
    fn root_invariant_on_random_networks() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for _ in 0..10 {
            let network = random_connected_network(rng, 30, 50);

            let weights = network
                .cities()
                .map(|root| {
                    let tree = network.min_spanning_tree(root);
                    assert_eq!(tree.len(), network.len() - 1);
                    assert_is_tree(&network, root, &tree);
                    total_distance(&tree)
                })
                .collect_vec();

            assert!(weights.iter().all_equal());
        }
    }
}
