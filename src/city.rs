/*!
# City Representation

Cities are interned into a dense arena on first reference and addressed by a
`u32` handle afterwards. All cross-references between cities and flights are
handles into that arena, never owning links, which keeps identity questions
trivial: two handles are the same city exactly if they are equal.
*/

use stream_bitset::bitset::BitSetImpl;

/// A city handle: an index from `0` to `n - 1` into the network's arena.
pub type City = u32;

/// There can be at most `2^32 - 1` cities in a network.
pub type NumCities = City;

/// BitSet over city handles, used as visited-/attached-set by the algorithms.
pub type CityBitSet = BitSetImpl<City>;
