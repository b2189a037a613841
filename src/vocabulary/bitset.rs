use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over tile indices of one vocabulary
///
/// Uses the vocabulary's 0-based indices directly. Every tag or tile reference
/// resolves to one of these before constraints are emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    bits: BitVec,
}

impl TileSet {
    /// Create a set with no tiles present
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Number of tiles the set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a tile index; indices past the capacity are ignored
    pub fn insert(&mut self, tile: usize) {
        if tile < self.bits.len() {
            self.bits.set(tile, true);
        }
    }

    /// Remove a tile index
    pub fn remove(&mut self, tile: usize) {
        if tile < self.bits.len() {
            self.bits.set(tile, false);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Add every tile of `other` to this set in place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate member indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all tile indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileSet({} tiles: {:?})", self.count(), self.to_vec())
    }
}
