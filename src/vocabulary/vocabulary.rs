use crate::io::error::{Result, TileError};
use crate::vocabulary::bitset::TileSet;
use crate::vocabulary::tile::TileType;
use std::collections::BTreeMap;

/// The ordered, deduplicated set of tile types usable on a board
///
/// Tiles are sorted by name so that tile indices, and with them the variable
/// layout of every compiled model, are stable from run to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileVocabulary {
    tiles: Vec<TileType>,
    indices: BTreeMap<String, usize>,
}

impl TileVocabulary {
    /// Build a vocabulary, assigning each tile its index in name order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two tiles share a name
    /// - A tile name is not usable as an identifier
    pub fn new(tiles: impl IntoIterator<Item = TileType>) -> Result<Self> {
        let mut tiles: Vec<TileType> = tiles.into_iter().collect();
        tiles.sort_by(|a, b| a.name().cmp(b.name()));

        let mut indices = BTreeMap::new();
        for (index, tile) in tiles.iter().enumerate() {
            if !is_identifier(tile.name()) {
                return Err(TileError::InvalidTileName {
                    name: tile.name().to_string(),
                });
            }
            if indices.insert(tile.name().to_string(), index).is_some() {
                return Err(TileError::DuplicateTileName {
                    name: tile.name().to_string(),
                });
            }
        }

        Ok(Self { tiles, indices })
    }

    /// Number of tile types
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when the vocabulary holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Index of the named tile
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Tile at an index
    pub fn get(&self, index: usize) -> Option<&TileType> {
        self.tiles.get(index)
    }

    /// Iterate tiles with their indices in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &TileType)> {
        self.tiles.iter().enumerate()
    }

    /// Tile names in index order
    pub fn names(&self) -> Vec<String> {
        self.tiles.iter().map(|tile| tile.name().to_string()).collect()
    }

    /// Index of the named tile, failing with the referencing context
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is not part of this vocabulary
    pub fn resolve(&self, name: &str, context: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| TileError::UnknownTileReference {
                tile: name.to_string(),
                context: context.to_string(),
            })
    }

    /// Resolve a set of tile names into a tile set
    ///
    /// # Errors
    ///
    /// Returns an error if any tile is not part of this vocabulary
    pub fn resolve_all<'a>(
        &self,
        names: impl IntoIterator<Item = &'a String>,
        context: &str,
    ) -> Result<TileSet> {
        let mut set = TileSet::new(self.len());
        for name in names {
            set.insert(self.resolve(name, context)?);
        }
        Ok(set)
    }
}

// Tile names end up inside variable and constraint names of exported models
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
