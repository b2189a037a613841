use crate::vocabulary::bitset::TileSet;
use crate::vocabulary::tag::Tag;
use crate::vocabulary::vocabulary::TileVocabulary;
use std::collections::{BTreeMap, BTreeSet};

/// Mapping from each tag to the tiles carrying it
///
/// Built once per compilation and shared by the exclusion and matching
/// constraint families.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagIndex {
    tile_count: usize,
    tiles_by_tag: BTreeMap<Tag, TileSet>,
}

impl TagIndex {
    /// Index every tag appearing on a tile of the vocabulary
    pub fn new(vocabulary: &TileVocabulary) -> Self {
        let tile_count = vocabulary.len();
        let mut tiles_by_tag: BTreeMap<Tag, TileSet> = BTreeMap::new();
        for (index, tile) in vocabulary.iter() {
            for tag in tile.tags() {
                tiles_by_tag
                    .entry(tag.clone())
                    .or_insert_with(|| TileSet::new(tile_count))
                    .insert(index);
            }
        }

        Self {
            tile_count,
            tiles_by_tag,
        }
    }

    /// Tiles carrying a tag, if any tile carries it
    pub fn tiles_with(&self, tag: &Tag) -> Option<&TileSet> {
        self.tiles_by_tag.get(tag)
    }

    /// Union of the tiles carrying any of the given tags
    ///
    /// Tags no tile carries contribute nothing.
    pub fn resolve(&self, tags: &BTreeSet<Tag>) -> TileSet {
        let mut set = TileSet::new(self.tile_count);
        for tiles in tags.iter().filter_map(|tag| self.tiles_by_tag.get(tag)) {
            set.union_with(tiles);
        }
        set
    }

    /// Iterate tags with their tiles in tag order
    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &TileSet)> {
        self.tiles_by_tag.iter()
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.tiles_by_tag.len()
    }

    /// True when no tile carries a tag
    pub fn is_empty(&self) -> bool {
        self.tiles_by_tag.is_empty()
    }
}
