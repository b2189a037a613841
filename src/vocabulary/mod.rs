//! Tile vocabulary: tags, tile types and the indices derived from them

/// Fixed-size tile index sets
pub mod bitset;
/// Atomic tile labels
pub mod tag;
/// Tag to tile-set index
pub mod tag_index;
/// Tile type definitions and directional match rules
pub mod tile;
/// Ordered tile collections with stable indices
#[allow(clippy::module_inception)]
pub mod vocabulary;

pub use bitset::TileSet;
pub use tag::Tag;
pub use tag_index::TagIndex;
pub use tile::{Direction, MatchRule, TileType};
pub use vocabulary::TileVocabulary;
