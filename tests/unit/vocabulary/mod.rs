pub mod bitset;
pub mod tag_index;
