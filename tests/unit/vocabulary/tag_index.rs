//! Tests for tag to tile-set resolution

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use tileilp::vocabulary::TagIndex;
    use tileilp::{Tag, TileType, TileVocabulary};

    fn vocabulary() -> TileVocabulary {
        TileVocabulary::new([
            TileType::new("belt_r").with_tags(["belt", "moving"]),
            TileType::new("belt_l").with_tags(["belt", "moving"]),
            TileType::new("rail").with_tags(["moving"]),
            TileType::new("wall"),
        ])
        .unwrap()
    }

    // Tests each tag maps to the tiles carrying it
    // Verified by indexing only the first tag of each tile
    #[test]
    fn test_tiles_with_tag() {
        let vocabulary = vocabulary();
        let index = TagIndex::new(&vocabulary);

        // belt_l=0, belt_r=1, rail=2, wall=3
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.tiles_with(&Tag::new("belt")).map(|s| s.to_vec()),
            Some(vec![0, 1])
        );
        assert_eq!(
            index.tiles_with(&Tag::new("moving")).map(|s| s.to_vec()),
            Some(vec![0, 1, 2])
        );
        assert!(index.tiles_with(&Tag::new("wall")).is_none());
    }

    // Tests resolving several tags unions their tile sets and skips unknown tags
    // Verified by intersecting instead of uniting
    #[test]
    fn test_resolve_union() {
        let vocabulary = vocabulary();
        let index = TagIndex::new(&vocabulary);
        let tags: BTreeSet<Tag> = ["belt", "nothing"].into_iter().map(Tag::from).collect();

        let set = index.resolve(&tags);
        assert_eq!(set.to_vec(), vec![0, 1]);
        assert_eq!(set.capacity(), 4);
        assert!(index.resolve(&BTreeSet::new()).is_empty());
    }

    // Tests a vocabulary without tags yields an empty index
    // Verified by inserting a placeholder tag
    #[test]
    fn test_untagged_vocabulary() {
        let vocabulary = TileVocabulary::new([TileType::new("a")]).unwrap();
        let index = TagIndex::new(&vocabulary);
        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
    }
}
