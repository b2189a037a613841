//! Tests for `TileSet` membership and set operations

#[cfg(test)]
mod tests {
    use tileilp::vocabulary::bitset::TileSet;

    // Verifies a new set is empty
    // Verified by initializing the bits to 1
    #[test]
    fn test_new_set_is_empty() {
        let set = TileSet::new(10);
        assert_eq!(set.count(), 0);
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 10);
    }

    // Tests zero-based insertion and membership
    // Verified by shifting the stored index by one
    #[test]
    fn test_insert_and_contains() {
        let mut set = TileSet::new(10);
        set.insert(0);
        set.insert(9);
        assert!(set.contains(0));
        assert!(set.contains(9));
        assert!(!set.contains(5));
        assert_eq!(set.to_vec(), vec![0, 9]);
    }

    // Tests indices past the capacity are ignored rather than panicking
    // Verified by removing the bounds check in insert
    #[test]
    fn test_insert_out_of_range_is_ignored() {
        let mut set = TileSet::new(3);
        set.insert(3);
        set.insert(100);
        assert!(set.is_empty());
        assert!(!set.contains(100));
    }

    // Tests removal clears only the given index
    // Verified by clearing the whole set in remove
    #[test]
    fn test_remove() {
        let mut set = TileSet::new(4);
        for tile in 0..4 {
            set.insert(tile);
        }
        set.remove(2);
        assert_eq!(set.to_vec(), vec![0, 1, 3]);
        set.remove(7);
        assert_eq!(set.count(), 3);
    }

    // Tests union merges members of both sets
    // Verified by changing union to intersection
    #[test]
    fn test_union_with() {
        let mut left = TileSet::new(6);
        left.insert(1);
        left.insert(3);
        let mut right = TileSet::new(6);
        right.insert(3);
        right.insert(5);

        left.union_with(&right);
        assert_eq!(left.to_vec(), vec![1, 3, 5]);
        assert_eq!(right.to_vec(), vec![3, 5]);
    }

    // Tests iteration yields ascending indices
    // Verified by reversing iteration order
    #[test]
    fn test_iter_is_ascending() {
        let mut set = TileSet::new(8);
        for index in [7, 2, 4] {
            set.insert(index);
        }
        let collected: Vec<usize> = set.iter().collect();
        assert_eq!(collected, vec![2, 4, 7]);
        assert_eq!(set.to_string(), "TileSet(3 tiles: [2, 4, 7])");
    }
}
