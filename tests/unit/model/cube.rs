//! Tests for decision cube layout, lookup and naming

#[cfg(test)]
mod tests {
    use tileilp::model::cube::DecisionCube;

    // Tests the flat index follows (x * H + y) * N + t
    // Verified by swapping x and y in the index function
    #[test]
    fn test_flat_index_layout() {
        let cube = DecisionCube::new(3, 2, 4);
        assert_eq!(cube.len(), 24);
        assert_eq!(cube.dim(), (3, 2, 4));
        for x in 0..3 {
            for y in 0..2 {
                for t in 0..4 {
                    let variable = cube.variable(x, y, t).unwrap();
                    assert_eq!(variable.index(), (x * 2 + y) * 4 + t);
                    assert_eq!(cube.coordinates(variable), Some((x, y, t)));
                }
            }
        }
    }

    // Tests lookups outside the cube return None
    // Verified by clamping coordinates instead of rejecting them
    #[test]
    fn test_out_of_range_lookup() {
        let cube = DecisionCube::new(2, 2, 2);
        assert!(cube.variable(2, 0, 0).is_none());
        assert!(cube.variable(0, 2, 0).is_none());
        assert!(cube.variable(0, 0, 2).is_none());
        assert!(cube.cell(0, 5).is_none());
    }

    // Tests a cell slice holds that cell's variables in tile order
    // Verified by slicing along the wrong axis
    #[test]
    fn test_cell_slice() {
        let cube = DecisionCube::new(2, 3, 3);
        let cell = cube.cell(1, 2).unwrap();
        let indices: Vec<usize> = cell.iter().map(|v| v.index()).collect();
        assert_eq!(indices, vec![15, 16, 17]);
    }

    // Tests every cell slice agrees with per-variable lookup
    // Verified by indexing the second axis with x
    #[test]
    fn test_cell_matches_variable_lookup() {
        let cube = DecisionCube::new(3, 4, 2);
        for x in 0..3 {
            for y in 0..4 {
                let cell: Vec<_> = cube.cell(x, y).unwrap().iter().copied().collect();
                let expected: Vec<_> = (0..2).filter_map(|t| cube.variable(x, y, t)).collect();
                assert_eq!(cell, expected);
            }
        }
    }

    // Tests variable names round-trip through parse_name
    // Verified by formatting y before x
    #[test]
    fn test_names() {
        let cube = DecisionCube::new(4, 3, 2);
        let variable = cube.variable(3, 1, 1).unwrap();
        assert_eq!(cube.name(variable).as_deref(), Some("TileField_3_1_1"));
        assert_eq!(cube.parse_name("TileField_3_1_1"), Some(variable));
        assert_eq!(cube.parse_name("TileField_9_1_1"), None);
        assert_eq!(cube.parse_name("TileField_3_1"), None);
        assert_eq!(cube.parse_name("TileField_3_1_1_0"), None);
        assert_eq!(cube.parse_name("Other_3_1_1"), None);
    }

    // Tests iteration covers every variable in flat order
    // Verified by iterating in column-major order
    #[test]
    fn test_iter_order() {
        let cube = DecisionCube::new(2, 2, 2);
        let indices: Vec<usize> = cube.iter().map(|v| v.index()).collect();
        assert_eq!(indices, (0..8).collect::<Vec<_>>());
    }
}
