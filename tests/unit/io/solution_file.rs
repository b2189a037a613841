//! Tests for reading solver solution listings

#[cfg(test)]
mod tests {
    use tileilp::TileError;
    use tileilp::io::solution_file::{parse_solution, read_solution};
    use tileilp::model::cube::DecisionCube;

    // Tests plain name/value listings with objective lines mixed in
    // Verified by reading the first numeric token on each line
    #[test]
    fn test_name_value_listing() {
        let cube = DecisionCube::new(2, 1, 2);
        let text = "objective value: 3\nTileField_0_0_1 1\nTileField_1_0_0 0\nTileField_1_0_1 1\n";
        let assignment = parse_solution(&cube, text);

        assert_eq!(assignment.ones(), 2);
        assert!(assignment.value(cube.variable(0, 0, 1).unwrap()));
        assert!(assignment.value(cube.variable(1, 0, 1).unwrap()));
    }

    // Tests indexed listings with trailing reduced costs
    // Verified by taking the last numeric token
    #[test]
    fn test_indexed_listing() {
        let cube = DecisionCube::new(1, 1, 2);
        let text = "   0 TileField_0_0_0   0.9999999   (obj:0)\n   1 TileField_0_0_1   0   (obj:0)\n";
        let assignment = parse_solution(&cube, text);
        assert!(assignment.value(cube.variable(0, 0, 0).unwrap()));
        assert_eq!(assignment.ones(), 1);
    }

    // Tests files are read and missing files reported
    // Verified by returning an empty assignment for missing files
    #[test]
    fn test_read_solution() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.sol");
        std::fs::write(&path, "TileField_0_0_0 1\n").unwrap();
        let cube = DecisionCube::new(1, 1, 1);

        assert_eq!(read_solution(&cube, &path).unwrap().ones(), 1);
        assert!(matches!(
            read_solution(&cube, &dir.path().join("absent.sol")),
            Err(TileError::FileSystem { .. })
        ));
    }
}
