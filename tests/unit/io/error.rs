//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tileilp::TileError;
    use tileilp::io::error::{invalid_parameter, invalid_solution};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = TileError::FileSystem {
            path: "/tmp/catalog.json".into(),
            operation: "read catalog",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read catalog"));
        assert!(message.contains("/tmp/catalog.json"));
    }

    // Tests compile errors carry no source
    // Verified by returning a source for every variant
    #[test]
    fn test_compile_errors_have_no_source() {
        let errors = [
            TileError::DuplicateTileName { name: "A".into() },
            TileError::EmptyVocabulary,
            TileError::InvalidBoardDimensions { width: 0, height: 3 },
        ];
        assert!(errors.iter().all(|error| error.source().is_none()));
    }

    // Tests reference errors name the tile and where it was found
    // Verified by omitting the context from the message
    #[test]
    fn test_unknown_tile_reference_message() {
        let error = TileError::UnknownTileReference {
            tile: "ghost".into(),
            context: "exclude_tiles of 'A'".into(),
        };
        let message = error.to_string();
        assert!(message.contains("'ghost'"));
        assert!(message.contains("exclude_tiles of 'A'"));
    }

    // Tests contradiction errors name the cell and both tiles
    // Verified by omitting the second tile from the message
    #[test]
    fn test_contradictory_edge_condition_message() {
        let error = TileError::ContradictoryEdgeCondition {
            x: 3,
            y: 4,
            first: "A".into(),
            second: "B".into(),
        };
        let message = error.to_string();
        assert!(message.contains("(3, 4)"));
        assert!(message.contains("'A'"));
        assert!(message.contains("'B'"));
    }

    // Tests geometry errors show board dimensions
    // Verified by swapping width and height in the message
    #[test]
    fn test_geometry_messages() {
        let dimensions = TileError::InvalidBoardDimensions { width: 0, height: 7 };
        assert!(dimensions.to_string().contains("0x7"));

        let outside = TileError::CellOutOfBounds {
            x: 5,
            y: 1,
            board: (4, 2),
        };
        let message = outside.to_string();
        assert!(message.contains("(5, 1)"));
        assert!(message.contains("4x2"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("palette", &3, &"no colour for tile index 4");
        let message = error.to_string();
        assert!(message.contains("palette"));
        assert!(message.contains("'3'"));
        assert!(message.contains("no colour for tile index 4"));

        let solution = invalid_solution(&"cell (0, 0) holds more than one tile");
        assert!(matches!(solution, TileError::InvalidSolution { .. }));
    }

    // Tests catalog parse errors keep the serde error as source
    // Verified by dropping the serde error
    #[test]
    fn test_catalog_parse_error() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = TileError::CatalogParse {
            path: PathBuf::from("broken.json"),
            source: serde_error,
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("broken.json"));

        let converted: TileError = serde_json::from_str::<serde_json::Value>("[")
            .unwrap_err()
            .into();
        assert!(converted.source().is_some());
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = TileError::ImageExport {
            path: PathBuf::from("/readonly/grid.png"),
            source: image_error,
        };
        let message = error.to_string();
        assert!(message.contains("/readonly/grid.png"));
        assert!(message.contains("access denied"));
    }

    // Tests io errors convert with placeholder context
    // Verified by dropping the From implementation
    #[test]
    fn test_from_io_error() {
        let error: TileError = std::io::Error::other("disk gone").into();
        assert!(matches!(error, TileError::FileSystem { operation: "unknown", .. }));
    }
}
