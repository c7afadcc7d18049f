//! Tests for sockets, signature rotation and rotation-expanded catalogs

#[cfg(test)]
mod tests {
    use wavetile::io::error::WfcError;
    use wavetile::spatial::direction::Direction;
    use wavetile::spatial::tiles::{EdgeSignature, Rotation, Socket, TileCatalog};

    fn signature(codes: [&str; 4]) -> EdgeSignature {
        EdgeSignature::from_codes(codes).expect("valid signature")
    }

    // Verifies socket validation rejects empty codes and separators
    // Verified by accepting any string in Socket::new
    #[test]
    fn test_socket_validation() {
        assert!(Socket::new("ABA").is_ok());
        assert!(matches!(
            Socket::new(""),
            Err(WfcError::InvalidSignature { .. })
        ));
        assert!(Socket::new("A B").is_err());
        assert!(Socket::new("A,B").is_err());
        assert_eq!("  AAB ".parse::<Socket>().map(|s| s.to_string()).ok(), Some("AAB".to_string()));
    }

    // Verifies sockets match their reversal rather than themselves
    // Verified by comparing sockets for plain equality
    #[test]
    fn test_socket_reversal_matching() {
        let left = Socket::new("AAB").expect("valid");
        let right = Socket::new("BAA").expect("valid");

        assert_eq!(left.reversed(), right);
        assert!(left.matches(&right));
        assert!(right.matches(&left));
        assert!(!left.matches(&left));
        assert_eq!(left.as_str(), "AAB");
    }

    // Verifies parsing of comma-separated signatures and error cases
    // Verified by accepting signatures with three sockets
    #[test]
    fn test_signature_parsing() {
        let parsed: EdgeSignature = "ABA, ABA ,AAA,ABA".parse().expect("valid");
        assert_eq!(parsed, signature(["ABA", "ABA", "AAA", "ABA"]));
        assert_eq!(parsed.to_string(), "ABA,ABA,AAA,ABA");
        assert_eq!(parsed.socket(Direction::South).as_str(), "AAA");

        assert!(matches!(
            "AAA,AAA,AAA".parse::<EdgeSignature>(),
            Err(WfcError::InvalidSignature { .. })
        ));
        assert!("AAA,,AAA,AAA".parse::<EdgeSignature>().is_err());
        assert!("AAA,AAA,AAA,AAA,AAA".parse::<EdgeSignature>().is_err());
    }

    // Verifies a quarter turn moves each socket one side clockwise
    // Verified by rotating counter-clockwise instead
    #[test]
    fn test_rotation_moves_sockets_clockwise() {
        let base = signature(["N", "E", "S", "W"]);
        assert_eq!(base.rotated(Rotation::R0), base);
        assert_eq!(base.rotated(Rotation::R90), signature(["W", "N", "E", "S"]));
        assert_eq!(base.rotated(Rotation::R180), signature(["S", "W", "N", "E"]));
        assert_eq!(base.rotated(Rotation::R270), signature(["E", "S", "W", "N"]));

        let mut spun = base.clone();
        for _ in 0..4 {
            spun = spun.rotated(Rotation::R90);
        }
        assert_eq!(spun, base);
    }

    // Verifies rotation bookkeeping values
    // Verified by returning quarter turns from degrees
    #[test]
    fn test_rotation_values() {
        assert_eq!(Rotation::R270.degrees(), 270);
        assert_eq!(Rotation::R180.quarter_turns(), 2);
        assert_eq!(Rotation::R0.degrees(), 0);
    }

    // Verifies symmetric tiles contribute only their distinct orientations
    // Verified by appending every rotation without deduplication
    #[test]
    fn test_expand_deduplicates_per_tile() {
        let uniform = TileCatalog::expand(&[signature(["AAA", "AAA", "AAA", "AAA"])]);
        assert_eq!(uniform.len(), 1);

        let straight = TileCatalog::expand(&[signature(["ABA", "AAA", "ABA", "AAA"])]);
        assert_eq!(straight.len(), 2);
        let rotations: Vec<Rotation> = straight.tiles().iter().map(|t| t.rotation()).collect();
        assert_eq!(rotations, vec![Rotation::R0, Rotation::R90]);

        let junction = TileCatalog::expand(&[signature(["ABA", "ABA", "AAA", "ABA"])]);
        assert_eq!(junction.len(), 4);
    }

    // Verifies identical signatures from different base tiles are both kept
    // Verified by deduplicating across the whole catalog
    #[test]
    fn test_dedup_is_per_base_tile() {
        let catalog = TileCatalog::expand(&[
            signature(["AAA", "AAA", "AAA", "AAA"]),
            signature(["AAA", "AAA", "AAA", "AAA"]),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.base_count(), 2);
        assert_eq!(catalog.tile(1).map(|t| t.source()), Some(1));
    }

    // Verifies empty input is allowed by expand but rejected by build
    // Verified by removing the empty check in build
    #[test]
    fn test_empty_tileset() {
        let empty = TileCatalog::expand(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);

        assert!(matches!(
            TileCatalog::build(&[]),
            Err(WfcError::InvalidConfiguration { parameter: "tileset", .. })
        ));
    }

    // Verifies ids are sequential and variants are grouped by source
    // Verified by numbering tiles per base tile
    #[test]
    fn test_ids_and_variants() {
        let catalog = TileCatalog::build(&[
            signature(["AAA", "AAA", "AAA", "AAA"]),
            signature(["ABA", "ABA", "AAA", "ABA"]),
        ])
        .expect("non-empty");

        for (index, tile) in catalog.tiles().iter().enumerate() {
            assert_eq!(tile.id(), index);
        }
        let ids: Vec<usize> = catalog.variants_of(1).map(|t| t.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(catalog.tile(5).is_none());
    }

    // Verifies the precomputed adjacency sets for the blank tile
    // Verified by indexing the adjacency table with the opposite side
    #[test]
    fn test_compatible_with_blank_tile() {
        let catalog = TileCatalog::build(&[
            signature(["AAA", "AAA", "AAA", "AAA"]),
            signature(["ABA", "ABA", "AAA", "ABA"]),
        ])
        .expect("non-empty");

        let north = catalog.compatible_with(0, Direction::North).map(|s| s.to_vec());
        let east = catalog.compatible_with(0, Direction::East).map(|s| s.to_vec());
        assert_eq!(north, Some(vec![0, 1]));
        assert_eq!(east, Some(vec![0, 2]));
        assert!(catalog.compatible_with(9, Direction::North).is_none());
        assert!(!catalog.compatible(0, Direction::North, 9));
    }

    // Verifies compatibility uses the reversed facing socket
    // Verified by comparing the same side on both tiles
    #[test]
    fn test_asymmetric_sockets() {
        // Tile 0 shows AAB to the east; tile 1 shows BAA to the west
        let catalog = TileCatalog::expand(&[
            signature(["XXX", "AAB", "XXX", "XXX"]),
            signature(["YYY", "YYY", "YYY", "BAA"]),
        ]);
        let first_of = |source: usize| catalog.variants_of(source).next().map(|t| t.id());
        let a = first_of(0).expect("tile");
        let b = first_of(1).expect("tile");

        assert!(catalog.compatible(a, Direction::East, b));
        assert!(catalog.compatible(b, Direction::West, a));
        assert!(!catalog.compatible(a, Direction::West, b));
    }
}
