//! Tests for collapsing a single cell to a random remaining option

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;
    use wavetile::algorithm::bitset::TileBitset;
    use wavetile::algorithm::collapse::collapse;
    use wavetile::spatial::grid::Cell;

    // Verifies the chosen tile comes from the options and the cell is marked collapsed
    // Verified by choosing from the full catalog range instead of the options
    #[test]
    fn test_collapse_picks_remaining_option() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cell = Cell::new([0, 0], 8);
        cell.restrict(&TileBitset::from_indices([2, 5], 8));

        let tile = collapse(&mut cell, &mut rng).expect("cell has options");

        assert!(tile == 2 || tile == 5);
        assert!(cell.is_collapsed());
        assert_eq!(cell.option_count(), 1);
        assert_eq!(cell.chosen_tile(), Some(tile));
    }

    // Verifies an empty cell is left alone and reports no choice
    // Verified by removing the contradiction guard
    #[test]
    fn test_collapse_empty_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cell = Cell::new([1, 1], 3);
        cell.restrict(&TileBitset::new(3));

        assert_eq!(collapse(&mut cell, &mut rng), None);
        assert!(!cell.is_collapsed());
        assert!(cell.is_contradicted());
    }

    // Verifies a collapsed cell is never re-collapsed to a different tile
    // Verified by removing the already-collapsed guard
    #[test]
    fn test_collapse_is_irreversible() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut cell = Cell::new([0, 0], 4);
        let first = collapse(&mut cell, &mut rng);
        assert!(first.is_some());

        assert_eq!(collapse(&mut cell, &mut rng), None);
        assert_eq!(cell.chosen_tile(), first);
    }

    // Verifies every remaining option can be chosen
    // Verified by always picking the first option
    #[test]
    fn test_collapse_covers_all_options() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = HashSet::new();

        for _ in 0..300 {
            let mut cell = Cell::new([0, 0], 6);
            cell.restrict(&TileBitset::from_indices([0, 3, 4], 6));
            if let Some(tile) = collapse(&mut cell, &mut rng) {
                seen.insert(tile);
            }
        }

        assert_eq!(seen, HashSet::from([0, 3, 4]));
    }
}
