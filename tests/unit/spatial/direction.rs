//! Tests for compass direction relations and grid offsets

#[cfg(test)]
mod tests {
    use wavetile::spatial::direction::Direction;

    // Verifies opposite pairs and that opposite is its own inverse
    // Verified by mapping East to East in opposite
    #[test]
    fn test_opposite() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    // Verifies counter-clockwise turns cycle through every side
    // Verified by making counter_clockwise return the opposite side
    #[test]
    fn test_counter_clockwise_turns() {
        for direction in Direction::ALL {
            let half = direction.counter_clockwise().counter_clockwise();
            assert_eq!(half, direction.opposite(), "two quarter turns face the opposite side");
            assert_eq!(half.counter_clockwise().counter_clockwise(), direction);
        }
        assert_eq!(Direction::North.counter_clockwise(), Direction::West);
    }

    // Verifies signature order and that offsets of opposite sides cancel
    // Verified by swapping the row and column of the East offset
    #[test]
    fn test_index_and_offset() {
        let indices: Vec<usize> = Direction::ALL.iter().map(|d| d.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);

        assert_eq!(Direction::North.offset(), [-1, 0]);
        assert_eq!(Direction::East.offset(), [0, 1]);
        for direction in Direction::ALL {
            let [a_row, a_col] = direction.offset();
            let [b_row, b_col] = direction.opposite().offset();
            assert_eq!((a_row + b_row, a_col + b_col), (0, 0));
        }
    }

    // Verifies display names
    // Verified by printing the debug form
    #[test]
    fn test_display() {
        assert_eq!(Direction::South.to_string(), "south");
    }
}
