//! Grid geometry helpers.

use crate::state::Position;

/// The four orthogonally adjacent positions, unfiltered; callers bounds-check.
pub fn neighbors4(position: Position) -> [Position; 4] {
    let Position { x, y } = position;
    [
        Position::new(x + 1, y),
        Position::new(x - 1, y),
        Position::new(x, y + 1),
        Position::new(x, y - 1),
    ]
}

/// Taxicab distance between two positions, saturating at `u32::MAX`.
pub fn manhattan(a: Position, b: Position) -> u32 {
    a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y))
}

/// True when `b` is one of the four orthogonal neighbours of `a`.
pub fn is_adjacent(a: Position, b: Position) -> bool {
    neighbors4(a).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_orthogonal_and_unfiltered() {
        let around_origin = neighbors4(Position::ORIGIN);
        assert!(around_origin.contains(&Position::new(-1, 0)));
        assert!(around_origin.contains(&Position::new(0, -1)));
        assert!(around_origin.contains(&Position::new(1, 0)));
        assert!(around_origin.contains(&Position::new(0, 1)));
        assert!(!around_origin.contains(&Position::new(1, 1)));
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Position::new(1, 1), Position::new(3, 3)), 4);
        assert_eq!(manhattan(Position::new(3, 3), Position::new(1, 1)), 4);
        assert_eq!(manhattan(Position::new(-2, 0), Position::new(2, 0)), 4);
        assert_eq!(manhattan(Position::new(2, 2), Position::new(2, 2)), 0);
    }

    #[test]
    fn manhattan_saturates_at_extremes() {
        let low = Position::new(i32::MIN, i32::MIN);
        let high = Position::new(i32::MAX, i32::MAX);
        assert_eq!(manhattan(low, high), u32::MAX);
        assert_eq!(manhattan(Position::new(i32::MIN, 0), Position::new(i32::MAX, 0)), u32::MAX);
    }

    #[test]
    fn diagonal_is_not_adjacent() {
        assert!(is_adjacent(Position::new(2, 2), Position::new(2, 3)));
        assert!(!is_adjacent(Position::new(2, 2), Position::new(3, 3)));
        assert!(!is_adjacent(Position::new(2, 2), Position::new(2, 2)));
    }
}
