use std::collections::VecDeque;

use mazechase_core::{Direction, Point};

/// Translate a start-exclusive path into the moves that walk it.
///
/// Each consecutive pair `(origin, path[0])`, `(path[0], path[1])`, ... is
/// classified with [`Direction::between`] on a `rows` × `cols` torus, so
/// steps across an edge come out as the direction that wraps there. The
/// result has exactly one entry per path point; a non-adjacent pair yields
/// `Nop`.
pub fn to_directions(origin: Point, path: &[Point], rows: i32, cols: i32) -> VecDeque<Direction> {
    let mut prev = origin;
    path.iter()
        .map(|&p| {
            let d = Direction::between(prev, p, rows, cols);
            prev = p;
            d
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn empty_path_gives_no_moves() {
        assert!(to_directions(Point::new(2, 2), &[], 5, 5).is_empty());
    }

    #[test]
    fn plain_steps() {
        let path = [
            Point::new(2, 3),
            Point::new(1, 3),
            Point::new(1, 2),
            Point::new(2, 2),
        ];
        let dirs = to_directions(Point::new(2, 2), &path, 5, 5);
        assert_eq!(Vec::from(dirs), vec![Right, Up, Left, Down]);
    }

    #[test]
    fn wrapped_steps() {
        // 3 rows x 7 cols, crossing the left edge then the top edge.
        let path = [Point::new(1, 0), Point::new(1, 6), Point::new(0, 6), Point::new(2, 6)];
        let dirs = to_directions(Point::new(1, 1), &path, 3, 7);
        assert_eq!(Vec::from(dirs), vec![Left, Left, Up, Up]);
    }

    #[test]
    fn non_adjacent_pair_is_nop() {
        let path = [Point::new(0, 1), Point::new(2, 2)];
        let dirs = to_directions(Point::new(0, 0), &path, 5, 5);
        assert_eq!(Vec::from(dirs), vec![Right, Nop]);
    }
}
