//! Placement coordinates.

use serde::{Deserialize, Serialize};

/// A piece from the mover's pool with its top-left corner at (row, col).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Placement {
    pub piece_index: usize,
    pub row: usize,
    pub col: usize,
}

impl Placement {
    pub fn new(piece_index: usize, row: usize, col: usize) -> Self {
        Self {
            piece_index,
            row,
            col,
        }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "piece {} at ({},{})", self.piece_index, self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_new() {
        let p = Placement::new(3, 1, 2);
        assert_eq!(p.piece_index, 3);
        assert_eq!(p.row, 1);
        assert_eq!(p.col, 2);
    }

    #[test]
    fn test_ordering_is_piece_then_row_then_col() {
        let mut v = vec![
            Placement::new(1, 0, 0),
            Placement::new(0, 2, 0),
            Placement::new(0, 1, 5),
            Placement::new(0, 1, 2),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Placement::new(0, 1, 2),
                Placement::new(0, 1, 5),
                Placement::new(0, 2, 0),
                Placement::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Placement::new(4, 0, 9).to_string(), "piece 4 at (0,9)");
    }
}
