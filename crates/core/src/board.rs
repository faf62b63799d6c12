//! board representation - square grid of cell owners, row-major
//! the board itself never checks legality, callers validate first

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Player, Shape};

pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 1000;

/// Out-of-range sizes are clamped, never rejected.
#[inline]
pub fn clamp_board_size(size: usize) -> usize {
    size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE)
}

/// Square occupancy grid. Each cell is empty or owned by exactly one player.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        let size = clamp_board_size(size);
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row * self.size + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, owner: Option<Player>) {
        self.cells[row * self.size + col] = owner;
    }

    /// Owner lookup with signed coordinates, off-board reads as empty
    #[inline(always)]
    pub fn owner_at(&self, row: isize, col: isize) -> Option<Player> {
        if row < 0 || col < 0 || row as usize >= self.size || col as usize >= self.size {
            return None;
        }
        self.cells[row as usize * self.size + col as usize]
    }

    #[inline(always)]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none()
    }

    /// The four corner cells in (row, col) form
    pub fn corners(&self) -> [(usize, usize); 4] {
        let last = self.size - 1;
        [(0, 0), (0, last), (last, 0), (last, last)]
    }

    #[inline]
    pub fn is_corner(&self, row: usize, col: usize) -> bool {
        let last = self.size - 1;
        (row == 0 || row == last) && (col == 0 || col == last)
    }

    /// Mark every occupied shape cell at (row + r, col + c) with `player`.
    /// Caller guarantees the placement is in bounds.
    pub fn place(&mut self, shape: &Shape, row: usize, col: usize, player: Player) {
        for (r, c) in shape.occupied() {
            self.set(row + r, col + c, Some(player));
        }
    }

    /// Clear exactly the cells `place` would have marked
    pub fn clear(&mut self, shape: &Shape, row: usize, col: usize) {
        for (r, c) in shape.occupied() {
            self.set(row + r, col + c, None);
        }
    }

    pub fn count_owned(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(player)).count()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Player>]> {
        self.cells.chunks(self.size)
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<&[Option<Player>]> = self.rows().collect();
        rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<Vec<Option<Player>>> = Vec::deserialize(deserializer)?;
        let size = rows.len();
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(serde::de::Error::custom("board size out of range"));
        }
        if rows.iter().any(|row| row.len() != size) {
            return Err(serde::de::Error::custom("expected a square board"));
        }
        Ok(Board {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                let ch = match cell {
                    None => '.',
                    Some(Player::Cyan) => 'C',
                    Some(Player::Red) => 'R',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_clamped() {
        assert_eq!(Board::new(1).size(), MIN_BOARD_SIZE);
        assert_eq!(Board::new(5000).size(), MAX_BOARD_SIZE);
        assert_eq!(Board::new(14).size(), 14);
    }

    #[test]
    fn test_set_get() {
        let mut b = Board::new(5);
        b.set(2, 3, Some(Player::Red));
        assert_eq!(b.get(2, 3), Some(Player::Red));
        assert_eq!(b.get(3, 2), None);
    }

    #[test]
    fn test_owner_at_off_board_is_empty() {
        let mut b = Board::new(5);
        b.set(0, 0, Some(Player::Cyan));
        assert_eq!(b.owner_at(0, 0), Some(Player::Cyan));
        assert_eq!(b.owner_at(-1, 0), None);
        assert_eq!(b.owner_at(0, 5), None);
    }

    #[test]
    fn test_corners() {
        let b = Board::new(7);
        assert_eq!(b.corners(), [(0, 0), (0, 6), (6, 0), (6, 6)]);
        assert!(b.is_corner(6, 0));
        assert!(!b.is_corner(0, 3));
    }

    #[test]
    fn test_place_then_clear_round_trip() {
        let mut b = Board::new(6);
        b.set(5, 5, Some(Player::Red));
        let before = b.clone();
        let shape = Shape::from_pattern(&["##", "#."]).expect("shape");
        b.place(&shape, 1, 2, Player::Cyan);
        assert_eq!(b.get(1, 2), Some(Player::Cyan));
        assert_eq!(b.get(1, 3), Some(Player::Cyan));
        assert_eq!(b.get(2, 2), Some(Player::Cyan));
        assert_eq!(b.get(2, 3), None);
        assert_eq!(b.count_owned(Player::Cyan), 3);
        b.clear(&shape, 1, 2);
        assert_eq!(b, before);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut b = Board::new(5);
        b.set(4, 4, Some(Player::Red));
        let json = serde_json::to_string(&b).expect("serialize");
        let back: Board = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, b);
    }
}
