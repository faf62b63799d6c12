//! shape matrices - row-major bools, origin top-left
//! transforms always return a new Shape, never mutate

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

/// Occupied (row, col) offsets of a shape, in row-major order.
/// Catalog pieces rarely exceed 16 cells so this stays on the stack.
pub type ShapeCells = SmallVec<[(usize, usize); 16]>;

/// Rectangular occupancy matrix for one piece.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Shape {
    /// Build a `rows x cols` shape from a cell predicate.
    /// Returns None for a zero-sized matrix.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> bool) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(r, c));
            }
        }
        Some(Self { rows, cols, cells })
    }

    /// Build from nested rows. Rows must be non-empty and equally long.
    pub fn from_rows(rows: &[Vec<bool>]) -> Option<Self> {
        let cols = rows.first()?.len();
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        Self::from_fn(rows.len(), cols, |r, c| rows[r][c])
    }

    /// Parse an ascii picture, `#` is occupied and anything else empty.
    ///
    /// ```
    /// use blokus_core::Shape;
    /// let l = Shape::from_pattern(&["#.", "##"]).unwrap();
    /// assert_eq!(l.cell_count(), 3);
    /// ```
    pub fn from_pattern(lines: &[&str]) -> Option<Self> {
        let rows: Vec<Vec<bool>> = lines
            .iter()
            .map(|line| line.chars().map(|ch| ch == '#').collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// 1x1 single cell
    pub fn single() -> Self {
        Self {
            rows: 1,
            cols: 1,
            cells: vec![true],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> bool {
        r < self.rows && c < self.cols && self.cells[r * self.cols + c]
    }

    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&cell| cell)
    }

    /// Occupied offsets in row-major order
    pub fn occupied(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.cells[r * self.cols + c] {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// 90 degrees clockwise: `new[c][rows - 1 - r] = old[r][c]`
    pub fn rotate_cw(&self) -> Self {
        let rows = self.cols;
        let cols = self.rows;
        let mut cells = vec![false; rows * cols];
        for r in 0..self.rows {
            for c in 0..self.cols {
                cells[c * cols + (self.rows - 1 - r)] = self.cells[r * self.cols + c];
            }
        }
        Self { rows, cols, cells }
    }

    /// Mirror each row left-right
    pub fn flip_horizontal(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in self.cells.chunks(self.cols) {
            cells.extend(row.iter().rev());
        }
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Nested row view, the shape's wire format
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.cols).map(<[bool]>::to_vec).collect()
    }
}

impl Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<Vec<bool>> = Vec::deserialize(deserializer)?;
        Shape::from_rows(&rows)
            .ok_or_else(|| serde::de::Error::custom("expected a non-empty rectangular matrix"))
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for &cell in row {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
