//! Piece catalog shared by both players.
//!
//! The fixed families come first in a fixed order, then up to
//! [`BLOB_ATTEMPTS`] random blobs drawn from the seeded generator. For a given
//! generator state the sequence is identical on every run.

use crate::{SeededRng, Shape};

/// Random blobs attempted after the fixed families
pub const BLOB_ATTEMPTS: usize = 100;

/// 1 single + 12 lines + 5 squares + 16 Ls + 5 Ts + 3 crosses + 5 rings + 4 stairs
pub const FIXED_SHAPE_COUNT: usize = 51;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
}

impl ShapeCatalog {
    /// Generate the full catalog, consuming blob draws from `rng`.
    pub fn generate(rng: &mut SeededRng) -> Self {
        let mut shapes = Vec::with_capacity(FIXED_SHAPE_COUNT + BLOB_ATTEMPTS);

        shapes.push(Shape::single());

        for len in 2..=7 {
            shapes.extend(filled(1, len));
            shapes.extend(filled(len, 1));
        }

        for size in 2..=6 {
            shapes.extend(filled(size, size));
        }

        // full first column + full last row
        for h in 2..=5 {
            for w in 2..=5 {
                shapes.extend(Shape::from_fn(h, w, |r, c| c == 0 || r == h - 1));
            }
        }

        // full top row, single-cell stem of height w - 2 under floor(w / 2)
        for w in 3..=7 {
            let mid = w / 2;
            shapes.extend(Shape::from_fn(w - 1, w, |r, c| r == 0 || c == mid));
        }

        for size in [3, 5, 7] {
            let mid = size / 2;
            shapes.extend(Shape::from_fn(size, size, |r, c| r == mid || c == mid));
        }

        // hollow squares, border only
        for size in 4..=8 {
            shapes.extend(Shape::from_fn(size, size, |r, c| {
                r == 0 || c == 0 || r == size - 1 || c == size - 1
            }));
        }

        // diagonal staircase
        for len in 3..=6 {
            shapes.extend(Shape::from_fn(len, len, |r, c| r == c));
        }

        debug_assert_eq!(shapes.len(), FIXED_SHAPE_COUNT);

        for _ in 0..BLOB_ATTEMPTS {
            if let Some(blob) = random_blob(rng) {
                shapes.push(blob);
            }
        }

        Self { shapes }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

fn filled(rows: usize, cols: usize) -> Option<Shape> {
    Shape::from_fn(rows, cols, |_, _| true)
}

/// Height then width in 2..=6, then every cell row-major with p = 0.5.
/// An all-empty blob is discarded after its draws are consumed.
fn random_blob(rng: &mut SeededRng) -> Option<Shape> {
    let h = 2 + (rng.next_f64() * 5.0) as usize;
    let w = 2 + (rng.next_f64() * 5.0) as usize;
    let blob = Shape::from_fn(h, w, |_, _| rng.next_f64() > 0.5)?;
    if blob.is_empty() {
        None
    } else {
        Some(blob)
    }
}
