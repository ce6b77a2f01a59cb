//! Pieces module - shape templates and matrix rotation
//!
//! Each template is a small occupancy matrix. Rotation is a pure function of
//! (template, rotation count): the template is never mutated, the rotated image
//! is rebuilt from scratch on every request, so four clockwise turns always give
//! back the template bit-for-bit (including non-square ones, whose dimensions
//! swap on every turn).

use crate::types::ShapeKind;

const X: bool = true;
const E: bool = false;

const I_SHAPE: &[&[bool]] = &[&[X, X, X, X]];
const O_SHAPE: &[&[bool]] = &[&[X, X], &[X, X]];
const S_SHAPE: &[&[bool]] = &[&[E, X, X], &[X, X, E]];
const Z_SHAPE: &[&[bool]] = &[&[X, X, E], &[E, X, X]];
const T_SHAPE: &[&[bool]] = &[&[X, X, X], &[E, X, E]];
const L_SHAPE: &[&[bool]] = &[&[X, X, X], &[X, E, E]];
const J_SHAPE: &[&[bool]] = &[&[X, X, X], &[E, E, X]];

/// Number of distinct rotation states
pub const ROTATIONS: u8 = 4;

/// Get the static occupancy rows of a shape template
pub fn template(kind: ShapeKind) -> &'static [&'static [bool]] {
    match kind {
        ShapeKind::I => I_SHAPE,
        ShapeKind::O => O_SHAPE,
        ShapeKind::S => S_SHAPE,
        ShapeKind::Z => Z_SHAPE,
        ShapeKind::T => T_SHAPE,
        ShapeKind::L => L_SHAPE,
        ShapeKind::J => J_SHAPE,
    }
}

/// Get the image of `kind` after `rotation` clockwise quarter turns
pub fn rotated(kind: ShapeKind, rotation: u8) -> Mask {
    let mut image = Mask::from_rows(template(kind));
    for _ in 0..rotation % ROTATIONS {
        image = image.rotate_cw();
    }
    image
}

/// Owned rows x cols occupancy matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    rows: usize,
    cols: usize,
    /// Row-major cells (row * cols + col)
    cells: Vec<bool>,
}

impl Mask {
    /// Build from rows of equal length.
    ///
    /// The column count is taken from the first row; shorter rows are padded
    /// with empty cells, longer ones truncated.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = vec![false; rows.len() * cols];
        for (y, row) in rows.iter().enumerate() {
            for (x, &filled) in row.as_ref().iter().take(cols).enumerate() {
                cells[y * cols + x] = filled;
            }
        }
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at (row, col); out of range reads as empty
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row * self.cols + col]
    }

    /// Rotate 90° clockwise: transpose, then reverse every row.
    pub fn rotate_cw(&self) -> Mask {
        let rows = self.cols;
        let cols = self.rows;
        let mut cells = vec![false; rows * cols];
        for r in 0..rows {
            for c in 0..cols {
                cells[r * cols + c] = self.get(self.rows - 1 - c, r);
            }
        }
        Mask { rows, cols, cells }
    }

    /// Local (col, row) offsets of every occupied cell, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(i, _)| ((i % self.cols) as i32, (i / self.cols) as i32))
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Copy out as nested rows (for tests and debugging)
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|r| self.cells[r * self.cols..(r + 1) * self.cols].to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_has_four_cells() {
        for kind in ShapeKind::ALL {
            assert_eq!(Mask::from_rows(template(kind)).count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotate_i_changes_dimensions() {
        let image = rotated(ShapeKind::I, 1);
        assert_eq!((image.rows(), image.cols()), (4, 1));
        assert_eq!(image.to_rows(), vec![vec![true]; 4]);
    }

    #[test]
    fn test_rotate_t_clockwise() {
        // [[1,1,1],[0,1,0]] -> [[0,1],[1,1],[0,1]]
        let image = rotated(ShapeKind::T, 1);
        assert_eq!(
            image.to_rows(),
            vec![vec![false, true], vec![true, true], vec![false, true]]
        );
    }

    #[test]
    fn test_rotate_l_clockwise() {
        // [[1,1,1],[1,0,0]] -> [[1,1],[0,1],[0,1]]
        let image = rotated(ShapeKind::L, 1);
        assert_eq!(
            image.to_rows(),
            vec![vec![true, true], vec![false, true], vec![false, true]]
        );
    }

    #[test]
    fn test_rotation_count_wraps() {
        for kind in ShapeKind::ALL {
            assert_eq!(rotated(kind, 4), rotated(kind, 0));
            assert_eq!(rotated(kind, 5), rotated(kind, 1));
        }
    }

    #[test]
    fn test_occupied_offsets_are_col_row() {
        let image = Mask::from_rows(template(ShapeKind::S));
        let cells: Vec<_> = image.occupied().collect();
        assert_eq!(cells, vec![(1, 0), (2, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_from_rows_pads_short_rows() {
        let image = Mask::from_rows(&[vec![true, true], vec![true]]);
        assert_eq!(image.to_rows(), vec![vec![true, true], vec![true, false]]);
    }

    #[test]
    fn test_empty_mask() {
        let rows: [&[bool]; 0] = [];
        let image = Mask::from_rows(&rows);
        assert_eq!((image.rows(), image.cols()), (0, 0));
        assert_eq!(image.occupied().count(), 0);
        assert_eq!(image.rotate_cw(), image);
    }
}
