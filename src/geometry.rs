//! 2D rotation and reflection utilities.
//!
//! A polyomino has 8 possible orientations in the plane: the 4 quarter-turn
//! rotations of the pattern itself, plus the 4 rotations of its mirror image.
//! Shapes with internal symmetry collapse to fewer distinct orientations.

use rustc_hash::FxHashSet;

use crate::pieces::{normalize_to_origin, Coord, Shape};

/// All 8 rigid-motion functions for a plane figure.
///
/// Organized as 4 rotations of the unreflected pattern followed by the same
/// 4 rotations of the horizontally mirrored pattern. Cells are rotated about
/// the origin; callers renormalize afterwards, so rotation direction is not
/// observable in the result.
pub const TRANSFORMS: [fn(Coord) -> Coord; 8] = [
    // unreflected, rotate clockwise
    |(r, c)| (r, c),   // 0 degrees
    |(r, c)| (c, -r),  // 90 degrees
    |(r, c)| (-r, -c), // 180 degrees
    |(r, c)| (-c, r),  // 270 degrees
    // mirrored across the vertical axis, then the same rotations
    |(r, c)| (r, -c),
    |(r, c)| (-c, -r),
    |(r, c)| (-r, c),
    |(r, c)| (c, r),
];

/// One rigid-motion variant of a shape, canonicalized to a zero-based
/// bounding box.
///
/// `rows` and `cols` are the bounding-box dimensions, used by the solver to
/// limit the anchor positions it scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation {
    cells: Vec<Coord>,
    pub rows: i32,
    pub cols: i32,
}

impl Orientation {
    fn from_cells(cells: Vec<Coord>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().unwrap() + 1;
        let cols = cells.iter().map(|(_, c)| *c).max().unwrap() + 1;
        Self { cells, rows, cols }
    }

    /// Returns the occupied cells, sorted row-major.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of occupied cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }
}

/// Generates all unique orientations of a shape.
///
/// Applies all 8 transforms, normalizes each result so the minimum row and
/// column are zero, then removes duplicates by exact cell-set equality.
/// The dedup key is the cell set itself rather than the bounding box, since
/// different arrangements can share a bounding box.
pub fn all_orientations(shape: &Shape) -> Vec<Orientation> {
    let mut seen: FxHashSet<Vec<Coord>> = FxHashSet::default();
    let mut orientations = Vec::new();

    for transform in TRANSFORMS {
        let mut cells: Vec<Coord> = shape.cells().iter().map(|&cell| transform(cell)).collect();
        normalize_to_origin(&mut cells);
        // sorting makes vector equality equivalent to set equality
        cells.sort_unstable();

        if seen.insert(cells.clone()) {
            orientations.push(Orientation::from_cells(cells));
        }
    }

    orientations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(cells: &[Coord]) -> Shape {
        Shape::new(cells.to_vec())
    }

    #[test]
    fn test_single_cell_has_one_orientation() {
        let orientations = all_orientations(&shape(&[(0, 0)]));
        assert_eq!(orientations.len(), 1);
        assert_eq!(orientations[0].cells(), &[(0, 0)]);
    }

    #[test]
    fn test_square_block_has_one_orientation() {
        let square = shape(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(all_orientations(&square).len(), 1);
    }

    #[test]
    fn test_straight_line_has_two_orientations() {
        let line = shape(&[(0, 0), (0, 1), (0, 2)]);
        let orientations = all_orientations(&line);
        assert_eq!(orientations.len(), 2);

        let dims: Vec<(i32, i32)> = orientations.iter().map(|o| (o.rows, o.cols)).collect();
        assert!(dims.contains(&(1, 3)));
        assert!(dims.contains(&(3, 1)));
    }

    #[test]
    fn test_s_tetromino_has_four_orientations() {
        // 2-fold rotational symmetry; the mirror is the distinct Z pattern
        let s = shape(&[(0, 1), (0, 2), (1, 0), (1, 1)]);
        assert_eq!(all_orientations(&s).len(), 4);
    }

    #[test]
    fn test_t_tetromino_has_four_orientations() {
        // mirror-symmetric, so only the rotations are distinct
        let t = shape(&[(0, 0), (0, 1), (0, 2), (1, 1)]);
        assert_eq!(all_orientations(&t).len(), 4);
    }

    #[test]
    fn test_l_tetromino_has_eight_orientations() {
        let l = shape(&[(0, 0), (1, 0), (2, 0), (2, 1)]);
        assert_eq!(all_orientations(&l).len(), 8);
    }

    #[test]
    fn test_orientations_are_anchored_at_origin() {
        let l = shape(&[(0, 0), (1, 0), (2, 0), (2, 1)]);
        for orientation in all_orientations(&l) {
            let min_row = orientation.cells().iter().map(|(r, _)| *r).min().unwrap();
            let min_col = orientation.cells().iter().map(|(_, c)| *c).min().unwrap();
            assert_eq!((min_row, min_col), (0, 0));
            assert_eq!(orientation.area(), 4);
        }
    }

    #[test]
    fn test_orientation_count_never_exceeds_eight() {
        let shapes = [
            shape(&[(0, 0)]),
            shape(&[(0, 0), (0, 1)]),
            shape(&[(0, 0), (1, 0), (1, 1)]),
            shape(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]),
            shape(&[(0, 0), (0, 1), (1, 1), (1, 2), (2, 1)]),
        ];
        for s in &shapes {
            assert!(all_orientations(s).len() <= 8);
        }
    }

    #[test]
    fn test_dedup_uses_cell_sets_not_bounding_boxes() {
        // S and its rotation share no cell set but the L-tromino's four
        // orientations all share the same 2x2 bounding box
        let l_tromino = shape(&[(0, 0), (1, 0), (1, 1)]);
        let orientations = all_orientations(&l_tromino);
        assert_eq!(orientations.len(), 4);
        for orientation in &orientations {
            assert_eq!((orientation.rows, orientation.cols), (2, 2));
        }
    }
}
