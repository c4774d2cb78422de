//! Occupancy grid for one region during search.
//!
//! The grid is a flat row-major array of booleans over a fixed
//! width x height rectangle. Placement and removal touch only the cells of
//! the placed orientation, never the whole grid, since the solver performs
//! many of them per search.

use crate::geometry::Orientation;

/// Mutable occupancy state for a single region.
///
/// Always empty at the start of a solve; the solver restores it cell by cell
/// on backtrack. One grid is never shared between regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementGrid {
    width: usize,
    height: usize,
    occupied: Vec<bool>,
}

impl PlacementGrid {
    /// Creates an empty grid. Width and height must be positive.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            occupied: vec![false; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn idx(&self, row: i32, col: i32) -> usize {
        row as usize * self.width + col as usize
    }

    /// Returns true iff every cell of `orientation`, offset by (row, col),
    /// lies inside the grid and is currently unoccupied.
    ///
    /// Never mutates; both a bounds failure and an occupancy failure simply
    /// return false.
    pub fn can_place(&self, orientation: &Orientation, row: i32, col: i32) -> bool {
        for &(dr, dc) in orientation.cells() {
            let r = row + dr;
            let c = col + dc;
            if r < 0 || r >= self.height as i32 || c < 0 || c >= self.width as i32 {
                return false;
            }
            if self.occupied[self.idx(r, c)] {
                return false;
            }
        }
        true
    }

    /// Marks all cells of `orientation` at (row, col) occupied.
    ///
    /// Precondition: `can_place` returned true for the same arguments.
    pub fn place(&mut self, orientation: &Orientation, row: i32, col: i32) {
        debug_assert!(self.can_place(orientation, row, col));
        for &(dr, dc) in orientation.cells() {
            let idx = self.idx(row + dr, col + dc);
            self.occupied[idx] = true;
        }
    }

    /// Exact inverse of `place`: clears the same cells.
    ///
    /// Must be called with the same orientation and position previously
    /// placed; used only for backtracking.
    pub fn remove(&mut self, orientation: &Orientation, row: i32, col: i32) {
        for &(dr, dc) in orientation.cells() {
            let idx = self.idx(row + dr, col + dc);
            debug_assert!(self.occupied[idx]);
            self.occupied[idx] = false;
        }
    }

    /// True iff no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied.iter().all(|&cell| !cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::all_orientations;
    use crate::pieces::Shape;

    fn l_tromino() -> Orientation {
        let shape = Shape::new(vec![(0, 0), (1, 0), (1, 1)]);
        all_orientations(&shape).into_iter().next().unwrap()
    }

    #[test]
    fn test_can_place_inside_empty_grid() {
        let grid = PlacementGrid::new(3, 3);
        assert!(grid.can_place(&l_tromino(), 0, 0));
        assert!(grid.can_place(&l_tromino(), 1, 1));
    }

    #[test]
    fn test_can_place_rejects_out_of_bounds() {
        let grid = PlacementGrid::new(3, 3);
        let piece = l_tromino();
        assert!(!grid.can_place(&piece, 2, 2)); // bounding box hangs off the edge
        assert!(!grid.can_place(&piece, -1, 0));
        assert!(!grid.can_place(&piece, 0, -1));
    }

    #[test]
    fn test_can_place_rejects_overlap() {
        let mut grid = PlacementGrid::new(3, 3);
        let piece = l_tromino();
        grid.place(&piece, 0, 0);
        assert!(!grid.can_place(&piece, 0, 0));
        // cell (1,1) is shared with the first placement
        assert!(!grid.can_place(&piece, 0, 1));
    }

    #[test]
    fn test_place_then_remove_restores_grid() {
        let mut grid = PlacementGrid::new(4, 4);
        let piece = l_tromino();
        let before = grid.clone();

        grid.place(&piece, 1, 2);
        assert_ne!(grid, before);

        grid.remove(&piece, 1, 2);
        assert_eq!(grid, before);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_disjoint_placements_coexist() {
        let mut grid = PlacementGrid::new(4, 4);
        let piece = l_tromino();
        grid.place(&piece, 0, 0);
        assert!(grid.can_place(&piece, 2, 2));
        grid.place(&piece, 2, 2);
        assert!(!grid.is_empty());
    }
}
