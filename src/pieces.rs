//! Piece shapes, regions, and coordinate types.
//!
//! Each shape is defined as a set of occupied unit cells in the plane,
//! normalized so the minimum row and column are both zero.

/// A 2D coordinate as (row, col).
pub type Coord = (i32, i32);

/// The base occupied-cell pattern for one piece type.
///
/// Invariants: at least one cell, no duplicate cells, anchored so the
/// minimum row and minimum column are both zero. `Shape::new` establishes
/// all three from arbitrary input cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    cells: Vec<Coord>,
}

impl Shape {
    /// Creates a shape from occupied cells, normalizing them to the origin.
    ///
    /// Panics if `cells` is empty; an empty pattern is a contract violation
    /// that parsing rejects before construction.
    pub fn new(mut cells: Vec<Coord>) -> Self {
        assert!(!cells.is_empty(), "shape must have at least one cell");
        normalize_to_origin(&mut cells);
        cells.sort_unstable();
        cells.dedup();
        Self { cells }
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

/// Translates cells so the minimum row and column values are both zero.
///
/// This normalization ensures that two patterns that differ only by
/// translation compare as identical.
pub(crate) fn normalize_to_origin(cells: &mut [Coord]) {
    let min_row = cells.iter().map(|(r, _)| *r).min().unwrap();
    let min_col = cells.iter().map(|(_, c)| *c).min().unwrap();

    for (r, c) in cells {
        *r -= min_row;
        *c -= min_col;
    }
}

/// A rectangular area with a required multiset of pieces to pack.
///
/// `counts[i]` is how many copies of shape `i` the region must hold.
/// Constructed once from parsed input and consumed read-only by the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub width: usize,
    pub height: usize,
    pub counts: Vec<usize>,
}

impl Region {
    /// Total number of grid cells in the region.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// A parsed puzzle: the shape catalogue and the regions to evaluate.
///
/// Shape ids are catalogue indices, so every region's requirement vector
/// has exactly `shapes.len()` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub shapes: Vec<Shape>,
    pub regions: Vec<Region>,
}
