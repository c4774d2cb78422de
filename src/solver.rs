//! Backtracking region-feasibility solver.
//!
//! Decides whether every required piece fits inside a region without
//! overlaps; unused holes are allowed. The search is depth-first over a
//! flattened queue of required piece instances:
//! - a cheap area pre-check rejects over-subscribed regions before any
//!   placement is attempted
//! - pieces are ordered largest-area first (ties broken by multiplicity) so
//!   the least flexible pieces fail fast
//! - each instance tries every precomputed orientation at every anchor
//!   position in row-major order, undoing its placement when the remainder
//!   of the queue cannot be placed
//!
//! The solver reports a verdict, never a layout; on success the last
//! placements are deliberately not undone.

use crate::geometry::Orientation;
use crate::grid::PlacementGrid;
use crate::pieces::Region;

/// Result of evaluating one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every required piece fits without overlap.
    Solvable,
    /// Every combination was exhausted without a valid packing.
    Unsolvable,
    /// The node budget ran out before the search finished.
    Unknown,
}

/// A verdict plus the number of search nodes it took to reach it.
///
/// A node is one entry into the recursive placement step; the area
/// pre-check reports zero nodes.
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub verdict: Verdict,
    pub nodes: u64,
}

/// One catalogue entry with pending placements in the current region.
struct RequiredPiece<'a> {
    orientations: &'a [Orientation],
    area: usize,
    count: usize,
}

/// Returns true iff every required piece can be placed in the region.
///
/// Convenience wrapper around [`solve_with_budget`] with no node budget,
/// so the verdict is always definite.
pub fn solve_region(region: &Region, all_orientations: &[Vec<Orientation>]) -> bool {
    solve_with_budget(region, all_orientations, None).verdict == Verdict::Solvable
}

/// Evaluates one region, giving up with [`Verdict::Unknown`] if the search
/// visits more than `node_budget` nodes.
///
/// `all_orientations[i]` must hold the precomputed orientations of shape
/// `i`; the requirement vector must match the catalogue length. A mismatch
/// is a contract violation and panics rather than skipping pieces.
pub fn solve_with_budget(
    region: &Region,
    all_orientations: &[Vec<Orientation>],
    node_budget: Option<u64>,
) -> Outcome {
    assert_eq!(
        region.counts.len(),
        all_orientations.len(),
        "requirement vector length does not match the shape catalogue"
    );

    // necessary (not sufficient) condition: the pieces must at least fit by area
    let cells_needed: usize = region
        .counts
        .iter()
        .zip(all_orientations)
        .map(|(&count, orientations)| count * orientations[0].area())
        .sum();
    if cells_needed > region.cell_count() {
        log::debug!(
            "{}x{} region rejected by area pre-check ({} cells needed, {} available)",
            region.width,
            region.height,
            cells_needed,
            region.cell_count()
        );
        return Outcome {
            verdict: Verdict::Unsolvable,
            nodes: 0,
        };
    }

    let mut required: Vec<RequiredPiece> = region
        .counts
        .iter()
        .zip(all_orientations)
        .filter(|(&count, _)| count > 0)
        .map(|(&count, orientations)| RequiredPiece {
            orientations: orientations.as_slice(),
            area: orientations[0].area(),
            count,
        })
        .collect();

    // largest pieces first; they have the fewest valid positions, so a dead
    // end surfaces early. Ties go to the more numerous shape.
    required.sort_by(|a, b| b.area.cmp(&a.area).then(b.count.cmp(&a.count)));

    // one queue entry per required instance
    let queue: Vec<&[Orientation]> = required
        .iter()
        .flat_map(|piece| std::iter::repeat(piece.orientations).take(piece.count))
        .collect();

    let mut search = Search {
        grid: PlacementGrid::new(region.width, region.height),
        queue,
        nodes: 0,
        node_budget,
    };
    let verdict = search.place_next(0);

    log::debug!(
        "{}x{} region: {:?} after {} nodes",
        region.width,
        region.height,
        verdict,
        search.nodes
    );
    Outcome {
        verdict,
        nodes: search.nodes,
    }
}

struct Search<'a> {
    grid: PlacementGrid,
    queue: Vec<&'a [Orientation]>,
    nodes: u64,
    node_budget: Option<u64>,
}

impl Search<'_> {
    /// Places queue entry `depth` and recurses on the rest.
    ///
    /// Stack depth is bounded by the number of required instances, not the
    /// grid area. On `Solvable` the current placement is kept; on `Unknown`
    /// the grid is unwound so the caller sees it empty again.
    fn place_next(&mut self, depth: usize) -> Verdict {
        self.nodes += 1;
        if let Some(budget) = self.node_budget {
            if self.nodes > budget {
                return Verdict::Unknown;
            }
        }

        let Some(&orientations) = self.queue.get(depth) else {
            return Verdict::Solvable;
        };

        for orientation in orientations {
            let max_row = self.grid.height() as i32 - orientation.rows;
            let max_col = self.grid.width() as i32 - orientation.cols;
            for row in 0..=max_row {
                for col in 0..=max_col {
                    if !self.grid.can_place(orientation, row, col) {
                        continue;
                    }
                    self.grid.place(orientation, row, col);
                    match self.place_next(depth + 1) {
                        Verdict::Solvable => return Verdict::Solvable,
                        Verdict::Unknown => {
                            self.grid.remove(orientation, row, col);
                            return Verdict::Unknown;
                        }
                        Verdict::Unsolvable => self.grid.remove(orientation, row, col),
                    }
                }
            }
        }

        Verdict::Unsolvable
    }
}
