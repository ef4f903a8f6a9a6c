use std::collections::HashSet;

use tracing::debug;

use crate::grid::{Grid, Plot};

const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Scans the grid and traces every parcel, returning perimeters in
/// first-discovery order (ascending x, then ascending y).
///
/// The grid is consumed in place: every occupied cell is cleared by the
/// trace that absorbs it, so no cell can start or join two parcels.
pub fn trace_parcels(grid: &mut Grid) -> Vec<usize> {
    let (xdim, ydim) = grid.dimensions();
    let mut perimeters = Vec::new();

    for x in 0..xdim {
        for y in 0..ydim {
            if grid.is_occupied(x, y) {
                let start = Plot::new(x, y);
                let perimeter = trace_parcel(grid, start);
                debug!(?start, perimeter, "parcel traced");
                perimeters.push(perimeter);
            }
        }
    }

    perimeters
}

/// Traces the parcel containing `start` with an explicit work-list.
///
/// The `seen` set records plots already processed by this trace, separately
/// from the grid's occupancy: a neighbor that is queued (occupied, unseen)
/// or already absorbed (unoccupied, seen) is an internal edge and counts
/// nothing, while an out-of-bounds or genuinely empty neighbor counts one
/// unit of perimeter.
fn trace_parcel(grid: &mut Grid, start: Plot) -> usize {
    let mut stack = vec![start];
    let mut seen: HashSet<Plot> = HashSet::new();
    let (xdim, ydim) = grid.dimensions();
    let mut perimeter = 0;

    while let Some(plot) = stack.pop() {
        grid.consume(plot);
        if seen.contains(&plot) {
            // pushed more than once via different neighbors
            continue;
        }

        for (dx, dy) in DIRECTIONS {
            let nx = plot.x as isize + dx;
            let ny = plot.y as isize + dy;

            if nx < 0 || ny < 0 || nx >= xdim as isize || ny >= ydim as isize {
                perimeter += 1;
                continue;
            }

            let neighbor = Plot::new(nx as usize, ny as usize);
            if grid.is_occupied(neighbor.x, neighbor.y) && !seen.contains(&neighbor) {
                stack.push(neighbor);
            } else if !seen.contains(&neighbor) {
                perimeter += 1;
            }
        }

        seen.insert(plot);
    }

    perimeter
}
