use std::fmt;

use tracing::debug;

/// Inclusive upper bound for each coordinate axis.
pub const MAX_COORDINATE: usize = 99;

/// A single occupied grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plot {
    pub x: usize,
    pub y: usize,
}

impl Plot {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Dense occupancy grid sized to the per-axis maxima of the input plots.
///
/// Indexing is `cells[y][x]`. The bounding box is the Cartesian product of
/// the per-axis maxima, not the tight bounding rectangle of the point set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<bool>>,
    xdim: usize,
    ydim: usize,
}

impl Grid {
    /// Builds the occupancy grid for a non-empty set of validated plots.
    ///
    /// Marking is idempotent, so duplicate plots have no additional effect.
    pub fn from_plots(plots: &[Plot]) -> Self {
        let xdim = plots.iter().map(|plot| plot.x).max().unwrap_or(0) + 1;
        let ydim = plots.iter().map(|plot| plot.y).max().unwrap_or(0) + 1;

        let mut grid = Self {
            cells: vec![vec![false; xdim]; ydim],
            xdim,
            ydim,
        };

        for plot in plots {
            grid.cells[plot.y][plot.x] = true;
        }

        debug!(xdim, ydim, plots = plots.len(), "occupancy grid built");
        grid
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.xdim, self.ydim)
    }

    /// Bounds-checked occupancy read; out-of-range cells read as unoccupied.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// Clears a cell. Consuming an already-clear cell is a no-op.
    pub fn consume(&mut self, plot: Plot) {
        self.cells[plot.y][plot.x] = false;
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|cell| **cell).count())
            .sum()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", if *cell { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
