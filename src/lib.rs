//! Partitions grid plots into 4-connected parcels and measures their
//! perimeters.
//!
//! Input is a list of `"x,y"` point strings with both axes in `0..=99`.
//! The plots are rasterized onto an occupancy grid sized to the per-axis
//! maxima, then a destructive scan traces each parcel once and counts its
//! boundary edges.

pub mod error;
pub mod grid;
pub mod parser;
pub mod report;
pub mod tracer;

pub use error::PointError;
pub use grid::{Grid, Plot, MAX_COORDINATE};

/// Computes the perimeter of every parcel described by `points`, in the
/// order parcels are first discovered by the scan (ascending x, then y).
///
/// Each call owns a fresh grid; nothing is retained between calls.
///
/// # Errors
/// * [`PointError::Malformed`] if any element is not a `"x,y"` digit pair
/// * [`PointError::OutOfRange`] if any axis value exceeds [`MAX_COORDINATE`]
#[tracing::instrument(skip(points), fields(count = points.len()))]
pub fn compute_parcel_perimeters<S: AsRef<str>>(points: &[S]) -> Result<Vec<usize>, PointError> {
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let plots = parser::parse_points(points)?;
    let mut grid = Grid::from_plots(&plots);
    Ok(tracer::trace_parcels(&mut grid))
}
