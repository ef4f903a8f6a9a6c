use miette::Diagnostic;
use thiserror::Error;

/// Validation failures raised while turning raw point strings into plots.
///
/// Both variants surface before any grid is built; construction and tracing
/// only ever see validated coordinates. The two messages are part of the
/// external contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum PointError {
    #[error("Point coordinates must be an array of strings in the form \"x,y\"")]
    #[diagnostic(
        code(parcels::malformed_point),
        help("Each point is two non-negative integers separated by a comma, e.g. \"12,7\"")
    )]
    Malformed,

    #[error("Point coordinates values must be in the range 0 to 99")]
    #[diagnostic(
        code(parcels::point_out_of_range),
        help("Both the x and y value must be at most 99")
    )]
    OutOfRange,
}
