use nom::{
    character::complete::{char, digit1, space0},
    combinator::eof,
    sequence::{delimited, preceded, separated_pair, terminated},
    IResult,
};

use crate::error::PointError;
use crate::grid::{Plot, MAX_COORDINATE};

/// Recognizes exactly `space0 digits space0 ',' space0 digits` with nothing
/// trailing. No sign, no decimals, no surrounding garbage.
fn coordinate_pair(input: &str) -> IResult<&str, (&str, &str)> {
    terminated(
        separated_pair(
            delimited(space0, digit1, space0),
            char(','),
            preceded(space0, digit1),
        ),
        eof,
    )(input)
}

fn parse_axis(digits: &str) -> Result<usize, PointError> {
    // digit1 guarantees an all-digit token, so a parse failure here can only
    // be overflow, which is certainly out of range.
    digits
        .parse::<usize>()
        .ok()
        .filter(|value| *value <= MAX_COORDINATE)
        .ok_or(PointError::OutOfRange)
}

/// Validates and parses a single point string.
pub fn parse_point(raw: &str) -> Result<Plot, PointError> {
    let (_, (x_digits, y_digits)) = coordinate_pair(raw).map_err(|_| PointError::Malformed)?;
    let x = parse_axis(x_digits)?;
    let y = parse_axis(y_digits)?;
    Ok(Plot::new(x, y))
}

/// Validates and parses every point string, failing fast on the first
/// invalid element. No partial results.
pub fn parse_points<S: AsRef<str>>(points: &[S]) -> Result<Vec<Plot>, PointError> {
    points
        .iter()
        .map(|point| parse_point(point.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0,0", Plot::new(0, 0))]
    #[case("12,7", Plot::new(12, 7))]
    #[case("99,99", Plot::new(99, 99))]
    #[case(" 1 , 2", Plot::new(1, 2))]
    #[case("1 ,2", Plot::new(1, 2))]
    #[case("1, 2", Plot::new(1, 2))]
    #[case("007,05", Plot::new(7, 5))]
    fn accepts_valid_shapes(#[case] raw: &str, #[case] expected: Plot) {
        assert_eq!(parse_point(raw), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("12")]
    #[case("1,2,3")]
    #[case("a,b")]
    #[case("-1,2")]
    #[case("1,-2")]
    #[case("1.5,2")]
    #[case("1,2 ")]
    #[case("1,2x")]
    #[case("x1,2")]
    #[case("1;2")]
    #[case(",")]
    #[case("1,")]
    #[case(",2")]
    fn rejects_malformed_shapes(#[case] raw: &str) {
        assert_eq!(parse_point(raw), Err(PointError::Malformed));
    }

    #[rstest]
    #[case("100,0")]
    #[case("0,100")]
    #[case("3,1000")]
    #[case("1234567890123456789012345,0")]
    fn rejects_out_of_range_values(#[case] raw: &str) {
        assert_eq!(parse_point(raw), Err(PointError::OutOfRange));
    }

    #[test]
    fn parses_a_list_in_order() -> miette::Result<()> {
        let plots = parse_points(&["0,0", "1,0", "0,1"])?;
        assert_eq!(
            plots,
            vec![Plot::new(0, 0), Plot::new(1, 0), Plot::new(0, 1)]
        );
        Ok(())
    }

    #[test]
    fn fails_fast_on_first_invalid_element() {
        assert_eq!(
            parse_points(&["1,1", "bogus", "100,100"]),
            Err(PointError::Malformed)
        );
        assert_eq!(
            parse_points(&["100,1", "bogus"]),
            Err(PointError::OutOfRange)
        );
    }

    #[test]
    fn empty_list_is_valid() {
        let no_points: [&str; 0] = [];
        assert_eq!(parse_points(&no_points), Ok(Vec::new()));
    }
}
