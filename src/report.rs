use itertools::Itertools;

/// Formats the one-line summary the CLI prints for a set of perimeters.
pub fn summary(perimeters: &[usize]) -> String {
    match perimeters {
        [] => "There are no parcels defined".to_string(),
        [perimeter] => format!("There is 1 parcel with a perimeter of {perimeter}"),
        many => format!(
            "There are {} parcels with perimeters of {}",
            many.len(),
            many.iter().join(",")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_parcels() {
        assert_eq!(summary(&[]), "There are no parcels defined");
    }

    #[test]
    fn one_parcel() {
        assert_eq!(summary(&[4]), "There is 1 parcel with a perimeter of 4");
    }

    #[test]
    fn many_parcels_join_in_discovery_order() {
        assert_eq!(
            summary(&[8, 4, 12]),
            "There are 3 parcels with perimeters of 8,4,12"
        );
    }
}
