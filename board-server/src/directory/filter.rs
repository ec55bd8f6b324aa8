//! Station name search.

use super::station::Station;

/// Filter stations whose name contains `query`, case-insensitively.
///
/// Preserves the original relative order, so the result is always an
/// order-preserving subsequence of the input. An empty query matches
/// everything; an empty station list yields an empty result.
pub fn filter_stations(stations: &[Station], query: &str) -> Vec<Station> {
    let needle = query.to_lowercase();
    stations
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::StationId;

    fn station(id: &str, name: &str) -> Station {
        Station::new(StationId::parse(id).unwrap(), name)
    }

    fn directory() -> Vec<Station> {
        vec![
            station("1", "Bogor"),
            station("2", "Jakarta"),
            station("3", "Bekasi"),
        ]
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let result = filter_stations(&directory(), "bo");
        assert_eq!(result, vec![station("1", "Bogor")]);

        let result = filter_stations(&directory(), "BO");
        assert_eq!(result, vec![station("1", "Bogor")]);
    }

    #[test]
    fn empty_query_matches_all() {
        let stations = directory();
        assert_eq!(filter_stations(&stations, ""), stations);
    }

    #[test]
    fn empty_directory_yields_empty() {
        assert!(filter_stations(&[], "bogor").is_empty());
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_stations(&directory(), "surabaya").is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let stations = vec![
            station("3", "Bekasi"),
            station("1", "Bogor"),
            station("2", "Tanah Abang"),
        ];

        let result = filter_stations(&stations, "b");
        assert_eq!(
            result,
            vec![
                station("3", "Bekasi"),
                station("1", "Bogor"),
                station("2", "Tanah Abang"),
            ]
        );
    }

    #[test]
    fn matches_interior_substring() {
        let result = filter_stations(&directory(), "kart");
        assert_eq!(result, vec![station("2", "Jakarta")]);
    }
}
