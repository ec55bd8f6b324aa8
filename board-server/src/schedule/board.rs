//! Schedule processing for the departure board.
//!
//! The upstream schedule arrives as a flat list of departures in arbitrary
//! order. The board view wants them sorted by destination, optionally
//! restricted to departures that have not yet left, and grouped under one
//! header per destination. Everything here is pure and synchronous: it
//! operates on already-fetched data.

use chrono::NaiveTime;

use super::time::DepartureTime;

/// One scheduled departure from a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Terminus the train is heading to.
    pub destination: String,

    /// Estimated departure time.
    pub time_estimated: DepartureTime,
}

impl Departure {
    /// Create a new departure.
    pub fn new(destination: impl Into<String>, time_estimated: DepartureTime) -> Self {
        Self {
            destination: destination.into(),
            time_estimated,
        }
    }
}

/// Sort departures by destination, ascending.
///
/// The sort is stable: departures with the same destination keep their
/// relative input order. The grouped view relies on this so that times
/// within a destination block appear in upstream order.
pub fn sort_by_destination(mut departures: Vec<Departure>) -> Vec<Departure> {
    departures.sort_by(|a, b| a.destination.cmp(&b.destination));
    departures
}

/// Retain only departures strictly later than `now`.
///
/// Same-day comparison only: a departure whose time has already passed
/// today is dropped, with no rollover to tomorrow. Order is preserved.
pub fn upcoming_only(departures: Vec<Departure>, now: NaiveTime) -> Vec<Departure> {
    departures
        .into_iter()
        .filter(|d| d.time_estimated.is_after(now))
        .collect()
}

/// Whether the departure at `index` starts a new destination block.
///
/// True for the first departure, and for any departure whose destination
/// differs from its predecessor. Only meaningful on a sorted sequence,
/// but defined for any input.
pub fn is_group_start(departures: &[Departure], index: usize) -> bool {
    match index {
        0 => !departures.is_empty(),
        i => {
            i < departures.len() && departures[i].destination != departures[i - 1].destination
        }
    }
}

/// A block of departures sharing one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationGroup {
    /// Destination shown as the group header.
    pub destination: String,

    /// Departure times within the block, in input order.
    pub times: Vec<DepartureTime>,
}

/// Group a sorted departure sequence into destination blocks.
///
/// A new block opens wherever [`is_group_start`] holds. On an unsorted
/// input this produces one block per run of equal destinations, which
/// mirrors how the board renders headers.
pub fn group_by_destination(departures: &[Departure]) -> Vec<DestinationGroup> {
    let mut groups: Vec<DestinationGroup> = Vec::new();

    for (i, departure) in departures.iter().enumerate() {
        if is_group_start(departures, i) {
            groups.push(DestinationGroup {
                destination: departure.destination.clone(),
                times: Vec::new(),
            });
        }
        // is_group_start(_, 0) is true for non-empty input, so a group
        // always exists by the time we get here.
        if let Some(group) = groups.last_mut() {
            group.times.push(departure.time_estimated);
        }
    }

    groups
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_departure() -> impl Strategy<Value = Departure> {
        ("[A-E]{1,2}", 0u32..24, 0u32..60, 0u32..60).prop_map(|(dest, h, m, s)| {
            let time =
                DepartureTime::parse(&format!("{:02}:{:02}:{:02}", h, m, s)).unwrap();
            Departure::new(dest, time)
        })
    }

    fn arb_departures() -> impl Strategy<Value = Vec<Departure>> {
        proptest::collection::vec(arb_departure(), 0..32)
    }

    proptest! {
        /// Output is sorted ascending by destination
        #[test]
        fn sorted_ascending(departures in arb_departures()) {
            let sorted = sort_by_destination(departures);
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].destination <= pair[1].destination);
            }
        }

        /// Sorting is a permutation: nothing added or dropped
        #[test]
        fn sort_is_permutation(departures in arb_departures()) {
            let mut expected = departures.clone();
            let mut sorted = sort_by_destination(departures);
            expected.sort_by(|a, b| (&a.destination, a.time_estimated).cmp(&(&b.destination, b.time_estimated)));
            sorted.sort_by(|a, b| (&a.destination, a.time_estimated).cmp(&(&b.destination, b.time_estimated)));
            prop_assert_eq!(sorted, expected);
        }

        /// Equal destinations keep their relative input order
        #[test]
        fn sort_stability(departures in arb_departures()) {
            let sorted = sort_by_destination(departures.clone());
            for dest in departures.iter().map(|d| &d.destination) {
                let before: Vec<_> = departures
                    .iter()
                    .filter(|d| &d.destination == dest)
                    .map(|d| d.time_estimated)
                    .collect();
                let after: Vec<_> = sorted
                    .iter()
                    .filter(|d| &d.destination == dest)
                    .map(|d| d.time_estimated)
                    .collect();
                prop_assert_eq!(before, after);
            }
        }

        /// The upcoming filter is an order-preserving subsequence whose
        /// members are all strictly after `now`
        #[test]
        fn upcoming_is_future_subsequence(
            departures in arb_departures(),
            h in 0u32..24,
            m in 0u32..60,
        ) {
            let now = chrono::NaiveTime::from_hms_opt(h, m, 0).unwrap();
            let upcoming = upcoming_only(departures.clone(), now);

            for d in &upcoming {
                prop_assert!(d.time_estimated.is_after(now));
            }

            // Subsequence check: each retained departure appears in order
            let mut rest = departures.as_slice();
            for d in &upcoming {
                let pos = rest.iter().position(|x| x == d);
                prop_assert!(pos.is_some());
                rest = &rest[pos.unwrap() + 1..];
            }
        }

        /// Group-start law: index 0 iff non-empty, otherwise destination
        /// differs from the predecessor
        #[test]
        fn group_start_law(departures in arb_departures()) {
            if !departures.is_empty() {
                prop_assert!(is_group_start(&departures, 0));
            }
            for i in 1..departures.len() {
                prop_assert_eq!(
                    is_group_start(&departures, i),
                    departures[i].destination != departures[i - 1].destination
                );
            }
        }

        /// Grouping loses no departures and opens exactly one group per
        /// group start
        #[test]
        fn grouping_preserves_times(departures in arb_departures()) {
            let groups = group_by_destination(&departures);

            let total: usize = groups.iter().map(|g| g.times.len()).sum();
            prop_assert_eq!(total, departures.len());

            let starts = (0..departures.len())
                .filter(|&i| is_group_start(&departures, i))
                .count();
            prop_assert_eq!(groups.len(), starts);
        }
    }
}
