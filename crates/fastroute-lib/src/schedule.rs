//! Departure schedule arithmetic.
//!
//! Each edge runs trains from `first_departure` and then every `frequency`
//! minutes. A frequency of zero describes a single run, which is modelled as
//! boarding immediately.

use crate::network::Minutes;

/// Minutes a traveller ready to board at `arrival` waits for the next train.
///
/// Finds the smallest `k >= 0` with `first_departure + k * frequency >= arrival`
/// and returns the gap between that departure and `arrival`. Returns `None`
/// when the gap does not fit in [`Minutes`].
///
/// # Examples
/// ```
/// use fastroute_lib::schedule::wait_time;
///
/// assert_eq!(wait_time(15, 14, 26), Some(3));
/// assert_eq!(wait_time(30, 10, 26), Some(4));
/// assert_eq!(wait_time(9, 0, 26), Some(0));
/// assert_eq!(wait_time(i64::MAX, 5, -1), None);
/// ```
pub fn wait_time(
    first_departure: Minutes,
    frequency: Minutes,
    arrival: Minutes,
) -> Option<Minutes> {
    debug_assert!(frequency >= 0, "frequency must be non-negative");
    if frequency <= 0 {
        return Some(0);
    }
    if arrival <= first_departure {
        return first_departure.checked_sub(arrival);
    }
    let late = arrival.checked_sub(first_departure)?;
    Some((frequency - late % frequency) % frequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_first_run_when_early() {
        assert_eq!(wait_time(20, 5, 12), Some(8));
    }

    #[test]
    fn boards_immediately_on_a_departure() {
        assert_eq!(wait_time(10, 5, 10), Some(0));
        assert_eq!(wait_time(10, 5, 25), Some(0));
    }

    #[test]
    fn waits_for_next_periodic_run() {
        assert_eq!(wait_time(10, 5, 26), Some(4));
        assert_eq!(wait_time(17, 15, 26), Some(6));
    }

    #[test]
    fn single_run_never_waits() {
        assert_eq!(wait_time(100, 0, 0), Some(0));
        assert_eq!(wait_time(0, 0, 100), Some(0));
    }

    #[test]
    fn extreme_clocks_report_overflow() {
        assert_eq!(wait_time(Minutes::MAX, 5, -1), None);
        assert_eq!(wait_time(-10, 5, Minutes::MAX), None);
        assert_eq!(wait_time(Minutes::MAX, 5, Minutes::MIN + 1), None);
        assert_eq!(wait_time(Minutes::MAX, 5, 0), Some(Minutes::MAX));
        assert_eq!(wait_time(0, 5, Minutes::MAX), Some(3));
    }
}
