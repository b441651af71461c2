//! Forward as-of join over a time-ordered tick series.
//!
//! For each tick at time `t`, finds the earliest tick at time
//! `>= t + window` (forward/"next" semantics). A fixed-offset shift is
//! deliberately not offered: it is ill-defined for irregularly spaced
//! series.

use chrono::Duration;
use ticklabel_core::{ensure_time_ordered, Error, ForwardMatch, Result, Tick};

/// Performs the forward as-of join for a fixed horizon.
#[derive(Debug, Clone)]
pub struct ForwardJoiner {
    window: Duration,
}

impl ForwardJoiner {
    /// Create a joiner with the given forward-look horizon.
    ///
    /// The horizon must be strictly positive; a zero horizon would let a
    /// tick match itself.
    pub fn new(window: Duration) -> Result<Self> {
        if window <= Duration::zero() {
            return Err(Error::config(format!(
                "forward-look window must be positive, got {window}"
            )));
        }
        Ok(Self { window })
    }

    /// The forward-look horizon.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Join each tick to the earliest tick at least `window` later.
    ///
    /// Single merge-style sweep: the candidate cursor only advances
    /// because targets are non-decreasing, giving linear time. When the
    /// target falls on duplicate candidate timestamps, the first one in
    /// sorted+stable order is chosen. Ticks with no qualifying future
    /// observation get a no-match entry, never an error.
    pub fn join(&self, ticks: &[Tick]) -> Result<Vec<ForwardMatch>> {
        ensure_time_ordered(ticks)?;

        let mut matches = Vec::with_capacity(ticks.len());
        let mut candidate = 0;

        for tick in ticks {
            let target = tick
                .ts
                .checked_add_signed(self.window)
                .ok_or_else(|| Error::Other(format!(
                    "timestamp overflow computing forward target for {}",
                    tick.ts
                )))?;

            while candidate < ticks.len() && ticks[candidate].ts < target {
                candidate += 1;
            }

            let entry = match ticks.get(candidate) {
                Some(future) => ForwardMatch::found(tick.ts, tick.price, future.ts, future.price),
                None => ForwardMatch::unmatched(tick.ts, tick.price),
            };
            matches.push(entry);
        }

        Ok(matches)
    }
}

/// Convenience wrapper around [`ForwardJoiner`].
pub fn forward_join(ticks: &[Tick], window: Duration) -> Result<Vec<ForwardMatch>> {
    ForwardJoiner::new(window)?.join(ticks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ticklabel_core::Timestamp;

    fn ts(h: u32, m: u32, s: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2025, 4, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn tick(h: u32, m: u32, s: u32, price: f64) -> Tick {
        Tick { ts: ts(h, m, s), price, volume: 1 }
    }

    #[test]
    fn test_matches_earliest_at_or_after_target() {
        let ticks = vec![
            tick(9, 0, 0, 100.0),
            tick(9, 5, 0, 101.0),
            tick(9, 12, 0, 102.0),
        ];
        let matches = forward_join(&ticks, Duration::minutes(5)).unwrap();

        // 09:00 + 5m = 09:05, exact hit.
        assert_eq!(matches[0].matched_ts, Some(ts(9, 5, 0)));
        assert_eq!(matches[0].matched_price, Some(101.0));
        // 09:05 + 5m = 09:10, next observation is 09:12.
        assert_eq!(matches[1].matched_ts, Some(ts(9, 12, 0)));
        // 09:12 + 5m = 09:17, nothing left.
        assert!(!matches[2].is_matched());
    }

    #[test]
    fn test_no_match_when_window_exceeds_span() {
        let ticks = vec![tick(9, 0, 0, 100.0), tick(9, 5, 0, 101.0)];
        let matches = forward_join(&ticks, Duration::minutes(30)).unwrap();
        assert!(matches.iter().all(|m| !m.is_matched()));
    }

    #[test]
    fn test_match_times_never_go_backward() {
        let ticks = vec![
            tick(9, 0, 0, 100.0),
            tick(9, 1, 0, 100.5),
            tick(9, 3, 0, 101.0),
            tick(9, 7, 0, 101.5),
            tick(9, 20, 0, 102.0),
        ];
        let matches = forward_join(&ticks, Duration::minutes(2)).unwrap();

        let mut prev: Option<Timestamp> = None;
        for m in matches.iter().filter(|m| m.is_matched()) {
            if let (Some(p), Some(cur)) = (prev, m.matched_ts) {
                assert!(cur >= p);
            }
            prev = m.matched_ts;
        }
    }

    #[test]
    fn test_duplicate_source_timestamps() {
        // Two sources at 09:00 both target 09:05; neither may match a
        // candidate before its own target.
        let ticks = vec![
            tick(9, 0, 0, 100.0),
            tick(9, 0, 0, 100.5),
            tick(9, 5, 0, 101.0),
        ];
        let matches = forward_join(&ticks, Duration::minutes(5)).unwrap();
        assert_eq!(matches[0].matched_ts, Some(ts(9, 5, 0)));
        assert_eq!(matches[1].matched_ts, Some(ts(9, 5, 0)));
        assert!(!matches[2].is_matched());
    }

    #[test]
    fn test_duplicate_candidate_timestamps_pick_first() {
        let ticks = vec![
            tick(9, 0, 0, 100.0),
            tick(9, 5, 0, 101.0),
            tick(9, 5, 0, 102.0),
        ];
        let matches = forward_join(&ticks, Duration::minutes(5)).unwrap();
        assert_eq!(matches[0].matched_price, Some(101.0)); // first in stable order
    }

    #[test]
    fn test_sub_second_window() {
        let mut later = tick(9, 0, 0, 101.0);
        later.ts += Duration::milliseconds(600);
        let ticks = vec![tick(9, 0, 0, 100.0), later.clone()];
        let matches = forward_join(&ticks, Duration::milliseconds(500)).unwrap();
        assert_eq!(matches[0].matched_ts, Some(later.ts));
    }

    #[test]
    fn test_rejects_unordered_input() {
        let ticks = vec![tick(9, 5, 0, 101.0), tick(9, 0, 0, 100.0)];
        assert!(matches!(
            forward_join(&ticks, Duration::minutes(5)),
            Err(Error::InputContract(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_window() {
        assert!(ForwardJoiner::new(Duration::zero()).is_err());
        assert!(ForwardJoiner::new(Duration::minutes(-5)).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(forward_join(&[], Duration::minutes(5)).unwrap().is_empty());
    }
}
