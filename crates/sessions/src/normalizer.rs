//! Session normalization of tick series.
//!
//! Anchors the configured session boundaries to every calendar date
//! present in the input and keeps only the ticks falling inside a
//! session window, preserving time order and duplicate-timestamp order.

use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeSet;
use ticklabel_core::{
    ensure_time_ordered, Result, SessionConfig, SessionKind, SessionWindow, Tick, Timestamp,
};

use crate::classifier::SessionClassifier;

/// Filters a time-ordered tick series down to in-session ticks.
#[derive(Debug, Clone)]
pub struct SessionNormalizer {
    classifier: SessionClassifier,
}

impl SessionNormalizer {
    /// Create a normalizer, validating the session boundaries up front.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            classifier: SessionClassifier::new(config),
        })
    }

    /// The classifier backing this normalizer.
    pub fn classifier(&self) -> &SessionClassifier {
        &self.classifier
    }

    /// Anchor the session boundaries to a calendar date.
    ///
    /// Returns the day window plus the night window(s). A wrapping night
    /// session produces two windows, `[night_start, midnight)` and
    /// `[midnight_next, night_end_next)`, both attributed to the opening
    /// date. Empty windows are omitted.
    pub fn windows_for(&self, date: NaiveDate) -> Vec<SessionWindow> {
        let c = self.classifier.config();
        let mut windows = Vec::with_capacity(3);

        windows.push(SessionWindow {
            date,
            kind: SessionKind::Day,
            start: date.and_time(c.day_start),
            end: date.and_time(c.day_end),
        });

        if c.night_wraps() {
            if let Some(next_date) = date.succ_opt() {
                let midnight = NaiveTime::MIN;
                windows.push(SessionWindow {
                    date,
                    kind: SessionKind::Night,
                    start: date.and_time(c.night_start),
                    end: next_date.and_time(midnight),
                });
                windows.push(SessionWindow {
                    date,
                    kind: SessionKind::Night,
                    start: next_date.and_time(midnight),
                    end: next_date.and_time(c.night_end),
                });
            }
        } else {
            windows.push(SessionWindow {
                date,
                kind: SessionKind::Night,
                start: date.and_time(c.night_start),
                end: date.and_time(c.night_end),
            });
        }

        windows.retain(|w| w.start < w.end);
        windows
    }

    /// Keep only the ticks that fall inside a session window of some
    /// calendar date present in the input.
    ///
    /// Requires a time-ordered input series. The output stays time-ordered
    /// with original relative order preserved on duplicate timestamps, and
    /// the operation is idempotent. Out-of-session ticks are dropped, not
    /// errored.
    pub fn normalize(&self, ticks: &[Tick]) -> Result<Vec<Tick>> {
        ensure_time_ordered(ticks)?;

        if ticks.is_empty() {
            return Ok(Vec::new());
        }

        // Windows from adjacent dates can overlap under unusual configs
        // (night tail reaching past the next day's open), so coalesce
        // them into disjoint intervals before the sweep.
        let intervals = self.coalesced_intervals(ticks);

        let mut kept = Vec::with_capacity(ticks.len());
        let mut cursor = 0;
        for tick in ticks {
            while cursor < intervals.len() && intervals[cursor].1 <= tick.ts {
                cursor += 1;
            }
            if cursor < intervals.len() && intervals[cursor].0 <= tick.ts {
                kept.push(tick.clone());
            }
        }

        Ok(kept)
    }

    /// Build the disjoint, sorted union of all session windows anchored
    /// to the candidate dates of the (sorted) input.
    ///
    /// Candidate dates are every date a tick carries plus that date's
    /// predecessor: a wrapping night session opened on the previous date
    /// reaches past midnight into the current one, and its windows must be
    /// in scope even when no tick carries the previous date itself.
    fn coalesced_intervals(&self, ticks: &[Tick]) -> Vec<(Timestamp, Timestamp)> {
        let mut dates = BTreeSet::new();
        for tick in ticks {
            let date = tick.date();
            if let Some(prev) = date.pred_opt() {
                dates.insert(prev);
            }
            dates.insert(date);
        }

        let mut intervals: Vec<(Timestamp, Timestamp)> = dates
            .iter()
            .flat_map(|&date| self.windows_for(date))
            .map(|w| (w.start, w.end))
            .collect();

        intervals.sort_by_key(|&(start, _)| start);

        let mut merged: Vec<(Timestamp, Timestamp)> = Vec::with_capacity(intervals.len());
        for (start, end) in intervals {
            match merged.last_mut() {
                Some(last) if start <= last.1 => {
                    last.1 = last.1.max(end);
                }
                _ => merged.push((start, end)),
            }
        }
        merged
    }
}
