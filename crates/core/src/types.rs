//! Core data types for the tick-labeler system.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Timestamp type: exchange-local naive datetime with sub-second resolution.
pub type Timestamp = NaiveDateTime;

/// A single trade record (tick) from the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Trade timestamp.
    pub ts: Timestamp,
    /// Trade price (strictly positive by input contract).
    pub price: f64,
    /// Trade volume (contracts).
    pub volume: u64,
}

impl Tick {
    /// Calendar date the tick physically carries.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.ts.date()
    }

    /// Clock time-of-day of the tick.
    #[inline]
    pub fn time_of_day(&self) -> NaiveTime {
        self.ts.time()
    }
}

/// Trading session kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// Regular day session.
    Day,
    /// Night session (may span midnight).
    Night,
}

/// A concrete, non-wrapping instant interval derived by anchoring the
/// session boundaries to a calendar date.
///
/// Half-open: `start` inclusive, `end` exclusive. For a wrapping night
/// session two windows exist per date, both carrying the *opening* date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWindow {
    /// The date the session opened (not necessarily the date of every
    /// instant inside the window).
    pub date: NaiveDate,
    /// Session kind.
    pub kind: SessionKind,
    /// Window start (inclusive).
    pub start: Timestamp,
    /// Window end (exclusive).
    pub end: Timestamp,
}

impl SessionWindow {
    /// Whether the instant falls inside this window.
    #[inline]
    pub fn contains(&self, ts: Timestamp) -> bool {
        self.start <= ts && ts < self.end
    }

    /// Whether this window overlaps another (half-open semantics).
    #[inline]
    pub fn overlaps(&self, other: &SessionWindow) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Result of the forward as-of join for a single source tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardMatch {
    /// Timestamp of the source tick.
    pub source_ts: Timestamp,
    /// Price of the source tick.
    pub source_price: f64,
    /// Timestamp of the matched future tick, if any.
    pub matched_ts: Option<Timestamp>,
    /// Price of the matched future tick, if any.
    pub matched_price: Option<f64>,
}

impl ForwardMatch {
    /// Build a match with a future observation.
    pub fn found(source_ts: Timestamp, source_price: f64, matched_ts: Timestamp, matched_price: f64) -> Self {
        Self {
            source_ts,
            source_price,
            matched_ts: Some(matched_ts),
            matched_price: Some(matched_price),
        }
    }

    /// Build a no-match entry (no qualifying future observation).
    pub fn unmatched(source_ts: Timestamp, source_price: f64) -> Self {
        Self {
            source_ts,
            source_price,
            matched_ts: None,
            matched_price: None,
        }
    }

    /// Whether a future observation was found.
    #[inline]
    pub fn is_matched(&self) -> bool {
        self.matched_ts.is_some()
    }

    /// Relative price change `(matched - source) / source`, when matched.
    ///
    /// Assumes a positive source price; callers enforcing the input
    /// contract must check positivity before using the result.
    #[inline]
    pub fn price_change(&self) -> Option<f64> {
        self.matched_price
            .map(|future| (future - self.source_price) / self.source_price)
    }
}

/// Binary up/down label, or missing when no future observation exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelValue {
    /// Future price change exceeded the threshold.
    Up,
    /// Future price change at or below the threshold.
    Down,
    /// No future observation inside the horizon.
    Missing,
}

impl LabelValue {
    /// Numeric encoding: Up = 1, Down = 0, Missing = None.
    #[inline]
    pub fn as_int(self) -> Option<u8> {
        match self {
            LabelValue::Up => Some(1),
            LabelValue::Down => Some(0),
            LabelValue::Missing => None,
        }
    }

    /// Whether the label is missing.
    #[inline]
    pub fn is_missing(self) -> bool {
        self == LabelValue::Missing
    }
}

/// Check that a tick series has monotonically non-decreasing timestamps.
///
/// Input contract for every stage operating on a sorted series.
pub fn ensure_time_ordered(ticks: &[Tick]) -> Result<()> {
    for pair in ticks.windows(2) {
        if pair[0].ts > pair[1].ts {
            return Err(Error::input(format!(
                "tick series is not time-ordered: {} followed by {}",
                pair[0].ts, pair[1].ts
            )));
        }
    }
    Ok(())
}

/// A label keyed by its source timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Source tick timestamp this label belongs to.
    pub ts: Timestamp,
    /// Label value.
    pub value: LabelValue,
}
