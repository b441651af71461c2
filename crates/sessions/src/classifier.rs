//! Session classification from clock time-of-day.
//!
//! Decides whether a time-of-day falls in the day session, the night
//! session (which may wrap past midnight), or neither.

use chrono::NaiveTime;
use ticklabel_core::{SessionConfig, SessionKind, Tick};

/// Classifies clock times against configured session boundaries.
///
/// Pure and total: every time-of-day maps to `Some(Day)`, `Some(Night)`
/// or `None` (outside trading hours). Day takes precedence should a
/// degenerate configuration make the two ranges overlap.
#[derive(Debug, Clone)]
pub struct SessionClassifier {
    config: SessionConfig,
}

impl SessionClassifier {
    /// Create a classifier from session boundaries.
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// The session boundaries this classifier uses.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Classify a clock time-of-day.
    ///
    /// Day: `day_start <= t < day_end`. Night without wrap:
    /// `night_start <= t < night_end`. Night with wrap
    /// (`night_start > night_end`): `t >= night_start || t < night_end`.
    pub fn classify(&self, time_of_day: NaiveTime) -> Option<SessionKind> {
        let c = &self.config;

        if c.day_start <= time_of_day && time_of_day < c.day_end {
            return Some(SessionKind::Day);
        }

        let in_night = if c.night_wraps() {
            time_of_day >= c.night_start || time_of_day < c.night_end
        } else {
            c.night_start <= time_of_day && time_of_day < c.night_end
        };

        if in_night {
            Some(SessionKind::Night)
        } else {
            None
        }
    }

    /// Classify a tick by its clock time-of-day.
    #[inline]
    pub fn classify_tick(&self, tick: &Tick) -> Option<SessionKind> {
        self.classify(tick.time_of_day())
    }
}
