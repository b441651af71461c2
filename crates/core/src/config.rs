//! Configuration structures for the tick-labeler system.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration for the labeling pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Trading session boundaries.
    pub session: SessionConfig,
    /// Label construction parameters.
    pub label: LabelConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            label: LabelConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Validate the whole configuration, failing on the first violation.
    pub fn validate(&self) -> Result<()> {
        self.session.validate()?;
        self.label.validate()
    }

    /// Load and validate a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Trading session time-of-day boundaries.
///
/// The night session wraps past midnight iff `night_start > night_end`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Day session start (inclusive).
    pub day_start: NaiveTime,
    /// Day session end (exclusive).
    pub day_end: NaiveTime,
    /// Night session start (inclusive).
    pub night_start: NaiveTime,
    /// Night session end (exclusive; next day when wrapping).
    pub night_end: NaiveTime,
}

impl Default for SessionConfig {
    fn default() -> Self {
        // TAIFEX-style futures hours: day 08:45-13:45, night 15:00-05:00.
        Self {
            day_start: NaiveTime::from_hms_opt(8, 45, 0).unwrap(),
            day_end: NaiveTime::from_hms_opt(13, 45, 0).unwrap(),
            night_start: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            night_end: NaiveTime::from_hms_opt(5, 0, 0).unwrap(),
        }
    }
}

impl SessionConfig {
    /// Whether the night session spans midnight.
    #[inline]
    pub fn night_wraps(&self) -> bool {
        self.night_start > self.night_end
    }

    /// Validate the session boundaries.
    pub fn validate(&self) -> Result<()> {
        if self.day_start >= self.day_end {
            return Err(Error::config(format!(
                "day_start ({}) must be before day_end ({})",
                self.day_start, self.day_end
            )));
        }
        Ok(())
    }
}

/// Label construction parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Forward-look horizon as a duration string (e.g. "30m", "90s", "1h30m").
    pub window: String,
    /// Minimum relative price increase classified as "up" (strict `>`).
    pub threshold: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            window: "30m".to_string(),
            threshold: 0.001,
        }
    }
}

impl LabelConfig {
    /// Parse the forward-look horizon.
    pub fn window(&self) -> Result<Duration> {
        parse_duration(&self.window)
    }

    /// Validate the label parameters.
    pub fn validate(&self) -> Result<()> {
        self.window()?;
        if !self.threshold.is_finite() {
            return Err(Error::config(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Parse a duration string like "30m", "90s", "500ms", "2d" or a composed
/// form like "1h30m" into a positive duration.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let s = input.trim();
    if s.is_empty() {
        return Err(Error::config("empty duration string"));
    }

    let mut total = Duration::zero();
    let mut chars = s.chars().peekable();

    while chars.peek().is_some() {
        let mut digits = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                chars.next();
            } else {
                break;
            }
        }
        if digits.is_empty() {
            return Err(Error::config(format!("invalid duration string: '{input}'")));
        }
        let value: i64 = digits
            .parse()
            .map_err(|_| Error::config(format!("duration component too large: '{input}'")))?;

        let mut unit = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_alphabetic() {
                unit.push(c);
                chars.next();
            } else {
                break;
            }
        }
        let part = match unit.as_str() {
            "ms" => Duration::milliseconds(value),
            "s" => Duration::seconds(value),
            "m" | "min" => Duration::minutes(value),
            "h" => Duration::hours(value),
            "d" => Duration::days(value),
            _ => {
                return Err(Error::config(format!(
                    "unknown duration unit '{unit}' in: '{input}'"
                )))
            }
        };
        total = total + part;
    }

    if total <= Duration::zero() {
        return Err(Error::config(format!("duration must be positive: '{input}'")));
    }
    Ok(total)
}
