//! Binary label generation from forward matches.
//!
//! Thresholds the relative price change of each forward match into an
//! up/down label, propagating no-match as a missing value.

use ticklabel_core::{Error, ForwardMatch, Label, LabelValue, Result};

/// Turns forward matches into binary labels against a relative-change
/// threshold.
#[derive(Debug, Clone)]
pub struct LabelGenerator {
    threshold: f64,
}

impl LabelGenerator {
    /// Create a generator with the given threshold.
    pub fn new(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() {
            return Err(Error::config(format!(
                "threshold must be finite, got {threshold}"
            )));
        }
        Ok(Self { threshold })
    }

    /// The relative-change threshold (strict `>` comparison).
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Label one forward match.
    ///
    /// Up when `(matched - source) / source > threshold`, Down otherwise,
    /// Missing when no future observation exists. A non-positive source
    /// price violates the input contract and fails the call.
    pub fn label_one(&self, m: &ForwardMatch) -> Result<Label> {
        if m.source_price <= 0.0 {
            return Err(Error::input(format!(
                "non-positive source price {} at {}",
                m.source_price, m.source_ts
            )));
        }

        let value = match m.price_change() {
            Some(change) => {
                if change > self.threshold {
                    LabelValue::Up
                } else {
                    LabelValue::Down
                }
            }
            None => LabelValue::Missing,
        };

        Ok(Label { ts: m.source_ts, value })
    }

    /// Label a sequence of forward matches, failing fast on the first
    /// contract violation (no partial output).
    pub fn label(&self, matches: &[ForwardMatch]) -> Result<Vec<Label>> {
        matches.iter().map(|m| self.label_one(m)).collect()
    }
}
