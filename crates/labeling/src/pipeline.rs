//! End-to-end label pipeline.
//!
//! Chains session normalization, the forward as-of join and label
//! generation behind a single validated configuration.

use ticklabel_core::{Label, PipelineConfig, Result, Tick};
use ticklabel_sessions::SessionNormalizer;
use tracing::debug;

use crate::{forward_join::ForwardJoiner, labeler::LabelGenerator};

/// Configured label pipeline: raw ticks in, labels out.
///
/// Construction validates the configuration and parses the window
/// duration, so a run can only fail on input contract violations.
#[derive(Debug, Clone)]
pub struct LabelPipeline {
    normalizer: SessionNormalizer,
    joiner: ForwardJoiner,
    generator: LabelGenerator,
}

impl LabelPipeline {
    /// Build a pipeline from configuration, failing fast on any invalid
    /// option.
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            normalizer: SessionNormalizer::new(config.session.clone())?,
            joiner: ForwardJoiner::new(config.label.window()?)?,
            generator: LabelGenerator::new(config.label.threshold)?,
        })
    }

    /// The session normalizer stage.
    pub fn normalizer(&self) -> &SessionNormalizer {
        &self.normalizer
    }

    /// Run the full pipeline over a time-ordered tick series.
    ///
    /// Output is one label per session-normalized tick, in the same
    /// order. Per-row unmatched lookups surface as `Missing` labels;
    /// contract violations abort the run with no partial output.
    pub fn run(&self, ticks: &[Tick]) -> Result<Vec<Label>> {
        let normalized = self.normalizer.normalize(ticks)?;
        debug!(
            input = ticks.len(),
            kept = normalized.len(),
            dropped = ticks.len() - normalized.len(),
            "session normalization complete"
        );

        let matches = self.joiner.join(&normalized)?;
        let labels = self.generator.label(&matches)?;

        let missing = labels.iter().filter(|l| l.value.is_missing()).count();
        debug!(labels = labels.len(), missing, "label generation complete");

        Ok(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ticklabel_core::{LabelValue, Timestamp};

    fn ts(d: u32, h: u32, m: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2025, 4, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn tick(d: u32, h: u32, m: u32, price: f64) -> Tick {
        Tick { ts: ts(d, h, m), price, volume: 1 }
    }

    fn pipeline(window: &str, threshold: f64) -> LabelPipeline {
        let mut config = PipelineConfig::default();
        config.label.window = window.to_string();
        config.label.threshold = threshold;
        LabelPipeline::new(&config).unwrap()
    }

    #[test]
    fn test_end_to_end() {
        // Day session ticks (08:45-13:45): a 1% rise over 5 minutes,
        // preceded by a pre-open tick that normalization drops.
        let ticks = vec![
            tick(1, 7, 0, 999.0),
            tick(1, 9, 0, 100.0),
            tick(1, 9, 5, 101.0),
        ];

        let labels = pipeline("5m", 0.005).run(&ticks).unwrap();

        // Pre-open tick dropped; two labels remain, aligned to the
        // normalized timestamps.
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].ts, ts(1, 9, 0));
        assert_eq!(labels[0].value, LabelValue::Up);
        assert_eq!(labels[1].ts, ts(1, 9, 5));
        assert_eq!(labels[1].value, LabelValue::Missing);
    }

    #[test]
    fn test_window_exceeding_span_yields_all_missing() {
        let ticks = vec![tick(1, 9, 0, 100.0), tick(1, 9, 5, 101.0)];
        let labels = pipeline("30m", 0.005).run(&ticks).unwrap();
        assert!(labels.iter().all(|l| l.value.is_missing()));
    }

    #[test]
    fn test_join_spans_midnight_within_night_session() {
        // Night session opened on the 1st: 23:50 and 00:10 next day are
        // 20 minutes apart inside one session window.
        let ticks = vec![tick(1, 23, 50, 100.0), tick(2, 0, 10, 102.0)];
        let labels = pipeline("15m", 0.01).run(&ticks).unwrap();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].value, LabelValue::Up); // 2% > 1%
        assert_eq!(labels[1].value, LabelValue::Missing);
    }

    #[test]
    fn test_invalid_config_fails_at_construction() {
        let mut config = PipelineConfig::default();
        config.label.window = "never".to_string();
        assert!(LabelPipeline::new(&config).is_err());
    }

    #[test]
    fn test_unsorted_input_fails_whole_run() {
        let ticks = vec![tick(1, 9, 5, 101.0), tick(1, 9, 0, 100.0)];
        assert!(pipeline("5m", 0.005).run(&ticks).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(pipeline("5m", 0.005).run(&[]).unwrap().is_empty());
    }
}
