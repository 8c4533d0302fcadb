//! Configuration builders controlling corpus reading and partitioning.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TagsplitError};

/// Delimiter placed between token fields when a partition is serialized.
///
/// Input parsing always splits on arbitrary whitespace, so either variant reads
/// back cleanly; [`FieldDelimiter::Tab`] is the canonical choice because a tab
/// survives fields whose values contain no tabs while remaining visually
/// aligned in most editors.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldDelimiter {
    /// Join token fields with `\t` (the default, round-trip safe).
    #[default]
    Tab,
    /// Join token fields with a single space.
    Space,
}

impl FieldDelimiter {
    /// Returns the delimiter as a string slice suitable for `join`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tab => "\t",
            Self::Space => " ",
        }
    }
}

/// Configuration for reading a tagged corpus from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusConfig {
    /// Emit a zero-token sentence for every blank line, even when no tokens
    /// were accumulated since the previous delimiter.  Off by default:
    /// consecutive blank lines (or a leading blank line) are treated as noise
    /// rather than empty sentences.
    pub keep_empty_sentences: bool,
}

/// Configuration for partitioning a corpus into train/dev/test subsets.
///
/// The test partition always receives `N - floor(train * N) - floor(dev * N)`
/// sentences, so the three counts sum to the corpus size exactly regardless of
/// rounding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplitConfig {
    /// Fraction of sentences assigned to the training partition.
    pub train_fraction: f64,
    /// Fraction of sentences assigned to the development partition.
    pub dev_fraction: f64,
}

impl SplitConfig {
    /// Returns a builder initialised with [`SplitConfig::default`].
    #[must_use]
    pub fn builder() -> SplitBuilder {
        SplitBuilder::default()
    }

    /// Validates the invariants required for partitioning.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("train_fraction", self.train_fraction),
            ("dev_fraction", self.dev_fraction),
        ] {
            if !value.is_finite() || value < 0.0 || value > 1.0 {
                return Err(TagsplitError::InvalidConfig(format!(
                    "{name} ({value}) must lie within [0.0, 1.0]"
                )));
            }
        }
        if self.train_fraction + self.dev_fraction > 1.0 {
            return Err(TagsplitError::InvalidConfig(format!(
                "train_fraction ({}) + dev_fraction ({}) must not exceed 1.0",
                self.train_fraction, self.dev_fraction
            )));
        }
        Ok(())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_fraction: 0.8,
            dev_fraction: 0.1,
        }
    }
}

/// Builder for [`SplitConfig`].
#[derive(Debug, Default, Clone)]
pub struct SplitBuilder {
    cfg: SplitConfig,
}

impl SplitBuilder {
    /// Creates a builder with [`SplitConfig::default`] settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the training fraction.
    #[must_use]
    pub fn train_fraction(mut self, value: f64) -> Self {
        self.cfg.train_fraction = value;
        self
    }

    /// Sets the development fraction.
    #[must_use]
    pub fn dev_fraction(mut self, value: f64) -> Self {
        self.cfg.dev_fraction = value;
        self
    }

    /// Finalises the builder, validating the resulting [`SplitConfig`].
    pub fn build(self) -> Result<SplitConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fractions_are_eighty_ten() {
        let cfg = SplitConfig::default();
        assert!((cfg.train_fraction - 0.8).abs() < f64::EPSILON);
        assert!((cfg.dev_fraction - 0.1).abs() < f64::EPSILON);
        cfg.validate().expect("defaults should validate");
    }

    #[test]
    fn builder_overrides_fractions() {
        let cfg = SplitConfig::builder()
            .train_fraction(0.7)
            .dev_fraction(0.2)
            .build()
            .expect("config should be valid");
        assert!((cfg.train_fraction - 0.7).abs() < f64::EPSILON);
        assert!((cfg.dev_fraction - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_rejects_fractions_summing_past_one() {
        let err = SplitConfig::builder()
            .train_fraction(0.9)
            .dev_fraction(0.2)
            .build()
            .expect_err("validation should fail");
        assert!(matches!(
            err,
            TagsplitError::InvalidConfig(message) if message.contains("must not exceed 1.0")
        ));
    }

    #[test]
    fn validate_rejects_non_finite_fraction() {
        let cfg = SplitConfig {
            train_fraction: f64::NAN,
            ..SplitConfig::default()
        };
        let err = cfg.validate().expect_err("validation should fail");
        assert!(matches!(err, TagsplitError::InvalidConfig(_)));
    }

    #[test]
    fn delimiter_strings() {
        assert_eq!(FieldDelimiter::Tab.as_str(), "\t");
        assert_eq!(FieldDelimiter::Space.as_str(), " ");
        assert_eq!(FieldDelimiter::default(), FieldDelimiter::Tab);
    }
}
