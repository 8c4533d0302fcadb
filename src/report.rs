//! Summary statistics describing the outcome of a split.

use serde::{Deserialize, Serialize};

use crate::corpus::Sentence;
use crate::split::Partitions;

/// Sentence and token counts for one partition.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartitionStats {
    /// Number of sentences in the partition.
    pub sentences: usize,
    /// Total tokens across all sentences in the partition.
    pub tokens: usize,
}

impl PartitionStats {
    /// Measures a partition without mutating it.
    #[must_use]
    pub fn measure(partition: &[Sentence]) -> Self {
        Self {
            sentences: partition.len(),
            tokens: partition.iter().map(Sentence::len).sum(),
        }
    }
}

/// Aggregate report covering all three partitions of a split.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitReport {
    /// Seed used to drive the permutation.
    pub seed: u64,
    /// Training partition counts.
    pub train: PartitionStats,
    /// Development partition counts.
    pub dev: PartitionStats,
    /// Test partition counts.
    pub test: PartitionStats,
    /// Grand total sentence count across the three partitions.
    pub total_sentences: usize,
}

impl SplitReport {
    /// Builds a report from freshly produced partitions.
    #[must_use]
    pub fn from_partitions(partitions: &Partitions, seed: u64) -> Self {
        Self {
            seed,
            train: PartitionStats::measure(&partitions.train),
            dev: PartitionStats::measure(&partitions.dev),
            test: PartitionStats::measure(&partitions.test),
            total_sentences: partitions.total_sentences(),
        }
    }
}
