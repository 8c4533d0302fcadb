//! Deterministic train/dev/test splitting for tagged corpora, as a library
//! and a `tagsplit` command line interface.
//!
//! The input format is the usual sequence-labeling layout: one token per line
//! with whitespace-delimited fields (surface form, tag, further columns), and
//! a blank line between sentences.  A run reads the whole corpus into memory,
//! applies a Fisher-Yates permutation driven by an explicit seed, slices the
//! permutation 80/10/10 (configurable), and writes each partition back in the
//! same line-oriented format.
//!
//! ```no_run
//! use tagsplit::{
//!     read_corpus, split_corpus, write_partition, CorpusConfig, FieldDelimiter, SplitConfig,
//! };
//!
//! # fn main() -> tagsplit::Result<()> {
//! let corpus = read_corpus("corpus.tsv", &CorpusConfig::default())?;
//! let partitions = split_corpus(corpus, 272, &SplitConfig::default())?;
//! write_partition(&partitions.train, "train.tsv", FieldDelimiter::Tab)?;
//! write_partition(&partitions.dev, "dev.tsv", FieldDelimiter::Tab)?;
//! write_partition(&partitions.test, "test.tsv", FieldDelimiter::Tab)?;
//! # Ok(())
//! # }
//! ```
//!
//! The same seed and corpus always produce byte-identical partitions.  The
//! CLI is enabled by default through the `cli` feature; library consumers can
//! disable default features to avoid the CLI dependencies:
//! `tagsplit = { version = "...", default-features = false }`.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    clippy::all,
    rust_2018_idioms,
    future_incompatible,
    unused_lifetimes,
    unreachable_pub
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod report;
pub mod split;
pub mod writer;

pub use config::{CorpusConfig, FieldDelimiter, SplitBuilder, SplitConfig};
pub use corpus::{read_corpus, Sentence, SentenceReader, Token};
pub use error::{Result, TagsplitError};
pub use report::{PartitionStats, SplitReport};
pub use split::{partition_counts, split_corpus, Partitions};
pub use writer::write_partition;
