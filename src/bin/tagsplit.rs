use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;
use tagsplit::{
    partition_counts, read_corpus, split_corpus, write_partition, CorpusConfig, FieldDelimiter,
    PartitionStats, SplitConfig, SplitReport,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Tagged corpus train/dev/test splitter", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a corpus into train/dev/test files with a seeded shuffle
    Split(SplitArgs),
    /// Report sentence and token counts for a corpus
    Stats(StatsArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DelimiterArg {
    /// Join token fields with a tab (round-trip safe)
    Tab,
    /// Join token fields with a single space
    Space,
}

impl From<DelimiterArg> for FieldDelimiter {
    fn from(value: DelimiterArg) -> Self {
        match value {
            DelimiterArg::Tab => FieldDelimiter::Tab,
            DelimiterArg::Space => FieldDelimiter::Space,
        }
    }
}

#[derive(Args, Debug)]
struct SplitArgs {
    /// Source corpus file
    input: PathBuf,

    /// Output path for the training partition
    #[arg(long, value_name = "PATH")]
    train: PathBuf,

    /// Output path for the development partition
    #[arg(long, value_name = "PATH")]
    dev: PathBuf,

    /// Output path for the test partition
    #[arg(long, value_name = "PATH")]
    test: PathBuf,

    /// Seed for the deterministic shuffle
    #[arg(long, value_name = "SEED")]
    seed: u64,

    /// Fraction of sentences assigned to training
    #[arg(long, value_name = "FRAC", default_value_t = 0.8)]
    train_fraction: f64,

    /// Fraction of sentences assigned to development
    #[arg(long, value_name = "FRAC", default_value_t = 0.1)]
    dev_fraction: f64,

    /// Field delimiter for the output files
    #[arg(long, value_enum, default_value_t = DelimiterArg::Tab)]
    delimiter: DelimiterArg,

    /// Keep zero-token sentences produced by consecutive blank lines
    #[arg(long)]
    keep_empty: bool,

    /// Emit the report as JSON instead of a plain-text summary
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Source corpus file
    input: PathBuf,

    /// Keep zero-token sentences produced by consecutive blank lines
    #[arg(long)]
    keep_empty: bool,

    /// Emit counts as JSON instead of a plain-text summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Split(args) => run_split(args),
        Commands::Stats(args) => run_stats(args),
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    use log::LevelFilter;

    let level = if quiet > 0 {
        match quiet {
            0 => LevelFilter::Info,
            1 => LevelFilter::Warn,
            _ => LevelFilter::Error,
        }
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    builder.filter_level(level);
    let _ = builder.try_init();
}

fn run_split(args: SplitArgs) -> Result<()> {
    let split_cfg = SplitConfig::builder()
        .train_fraction(args.train_fraction)
        .dev_fraction(args.dev_fraction)
        .build()
        .context("invalid split fractions")?;
    let corpus_cfg = CorpusConfig {
        keep_empty_sentences: args.keep_empty,
    };

    let corpus = read_corpus(&args.input, &corpus_cfg)
        .with_context(|| format!("failed to read corpus {}", args.input.display()))?;
    let n = corpus.len();
    let (train_count, dev_count, test_count) = partition_counts(n, &split_cfg);
    info!(
        "read {n} sentences from {}; splitting {train_count}/{dev_count}/{test_count} with seed {}",
        args.input.display(),
        args.seed
    );

    let partitions = split_corpus(corpus, args.seed, &split_cfg)?;
    let delimiter = FieldDelimiter::from(args.delimiter);
    for (partition, path) in [
        (&partitions.train, &args.train),
        (&partitions.dev, &args.dev),
        (&partitions.test, &args.test),
    ] {
        write_partition(partition, path, delimiter)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    let report = SplitReport::from_partitions(&partitions, args.seed);
    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        for (name, path, stats) in [
            ("train", &args.train, report.train),
            ("dev", &args.dev, report.dev),
            ("test", &args.test, report.test),
        ] {
            writeln!(
                stdout,
                "{name:>5}: {} sentences, {} tokens -> {}",
                stats.sentences,
                stats.tokens,
                path.display()
            )?;
        }
        writeln!(stdout, "total: {} sentences", report.total_sentences)?;
    }
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<()> {
    let corpus_cfg = CorpusConfig {
        keep_empty_sentences: args.keep_empty,
    };
    let corpus = read_corpus(&args.input, &corpus_cfg)
        .with_context(|| format!("failed to read corpus {}", args.input.display()))?;
    let stats = PartitionStats::measure(&corpus);

    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &stats)?;
        writeln!(stdout)?;
    } else {
        writeln!(
            stdout,
            "{}: {} sentences, {} tokens",
            args.input.display(),
            stats.sentences,
            stats.tokens
        )?;
    }
    Ok(())
}
