//! Facilities for parsing tagged corpora into in-memory sentence sequences.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::CorpusConfig;
use crate::error::{Result, TagsplitError};

/// A single token: the ordered fields found on one corpus line, typically a
/// surface form followed by one or more tag columns.
pub type Token = Vec<String>;

/// An ordered sequence of tokens terminated by a blank line in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Tokens in file order.
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Creates a sentence from its tokens.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Number of tokens in the sentence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Streaming sentence parser over any buffered reader.
///
/// Lines are stripped of trailing whitespace; contentful lines are split on
/// whitespace into token fields, and a blank line flushes the accumulated
/// tokens as one [`Sentence`].  When the input does not end with a blank line
/// the trailing accumulator is still emitted, so the final sentence is never
/// dropped.  There is no schema validation: any whitespace-splittable line is
/// accepted as a token, whatever its field count.
pub struct SentenceReader<R: BufRead> {
    source: R,
    cfg: CorpusConfig,
    pending: Vec<Token>,
    done: bool,
}

impl<R: BufRead> SentenceReader<R> {
    /// Wraps a buffered reader with the given corpus configuration.
    pub fn new(source: R, cfg: CorpusConfig) -> Self {
        Self {
            source,
            cfg,
            pending: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for SentenceReader<R> {
    type Item = Result<Sentence>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut line = String::new();
        loop {
            line.clear();
            let read = match self.source.read_line(&mut line) {
                Ok(read) => read,
                Err(err) => {
                    self.done = true;
                    return Some(Err(TagsplitError::io(err, None)));
                }
            };
            if read == 0 {
                self.done = true;
                if self.pending.is_empty() {
                    return None;
                }
                return Some(Ok(Sentence::new(std::mem::take(&mut self.pending))));
            }
            let trimmed = line.trim_end();
            if trimmed.is_empty() {
                if self.pending.is_empty() && !self.cfg.keep_empty_sentences {
                    continue;
                }
                return Some(Ok(Sentence::new(std::mem::take(&mut self.pending))));
            }
            let token: Token = trimmed.split_whitespace().map(str::to_owned).collect();
            self.pending.push(token);
        }
    }
}

/// Reads the corpus at `path`, materializing every sentence in file order.
///
/// The file handle is opened, fully consumed, and closed before this function
/// returns; the whole corpus is held in memory.  A missing or unreadable path
/// fails immediately with [`TagsplitError::Io`] carrying the offending path.
pub fn read_corpus<P: AsRef<Path>>(path: P, cfg: &CorpusConfig) -> Result<Vec<Sentence>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| TagsplitError::io(err, Some(path.to_path_buf())))?;
    let reader = SentenceReader::new(BufReader::new(file), cfg.clone());
    let mut sentences = Vec::new();
    for sentence in reader {
        sentences.push(sentence.map_err(|err| match err {
            TagsplitError::Io { source, path: None } => {
                TagsplitError::io(source, Some(path.to_path_buf()))
            }
            other => other,
        })?);
    }
    Ok(sentences)
}
