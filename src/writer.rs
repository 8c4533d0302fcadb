//! Serialization of partitions back to line-oriented corpus files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::config::FieldDelimiter;
use crate::corpus::Sentence;
use crate::error::{Result, TagsplitError};

/// Writes `partition` to `path`, overwriting any existing file.
///
/// Each token becomes one UTF-8 line with its fields joined by `delimiter`,
/// and every sentence is terminated by a blank line, so the output parses back
/// through the reader into the same sentence sequence.  An unwritable path
/// fails with [`TagsplitError::Io`]; partitions already written to other paths
/// are left on disk, there is no rollback.
pub fn write_partition<P: AsRef<Path>>(
    partition: &[Sentence],
    path: P,
    delimiter: FieldDelimiter,
) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).map_err(|err| TagsplitError::io(err, Some(path.to_path_buf())))?;
    let mut writer = BufWriter::new(file);
    for sentence in partition {
        for token in &sentence.tokens {
            let mut line = token.join(delimiter.as_str());
            line.push('\n');
            writer
                .write_all(line.as_bytes())
                .map_err(|err| TagsplitError::io(err, Some(path.to_path_buf())))?;
        }
        writer
            .write_all(b"\n")
            .map_err(|err| TagsplitError::io(err, Some(path.to_path_buf())))?;
    }
    writer
        .flush()
        .map_err(|err| TagsplitError::io(err, Some(path.to_path_buf())))?;
    debug!(
        "wrote {} sentences to {}",
        partition.len(),
        path.display()
    );
    Ok(())
}
