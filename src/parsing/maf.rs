use std::io::BufRead;

use thiserror::Error;
use tracing::{debug, trace};

use crate::core::record::AlignmentRecord;
use crate::core::types::Strand;

/// Mismap probability assumed for blocks that carry no `mismap=` annotation
pub const DEFAULT_BLOCK_MISMAP: f64 = 1.0;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid MAF format at line {line}: {message}")]
    InvalidFormat { line: usize, message: String },
}

impl ParseError {
    fn invalid(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            line,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// `a` line opening an alignment block
    Block,
    /// `s` row
    Sequence,
    /// Comments, blank lines, and q/i/e/p rows
    Other,
}

impl LineKind {
    fn of(line: &str) -> Self {
        match line.split_whitespace().next() {
            Some("a") => Self::Block,
            Some("s") => Self::Sequence,
            _ => Self::Other,
        }
    }
}

/// Reference row of the block currently being read
#[derive(Debug)]
struct ReferenceRow {
    name: String,
    start: i64,
    size: i64,
}

#[derive(Debug)]
struct BlockState {
    keep: bool,
    reference: Option<ReferenceRow>,
}

/// Streaming reader turning MAF text into [`AlignmentRecord`]s.
///
/// In each `a` block the first `s` row is the reference and every later `s`
/// row is a query aligned to it. Blocks whose `mismap=` exceeds the threshold
/// produce nothing. Records come out in input order.
pub struct MafReader<R> {
    inner: R,
    buf: String,
    line_number: usize,
    max_mismap: f64,
    block: Option<BlockState>,
    blocks_read: usize,
    blocks_dropped: usize,
}

impl<R: BufRead> MafReader<R> {
    pub fn new(inner: R, max_mismap: f64) -> Self {
        Self {
            inner,
            buf: String::new(),
            line_number: 0,
            max_mismap,
            block: None,
            blocks_read: 0,
            blocks_dropped: 0,
        }
    }

    /// Number of `a` blocks seen so far
    #[must_use]
    pub fn blocks_read(&self) -> usize {
        self.blocks_read
    }

    /// Number of blocks discarded by the mismap threshold
    #[must_use]
    pub fn blocks_dropped(&self) -> usize {
        self.blocks_dropped
    }

    fn start_block(&mut self) -> Result<(), ParseError> {
        let mismap = parse_mismap(&self.buf).map_err(|value| {
            ParseError::invalid(self.line_number, format!("Invalid mismap value: '{value}'"))
        })?;
        let keep = mismap <= self.max_mismap;

        self.blocks_read += 1;
        if !keep {
            self.blocks_dropped += 1;
            debug!(
                line = self.line_number,
                mismap,
                max_mismap = self.max_mismap,
                "Dropping block above mismap threshold"
            );
        }

        self.block = Some(BlockState {
            keep,
            reference: None,
        });
        Ok(())
    }

    fn read_sequence_row(&mut self) -> Result<Option<AlignmentRecord>, ParseError> {
        let line = self.line_number;
        let block = self
            .block
            .as_mut()
            .ok_or_else(|| ParseError::invalid(line, "sequence line before any 'a' line"))?;

        if !block.keep {
            return Ok(None);
        }

        let fields: Vec<&str> = self.buf.split_whitespace().collect();
        if fields.len() < 5 {
            return Err(ParseError::invalid(
                line,
                format!("'s' line has {} fields, expected at least 5", fields.len()),
            ));
        }

        if let Some(reference) = &block.reference {
            let strand = Strand::parse(fields[4]).ok_or_else(|| {
                ParseError::invalid(line, format!("Invalid strand: '{}'", fields[4]))
            })?;

            return Ok(Some(AlignmentRecord::from_maf(
                fields[1],
                &reference.name,
                reference.start,
                reference.size,
                strand,
            )));
        }

        let start: i64 = fields[2]
            .parse()
            .map_err(|_| ParseError::invalid(line, format!("Invalid start: '{}'", fields[2])))?;
        let size: i64 = fields[3]
            .parse()
            .map_err(|_| ParseError::invalid(line, format!("Invalid size: '{}'", fields[3])))?;
        if start < 0 || size <= 0 {
            return Err(ParseError::invalid(
                line,
                format!("Reference row must have start >= 0 and size > 0, got {start} and {size}"),
            ));
        }

        trace!(line, reference = fields[1], start, size, "Reference row");
        block.reference = Some(ReferenceRow {
            name: fields[1].to_string(),
            start,
            size,
        });
        Ok(None)
    }
}

impl<R: BufRead> Iterator for MafReader<R> {
    type Item = Result<AlignmentRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.inner.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line_number += 1,
                Err(e) => return Some(Err(e.into())),
            }

            let result = match LineKind::of(&self.buf) {
                LineKind::Block => self.start_block().map(|()| None),
                LineKind::Sequence => self.read_sequence_row(),
                LineKind::Other => Ok(None),
            };

            match result {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Extract the `mismap=` value from an `a` line, or the default when absent.
/// On a malformed value the offending text is returned.
fn parse_mismap(line: &str) -> Result<f64, String> {
    let mut mismap = DEFAULT_BLOCK_MISMAP;
    for token in line.split_whitespace() {
        if let Some(value) = token.strip_prefix("mismap=") {
            mismap = value.parse().map_err(|_| value.to_string())?;
        }
    }
    Ok(mismap)
}
