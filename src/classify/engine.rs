use std::io::BufRead;

use crate::classify::grouper::QueryGroups;
use crate::classify::splice::classify;
use crate::core::summary::QuerySummary;
use crate::parsing::maf::{MafReader, ParseError};

/// Default ceiling on an alignment block's mismap probability
pub const DEFAULT_MAX_MISMAP: f64 = 1.0;

/// Default largest reference gap still treated as an intron
pub const DEFAULT_MAX_INTRON: f64 = 1e6;

/// Configuration for classifying a MAF stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifyConfig {
    /// Blocks with a higher mismap probability are skipped
    pub max_mismap: f64,
    /// Gaps larger than this between same-strand alignments are breaks
    pub max_intron: f64,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            max_mismap: DEFAULT_MAX_MISMAP,
            max_intron: DEFAULT_MAX_INTRON,
        }
    }
}

/// Lazily classifies every query in one MAF stream, in input order
pub struct SpliceTypes<R> {
    groups: QueryGroups<MafReader<R>>,
    max_intron: f64,
    queries: usize,
}

impl<R: BufRead> SpliceTypes<R> {
    pub fn new(reader: R, config: &ClassifyConfig) -> Self {
        Self {
            groups: QueryGroups::new(MafReader::new(reader, config.max_mismap)),
            max_intron: config.max_intron,
            queries: 0,
        }
    }

    /// The MAF reader, for block counts
    pub fn reader(&self) -> &MafReader<R> {
        self.groups.get_ref()
    }

    /// Number of summaries produced so far
    #[must_use]
    pub fn queries(&self) -> usize {
        self.queries
    }
}

impl<R: BufRead> Iterator for SpliceTypes<R> {
    type Item = Result<QuerySummary, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let group = match self.groups.next()? {
            Ok(group) => group,
            Err(e) => return Some(Err(e)),
        };
        self.queries += 1;
        Some(Ok(classify(&group, self.max_intron)))
    }
}
