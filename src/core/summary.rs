use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::core::types::{AdjacencyVerdict, TransSplicedFlag, UnsplicedFlag};

/// One token of the exon structure trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// Number of alignments in an exon run
    Run(usize),
    /// Verdict that closed the preceding run
    Junction(AdjacencyVerdict),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Empty parts encoding")]
    Empty,

    #[error("Unknown junction symbol '{0}'")]
    UnknownSymbol(char),

    #[error("Run length out of range: {0}")]
    InvalidLength(String),

    #[error("Expected {expected} at offset {offset}")]
    OutOfOrder {
        expected: &'static str,
        offset: usize,
    },
}

/// Exon runs interleaved with the verdicts that separate them.
///
/// Always starts and ends with a [`Part::Run`]; runs and junctions alternate.
/// Displays as the compact encoding, e.g. `3b2t1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExonStructure {
    parts: Vec<Part>,
}

impl ExonStructure {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Close a run of `length` alignments with `verdict`
    pub fn close_run(&mut self, length: usize, verdict: AdjacencyVerdict) {
        self.parts.push(Part::Run(length));
        self.parts.push(Part::Junction(verdict));
    }

    /// Append the final run; nothing follows it
    pub fn finish(&mut self, length: usize) {
        self.parts.push(Part::Run(length));
    }

    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn run_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.parts.iter().filter_map(|p| match p {
            Part::Run(n) => Some(*n),
            Part::Junction(_) => None,
        })
    }

    pub fn junctions(&self) -> impl Iterator<Item = AdjacencyVerdict> + '_ {
        self.parts.iter().filter_map(|p| match p {
            Part::Junction(v) => Some(*v),
            Part::Run(_) => None,
        })
    }

    #[must_use]
    pub fn trans_spliced_flag(&self) -> TransSplicedFlag {
        if self.parts.len() > 1 {
            TransSplicedFlag::Split
        } else {
            TransSplicedFlag::Colinear
        }
    }

    #[must_use]
    pub fn unspliced_flag(&self) -> UnsplicedFlag {
        if self.run_lengths().any(|n| n == 1) {
            UnsplicedFlag::Unspliced
        } else {
            UnsplicedFlag::Spliced
        }
    }
}

impl std::fmt::Display for ExonStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            match part {
                Part::Run(n) => write!(f, "{n}")?,
                Part::Junction(v) => write!(f, "{v}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for ExonStructure {
    type Err = EncodingError;

    /// Split into maximal digit runs and single junction symbols
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(EncodingError::Empty);
        }

        let mut parts = Vec::new();
        let mut digits_start: Option<usize> = None;

        for (offset, c) in s.char_indices() {
            if c.is_ascii_digit() {
                digits_start.get_or_insert(offset);
                continue;
            }

            let verdict = AdjacencyVerdict::from_symbol(c).ok_or(EncodingError::UnknownSymbol(c))?;
            let Some(start) = digits_start.take() else {
                return Err(EncodingError::OutOfOrder {
                    expected: "run length",
                    offset,
                });
            };
            parts.push(Part::Run(parse_length(&s[start..offset])?));
            parts.push(Part::Junction(verdict));
        }

        match digits_start {
            Some(start) => parts.push(Part::Run(parse_length(&s[start..])?)),
            None => {
                return Err(EncodingError::OutOfOrder {
                    expected: "run length",
                    offset: s.len(),
                })
            }
        }

        Ok(Self { parts })
    }
}

fn parse_length(digits: &str) -> Result<usize, EncodingError> {
    digits
        .parse()
        .map_err(|_| EncodingError::InvalidLength(digits.to_string()))
}

impl Serialize for ExonStructure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Classification of one query's alignments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuerySummary {
    #[serde(rename = "query")]
    pub query_name: String,
    pub trans_spliced: TransSplicedFlag,
    pub unspliced: UnsplicedFlag,
    pub parts: ExonStructure,
}

impl QuerySummary {
    /// Derive both flags from the exon structure
    #[must_use]
    pub fn new(query_name: impl Into<String>, parts: ExonStructure) -> Self {
        Self {
            query_name: query_name.into(),
            trans_spliced: parts.trans_spliced_flag(),
            unspliced: parts.unspliced_flag(),
            parts,
        }
    }
}

/// Formats as `<query>\t<T|C>:<U|S>:<parts>`
impl std::fmt::Display for QuerySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}:{}:{}",
            self.query_name, self.trans_spliced, self.unspliced, self.parts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_run() {
        let mut parts = ExonStructure::new();
        parts.finish(1);

        let summary = QuerySummary::new("read1", parts);
        assert_eq!(summary.to_string(), "read1\tC:U:1");
    }

    #[test]
    fn test_split_runs() {
        let mut parts = ExonStructure::new();
        parts.close_run(3, AdjacencyVerdict::Break);
        parts.close_run(2, AdjacencyVerdict::Trans);
        parts.finish(4);

        let summary = QuerySummary::new("read2", parts);
        assert_eq!(summary.trans_spliced, TransSplicedFlag::Split);
        assert_eq!(summary.unspliced, UnsplicedFlag::Spliced);
        assert_eq!(summary.to_string(), "read2\tT:S:3b2t4");
    }

    #[test]
    fn test_unspliced_requires_exact_one() {
        // 10 and 11 contain the digit 1 but are not single-alignment runs
        let parts: ExonStructure = "10b11".parse().unwrap();
        assert_eq!(parts.unspliced_flag(), UnsplicedFlag::Spliced);

        let parts: ExonStructure = "10b1".parse().unwrap();
        assert_eq!(parts.unspliced_flag(), UnsplicedFlag::Unspliced);
    }

    #[test]
    fn test_parse_encoding() {
        let parts: ExonStructure = "3b2c1".parse().unwrap();
        assert_eq!(parts.run_lengths().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(
            parts.junctions().collect::<Vec<_>>(),
            vec![AdjacencyVerdict::Break, AdjacencyVerdict::Contiguous]
        );
        assert_eq!(parts.to_string(), "3b2c1");
    }

    #[test]
    fn test_parse_multi_digit_runs() {
        let parts: ExonStructure = "120t7".parse().unwrap();
        assert_eq!(parts.parts(), &[
            Part::Run(120),
            Part::Junction(AdjacencyVerdict::Trans),
            Part::Run(7)
        ]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!("".parse::<ExonStructure>(), Err(EncodingError::Empty));
        assert_eq!(
            "2x1".parse::<ExonStructure>(),
            Err(EncodingError::UnknownSymbol('x'))
        );
        assert!(matches!(
            "b1".parse::<ExonStructure>(),
            Err(EncodingError::OutOfOrder { offset: 0, .. })
        ));
        assert!(matches!(
            "1tb1".parse::<ExonStructure>(),
            Err(EncodingError::OutOfOrder { offset: 2, .. })
        ));
        assert!(matches!(
            "2t".parse::<ExonStructure>(),
            Err(EncodingError::OutOfOrder { offset: 2, .. })
        ));
    }

    #[test]
    fn test_summary_json() {
        let summary = QuerySummary::new("q", "1b1".parse().unwrap());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "query": "q",
                "trans_spliced": "T",
                "unspliced": "U",
                "parts": "1b1",
            })
        );
    }
}
