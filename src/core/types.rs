use serde::{Deserialize, Serialize};

/// Strand of a query row relative to the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    /// Parse a MAF strand column (`+` or `-`)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Forward),
            "-" => Some(Self::Reverse),
            _ => None,
        }
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Forward => '+',
            Self::Reverse => '-',
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Relationship between two consecutive alignments of one query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyVerdict {
    /// Different reference or strand, overlapping, or out of order
    Trans,
    /// Same exon run: gap no larger than the maximum intron
    Contiguous,
    /// Spliced junction with a gap beyond the maximum intron
    Break,
}

impl AdjacencyVerdict {
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Trans => 't',
            Self::Contiguous => 'c',
            Self::Break => 'b',
        }
    }

    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            't' => Some(Self::Trans),
            'c' => Some(Self::Contiguous),
            'b' => Some(Self::Break),
            _ => None,
        }
    }

    /// Whether this verdict closes the current exon run
    #[must_use]
    pub fn splits_run(self) -> bool {
        !matches!(self, Self::Contiguous)
    }
}

impl std::fmt::Display for AdjacencyVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Whether a query's alignments were split into more than one exon run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransSplicedFlag {
    /// More than one exon run (`T`)
    #[serde(rename = "T")]
    Split,
    /// A single exon run (`C`)
    #[serde(rename = "C")]
    Colinear,
}

impl std::fmt::Display for TransSplicedFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Split => write!(f, "T"),
            Self::Colinear => write!(f, "C"),
        }
    }
}

/// Whether any exon run consists of a single alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnsplicedFlag {
    /// Some run holds exactly one alignment (`U`)
    #[serde(rename = "U")]
    Unspliced,
    /// Every run holds several alignments (`S`)
    #[serde(rename = "S")]
    Spliced,
}

impl std::fmt::Display for UnsplicedFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unspliced => write!(f, "U"),
            Self::Spliced => write!(f, "S"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_symbols() {
        for verdict in [
            AdjacencyVerdict::Trans,
            AdjacencyVerdict::Contiguous,
            AdjacencyVerdict::Break,
        ] {
            assert_eq!(AdjacencyVerdict::from_symbol(verdict.symbol()), Some(verdict));
        }
        assert_eq!(AdjacencyVerdict::from_symbol('x'), None);
    }

    #[test]
    fn test_only_contiguous_keeps_run() {
        assert!(AdjacencyVerdict::Trans.splits_run());
        assert!(AdjacencyVerdict::Break.splits_run());
        assert!(!AdjacencyVerdict::Contiguous.splits_run());
    }

    #[test]
    fn test_strand_parse() {
        assert_eq!(Strand::parse("+"), Some(Strand::Forward));
        assert_eq!(Strand::parse("-"), Some(Strand::Reverse));
        assert_eq!(Strand::parse("."), None);
        assert_eq!(Strand::Reverse.to_string(), "-");
    }

    #[test]
    fn test_flags_serialize_as_letters() {
        assert_eq!(
            serde_json::to_string(&TransSplicedFlag::Split).unwrap(),
            "\"T\""
        );
        assert_eq!(
            serde_json::to_string(&UnsplicedFlag::Spliced).unwrap(),
            "\"S\""
        );
    }
}
