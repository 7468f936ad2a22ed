use serde::{Deserialize, Serialize};

use crate::core::types::Strand;

/// One query-to-reference alignment block, projected onto a signed reference axis.
///
/// Reverse-strand hits are stored with negated coordinates, `(-end, -begin)`,
/// so `begin < end` holds on both strands and a single numeric comparison
/// orders alignments regardless of orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentRecord {
    /// Query sequence name
    pub query_name: String,

    /// Reference sequence name followed by the strand symbol, e.g. `chr1+`
    pub ref_key: String,

    /// Start on the signed reference axis
    pub begin: i64,

    /// End on the signed reference axis (exclusive)
    pub end: i64,
}

impl AlignmentRecord {
    /// Build a record from MAF reference coordinates (0-based start, aligned size)
    /// and the strand of the query row.
    #[must_use]
    pub fn from_maf(
        query_name: impl Into<String>,
        ref_name: &str,
        ref_start: i64,
        ref_size: i64,
        strand: Strand,
    ) -> Self {
        let ref_end = ref_start + ref_size;
        let (begin, end) = match strand {
            Strand::Forward => (ref_start, ref_end),
            Strand::Reverse => (-ref_end, -ref_start),
        };

        Self {
            query_name: query_name.into(),
            ref_key: format!("{ref_name}{strand}"),
            begin,
            end,
        }
    }

    /// True when the record lies on the negative half of the signed axis
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.begin < 0
    }
}

/// Consecutive alignments sharing one query name, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryGroup {
    pub query_name: String,
    pub records: Vec<AlignmentRecord>,
}

impl QueryGroup {
    #[must_use]
    pub fn new(first: AlignmentRecord) -> Self {
        Self {
            query_name: first.query_name.clone(),
            records: vec![first],
        }
    }

    /// Append a record if it belongs to this query; hands it back otherwise
    pub fn try_push(&mut self, record: AlignmentRecord) -> Result<(), AlignmentRecord> {
        if record.query_name == self.query_name {
            self.records.push(record);
            Ok(())
        } else {
            Err(record)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
