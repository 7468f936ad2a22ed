use crate::classify::adjacency::adjacency;
use crate::core::record::{AlignmentRecord, QueryGroup};
use crate::core::summary::{ExonStructure, QuerySummary};

/// Segment one query's alignments into exon runs.
///
/// Consecutive alignments judged contiguous share a run; any other verdict
/// closes the run and records the verdict after its length.
#[must_use]
pub fn exon_structure(records: &[AlignmentRecord], max_intron: f64) -> ExonStructure {
    let mut parts = ExonStructure::new();
    let mut run_length = 0;

    let mut prev: Option<&AlignmentRecord> = None;
    for curr in records {
        if let Some(prev) = prev {
            let verdict = adjacency(prev, curr, max_intron);
            if verdict.splits_run() {
                parts.close_run(run_length, verdict);
                run_length = 0;
            }
        }
        run_length += 1;
        prev = Some(curr);
    }

    parts.finish(run_length);
    parts
}

/// Classify one query group
#[must_use]
pub fn classify(group: &QueryGroup, max_intron: f64) -> QuerySummary {
    QuerySummary::new(
        group.query_name.clone(),
        exon_structure(&group.records, max_intron),
    )
}
