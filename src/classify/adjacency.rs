use crate::core::record::AlignmentRecord;
use crate::core::types::AdjacencyVerdict;

/// Decide how `curr` relates to the alignment `prev` that precedes it.
///
/// The checks run in order, and overlap beats distance: an overlapping or
/// out-of-order pair is `Trans` however small the gap.
///
/// 1. different reference or strand: `Trans`
/// 2. begins on opposite sides of the signed-axis origin: `Trans`
/// 3. `prev.end > curr.begin` (overlap or misordered): `Trans`
/// 4. `prev.end + max_intron < curr.begin`: `Break`
/// 5. otherwise `Contiguous`
#[must_use]
pub fn adjacency(
    prev: &AlignmentRecord,
    curr: &AlignmentRecord,
    max_intron: f64,
) -> AdjacencyVerdict {
    debug_assert!(prev.begin < prev.end);
    debug_assert!(curr.begin < curr.end);

    if prev.ref_key != curr.ref_key {
        return AdjacencyVerdict::Trans;
    }
    if prev.is_negative() != curr.is_negative() {
        return AdjacencyVerdict::Trans;
    }
    // Misordered pairs land here as well as true overlaps
    if prev.end > curr.begin {
        return AdjacencyVerdict::Trans;
    }

    #[allow(clippy::cast_precision_loss)] // genome coordinates fit in f64's mantissa
    let (prev_end, curr_begin) = (prev.end as f64, curr.begin as f64);
    if prev_end + max_intron < curr_begin {
        AdjacencyVerdict::Break
    } else {
        AdjacencyVerdict::Contiguous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Strand;

    fn rec(ref_name: &str, strand: Strand, start: i64, size: i64) -> AlignmentRecord {
        AlignmentRecord::from_maf("q", ref_name, start, size, strand)
    }

    fn plus(begin: i64, end: i64) -> AlignmentRecord {
        AlignmentRecord {
            query_name: "q".to_string(),
            ref_key: "chr1+".to_string(),
            begin,
            end,
        }
    }

    #[test]
    fn test_small_gap_is_contiguous() {
        let verdict = adjacency(&plus(0, 100), &plus(100_200, 100_300), 1e6);
        assert_eq!(verdict, AdjacencyVerdict::Contiguous);
    }

    #[test]
    fn test_abutting_is_contiguous() {
        assert_eq!(
            adjacency(&plus(0, 100), &plus(100, 200), 0.0),
            AdjacencyVerdict::Contiguous
        );
    }

    #[test]
    fn test_large_gap_is_break() {
        let verdict = adjacency(&plus(0, 100), &plus(2_000_100, 2_000_200), 1e6);
        assert_eq!(verdict, AdjacencyVerdict::Break);
    }

    #[test]
    fn test_gap_equal_to_bound_is_contiguous() {
        assert_eq!(
            adjacency(&plus(0, 100), &plus(1_000_100, 1_000_200), 1e6),
            AdjacencyVerdict::Contiguous
        );
        assert_eq!(
            adjacency(&plus(0, 100), &plus(1_000_101, 1_000_200), 1e6),
            AdjacencyVerdict::Break
        );
    }

    #[test]
    fn test_different_reference_is_trans() {
        let a = rec("chr1", Strand::Forward, 0, 100);
        let b = rec("chr2", Strand::Forward, 200, 100);
        assert_eq!(adjacency(&a, &b, 1e6), AdjacencyVerdict::Trans);
    }

    #[test]
    fn test_different_strand_is_trans() {
        let a = rec("chr1", Strand::Forward, 0, 100);
        let b = rec("chr1", Strand::Reverse, 200, 100);
        assert_eq!(adjacency(&a, &b, 1e6), AdjacencyVerdict::Trans);
    }

    #[test]
    fn test_crossing_origin_is_trans() {
        // Same key, but begins on opposite sides of zero
        assert_eq!(
            adjacency(&plus(-50, -10), &plus(10, 50), 1e6),
            AdjacencyVerdict::Trans
        );
    }

    #[test]
    fn test_overlap_beats_distance() {
        assert_eq!(
            adjacency(&plus(0, 100), &plus(50, 150), 1e6),
            AdjacencyVerdict::Trans
        );
        // Misordered with a huge distance is still trans, not break
        assert_eq!(
            adjacency(&plus(5_000_000, 5_000_100), &plus(0, 100), 1e6),
            AdjacencyVerdict::Trans
        );
    }

    #[test]
    fn test_reverse_strand_in_query_order() {
        // A reverse-strand query walks down the reference; negated, it walks up
        let first = rec("chr1", Strand::Reverse, 5_000, 100);
        let second = rec("chr1", Strand::Reverse, 1_000, 100);
        assert_eq!(adjacency(&first, &second, 1e6), AdjacencyVerdict::Contiguous);
        assert_eq!(adjacency(&second, &first, 1e6), AdjacencyVerdict::Trans);
    }

    #[test]
    fn test_distance_property_over_gaps() {
        let max_intron = 500.0;
        for gap in [0_i64, 1, 250, 499, 500, 501, 10_000] {
            let verdict = adjacency(&plus(0, 100), &plus(100 + gap, 200 + gap), max_intron);
            let expected = if gap as f64 <= max_intron {
                AdjacencyVerdict::Contiguous
            } else {
                AdjacencyVerdict::Break
            };
            assert_eq!(verdict, expected, "gap {gap}");
        }
    }
}
