//! Core data types for splice classification.
//!
//! - [`AlignmentRecord`]: One query-to-reference alignment on the signed reference axis
//! - [`QueryGroup`]: Consecutive records of one query
//! - [`AdjacencyVerdict`]: How two consecutive alignments relate (`t`, `c`, `b`)
//! - [`ExonStructure`]: Exon-run lengths interleaved with junction verdicts
//! - [`QuerySummary`]: The per-query output line
//!
//! ## Signed coordinates
//!
//! | Strand | Reference span | Stored as |
//! |--------|----------------|-----------|
//! | `+`    | `[100, 150)`   | `(100, 150)` |
//! | `-`    | `[100, 150)`   | `(-150, -100)` |
//!
//! [`AlignmentRecord`]: record::AlignmentRecord
//! [`QueryGroup`]: record::QueryGroup
//! [`AdjacencyVerdict`]: types::AdjacencyVerdict
//! [`ExonStructure`]: summary::ExonStructure
//! [`QuerySummary`]: summary::QuerySummary

pub mod record;
pub mod summary;
pub mod types;
