//! # maf-splice-types
//!
//! Classify how each query sequence aligns to a reference genome, from MAF
//! alignments such as those written by `last-split`.
//!
//! For every query the alignment blocks are walked in input order and each
//! consecutive pair is judged:
//!
//! - **contiguous** (`c`): same reference and strand, in order, separated by
//!   no more than the maximum intron. Both belong to the same exon run.
//! - **break** (`b`): as above but the gap exceeds the maximum intron.
//! - **trans** (`t`): different reference or strand, or overlapping, or out of
//!   order.
//!
//! The result is one line per query, e.g. `query123\tT:S:3b2t4`:
//!
//! - `T`/`C`: split into more than one exon run, or colinear
//! - `U`/`S`: some run is a single alignment, or none is
//! - parts: run lengths joined by the verdicts that split them
//!
//! ## Example
//!
//! ```rust
//! use maf_splice_types::{ClassifyConfig, SpliceTypes};
//!
//! let maf = "\
//! a mismap=1e-6
//! s chr1 0 100 + 1000000 ACGT
//! s read1 0 100 + 200 ACGT
//! a mismap=1e-6
//! s chr1 100200 100 + 1000000 ACGT
//! s read1 100 100 + 200 ACGT
//! ";
//!
//! for summary in SpliceTypes::new(maf.as_bytes(), &ClassifyConfig::default()) {
//!     println!("{}", summary.unwrap()); // "read1\tC:S:2"
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Alignment records, verdicts, and summaries
//! - [`parsing`]: MAF reader and input opening
//! - [`classify`]: Query grouping and the splice classifier
//! - [`cli`]: Command-line interface implementation

pub mod classify;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::classify::engine::{ClassifyConfig, SpliceTypes};
pub use crate::core::record::{AlignmentRecord, QueryGroup};
pub use crate::core::summary::{ExonStructure, Part, QuerySummary};
pub use crate::core::types::*;
pub use crate::parsing::maf::{MafReader, ParseError};
