//! Splice classification of query alignments.
//!
//! - [`grouper`]: Splits the record stream into per-query groups
//! - [`adjacency`]: Verdict for a pair of consecutive alignments
//! - [`splice`]: Exon-run segmentation and per-query summary
//! - [`engine`]: Streaming driver tying parser, grouper and classifier together
//!
//! ## Verdicts
//!
//! | Verdict | Symbol | When |
//! |---------|--------|------|
//! | trans | `t` | different reference/strand, opposite signs, overlap or misorder |
//! | break | `b` | gap larger than the maximum intron |
//! | contiguous | `c` | gap within the maximum intron (same exon run) |
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
//! s chr2 500 100 + 1000000 ACGT
//! s read1 100 100 + 200 ACGT
//! ";
//!
//! let summaries: Vec<_> = SpliceTypes::new(maf.as_bytes(), &ClassifyConfig::default())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(summaries[0].to_string(), "read1\tT:U:1t1");
//! ```

pub mod adjacency;
pub mod engine;
pub mod grouper;
pub mod splice;

pub use adjacency::adjacency;
pub use engine::{ClassifyConfig, SpliceTypes};
pub use splice::classify;
