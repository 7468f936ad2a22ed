//! Reading MAF alignments into normalized records.
//!
//! - [`maf`]: Streaming MAF reader with mismap filtering
//! - [`input`]: Opening files, gzip files, and stdin
//!
//! ## Example
//!
//! ```rust
//! use maf_splice_types::parsing::maf::MafReader;
//!
//! let maf = "a mismap=1e-6\ns chr1 100 50 + 1000 ACGT\ns read1 0 50 - 50 ACGT\n";
//! let records: Vec<_> = MafReader::new(maf.as_bytes(), 1.0)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(records[0].ref_key, "chr1-");
//! assert_eq!((records[0].begin, records[0].end), (-150, -100));
//! ```
//!
//! ## Coordinates
//!
//! The reference row's start and size give the aligned reference span. When
//! the query row is on the `-` strand the span is negated, so the two strands
//! occupy opposite halves of one signed axis.

pub mod input;
pub mod maf;

pub use maf::{MafReader, ParseError};
