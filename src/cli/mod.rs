//! Command-line interface for maf-splice-types.
//!
//! ## Usage
//!
//! ```text
//! # Classify queries in a MAF file
//! maf-splice-types alignments.maf
//!
//! # Pipe from last-split, keeping only confident blocks
//! last-split alignments.maf | maf-splice-types -m 0.01 -
//!
//! # Allow introns up to 200 kb, JSON lines output
//! maf-splice-types -i 200000 --format json a.maf b.maf.gz
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::classify::engine::{ClassifyConfig, DEFAULT_MAX_INTRON, DEFAULT_MAX_MISMAP};

pub mod classify;

#[derive(Parser)]
#[command(name = "maf-splice-types")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Classify query alignments in MAF files as contiguous, spliced, or trans-spliced")]
#[command(
    long_about = "Reads MAF alignments (e.g. from last-split) and prints one line per query:\n\n  <query>\\t<T|C>:<U|S>:<parts>\n\nT/C: split into several exon runs or not. U/S: some run is a single alignment or not.\nparts: run lengths joined by the verdict that split them (t = trans, b = break)."
)]
pub struct Cli {
    /// MAF input files ('-' or none for stdin; '.gz' files are decompressed)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Skip alignment blocks with mismap probability above this
    #[arg(short = 'm', long, value_name = "M", default_value_t = DEFAULT_MAX_MISMAP)]
    pub max_mismap: f64,

    /// Largest reference gap still counted as an intron
    #[arg(short = 'i', long, value_name = "B", default_value_t = DEFAULT_MAX_INTRON)]
    pub max_intron: f64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl Cli {
    #[must_use]
    pub fn config(&self) -> ClassifyConfig {
        ClassifyConfig {
            max_mismap: self.max_mismap,
            max_intron: self.max_intron,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// `<query>\t<T|C>:<U|S>:<parts>`
    Text,
    /// One JSON object per line
    Json,
}
