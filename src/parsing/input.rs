//! Opening classification inputs: files, gzip files, and stdin.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use tracing::debug;

/// Where a stream of MAF text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// Map `-` to stdin, anything else to a path
    pub fn new(arg: impl Into<PathBuf>) -> Self {
        let path = arg.into();
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::Path(path)
        }
    }

    /// Sources for the given command-line arguments; no arguments means stdin
    #[must_use]
    pub fn from_args(args: &[PathBuf]) -> Vec<Self> {
        if args.is_empty() {
            vec![Self::Stdin]
        } else {
            args.iter().map(|a| Self::new(a.clone())).collect()
        }
    }

    /// Open the source for line-oriented reading
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be opened.
    pub fn open(&self) -> std::io::Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => {
                debug!("Reading from stdin");
                Ok(Box::new(std::io::stdin().lock()))
            }
            Self::Path(path) => {
                let file = File::open(path)?;
                if is_gzipped(path) {
                    debug!(path = %path.display(), "Reading gzip-compressed input");
                    Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
                } else {
                    debug!(path = %path.display(), "Reading input");
                    Ok(Box::new(BufReader::new(file)))
                }
            }
        }
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}
