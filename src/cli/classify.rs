use std::io::{BufRead, BufWriter, Write};

use anyhow::Context;
use tracing::{debug, info};

use crate::classify::engine::{ClassifyConfig, SpliceTypes};
use crate::cli::{Cli, OutputFormat};
use crate::parsing::input::InputSource;
use crate::utils::validation::validate_config;

/// Classify every input in order and print one line per query to stdout
///
/// # Errors
///
/// Returns an error if an option is invalid, an input cannot be opened or
/// parsed, or output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();
    validate_config(&config)?;

    let sources = InputSource::from_args(&cli.inputs);
    let mut out = BufWriter::new(std::io::stdout().lock());

    for source in &sources {
        let reader = source
            .open()
            .with_context(|| format!("Failed to open {source}"))?;
        classify_reader(reader, &config, cli.format, &mut out)
            .with_context(|| format!("Failed to classify {source}"))?;
    }

    out.flush()?;
    Ok(())
}

/// Classify one MAF stream, writing summaries to `out`.
/// Query groups never span two calls.
///
/// # Errors
///
/// Returns an error on malformed MAF input or a failed write.
pub fn classify_reader<R: BufRead, W: Write>(
    reader: R,
    config: &ClassifyConfig,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut types = SpliceTypes::new(reader, config);

    for result in types.by_ref() {
        let summary = result?;
        match format {
            OutputFormat::Text => writeln!(out, "{summary}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &summary)?;
                writeln!(out)?;
            }
        }
    }

    debug!(
        blocks = types.reader().blocks_read(),
        dropped = types.reader().blocks_dropped(),
        "Finished reading alignment blocks"
    );
    info!(queries = types.queries(), "Classified queries");
    Ok(())
}
