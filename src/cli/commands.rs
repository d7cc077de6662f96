// CLI command implementations
use crate::cli::config::BuildArgs;
use crate::cli::output::{OutputFormatter, TagReport};

use anyhow::Context;
use std::io::{self, Write};
use std::path::PathBuf;

/// Scan the root directory and write its feed
pub fn command_build(args: BuildArgs, formatter: &OutputFormatter) -> anyhow::Result<()> {
    let settings = args.into_settings();
    if !settings.root.is_dir() {
        anyhow::bail!("{} is not a directory", settings.root.display());
    }

    let output = podfeed::feed::build_feed(&settings)
        .with_context(|| format!("failed to build feed for {}", settings.root.display()))?;

    formatter.print_success(&format!("Wrote {}", output.display()));
    Ok(())
}

/// Print the title and artist of each file
///
/// A file without a usable tag is reported and the remaining files are still read.
pub fn command_tags(files: Vec<PathBuf>, formatter: &OutputFormatter) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_tag_reports(&files, formatter, &mut writer)
}

/// Write one report per file; a failed extraction is carried in the report's `error` field
fn write_tag_reports(
    files: &[PathBuf],
    formatter: &OutputFormatter,
    writer: &mut impl Write,
) -> anyhow::Result<()> {
    for path in files {
        let result = podfeed::extract(path);
        if let Err(e) = &result {
            tracing::debug!(file = %path.display(), error = %e, "no usable tag");
        }
        formatter.output_report(&TagReport::new(path, result), writer)?;
    }
    Ok(())
}
