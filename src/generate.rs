use crate::errors::FixtureError;
use crate::fsutil;
use crate::template;
use serde::{Deserialize, Serialize};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Target sizes (decimal megabytes) covered by a default run.
pub const DEFAULT_SIZES_MB: [u64; 3] = [1, 5, 10];

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the fixture files are written into. Must already exist.
    pub output_dir: PathBuf,
    /// Target sizes in decimal megabytes, processed in order.
    pub sizes_mb: Vec<u64>,
    /// Log a progress line every this many records while writing.
    pub progress_every: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: fsutil::normalize_output_dir(None),
            sizes_mb: DEFAULT_SIZES_MB.to_vec(),
            progress_every: Some(10_000),
        }
    }
}

/// Aggregate result of one generation pass: files written, files skipped,
/// records written.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GenerateReport {
    pub written: u64,
    pub skipped: u64,
    pub records: u64,
}

/// Result for a single target size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Written { records: u64 },
    Skipped,
}

#[must_use]
pub fn fixture_file_name(size_mb: u64) -> String {
    format!("{size_mb}MB.json")
}

/// Number of record copies needed to approximate `size_mb` decimal
/// megabytes. Floor division; bracket and separator overhead is not
/// compensated.
#[must_use]
pub fn record_count(size_mb: u64) -> u64 {
    (size_mb * 1_000_000) / template::RECORD.len() as u64
}

/// Write a fixture array holding `count` copies of the record: `[`,
/// newline, the records joined by `,` + newline, newline, `]`. Returns the
/// number of records written.
///
/// # Errors
/// Returns any I/O error from the underlying writer.
pub fn write_fixture<W: Write>(
    writer: &mut W,
    count: u64,
    progress_every: Option<u64>,
) -> io::Result<u64> {
    writer.write_all(b"[\n")?;
    let mut written = 0u64;
    for _ in 0..count {
        if written > 0 {
            writer.write_all(b",\n")?;
        }
        writer.write_all(template::RECORD.as_bytes())?;
        written += 1;
        if let Some(every) = progress_every && written % every == 0 {
            log::info!("wrote {written}/{count} records");
        }
    }
    writer.write_all(b"\n]")?;
    Ok(written)
}

/// Generate one fixture file at `path`, sized for `size_mb`. A file that
/// already exists is left untouched and reported as skipped.
///
/// # Errors
/// Propagates I/O failures from file creation or the write loop; on
/// failure the file may be left behind partially written.
pub fn generate_file(
    path: &Path,
    size_mb: u64,
    opts: &GenerateOptions,
) -> Result<FileOutcome, FixtureError> {
    if path.exists() {
        log::info!("fixture exists, skipping: {}", path.display());
        return Ok(FileOutcome::Skipped);
    }
    let count = record_count(size_mb);
    log::info!("generating fixture: size_mb={size_mb}, records={count}, path={}", path.display());
    let file = fsutil::create_new(path)?;
    let mut writer = BufWriter::new(file);
    let records = write_fixture(&mut writer, count, opts.progress_every)?;
    writer.flush()?;
    Ok(FileOutcome::Written { records })
}

/// Run a generation pass over `opts.sizes_mb`, strictly in order, and
/// aggregate the per-file outcomes.
///
/// # Errors
/// Stops at the first I/O failure; files generated earlier in the pass are
/// left in place.
pub fn generate_all(opts: &GenerateOptions) -> Result<GenerateReport, FixtureError> {
    let mut report = GenerateReport::default();
    for &size_mb in &opts.sizes_mb {
        let path = opts.output_dir.join(fixture_file_name(size_mb));
        match generate_file(&path, size_mb, opts)? {
            FileOutcome::Written { records } => {
                report.written += 1;
                report.records += records;
            }
            FileOutcome::Skipped => report.skipped += 1,
        }
    }
    Ok(report)
}
