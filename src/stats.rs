use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Cumulative per-run outcome counters, one increment per record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub kept: u64,
    pub invalid_phred: u64,
    pub invalid_entry: u64,
    pub low_quality: u64,
    pub over_trim: u64,
}

impl Counters {
    pub fn total(&self) -> u64 {
        self.kept + self.invalid_phred + self.invalid_entry + self.low_quality + self.over_trim
    }
}

/// Rewrites the run log with the cumulative counters. Called after every
/// record, so the log always reflects the run so far.
pub fn write_log(counters: &Counters, zipped: bool, path: &Path) -> std::io::Result<()> {
    let mut log = File::create(path)?;
    writeln!(
        log,
        "The input file is a {} file",
        if zipped { "gzip" } else { "fastq" }
    )?;
    writeln!(log, "Total number of entries: {}", counters.total())?;
    writeln!(log, "Number of trimmed entries: {}", counters.kept)?;
    writeln!(
        log,
        "Number of entries with invalid phred quality: {}",
        counters.invalid_phred
    )?;
    writeln!(log, "Number of invalid entries: {}", counters.invalid_entry)?;
    writeln!(
        log,
        "Number of entries removed because of low quality after trimming (low mean quality, short length, N content): {}",
        counters.low_quality
    )?;
    writeln!(
        log,
        "Number of entries removed because of invalid trimming parameters: {}",
        counters.over_trim
    )?;
    Ok(())
}
