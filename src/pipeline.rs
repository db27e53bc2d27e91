use std::io::{BufRead, Write};
use std::path::Path;

use crate::filter::{self, FilterOpts};
use crate::phred::{self, Encoding};
use crate::record::{self, FastqRecord};
use crate::stats::{self, Counters};
use crate::trim::{self, TrimError, TrimMode, TrimOpts};

/// Everything the per-record pipeline needs; resolved once per run from the
/// command line.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    pub encoding: Encoding,
    pub mode: TrimMode,
    pub trim: TrimOpts,
    pub filter: FilterOpts,
}

/// Where a record ended up; maps one-to-one onto the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Kept,
    InvalidEntry,
    InvalidPhred,
    LowQuality,
    OverTrim,
}

/// Runs one record through validate, decode, trim, re-decode and filter,
/// mutating it in place. Failures are per-record outcomes; the caller
/// counts them and moves on.
pub fn process_record(rec: &mut FastqRecord, cfg: &PipelineConfig) -> Outcome {
    if !rec.validate() {
        return Outcome::InvalidEntry;
    }

    let scores = match phred::decode(rec.qual.as_bytes(), cfg.encoding) {
        Ok(scores) => scores,
        Err(_) => return Outcome::InvalidPhred,
    };

    match trim::trim(rec, &scores, cfg.mode, &cfg.trim) {
        Ok(()) => {}
        Err(TrimError::OverTrim) => return Outcome::OverTrim,
        Err(TrimError::DiscardShort) => return Outcome::LowQuality,
    }

    // Scores are rebuilt from the trimmed quality line so the filter sees
    // values aligned with what is left of the read.
    let trimmed_scores = match phred::decode(rec.qual.as_bytes(), cfg.encoding) {
        Ok(scores) => scores,
        Err(_) => return Outcome::InvalidPhred,
    };

    if !filter::accept(rec, &trimmed_scores, &cfg.filter) {
        return Outcome::LowQuality;
    }

    Outcome::Kept
}

/// Pulls records one at a time until an empty first line, writes keepers in
/// input order and persists the counters to the log after every record.
/// A bad record never aborts the run.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    cfg: &PipelineConfig,
    zipped: bool,
    log_path: &Path,
) -> std::io::Result<Counters> {
    let mut counters = Counters::default();

    while let Some(mut rec) = record::read_record(input)? {
        match process_record(&mut rec, cfg) {
            Outcome::Kept => {
                counters.kept += 1;
                rec.write(output)?;
            }
            Outcome::InvalidEntry => counters.invalid_entry += 1,
            Outcome::InvalidPhred => counters.invalid_phred += 1,
            Outcome::LowQuality => counters.low_quality += 1,
            Outcome::OverTrim => counters.over_trim += 1,
        }
        stats::write_log(&counters, zipped, log_path)?;
    }

    output.flush()?;
    Ok(counters)
}
