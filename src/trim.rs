use clap::ValueEnum;
use thiserror::Error;

use crate::record::FastqRecord;

/// How end-trimming interprets the 3'/5' thresholds: fixed base counts, or
/// minimum mean quality over a sliding window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TrimMode {
    Count,
    Quality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrimError {
    /// Trim parameters exceed the read length.
    #[error("trim parameters exceed read length")]
    OverTrim,
    /// Quality trimming exhausted the read below the window size.
    #[error("read trimmed below the window size")]
    DiscardShort,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TrimOpts {
    pub three_prime: Option<u32>,
    pub five_prime: Option<u32>,
    /// Moving-window size for quality trimming; 1 when not given.
    pub window: Option<usize>,
}

/// Trims both ends of `rec` in place. `scores` must be the decoded quality
/// of `rec` before trimming, one score per base.
pub fn trim(
    rec: &mut FastqRecord,
    scores: &[u8],
    mode: TrimMode,
    opts: &TrimOpts,
) -> Result<(), TrimError> {
    match mode {
        TrimMode::Count => trim_by_count(rec, opts),
        TrimMode::Quality => trim_by_quality(rec, scores, opts),
    }
}

fn trim_by_count(rec: &mut FastqRecord, opts: &TrimOpts) -> Result<(), TrimError> {
    let original_len = rec.len();

    if let Some(t3) = opts.three_prime {
        let t3 = t3 as usize;
        if t3 >= rec.len() {
            return Err(TrimError::OverTrim);
        }
        rec.cut_tail(t3);
    }

    if let Some(t5) = opts.five_prime {
        let t5 = t5 as usize;
        if t5 >= rec.len() {
            return Err(TrimError::OverTrim);
        }
        rec.cut_head(t5);
    }

    // Both ends together must leave at least one base of the original read.
    if let (Some(t3), Some(t5)) = (opts.three_prime, opts.five_prime) {
        if t3 as usize + t5 as usize >= original_len {
            return Err(TrimError::OverTrim);
        }
    }

    Ok(())
}

fn window_mean(window: &[u8]) -> f64 {
    window.iter().map(|&s| s as u32).sum::<u32>() as f64 / window.len() as f64
}

fn trim_by_quality(
    rec: &mut FastqRecord,
    scores: &[u8],
    opts: &TrimOpts,
) -> Result<(), TrimError> {
    let window = opts.window.unwrap_or(1);
    let len = rec.len();
    if window == 0 || window > len {
        return Err(TrimError::OverTrim);
    }

    // start..end is the surviving span; the window never reads past it.
    let mut start = 0usize;
    let mut end = len;

    if let Some(t5) = opts.five_prime {
        let threshold = t5 as f64;
        while end - start >= window && window_mean(&scores[start..start + window]) < threshold {
            start += 1;
        }
    }

    if let Some(t3) = opts.three_prime {
        let threshold = t3 as f64;
        while end - start >= window && window_mean(&scores[end - window..end]) < threshold {
            end -= 1;
        }
    }

    rec.cut_tail(len - end);
    rec.cut_head(start);

    if rec.len() < window {
        return Err(TrimError::DiscardShort);
    }

    Ok(())
}
