use crate::record::FastqRecord;

/// Post-trim acceptance criteria; a record passes every criterion that is
/// set, or is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOpts {
    pub min_length: Option<usize>,
    pub min_quality: Option<f64>,
    pub max_ambiguous: Option<usize>,
}

/// Pure accept/reject predicate over a trimmed record. `scores` is the
/// decoded quality of the trimmed read; callers must not pass an empty
/// score sequence when `min_quality` is set (the trimmer discards reads
/// before they can reach zero length).
pub fn accept(rec: &FastqRecord, scores: &[u8], opts: &FilterOpts) -> bool {
    if let Some(min_length) = opts.min_length {
        if rec.len() < min_length {
            return false;
        }
    }

    if let Some(min_quality) = opts.min_quality {
        let mean = scores.iter().map(|&s| s as u32).sum::<u32>() as f64 / scores.len() as f64;
        if mean < min_quality {
            return false;
        }
    }

    if let Some(max_ambiguous) = opts.max_ambiguous {
        let ambiguous = rec.seq.bytes().filter(|&b| b == b'N').count();
        if ambiguous > max_ambiguous {
            return false;
        }
    }

    true
}
