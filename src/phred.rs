use thiserror::Error;

/// Highest Phred score in either table; scores run 0..=42.
pub const MAX_SCORE: u8 = 42;

/// Quality encoding scheme. `Explicit` carries a fixed ASCII offset
/// (33 or 64); `Auto` detects per quality string, trying the offset-33
/// table against the whole string before falling back to offset-64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Explicit(u8),
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("quality string does not match the configured phred encoding")]
    InvalidEncoding,
}

/// Byte-indexed score lookup for one offset: `offset + i` maps to `i`
/// for `i` in 0..=42, every other byte is unmapped.
pub struct ScoreTable {
    scores: [i8; 256],
}

impl ScoreTable {
    pub fn new(offset: u8) -> Self {
        let mut scores = [-1i8; 256];
        for i in 0..=MAX_SCORE {
            scores[(offset + i) as usize] = i as i8;
        }
        ScoreTable { scores }
    }

    pub fn score(&self, byte: u8) -> Option<u8> {
        match self.scores[byte as usize] {
            -1 => None,
            s => Some(s as u8),
        }
    }

    /// Decodes the whole string, or `None` on the first unmapped byte.
    pub fn decode(&self, qual: &[u8]) -> Option<Vec<u8>> {
        qual.iter().map(|&b| self.score(b)).collect()
    }
}

/// Converts a quality string to per-base scores, position-aligned with the
/// input. Under `Auto`, a string that decodes fully against offset 33 is
/// never reported as offset 64. An empty quality string is valid under
/// every mode and decodes to an empty score sequence.
pub fn decode(qual: &[u8], encoding: Encoding) -> Result<Vec<u8>, DecodeError> {
    match encoding {
        Encoding::Explicit(offset) => ScoreTable::new(offset)
            .decode(qual)
            .ok_or(DecodeError::InvalidEncoding),
        Encoding::Auto => ScoreTable::new(33)
            .decode(qual)
            .or_else(|| ScoreTable::new(64).decode(qual))
            .ok_or(DecodeError::InvalidEncoding),
    }
}
