use std::io::{BufRead, Write};

/// One FASTQ read: header, sequence, separator and quality lines, newline
/// characters stripped. Once validated, `seq` and `qual` stay the same
/// length; trimming removes the same positions from both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub head: String,
    pub seq: String,
    pub sep: String,
    pub qual: String,
}

impl FastqRecord {
    pub fn new(
        head: impl Into<String>,
        seq: impl Into<String>,
        sep: impl Into<String>,
        qual: impl Into<String>,
    ) -> Self {
        FastqRecord {
            head: head.into(),
            seq: seq.into(),
            sep: sep.into(),
            qual: qual.into(),
        }
    }

    /// Structural well-formedness check. Length mismatch between sequence
    /// and quality, a header not starting with '@', a sequence with bases
    /// outside AGCTXN (uppercase only, at least one base), or a separator
    /// not starting with '+' all fail.
    pub fn validate(&self) -> bool {
        if self.seq.len() != self.qual.len() {
            return false;
        }
        if !self.head.starts_with('@') {
            return false;
        }
        if self.is_empty()
            || !self
                .seq
                .bytes()
                .all(|b| matches!(b, b'A' | b'G' | b'C' | b'T' | b'X' | b'N'))
        {
            return false;
        }
        if !self.sep.starts_with('+') {
            return false;
        }
        true
    }

    /// Drops `n` bases from the leading (5') end of sequence and quality.
    pub fn cut_head(&mut self, n: usize) {
        self.seq.drain(..n);
        self.qual.drain(..n);
    }

    /// Drops `n` bases from the trailing (3') end of sequence and quality.
    pub fn cut_tail(&mut self, n: usize) {
        let keep = self.seq.len() - n;
        self.seq.truncate(keep);
        self.qual.truncate(keep);
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Writes the four lines in input order, one per line.
    pub fn write<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.head)?;
        writeln!(out, "{}", self.seq)?;
        writeln!(out, "{}", self.sep)?;
        writeln!(out, "{}", self.qual)?;
        Ok(())
    }
}

fn read_stripped_line<R: BufRead>(reader: &mut R) -> std::io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Reads the next four lines as one record. An empty first line signals end
/// of input and yields `None`; short or malformed records are still
/// returned and left for `validate` to reject.
pub fn read_record<R: BufRead>(reader: &mut R) -> std::io::Result<Option<FastqRecord>> {
    let head = read_stripped_line(reader)?;
    if head.is_empty() {
        return Ok(None);
    }
    let seq = read_stripped_line(reader)?;
    let sep = read_stripped_line(reader)?;
    let qual = read_stripped_line(reader)?;
    Ok(Some(FastqRecord::new(head, seq, sep, qual)))
}
