use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

/// Opens the input transport and reports whether it was gzip-compressed.
/// `-` reads stdin. Compression is sniffed from the magic bytes, not the
/// file name, so records reach the pipeline already decompressed.
pub fn open_input(path: &str) -> Result<(Box<dyn BufRead>, bool), Box<dyn Error>> {
    if path == "-" {
        let mut br = BufReader::new(io::stdin());
        let buf = br.fill_buf()?;
        let is_gz = buf.len() >= 2 && buf[0] == 0x1f && buf[1] == 0x8b;
        let _ = buf;
        if is_gz {
            Ok((Box::new(BufReader::new(MultiGzDecoder::new(br))), true))
        } else {
            Ok((Box::new(br), false))
        }
    } else {
        let f = File::open(path)?;
        let mut br = BufReader::new(f);
        let buf = br.fill_buf()?;
        let is_gz = buf.len() >= 2 && buf[0] == 0x1f && buf[1] == 0x8b;
        let _ = buf;
        if is_gz {
            Ok((Box::new(BufReader::new(MultiGzDecoder::new(br))), true))
        } else {
            Ok((Box::new(br), false))
        }
    }
}

/// Opens the output transport: plain, gzip (`gz`) or zstd (`zstd`).
/// Encoders finish their streams on drop.
pub fn open_output(path: &str, gz: bool, zstd_out: bool) -> Result<Box<dyn Write>, Box<dyn Error>> {
    let f = File::create(path)?;
    if gz {
        Ok(Box::new(GzEncoder::new(
            BufWriter::new(f),
            Compression::default(),
        )))
    } else if zstd_out {
        Ok(Box::new(zstd::Encoder::new(BufWriter::new(f), 0)?.auto_finish()))
    } else {
        Ok(Box::new(BufWriter::new(f)))
    }
}
