use clap::Parser;
use std::error::Error;
use std::path::Path;

mod filter;
mod io_utils;
mod phred;
mod pipeline;
mod record;
mod stats;
mod trim;

use filter::FilterOpts;
use phred::Encoding;
use pipeline::PipelineConfig;
use trim::{TrimMode, TrimOpts};

fn parse_encoding(s: &str) -> Result<Encoding, String> {
    match s {
        "33" => Ok(Encoding::Explicit(33)),
        "64" => Ok(Encoding::Explicit(64)),
        "auto" => Ok(Encoding::Auto),
        other => Err(format!(
            "unsupported phred encoding '{other}' (expected 33, 64 or auto)"
        )),
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "FASTQ read trimmer: end-trimming by base count or quality, with post-trim filtering"
)]
struct Args {
    /// Input FASTQ (use '-' for stdin). Supports .gz compressed files.
    input: String,

    /// Output FASTQ path
    #[arg(short, long)]
    output: String,

    /// Run log, rewritten after every record
    #[arg(long)]
    log: String,

    /// Quality encoding: 33, 64 or auto
    #[arg(long, default_value = "auto", value_parser = parse_encoding)]
    phred: Encoding,

    /// Trim by fixed base count or by windowed quality threshold
    #[arg(short = 'm', long, value_enum)]
    mode: TrimMode,

    /// 3' threshold: bases to cut (count mode) or minimum window mean (quality mode)
    #[arg(long)]
    three_prime: Option<u32>,

    /// 5' threshold, same interpretation as --three-prime
    #[arg(long)]
    five_prime: Option<u32>,

    /// Moving-window size for quality trimming (default 1)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    window: Option<u64>,

    /// Discard trimmed reads shorter than this
    #[arg(long)]
    min_length: Option<usize>,

    /// Discard trimmed reads with mean quality below this
    #[arg(long)]
    min_quality: Option<f64>,

    /// Discard trimmed reads with more than this many N bases
    #[arg(long)]
    max_n: Option<usize>,

    /// gzip-compress the output
    #[arg(long)]
    gz: bool,

    /// zstd-compress the output
    #[arg(long)]
    zstd: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    if args.gz && args.zstd {
        return Err("--gz and --zstd are mutually exclusive".into());
    }

    let (mut input, zipped) = io_utils::open_input(&args.input)?;
    let mut output = io_utils::open_output(&args.output, args.gz, args.zstd)?;

    let cfg = PipelineConfig {
        encoding: args.phred,
        mode: args.mode,
        trim: TrimOpts {
            three_prime: args.three_prime,
            five_prime: args.five_prime,
            window: args.window.map(|w| w as usize),
        },
        filter: FilterOpts {
            min_length: args.min_length,
            min_quality: args.min_quality,
            max_ambiguous: args.max_n,
        },
    };

    let counters = pipeline::run(&mut input, &mut output, &cfg, zipped, Path::new(&args.log))?;
    // Compressed output streams finish when the writer drops.
    drop(output);

    println!("total entries: {}", counters.total());
    println!("kept: {}", counters.kept);
    println!("invalid entries: {}", counters.invalid_entry);
    println!("invalid phred: {}", counters.invalid_phred);
    println!("low quality after trim: {}", counters.low_quality);
    println!("invalid trim parameters: {}", counters.over_trim);

    Ok(())
}
