use assert_cmd::Command;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::tempdir;

const GOOD: &str = "@Header1\nACCTGAACGNAAXT\n+\n!\"#$%&()*+,-./\n";
const BAD_HEADER: &str = "Header2\nACGT\n+\n!!!!\n";

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("readtrim"))
}

#[test]
fn count_mode_trims_and_reports() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?; // auto-deleted when td is dropped
    let input = td.path().join("in.fastq");
    let output = td.path().join("out.fastq");
    let log = td.path().join("run.log");
    fs::write(&input, format!("{GOOD}{BAD_HEADER}{GOOD}"))?;

    cmd()
        .args([
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--log",
            log.to_str().unwrap(),
            "--mode",
            "count",
            "--three-prime",
            "2",
            "--five-prime",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("total entries: 3"))
        .stdout(predicate::str::contains("kept: 2"))
        .stdout(predicate::str::contains("invalid entries: 1"));

    let out_text = fs::read_to_string(&output)?;
    assert_eq!(
        out_text,
        "@Header1\nTGAACGNAA\n+\n$%&()*+,-\n@Header1\nTGAACGNAA\n+\n$%&()*+,-\n"
    );

    let log_text = fs::read_to_string(&log)?;
    assert!(log_text.contains("The input file is a fastq file"));
    assert!(log_text.contains("Total number of entries: 3"));
    assert!(log_text.contains("Number of trimmed entries: 2"));
    assert!(log_text.contains("Number of invalid entries: 1"));

    Ok(())
}

#[test]
fn quality_mode_trims_five_prime() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let input = td.path().join("in.fastq");
    let output = td.path().join("out.fastq");
    let log = td.path().join("run.log");
    fs::write(&input, GOOD)?;

    cmd()
        .args([
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--log",
            log.to_str().unwrap(),
            "--mode",
            "quality",
            "--five-prime",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("kept: 1"));

    let out_text = fs::read_to_string(&output)?;
    assert_eq!(out_text, "@Header1\nAACGNAAXT\n+\n&()*+,-./\n");

    Ok(())
}

#[test]
fn gzipped_input_is_sniffed() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let input = td.path().join("in.fastq.gz");
    let output = td.path().join("out.fastq");
    let log = td.path().join("run.log");

    {
        let f = fs::File::create(&input)?;
        let mut gz = GzEncoder::new(f, Compression::default());
        gz.write_all(GOOD.as_bytes())?;
        gz.finish()?;
    }

    cmd()
        .args([
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--log",
            log.to_str().unwrap(),
            "--mode",
            "count",
            "--three-prime",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("kept: 1"));

    let log_text = fs::read_to_string(&log)?;
    assert!(log_text.contains("The input file is a gzip file"));

    Ok(())
}

#[test]
fn gz_output_is_created_and_decodable() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let input = td.path().join("in.fastq");
    let output = td.path().join("out.fastq.gz");
    let log = td.path().join("run.log");
    fs::write(&input, GOOD)?;

    cmd()
        .args([
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--log",
            log.to_str().unwrap(),
            "--mode",
            "count",
            "--three-prime",
            "2",
            "--gz",
        ])
        .assert()
        .success();

    assert!(output.exists());
    let f = fs::File::open(&output)?;
    let mut text = String::new();
    std::io::Read::read_to_string(&mut flate2::read::MultiGzDecoder::new(f), &mut text)?;
    assert_eq!(text, "@Header1\nACCTGAACGNAA\n+\n!\"#$%&()*+,-\n");

    Ok(())
}

#[test]
fn gz_and_zstd_are_mutually_exclusive() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let input = td.path().join("in.fastq");
    fs::write(&input, GOOD)?;

    cmd()
        .args([
            input.to_str().unwrap(),
            "--output",
            td.path().join("out.fastq").to_str().unwrap(),
            "--log",
            td.path().join("run.log").to_str().unwrap(),
            "--mode",
            "count",
            "--three-prime",
            "2",
            "--gz",
            "--zstd",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "--gz and --zstd are mutually exclusive",
        ));

    Ok(())
}

#[test]
fn invalid_mode_is_rejected_before_processing() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let input = td.path().join("in.fastq");
    let output = td.path().join("out.fastq");
    fs::write(&input, GOOD)?;

    cmd()
        .args([
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--log",
            td.path().join("run.log").to_str().unwrap(),
            "--mode",
            "bases",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));

    // Rejected at argument parsing: nothing was written.
    assert!(!output.exists());

    Ok(())
}

#[test]
fn invalid_phred_value_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let input = td.path().join("in.fastq");
    fs::write(&input, GOOD)?;

    cmd()
        .args([
            input.to_str().unwrap(),
            "--output",
            td.path().join("out.fastq").to_str().unwrap(),
            "--log",
            td.path().join("run.log").to_str().unwrap(),
            "--mode",
            "count",
            "--phred",
            "99",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported phred encoding"));

    Ok(())
}

#[test]
fn missing_input_file_is_a_fatal_error() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;

    cmd()
        .args([
            td.path().join("absent.fastq").to_str().unwrap(),
            "--output",
            td.path().join("out.fastq").to_str().unwrap(),
            "--log",
            td.path().join("run.log").to_str().unwrap(),
            "--mode",
            "count",
            "--three-prime",
            "2",
        ])
        .assert()
        .failure();

    Ok(())
}
