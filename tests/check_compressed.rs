use fastq_check::{CheckOptions, FastqChecker, OpenError};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

fn sample(n: usize) -> String {
    let mut data = String::new();
    for i in 0..n {
        data.push_str(&format!("@r{i}\nACGTACGTACGTACGT\n+\n!!!!!!!!!!!!!!!!\n"));
    }
    data
}

fn check_file(path: &Path) -> fastq_check::Report {
    FastqChecker::open(path, None, CheckOptions::default())
        .expect("open")
        .run()
}

#[test]
fn plain_file_from_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.fastq");
    std::fs::write(&path, sample(3)).unwrap();

    let report = check_file(&path);
    assert_eq!(report.total_read_count, 3);
    assert_eq!(report.total_base_count, 48);
    assert!(!report.has_error());
}

#[cfg(feature = "gzip")]
#[test]
fn gz_file_matches_plain_result() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("sample.fastq");
    let gz = dir.path().join("sample.fastq.gz");
    std::fs::write(&plain, sample(50)).unwrap();
    {
        let f = File::create(&gz).unwrap();
        let mut enc = flate2::write::GzEncoder::new(f, flate2::Compression::fast());
        enc.write_all(sample(50).as_bytes()).unwrap();
        enc.finish().unwrap();
    }

    assert_eq!(check_file(&plain), check_file(&gz));
}

#[cfg(feature = "bz2")]
#[test]
fn bz2_file_matches_plain_result() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("sample.fastq");
    let bz = dir.path().join("sample.fastq.bz2");
    std::fs::write(&plain, sample(50)).unwrap();
    {
        let f = File::create(&bz).unwrap();
        let mut enc = bzip2::write::BzEncoder::new(f, bzip2::Compression::best());
        enc.write_all(sample(50).as_bytes()).unwrap();
        enc.finish().unwrap();
    }

    assert_eq!(check_file(&plain), check_file(&bz));
}

#[cfg(feature = "gzip")]
#[test]
fn truncated_gz_is_a_source_read_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.fastq.gz");
    let mut enc =
        flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::fast());
    enc.write_all(sample(2000).as_bytes()).unwrap();
    let bytes = enc.finish().unwrap();
    std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    let report = check_file(&path);
    assert!(
        report.mate1_error.contains("failed to read file"),
        "got: {}",
        report.mate1_error
    );
    assert!(report.mate1_error.contains("broken.fastq.gz"));
}

#[cfg(feature = "gzip")]
#[test]
fn truncated_gz_as_mate2_is_attributed_to_mate2() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("read1.fastq");
    let bad = dir.path().join("read2.fastq.gz");
    std::fs::write(&good, sample(2000)).unwrap();
    let mut enc =
        flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::fast());
    enc.write_all(sample(2000).as_bytes()).unwrap();
    let bytes = enc.finish().unwrap();
    std::fs::write(&bad, &bytes[..bytes.len() / 2]).unwrap();

    let report = FastqChecker::open(&good, Some(&bad), CheckOptions::default())
        .expect("open")
        .run();
    assert_eq!(report.mate1_error, "");
    assert!(report.mate2_error.unwrap().contains("read2.fastq.gz"));
}

#[cfg(feature = "gzip")]
#[test]
fn gz_detected_by_magic_without_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.fastq");
    {
        let f = File::create(&path).unwrap();
        let mut enc = flate2::write::GzEncoder::new(f, flate2::Compression::fast());
        enc.write_all(sample(3).as_bytes()).unwrap();
        enc.finish().unwrap();
    }

    let report = check_file(&path);
    assert_eq!(report.total_read_count, 3);
    assert!(!report.has_error());
}

#[test]
fn missing_file_is_not_found() {
    let err = FastqChecker::open(
        Path::new("no/such/file.fastq"),
        None,
        CheckOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, OpenError::NotFound(_)));
}
