//! Integration tests for the pipeline module.

use std::fs;
use std::path::Path;

use tabmap_cli::pipeline::{
    OutputConfig, SourceInput, failure_response, load_mapping_file, resolve_file_type,
    run_contacts, run_transactions,
};
use tabmap_model::{
    ColumnMapping, FileType, NormalizationOptions, ProcessError, TransactionColumns,
};
use tabmap_report::WriterOptions;

fn write_source(dir: &Path, name: &str, contents: &str) -> SourceInput {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    SourceInput::new(path)
}

#[test]
fn test_transactions_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(
        dir.path(),
        "sales.csv",
        "Name,Mobile,Amount\nAlice,9876543210,150\nBob,,200\n",
    );
    let output = OutputConfig::new(dir.path().join("processed"));
    let columns = TransactionColumns {
        mobile: Some(2),
        bill_amount: Some(3),
        ..TransactionColumns::default()
    };

    let report = run_transactions(&source, &columns, &output).unwrap();
    assert_eq!(report.stats.records, 2);
    assert!(report.artifact.ends_with("processed/processed_file.csv"));

    let written = fs::read_to_string(&report.artifact).unwrap();
    assert_eq!(
        written,
        "mobile,txn_type,bill_number,bill_amount,order_time,points_earned,points_redeemed\n\
         9876543210,purchase,,150,,,\n\
         ,purchase,,200,,,\n"
    );

    let response = report.response();
    assert!(response.success);
    assert_eq!(response.total_records, Some(2));
}

#[test]
fn test_contacts_end_to_end_with_inference() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(
        dir.path(),
        "contacts.csv",
        "Mobile,Customer Name,Email\n\
         +91 98765 43210,alice,ALICE@X.COM\n\
         9876543210,Alice Dup,\n\
         ,No Phone,\n",
    );
    let output = OutputConfig {
        dir: dir.path().join("out"),
        writer: WriterOptions::raw(),
    };

    let report = run_contacts(
        &source,
        ColumnMapping::default(),
        &NormalizationOptions::default(),
        &output,
    )
    .unwrap();

    assert!(report.mapping_inferred);
    let mapping = report.mapping.unwrap();
    assert_eq!(mapping.phone, Some(1));
    assert_eq!(mapping.name, Some(2));
    assert_eq!(mapping.email, Some(3));
    assert_eq!(report.stats.records, 1);
    assert_eq!(report.stats.duplicates, 1);
    assert_eq!(report.stats.missing_phone, 1);
    assert_eq!(report.response().total_contacts, Some(1));

    let written = fs::read_to_string(&report.artifact).unwrap();
    assert_eq!(
        written,
        "phone_number,name,email,birthday,anniversary,gender,points,tags\n\
         9876543210,Alice,alice@x.com,,,,0,"
    );
}

#[test]
fn test_abort_paths_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("processed");
    let output = OutputConfig::new(&out);

    let header_only = write_source(dir.path(), "empty.csv", "Mobile,Amount\n");
    let err = run_transactions(&header_only, &TransactionColumns::default(), &output)
        .unwrap_err();
    assert_eq!(failure_response(&err).code.as_deref(), Some("EMPTY_SOURCE"));

    let no_phones = write_source(dir.path(), "nophone.csv", "Phone,Name\n,Ghost\n");
    let err = run_contacts(
        &no_phones,
        ColumnMapping::default(),
        &NormalizationOptions::default(),
        &output,
    )
    .unwrap_err();
    assert_eq!(
        failure_response(&err).code.as_deref(),
        Some("INSUFFICIENT_DATA")
    );

    let missing = SourceInput::new(dir.path().join("missing.csv"));
    let err = run_transactions(&missing, &TransactionColumns::default(), &output).unwrap_err();
    assert_eq!(
        failure_response(&err).code.as_deref(),
        Some("SOURCE_READ_ERROR")
    );

    let pdf = write_source(dir.path(), "report.pdf", "%PDF");
    let err = run_transactions(&pdf, &TransactionColumns::default(), &output).unwrap_err();
    let response = failure_response(&err);
    assert!(!response.success);
    assert_eq!(response.code.as_deref(), Some("UNSUPPORTED_FILE_TYPE"));

    assert!(!out.exists());
}

#[test]
fn test_resolve_file_type() {
    assert_eq!(
        resolve_file_type(Path::new("data.bin"), Some("csv")).unwrap(),
        FileType::Csv
    );
    assert_eq!(
        resolve_file_type(Path::new("book.XLSX"), None).unwrap(),
        FileType::Excel
    );
    assert!(matches!(
        resolve_file_type(Path::new("data.csv"), Some("pdf")),
        Err(ProcessError::UnsupportedFileType { .. })
    ));
}

#[test]
fn test_explicit_discriminator_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "upload.dat", "Mobile\n9876543210\n")
        .with_file_type("csv");
    let columns = TransactionColumns {
        mobile: Some(1),
        ..TransactionColumns::default()
    };
    let report = run_transactions(&source, &columns, &OutputConfig::new(dir.path())).unwrap();
    assert_eq!(report.stats.records, 1);
}

#[test]
fn test_load_mapping_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mapping.json");
    fs::write(&path, r#"{"phone": "2", "name": 1}"#).unwrap();
    let mapping = load_mapping_file(&path).unwrap();
    assert_eq!(mapping.phone, Some(2));
    assert_eq!(mapping.name, Some(1));
}

#[test]
fn test_bad_mapping_file_is_invalid_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let malformed = dir.path().join("mapping.json");
    fs::write(&malformed, "{\"phone\": ").unwrap();
    let err = load_mapping_file(&malformed).unwrap_err();
    assert!(matches!(err, ProcessError::InvalidMapping { .. }));
    let response = failure_response(&anyhow::Error::from(err));
    assert!(!response.success);
    assert_eq!(response.code.as_deref(), Some("INVALID_MAPPING"));

    let missing = dir.path().join("absent.json");
    let err = load_mapping_file(&missing).unwrap_err();
    assert_eq!(
        failure_response(&anyhow::Error::from(err)).code.as_deref(),
        Some("INVALID_MAPPING")
    );
}
