//! Integration tests for loading passenger files.

use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use explorer_ingest::{IngestError, load_passengers, read_header};
use polars::prelude::*;
use tempfile::NamedTempFile;

const HEADER: &str =
    "PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked";

fn passenger_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

#[test]
fn loads_all_raw_columns_as_strings() {
    let file = passenger_file(&[
        r#"1,0,3,"Braund, Mr. Owen Harris",male,22,1,0,A/5 21171,7.25,,S"#,
        r#"2,1,1,"Cumings, Mrs. John Bradley (Florence Briggs Thayer)",female,38,1,0,PC 17599,71.2833,C85,C"#,
    ]);

    let df = load_passengers(file.path(), Duration::ZERO).unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 12);
    for column in df.get_columns() {
        assert_eq!(column.dtype(), &DataType::String, "{}", column.name());
    }
    let names = df.column("Name").unwrap().str().unwrap();
    assert_eq!(names.get(0), Some("Braund, Mr. Owen Harris"));
    let cabins = df.column("Cabin").unwrap().str().unwrap();
    assert_eq!(cabins.get(0), None);
    assert_eq!(cabins.get(1), Some("C85"));
}

#[test]
fn header_only_file_gives_empty_table() {
    let file = passenger_file(&[]);
    let df = load_passengers(file.path(), Duration::ZERO).unwrap();
    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 12);
}

#[test]
fn empty_file_is_a_parse_error() {
    let file = NamedTempFile::new().unwrap();
    let result = load_passengers(file.path(), Duration::ZERO);
    assert!(matches!(result, Err(IngestError::CsvParse { .. })));
}

#[test]
fn missing_file_is_not_found() {
    let result = load_passengers(Path::new("does/not/exist.csv"), Duration::ZERO);
    match result {
        Err(IngestError::FileNotFound { path }) => {
            assert_eq!(path, Path::new("does/not/exist.csv"));
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn extra_columns_are_kept() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "PassengerId,Boat").unwrap();
    writeln!(file, "1,13").unwrap();

    let df = load_passengers(file.path(), Duration::ZERO).unwrap();
    assert_eq!(df.width(), 2);
    assert!(df.column("Boat").is_ok());
}

#[test]
fn waits_for_simulated_delay() {
    let file = passenger_file(&[]);
    let start = Instant::now();
    load_passengers(file.path(), Duration::from_millis(50)).unwrap();
    assert!(start.elapsed() >= Duration::from_millis(50));
}

#[test]
fn read_header_strips_bom() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "\u{feff}{HEADER}\r\n1,0,3\n").unwrap();

    let header = read_header(file.path()).unwrap();
    assert_eq!(header.len(), 12);
    assert_eq!(header[0], "PassengerId");
    assert_eq!(header[11], "Embarked");
}

#[test]
fn read_header_rejects_empty_file() {
    let file = NamedTempFile::new().unwrap();
    assert!(matches!(
        read_header(file.path()),
        Err(IngestError::CsvParse { .. })
    ));
}
