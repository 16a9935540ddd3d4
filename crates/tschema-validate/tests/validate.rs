//! End-to-end validation over CSV fixtures and in-memory sources.

use std::path::PathBuf;

use tschema_ingest::{CsvSource, IngestError};
use tschema_model::{BooleanField, ListField, NumberField, Schema, StringField};
use tschema_validate::{
    CellValidationResult, ConstraintName, RowValidationResult, ValidateError, ValidationOptions,
    validate, validate_with,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn foo_bar_schema() -> Schema {
    Schema::new(vec![
        StringField::new("foo")
            .required(true)
            .enumeration(["bar", "baz"])
            .into(),
        StringField::new("bar")
            .min_length(10)
            .required(true)
            .enumeration(["bar", "baz"])
            .into(),
    ])
}

fn required_failure(header: &str) -> CellValidationResult {
    CellValidationResult::fail(
        ConstraintName::Required,
        header,
        "",
        format!("{header} was marked as required, but not provided"),
    )
}

fn originals(results: &[RowValidationResult]) -> Vec<Vec<&str>> {
    results
        .iter()
        .map(|row| row.original.iter().map(String::as_str).collect())
        .collect()
}

#[test]
fn validate_simple_example() {
    let mut source = CsvSource::open(fixture("simple-example.csv")).unwrap();
    let results = validate(&foo_bar_schema(), &mut source).unwrap();

    assert_eq!(
        originals(&results),
        vec![
            vec!["baz", "baz"],
            vec!["bar", "luhrman"],
            vec!["100", "antidisestablishmentarianism"],
            vec!["", "qux"],
        ]
    );
    let valid: Vec<bool> = results.iter().map(|row| row.is_valid).collect();
    assert_eq!(valid, [true, true, true, false]);
    assert!(results[..3].iter().all(|row| row.failures.is_empty()));
    assert_eq!(results[3].failures, vec![required_failure("foo")]);
    assert_eq!(results[3].value("bar"), "qux");
}

#[test]
fn validate_unique_duplicates_are_additive() {
    let schema = Schema::new(vec![
        StringField::new("foo").required(true).unique(true).into(),
        StringField::new("bar").required(true).into(),
    ]);
    let mut source = CsvSource::open(fixture("unique-example.csv")).unwrap();
    let results = validate(&schema, &mut source).unwrap();

    assert_eq!(results.len(), 5);
    assert_eq!(
        results[0].failures,
        vec![CellValidationResult::fail(
            ConstraintName::Unique,
            "foo",
            "baz",
            "foo was marked as unique but its value baz was found on rows 0, 4 (this row: 0)",
        )]
    );
    assert_eq!(
        results[4].failures,
        vec![
            required_failure("bar"),
            CellValidationResult::fail(
                ConstraintName::Unique,
                "foo",
                "baz",
                "foo was marked as unique but its value baz was found on rows 0, 4 (this row: 4)",
            ),
        ]
    );
    assert!(!results[0].is_valid);
    assert!(!results[4].is_valid);
    assert!(results[1].is_valid);
    assert!(results[2].is_valid);
    assert_eq!(results[3].failures, vec![required_failure("foo")]);
}

#[test]
fn unique_failures_from_several_columns_accumulate() {
    let schema = Schema::new(vec![
        StringField::new("a").unique(true).into(),
        NumberField::new("b").unique(true).into(),
    ]);
    let mut rows: Vec<Vec<String>> = vec![
        vec!["a".into(), "b".into()],
        vec!["x".into(), "1".into()],
        vec!["x".into(), "1".into()],
        vec!["y".into(), "2".into()],
    ];
    let results = validate(&schema, &mut rows).unwrap();

    for index in [0, 1] {
        assert_eq!(
            results[index].failures,
            vec![
                CellValidationResult::fail(
                    ConstraintName::Unique,
                    "a",
                    "x",
                    format!("a was marked as unique but its value x was found on rows 0, 1 (this row: {index})"),
                ),
                CellValidationResult::fail(
                    ConstraintName::Unique,
                    "b",
                    "1",
                    format!("b was marked as unique but its value 1 was found on rows 0, 1 (this row: {index})"),
                ),
            ]
        );
        assert!(!results[index].is_valid);
    }
    assert!(results[2].is_valid);
}

#[test]
fn validate_is_repeatable() {
    let schema = foo_bar_schema().with_field(NumberField::new("foo").unique(true));
    let mut source = CsvSource::open(fixture("unique-example.csv")).unwrap();

    let first = validate(&schema, &mut source).unwrap();
    let second = validate(&schema, &mut source).unwrap();

    assert_eq!(first, second);
}

#[test]
fn number_field_failures_use_number_template() {
    let schema = Schema::new(vec![NumberField::new("foo").into()]);
    let mut source = CsvSource::open(fixture("simple-example.csv")).unwrap();
    let results = validate(&schema, &mut source).unwrap();

    assert!(results[2].is_valid);
    assert_eq!(
        results[0].failures,
        vec![CellValidationResult::fail(
            ConstraintName::Number,
            "foo",
            "baz",
            "foo was marked as a number, but its value baz could not be parsed as a number",
        )]
    );
    // An empty cell is not a number either.
    assert_eq!(results[3].failures[0].constraint, ConstraintName::Number);
}

#[test]
fn field_missing_from_header_reads_empty() {
    let schema = Schema::new(vec![StringField::new("absent").required(true).into()]);
    let mut source = CsvSource::open(fixture("simple-example.csv")).unwrap();
    let results = validate(&schema, &mut source).unwrap();

    assert!(results.iter().all(|row| !row.is_valid));
    assert_eq!(results[0].failures, vec![required_failure("absent")]);
}

#[test]
fn strict_coverage_enforces_declared_constraints() {
    let schema = Schema::new(vec![
        StringField::new("id")
            .required(true)
            .unique(true)
            .pattern("[A-Z][0-9]")
            .into(),
        NumberField::new("score").min(0).max(100).into(),
        BooleanField::new("active").required(true).into(),
        ListField::new("tags").min_length(1).max_length(3).into(),
    ]);
    let mut source = CsvSource::open(fixture("strict-example.csv")).unwrap();
    let results = validate_with(&schema, &mut source, &ValidationOptions::strict()).unwrap();

    let constraints = |row: &RowValidationResult| -> Vec<ConstraintName> {
        row.failures.iter().map(|failure| failure.constraint).collect()
    };

    assert!(results[0].is_valid);
    assert_eq!(
        constraints(&results[1]),
        [ConstraintName::Min, ConstraintName::Boolean]
    );
    assert_eq!(
        constraints(&results[2]),
        [
            ConstraintName::Pattern,
            ConstraintName::Min,
            ConstraintName::Max,
            ConstraintName::MaxLength,
        ]
    );
    assert_eq!(
        results[2].failures[3].reason,
        "tags was marked as having a maximum length of 3, but its value a,b,c,d has length 4"
    );
}

#[test]
fn strict_coverage_still_passes_default_fixture_only_for_matching_rows() {
    let mut source = CsvSource::open(fixture("simple-example.csv")).unwrap();
    let results = validate_with(&foo_bar_schema(), &mut source, &ValidationOptions::strict()).unwrap();

    // baz,baz: "baz" is shorter than 10 characters.
    assert_eq!(results[0].failures.len(), 1);
    assert_eq!(results[0].failures[0].constraint, ConstraintName::MinLength);
    // 100 is not one of [bar, baz].
    assert!(
        results[2]
            .failures
            .iter()
            .any(|failure| failure.constraint == ConstraintName::Enum)
    );
}

#[test]
fn source_errors_surface_unchanged() {
    let mut reader = csv::Reader::from_reader("a,b\n1,2,3\n".as_bytes());
    let err = validate(&foo_bar_schema(), &mut reader).unwrap_err();

    let ValidateError::Source(inner) = err else {
        panic!("expected source error");
    };
    let csv_error = inner.downcast_ref::<csv::Error>().unwrap();
    assert!(matches!(
        csv_error.kind(),
        csv::ErrorKind::UnequalLengths { .. }
    ));
}

#[test]
fn ragged_csv_file_is_a_structural_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ragged.csv");
    std::fs::write(&path, "foo,bar\nbaz\n").unwrap();

    let mut source = CsvSource::open(&path).unwrap();
    let err = validate(&foo_bar_schema(), &mut source).unwrap_err();

    assert!(matches!(
        err,
        ValidateError::RowWidth {
            row: 0,
            expected: 2,
            found: 1
        }
    ));
}

#[test]
fn missing_file_is_reported_by_the_source() {
    let err = CsvSource::open(fixture("does-not-exist.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn in_memory_source_matches_file_source() {
    let mut rows: Vec<Vec<String>> = vec![
        vec!["foo".into(), "bar".into()],
        vec!["baz".into(), "baz".into()],
        vec!["bar".into(), "luhrman".into()],
        vec!["100".into(), "antidisestablishmentarianism".into()],
        vec!["".into(), "qux".into()],
    ];
    let mut file = CsvSource::open(fixture("simple-example.csv")).unwrap();

    let from_memory = validate(&foo_bar_schema(), &mut rows).unwrap();
    let from_file = validate(&foo_bar_schema(), &mut file).unwrap();

    assert_eq!(from_memory, from_file);
}
