//! Unit tests for the command orchestration helpers.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use chrono::NaiveDate;
use rstest::{fixture, rstest};

use super::*;
use crate::error::PatternError;

struct TempDirFixture {
    path: Utf8PathBuf,
}

impl TempDirFixture {
    fn new(label: &str) -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = Utf8PathBuf::from("target")
            .join("synthetic-email-tests")
            .join(format!("cli-{label}-{}-{counter}", std::process::id()));
        let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open cwd");
        root.create_dir_all(&path).expect("create temp dir");
        Self { path }
    }

    fn write(&self, file_name: &str, contents: &str) -> PathBuf {
        let dir = self.dir();
        dir.write(file_name, contents).expect("write fixture file");
        self.path.join(file_name).into_std_path_buf()
    }

    fn dir(&self) -> Dir {
        Dir::open_ambient_dir(&self.path, ambient_authority()).expect("open temp dir")
    }

    fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl Drop for TempDirFixture {
    fn drop(&mut self) {
        if let Ok(root) = Dir::open_ambient_dir(".", ambient_authority()) {
            drop(root.remove_dir_all(&self.path));
        }
    }
}

#[fixture]
fn temp_dir() -> TempDirFixture {
    TempDirFixture::new("run")
}

fn list(raw: &str) -> Option<Vec<String>> {
    Some(vec![raw.to_owned()])
}

fn seeded_settings() -> GeneratorSettings {
    GeneratorSettings {
        name_count: Some(4),
        name_seed: Some(2026),
        email_seed: Some(99),
        count: Some(10),
        ..GeneratorSettings::default()
    }
}

#[test]
fn run_without_output_returns_contents_for_stdout() {
    let outcome = run(&seeded_settings()).expect("run succeeds");

    assert_eq!(outcome.written_to, None);
    assert_eq!(outcome.format, ExportFormat::Text);
    assert_eq!(outcome.batch.records.len(), 10);
    assert_eq!(outcome.name_seed, Some(2026));
    let lines: Vec<&str> = outcome.contents.lines().collect();
    let emails: Vec<&str> = outcome.batch.emails().collect();
    assert_eq!(lines, emails);
    assert_eq!(success_message(&outcome), None);
}

#[test]
fn run_is_reproducible_with_fixed_seeds() {
    let first = run(&seeded_settings()).expect("first run");
    let second = run(&seeded_settings()).expect("second run");
    assert_eq!(first.contents, second.contents);
}

#[rstest]
fn run_reads_names_from_file(temp_dir: TempDirFixture) {
    let names_file = temp_dir.write("names.txt", "Ann Lee\n\n  Bo   Chan \n");
    let settings = GeneratorSettings {
        names_file: Some(names_file),
        patterns: list("first-dot-last"),
        domains: list("example.com"),
        ..GeneratorSettings::default()
    };

    let outcome = run(&settings).expect("run succeeds");

    assert_eq!(
        outcome.contents,
        "ann.lee@example.com\nbo.chan@example.com\n"
    );
    assert_eq!(outcome.name_seed, None);
    assert!(outcome.batch.is_short());
    assert!(shortfall_message(&outcome.batch).is_some_and(|msg| msg.contains("generated 2")));
}

#[rstest]
fn run_replaces_file_names_with_synthesized_names(temp_dir: TempDirFixture) {
    let names_file = temp_dir.write("names.txt", "Ann Lee\n");
    let settings = GeneratorSettings {
        names_file: Some(names_file),
        replace_names: true,
        ..seeded_settings()
    };

    let outcome = run(&settings).expect("run succeeds");

    assert!(outcome.batch.records.iter().all(|record| record.name != "Ann Lee"));
}

#[rstest]
fn run_deduplicates_names_when_requested(temp_dir: TempDirFixture) {
    let names_file = temp_dir.write("names.txt", "Ann Lee\nANN LEE\n");
    let settings = GeneratorSettings {
        names_file: Some(names_file),
        dedup_names: true,
        allow_duplicates: true,
        patterns: list("first-dot-last"),
        domains: list("example.com"),
        ..GeneratorSettings::default()
    };

    let outcome = run(&settings).expect("run succeeds");

    assert_eq!(outcome.batch.records.len(), 1);
}

#[rstest]
fn run_rejects_invalid_names_in_file(temp_dir: TempDirFixture) {
    let names_file = temp_dir.write("names.txt", "Ann Lee\nAgent 47\n");
    let settings = GeneratorSettings {
        names_file: Some(names_file),
        ..GeneratorSettings::default()
    };

    assert_eq!(
        run(&settings),
        Err(CliError::Input(InputError::InvalidName {
            value: "Agent 47".to_owned()
        }))
    );
}

#[test]
fn run_reports_missing_names_file() {
    let settings = GeneratorSettings {
        names_file: Some(PathBuf::from("target/definitely-missing/names.txt")),
        ..GeneratorSettings::default()
    };

    assert!(matches!(
        run(&settings),
        Err(CliError::Input(InputError::Read { .. }))
    ));
}

#[rstest]
#[case::no_names(GeneratorSettings::default(), CliError::NoNames)]
#[case::no_patterns(
    GeneratorSettings { patterns: list(""), ..seeded_settings() },
    CliError::NoPatterns
)]
#[case::no_domains(
    GeneratorSettings { domains: list(" , "), ..seeded_settings() },
    CliError::NoDomains
)]
#[case::repeated_entries_with_unknown_pattern(
    GeneratorSettings {
        patterns: Some(vec!["first-dot-last".to_owned(), "nope".to_owned()]),
        ..seeded_settings()
    },
    CliError::Pattern(PatternError::UnknownPattern { id: "nope".to_owned() })
)]
#[case::unknown_pattern(
    GeneratorSettings { patterns: list("first-dot-last,nope"), ..seeded_settings() },
    CliError::Pattern(PatternError::UnknownPattern { id: "nope".to_owned() })
)]
#[case::invalid_domain(
    GeneratorSettings { domains: list("example.com,localhost"), ..seeded_settings() },
    CliError::Input(InputError::InvalidDomain { value: "localhost".to_owned() })
)]
#[case::zero_count(
    GeneratorSettings { count: Some(0), ..seeded_settings() },
    CliError::Input(InputError::InvalidCount { what: "email count", value: 0, max: MAX_RECORDS })
)]
#[case::too_many_names(
    GeneratorSettings { name_count: Some(MAX_RECORDS + 1), ..seeded_settings() },
    CliError::Input(InputError::InvalidCount {
        what: "name count",
        value: MAX_RECORDS + 1,
        max: MAX_RECORDS,
    })
)]
#[case::bad_table(
    GeneratorSettings {
        format: Some("sql".to_owned()),
        table: Some("bad table".to_owned()),
        ..seeded_settings()
    },
    CliError::Export(ExportError::InvalidTableName { name: "bad table".to_owned() })
)]
fn run_rejects_invalid_settings(#[case] settings: GeneratorSettings, #[case] expected: CliError) {
    assert_eq!(run(&settings), Err(expected));
}

#[rstest]
fn run_writes_output_file(temp_dir: TempDirFixture) {
    let target = temp_dir.path().join("emails.csv");
    let settings = GeneratorSettings {
        format: Some("csv".to_owned()),
        output: Some(target.clone().into_std_path_buf()),
        ..seeded_settings()
    };

    let outcome = run(&settings).expect("run succeeds");

    assert_eq!(outcome.written_to.as_deref(), Some(target.as_path()));
    let written = temp_dir
        .dir()
        .read_to_string("emails.csv")
        .expect("read export");
    assert_eq!(written, outcome.contents);
    assert!(written.starts_with("name,email,domain,pattern,username\n"));
    let message = success_message(&outcome).expect("message for file output");
    assert!(message.contains("Wrote 10 records (csv)"), "{message}");
}

#[rstest]
fn write_output_uses_timestamped_name_for_directories(temp_dir: TempDirFixture) {
    let timestamp = NaiveDate::from_ymd_opt(2026, 3, 4)
        .and_then(|date| date.and_hms_opt(5, 6, 7))
        .expect("valid timestamp");

    let written = write_output(
        temp_dir.path().as_std_path(),
        ExportFormat::Json,
        "[]\n",
        timestamp,
    )
    .expect("write succeeds");

    assert_eq!(
        written,
        temp_dir.path().join("synthetic_emails_20260304_050607.json")
    );
    let contents = temp_dir
        .dir()
        .read_to_string("synthetic_emails_20260304_050607.json")
        .expect("read export");
    assert_eq!(contents, "[]\n");
}

#[test]
fn write_output_reports_missing_parent_directories() {
    let timestamp = NaiveDate::from_ymd_opt(2026, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid timestamp");
    let result = write_output(
        Path::new("target/definitely-missing/dir/emails.txt"),
        ExportFormat::Text,
        "x\n",
        timestamp,
    );

    assert!(matches!(
        result,
        Err(CliError::Export(ExportError::Write { ref path, .. }))
            if path.as_str() == "target/definitely-missing/dir/emails.txt"
    ));
}

#[test]
fn shortfall_message_is_absent_for_complete_batches() {
    let outcome = run(&seeded_settings()).expect("run succeeds");
    assert_eq!(shortfall_message(&outcome.batch), None);
}
