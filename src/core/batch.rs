use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::core::error::{BatchError, LineError};
use crate::core::job::{Job, JobStore};

static RE_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").unwrap());
static RE_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub line: usize,
    pub error: LineError,
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub store: JobStore,
    pub rejected: Vec<RejectedLine>,
}

/// Loads every job in `path`, logging a diagnostic for each rejected line.
pub fn load_jobs(path: &Path) -> Result<LoadReport, BatchError> {
    if !path.exists() {
        return Err(BatchError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let unreadable = |source: io::Error| BatchError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let report = read_jobs(BufReader::new(file)).map_err(unreadable)?;

    for rejected in &report.rejected {
        warn!(
            field = rejected.error.field(),
            "Error parsing line {}: {}",
            rejected.line,
            rejected.error
        );
    }

    if report.store.is_empty() {
        return Err(BatchError::NoValidRecords {
            path: path.to_path_buf(),
        });
    }

    debug!(
        "loaded {} jobs from {} ({} lines rejected)",
        report.store.len(),
        path.display(),
        report.rejected.len()
    );
    Ok(report)
}

pub fn read_jobs<R: BufRead>(reader: R) -> io::Result<LoadReport> {
    let mut report = LoadReport::default();

    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let line_number = index + 1;
        let line = String::from_utf8_lossy(&raw);

        match parse_record(&line) {
            Ok(Some(mut job)) => {
                job.line = line_number;
                report.store.push(job);
            }
            Ok(None) => {}
            Err(error) => report.rejected.push(RejectedLine {
                line: line_number,
                error,
            }),
        }
    }

    Ok(report)
}

/// Parses one `id,owner,operation,operand1,operand2,estimatedDuration` record.
/// Blank and `#` lines yield `Ok(None)`.
pub fn parse_record(line: &str) -> Result<Option<Job>, LineError> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    // The last field keeps any further commas, matching a read-to-end-of-line.
    let mut fields = trimmed.splitn(6, ',');

    let id = parse_integer("id", next_field(&mut fields, "id")?)?;
    let owner = next_field(&mut fields, "programmer name")?;
    let operation = next_field(&mut fields, "operation")?;
    let operand1 = parse_float("data1", next_field(&mut fields, "data1")?)?;
    let operand2 = parse_float("data2", next_field(&mut fields, "data2")?)?;
    let estimated = fields
        .next()
        .filter(|field| !field.is_empty())
        .ok_or(LineError::MissingField {
            field: "estimated time",
        })?;
    let estimated_duration = parse_float("estimated time", estimated)?;

    Ok(Some(Job::new(
        id,
        owner,
        operation,
        operand1,
        operand2,
        estimated_duration,
    )))
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<&'a str, LineError> {
    fields.next().ok_or(LineError::MissingField { field })
}

/// Reads the leading integer of `value`, ignoring anything after it.
fn parse_integer(field: &'static str, value: &str) -> Result<i64, LineError> {
    let digits = RE_INTEGER
        .captures(value)
        .and_then(|cap| cap.get(1))
        .ok_or_else(|| LineError::InvalidField {
            field,
            value: value.to_string(),
        })?;

    digits
        .as_str()
        .parse::<i64>()
        .map_err(|_| LineError::OutOfRange {
            field,
            value: value.to_string(),
        })
}

/// Reads the leading decimal number of `value`, ignoring anything after it.
fn parse_float(field: &'static str, value: &str) -> Result<f64, LineError> {
    let number = RE_FLOAT
        .captures(value)
        .and_then(|cap| cap.get(1))
        .ok_or_else(|| LineError::InvalidField {
            field,
            value: value.to_string(),
        })?;

    match number.as_str().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(LineError::OutOfRange {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn record(line: &str) -> Job {
        parse_record(line)
            .expect("line should parse")
            .expect("line should hold a record")
    }

    #[test]
    fn parses_all_six_fields() {
        let job = record("12,Ada Lovelace,potency,2,10,1.5");
        assert_eq!(job.id, 12);
        assert_eq!(job.owner, "Ada Lovelace");
        assert_eq!(job.operation, "potency");
        assert_eq!(job.operand1, 2.0);
        assert_eq!(job.operand2, 10.0);
        assert_eq!(job.estimated_duration, 1.5);
        assert_eq!(job.result, None);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert!(parse_record("").unwrap().is_none());
        assert!(parse_record("   \t").unwrap().is_none());
        assert!(parse_record("\r").unwrap().is_none());
        assert!(parse_record("# id,owner,op").unwrap().is_none());
        assert!(parse_record("    # indented comment").unwrap().is_none());
    }

    #[test]
    fn unknown_operation_is_accepted_at_load() {
        assert_eq!(record("1,bob,sqrt,4,0,0").operation, "sqrt");
    }

    #[test]
    fn numeric_fields_read_leading_number() {
        let job = record("  7 ,x,+, 3.5abc,-.25,2e-1\r");
        assert_eq!(job.id, 7);
        assert_eq!(job.operand1, 3.5);
        assert_eq!(job.operand2, -0.25);
        assert_eq!(job.estimated_duration, 0.2);
    }

    #[test]
    fn trailing_commas_fold_into_last_field() {
        assert_eq!(record("1,a,+,1,2,3,extra").estimated_duration, 3.0);
    }

    #[test]
    fn missing_fields_are_named() {
        let cases = [
            ("1", "programmer name"),
            ("1,ana", "operation"),
            ("1,ana,+", "data1"),
            ("1,ana,+,1", "data2"),
            ("1,ana,+,1,2", "estimated time"),
            ("1,ana,+,1,2,", "estimated time"),
        ];
        for (line, field) in cases {
            assert_eq!(
                parse_record(line).unwrap_err(),
                LineError::MissingField { field },
                "line {line:?}"
            );
        }
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        assert_eq!(parse_record("x1,a,+,1,2,3").unwrap_err().field(), "id");
        assert_eq!(parse_record("1,a,+,one,2,3").unwrap_err().field(), "data1");
        assert_eq!(parse_record("1,a,+,1,,3").unwrap_err().field(), "data2");
        assert!(matches!(
            parse_record("99999999999999999999,a,+,1,2,3"),
            Err(LineError::OutOfRange { field: "id", .. })
        ));
        assert!(matches!(
            parse_record("1,a,+,1e999,2,3"),
            Err(LineError::OutOfRange { field: "data1", .. })
        ));
    }

    #[test]
    fn read_jobs_keeps_order_and_line_numbers() {
        let input = "# header\n\n1,a,+,1,2,0\n4,broken\n2,b,-,3,1,0\n   \n3,c,*,2,2,0\n";
        let report = read_jobs(Cursor::new(input)).unwrap();

        let ids: Vec<i64> = report.store.jobs().iter().map(|job| job.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let lines: Vec<usize> = report.store.jobs().iter().map(|job| job.line).collect();
        assert_eq!(lines, vec![3, 5, 7]);
        assert_eq!(
            report.rejected,
            vec![RejectedLine {
                line: 4,
                error: LineError::MissingField { field: "operation" },
            }]
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_jobs(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, BatchError::FileNotFound { .. }));
    }

    #[test]
    fn load_reports_directory_as_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_jobs(dir.path()).unwrap_err();
        assert!(matches!(err, BatchError::FileUnreadable { .. }));
    }

    #[test]
    fn load_without_records_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"# only\n\n  # comments\n").unwrap();
        let err = load_jobs(file.path()).unwrap_err();
        assert!(matches!(err, BatchError::NoValidRecords { .. }));
    }
}
