// 🎓 Grading Report - `id,name,score` text file in, formatted report out
//
// Input format: one student per line, exactly three comma separated fields.
// Fields are trimmed; quotes carry no meaning. Lines end in LF or CRLF.
// An empty line is a one-field record and is rejected like any other.
// The first bad line aborts the whole read.

use crate::entities::Student;
use crate::error::{MalformedReason, RecordError, RecordResult};
use anyhow::Result;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{info, warn};

const FIELDS_PER_RECORD: usize = 3;

/// Parse student records from any reader
///
/// Line numbers are physical and 1-based: blank lines count, and a CRLF
/// ending is one line break.
pub fn parse_students<R: Read>(input: R) -> RecordResult<Vec<Student>> {
    let mut students = Vec::new();

    for (index, line) in BufReader::new(input).lines().enumerate() {
        let number = index as u64 + 1;
        let line = line.map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => {
                malformed(number, MalformedReason::Unreadable(e.to_string()))
            }
            _ => RecordError::io("<student records>", e),
        })?;

        let line = line.strip_suffix('\r').unwrap_or(&line);
        let record = split_fields(line, number)?;
        students.push(parse_record(&record, number)?);
    }

    Ok(students)
}

/// Split one physical line into trimmed, unquoted fields
fn split_fields(line: &str, number: u64) -> RecordResult<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    let more = reader
        .read_record(&mut record)
        .map_err(|e| malformed(number, MalformedReason::Unreadable(e.to_string())))?;

    // The reader yields nothing for an empty line; that is still one empty field
    if !more {
        record = StringRecord::from(vec![""]);
    }
    Ok(record)
}

fn parse_record(record: &StringRecord, line: u64) -> RecordResult<Student> {
    if record.len() != FIELDS_PER_RECORD {
        return Err(malformed(line, MalformedReason::MissingFields { found: record.len() }));
    }

    let raw_id = &record[0];
    let id: u32 = raw_id
        .parse()
        .map_err(|_| malformed(line, MalformedReason::InvalidId(raw_id.to_string())))?;

    let full_name = &record[1];

    let raw_score = &record[2];
    let score: i32 = raw_score
        .parse()
        .map_err(|_| malformed(line, MalformedReason::InvalidScore(raw_score.to_string())))?;

    Ok(Student::new(id, full_name, score))
}

fn malformed(line: u64, reason: MalformedReason) -> RecordError {
    warn!(line, %reason, "rejected student record");
    RecordError::MalformedRecord { line, reason }
}

/// Read every student from `path`
pub fn read_students(path: &Path) -> RecordResult<Vec<Student>> {
    let file = File::open(path).map_err(|e| RecordError::io(path, e))?;
    match parse_students(file) {
        // Re-attach the real path to read errors raised mid-stream
        Err(RecordError::Io { source, .. }) => Err(RecordError::io(path, source)),
        other => other,
    }
}

/// One formatted line per student
pub fn write_report(students: &[Student], path: &Path) -> RecordResult<()> {
    let file = File::create(path).map_err(|e| RecordError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for student in students {
        writeln!(writer, "{}", student).map_err(|e| RecordError::io(path, e))?;
    }
    writer.flush().map_err(|e| RecordError::io(path, e))?;
    Ok(())
}

/// Read `input`, write the report to `output`, print the outcome
pub fn run(input: &Path, output: &Path, out: &mut impl Write) -> Result<()> {
    let result = read_students(input).and_then(|students| {
        write_report(&students, output)?;
        Ok(students.len())
    });

    match result {
        Ok(count) => {
            info!(count, report = %output.display(), "report generated");
            writeln!(out, "Report generated successfully in {}", output.display())?;
        }
        Err(e) if e.is_missing_file() => {
            writeln!(out, "Error: The input file was not found.")?;
        }
        Err(e @ RecordError::MalformedRecord { .. }) => {
            writeln!(out, "Error: {}", e)?;
        }
        Err(e) => {
            writeln!(out, "An unexpected error occurred: {}", e)?;
        }
    }
    Ok(())
}
