//! Report rendering and writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::GradingError;
use crate::parser::read_students_from_file;
use crate::student::Student;

pub fn format_report(students: &[Student]) -> Vec<String> {
    students.iter().map(Student::summary).collect()
}

/// Create (or truncate) `path` and write one summary line per student.
pub fn write_report(students: &[Student], path: &Path) -> Result<(), GradingError> {
    let io_err = |source| GradingError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    for line in format_report(students) {
        writeln!(writer, "{line}").map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;
    Ok(())
}

/// Parse `input` completely, then write the report to `output`.
///
/// The output file is only touched once every input line parsed, so a
/// malformed input never leaves a partial report behind. Returns the number
/// of students written.
pub fn generate_report(input: &Path, output: &Path) -> Result<usize, GradingError> {
    let students = read_students_from_file(input)?;
    write_report(&students, output)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        students = students.len(),
        "grade report written"
    );
    Ok(students.len())
}
