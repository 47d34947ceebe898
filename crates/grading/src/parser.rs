//! `id,name,score` line parser.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::GradingError;
use crate::student::{Student, StudentId};

/// Parse every line of `input` into a student.
///
/// A leading byte-order mark is ignored and fields are trimmed. Ids and
/// scores are signed integers. The first line with the wrong field count or a
/// non-integer id/score aborts the whole parse; no partial list is returned.
pub fn parse_students(input: &str) -> Result<Vec<Student>, GradingError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut students = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let parts: Vec<&str> = raw.split(',').collect();
        let [id, name, score] = parts.as_slice() else {
            return Err(GradingError::MissingField {
                line,
                found: parts.len(),
            });
        };

        let id: StudentId = id.trim().parse().map_err(|_| GradingError::Format {
            line,
            field: "id",
            value: id.trim().to_string(),
        })?;
        let score: i32 = score.trim().parse().map_err(|_| GradingError::Format {
            line,
            field: "score",
            value: score.trim().to_string(),
        })?;

        students.push(Student::new(id, name.trim(), score));
    }

    tracing::debug!(students = students.len(), "grade input parsed");
    Ok(students)
}

/// Read and parse a whole input file.
pub fn read_students_from_file(path: &Path) -> Result<Vec<Student>, GradingError> {
    let input = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            GradingError::InputNotFound(path.to_path_buf())
        } else {
            GradingError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_students(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_fields() {
        let students = parse_students("1, Alice, 85\n2, Bob, 55").unwrap();
        assert_eq!(
            students,
            vec![
                Student::new(StudentId::new(1), "Alice", 85),
                Student::new(StudentId::new(2), "Bob", 55),
            ]
        );
    }

    #[test]
    fn two_fields_is_missing_field() {
        let err = parse_students("1, Alice, 85\n2, Bob").unwrap_err();
        match err {
            GradingError::MissingField { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, 2);
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn extra_field_is_also_missing_field() {
        let err = parse_students("1, Alice, 85, extra").unwrap_err();
        assert!(matches!(err, GradingError::MissingField { line: 1, found: 4 }));
    }

    #[test]
    fn non_integer_score_is_format_error() {
        let err = parse_students("1, Alice, 85\n2, Bob, fifty").unwrap_err();
        match err {
            GradingError::Format { line, field, value } => {
                assert_eq!(line, 2);
                assert_eq!(field, "score");
                assert_eq!(value, "fifty");
            }
            other => panic!("expected Format, got {other:?}"),
        }
    }

    #[test]
    fn non_integer_id_is_format_error() {
        let err = parse_students("x1, Alice, 85").unwrap_err();
        assert!(matches!(err, GradingError::Format { line: 1, field: "id", .. }));
    }

    #[test]
    fn negative_id_is_accepted() {
        let students = parse_students("-1, Eve, 70").unwrap();
        assert_eq!(students, vec![Student::new(StudentId::new(-1), "Eve", 70)]);
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let students = parse_students("\u{feff}1, Alice, 85\n2, Bob, 55").unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].id, StudentId::new(1));
    }

    #[test]
    fn bom_file_parses_like_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "\u{feff}3, Carol, 71\n").unwrap();
        let students = read_students_from_file(&path).unwrap();
        assert_eq!(students, vec![Student::new(StudentId::new(3), "Carol", 71)]);
    }

    #[test]
    fn blank_line_aborts_the_read() {
        let err = parse_students("1, Alice, 85\n\n2, Bob, 55").unwrap_err();
        assert!(matches!(err, GradingError::MissingField { line: 2, found: 1 }));
    }

    #[test]
    fn empty_input_yields_no_students() {
        assert!(parse_students("").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_students_from_file(&dir.path().join("input.txt")).unwrap_err();
        assert!(matches!(err, GradingError::InputNotFound(_)));
    }
}
