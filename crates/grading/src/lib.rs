//! School grade reports from `id,name,score` text files.
//!
//! Parsing is all-or-nothing: the first malformed line aborts the read and no
//! report is written.

pub mod error;
pub mod parser;
pub mod report;
pub mod student;

pub use error::GradingError;
pub use parser::{parse_students, read_students_from_file};
pub use report::{format_report, generate_report, write_report};
pub use student::{Grade, Student, StudentId};
