//! Plain-text instance format.
//!
//! ```text
//! N M
//! p(0,0) p(0,1) ... p(0,N-1)
//! ...
//! p(M-1,0) ...     p(M-1,N-1)
//! ```
//!
//! One header line with the job and machine counts, then one line per
//! machine. Blank lines and lines starting with `#` are skipped.

use super::model::{Instance, Time};
use crate::error::{Result, ScheduleError};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

impl Instance {
    /// Reads an instance file in the text format.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }
}

impl FromStr for Instance {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

        let (header_line, header) = lines.next().ok_or(ScheduleError::Parse {
            line: 1,
            message: "missing header".into(),
        })?;
        let dims: Vec<usize> = header
            .split_whitespace()
            .map(str::parse)
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| ScheduleError::Parse {
                line: header_line,
                message: format!("invalid header: {e}"),
            })?;
        let (num_jobs, num_machines) = match dims[..] {
            [n, m] => (n, m),
            _ => {
                return Err(ScheduleError::Parse {
                    line: header_line,
                    message: format!("header must hold exactly two values, found {}", dims.len()),
                })
            }
        };

        let mut rows = Vec::new();
        for (line_no, line) in lines {
            let mut row = Vec::new();
            for token in line.split_whitespace() {
                let value: i64 = token.parse().map_err(|_| ScheduleError::Parse {
                    line: line_no,
                    message: format!("'{token}' is not an integer"),
                })?;
                if value <= 0 {
                    return Err(ScheduleError::InvalidInstance(format!(
                        "line {line_no}: processing time {value} is not positive"
                    )));
                }
                row.push(value as Time);
            }
            rows.push(row);
        }

        Instance::with_dimensions(num_jobs, num_machines, rows)
    }
}

/// Writes the instance back in the text format.
impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.num_jobs(), self.num_machines())?;
        for row in self.rows() {
            let mut first = true;
            for p in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{p}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let inst: Instance = "3 2\n10 20 30\n15 15 15\n".parse().unwrap();
        assert_eq!(inst.num_jobs(), 3);
        assert_eq!(inst.num_machines(), 2);
        assert_eq!(inst.processing_time(0, 1), 20);
        assert_eq!(inst.processing_time(1, 2), 15);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = "# generated\n\n2 1\n\n  4 5  \n";
        let inst: Instance = text.parse().unwrap();
        assert_eq!(inst.machine_row(0), &[4, 5]);
    }

    #[test]
    fn test_parse_wrong_row_count() {
        let err = "3 2\n1 2 3\n".parse::<Instance>().unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInstance(_)));
    }

    #[test]
    fn test_parse_wrong_row_length() {
        let err = "3 2\n1 2 3\n1 2\n".parse::<Instance>().unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInstance(_)));
    }

    #[test]
    fn test_parse_non_positive() {
        let err = "2 1\n5 -3\n".parse::<Instance>().unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInstance(_)));
        let err = "2 1\n5 0\n".parse::<Instance>().unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInstance(_)));
    }

    #[test]
    fn test_parse_bad_tokens() {
        let err = "x 1\n5\n".parse::<Instance>().unwrap_err();
        assert!(matches!(err, ScheduleError::Parse { line: 1, .. }));

        let err = "2 1 7\n5 5\n".parse::<Instance>().unwrap_err();
        assert!(matches!(err, ScheduleError::Parse { line: 1, .. }));

        let err = "2 1\n5 five\n".parse::<Instance>().unwrap_err();
        assert!(matches!(err, ScheduleError::Parse { line: 2, .. }));

        let err = "# only a comment\n".parse::<Instance>().unwrap_err();
        assert!(matches!(err, ScheduleError::Parse { .. }));
    }

    #[test]
    fn test_parse_oversized_header() {
        let err = "2 4611686018427387904\n1 1\n".parse::<Instance>().unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInstance(_)));

        let err = "4611686018427387904 1\n1 1\n".parse::<Instance>().unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInstance(_)));
    }

    #[test]
    fn test_display_reparses() {
        let inst = Instance::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let text = inst.to_string();
        assert_eq!(text, "3 2\n1 2 3\n4 5 6\n");
        assert_eq!(text.parse::<Instance>().unwrap(), inst);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Instance::from_path("/nonexistent/instance.txt").unwrap_err();
        assert!(matches!(err, ScheduleError::Io(_)));
    }
}
