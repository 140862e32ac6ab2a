use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(
        "{}:{line}: ERROR: Invalid repeat count in `{token}`: expected a digit before `*`.",
        .file.display()
    )]
    InvalidRepeatCount {
        file: PathBuf,
        line: usize,
        token: String,
    },
}

/// Every error found in a document. The scanner keeps going after a bad
/// line so a single run reports all of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))]
pub struct ParseErrors(pub Vec<ParseError>);

/// A finding that does not stop the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub file: Option<PathBuf>,
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file_name = self
            .file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("<unknown>");
        write!(f, "{}:{}: WARNING: {}", file_name, self.line, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_format() {
        let error = ParseError::InvalidRepeatCount {
            file: PathBuf::from("schedule.inc"),
            line: 7,
            token: "x*".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "schedule.inc:7: ERROR: Invalid repeat count in `x*`: expected a digit before `*`."
        );
    }

    #[test]
    fn test_errors_join_one_per_line() {
        let error = |line| ParseError::InvalidRepeatCount {
            file: PathBuf::from("a.inc"),
            line,
            token: "*".to_string(),
        };
        let errors = ParseErrors(vec![error(1), error(4)]);
        assert_eq!(errors.to_string().lines().count(), 2);
        assert!(errors.to_string().starts_with("a.inc:1: ERROR"));
    }

    #[test]
    fn test_warning_uses_file_name() {
        let warning = ParseWarning {
            file: Some(PathBuf::from("data/schedule.inc")),
            line: 3,
            message: "expected 15 fields, found 14".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "schedule.inc:3: WARNING: expected 15 fields, found 14"
        );
    }
}
