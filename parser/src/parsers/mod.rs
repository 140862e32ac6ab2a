use crate::ParseWarning;
use schedule_common::CONNECTION_ARITY;

pub mod connection_parser;
pub mod date_parser;
pub mod default_expander;

/// Represents the shared context between different parsers
#[derive(Debug)]
pub struct ParserContext {
    /// The current line being processed
    pub current_line: usize,
    /// The file path being processed, if any
    pub file_path: Option<std::path::PathBuf>,
    /// Keyword of the block the scanner is in, `None` outside any block
    pub keyword: Option<String>,
    /// Most recent `DATES` entry seen during this parse
    pub current_date: Option<String>,
    pub warnings: Vec<ParseWarning>,
}

impl Default for ParserContext {
    fn default() -> Self {
        Self {
            current_line: 1,
            file_path: None,
            keyword: None,
            current_date: None,
            warnings: Vec::new(),
        }
    }
}

impl ParserContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(file_path: std::path::PathBuf) -> Self {
        Self {
            file_path: Some(file_path),
            ..Self::default()
        }
    }

    /// Path used when reporting errors.
    pub fn error_file(&self) -> std::path::PathBuf {
        self.file_path
            .clone()
            .unwrap_or_else(|| std::path::PathBuf::from("<unknown>"))
    }

    pub fn warn<S: Into<String>>(&mut self, message: S) {
        let message = message.into();
        tracing::warn!(line = self.current_line, "{}", message);
        self.warnings.push(ParseWarning {
            file: self.file_path.clone(),
            line: self.current_line,
            message,
        });
    }

    pub fn check_connection_arity(&mut self, found: usize) {
        if found != CONNECTION_ARITY {
            self.warn(format!(
                "Expected {} connection fields, found {}.",
                CONNECTION_ARITY, found
            ));
        }
    }
}

/// The core trait that all feature parsers must implement
pub trait FeatureParser {
    /// The type of output this parser produces
    type Output;
    /// The type of error this parser can produce
    type Error;

    /// Parse the input string using the given context
    ///
    /// # Arguments
    /// * `input` - The input string to parse
    /// * `context` - The shared parser context
    fn parse(&self, input: &str, context: &mut ParserContext) -> Result<Self::Output, Self::Error>;
}

/// Drops the `/` that terminates a record line, along with the whitespace
/// around it. Lines without a terminator only lose trailing whitespace.
pub fn strip_terminator(line: &str) -> &str {
    let line = line.trim_end();
    line.strip_suffix('/').unwrap_or(line).trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_terminator() {
        assert_eq!(strip_terminator("01 JUN 2018 /"), "01 JUN 2018");
        assert_eq!(strip_terminator("01 JUN 2018/"), "01 JUN 2018");
        assert_eq!(strip_terminator("01 JUN 2018 /  "), "01 JUN 2018");
        assert_eq!(strip_terminator("01 JUN 2018"), "01 JUN 2018");
        assert_eq!(strip_terminator("/"), "");
    }

    #[test]
    fn test_arity_warning() {
        let mut context = ParserContext::with_file("a.inc".into());
        context.current_line = 12;

        context.check_connection_arity(CONNECTION_ARITY);
        assert!(context.warnings.is_empty());

        context.check_connection_arity(14);
        assert_eq!(context.warnings.len(), 1);
        assert_eq!(context.warnings[0].line, 12);
        assert_eq!(
            context.warnings[0].message,
            "Expected 15 connection fields, found 14."
        );
    }

    #[test]
    fn test_error_file_defaults_to_unknown() {
        let context = ParserContext::new();
        assert_eq!(context.error_file(), std::path::PathBuf::from("<unknown>"));
    }
}
