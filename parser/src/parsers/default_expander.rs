use super::{FeatureParser, ParserContext};
use crate::ParseError;
use schedule_common::DEFAULT_MARKER;

/// Rewrites every `n*` repetition in a raw line as `n` space-joined
/// `DEFAULT` markers, leaving the rest of the line untouched.
///
/// Only the character right before `*` is read as the count, so counts above
/// nine are not supported.
#[derive(Debug, Default)]
pub struct DefaultExpander;

impl DefaultExpander {
    pub fn new() -> Self {
        Self
    }
}

impl FeatureParser for DefaultExpander {
    type Output = String;
    type Error = ParseError;

    fn parse(&self, input: &str, context: &mut ParserContext) -> Result<Self::Output, Self::Error> {
        let mut line = input.to_string();

        // Every pass removes at least one `*` and adds none.
        while let Some(star) = line.find('*') {
            let count = match line[..star].chars().next_back() {
                Some(c) if c.is_ascii_digit() => c,
                _ => {
                    return Err(ParseError::InvalidRepeatCount {
                        file: context.error_file(),
                        line: context.current_line,
                        token: repetition_token(&line, star).to_string(),
                    })
                }
            };
            let n = count.to_digit(10).unwrap_or_default() as usize;
            let defaults = vec![DEFAULT_MARKER; n].join(" ");
            line = line.replace(&format!("{}*", count), &defaults);
        }

        Ok(line)
    }
}

/// Expands the `n*` repetitions of a standalone line.
pub fn expand_defaults(line: &str) -> Result<String, ParseError> {
    DefaultExpander::new().parse(line, &mut ParserContext::new())
}

/// The whitespace-delimited token holding the `*` at `star`.
fn repetition_token(line: &str, star: usize) -> &str {
    let start = line[..star]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let end = line[star..]
        .find(char::is_whitespace)
        .map(|i| star + i)
        .unwrap_or(line.len());
    &line[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_compdat_line() {
        let input = "'W1' 10 10 1 3 OPEN 1* 1 2 1 3* 1.0 /";
        let output = "'W1' 10 10 1 3 OPEN DEFAULT 1 2 1 DEFAULT DEFAULT DEFAULT 1.0 /";
        assert_eq!(expand_defaults(input).unwrap(), output);
    }

    #[test]
    fn test_expand_is_idempotent() {
        let once = expand_defaults("'W2' 'LGR1' 5 5 1 1 2* 9* /").unwrap();
        assert!(!once.contains('*'));
        assert_eq!(expand_defaults(&once).unwrap(), once);
    }

    #[test]
    fn test_expand_every_count() {
        for n in 1..=9 {
            let expanded = expand_defaults(&format!("A {}* B", n)).unwrap();
            let tokens: Vec<&str> = expanded.split(' ').collect();
            assert_eq!(tokens.len(), n + 2);
            assert_eq!(tokens[0], "A");
            assert_eq!(tokens[n + 1], "B");
            assert!(tokens[1..=n].iter().all(|t| *t == "DEFAULT"));
        }
    }

    #[test]
    fn test_repeated_token_expands_everywhere() {
        assert_eq!(
            expand_defaults("1* X 1*").unwrap(),
            "DEFAULT X DEFAULT"
        );
    }

    #[test]
    fn test_line_without_repetition_is_unchanged() {
        let line = "'W3'\t'LGR1' 10 10  2   2 \tOPEN /";
        assert_eq!(expand_defaults(line).unwrap(), line);
    }

    #[test]
    fn test_missing_count_is_an_error() {
        let parser = DefaultExpander::new();
        let mut context = ParserContext::with_file("schedule.inc".into());
        context.current_line = 4;

        match parser.parse("'W1' 10 * 3", &mut context) {
            Err(ParseError::InvalidRepeatCount { file, line, token }) => {
                assert_eq!(file.to_str().unwrap(), "schedule.inc");
                assert_eq!(line, 4);
                assert_eq!(token, "*");
            }
            other => panic!("Expected InvalidRepeatCount error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_token_after_wide_whitespace() {
        for line in ["OPEN\u{a0}x* 1", "OPEN\u{3000}x*\u{3000}1"] {
            assert!(matches!(
                expand_defaults(line),
                Err(ParseError::InvalidRepeatCount { token, .. }) if token == "x*"
            ));
        }
    }

    #[test]
    fn test_zero_count_expands_to_nothing() {
        assert_eq!(expand_defaults("A 0* B").unwrap(), "A  B");
    }

    #[test]
    fn test_non_digit_count_is_an_error() {
        assert!(matches!(
            expand_defaults("OPEN x* 1"),
            Err(ParseError::InvalidRepeatCount { token, .. }) if token == "x*"
        ));
    }
}
