use super::{strip_terminator, FeatureParser, ParserContext};
use crate::ParseError;

/// Parser for the entries of a `DATES` block, e.g. `01 JUN 2018 /`.
///
/// The date text is returned as written: it is neither reformatted nor
/// checked against the calendar.
#[derive(Debug, Default)]
pub struct DateParser;

impl DateParser {
    pub fn new() -> Self {
        Self
    }
}

impl FeatureParser for DateParser {
    type Output = String;
    type Error = ParseError;

    fn parse(&self, input: &str, _context: &mut ParserContext) -> Result<Self::Output, Self::Error> {
        Ok(parse_date_line(input))
    }
}

pub fn parse_date_line(line: &str) -> String {
    strip_terminator(line).to_string()
}
