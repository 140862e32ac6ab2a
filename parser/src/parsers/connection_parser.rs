use super::{strip_terminator, FeatureParser, ParserContext};
use crate::ParseError;
use schedule_common::{Field, CONNECTION_ARITY};

/// Parser for the lines of `COMPDAT` and `COMPDATL` blocks.
///
/// Both keywords share one layout once normalized:
///
/// ```text
/// well, local grid, I, J, K upper, K lower, flag, saturation table,
/// transmissibility factor, well bore diameter, Kh, skin, D-factor,
/// direction, pressure equivalent radius
/// ```
///
/// A `COMPDAT` line has no local grid name. It is recognized by a numeric
/// second token, and `Field::NotAvailable` is put in its place.
#[derive(Debug, Default)]
pub struct ConnectionParser;

impl ConnectionParser {
    pub fn new() -> Self {
        Self
    }

    /// Reads the count of an `n*` token from its first character.
    fn repeat_count(&self, token: &str, context: &ParserContext) -> Result<usize, ParseError> {
        token
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|n| n as usize)
            .ok_or_else(|| ParseError::InvalidRepeatCount {
                file: context.error_file(),
                line: context.current_line,
                token: token.to_string(),
            })
    }
}

impl FeatureParser for ConnectionParser {
    type Output = Vec<Field>;
    type Error = ParseError;

    fn parse(&self, input: &str, context: &mut ParserContext) -> Result<Self::Output, Self::Error> {
        let tokens: Vec<&str> = strip_terminator(input).split_whitespace().collect();
        let grid_name_missing = tokens.get(1).is_some_and(|token| is_numeric(token));

        let mut fields = Vec::with_capacity(CONNECTION_ARITY);
        for (index, token) in tokens.iter().enumerate() {
            if index == 1 && grid_name_missing {
                fields.push(Field::NotAvailable);
            }

            if token.contains('*') {
                let n = self.repeat_count(token, context)?;
                fields.extend(std::iter::repeat(Field::Default).take(n));
            } else {
                fields.push(Field::Text(token.replace('\'', "")));
            }
        }

        Ok(fields)
    }
}

fn is_numeric(token: &str) -> bool {
    token.parse::<f64>().is_ok()
}

pub fn parse_compdat_line(line: &str) -> Result<Vec<Field>, ParseError> {
    ConnectionParser::new().parse(line, &mut ParserContext::new())
}

pub fn parse_compdatl_line(line: &str) -> Result<Vec<Field>, ParseError> {
    parse_compdat_line(line)
}
