use schedule_common::{KeywordSet, Record};

mod error;
pub use error::{ParseError, ParseErrors, ParseWarning};

mod parser;
pub use parser::Parser;

pub mod cleaner;
pub use cleaner::clean;

pub mod filter;
pub mod parsers;

pub use parsers::connection_parser::{parse_compdat_line, parse_compdatl_line};
pub use parsers::date_parser::parse_date_line;
pub use parsers::default_expander::expand_defaults;

/// Parses a schedule with the default keywords, discarding warnings.
pub fn parse(text: &str) -> Result<Vec<Record>, ParseErrors> {
    let parser = Parser::new();
    let (records, _warnings) = parser.parse(text)?;
    Ok(records)
}

pub fn parse_with_keywords(text: &str, keywords: KeywordSet) -> Result<Vec<Record>, ParseErrors> {
    let parser = Parser::new().with_keywords(keywords);
    let (records, _warnings) = parser.parse(text)?;
    Ok(records)
}
