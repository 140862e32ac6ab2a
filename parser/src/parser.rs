use crate::cleaner::{strip_comment, BYTE_ORDER_MARK};
use crate::filter::drop_superseded_dates;
use crate::parsers::connection_parser::ConnectionParser;
use crate::parsers::date_parser::DateParser;
use crate::parsers::{FeatureParser, ParserContext};
use crate::{ParseError, ParseErrors, ParseWarning};
use schedule_common::{KeywordSet, Record, ScheduleConfig, DATES};
use std::path::PathBuf;
use tracing::{debug, trace};

/// Reads the keyword blocks of a schedule into records.
///
/// Lines are scanned once. A line equal to a configured keyword opens its
/// block and a line equal to `/` closes it. Inside `DATES` each line moves
/// the current date forward and yields a `Record::Date`; inside any other
/// configured block each line yields a `Record::Connection` stamped with the
/// current date. A second pass then drops the date placeholders that the
/// following connections make redundant.
#[derive(Debug, Default)]
pub struct Parser {
    file_path: Option<PathBuf>,
    config: ScheduleConfig,
    date_parser: DateParser,
    connection_parser: ConnectionParser,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file<P: Into<PathBuf>>(file_path: P) -> Self {
        Self {
            file_path: Some(file_path.into()),
            ..Self::default()
        }
    }

    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.config.keywords = keywords;
        self
    }

    pub fn with_config(mut self, config: ScheduleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.config.keywords
    }

    pub fn parse<A>(&self, text: A) -> Result<(Vec<Record>, Vec<ParseWarning>), ParseErrors>
    where
        A: AsRef<str>,
    {
        let mut context = match &self.file_path {
            Some(path) => ParserContext::with_file(path.clone()),
            None => ParserContext::new(),
        };
        let mut records = Vec::new();
        let mut errors = Vec::new();

        let text = text.as_ref();
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

        for (index, line) in text.lines().enumerate() {
            context.current_line = index + 1;
            let line = if self.config.strip_comments {
                strip_comment(line)
            } else {
                line
            };

            if let Some(keyword) = self.config.keywords.matching(line) {
                debug!(line = context.current_line, keyword, "entering block");
                context.keyword = Some(keyword.to_string());
                continue;
            }

            if line.trim() == "/" {
                if let Some(keyword) = context.keyword.take() {
                    debug!(line = context.current_line, %keyword, "leaving block");
                }
                continue;
            }

            if line.trim().is_empty() {
                continue;
            }

            let Some(keyword) = context.keyword.clone() else {
                continue;
            };

            match self.parse_block_line(&keyword, line, &mut context) {
                Ok(record) => {
                    trace!(line = context.current_line, "record {}", record);
                    records.push(record);
                }
                Err(error) => errors.push(error),
            }
        }

        if !errors.is_empty() {
            return Err(ParseErrors(errors));
        }

        let scanned = records.len();
        let records = drop_superseded_dates(records);
        debug!(scanned, kept = records.len(), "parsed schedule");

        Ok((records, context.warnings))
    }

    fn parse_block_line(
        &self,
        keyword: &str,
        line: &str,
        context: &mut ParserContext,
    ) -> Result<Record, ParseError> {
        if keyword == DATES {
            let date = self.date_parser.parse(line, context)?;
            context.current_date = Some(date.clone());
            return Ok(Record::Date { date });
        }

        let fields = self.connection_parser.parse(line, context)?;
        context.check_connection_arity(fields.len());
        Ok(Record::Connection {
            date: context.current_date.clone(),
            fields,
        })
    }
}
