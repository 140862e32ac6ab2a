use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

/// A compatibility fixture: a markdown file holding a schedule and the
/// records it must parse to, one `Record` display line per record.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: String,
    pub schedule: String,
    pub result: String,
    pub path: PathBuf,
    pub disabled: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TestCaseError {
    #[error("{}: missing `# ` title line", .file.display())]
    MissingTitle { file: PathBuf },
    #[error("{}: missing ```{language} block", .file.display())]
    MissingBlock { file: PathBuf, language: String },
}

fn parse_name(content: &str) -> Option<String> {
    content
        .lines()
        .next()?
        .strip_prefix("# ")
        .map(|name| name.trim().to_string())
}

fn parse_markdown_block(content: &str, language: &str) -> Option<String> {
    let (_, rest) = content.split_once(&format!("```{}\n", language))?;
    let (block, _) = rest.split_once("```")?;
    Some(block.trim().to_string())
}

impl TestCase {
    pub fn from_string<A, B>(content: A, path: B) -> Result<Self, TestCaseError>
    where
        A: AsRef<str>,
        B: AsRef<Path>,
    {
        let content = content.as_ref();
        let path: PathBuf = path.as_ref().into();

        let name = parse_name(content).ok_or_else(|| TestCaseError::MissingTitle {
            file: path.clone(),
        })?;
        let block = |language: &str| {
            parse_markdown_block(content, language).ok_or_else(|| TestCaseError::MissingBlock {
                file: path.clone(),
                language: language.to_string(),
            })
        };
        let schedule = block("schedule")?;
        let result = block("result")?;
        let disabled = content.trim().ends_with("!!! disabled");

        Ok(TestCase {
            name,
            schedule,
            result,
            path,
            disabled,
        })
    }

    /// Expected record lines, blank lines ignored.
    pub fn expected_lines(&self) -> Vec<&str> {
        self.result
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_from_string_with_simple_test() {
        let content = include_str!("../../compatibility-tests/00000000001-single-date.md");

        let test_case =
            TestCase::from_string(content, "compatibility-tests/00000000001-single-date.md")
                .unwrap();

        assert_eq!(test_case.name, "Single Date");
        assert_eq!(test_case.schedule, "DATES\n01 JUN 2018 /\n/");
        assert_eq!(test_case.expected_lines(), vec!["01 JUN 2018|NA"]);
        assert!(!test_case.disabled);
    }

    #[test]
    fn test_case_from_string_with_disabled_test() {
        let content = "# Test Name\n\nTest description\n\n## Schedule\n```schedule\nDATES\n```\n\n## Result\n```result\n```\n\n!!! disabled";

        let test_case = TestCase::from_string(content, "test.md").unwrap();

        assert!(test_case.disabled);
        assert!(test_case.expected_lines().is_empty());
    }

    #[test]
    fn test_case_missing_blocks() {
        let content = "# Broken\n\n```schedule\nDATES\n```\n";

        let error = TestCase::from_string(content, "broken.md").unwrap_err();
        assert_eq!(
            error,
            TestCaseError::MissingBlock {
                file: PathBuf::from("broken.md"),
                language: "result".to_string(),
            }
        );
    }

    #[test]
    fn test_case_missing_title() {
        let content = "no title\n```schedule\n```\n```result\n```";
        assert!(matches!(
            TestCase::from_string(content, "untitled.md"),
            Err(TestCaseError::MissingTitle { .. })
        ));
    }
}
