use crate::domain::model::Topic;
use crate::domain::ports::{Console, Lesson};
use crate::utils::error::{LessonError, Result};
use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCase {
    pub pattern: String,
    pub input: String,
    pub expected: bool,
}

impl PatternCase {
    pub fn new(pattern: impl Into<String>, input: impl Into<String>, expected: bool) -> Self {
        Self {
            pattern: pattern.into(),
            input: input.into(),
            expected,
        }
    }

    pub fn compile(&self) -> Result<Regex> {
        Ok(Regex::new(&self.pattern)?)
    }

    pub fn evaluate(&self) -> Result<bool> {
        Ok(self.compile()?.is_match(&self.input))
    }
}

pub fn builtin_cases() -> Vec<PatternCase> {
    vec![
        // 只要部分符合即可
        PatternCase::new("good", "Today is a very good day", true),
        // 錨定後必須完全符合
        PatternCase::new("^excellent$", "excellentzzz", false),
        PatternCase::new("code is [a-zA-Z]+[1-9]", "hello there the code is f5", true),
        PatternCase::new("code is [a-zA-Z]+[1-9]", "hello there the code is fxxxxx5", true),
        PatternCase::new("code is [a-zA-Z]+[1-9]", "hello there the code is ff", false),
        PatternCase::new("[a-zA-Z0-9]+", "fbHj2r:3bQ39:", true),
    ]
}

/// All non-overlapping matches, left to right.
pub fn find_all(pattern: &str, input: &str) -> Result<Vec<String>> {
    let re = Regex::new(pattern)?;
    Ok(re
        .find_iter(input)
        .map(|found| found.as_str().to_string())
        .collect())
}

pub struct PatternsLesson {
    cases: Vec<PatternCase>,
}

impl PatternsLesson {
    pub fn new(extra_cases: Vec<PatternCase>) -> Self {
        let mut cases = builtin_cases();
        cases.extend(extra_cases);
        Self { cases }
    }
}

impl Default for PatternsLesson {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl Lesson for PatternsLesson {
    fn name(&self) -> &'static str {
        "patterns"
    }

    fn topic(&self) -> Topic {
        Topic::Patterns
    }

    fn summary(&self) -> &'static str {
        "Containment, anchors, character classes and quantifiers"
    }

    async fn run(&self, console: &dyn Console) -> Result<()> {
        let mut mismatches = Vec::new();

        for case in &self.cases {
            let matched = case.evaluate()?;
            console.line(&format!("/{}/ ~ \"{}\" => {}", case.pattern, case.input, matched));

            if matched != case.expected {
                tracing::warn!(
                    "Pattern /{}/ on \"{}\" expected {} but got {}",
                    case.pattern,
                    case.input,
                    case.expected,
                    matched
                );
                mismatches.push(case.pattern.clone());
            }
        }

        let words = find_all("[a-zA-Z0-9]+", "fbHj2r:3bQ39:")?;
        console.line(&format!("{:?}", words));

        if mismatches.is_empty() {
            Ok(())
        } else {
            Err(LessonError::LessonFailed {
                lesson: self.name().to_string(),
                message: format!("unexpected result for {}", mismatches.join(", ")),
            })
        }
    }
}
