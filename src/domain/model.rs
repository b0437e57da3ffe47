use crate::domain::ports::Console;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Async,
    Destructuring,
    Patterns,
    Solid,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Topic::Async => "async",
            Topic::Destructuring => "destructuring",
            Topic::Patterns => "patterns",
            Topic::Solid => "solid",
        };
        f.pad(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonReport {
    pub lesson: String,
    pub topic: Topic,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u128,
    pub lines: Vec<String>,
    pub outcome: Outcome,
}

impl LessonReport {
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }
}

/// 把寫入的每一行收集起來，可選擇同時轉送給另一個 console
#[derive(Default)]
pub struct Transcript<'a> {
    lines: Mutex<Vec<String>>,
    forward: Option<&'a dyn Console>,
}

impl<'a> Transcript<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tee(forward: &'a dyn Console) -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
            forward: Some(forward),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines.into_inner().unwrap_or_default()
    }
}

impl Console for Transcript<'_> {
    fn line(&self, text: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(text.to_string());
        }
        if let Some(forward) = self.forward {
            forward.line(text);
        }
    }
}
