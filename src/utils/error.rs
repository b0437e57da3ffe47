use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// 教學範例中「失敗」的名稱與訊息組合
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialError {
    pub name: String,
    pub message: String,
}

impl TutorialError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for TutorialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.message)
    }
}

impl std::error::Error for TutorialError {}

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("{reason}")]
    Rejected { reason: String },

    #[error("{0}")]
    Tutorial(#[from] TutorialError),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown lesson: {name}")]
    UnknownLesson { name: String },

    #[error("Lesson '{lesson}' failed: {message}")]
    LessonFailed { lesson: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Lesson,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LessonError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TomlError(_) | Self::InvalidConfigValueError { .. } | Self::PatternError(_) => {
                ErrorCategory::Configuration
            }
            Self::UnknownLesson { .. } => ErrorCategory::Input,
            Self::Rejected { .. } | Self::Tutorial(_) | Self::LessonFailed { .. } => {
                ErrorCategory::Lesson
            }
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 被課程攔截的失敗只是示範
            Self::Rejected { .. } | Self::Tutorial(_) => ErrorSeverity::Low,
            Self::LessonFailed { .. } => ErrorSeverity::Medium,
            Self::TomlError(_)
            | Self::InvalidConfigValueError { .. }
            | Self::PatternError(_)
            | Self::UnknownLesson { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            Self::SerializationError(_) => "Could not render the lesson reports".to_string(),
            Self::PatternError(e) => format!("A regular expression did not compile: {}", e),
            Self::Rejected { reason } => format!("Request rejected: {}", reason),
            Self::Tutorial(e) => format!("Tutorial not finished: {}", e),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            Self::UnknownLesson { name } => format!("There is no lesson called '{}'", name),
            Self::LessonFailed { lesson, .. } => format!("Lesson '{}' did not finish", lesson),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the values in the configuration file",
            ErrorCategory::Input => "Run with --list to see the available lessons",
            ErrorCategory::Lesson => "Re-run with --verbose to see each step of the lesson",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tutorial_error_display() {
        let err = TutorialError::new("User left", ":(");
        assert_eq!(err.to_string(), "User left :(");

        let wrapped: LessonError = err.into();
        assert_eq!(wrapped.to_string(), "User left :(");
        assert_eq!(wrapped.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_rejected_message_is_the_reason() {
        let err = LessonError::rejected("We can only talk to Google");
        assert_eq!(err.to_string(), "We can only talk to Google");
        assert_eq!(err.category(), ErrorCategory::Lesson);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = LessonError::InvalidConfigValueError {
            field: "videos".to_string(),
            value: "[]".to_string(),
            reason: "at least one video is required".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("videos"));
    }
}
