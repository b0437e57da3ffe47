use crate::core::catalog::LESSON_NAMES;
use crate::lessons::callbacks::{Video, Viewer};
use crate::lessons::patterns::PatternCase;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_known_names, validate_non_empty_list, validate_non_empty_string,
    validate_positive_number, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_VIDEO_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonConfig {
    pub runner: RunnerConfig,
    pub requests: RequestsConfig,
    pub viewer: Viewer,
    pub videos: Vec<Video>,
    pub calories: CaloriesConfig,
    pub patterns: Vec<PatternCase>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub lessons: Vec<String>,
    pub monitor: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestsConfig {
    pub location: String,
    pub failing_location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaloriesConfig {
    pub max: u64,
    pub meals: Vec<u64>,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            runner: RunnerConfig::default(),
            requests: RequestsConfig::default(),
            viewer: Viewer::default(),
            videos: vec![
                Video::new("Video 1 recorded", 50),
                Video::new("Video 2 recorded", 30),
                Video::new("Video 3 recorded", 80),
            ],
            calories: CaloriesConfig::default(),
            patterns: Vec::new(),
        }
    }
}

impl Default for RequestsConfig {
    fn default() -> Self {
        Self {
            location: "Google".to_string(),
            failing_location: "facebook".to_string(),
        }
    }
}

impl Default for CaloriesConfig {
    fn default() -> Self {
        Self {
            max: 2000,
            meals: vec![400, 1200, 750],
        }
    }
}

impl LessonConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LOCATION})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得要執行的課程；未指定時回傳全部
    pub fn selected_lessons(&self) -> Vec<String> {
        if self.runner.lessons.is_empty() {
            LESSON_NAMES.iter().map(|name| name.to_string()).collect()
        } else {
            self.runner.lessons.clone()
        }
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.runner.monitor
    }
}

impl Validate for LessonConfig {
    fn validate(&self) -> Result<()> {
        validate_known_names(&self.runner.lessons, LESSON_NAMES)?;

        validate_non_empty_string("requests.location", &self.requests.location)?;
        validate_non_empty_string(
            "requests.failing_location",
            &self.requests.failing_location,
        )?;

        validate_non_empty_list("videos", &self.videos)?;
        for video in &self.videos {
            validate_non_empty_string("videos.label", &video.label)?;
            validate_range("videos.delay_ms", video.delay_ms, 0, MAX_VIDEO_DELAY_MS)?;
        }

        validate_positive_number("calories.max", self.calories.max, 1)?;

        // 額外的正規表達式必須能編譯
        for case in &self.patterns {
            case.compile()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LessonError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = LessonConfig::from_toml_str("").unwrap();

        assert_eq!(config.requests.location, "Google");
        assert_eq!(config.requests.failing_location, "facebook");
        assert_eq!(config.videos.len(), 3);
        assert_eq!(config.videos[1].delay_ms, 30);
        assert_eq!(config.calories.max, 2000);
        assert_eq!(config.selected_lessons().len(), LESSON_NAMES.len());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml_content = r#"
[runner]
lessons = ["async-await", "patterns"]
monitor = true

[requests]
location = "Google"

[viewer]
user_left = true

[[videos]]
label = "Only video"
delay_ms = 5
"#;

        let config = LessonConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.selected_lessons(), vec!["async-await", "patterns"]);
        assert!(config.monitoring_enabled());
        assert_eq!(config.requests.failing_location, "facebook");
        assert!(config.viewer.user_left);
        assert!(!config.viewer.watching_money_heist);
        assert_eq!(config.videos.len(), 1);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("IDIOM_LAB_TEST_LOCATION", "Google");

        let toml_content = r#"
[requests]
location = "${IDIOM_LAB_TEST_LOCATION}"
failing_location = "${IDIOM_LAB_UNSET_VARIABLE}"
"#;

        let config = LessonConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.requests.location, "Google");
        assert_eq!(
            config.requests.failing_location,
            "${IDIOM_LAB_UNSET_VARIABLE}"
        );

        std::env::remove_var("IDIOM_LAB_TEST_LOCATION");
    }

    #[test]
    fn test_unknown_lesson_is_rejected() {
        let config = LessonConfig::from_toml_str("[runner]\nlessons = [\"juggling\"]\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, LessonError::UnknownLesson { .. }));
    }

    #[test]
    fn test_config_validation_limits() {
        let too_slow = r#"
[[videos]]
label = "Slow video"
delay_ms = 60000
"#;
        let config = LessonConfig::from_toml_str(too_slow).unwrap();
        assert!(config.validate().is_err());

        let no_calories = "[calories]\nmax = 0\n";
        let config = LessonConfig::from_toml_str(no_calories).unwrap();
        assert!(config.validate().is_err());

        let bad_pattern = r#"
[[patterns]]
pattern = "code is ["
input = "code is f5"
expected = true
"#;
        let config = LessonConfig::from_toml_str(bad_pattern).unwrap();
        assert!(matches!(
            config.validate(),
            Err(LessonError::PatternError(_))
        ));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = LessonConfig::from_toml_str("[runner\nlessons = 3").unwrap_err();
        assert!(matches!(err, LessonError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[calories]
max = 1500
meals = [500, 500, 600]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = LessonConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.calories.max, 1500);
        assert_eq!(config.calories.meals, vec![500, 500, 600]);
    }
}
