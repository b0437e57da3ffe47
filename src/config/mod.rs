pub mod cli;
pub mod toml_config;

pub use toml_config::LessonConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "idiom-lab")]
#[command(about = "Runnable lessons on async flow, destructuring, regex and SOLID design")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Lessons to run (repeatable or comma separated); defaults to all
    #[arg(short, long, value_delimiter = ',')]
    pub lesson: Vec<String>,

    /// List the available lessons and exit
    #[arg(long)]
    pub list: bool,

    /// Print lesson reports as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Log CPU and memory usage after every lesson
    #[arg(long)]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入配置檔並套用命令列覆蓋設定
    pub fn resolve(&self) -> crate::utils::error::Result<LessonConfig> {
        let mut config = match &self.config {
            Some(path) => LessonConfig::from_file(path)?,
            None => LessonConfig::default(),
        };

        if !self.lesson.is_empty() {
            config.runner.lessons = self.lesson.clone();
        }
        if self.monitor {
            config.runner.monitor = true;
        }

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_lessons_override_config() {
        let args = CliConfig::parse_from(["idiom-lab", "--lesson", "patterns,solid-dip", "--monitor"]);
        let config = args.resolve().unwrap();

        assert_eq!(config.selected_lessons(), vec!["patterns", "solid-dip"]);
        assert!(config.monitoring_enabled());
    }

    #[test]
    fn test_cli_defaults() {
        let args = CliConfig::parse_from(["idiom-lab"]);
        assert!(!args.list);
        assert!(!args.json);

        let config = args.resolve().unwrap();
        assert!(config.runner.lessons.is_empty());
        assert!(!config.monitoring_enabled());
    }
}
