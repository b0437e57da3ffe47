pub mod config;
pub mod core;
pub mod domain;
pub mod lessons;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{SilentConsole, StdoutConsole};
pub use config::LessonConfig;
pub use crate::core::{catalog, runner::LessonRunner};
pub use domain::model::{LessonReport, Outcome, Topic, Transcript};
pub use domain::ports::{Console, Lesson};
pub use utils::error::{LessonError, Result};
