pub mod catalog;
pub mod runner;

pub use crate::domain::model::{LessonReport, Outcome, Topic, Transcript};
pub use crate::domain::ports::{Console, Lesson};
pub use crate::utils::error::Result;
