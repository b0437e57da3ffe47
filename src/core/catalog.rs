use crate::config::LessonConfig;
use crate::domain::ports::Lesson;
use crate::lessons::solid::{
    DependencyInversionLesson, InterfaceSegregationLesson, LiskovLesson, OpenClosedLesson,
    SingleResponsibilityLesson,
};
use crate::lessons::{
    AsyncAwaitLesson, CallbacksLesson, DestructuringLesson, PatternsLesson,
};
use crate::utils::error::{LessonError, Result};

/// 課程名稱，依預設執行順序排列
pub const LESSON_NAMES: &[&str] = &[
    "callbacks",
    "async-await",
    "destructuring",
    "patterns",
    "solid-srp",
    "solid-ocp",
    "solid-lsp",
    "solid-isp",
    "solid-dip",
];

pub fn build_lesson(name: &str, config: &LessonConfig) -> Result<Box<dyn Lesson>> {
    let lesson: Box<dyn Lesson> = match name {
        "callbacks" => Box::new(CallbacksLesson::new(config.viewer, config.videos.clone())),
        "async-await" => Box::new(AsyncAwaitLesson::new(
            config.requests.location.clone(),
            config.requests.failing_location.clone(),
        )),
        "destructuring" => Box::new(DestructuringLesson),
        "patterns" => Box::new(PatternsLesson::new(config.patterns.clone())),
        "solid-srp" => Box::new(SingleResponsibilityLesson::new(
            config.calories.max,
            config.calories.meals.clone(),
        )),
        "solid-ocp" => Box::new(OpenClosedLesson),
        "solid-lsp" => Box::new(LiskovLesson),
        "solid-isp" => Box::new(InterfaceSegregationLesson),
        "solid-dip" => Box::new(DependencyInversionLesson),
        other => {
            return Err(LessonError::UnknownLesson {
                name: other.to_string(),
            })
        }
    };
    Ok(lesson)
}

pub fn catalog(config: &LessonConfig) -> Result<Vec<Box<dyn Lesson>>> {
    LESSON_NAMES
        .iter()
        .map(|name| build_lesson(name, config))
        .collect()
}

/// 依配置挑選課程，保留使用者指定的順序
pub fn select(config: &LessonConfig) -> Result<Vec<Box<dyn Lesson>>> {
    config
        .selected_lessons()
        .iter()
        .map(|name| build_lesson(name, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_builds_a_matching_lesson() {
        let config = LessonConfig::default();
        let lessons = catalog(&config).unwrap();

        let names: Vec<&str> = lessons.iter().map(|lesson| lesson.name()).collect();
        assert_eq!(names, LESSON_NAMES);
    }

    #[test]
    fn test_select_keeps_requested_order() {
        let mut config = LessonConfig::default();
        config.runner.lessons = vec!["solid-dip".to_string(), "callbacks".to_string()];

        let names: Vec<&str> = select(&config)
            .unwrap()
            .iter()
            .map(|lesson| lesson.name())
            .collect();
        assert_eq!(names, vec!["solid-dip", "callbacks"]);
    }

    #[test]
    fn test_unknown_lesson() {
        let result = build_lesson("time-travel", &LessonConfig::default());
        assert!(matches!(result, Err(LessonError::UnknownLesson { name }) if name == "time-travel"));
    }
}
