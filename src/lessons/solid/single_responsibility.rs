use crate::domain::model::Topic;
use crate::domain::ports::{Console, Lesson};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const SURPLUS_MESSAGE: &str = "Max calories exceeded";

/// Counts calories. Reporting is delegated to the injected `report` closure.
pub struct CalorieTracker<R: Fn(&str)> {
    max_calories: u64,
    current_calories: u64,
    report: R,
}

impl<R: Fn(&str)> CalorieTracker<R> {
    pub fn new(max_calories: u64, report: R) -> Self {
        Self {
            max_calories,
            current_calories: 0,
            report,
        }
    }

    /// Returns whether the running total is now above the maximum.
    pub fn track(&mut self, calorie_count: u64) -> bool {
        self.current_calories = self.current_calories.saturating_add(calorie_count);
        let exceeded = self.current_calories > self.max_calories;
        if exceeded {
            (self.report)(SURPLUS_MESSAGE);
        }
        exceeded
    }

    pub fn current_calories(&self) -> u64 {
        self.current_calories
    }
}

pub struct SingleResponsibilityLesson {
    max_calories: u64,
    meals: Vec<u64>,
}

impl SingleResponsibilityLesson {
    pub fn new(max_calories: u64, meals: Vec<u64>) -> Self {
        Self {
            max_calories,
            meals,
        }
    }
}

#[async_trait]
impl Lesson for SingleResponsibilityLesson {
    fn name(&self) -> &'static str {
        "solid-srp"
    }

    fn topic(&self) -> Topic {
        Topic::Solid
    }

    fn summary(&self) -> &'static str {
        "Single responsibility: the tracker counts, a separate function reports"
    }

    async fn run(&self, console: &dyn Console) -> Result<()> {
        let mut tracker =
            CalorieTracker::new(self.max_calories, |message: &str| console.line(message));
        for meal in &self.meals {
            tracker.track(*meal);
        }
        tracing::debug!(
            "Tracked {} of {} calories",
            tracker.current_calories(),
            self.max_calories
        );
        Ok(())
    }
}
