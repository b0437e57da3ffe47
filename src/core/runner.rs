use crate::domain::model::{LessonReport, Outcome, Transcript};
use crate::domain::ports::{Console, Lesson};
use crate::utils::error::LessonError;
use crate::utils::monitor::SystemMonitor;
use chrono::Utc;
use std::time::Instant;

pub struct LessonRunner<C: Console> {
    console: C,
    monitor: SystemMonitor,
}

impl<C: Console> LessonRunner<C> {
    pub fn new(console: C) -> Self {
        Self::new_with_monitoring(console, false)
    }

    pub fn new_with_monitoring(console: C, monitor_enabled: bool) -> Self {
        Self {
            console,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// 執行單一課程；課程失敗會記錄在報告中而不是中斷
    pub async fn run_lesson(&self, lesson: &dyn Lesson) -> LessonReport {
        tracing::info!("▶️ {} ({})", lesson.name(), lesson.topic());

        let started_at = Utc::now();
        let start = Instant::now();
        let transcript = Transcript::tee(&self.console);

        let result = lesson.run(&transcript).await;
        let elapsed_ms = start.elapsed().as_millis();
        let lines = transcript.into_lines();

        let outcome = match result {
            Ok(()) => {
                tracing::debug!("{} printed {} lines in {}ms", lesson.name(), lines.len(), elapsed_ms);
                Outcome::Passed
            }
            Err(e) => {
                tracing::error!(
                    "❌ Lesson {} failed: {} (Category: {:?}, Severity: {:?})",
                    lesson.name(),
                    e,
                    e.category(),
                    e.severity()
                );
                Outcome::Failed(e.to_string())
            }
        };

        if self.monitor.is_enabled() {
            self.monitor.log_stats(lesson.name());
        }

        LessonReport {
            lesson: lesson.name().to_string(),
            topic: lesson.topic(),
            started_at,
            elapsed_ms,
            lines,
            outcome,
        }
    }

    pub async fn run(&self, lessons: &[Box<dyn Lesson>]) -> Vec<LessonReport> {
        tracing::info!("Running {} lesson(s)", lessons.len());

        let mut reports = Vec::with_capacity(lessons.len());
        for (index, lesson) in lessons.iter().enumerate() {
            if index > 0 {
                self.console.blank();
            }
            self.console.line(&format!("== {} ==", lesson.name()));
            reports.push(self.run_lesson(lesson.as_ref()).await);
        }

        if self.monitor.is_enabled() {
            self.monitor.log_final_stats();
        }

        reports
    }
}

/// 第一個失敗的課程轉成錯誤，方便決定結束碼
pub fn first_failure(reports: &[LessonReport]) -> Option<LessonError> {
    reports.iter().find_map(|report| match &report.outcome {
        Outcome::Passed => None,
        Outcome::Failed(message) => Some(LessonError::LessonFailed {
            lesson: report.lesson.clone(),
            message: message.clone(),
        }),
    })
}
