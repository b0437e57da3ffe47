//! Callbacks, single futures, and the two classic combinators:
//! wait for every future (`join_all`) and take whichever finishes first
//! (`select_all`).

use crate::domain::model::Topic;
use crate::domain::ports::{Console, Lesson};
use crate::utils::error::{Result, TutorialError};
use async_trait::async_trait;
use futures::future::{join_all, select_all};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const SUBSCRIBE_MESSAGE: &str = "Thumbs up and subscribe!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewer {
    pub user_left: bool,
    pub watching_money_heist: bool,
}

fn tutorial_outcome(viewer: Viewer) -> std::result::Result<&'static str, TutorialError> {
    // 離開優先於其他狀態
    if viewer.user_left {
        Err(TutorialError::new("User left", ":("))
    } else if viewer.watching_money_heist {
        Err(TutorialError::new("User watching Money Heist", "It's fun though"))
    } else {
        Ok(SUBSCRIBE_MESSAGE)
    }
}

/// Callback style: exactly one of the two closures is called.
pub fn watch_tutorial_callback<S, E>(viewer: Viewer, on_success: S, on_error: E)
where
    S: FnOnce(&str),
    E: FnOnce(&TutorialError),
{
    match tutorial_outcome(viewer) {
        Ok(message) => on_success(message),
        Err(error) => on_error(&error),
    }
}

/// The same decision expressed as a future.
pub async fn watch_tutorial(viewer: Viewer) -> std::result::Result<&'static str, TutorialError> {
    tutorial_outcome(viewer)
}

pub async fn basic_promise() -> std::result::Result<&'static str, &'static str> {
    let a = 1 + 1;
    if a == 2 {
        Ok("Success")
    } else {
        Err("Failed")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub label: String,
    pub delay_ms: u64,
}

impl Video {
    pub fn new(label: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            label: label.into(),
            delay_ms,
        }
    }

    pub async fn record(&self) -> String {
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        tracing::debug!("{} after {}ms", self.label, self.delay_ms);
        self.label.clone()
    }
}

/// Runs every recording concurrently. Results keep the input order,
/// not the completion order.
pub async fn wait_for_all(videos: &[Video]) -> Vec<String> {
    join_all(videos.iter().map(Video::record)).await
}

pub async fn first_to_finish(videos: &[Video]) -> Option<String> {
    if videos.is_empty() {
        return None;
    }

    let recordings = videos.iter().map(|video| Box::pin(video.record()));
    let (label, index, _still_running) = select_all(recordings).await;
    tracing::debug!("Recording #{} finished first", index);
    Some(label)
}

pub struct CallbacksLesson {
    viewer: Viewer,
    videos: Vec<Video>,
}

impl CallbacksLesson {
    pub fn new(viewer: Viewer, videos: Vec<Video>) -> Self {
        Self { viewer, videos }
    }
}

#[async_trait]
impl Lesson for CallbacksLesson {
    fn name(&self) -> &'static str {
        "callbacks"
    }

    fn topic(&self) -> Topic {
        Topic::Async
    }

    fn summary(&self) -> &'static str {
        "Callbacks, futures, wait-for-all and first-to-finish"
    }

    async fn run(&self, console: &dyn Console) -> Result<()> {
        watch_tutorial_callback(
            self.viewer,
            |message| console.line(&format!("Success: {}", message)),
            |error| console.line(&error.to_string()),
        );

        match basic_promise().await {
            Ok(message) => console.line(&format!("This is the then {}", message)),
            Err(message) => console.line(&format!("This is in the catch {}", message)),
        }

        match watch_tutorial(self.viewer).await {
            Ok(message) => console.line(&format!("Success: {}", message)),
            Err(error) => console.line(&error.to_string()),
        }

        let recorded = wait_for_all(&self.videos).await;
        console.line(&format!("{:?}", recorded));

        if let Some(first) = first_to_finish(&self.videos).await {
            console.line(&first);
        }

        Ok(())
    }
}
