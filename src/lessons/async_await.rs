//! A request that only succeeds for one location, followed by a dependent
//! processing step. Composed once with combinators and once with
//! sequential `.await`.

use crate::domain::model::Topic;
use crate::domain::ports::{Console, Lesson};
use crate::utils::error::{LessonError, Result};
use async_trait::async_trait;
use futures::TryFutureExt;

pub const SUPPORTED_LOCATION: &str = "Google";

pub async fn make_request(location: &str, console: &dyn Console) -> Result<String> {
    console.line(&format!("Making request to {}", location));
    if location == SUPPORTED_LOCATION {
        Ok("Google says hi!".to_string())
    } else {
        Err(LessonError::rejected("We can only talk to Google"))
    }
}

pub async fn process_request(response: String, console: &dyn Console) -> Result<String> {
    console.line("Processing response");
    Ok(format!("Extra information + {}", response))
}

/// Continuation handlers attached to the request future. A failure
/// anywhere in the chain lands in the final error handler.
pub async fn chained(location: &str, console: &dyn Console) -> Option<String> {
    make_request(location, console)
        .inspect_ok(|_| console.line("Response received"))
        .and_then(|response| process_request(response, console))
        .inspect_ok(|processed| console.line(processed))
        .inspect_err(|err| console.line(&err.to_string()))
        .await
        .ok()
}

pub async fn request_and_process(location: &str, console: &dyn Console) -> Result<String> {
    let response = make_request(location, console).await?;
    console.line("Response received");
    let processed = process_request(response, console).await?;
    console.line(&processed);
    Ok(processed)
}

/// Sequential awaits with a single interception point.
pub async fn sequential(location: &str, console: &dyn Console) -> Option<String> {
    match request_and_process(location, console).await {
        Ok(processed) => Some(processed),
        Err(err) => {
            tracing::debug!("Request intercepted: {:?}", err);
            console.line(&err.to_string());
            None
        }
    }
}

pub struct AsyncAwaitLesson {
    location: String,
    failing_location: String,
}

impl AsyncAwaitLesson {
    pub fn new(location: impl Into<String>, failing_location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            failing_location: failing_location.into(),
        }
    }
}

#[async_trait]
impl Lesson for AsyncAwaitLesson {
    fn name(&self) -> &'static str {
        "async-await"
    }

    fn topic(&self) -> Topic {
        Topic::Async
    }

    fn summary(&self) -> &'static str {
        "Chained continuations versus sequential await with error interception"
    }

    async fn run(&self, console: &dyn Console) -> Result<()> {
        chained(&self.location, console).await;
        sequential(&self.location, console).await;
        sequential(&self.failing_location, console).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Transcript;

    #[tokio::test]
    async fn test_make_request_only_talks_to_google() {
        let transcript = Transcript::new();

        let ok = make_request("Google", &transcript).await.unwrap();
        assert_eq!(ok, "Google says hi!");

        let err = make_request("facebook", &transcript).await.unwrap_err();
        assert_eq!(err.to_string(), "We can only talk to Google");

        assert_eq!(
            transcript.into_lines(),
            vec!["Making request to Google", "Making request to facebook"]
        );
    }

    #[tokio::test]
    async fn test_chained_success() {
        let transcript = Transcript::new();
        let processed = chained("Google", &transcript).await;

        assert_eq!(processed.as_deref(), Some("Extra information + Google says hi!"));
        assert_eq!(
            transcript.into_lines(),
            vec![
                "Making request to Google",
                "Response received",
                "Processing response",
                "Extra information + Google says hi!",
            ]
        );
    }

    #[tokio::test]
    async fn test_chained_failure_skips_processing() {
        let transcript = Transcript::new();
        assert!(chained("Bing", &transcript).await.is_none());
        assert_eq!(
            transcript.into_lines(),
            vec!["Making request to Bing", "We can only talk to Google"]
        );
    }

    #[tokio::test]
    async fn test_sequential_matches_chained() {
        let chained_lines = Transcript::new();
        let sequential_lines = Transcript::new();

        chained("Google", &chained_lines).await;
        sequential("Google", &sequential_lines).await;

        assert_eq!(chained_lines.into_lines(), sequential_lines.into_lines());
    }

    #[tokio::test]
    async fn test_request_and_process_propagates_rejection() {
        let transcript = Transcript::new();
        let err = request_and_process("facebook", &transcript)
            .await
            .unwrap_err();
        assert!(matches!(err, LessonError::Rejected { .. }));
    }

    #[tokio::test]
    async fn test_lesson_output() {
        let transcript = Transcript::new();
        AsyncAwaitLesson::new("Google", "facebook")
            .run(&transcript)
            .await
            .unwrap();

        let lines = transcript.into_lines();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[8], "Making request to facebook");
        assert_eq!(lines[9], "We can only talk to Google");
    }
}
