use anyhow::Result;
use idiom_lab::core::runner::first_failure;
use idiom_lab::utils::error::ErrorSeverity;
use idiom_lab::utils::validation::Validate;
use idiom_lab::{catalog, LessonConfig, LessonRunner, Transcript};
use tempfile::TempDir;

#[tokio::test]
async fn test_config_file_drives_lessons() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("lessons.toml");

    let config_content = r#"
[runner]
lessons = ["callbacks", "async-await"]

[requests]
location = "Yahoo"
failing_location = "Bing"

[viewer]
user_left = true

[[videos]]
label = "Slow take"
delay_ms = 40

[[videos]]
label = "Quick take"
delay_ms = 5
"#;
    tokio::fs::write(&config_path, config_content).await?;

    let config = LessonConfig::from_file(&config_path)?;
    config.validate()?;

    let lessons = catalog::select(&config)?;
    let reports = LessonRunner::new(Transcript::new()).run(&lessons).await;

    assert!(reports.iter().all(|report| report.passed()));

    let callbacks = &reports[0].lines;
    assert_eq!(callbacks[0], "User left :(");
    assert_eq!(callbacks[2], "User left :(");
    assert_eq!(callbacks[3], r#"["Slow take", "Quick take"]"#);
    assert_eq!(callbacks[4], "Quick take");

    // 兩個地點都不是 Google，所以每次請求都被拒絕
    assert_eq!(
        reports[1].lines,
        vec![
            "Making request to Yahoo",
            "We can only talk to Google",
            "Making request to Yahoo",
            "We can only talk to Google",
            "Making request to Bing",
            "We can only talk to Google",
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_wrong_pattern_expectation_fails_run() -> Result<()> {
    let config = LessonConfig::from_toml_str(
        r#"
[runner]
lessons = ["patterns", "solid-ocp"]

[[patterns]]
pattern = "^\\d+$"
input = "12a"
expected = true
"#,
    )?;
    config.validate()?;

    let lessons = catalog::select(&config)?;
    let reports = LessonRunner::new(Transcript::new()).run(&lessons).await;

    assert!(!reports[0].passed());
    // 後面的課程仍然會執行
    assert!(reports[1].passed());

    let err = first_failure(&reports).expect("patterns lesson should fail");
    assert_eq!(err.severity(), ErrorSeverity::Medium);
    assert!(err.to_string().contains("patterns"));

    Ok(())
}

#[test]
fn test_missing_config_file() {
    let err = LessonConfig::from_file("/definitely/not/here/lessons.toml").unwrap_err();
    assert_eq!(err.severity(), ErrorSeverity::Critical);
}
