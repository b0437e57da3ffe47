use clap::Parser;
use idiom_lab::core::runner::first_failure;
use idiom_lab::utils::error::ErrorSeverity;
use idiom_lab::utils::{logger, validation::Validate};
use idiom_lab::{catalog, CliConfig, LessonError, LessonRunner, SilentConsole, StdoutConsole};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting idiom-lab");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    // 載入並驗證配置
    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    if args.list {
        for lesson in catalog::catalog(&config)? {
            println!(
                "{:<14} {:<14} {}",
                lesson.name(),
                lesson.topic(),
                lesson.summary()
            );
        }
        return Ok(());
    }

    let lessons = match catalog::select(&config) {
        Ok(lessons) => lessons,
        Err(e) => exit_with(&e),
    };

    let monitor_enabled = config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let reports = if args.json {
        let runner = LessonRunner::new_with_monitoring(SilentConsole, monitor_enabled);
        let reports = runner.run(&lessons).await;
        println!("{}", serde_json::to_string_pretty(&reports)?);
        reports
    } else {
        let runner = LessonRunner::new_with_monitoring(StdoutConsole::new(), monitor_enabled);
        runner.run(&lessons).await
    };

    match first_failure(&reports) {
        Some(e) => exit_with(&e),
        None => {
            tracing::info!("✅ {} lesson(s) finished", reports.len());
            Ok(())
        }
    }
}

fn exit_with(e: &LessonError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
