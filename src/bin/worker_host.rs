use clap::Parser;
use managed_library::utils::{logger, validation::Validate};
use managed_library::{run_worker_host, LibraryError, ManagedLibrary, WorkerConfig};

fn fail(e: &LibraryError) -> ! {
    tracing::error!("❌ Worker host failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let config = WorkerConfig::parse();

    // 日誌設定可能來自設定檔，因此先載入一次設定檔
    let file = match config.validate().and_then(|_| config.load_file()) {
        Ok(file) => file,
        Err(e) => fail(&e),
    };

    let logging = file.as_ref().map(|f| &f.logging);
    let level = logging.and_then(|l| l.level.as_deref());
    let json_logs = config.json_logs || logging.and_then(|l| l.json).unwrap_or(false);

    if json_logs {
        logger::init_json_logger(config.verbose, level);
    } else {
        logger::init_cli_logger(config.verbose, level);
    }

    tracing::info!("🚀 Starting worker host");
    if let Some(path) = &config.config {
        tracing::info!("📁 Loaded configuration from: {}", path);
    }

    let job = config.resolve_job(file.as_ref());
    tracing::debug!("Resolved job: {:?}", job);

    let library = ManagedLibrary::new();
    let stdout = std::io::stdout();
    if let Err(e) = run_worker_host(&library, &job, config.output, &mut stdout.lock()) {
        fail(&e);
    }

    tracing::info!("✅ Worker host finished");
    Ok(())
}
