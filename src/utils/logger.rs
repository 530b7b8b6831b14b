use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// stdout carries the program's result lines, so every subscriber writes to stderr.
// Each binary installs exactly one subscriber; a second install panics.

/// Quiet logger for the entry point: warnings only unless `RUST_LOG` says otherwise.
pub fn init_entry_logger() {
    let filter = env_filter_or("managed_library=warn".to_string());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = env_filter_or(default_directives(verbose, level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    let filter = env_filter_or(default_directives(verbose, level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // 結構化輸出，方便收集
        )
        .init();
}

fn env_filter_or(directives: String) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

fn default_directives(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "managed_library=debug,info".to_string(),
        (false, Some(level)) => format!("managed_library={}", level),
        (false, None) => "managed_library=info".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(false, None), "managed_library=info");
        assert_eq!(default_directives(false, Some("warn")), "managed_library=warn");
        assert_eq!(
            default_directives(true, Some("warn")),
            "managed_library=debug,info"
        );
    }
}
