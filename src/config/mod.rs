pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::WorkJob;
#[cfg(feature = "cli")]
use crate::utils::error::{LibraryError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_range, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::time::Duration;
#[cfg(feature = "cli")]
use self::toml_config::{TomlConfig, MAX_ITERATION_DELAY_MS};

pub use crate::domain::model::OutputFormat;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "worker-host")]
#[command(about = "Runs the managed library's worker operations with a native progress callback")]
pub struct WorkerConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub job_name: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub iterations: Option<i32>,

    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub data: Option<Vec<f64>>,

    #[arg(long)]
    pub iteration_delay_ms: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl WorkerConfig {
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }

    /// 命令列參數覆蓋檔案設定
    pub fn resolve_job(&self, file: Option<&TomlConfig>) -> WorkJob {
        let mut job = file.map(TomlConfig::to_job).unwrap_or_default();

        if let Some(name) = &self.job_name {
            job.name = name.clone();
        }
        if let Some(iterations) = self.iterations {
            job.iterations = iterations;
        }
        if let Some(data) = &self.data {
            job.data = data.clone();
        }
        if let Some(delay) = self.iteration_delay_ms {
            job.iteration_delay = Duration::from_millis(delay);
        }

        job
    }
}

#[cfg(feature = "cli")]
impl Validate for WorkerConfig {
    fn validate(&self) -> Result<()> {
        if let Some(delay) = self.iteration_delay_ms {
            validate_range("iteration_delay_ms", delay, 0, MAX_ITERATION_DELAY_MS)?;
        }
        if let Some(path) = &self.config {
            if path.trim().is_empty() {
                return Err(LibraryError::InvalidArgument {
                    field: "config".to_string(),
                    value: path.clone(),
                    reason: "Path cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorkerConfig::parse_from(["worker-host"]);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.resolve_job(None), WorkJob::default());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str("[job]\nname = \"From file\"\niterations = 2\n").unwrap();
        let config = WorkerConfig::parse_from([
            "worker-host",
            "--iterations",
            "7",
            "--data",
            "1,2,3",
            "--iteration-delay-ms",
            "0",
        ]);

        let job = config.resolve_job(Some(&file));
        assert_eq!(job.name, "From file");
        assert_eq!(job.iterations, 7);
        assert_eq!(job.data, vec![1.0, 2.0, 3.0]);
        assert!(job.iteration_delay.is_zero());
    }

    #[test]
    fn test_validate_delay_limit() {
        let config = WorkerConfig::parse_from(["worker-host", "--iteration-delay-ms", "999999"]);
        assert!(config.validate().is_err());
    }
}
