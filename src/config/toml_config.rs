use crate::domain::model::{
    WorkJob, DEFAULT_DATA, DEFAULT_ITERATIONS, DEFAULT_ITERATION_DELAY_MS, DEFAULT_JOB_NAME,
};
use crate::utils::error::{LibraryError, Result};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MAX_ITERATION_DELAY_MS: u64 = 60_000;
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub job: JobConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    pub name: Option<String>,
    pub iterations: Option<i32>,
    pub data: Option<Vec<f64>>,
    pub iteration_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| LibraryError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${JOB_NAME})，未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LibraryError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 由檔案內容建立工作，缺少的欄位使用預設值
    pub fn to_job(&self) -> WorkJob {
        WorkJob::new(
            self.job
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_JOB_NAME.to_string()),
            self.job.iterations.unwrap_or(DEFAULT_ITERATIONS),
            self.job.data.clone().unwrap_or_else(|| DEFAULT_DATA.to_vec()),
        )
        .with_iteration_delay(Duration::from_millis(
            self.job
                .iteration_delay_ms
                .unwrap_or(DEFAULT_ITERATION_DELAY_MS),
        ))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let as_config_error = |e: LibraryError| match e {
            LibraryError::InvalidArgument { field, reason, .. } => {
                LibraryError::ConfigValidationError {
                    field: format!("job.{}", field),
                    message: reason,
                }
            }
            other => other,
        };

        if let Some(name) = &self.job.name {
            crate::utils::validation::validate_non_empty_string("name", name)
                .map_err(as_config_error)?;
        }
        if let Some(iterations) = self.job.iterations {
            crate::utils::validation::validate_at_least("iterations", iterations, 0)
                .map_err(as_config_error)?;
        }
        if let Some(delay) = self.job.iteration_delay_ms {
            crate::utils::validation::validate_range(
                "iteration_delay_ms",
                delay,
                0,
                MAX_ITERATION_DELAY_MS,
            )
            .map_err(as_config_error)?;
        }
        if let Some(data) = &self.job.data {
            crate::utils::validation::validate_finite("data", data).map_err(as_config_error)?;
        }

        if let Some(level) = &self.logging.level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(LibraryError::ConfigValidationError {
                    field: "logging.level".to_string(),
                    message: format!(
                        "Unknown level '{}'. Valid levels: {}",
                        level,
                        LOG_LEVELS.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}
