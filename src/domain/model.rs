use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_JOB_NAME: &str = "Test job";
pub const DEFAULT_ITERATIONS: i32 = 5;
pub const DEFAULT_DATA: [f64; 4] = [0.0, 0.25, 0.5, 0.75];
pub const DEFAULT_ITERATION_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkJob {
    pub name: String,
    pub iterations: i32,
    pub data: Vec<f64>,
    pub iteration_delay: Duration,
}

impl WorkJob {
    pub fn new(name: impl Into<String>, iterations: i32, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            iterations,
            data,
            iteration_delay: Duration::ZERO,
        }
    }

    pub fn with_iteration_delay(mut self, delay: Duration) -> Self {
        self.iteration_delay = delay;
        self
    }
}

impl Default for WorkJob {
    fn default() -> Self {
        Self::new(DEFAULT_JOB_NAME, DEFAULT_ITERATIONS, DEFAULT_DATA.to_vec())
            .with_iteration_delay(Duration::from_millis(DEFAULT_ITERATION_DELAY_MS))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkReport {
    pub job: String,
    pub iterations: i32,
    pub responses: Vec<i32>,
    pub data: Vec<f64>,
    pub message: String,
}
