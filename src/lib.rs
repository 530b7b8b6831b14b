pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::WorkerConfig;

pub use config::toml_config::TomlConfig;
pub use crate::core::{
    entry_point::run_entry_point, library::ManagedLibrary, worker_host::run_worker_host,
};
pub use domain::model::{OutputFormat, WorkJob, WorkReport};
pub use domain::ports::{NumberComponent, Worker};
pub use utils::error::{LibraryError, Result};
