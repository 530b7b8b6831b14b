pub mod entry_point;
pub mod library;
pub mod worker;
pub mod worker_host;

pub use crate::domain::model::{WorkJob, WorkReport};
pub use crate::domain::ports::{NumberComponent, Worker};
pub use crate::utils::error::Result;
