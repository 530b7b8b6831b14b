use crate::domain::model::{WorkJob, WorkReport};
use crate::utils::error::Result;

/// The narrow capability an entry point needs: one integer in, one integer out.
pub trait NumberComponent {
    fn get_number(&self, value: i32) -> i32;
}

pub trait Worker {
    fn bool_return(&self) -> bool;

    /// Runs `job`, calling `report_progress` once per iteration with the
    /// 1-based iteration number.
    fn do_work(
        &self,
        job: &WorkJob,
        report_progress: &mut dyn FnMut(i32) -> i32,
    ) -> Result<WorkReport>;
}
