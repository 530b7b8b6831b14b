use crate::core::worker::run_job;
use crate::core::{NumberComponent, Result, WorkJob, WorkReport, Worker};

/// The component handed to hosts. It carries no state; every instance
/// answers identically.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManagedLibrary;

impl ManagedLibrary {
    pub fn new() -> Self {
        Self
    }
}

impl NumberComponent for ManagedLibrary {
    fn get_number(&self, value: i32) -> i32 {
        tracing::debug!("GetNumber({})", value);
        value
    }
}

impl Worker for ManagedLibrary {
    fn bool_return(&self) -> bool {
        true
    }

    fn do_work(
        &self,
        job: &WorkJob,
        report_progress: &mut dyn FnMut(i32) -> i32,
    ) -> Result<WorkReport> {
        run_job(job, report_progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_number_is_identity() {
        let library = ManagedLibrary::new();
        assert_eq!(library.get_number(10), 10);
        assert_eq!(library.get_number(0), 0);
        assert_eq!(library.get_number(-42), -42);
        assert_eq!(library.get_number(i32::MAX), i32::MAX);
        assert_eq!(library.get_number(i32::MIN), i32::MIN);
    }

    #[test]
    fn test_get_number_is_deterministic() {
        let library = ManagedLibrary::new();
        let first = library.get_number(7);
        for _ in 0..100 {
            assert_eq!(library.get_number(7), first);
        }
    }

    #[test]
    fn test_instances_agree() {
        let results: Vec<i32> = (0..5).map(|_| ManagedLibrary::new().get_number(10)).collect();
        assert!(results.iter().all(|&n| n == 10));
    }

    #[test]
    fn test_bool_return() {
        assert!(ManagedLibrary::default().bool_return());
    }
}
