use crate::core::{Result, WorkJob, WorkReport};
use crate::utils::validation::{
    validate_at_least, validate_finite, validate_non_empty_string, Validate,
};

impl Validate for WorkJob {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("job name", &self.name)?;
        validate_at_least("iterations", self.iterations, 0)?;
        validate_finite("data", &self.data)?;
        Ok(())
    }
}

pub fn run_job(job: &WorkJob, report_progress: &mut dyn FnMut(i32) -> i32) -> Result<WorkReport> {
    job.validate()?;

    tracing::info!("Starting job '{}' ({} iterations)", job.name, job.iterations);

    // responses grow with the run; iterations is caller-controlled
    let mut responses = Vec::new();
    for i in 1..=job.iterations {
        tracing::info!("Beginning work iteration {}", i);

        // 模擬工作耗時
        if !job.iteration_delay.is_zero() {
            std::thread::sleep(job.iteration_delay);
        }

        let response = report_progress(i);
        tracing::info!("Received response [{}] from progress function", response);
        responses.push(response);
    }

    tracing::info!("Data received: {}", format_data(&job.data));

    Ok(WorkReport {
        job: job.name.clone(),
        iterations: job.iterations,
        responses,
        data: job.data.clone(),
        message: format!("Job {} completed successfully", job.name),
    })
}

pub fn format_data(data: &[f64]) -> String {
    data.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LibraryError;

    #[test]
    fn test_callback_called_in_order() {
        let job = WorkJob::new("Test job", 5, vec![0.0, 0.25, 0.5, 0.75]);
        let mut seen = Vec::new();
        let report = run_job(&job, &mut |p| {
            seen.push(p);
            -p
        })
        .unwrap();

        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
        assert_eq!(report.responses, vec![-1, -2, -3, -4, -5]);
        assert_eq!(report.message, "Job Test job completed successfully");
        assert_eq!(report.data, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_zero_iterations_skips_callback() {
        let job = WorkJob::new("noop", 0, vec![]);
        let mut calls = 0;
        let report = run_job(&job, &mut |p| {
            calls += 1;
            p
        })
        .unwrap();

        assert_eq!(calls, 0);
        assert!(report.responses.is_empty());
    }

    #[test]
    fn test_rejects_invalid_jobs() {
        let blank = WorkJob::new("  ", 1, vec![]);
        assert!(matches!(
            run_job(&blank, &mut |p| p),
            Err(LibraryError::InvalidArgument { .. })
        ));

        let negative = WorkJob::new("job", -1, vec![]);
        match run_job(&negative, &mut |p| p) {
            Err(LibraryError::InvalidArgument { field, .. }) => assert_eq!(field, "iterations"),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_job_runs_until_callback_stops_it() {
        let job = WorkJob::new("big", i32::MAX, vec![]);
        let mut seen = Vec::new();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            run_job(&job, &mut |p| {
                seen.push(p);
                if p >= 3 {
                    panic!("stop after three iterations");
                }
                p
            })
        }));

        assert!(outcome.is_err());
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_format_data() {
        assert_eq!(format_data(&[0.0, 0.25, 0.5, 0.75]), "0, 0.25, 0.5, 0.75");
        assert_eq!(format_data(&[]), "");
    }
}
