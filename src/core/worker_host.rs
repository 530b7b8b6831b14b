use crate::core::{Result, WorkJob, WorkReport, Worker};
use crate::domain::model::OutputFormat;
use crate::utils::error::LibraryError;
use std::io::Write;

/// Checks `bool_return`, runs `job` through `do_work` and renders the outcome to `out`.
///
/// In text mode every progress report is echoed as
/// `Received status from managed code: <p>` and answered with `-p`.
/// JSON mode writes only the serialized report so `out` stays parseable.
pub fn run_worker_host<W: Worker + ?Sized, O: Write>(
    worker: &W,
    job: &WorkJob,
    format: OutputFormat,
    out: &mut O,
) -> Result<WorkReport> {
    // 簡單函數
    if !worker.bool_return() {
        return Err(LibraryError::OperationFailed {
            operation: "BoolReturn".to_string(),
            message: "got the wrong result from the delegate function".to_string(),
        });
    }

    let report = match format {
        OutputFormat::Text => {
            writeln!(out, "SUCCESS: Simple Function executed properly.")?;

            // 回呼無法回傳錯誤，先記下第一個寫入失敗
            let mut write_error = None;
            let report = worker.do_work(job, &mut |progress: i32| {
                if write_error.is_none() {
                    if let Err(e) =
                        writeln!(out, "Received status from managed code: {}", progress)
                    {
                        write_error = Some(e);
                    }
                }
                -progress
            })?;
            if let Some(e) = write_error {
                return Err(e.into());
            }

            writeln!(
                out,
                "SUCCESS: Complex Function executed properly. Return = {}",
                report.message
            )?;
            writeln!(out, "SUCCESS.")?;
            report
        }
        OutputFormat::Json => {
            let report = worker.do_work(job, &mut |progress: i32| -progress)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            report
        }
    };

    Ok(report)
}
