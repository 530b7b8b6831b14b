use managed_library::utils::logger;
use managed_library::{run_entry_point, ManagedLibrary};

// 命令列參數一律忽略
fn main() -> anyhow::Result<()> {
    logger::init_entry_logger();

    let library = ManagedLibrary::new();
    let stdout = std::io::stdout();
    let number = run_entry_point(&library, &mut stdout.lock())?;

    tracing::debug!("Entry point printed {}", number);
    Ok(())
}
