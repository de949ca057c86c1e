use std::error::Error;
use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Initialize tracing output for the process.
///
/// The dashboard owns stdout/stderr while the alternate screen is active, so
/// diagnostics go to a file when one is given and are discarded otherwise.
/// Filtering follows `MATCHDAY_LOG` (EnvFilter syntax), defaulting to `info`.
pub fn init_logging(log_file: Option<&str>) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env("MATCHDAY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
    }
    Ok(())
}
