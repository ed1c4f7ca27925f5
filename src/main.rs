//! Calendar text CLI application.
//!
//! # Usage
//! ```ignore
//! caltext                  // Current month
//! caltext 202403           // March 2024
//! caltext 202312 202402    // December 2023 through February 2024
//! caltext -v -l cal.log -p cal.pid 202401 202412
//! ```

use std::process::ExitCode;

use caltext::args::{Args, expand_path, resolve_range};
use caltext::logging::LogContext;
use caltext::pidfile::write_pid_file;
use caltext::{CalError, render_calendar};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = Args::parse();

    let result = LogContext::new(args.verbose, args.log_file.as_deref().map(expand_path))
        .and_then(|logging| {
            logging.scope(|| run(&args).inspect_err(|e| error!(error = %e, "failed")))
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("caltext: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<(), CalError> {
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    if let Some(path) = &args.pid_file {
        write_pid_file(&expand_path(path))?;
    }

    let (start, stop) = resolve_range(args)?;
    let text = render_calendar(start, stop)?;
    println!("{}", text);

    info!(%start, %stop, "done");
    Ok(())
}
