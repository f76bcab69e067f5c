//! CLI entry point for the YSU GPA calculator.
//!
//! Computes the weighted grade-point average from a transcript CSV exported
//! by the registrar. Only regular-sitting exams of courses in the primary
//! program count, and degree courses weigh 1.2x in both credit and
//! grade-point.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use ysu_gpa::compute_gpa;
use ysu_gpa::output::{format_error, format_outcome, log_report_json};

#[derive(Parser)]
#[command(name = "ysu-gpa")]
#[command(
    about = "Compute the weighted GPA from a transcript CSV export",
    long_about = "Compute the weighted GPA from a transcript CSV export.\n\
                  Only regular-sitting exams of primary-program courses are counted; \
                  degree courses weigh 1.2x in credit and grade-point."
)]
struct Cli {
    /// Path to the transcript CSV (UTF-8 or GBK)
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: stderr, plus a JSON rolling log file when LOG_FILE_PATH is set.
    // Keep the guard alive so buffered file logs are flushed on exit.
    let (json_layer, _file_guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_path = Path::new(&log_file_path);
            let log_dir = log_path.parent().unwrap_or(Path::new("logs"));
            let log_file_name = log_path
                .file_name()
                .unwrap_or(OsStr::new("ysu_gpa.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(env_filter("RUST_LOG_JSON", LevelFilter::DEBUG));
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    // stdout is reserved for the result line.
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", LevelFilter::WARN));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match compute_gpa(&cli.file) {
        Ok(report) => {
            info!(
                file = %cli.file.display(),
                rows_read = report.rows_read,
                rows_used = report.rows_used,
                rows_skipped = report.rows_skipped(),
                "Transcript aggregated"
            );
            log_report_json(&report)?;
            println!("{}", format_outcome(&report.outcome));
        }
        Err(e) => {
            warn!(file = %cli.file.display(), error = %e, "Transcript could not be processed");
            println!("{}", format_error(&e));
        }
    }

    Ok(())
}

/// Builds a filter from `var`, falling back to `default` when it is unset or
/// unparseable.
fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(var)
        .from_env_lossy()
}
