use std::path::Path;

use color_eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::PROJECT_NAME;

lazy_static::lazy_static! {
    pub static ref LOG_ENV: String = format!("{}_LOG_LEVEL", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_CRATE_NAME"));
}

/// Default directive when neither `RUST_LOG` nor `PRODUCT_EDITOR_LOG_LEVEL`
/// is set. reqwest/hyper internals stay quiet.
const DEFAULT_DIRECTIVE: &str = "info,hyper_util=warn,reqwest=warn";

/// Install the global subscriber: a non-blocking file layer in `data_dir`
/// plus the span-trace layer used by color-eyre reports.
///
/// The terminal belongs to the UI, so there is no console layer. Keep the
/// returned guard alive until shutdown or buffered lines are lost.
pub fn init(data_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(data_dir)?;
    let file_appender = tracing_appender::rolling::never(data_dir, LOG_FILE.as_str());
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_filter(env_filter());

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(guard)
}

fn env_filter() -> EnvFilter {
    let directive = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_ENV.as_str()))
        .unwrap_or_else(|_| DEFAULT_DIRECTIVE.to_string());
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
