use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "footprint.log";

/// Initialize the logging system
///
/// Events go to stderr at `warn` (or `debug` when `verbose`), unless
/// `RUST_LOG` says otherwise. With `log_file`, the same events are also
/// written as JSON to a file rolled daily.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_path) = log_file else {
        subscriber.init();
        return;
    };

    let (dir, file_name) = split_log_path(&log_path);
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Cannot create log directory {}: {}", dir.display(), e);
    }

    let file_layer = fmt::layer()
        .with_writer(tracing_appender::rolling::daily(dir, file_name))
        .with_ansi(false)
        .json();

    subscriber.with(file_layer).init();
}

/// Filter directive used when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

/// Directory and file-name prefix for the rolling appender.
fn split_log_path(path: &Path) -> (PathBuf, OsString) {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from(DEFAULT_LOG_FILE));
    (dir, file_name)
}
