pub mod build_info;

use std::{env, path::PathBuf, sync::Once};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".pocket_ledger";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pocket_ledger=info"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .ok();
    });
}

/// Returns the application directory, defaulting to `~/.pocket_ledger`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("POCKET_LEDGER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}
