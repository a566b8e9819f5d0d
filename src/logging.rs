use env_logger::{Builder, Env};
use log::debug;

const DEFAULT_FILTER: &str = "info,actix_web=warn,actix_server=warn";
const DEBUG_FILTER: &str = "debug";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        DEBUG_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Installs the global logger. Returns false when a logger was already set,
/// in which case the existing one keeps handling records.
pub fn init(debug: bool) -> bool {
    match Builder::from_env(Env::default().default_filter_or(default_filter(debug)))
        .target(env_logger::Target::Stdout)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            debug!("Logger already initialised: {e}");
            false
        }
    }
}
