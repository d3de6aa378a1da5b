//! Process-wide tracing/logging setup shared by wareflow binaries and
//! tests.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// JSON output, filtered via `RUST_LOG` (default `info`). Safe to call
/// multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        tracing::info!("still alive after double init");
    }
}
