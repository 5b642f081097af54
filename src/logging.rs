// SPDX-License-Identifier: PMPL-1.0-or-later

//! Log output on stderr via `tracing-subscriber`

use crate::config::ENV_LOG;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `LANGSEARCH_LOG` takes an `EnvFilter` directive such as
/// `langsearch=debug`. Without it only warnings and errors are shown, or
/// everything from this crate down to `debug` when `verbose` is set.
pub fn init(verbose: bool) {
    let fallback = if verbose { "warn,langsearch=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
