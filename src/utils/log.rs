// src/utils/log.rs

//! Logging setup.
//!
//! Library code logs through the `log` facade (`trace!`, `debug!`, `info!`,
//! `warn!`). Binaries and tests that want to see those records install a
//! subscriber once at startup:
//!
//! ```
//! psd_letters::utils::log::init_subscriber(tracing::Level::DEBUG).ok();
//! ```

use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

pub use log::{debug, error, info, trace, warn};

/// Installs a global subscriber writing to standard error.
///
/// The subscriber also forwards records emitted through the `log` facade.
/// Returns an error if a global subscriber has already been set.
///
/// # Arguments
/// * `max_level` - The maximum level of messages to log (e.g., `Level::INFO`).
pub fn init_subscriber(max_level: Level) -> Result<(), TryInitError> {
    FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_thread_ids(true)
        .with_target(false)
        .finish()
        .try_init()
}
