// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory host services for testing.
mod directory;
mod roles;
mod settings;
mod transport;

use thiserror::Error;

pub use directory::{MemoryGroups, MemoryMembers};
pub use roles::MemoryRoles;
pub use settings::MemorySettings;
pub use transport::{FailingTransport, RecordingTransport};

#[derive(Debug, Error)]
#[error("{0} unavailable")]
pub struct TestError(pub String);

pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}
