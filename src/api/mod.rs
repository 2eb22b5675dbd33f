//! API endpoint implementations.

mod personas;
mod private_reply;
mod profile;
mod settings;
mod thread;

pub use personas::PersonasApi;
pub use private_reply::PrivateReplyApi;
pub use profile::ProfileApi;
pub use settings::SettingsApi;
pub use thread::ThreadApi;

use crate::error::{Error, Result};

/// Reject an empty required string before any I/O happens.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(Error::Validation { field })
    } else {
        Ok(())
    }
}
