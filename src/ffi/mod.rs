//! FFI (Foreign Function Interface) layer for C bindings.
//!
//! This module provides C-compatible functions that can be called from
//! Python via cffi, or from any other language that supports C FFI.
//! Failing calls return an [`ExtStatus`] and leave a description readable
//! through [`ext_last_error_message`].

pub mod buffer;
pub mod error;
pub mod player;
pub mod types;

pub use buffer::*;
pub use error::{ext_clear_last_error, ext_last_error_length, ext_last_error_message};
pub use player::*;
pub use types::*;

/// Install the tracing subscriber.
///
/// A null `config` reads `TINYEXT_LOG_LEVEL` / `TINYEXT_LOG_JSON` from the
/// environment. Calls after the first have no effect.
///
/// # Safety
/// config must be valid or null.
#[no_mangle]
pub unsafe extern "C" fn ext_logging_init(config: *const CLogConfig) -> ExtStatus {
    if config.is_null() {
        crate::logging::init();
    } else {
        crate::logging::init_with_config((*config).into());
    }
    ExtStatus::Ok
}
