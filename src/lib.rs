//! tinyext - small value holders for Python and C extension hosts.
//!
//! This crate provides:
//!
//! - [`BufferStore`]: a single-slot numeric buffer whose length is fixed by
//!   the first write, with a stable linear maximum scan
//! - [`BoundedCounter`]: a non-negative integer whose decreases are refused,
//!   not clamped, at zero
//! - [`Player`]: a name/rank/tier record built on the counter
//! - FFI layer for C callers (Python cffi, ctypes, ...) and an optional
//!   PyO3 module (`python` feature)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  FFI Layer (tinyext.h) │  PyO3 module │
//! │  status codes, handles │  `python`    │
//! └─────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────┐
//! │     marshal (host value decoding)   │
//! └─────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────┐
//! │  ┌─────────────┐  ┌──────────────┐  │
//! │  │ BufferStore │  │BoundedCounter│  │
//! │  └─────────────┘  └──────────────┘  │
//! │                   ┌──────────────┐  │
//! │                   │    Player    │  │
//! │                   └──────────────┘  │
//! └─────────────────────────────────────┘
//! ```
//!
//! # FFI Usage
//!
//! ```c
//! BufferStore *buf;
//! ext_buffer_create(&buf);
//!
//! double data[] = {3.0, 7.5, 2.0};
//! ext_buffer_set(buf, data, 3);
//!
//! double max;
//! if (ext_buffer_max(buf, &max) != EXT_STATUS_OK) {
//!     char msg[128];
//!     size_t len;
//!     ext_last_error_message(msg, sizeof msg, &len);
//! }
//!
//! ext_buffer_free(buf);
//! ```

pub mod data;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod marshal;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used items
pub use data::{find_max, BoundedCounter, BufferStore, Player, RankUpdate, RejectReason};
pub use error::{ExtError, Result};
pub use logging::LogConfig;
pub use marshal::{decode_numeric, Element};

// Re-export FFI types for cbindgen
pub use ffi::types::*;
pub use ffi::buffer::*;
pub use ffi::player::*;
