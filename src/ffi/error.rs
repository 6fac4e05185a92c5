//! Per-thread "last error" reporting for C callers.

use super::types::ExtStatus;
use crate::error::ExtError;
use std::cell::RefCell;
use std::ffi::c_char;

const NO_ERROR: &str = "No error";

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Remember `err` as this thread's last error and return its status code.
pub(crate) fn record(err: ExtError) -> ExtStatus {
    let status = ExtStatus::from(&err);
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(err.to_string()));
    status
}

/// Record a refused counter update.
pub(crate) fn record_message(status: ExtStatus, message: String) -> ExtStatus {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(message));
    status
}

/// Convert a core result into a status, recording any error.
pub(crate) fn status_of<T>(result: crate::Result<T>) -> ExtStatus {
    match result {
        Ok(_) => ExtStatus::Ok,
        Err(err) => record(err),
    }
}

fn last_message() -> String {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .clone()
            .unwrap_or_else(|| NO_ERROR.to_string())
    })
}

/// Copy `text` into a caller buffer, NUL-terminated and truncated to fit.
///
/// # Safety
/// `buffer` must be valid for `buffer_len` bytes and `out_len` must be valid.
pub(crate) unsafe fn copy_to_buf(
    text: &str,
    buffer: *mut c_char,
    buffer_len: usize,
    out_len: *mut usize,
) -> ExtStatus {
    if buffer.is_null() || out_len.is_null() {
        return ExtStatus::NullPointer;
    }
    if buffer_len == 0 {
        *out_len = text.len();
        return ExtStatus::InvalidArgument;
    }

    let bytes = text.as_bytes();
    let copy_len = bytes.len().min(buffer_len - 1);

    std::ptr::copy_nonoverlapping(bytes.as_ptr(), buffer as *mut u8, copy_len);
    *buffer.add(copy_len) = 0;
    *out_len = bytes.len();

    ExtStatus::Ok
}

/// Length in bytes of the last error message (excluding the terminator).
#[no_mangle]
pub extern "C" fn ext_last_error_length() -> usize {
    last_message().len()
}

/// Copy the last error message into a buffer.
///
/// Writes "No error" when nothing has failed on this thread. `out_len`
/// receives the full message length, which may exceed what was copied.
///
/// # Safety
/// Buffer must be valid for `buffer_len` bytes; out_len must be valid.
#[no_mangle]
pub unsafe extern "C" fn ext_last_error_message(
    buffer: *mut c_char,
    buffer_len: usize,
    out_len: *mut usize,
) -> ExtStatus {
    copy_to_buf(&last_message(), buffer, buffer_len, out_len)
}

/// Forget the last error on this thread.
#[no_mangle]
pub extern "C" fn ext_clear_last_error() {
    LAST_ERROR.with(|slot| slot.borrow_mut().take());
}
