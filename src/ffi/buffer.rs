//! FFI functions for BufferStore management.

use super::error::{record, status_of};
use super::types::{CArrayView, ExtStatus};
use crate::data::BufferStore;
use crate::error::ExtError;

/// Opaque handle to a BufferStore.
pub type BufferHandle = *mut BufferStore;

/// Create a new, empty buffer.
///
/// # Safety
/// out_handle must be a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn ext_buffer_create(out_handle: *mut BufferHandle) -> ExtStatus {
    if out_handle.is_null() {
        return record(ExtError::NullPointer);
    }

    *out_handle = Box::into_raw(Box::new(BufferStore::new()));
    ExtStatus::Ok
}

/// Free a buffer handle.
///
/// # Safety
/// Handle must be valid or null.
#[no_mangle]
pub unsafe extern "C" fn ext_buffer_free(handle: BufferHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Replace the buffer contents with `len` values.
///
/// The first call fixes the buffer length; later calls with a different
/// `len` return `SizeMismatch` and leave the contents unchanged. `data` may
/// be null only when `len` is 0.
///
/// # Safety
/// Handle must be valid; data must point to `len` readable doubles.
#[no_mangle]
pub unsafe extern "C" fn ext_buffer_set(
    handle: BufferHandle,
    data: *const f64,
    len: usize,
) -> ExtStatus {
    if handle.is_null() || (data.is_null() && len > 0) {
        return record(ExtError::NullPointer);
    }

    let values: &[f64] = if len == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(data, len)
    };

    status_of((*handle).set(values))
}

/// Clear the buffer contents and its fixed length.
///
/// # Safety
/// Handle must be valid or null.
#[no_mangle]
pub unsafe extern "C" fn ext_buffer_clear(handle: BufferHandle) -> ExtStatus {
    if handle.is_null() {
        return record(ExtError::NullPointer);
    }

    (*handle).clear();
    ExtStatus::Ok
}

/// Get the maximum value in the buffer.
///
/// # Safety
/// Handle and out_value must be valid.
#[no_mangle]
pub unsafe extern "C" fn ext_buffer_max(handle: BufferHandle, out_value: *mut f64) -> ExtStatus {
    if handle.is_null() || out_value.is_null() {
        return record(ExtError::NullPointer);
    }

    match (*handle).max() {
        Ok(val) => {
            *out_value = val;
            ExtStatus::Ok
        }
        Err(err) => record(err),
    }
}

/// Get the number of values held.
#[no_mangle]
pub unsafe extern "C" fn ext_buffer_len(handle: BufferHandle) -> usize {
    if handle.is_null() {
        return 0;
    }
    (*handle).len()
}

/// Get a view of the buffer contents.
///
/// # Safety
/// Handle must be valid. Returned view is valid until the buffer is modified or freed.
#[no_mangle]
pub unsafe extern "C" fn ext_buffer_view(handle: BufferHandle) -> CArrayView {
    if handle.is_null() {
        return CArrayView::empty();
    }
    let values = (*handle).as_slice();
    CArrayView {
        data: values.as_ptr(),
        len: values.len(),
    }
}
