//! FFI functions for Player manipulation.

use super::error::{copy_to_buf, record, record_message, status_of};
use super::types::ExtStatus;
use crate::data::{Player, RankUpdate, RejectReason};
use crate::error::ExtError;
use std::ffi::{c_char, CStr};

/// Opaque handle to a Player.
pub type PlayerHandle = *mut Player;

unsafe fn read_str(ptr: *const c_char) -> Result<String, ExtError> {
    if ptr.is_null() {
        return Err(ExtError::NullPointer);
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map(str::to_string)
        .map_err(|_| ExtError::InvalidUtf8)
}

unsafe fn report_update(update: RankUpdate, out_rank: *mut u64) -> ExtStatus {
    if !out_rank.is_null() {
        *out_rank = update.value();
    }
    match update {
        RankUpdate::Applied { .. } => ExtStatus::Ok,
        RankUpdate::Rejected {
            value,
            attempted,
            reason,
        } => {
            let message = match reason {
                RejectReason::BelowFloor => {
                    format!("rank cannot be below 0 (rank if changed: {attempted}, kept {value})")
                }
                RejectReason::Overflow => format!("rank overflow (kept {value})"),
            };
            record_message(ExtStatus::Rejected, message)
        }
    }
}

/// Create a new player.
///
/// Null `name` or `tier` default to the empty string. A negative `rank`
/// returns `InvalidField`.
///
/// # Safety
/// Non-null strings must be NUL-terminated; out_handle must be valid.
#[no_mangle]
pub unsafe extern "C" fn ext_player_create(
    name: *const c_char,
    rank: i64,
    tier: *const c_char,
    out_handle: *mut PlayerHandle,
) -> ExtStatus {
    if out_handle.is_null() {
        return record(ExtError::NullPointer);
    }

    let name = if name.is_null() {
        Ok(String::new())
    } else {
        read_str(name)
    };
    let tier = if tier.is_null() {
        Ok(String::new())
    } else {
        read_str(tier)
    };

    let created = name.and_then(|name| tier.and_then(|tier| Player::new(name, rank, tier)));
    match created {
        Ok(player) => {
            *out_handle = Box::into_raw(Box::new(player));
            ExtStatus::Ok
        }
        Err(err) => record(err),
    }
}

/// Free a player handle.
///
/// # Safety
/// Handle must be valid or null.
#[no_mangle]
pub unsafe extern "C" fn ext_player_free(handle: PlayerHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Get player rank.
#[no_mangle]
pub unsafe extern "C" fn ext_player_get_rank(handle: PlayerHandle) -> u64 {
    if handle.is_null() {
        return 0;
    }
    (*handle).rank()
}

/// Overwrite player rank; negative values return `InvalidField`.
///
/// # Safety
/// Handle must be valid.
#[no_mangle]
pub unsafe extern "C" fn ext_player_set_rank(handle: PlayerHandle, rank: i64) -> ExtStatus {
    if handle.is_null() {
        return record(ExtError::NullPointer);
    }
    status_of((*handle).set_rank(rank))
}

/// Increase player rank by `amount`.
///
/// `out_rank`, when non-null, receives the rank after the call.
///
/// # Safety
/// Handle must be valid; out_rank must be valid or null.
#[no_mangle]
pub unsafe extern "C" fn ext_player_increase_rank(
    handle: PlayerHandle,
    amount: i64,
    out_rank: *mut u64,
) -> ExtStatus {
    if handle.is_null() {
        return record(ExtError::NullPointer);
    }
    report_update((*handle).increase_rank(amount), out_rank)
}

/// Decrease player rank by `amount`.
///
/// Returns `Rejected` and leaves the rank unchanged when it would drop
/// below zero.
///
/// # Safety
/// Handle must be valid; out_rank must be valid or null.
#[no_mangle]
pub unsafe extern "C" fn ext_player_decrease_rank(
    handle: PlayerHandle,
    amount: i64,
    out_rank: *mut u64,
) -> ExtStatus {
    if handle.is_null() {
        return record(ExtError::NullPointer);
    }
    report_update((*handle).decrease_rank(amount), out_rank)
}

/// Set player name.
///
/// # Safety
/// Handle must be valid; name must be a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn ext_player_set_name(
    handle: PlayerHandle,
    name: *const c_char,
) -> ExtStatus {
    if handle.is_null() {
        return record(ExtError::NullPointer);
    }
    match read_str(name) {
        Ok(name) => {
            (*handle).set_name(name);
            ExtStatus::Ok
        }
        Err(err) => record(err),
    }
}

/// Set player tier.
///
/// # Safety
/// Handle must be valid; tier must be a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn ext_player_set_tier(
    handle: PlayerHandle,
    tier: *const c_char,
) -> ExtStatus {
    if handle.is_null() {
        return record(ExtError::NullPointer);
    }
    match read_str(tier) {
        Ok(tier) => {
            (*handle).set_tier(tier);
            ExtStatus::Ok
        }
        Err(err) => record(err),
    }
}

/// Get player name into a buffer.
///
/// # Safety
/// Handle and buffer must be valid.
#[no_mangle]
pub unsafe extern "C" fn ext_player_get_name_buf(
    handle: PlayerHandle,
    buffer: *mut c_char,
    buffer_len: usize,
    out_len: *mut usize,
) -> ExtStatus {
    if handle.is_null() {
        return record(ExtError::NullPointer);
    }
    copy_to_buf((*handle).name(), buffer, buffer_len, out_len)
}

/// Get player tier into a buffer.
///
/// # Safety
/// Handle and buffer must be valid.
#[no_mangle]
pub unsafe extern "C" fn ext_player_get_tier_buf(
    handle: PlayerHandle,
    buffer: *mut c_char,
    buffer_len: usize,
    out_len: *mut usize,
) -> ExtStatus {
    if handle.is_null() {
        return record(ExtError::NullPointer);
    }
    copy_to_buf((*handle).tier(), buffer, buffer_len, out_len)
}

/// Write "Name: ..., Rank: ..., Tier: ..." into a buffer.
///
/// # Safety
/// Handle and buffer must be valid.
#[no_mangle]
pub unsafe extern "C" fn ext_player_describe_buf(
    handle: PlayerHandle,
    buffer: *mut c_char,
    buffer_len: usize,
    out_len: *mut usize,
) -> ExtStatus {
    if handle.is_null() {
        return record(ExtError::NullPointer);
    }
    copy_to_buf(&(*handle).to_string(), buffer, buffer_len, out_len)
}
