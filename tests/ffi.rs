//! Drives the C ABI through the rlib.

use std::ffi::{c_char, CStr, CString};
use std::ptr;
use tinyext::ffi::{ext_clear_last_error, ext_last_error_message};
use tinyext::*;

fn last_error() -> String {
    let mut buf = [0 as c_char; 256];
    let mut len = 0usize;
    let status = unsafe { ext_last_error_message(buf.as_mut_ptr(), buf.len(), &mut len) };
    assert_eq!(status, ExtStatus::Ok);
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_str()
        .unwrap()
        .to_string()
}

#[test]
fn buffer_lifecycle() {
    unsafe {
        let mut handle: BufferHandle = ptr::null_mut();
        assert_eq!(ext_buffer_create(&mut handle), ExtStatus::Ok);
        assert!(!handle.is_null());

        let mut max = 0.0;
        assert_eq!(ext_buffer_max(handle, &mut max), ExtStatus::EmptyBuffer);
        assert_eq!(last_error(), "No data.");

        let data = [3.0, 7.5, 2.0];
        assert_eq!(ext_buffer_set(handle, data.as_ptr(), data.len()), ExtStatus::Ok);
        assert_eq!(ext_buffer_max(handle, &mut max), ExtStatus::Ok);
        assert_eq!(max, 7.5);

        let short = [3.0, 7.5];
        assert_eq!(
            ext_buffer_set(handle, short.as_ptr(), short.len()),
            ExtStatus::SizeMismatch
        );
        assert_eq!(last_error(), "buffer length mismatch: expected 3, got 2");
        assert_eq!(ext_buffer_len(handle), 3);

        let view = ext_buffer_view(handle);
        assert_eq!(std::slice::from_raw_parts(view.data, view.len), &data);

        assert_eq!(ext_buffer_clear(handle), ExtStatus::Ok);
        assert_eq!(ext_buffer_len(handle), 0);
        assert_eq!(ext_buffer_set(handle, short.as_ptr(), short.len()), ExtStatus::Ok);
        assert_eq!(ext_buffer_max(handle, &mut max), ExtStatus::Ok);
        assert_eq!(max, 7.5);

        ext_buffer_free(handle);
    }
}

#[test]
fn buffer_null_handling() {
    unsafe {
        assert_eq!(ext_buffer_create(ptr::null_mut()), ExtStatus::NullPointer);
        assert_eq!(ext_buffer_clear(ptr::null_mut()), ExtStatus::NullPointer);
        assert_eq!(ext_buffer_len(ptr::null_mut()), 0);
        assert!(ext_buffer_view(ptr::null_mut()).data.is_null());

        let mut handle: BufferHandle = ptr::null_mut();
        ext_buffer_create(&mut handle);
        assert_eq!(ext_buffer_set(handle, ptr::null(), 2), ExtStatus::NullPointer);
        assert_eq!(ext_buffer_set(handle, ptr::null(), 0), ExtStatus::Ok);
        assert_eq!(ext_buffer_len(handle), 0);
        ext_buffer_free(handle);
        ext_buffer_free(ptr::null_mut());
    }
}

#[test]
fn player_rank_updates() {
    let name = CString::new("ada").unwrap();
    let tier = CString::new("gold").unwrap();

    unsafe {
        let mut handle: PlayerHandle = ptr::null_mut();
        assert_eq!(
            ext_player_create(name.as_ptr(), 0, tier.as_ptr(), &mut handle),
            ExtStatus::Ok
        );

        let mut rank = 0u64;
        assert_eq!(ext_player_increase_rank(handle, 5, &mut rank), ExtStatus::Ok);
        assert_eq!(rank, 5);
        assert_eq!(ext_player_decrease_rank(handle, 3, &mut rank), ExtStatus::Ok);
        assert_eq!(rank, 2);

        ext_clear_last_error();
        assert_eq!(
            ext_player_decrease_rank(handle, 3, &mut rank),
            ExtStatus::Rejected
        );
        assert_eq!(rank, 2);
        assert_eq!(ext_player_get_rank(handle), 2);
        assert!(last_error().starts_with("rank cannot be below 0"));

        assert_eq!(
            ext_player_decrease_rank(handle, 1, ptr::null_mut()),
            ExtStatus::Ok
        );
        assert_eq!(ext_player_get_rank(handle), 1);

        ext_player_free(handle);
    }
}

#[test]
fn player_fields() {
    unsafe {
        let mut handle: PlayerHandle = ptr::null_mut();
        assert_eq!(
            ext_player_create(ptr::null(), -1, ptr::null(), &mut handle),
            ExtStatus::InvalidField
        );
        assert_eq!(last_error(), "rank must be unsigned long.");

        assert_eq!(
            ext_player_create(ptr::null(), 4, ptr::null(), &mut handle),
            ExtStatus::Ok
        );

        let name = CString::new("bob").unwrap();
        let tier = CString::new("silver").unwrap();
        assert_eq!(ext_player_set_name(handle, name.as_ptr()), ExtStatus::Ok);
        assert_eq!(ext_player_set_tier(handle, tier.as_ptr()), ExtStatus::Ok);
        assert_eq!(ext_player_set_rank(handle, -3), ExtStatus::InvalidField);
        assert_eq!(ext_player_get_rank(handle), 4);

        let mut buf = [0 as c_char; 64];
        let mut len = 0usize;
        assert_eq!(
            ext_player_describe_buf(handle, buf.as_mut_ptr(), buf.len(), &mut len),
            ExtStatus::Ok
        );
        let text = CStr::from_ptr(buf.as_ptr()).to_str().unwrap();
        assert_eq!(text, "Name: bob, Rank: 4, Tier: silver");
        assert_eq!(len, text.len());

        assert_eq!(
            ext_player_get_tier_buf(handle, buf.as_mut_ptr(), buf.len(), &mut len),
            ExtStatus::Ok
        );
        assert_eq!(CStr::from_ptr(buf.as_ptr()).to_str().unwrap(), "silver");

        assert_eq!(
            ext_player_get_name_buf(handle, buf.as_mut_ptr(), buf.len(), &mut len),
            ExtStatus::Ok
        );
        assert_eq!(CStr::from_ptr(buf.as_ptr()).to_str().unwrap(), "bob");

        assert_eq!(
            ext_player_set_name(handle, ptr::null()),
            ExtStatus::NullPointer
        );

        ext_player_free(handle);
    }
}

#[test]
fn logging_init_accepts_config() {
    let config = CLogConfig::default();
    unsafe {
        assert_eq!(tinyext::ffi::ext_logging_init(&config), ExtStatus::Ok);
        assert_eq!(tinyext::ffi::ext_logging_init(ptr::null()), ExtStatus::Ok);
    }
    assert!(tinyext::logging::is_initialized());
}
