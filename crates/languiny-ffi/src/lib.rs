//! C-callable boundary of the languiny engine.
//!
//! Every string handed to the host is allocated here and must be released
//! exactly once through [`FreeCString`]. Inputs are borrowed null-terminated
//! UTF-8 strings that the host keeps ownership of.

#![allow(non_snake_case)]

use std::ffi::{CStr, CString};
use std::ptr;

use libc::{c_char, c_int};

use languiny_core::{detect, remap, VERSION};

/// Borrow a host string as UTF-8, or `None` for null / invalid input.
///
/// # Safety
/// `ptr` must be null or point to a null-terminated string that stays valid
/// for the duration of the call.
unsafe fn borrow_input<'a>(ptr: *const c_char, op: &str) -> Option<&'a str> {
    if ptr.is_null() {
        log::warn!("{}: null input", op);
        return None;
    }
    match CStr::from_ptr(ptr).to_str() {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("{}: input is not valid UTF-8: {}", op, e);
            None
        }
    }
}

/// Hand an owned string to the host
fn into_host(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(e) => {
            log::warn!("result contains an interior NUL at {}", e.nul_position());
            ptr::null_mut()
        }
    }
}

/// Remap a word typed under `from_layout` into `to_layout`.
///
/// Returns null on null input, invalid UTF-8 or an unknown layout id.
///
/// # Safety
/// `utf8` must be null or a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn RemapWord(
    utf8: *const c_char,
    from_layout: c_int,
    to_layout: c_int,
) -> *mut c_char {
    let Some(text) = borrow_input(utf8, "RemapWord") else {
        return ptr::null_mut();
    };
    match remap::remap_word(text, from_layout, to_layout) {
        Ok(out) => into_host(out),
        Err(e) => {
            log::warn!("RemapWord: {}", e);
            ptr::null_mut()
        }
    }
}

/// `1` when the host should switch away from `current_layout`, `0` when not,
/// `-1` on null input, invalid UTF-8 or an unknown layout id.
///
/// # Safety
/// `utf8` must be null or a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn ShouldSwitch(utf8: *const c_char, current_layout: c_int) -> c_int {
    let Some(text) = borrow_input(utf8, "ShouldSwitch") else {
        return -1;
    };
    match detect::should_switch(text, current_layout) {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(e) => {
            log::warn!("ShouldSwitch: {}", e);
            -1
        }
    }
}

/// Engine version string; release with [`FreeCString`].
#[no_mangle]
pub extern "C" fn EngineVersion() -> *mut c_char {
    into_host(VERSION.to_string())
}

/// Release a string returned by this library. Null is ignored.
///
/// # Safety
/// `ptr` must be null or a pointer previously returned by this library that
/// has not been released yet.
#[no_mangle]
pub unsafe extern "C" fn FreeCString(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
