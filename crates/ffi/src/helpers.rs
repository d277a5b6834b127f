use crate::error::{with_last_error_mut, DefaultFfiError, FfiError, ForageErrorCode};
use std::ffi::CString;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl FfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl FfiError) -> ForageErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() -> ForageErrorCode {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = ForageErrorCode::Ok;
    });
    ForageErrorCode::Ok
}

/// Write a scalar result to `out`, or record the error.
///
/// # Safety
/// `out` must be null or valid for a write of one `f64`.
pub(crate) unsafe fn write_scalar(
    result: forage_cure_core::Result<f64>,
    out: *mut f64,
) -> ForageErrorCode {
    if out.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out"));
    }
    match result {
        Ok(value) => {
            unsafe {
                *out = value;
            }
            clear_last_error()
        }
        Err(error) => track_error(&DefaultFfiError::from(error)),
    }
}
