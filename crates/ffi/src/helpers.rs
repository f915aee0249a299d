use crate::error::{with_last_error_mut, WildfireError, WildfireErrorCode};
use std::ffi::CString;

/// Record a failure for `wildfire_get_last_error`.
pub(crate) fn set_last_error(error: &impl WildfireError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Record a failure and return the code to hand back to C.
#[inline]
pub(crate) fn track_error(error: &impl WildfireError) -> WildfireErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the error of a failed validation or run and reduce it to its code.
#[inline]
pub(crate) fn track_result<T, E: WildfireError>(
    result: Result<T, E>,
) -> Result<T, WildfireErrorCode> {
    result.map_err(|error| track_error(&error))
}

/// Reset the last error; every successful `wildfire_*` call ends here.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = WildfireErrorCode::Ok;
    });
}
