use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use wildfire_core::SimulationError;

/// A failed wildfire call: the code returned to C and the message kept for
/// `wildfire_get_last_error`.
pub(crate) trait WildfireError {
    fn code(&self) -> WildfireErrorCode;

    fn msg(&self) -> &str;
}

/// Failure of a sizing or simulation call.
///
/// One constructor per non-`Ok` code, each producing the message a C caller
/// sees: which out-pointer was null, which parameter was rejected and why, or
/// how many bytes the history needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultWildfireError {
    code: WildfireErrorCode,
    msg: String,
}

impl DefaultWildfireError {
    /// A required pointer (`out` or `out_len`) was null.
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: WildfireErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// The engine rejected a parameter; `message` names it.
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: WildfireErrorCode::InvalidParameter,
            msg: message,
        }
    }

    /// The caller's buffer holds `provided` bytes but the history needs
    /// `required` (the value `wildfire_history_len` reports).
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Self {
            code: WildfireErrorCode::BufferTooSmall,
            msg: format!("Output buffer holds {provided} bytes, history needs {required}"),
        }
    }
}

impl From<SimulationError> for DefaultWildfireError {
    fn from(error: SimulationError) -> Self {
        Self::invalid_parameter(error.to_string())
    }
}

impl WildfireError for DefaultWildfireError {
    fn code(&self) -> WildfireErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// Status of every `wildfire_*` call. `Ok` is 0, any other value is a failure
/// whose message is available from `wildfire_get_last_error`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildfireErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// `out` or `out_len` was null. `out_seed` may be null.
    NullPointer = 1,

    /// Width, height, density or steps out of range, or a history too large
    /// to allocate.
    InvalidParameter = 2,

    /// `out_len` is below `(steps + 1) * height * width`.
    BufferTooSmall = 3,
}

thread_local! {
    /// Message and code of the last failed call on this thread, reset by the
    /// next successful one.
    static LAST_ERROR: RefCell<(Option<CString>, WildfireErrorCode)> = const { RefCell::new((None, WildfireErrorCode::Ok)) };
}

/// Read the last error of this thread.
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, WildfireErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Replace the last error of this thread.
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, WildfireErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Message of the last failed `wildfire_*` call on this thread, or null if
/// that call succeeded.
///
/// Typical messages: `Invalid parameter 'density': must be in (0, 1], got 0`
/// or `Output buffer holds 10 bytes, history needs 48`. The string is owned
/// by the library and stays valid until the next `wildfire_*` call on the
/// same thread; do not free it.
///
/// ```c
/// if (wildfire_simulate(params, buf, len, NULL) == BufferTooSmall) {
///     wildfire_history_len(params, &len);   /* resize and retry */
/// }
/// ```
#[no_mangle]
pub extern "C" fn wildfire_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Code of the last `wildfire_*` call on this thread (`Ok` after a success).
#[no_mangle]
pub extern "C" fn wildfire_get_last_error_code() -> WildfireErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
