use std::slice;

use wildfire_core::{SimulationConfig, SimulationParams, ValidatedParams};

use crate::error::{DefaultWildfireError, WildfireErrorCode};
use crate::helpers::{clear_last_error, track_error, track_result};

/// C-compatible simulation parameters.
///
/// Mirrors [`SimulationParams`]. Dimensions and steps stay signed so that
/// negative values coming from the caller are rejected with
/// `InvalidParameter` instead of wrapping.
///
/// # Fields
/// - `width`, `height`: Grid size in cells (must be > 0)
/// - `density`: Probability that a cell starts as a tree, in (0, 1]
/// - `steps`: Number of ticks to compute (must be >= 0)
/// - `seed`: Seed for a reproducible run, used only when `has_seed` is true
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WildfireParams {
    pub width: i64,
    pub height: i64,
    pub density: f64,
    pub steps: i64,
    pub seed: u64,
    pub has_seed: bool,
}

impl From<WildfireParams> for SimulationParams {
    fn from(params: WildfireParams) -> Self {
        SimulationParams {
            width: params.width,
            height: params.height,
            density: params.density,
            steps: params.steps,
            seed: params.has_seed.then_some(params.seed),
        }
    }
}

impl From<SimulationParams> for WildfireParams {
    fn from(params: SimulationParams) -> Self {
        WildfireParams {
            width: params.width,
            height: params.height,
            density: params.density,
            steps: params.steps,
            seed: params.seed.unwrap_or(0),
            has_seed: params.seed.is_some(),
        }
    }
}

fn validate(params: WildfireParams) -> Result<ValidatedParams, DefaultWildfireError> {
    SimulationParams::from(params)
        .validate()
        .map_err(DefaultWildfireError::from)
}

/// Default parameters of the web service: 200x200 cells, density 0.6, 60 steps, unseeded.
#[no_mangle]
pub extern "C" fn wildfire_default_params() -> WildfireParams {
    SimulationConfig::default().params().into()
}

/// Report the buffer size needed for a history.
///
/// The size is `(steps + 1) * height * width` bytes, one byte per cell.
///
/// # Parameters
/// - `params`: Simulation parameters
/// - `out_len`: Pointer to receive the number of bytes
///
/// # Returns
/// - `WildfireErrorCode::Ok` on success, with `out_len` set
/// - `WildfireErrorCode::NullPointer` if `out_len` is null
/// - `WildfireErrorCode::InvalidParameter` if any parameter is out of range
///
/// # Safety
/// `out_len` must be null or a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn wildfire_history_len(
    params: WildfireParams,
    out_len: *mut usize,
) -> WildfireErrorCode {
    if out_len.is_null() {
        return track_error(&DefaultWildfireError::null_pointer("out_len"));
    }

    let validated = match track_result(validate(params)) {
        Ok(validated) => validated,
        Err(code) => return code,
    };

    // SAFETY: out_len checked non-null above; caller guarantees it is writable
    *out_len = validated.history_cells();
    clear_last_error();
    WildfireErrorCode::Ok
}

/// Run one simulation and write its full history into `out`.
///
/// Frames are written back to back, each one row-major with one byte per
/// cell: `0` empty or ash, `1` tree, `2` fire. Frame `t` starts at byte
/// `t * height * width`. Bytes past the history are left untouched.
///
/// # Parameters
/// - `params`: Simulation parameters
/// - `out`: Output buffer
/// - `out_len`: Size of `out` in bytes (see `wildfire_history_len`)
/// - `out_seed`: Optional pointer to receive the seed used (may be null)
///
/// # Returns
/// - `WildfireErrorCode::Ok` on success
/// - `WildfireErrorCode::NullPointer` if `out` is null
/// - `WildfireErrorCode::InvalidParameter` if any parameter is out of range
/// - `WildfireErrorCode::BufferTooSmall` if `out_len` cannot hold the history
///
/// Parameters are checked once, before any computation, so a failed call
/// never writes to `out`.
///
/// # Safety
/// - `out` must point to at least `out_len` writable bytes
/// - `out_seed` must be null or a valid pointer to writable memory
///
/// # Example
/// ```c
/// WildfireParams params = wildfire_default_params();
/// size_t len = 0;
/// if (wildfire_history_len(params, &len) == Ok) {
///     uint8_t* frames = malloc(len);
///     uint64_t seed = 0;
///     if (wildfire_simulate(params, frames, len, &seed) != Ok) {
///         printf("Simulation failed: %s\n", wildfire_get_last_error());
///     }
/// }
/// ```
#[no_mangle]
pub unsafe extern "C" fn wildfire_simulate(
    params: WildfireParams,
    out: *mut u8,
    out_len: usize,
    out_seed: *mut u64,
) -> WildfireErrorCode {
    if out.is_null() {
        return track_error(&DefaultWildfireError::null_pointer("out"));
    }

    let validated = match track_result(validate(params)) {
        Ok(validated) => validated,
        Err(code) => return code,
    };
    let required = validated.history_cells();
    if out_len < required {
        return track_error(&DefaultWildfireError::buffer_too_small(required, out_len));
    }

    let history = match track_result(validated.run().map_err(DefaultWildfireError::from)) {
        Ok(history) => history,
        Err(code) => return code,
    };

    // SAFETY: out is non-null and the caller guarantees out_len writable bytes;
    // required <= out_len was checked above
    let buffer = slice::from_raw_parts_mut(out, required);
    history.write_values(buffer);

    if !out_seed.is_null() {
        if let Some(seed) = history.seed() {
            // SAFETY: out_seed checked non-null; caller guarantees it is writable
            *out_seed = seed;
        }
    }

    clear_last_error();
    WildfireErrorCode::Ok
}
