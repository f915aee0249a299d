//! C ABI for the wildfire history engine
//!
//! A foreign renderer sizes a buffer with `wildfire_history_len`, then fills
//! it with `wildfire_simulate`. Every call returns a `WildfireErrorCode`;
//! the message of the last failure on the calling thread is available from
//! `wildfire_get_last_error`.

mod error;
mod helpers;
mod simulation;

pub use error::{wildfire_get_last_error, wildfire_get_last_error_code, WildfireErrorCode};
pub use simulation::{
    wildfire_default_params, wildfire_history_len, wildfire_simulate, WildfireParams,
};
