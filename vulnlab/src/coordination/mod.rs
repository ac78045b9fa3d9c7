//! Coordination between the toggle flags, the user directory, the
//! authorization engine, the sanitization gate, and the input store.
//!
//! Every operation takes one `FlagSnapshot` captured by the caller at
//! request entry, so a flag flipped mid-operation is never observed.

mod access;
mod errors;
mod inputs;

pub use access::{get_all_user_data, get_user_data};
pub use errors::CoordinationError;
pub use inputs::{clear_inputs, list_inputs, submit_input};
