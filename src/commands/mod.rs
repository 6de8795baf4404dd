//! Remote Command Wrappers
//!
//! One function per remote operation, organized by domain. Reads go through
//! the session cache and fall back to an empty value when the call fails;
//! mutations return the classified error and invalidate the reads they affect.

mod admin;
mod logo;
mod plans;
mod profile;
mod settings;

pub use admin::*;
pub use logo::*;
pub use plans::*;
pub use profile::*;
pub use settings::*;

use crate::error::ServiceResult;

/// Log a failed read and substitute `fallback`
fn or_fallback<T>(operation: &str, result: ServiceResult<T>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(operation, error = %e, "read failed, using fallback");
            fallback
        }
    }
}
