//! Command implementations
//!
//! Each command returns `Ok(true)` when every item passed.

pub mod check;
pub mod extract;
pub mod init;
pub mod validate;
pub mod verify;

pub use check::run_check;
pub use extract::{run_extract, run_self_check};
pub use init::run_init;
pub use validate::run_validate;
pub use verify::run_verify;

/// Horizontal rule between report sections
pub(crate) fn rule() -> String {
    "=".repeat(80)
}
