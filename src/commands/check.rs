//! Check command implementation

use super::{run_extract, run_validate, run_verify};
use anyhow::Result;
use vogix_palette::Layout;

/// Extract, then validate and verify the result
///
/// Later stages still run when an earlier one fails, so one pass shows
/// every problem.
pub fn run_check(layout: &Layout) -> Result<bool> {
    let extracted = run_extract(layout)?;
    println!();
    let validated = run_validate(layout)?;
    println!();
    let verified = run_verify(layout)?;

    Ok(extracted && validated && verified)
}
