//! Fail-soft batch runner
//!
//! Runs a check over named items, prints one status line per item, and
//! keeps going past failures. The caller prints the summary at the end.

use crate::debug;
use crate::error::PaletteError;
use std::io::{self, Write};

/// Width of the name column in status lines
const NAME_WIDTH: usize = 20;

/// Tally of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub total: usize,
    pub passed: usize,
    /// `(item name, reason)` for every failed item, in run order
    pub failures: Vec<(String, String)>,
}

impl BatchReport {
    /// True when at least one item ran and none failed
    pub fn is_success(&self) -> bool {
        self.total > 0 && self.failures.is_empty()
    }

    /// Print the `Results: n/m ...` line and the failure list
    pub fn write_summary<W: Write>(&self, out: &mut W, what: &str) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(80))?;
        writeln!(out, "Results: {}/{} {what}", self.passed, self.total)?;

        if !self.failures.is_empty() {
            writeln!(out, "\n❌ Failed:")?;
            for (name, reason) in &self.failures {
                writeln!(out, "  - {name}: {reason}")?;
            }
        }
        Ok(())
    }
}

/// Run `check` over every item, writing a status line per item to `out`
///
/// The check returns a short success message or the item's error.
pub fn run_batch<T, F, W>(
    items: &[(String, T)],
    out: &mut W,
    mut check: F,
) -> io::Result<BatchReport>
where
    F: FnMut(&str, &T) -> Result<String, PaletteError>,
    W: Write,
{
    let mut report = BatchReport {
        total: items.len(),
        ..BatchReport::default()
    };

    for (name, item) in items {
        match check(name, item) {
            Ok(message) => {
                writeln!(out, "✅ {name:<width$} {message}", width = NAME_WIDTH)?;
                report.passed += 1;
            }
            Err(e) => {
                let reason = e.to_string();
                writeln!(out, "❌ {name:<width$} {reason}", width = NAME_WIDTH)?;
                report.failures.push((name.clone(), reason));
            }
        }
    }

    debug::log_category(
        "BATCH",
        &format!("{}/{} passed", report.passed, report.total),
    );
    Ok(report)
}
