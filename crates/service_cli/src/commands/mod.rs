//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod greek;
pub mod price;
pub mod quote;

use std::io::Write;

use crate::config::OutputFormat;
use crate::report::PriceReport;
use crate::Result;

/// Render `report` in `format` and write it to `out`.
pub fn emit<W: Write>(report: &PriceReport, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => write!(out, "{}", report.render_table())?,
        OutputFormat::Json => writeln!(out, "{}", report.render_json()?)?,
    }
    Ok(())
}
