//! Machine-readable chart output
//!
//! The whole chart model (dataset descriptor, positioned tiles, legend) as
//! pretty-printed JSON, for the serve API and programmatic consumers.

use crate::chart::Chart;
use std::io::{self, Write};

pub fn write<W: Write>(writer: &mut W, chart: &Chart) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, chart)?;
    writeln!(writer)
}
