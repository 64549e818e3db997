//! CSV export for dispatch allocations.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::dispatch::{Allocation, DispatchRequest};

/// Column header for CSV allocation export.
const HEADER: &str = "source,allocated_mw,capacity_mw,utilization_pct";

/// Exports an allocation to a CSV file at the given path.
///
/// Writes a header row followed by one row per source in reporting order.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(allocation: &Allocation, request: &DispatchRequest, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(allocation, request, buf)
}

/// Writes an allocation as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(
    allocation: &Allocation,
    request: &DispatchRequest,
    writer: impl Write,
) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for (source, mw) in allocation.entries() {
        let capacity = request.capacity_mw(source);
        let utilization = if capacity > 0.0 {
            mw / capacity * 100.0
        } else {
            0.0
        };
        wtr.write_record(&[
            source.to_string(),
            format!("{mw:.2}"),
            format!("{capacity:.2}"),
            format!("{utilization:.1}"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
