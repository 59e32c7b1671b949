//! Distance-table CSV export.
//!
//! Layout: a header row of an empty corner cell followed by city names, then
//! one row per origin city.  Unreachable cells are written as `inf`.
//!
//! ```csv
//! ,A,B,C
//! A,0,10,20
//! B,inf,0,10
//! C,inf,inf,0
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use wr_graph::DistanceTable;

use crate::RouteIoResult;

/// Cell text for "no path".
pub const UNREACHABLE: &str = "inf";

/// Write `table` as CSV to `path`, creating or truncating the file.
pub fn write_distance_table_path(table: &DistanceTable, path: &Path) -> RouteIoResult<()> {
    write_distance_table(table, File::create(path)?)
}

/// Write `table` as CSV to any `Write` sink.
pub fn write_distance_table<W: Write>(table: &DistanceTable, writer: W) -> RouteIoResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    let header: Vec<&str> = std::iter::once("")
        .chain(table.cities.iter().map(String::as_str))
        .collect();
    out.write_record(&header)?;

    for (origin, cells) in table.rows() {
        let row: Vec<String> = std::iter::once(origin.to_owned())
            .chain(cells.iter().map(|cell| match cell {
                Some(d) => d.to_string(),
                None    => UNREACHABLE.to_owned(),
            }))
            .collect();
        out.write_record(&row)?;
    }

    out.flush()?;
    Ok(())
}
