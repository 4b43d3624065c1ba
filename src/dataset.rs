//! Delimited-text output, one row per record.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use once_cell::sync::Lazy;

use crate::types::{BOARD_CELLS, Record};

/// `m_0 .. m_63`, then the move metadata.
static COLUMNS: Lazy<Vec<String>> = Lazy::new(|| {
    (0..BOARD_CELLS)
        .map(|i| format!("m_{i}"))
        .chain(["player", "e_move", "round"].map(String::from))
        .collect()
});

/// Header column names in output order.
pub fn columns() -> &'static [String] {
    &COLUMNS
}

pub fn write_header<W: Write>(writer: &mut W, delimiter: char) -> io::Result<()> {
    writeln!(writer, "{}", columns().join(delimiter.to_string().as_str()))
}

pub fn write_record<W: Write>(writer: &mut W, record: &Record, delimiter: char) -> io::Result<()> {
    for cell in &record.cells {
        write!(writer, "{}{delimiter}", cell.value())?;
    }
    writeln!(
        writer,
        "{}{delimiter}{}{delimiter}{}",
        record.player.value(),
        record.move_index,
        record.round
    )
}

/// Writes every record in order, optionally preceded by the header row.
pub fn write_records<W: Write>(
    writer: &mut W,
    records: &[Record],
    include_header: bool,
    delimiter: char,
) -> io::Result<()> {
    if include_header {
        write_header(writer, delimiter)?;
    }
    for record in records {
        write_record(writer, record, delimiter)?;
    }
    Ok(())
}

/// Creates `path` and writes the records through a buffered writer.
pub fn write_records_to_path(
    path: &Path,
    records: &[Record],
    include_header: bool,
    delimiter: char,
) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_records(&mut out, records, include_header, delimiter)?;
    out.flush()
}
