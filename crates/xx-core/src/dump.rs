//! Fixed-width hex dump rendering.

use std::fmt::Write as _;
use std::io;

pub const ROW_WIDTH: usize = 16;

fn printable(b: u8) -> char {
    if (0x20..0x7f).contains(&b) {
        b as char
    } else {
        '.'
    }
}

/// One dump row: offset, hex columns (padded for a short row), ASCII column.
pub fn format_row(offset: usize, chunk: &[u8]) -> String {
    let mut row = format!("{offset:08x}: ");
    for b in chunk {
        let _ = write!(row, "{b:02x} ");
    }
    for _ in chunk.len()..ROW_WIDTH {
        row.push_str("   ");
    }
    row.push(' ');
    row.extend(chunk.iter().copied().map(printable));
    row
}

/// Render the whole buffer, one newline-terminated row per 16 bytes.
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .chunks(ROW_WIDTH)
        .enumerate()
        .map(|(i, chunk)| format_row(i * ROW_WIDTH, chunk) + "\n")
        .collect()
}

/// Stream the dump to a writer.
pub fn write_hex_dump<W: io::Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    for (i, chunk) in bytes.chunks(ROW_WIDTH).enumerate() {
        writeln!(out, "{}", format_row(i * ROW_WIDTH, chunk))?;
    }
    Ok(())
}
