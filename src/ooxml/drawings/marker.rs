//! Cell coordinate markers.

use serde::Deserialize;
use std::io::{self, Write};

/// A zero-based cell position plus EMU offsets into that cell.
///
/// Used as the `xdr:from` corner of an anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Marker {
    /// Column index (0-based)
    pub col: u32,
    /// Offset from the left edge of `col` (in EMUs)
    pub col_off: i64,
    /// Row index (0-based)
    pub row: u32,
    /// Offset from the top edge of `row` (in EMUs)
    pub row_off: i64,
}

impl Marker {
    /// Create a marker at the top-left corner of a cell.
    #[inline]
    pub const fn new(col: u32, row: u32) -> Self {
        Self {
            col,
            col_off: 0,
            row,
            row_off: 0,
        }
    }

    /// Set the in-cell offsets.
    #[inline]
    pub const fn with_offsets(mut self, col_off: i64, row_off: i64) -> Self {
        self.col_off = col_off;
        self.row_off = row_off;
        self
    }

    /// Write the marker's children (`xdr:col`, `xdr:colOff`, `xdr:row`, `xdr:rowOff`).
    ///
    /// The enclosing `xdr:from` / `xdr:to` element is written by the anchor.
    pub fn write_xml<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(
            writer,
            "<xdr:col>{}</xdr:col><xdr:colOff>{}</xdr:colOff><xdr:row>{}</xdr:row><xdr:rowOff>{}</xdr:rowOff>",
            self.col, self.col_off, self.row, self.row_off
        )
    }

    /// Serialize the marker's children to a string.
    pub fn to_xml_string(&self) -> String {
        let mut out = Vec::with_capacity(128);
        // Writing into a Vec cannot fail.
        let _ = self.write_xml(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}
