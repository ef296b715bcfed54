use std::io::{self, Write};

/// Write the offset and extent children shared by `a:xfrm` and `xdr:xfrm`.
pub fn write_off_ext<W: Write>(
    writer: &mut W,
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
) -> io::Result<()> {
    write!(writer, r#"<a:off x="{}" y="{}"/>"#, x, y)?;
    write!(writer, r#"<a:ext cx="{}" cy="{}"/>"#, cx, cy)
}

/// Write a complete `a:xfrm` transform.
pub fn write_a_xfrm_off_ext<W: Write>(
    writer: &mut W,
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
) -> io::Result<()> {
    writer.write_all(b"<a:xfrm>")?;
    write_off_ext(writer, x, y, cx, cy)?;
    writer.write_all(b"</a:xfrm>")
}
