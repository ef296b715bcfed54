use std::io::{self, Write};

pub const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Write an `a:blip` referencing the embedded image relationship `rId{rid_num}`.
///
/// The `r` prefix is declared on the drawing root.
pub fn write_a_blip_embed_rid_num<W: Write>(writer: &mut W, rid_num: usize) -> io::Result<()> {
    write!(writer, r#"<a:blip r:embed="rId{}"/>"#, rid_num)
}

/// Write the stretch fill that scales a picture to its frame.
pub fn write_a_stretch_fill_rect<W: Write>(writer: &mut W) -> io::Result<()> {
    writer.write_all(b"<a:stretch><a:fillRect/></a:stretch>")
}
