//! Graphic frames that place a chart part on a drawing.

use crate::common::xml::escape_xml;
use crate::ooxml::drawings::anchor::AnchorOptions;
use crate::ooxml::drawings::xfrm::write_off_ext;
use std::io::{self, Write};

pub const CHART_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";

/// An `xdr:graphicFrame` referencing a chart part.
///
/// The chart itself lives in its own package part (see
/// [`crate::ooxml::charts::Chart::write_chart`]); the frame only points at it
/// through the drawing's relationship `rId{index + 1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphicFrame {
    name: String,
}

impl GraphicFrame {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn from_options(options: &AnchorOptions) -> Self {
        Self::new(options.name.clone().unwrap_or_default())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn write_xml<W: Write>(
        &self,
        writer: &mut W,
        index: usize,
        cx: i64,
        cy: i64,
    ) -> io::Result<()> {
        writer.write_all(br#"<xdr:graphicFrame macro="">"#)?;
        write!(
            writer,
            r#"<xdr:nvGraphicFramePr><xdr:cNvPr id="{}" name="{}"/><xdr:cNvGraphicFramePr/></xdr:nvGraphicFramePr>"#,
            index + 2,
            escape_xml(&self.name)
        )?;
        writer.write_all(b"<xdr:xfrm>")?;
        write_off_ext(writer, 0, 0, cx, cy)?;
        writer.write_all(b"</xdr:xfrm>")?;
        write!(
            writer,
            r#"<a:graphic><a:graphicData uri="{ns}"><c:chart xmlns:c="{ns}" r:id="rId{rid}"/></a:graphicData></a:graphic>"#,
            ns = CHART_NS,
            rid = index + 1
        )?;
        writer.write_all(b"</xdr:graphicFrame>")
    }

    /// Serialize the `xdr:graphicFrame` element to a string.
    pub fn to_xml_string(&self, index: usize, cx: i64, cy: i64) -> String {
        let mut out = Vec::with_capacity(512);
        // Writing into a Vec cannot fail.
        let _ = self.write_xml(&mut out, index, cx, cy);
        String::from_utf8_lossy(&out).into_owned()
    }
}
