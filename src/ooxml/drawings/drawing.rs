//! Worksheet drawings.
//!
//! A [`Drawing`] owns its anchors in document order. Anchors are addressed by
//! [`AnchorId`] handles and locate themselves by searching the drawing's live
//! list, so positions stay correct when siblings are removed.

use crate::ooxml::drawings::anchor::{AnchorId, AnchorOptions, AnchoredObject, OneCellAnchor};
use crate::ooxml::drawings::blip::RELATIONSHIPS_NS;
use crate::ooxml::drawings::graphic_frame::GraphicFrame;
use crate::ooxml::drawings::pic::Pic;
use crate::ooxml::error::{OoxmlError, Result};
use std::io::Write;

pub const SPREADSHEET_DRAWING_NS: &str =
    "http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing";
pub const DRAWINGML_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

/// The `xdr:wsDr` part of a worksheet.
///
/// # Example
///
/// ```
/// use sheetdraw::ooxml::drawings::{AnchorOptions, Drawing};
///
/// let mut drawing = Drawing::new();
/// let logo = drawing.add_image(
///     AnchorOptions::new().with_image_src("logo.png").with_size(100, 50),
/// )?;
/// assert_eq!(drawing.index_of(logo)?, 0);
///
/// let xml = drawing.to_xml_string()?;
/// assert!(xml.contains(r#"<xdr:ext cx="952500" cy="476250"/>"#));
/// # Ok::<(), sheetdraw::ooxml::error::OoxmlError>(())
/// ```
#[derive(Debug, Default)]
pub struct Drawing {
    anchors: Vec<OneCellAnchor>,
    next_id: u32,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor a picture configured by `options`.
    ///
    /// Nothing is added when an option is rejected.
    pub fn add_image(&mut self, options: AnchorOptions) -> Result<AnchorId> {
        self.push_anchor(&options, |o| Ok(AnchoredObject::Pic(Pic::from_options(o)?)))
    }

    /// Anchor a graphic frame for a chart part configured by `options`.
    pub fn add_chart_frame(&mut self, options: AnchorOptions) -> Result<AnchorId> {
        self.push_anchor(&options, |o| {
            Ok(AnchoredObject::GraphicFrame(GraphicFrame::from_options(o)))
        })
    }

    fn push_anchor<F>(&mut self, options: &AnchorOptions, make_object: F) -> Result<AnchorId>
    where
        F: FnOnce(&AnchorOptions) -> Result<AnchoredObject>,
    {
        let id = AnchorId::new(self.next_id);
        let anchor = OneCellAnchor::new(id, options, make_object)?;
        self.next_id += 1;
        self.anchors.push(anchor);
        tracing::debug!(anchor = %id, count = self.anchors.len(), "registered oneCellAnchor");
        Ok(id)
    }

    /// Zero-based position of the anchor `id`, found by searching the current list.
    pub fn index_of(&self, id: AnchorId) -> Result<usize> {
        self.anchors
            .iter()
            .position(|anchor| anchor.id() == id)
            .ok_or_else(|| {
                tracing::warn!(anchor = %id, "anchor is not attached to this drawing");
                OoxmlError::DetachedAnchor(id)
            })
    }

    pub fn anchor(&self, id: AnchorId) -> Option<&OneCellAnchor> {
        self.anchors.iter().find(|anchor| anchor.id() == id)
    }

    pub fn anchor_mut(&mut self, id: AnchorId) -> Option<&mut OneCellAnchor> {
        self.anchors.iter_mut().find(|anchor| anchor.id() == id)
    }

    /// Detach an anchor, shifting later anchors down by one.
    pub fn remove_anchor(&mut self, id: AnchorId) -> Result<OneCellAnchor> {
        let index = self.index_of(id)?;
        tracing::debug!(anchor = %id, index, "removed oneCellAnchor");
        Ok(self.anchors.remove(index))
    }

    /// Anchors in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, OneCellAnchor> {
        self.anchors.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Write the complete drawing part.
    pub fn write_xml<W: Write>(&self, writer: &mut W) -> Result<()> {
        write!(
            writer,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#
        )?;
        write!(
            writer,
            r#"<xdr:wsDr xmlns:xdr="{}" xmlns:a="{}" xmlns:r="{}">"#,
            SPREADSHEET_DRAWING_NS, DRAWINGML_NS, RELATIONSHIPS_NS
        )?;
        for (index, anchor) in self.anchors.iter().enumerate() {
            anchor.write_xml_at(index, writer)?;
        }
        write!(writer, "</xdr:wsDr>")?;
        Ok(())
    }

    /// Serialize the drawing part to a string.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut out = Vec::with_capacity(4096);
        self.write_xml(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

impl<'a> IntoIterator for &'a Drawing {
    type Item = &'a OneCellAnchor;
    type IntoIter = std::slice::Iter<'a, OneCellAnchor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    fn three_images() -> (Drawing, AnchorId, AnchorId, AnchorId) {
        let mut drawing = Drawing::new();
        let a = drawing.add_image(AnchorOptions::new().with_name("A")).unwrap();
        let b = drawing.add_image(AnchorOptions::new().with_name("B")).unwrap();
        let c = drawing.add_image(AnchorOptions::new().with_name("C")).unwrap();
        (drawing, a, b, c)
    }

    #[test]
    fn test_index_follows_insertion_order() {
        let (drawing, a, b, c) = three_images();
        assert_eq!(drawing.index_of(a).unwrap(), 0);
        assert_eq!(drawing.index_of(b).unwrap(), 1);
        assert_eq!(drawing.index_of(c).unwrap(), 2);
        assert_eq!(drawing.anchor(b).unwrap().index_in(&drawing).unwrap(), 1);
    }

    #[test]
    fn test_index_recomputed_after_removal() {
        let (mut drawing, a, b, c) = three_images();
        let removed = drawing.remove_anchor(a).unwrap();

        assert_eq!(drawing.len(), 2);
        assert_eq!(drawing.index_of(b).unwrap(), 0);
        assert_eq!(drawing.index_of(c).unwrap(), 1);

        let err = removed.index_in(&drawing).unwrap_err();
        assert!(matches!(err, OoxmlError::DetachedAnchor(id) if id == a));
        assert!(removed.to_xml_string(&drawing).is_err());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let (mut drawing, a, _, _) = three_images();
        drawing.remove_anchor(a).unwrap();
        let d = drawing.add_image(AnchorOptions::new()).unwrap();
        assert_ne!(d, a);
        assert!(drawing.index_of(a).is_err());
        assert_eq!(drawing.index_of(d).unwrap(), 2);
    }

    #[test]
    fn test_anchor_from_other_drawing_is_detached() {
        let (drawing, _, b, _) = three_images();
        let other = Drawing::new();
        assert!(drawing.anchor(b).unwrap().index_in(&other).is_err());
    }

    #[test]
    fn test_rejected_options_do_not_register() {
        let mut drawing = Drawing::new();
        assert!(drawing.add_image(AnchorOptions::new().with_size(10, -10)).is_err());
        assert!(drawing.add_image(AnchorOptions::new().with_image_src("a.tiff")).is_err());
        assert!(drawing.is_empty());
    }

    #[test]
    fn test_anchor_mut_setters() {
        let (mut drawing, _, b, _) = three_images();
        let anchor = drawing.anchor_mut(b).unwrap();
        anchor.set_width(1).unwrap();
        assert!(anchor.set_height(-2).is_err());
        assert_eq!(drawing.anchor(b).unwrap().extent(), (9_525, 0));
    }

    #[test]
    fn test_shape_ids_follow_position() {
        let (mut drawing, a, b, _) = three_images();
        drawing.remove_anchor(a).unwrap();
        let xml = drawing.anchor(b).unwrap().to_xml_string(&drawing).unwrap();
        assert!(xml.contains(r#"<xdr:cNvPr id="2" name="B""#));
        assert!(xml.contains(r#"r:embed="rId1""#));
    }

    #[test]
    fn test_relationship_prefix_declared_once_on_root() {
        let mut drawing = Drawing::new();
        drawing.add_image(AnchorOptions::new().with_image_src("a.png")).unwrap();
        drawing.add_chart_frame(AnchorOptions::new()).unwrap();

        let xml = drawing.to_xml_string().unwrap();
        let root = format!(
            r#"<xdr:wsDr xmlns:xdr="{}" xmlns:a="{}" xmlns:r="{}">"#,
            SPREADSHEET_DRAWING_NS, DRAWINGML_NS, RELATIONSHIPS_NS
        );
        assert!(xml.contains(&root));
        assert_eq!(xml.matches("xmlns:r=").count(), 1);
        assert!(xml.contains(r#"<a:blip r:embed="rId1"/>"#));
        assert!(xml.contains(r#"r:id="rId2""#));
    }

    #[test]
    fn test_write_xml_is_well_formed_and_ordered() {
        let mut drawing = Drawing::new();
        drawing
            .add_image(AnchorOptions::new().with_image_src("a.png").with_size(100, 50))
            .unwrap();
        drawing
            .add_chart_frame(AnchorOptions::new().with_name("Chart 1").with_start_at(5, 1))
            .unwrap();

        let xml = drawing.to_xml_string().unwrap();
        let mut reader = Reader::from_str(&xml);
        let mut anchor_children = Vec::new();
        let mut depth = 0usize;
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    if depth == 2 {
                        anchor_children.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                    }
                    depth += 1;
                },
                Ok(Event::Empty(e)) => {
                    if depth == 2 {
                        anchor_children.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                    }
                },
                Ok(Event::End(_)) => depth -= 1,
                Ok(Event::Eof) => break,
                Err(e) => panic!("malformed drawing xml: {e}"),
                _ => {},
            }
        }

        assert_eq!(
            anchor_children,
            [
                "xdr:from",
                "xdr:ext",
                "xdr:pic",
                "xdr:clientData",
                "xdr:from",
                "xdr:ext",
                "xdr:graphicFrame",
                "xdr:clientData",
            ]
        );
    }
}
