//! One-cell anchors.
//!
//! A one-cell anchor pins a graphical object's top-left corner to a cell and
//! gives it an explicit size. Sizes are stored in pixels and converted to EMU
//! only when the anchor is written.

use crate::common::unit::px_to_emu_96;
use crate::common::validate::validate_unsigned_int;
use crate::ooxml::drawings::drawing::Drawing;
use crate::ooxml::drawings::graphic_frame::GraphicFrame;
use crate::ooxml::drawings::marker::Marker;
use crate::ooxml::drawings::pic::Pic;
use crate::ooxml::error::Result;
use serde::Deserialize;
use std::fmt;
use std::io::{self, Write};

/// Stable handle of an anchor inside its [`Drawing`].
///
/// Handles are never reused by a drawing, so a handle to a removed anchor
/// cannot silently resolve to a sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(u32);

impl AnchorId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Configuration for a new anchor and the object it hosts.
///
/// Every recognised option is listed here; deserializing a configuration
/// with any other key fails.
///
/// # Example
///
/// ```
/// use sheetdraw::ooxml::drawings::AnchorOptions;
///
/// let options = AnchorOptions::new()
///     .with_start_at(2, 4)
///     .with_size(320, 240)
///     .with_image_src("logo.png")
///     .with_name("Logo");
/// assert_eq!(options.width, Some(320));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AnchorOptions {
    /// Top-left cell as `(col, row)`, both 0-based
    pub start_at: Option<(u32, u32)>,
    /// Width in pixels
    pub width: Option<i64>,
    /// Height in pixels
    pub height: Option<i64>,
    /// Name of the hosted object
    pub name: Option<String>,
    /// Description (alt text) of the hosted object
    pub descr: Option<String>,
    /// Image file for hosted pictures
    pub image_src: Option<String>,
}

impl AnchorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_at(mut self, col: u32, row: u32) -> Self {
        self.start_at = Some((col, row));
        self
    }

    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_descr(mut self, descr: impl Into<String>) -> Self {
        self.descr = Some(descr.into());
        self
    }

    pub fn with_image_src(mut self, src: impl Into<String>) -> Self {
        self.image_src = Some(src.into());
        self
    }
}

/// The graphical object an anchor positions.
#[derive(Debug, Clone, PartialEq)]
pub enum AnchoredObject {
    /// A picture
    Pic(Pic),
    /// A frame holding a chart
    GraphicFrame(GraphicFrame),
}

impl AnchoredObject {
    fn write_xml<W: Write>(
        &self,
        writer: &mut W,
        index: usize,
        cx: i64,
        cy: i64,
    ) -> io::Result<()> {
        match self {
            Self::Pic(pic) => pic.write_xml(writer, index, cx, cy),
            Self::GraphicFrame(frame) => frame.write_xml(writer, index, cx, cy),
        }
    }
}

/// An `xdr:oneCellAnchor`.
#[derive(Debug, Clone, PartialEq)]
pub struct OneCellAnchor {
    id: AnchorId,
    from: Marker,
    width: u32,
    height: u32,
    object: AnchoredObject,
}

impl OneCellAnchor {
    /// Build an anchor, applying every option before the anchor exists.
    ///
    /// `make_object` receives the same options so the hosted object is
    /// configured from one source.
    pub(crate) fn new<F>(id: AnchorId, options: &AnchorOptions, make_object: F) -> Result<Self>
    where
        F: FnOnce(&AnchorOptions) -> Result<AnchoredObject>,
    {
        let mut anchor = Self {
            id,
            from: Marker::default(),
            width: 0,
            height: 0,
            object: make_object(options)?,
        };
        if let Some((col, row)) = options.start_at {
            anchor.from = Marker::new(col, row);
        }
        if let Some(width) = options.width {
            anchor.set_width(width)?;
        }
        if let Some(height) = options.height {
            anchor.set_height(height)?;
        }
        Ok(anchor)
    }

    /// The anchor's handle in its drawing.
    #[inline]
    pub fn id(&self) -> AnchorId {
        self.id
    }

    /// The cell the object's top-left corner is pinned to.
    #[inline]
    pub fn from(&self) -> &Marker {
        &self.from
    }

    #[inline]
    pub fn from_mut(&mut self) -> &mut Marker {
        &mut self.from
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set the width in pixels; negative or out-of-range values are rejected
    /// and leave the current width in place.
    pub fn set_width(&mut self, px: i64) -> Result<()> {
        self.width = validate_unsigned_int("width", px)?;
        Ok(())
    }

    /// Set the height in pixels; negative or out-of-range values are rejected
    /// and leave the current height in place.
    pub fn set_height(&mut self, px: i64) -> Result<()> {
        self.height = validate_unsigned_int("height", px)?;
        Ok(())
    }

    /// The extent `(cx, cy)` in EMU.
    #[inline]
    pub fn extent(&self) -> (i64, i64) {
        (px_to_emu_96(self.width), px_to_emu_96(self.height))
    }

    #[inline]
    pub fn object(&self) -> &AnchoredObject {
        &self.object
    }

    #[inline]
    pub fn object_mut(&mut self) -> &mut AnchoredObject {
        &mut self.object
    }

    /// Zero-based position of this anchor in `drawing`.
    ///
    /// Looked up on every call, so removing a sibling is reflected at once.
    /// Fails with [`crate::ooxml::error::OoxmlError::DetachedAnchor`] if the
    /// drawing does not hold this anchor.
    pub fn index_in(&self, drawing: &Drawing) -> Result<usize> {
        drawing.index_of(self.id)
    }

    /// Write this anchor as it appears in `drawing`.
    pub fn write_xml<W: Write>(&self, drawing: &Drawing, writer: &mut W) -> Result<()> {
        let index = self.index_in(drawing)?;
        self.write_xml_at(index, writer)?;
        Ok(())
    }

    /// Serialize this anchor to a string as it appears in `drawing`.
    pub fn to_xml_string(&self, drawing: &Drawing) -> Result<String> {
        let mut out = Vec::with_capacity(1024);
        self.write_xml(drawing, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    pub(crate) fn write_xml_at<W: Write>(&self, index: usize, writer: &mut W) -> io::Result<()> {
        let (cx, cy) = self.extent();
        tracing::trace!(anchor = %self.id, index, cx, cy, "writing oneCellAnchor");

        writer.write_all(b"<xdr:oneCellAnchor>")?;
        writer.write_all(b"<xdr:from>")?;
        self.from.write_xml(writer)?;
        writer.write_all(b"</xdr:from>")?;
        write!(writer, r#"<xdr:ext cx="{}" cy="{}"/>"#, cx, cy)?;
        self.object.write_xml(writer, index, cx, cy)?;
        writer.write_all(b"<xdr:clientData/>")?;
        writer.write_all(b"</xdr:oneCellAnchor>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::error::OoxmlError;

    fn pic_anchor(options: &AnchorOptions) -> Result<OneCellAnchor> {
        OneCellAnchor::new(AnchorId::new(1), options, |o| {
            Ok(AnchoredObject::Pic(Pic::from_options(o)?))
        })
    }

    #[test]
    fn test_defaults() {
        let anchor = pic_anchor(&AnchorOptions::new()).unwrap();
        assert_eq!(anchor.width(), 0);
        assert_eq!(anchor.height(), 0);
        assert_eq!(*anchor.from(), Marker::new(0, 0));
        assert_eq!(anchor.extent(), (0, 0));
    }

    #[test]
    fn test_options_apply_to_anchor_and_object() {
        let options = AnchorOptions::new()
            .with_start_at(4, 9)
            .with_size(100, 50)
            .with_name("Logo")
            .with_image_src("logo.gif");
        let anchor = pic_anchor(&options).unwrap();

        assert_eq!(*anchor.from(), Marker::new(4, 9));
        assert_eq!((anchor.width(), anchor.height()), (100, 50));
        assert_eq!(anchor.extent(), (952_500, 476_250));
        match anchor.object() {
            AnchoredObject::Pic(pic) => {
                assert_eq!(pic.name(), "Logo");
                assert_eq!(pic.image_src(), Some("logo.gif"));
            },
            other => panic!("unexpected object: {other:?}"),
        }
    }

    #[test]
    fn test_setters_keep_pixels() {
        let mut anchor = pic_anchor(&AnchorOptions::new()).unwrap();
        anchor.set_width(640).unwrap();
        anchor.set_height(480).unwrap();
        assert_eq!(anchor.width(), 640);
        assert_eq!(anchor.height(), 480);
    }

    #[test]
    fn test_invalid_size_leaves_previous_value() {
        let mut anchor = pic_anchor(&AnchorOptions::new().with_size(10, 20)).unwrap();

        let err = anchor.set_width(-1).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidValue { field: "width", .. }));
        assert_eq!(anchor.width(), 10);

        let err = anchor.set_height(i64::from(u32::MAX) + 1).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidValue { field: "height", .. }));
        assert_eq!(anchor.height(), 20);
    }

    #[test]
    fn test_invalid_options_fail_construction() {
        let err = pic_anchor(&AnchorOptions::new().with_size(-5, 10)).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidValue { field: "width", .. }));

        let err = pic_anchor(&AnchorOptions::new().with_image_src("x.bmp")).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidValue { field: "image_src", .. }));
    }

    #[test]
    fn test_options_reject_unknown_keys() {
        let parsed: std::result::Result<AnchorOptions, _> =
            serde_json::from_str(r#"{"width": 10, "colour": "red"}"#);
        assert!(parsed.is_err());

        let parsed: AnchorOptions =
            serde_json::from_str(r#"{"start_at": [1, 2], "width": 10, "height": 5}"#).unwrap();
        assert_eq!(parsed, AnchorOptions::new().with_start_at(1, 2).with_size(10, 5));
    }

    #[test]
    fn test_write_xml_at_element_order() {
        let anchor = pic_anchor(&AnchorOptions::new().with_size(100, 50)).unwrap();
        let mut out = Vec::new();
        anchor.write_xml_at(0, &mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();

        let from = xml.find("<xdr:from>").unwrap();
        let ext = xml.find(r#"<xdr:ext cx="952500" cy="476250"/>"#).unwrap();
        let pic = xml.find("<xdr:pic>").unwrap();
        let client_data = xml.find("<xdr:clientData/>").unwrap();

        assert!(xml.starts_with("<xdr:oneCellAnchor>"));
        assert!(from < ext && ext < pic && pic < client_data);
        assert_eq!(xml.matches("<xdr:clientData/>").count(), 1);
        assert!(xml.ends_with("<xdr:clientData/></xdr:oneCellAnchor>"));
    }
}
