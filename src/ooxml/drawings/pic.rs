//! Pictures hosted by a drawing anchor.

use crate::common::validate::{XmlToken, validate_enum_member};
use crate::common::xml::escape_xml;
use crate::ooxml::drawings::anchor::AnchorOptions;
use crate::ooxml::drawings::blip::{write_a_blip_embed_rid_num, write_a_stretch_fill_rect};
use crate::ooxml::drawings::xfrm::write_a_xfrm_off_ext;
use crate::ooxml::error::Result;
use std::io::{self, Write};

/// Image formats a picture may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Gif,
    Jpeg,
    Jpg,
    Png,
}

impl ImageFormat {
    /// MIME type registered for the image part.
    #[inline]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Gif => "image/gif",
            Self::Jpeg | Self::Jpg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

impl XmlToken for ImageFormat {
    const ALL: &'static [Self] = &[Self::Gif, Self::Jpeg, Self::Jpg, Self::Png];

    fn xml_value(&self) -> &'static str {
        match self {
            Self::Gif => "gif",
            Self::Jpeg => "jpeg",
            Self::Jpg => "jpg",
            Self::Png => "png",
        }
    }
}

/// A picture (`xdr:pic`) positioned by an anchor.
///
/// The picture carries no size of its own: its extent is the anchor's, passed
/// in when the picture is written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pic {
    name: String,
    descr: String,
    image_src: Option<String>,
    format: Option<ImageFormat>,
}

impl Pic {
    /// Create an empty picture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a picture from the options given to its anchor.
    pub fn from_options(options: &AnchorOptions) -> Result<Self> {
        let mut pic = Self::new();
        if let Some(name) = &options.name {
            pic.set_name(name.clone());
        }
        if let Some(descr) = &options.descr {
            pic.set_descr(descr.clone());
        }
        if let Some(src) = &options.image_src {
            pic.set_image_src(src.clone())?;
        }
        Ok(pic)
    }

    /// The picture name shown by spreadsheet applications.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Alternative text for the picture.
    pub fn descr(&self) -> &str {
        &self.descr
    }

    pub fn set_descr(&mut self, descr: impl Into<String>) {
        self.descr = descr.into();
    }

    /// Location of the image file to embed.
    pub fn image_src(&self) -> Option<&str> {
        self.image_src.as_deref()
    }

    /// Format derived from the image file's extension.
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Set the image file, rejecting extensions other than gif, jpeg, jpg and png.
    pub fn set_image_src(&mut self, src: impl Into<String>) -> Result<()> {
        let src = src.into();
        let extension = src
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let format = validate_enum_member::<ImageFormat>("image_src", &extension)?;
        self.format = Some(format);
        self.image_src = Some(src);
        Ok(())
    }

    /// Write the `xdr:pic` element.
    ///
    /// `index` is the hosting anchor's position in its drawing; it determines the
    /// shape id and the image relationship id.
    pub fn write_xml<W: Write>(
        &self,
        writer: &mut W,
        index: usize,
        cx: i64,
        cy: i64,
    ) -> io::Result<()> {
        writer.write_all(b"<xdr:pic><xdr:nvPicPr>")?;
        write!(
            writer,
            r#"<xdr:cNvPr id="{}" name="{}" descr="{}"/>"#,
            index + 2,
            escape_xml(&self.name),
            escape_xml(&self.descr)
        )?;
        writer.write_all(
            br#"<xdr:cNvPicPr><a:picLocks noChangeAspect="1"/></xdr:cNvPicPr></xdr:nvPicPr>"#,
        )?;

        writer.write_all(b"<xdr:blipFill>")?;
        write_a_blip_embed_rid_num(writer, index + 1)?;
        write_a_stretch_fill_rect(writer)?;
        writer.write_all(b"</xdr:blipFill>")?;

        writer.write_all(b"<xdr:spPr>")?;
        write_a_xfrm_off_ext(writer, 0, 0, cx, cy)?;
        writer.write_all(br#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></xdr:spPr>"#)?;
        writer.write_all(b"</xdr:pic>")
    }

    /// Serialize the `xdr:pic` element to a string.
    pub fn to_xml_string(&self, index: usize, cx: i64, cy: i64) -> String {
        let mut out = Vec::with_capacity(512);
        // Writing into a Vec cannot fail.
        let _ = self.write_xml(&mut out, index, cx, cy);
        String::from_utf8_lossy(&out).into_owned()
    }
}
