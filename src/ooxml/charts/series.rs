//! Chart series models.

use crate::ooxml::charts::models::{NumericData, TitleText};
use crate::ooxml::charts::writer::write_scatter_series;
use std::io::{self, Write};

/// A series of an XY (scatter) chart.
///
/// `index` and `order` are assigned from the series' position when it is
/// added to a chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterSeries {
    /// Series index
    pub index: u32,
    /// Plot order
    pub order: u32,
    /// Series title
    pub title: Option<TitleText>,
    /// X values
    pub x_values: Option<NumericData>,
    /// Y values
    pub y_values: Option<NumericData>,
    /// Draw a smoothed line through the points
    pub smooth: Option<bool>,
}

impl ScatterSeries {
    /// Create a new, empty series.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a series from X and Y range formulas.
    pub fn from_refs(x_values: impl Into<String>, y_values: impl Into<String>) -> Self {
        Self {
            x_values: Some(NumericData::from_ref(x_values)),
            y_values: Some(NumericData::from_ref(y_values)),
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(TitleText::from_string(title));
        self
    }

    #[inline]
    pub fn with_x_values(mut self, data: NumericData) -> Self {
        self.x_values = Some(data);
        self
    }

    #[inline]
    pub fn with_y_values(mut self, data: NumericData) -> Self {
        self.y_values = Some(data);
        self
    }

    #[inline]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = Some(smooth);
        self
    }

    /// Write the `c:ser` element.
    pub fn write_xml<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_scatter_series(writer, self)
    }

    /// Serialize the `c:ser` element to a string.
    pub fn to_xml_string(&self) -> String {
        let mut out = Vec::with_capacity(512);
        // Writing into a Vec cannot fail.
        let _ = self.write_xml(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}
