//! Chart axis models.
//!
//! Scatter charts plot against two value axes. Each axis records its own
//! `axId` and the `axId` of the axis it crosses, so both can be written on
//! their own and still declare their pairing.

use crate::ooxml::charts::models::TitleText;
use crate::ooxml::charts::types::{AxisOrientation, AxisPosition, TickLabelPosition, TickMark};
use crate::ooxml::charts::writer::write_value_axis;
use std::io::{self, Write};

/// Axis crossing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisCrossMode {
    /// Auto zero crossing
    AutoZero,
    /// Maximum value
    Max,
    /// Minimum value
    Min,
}

impl AxisCrossMode {
    /// Returns the XML value for this crossing mode.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::AutoZero => "autoZero",
            Self::Max => "max",
            Self::Min => "min",
        }
    }
}

/// Axis crossing position (between or mid-category).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisCrossBetween {
    /// Cross between categories
    Between,
    /// Cross at mid-category
    MidCategory,
}

impl AxisCrossBetween {
    /// Returns the XML value for this position.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Between => "between",
            Self::MidCategory => "midCat",
        }
    }
}

/// Common axis properties.
///
/// The identifier pair is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisCommon {
    axis_id: u32,
    cross_axis_id: u32,
    /// Axis position (bottom, left, right, top)
    pub position: AxisPosition,
    /// Axis title
    pub title: Option<TitleText>,
    /// Scaling orientation
    pub orientation: AxisOrientation,
    /// Major tick mark style
    pub major_tick_mark: TickMark,
    /// Minor tick mark style
    pub minor_tick_mark: TickMark,
    /// Tick label position
    pub tick_label_position: TickLabelPosition,
    /// Whether axis is deleted
    pub deleted: bool,
    /// Crossing mode
    pub cross_mode: AxisCrossMode,
    /// Specific crossing value (overrides cross_mode)
    pub crosses_at: Option<f64>,
    /// Show major gridlines
    pub show_major_gridlines: bool,
    /// Show minor gridlines
    pub show_minor_gridlines: bool,
}

impl AxisCommon {
    /// Create a new axis with default settings.
    #[inline]
    pub fn new(axis_id: u32, position: AxisPosition, cross_axis_id: u32) -> Self {
        Self {
            axis_id,
            cross_axis_id,
            position,
            title: None,
            orientation: AxisOrientation::MinMax,
            major_tick_mark: TickMark::Out,
            minor_tick_mark: TickMark::None,
            tick_label_position: TickLabelPosition::NextTo,
            deleted: false,
            cross_mode: AxisCrossMode::AutoZero,
            crosses_at: None,
            show_major_gridlines: false,
            show_minor_gridlines: false,
        }
    }

    /// This axis's identifier.
    #[inline]
    pub fn axis_id(&self) -> u32 {
        self.axis_id
    }

    /// Identifier of the axis this one crosses.
    #[inline]
    pub fn cross_axis_id(&self) -> u32 {
        self.cross_axis_id
    }
}

/// Value axis (`c:valAx`).
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAxis {
    /// Common axis properties
    pub common: AxisCommon,
    /// Minimum value
    pub min: Option<f64>,
    /// Maximum value
    pub max: Option<f64>,
    /// Major unit
    pub major_unit: Option<f64>,
    /// Minor unit
    pub minor_unit: Option<f64>,
    /// Cross between categories
    pub cross_between: AxisCrossBetween,
}

impl ValueAxis {
    /// Create a new value axis.
    #[inline]
    pub fn new(axis_id: u32, position: AxisPosition, cross_axis_id: u32) -> Self {
        Self {
            common: AxisCommon::new(axis_id, position, cross_axis_id),
            min: None,
            max: None,
            major_unit: None,
            minor_unit: None,
            cross_between: AxisCrossBetween::Between,
        }
    }

    /// Build the two crossing axes of an XY plot: a bottom axis with
    /// `x_id` and a left axis with `y_id`, each referencing the other.
    pub fn crossing_pair(x_id: u32, y_id: u32) -> (Self, Self) {
        (
            Self::new(x_id, AxisPosition::Bottom, y_id),
            Self::new(y_id, AxisPosition::Left, x_id),
        )
    }

    #[inline]
    pub fn axis_id(&self) -> u32 {
        self.common.axis_id()
    }

    #[inline]
    pub fn cross_axis_id(&self) -> u32 {
        self.common.cross_axis_id()
    }

    /// Set the axis title.
    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.common.title = Some(TitleText::from_string(title));
        self
    }

    /// Set the axis range.
    #[inline]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Set the major unit.
    #[inline]
    pub fn with_major_unit(mut self, unit: f64) -> Self {
        self.major_unit = Some(unit);
        self
    }

    /// Show major gridlines.
    #[inline]
    pub fn with_major_gridlines(mut self, show: bool) -> Self {
        self.common.show_major_gridlines = show;
        self
    }

    /// Write the complete `c:valAx` element.
    pub fn write_xml<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_value_axis(writer, self)
    }

    /// Serialize the `c:valAx` element to a string.
    pub fn to_xml_string(&self) -> String {
        let mut out = Vec::with_capacity(512);
        // Writing into a Vec cannot fail.
        let _ = self.write_xml(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}
