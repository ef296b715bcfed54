//! Chart enumerations.
//!
//! Closed vocabularies that can be set from text implement [`XmlToken`], so
//! their allowed set is checked by
//! [`validate_enum_member`](crate::common::validate::validate_enum_member).

use crate::common::validate::{XmlToken, validate_enum_member};
use crate::ooxml::error::OoxmlError;
use std::fmt;
use std::str::FromStr;

/// Scatter chart style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScatterStyle {
    /// No line or markers
    None,
    /// Line only
    Line,
    /// Line with markers
    #[default]
    LineMarker,
    /// Markers only
    Marker,
    /// Smooth line only
    Smooth,
    /// Smooth line with markers
    SmoothMarker,
}

impl ScatterStyle {
    /// Returns the XML value for this scatter style.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Line => "line",
            Self::LineMarker => "lineMarker",
            Self::Marker => "marker",
            Self::Smooth => "smooth",
            Self::SmoothMarker => "smoothMarker",
        }
    }
}

impl XmlToken for ScatterStyle {
    const ALL: &'static [Self] = &[
        Self::None,
        Self::Line,
        Self::LineMarker,
        Self::Marker,
        Self::Smooth,
        Self::SmoothMarker,
    ];

    fn xml_value(&self) -> &'static str {
        ScatterStyle::xml_value(self)
    }
}

impl FromStr for ScatterStyle {
    type Err = OoxmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_enum_member("scatter_style", s)
    }
}

impl fmt::Display for ScatterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xml_value())
    }
}

/// Axis position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    /// Bottom position
    Bottom,
    /// Left position
    Left,
    /// Right position
    Right,
    /// Top position
    Top,
}

impl AxisPosition {
    /// Returns the XML value for this position.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bottom => "b",
            Self::Left => "l",
            Self::Right => "r",
            Self::Top => "t",
        }
    }
}

/// Axis orientation (min to max or max to min).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    /// Min to max (normal)
    MinMax,
    /// Max to min (reversed)
    MaxMin,
}

impl AxisOrientation {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::MinMax => "minMax",
            Self::MaxMin => "maxMin",
        }
    }
}

/// Tick mark style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickMark {
    Cross,
    In,
    None,
    Out,
}

impl TickMark {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Cross => "cross",
            Self::In => "in",
            Self::None => "none",
            Self::Out => "out",
        }
    }
}

/// Tick label position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickLabelPosition {
    /// High position
    High,
    /// Low position
    Low,
    /// Next to axis
    NextTo,
    /// No tick labels
    None,
}

impl TickLabelPosition {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
            Self::NextTo => "nextTo",
            Self::None => "none",
        }
    }
}

/// Legend position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    /// Bottom position
    Bottom,
    /// Left position
    Left,
    /// Right position
    #[default]
    Right,
    /// Top position
    Top,
    /// Top right corner
    TopRight,
}

impl LegendPosition {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bottom => "b",
            Self::Left => "l",
            Self::Right => "r",
            Self::Top => "t",
            Self::TopRight => "tr",
        }
    }
}

impl XmlToken for LegendPosition {
    const ALL: &'static [Self] = &[
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::TopRight,
    ];

    fn xml_value(&self) -> &'static str {
        LegendPosition::xml_value(self)
    }
}

/// How empty cells are plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayBlanks {
    /// Leave a gap
    #[default]
    Gap,
    /// Connect the neighbouring points
    Span,
    /// Plot as zero
    Zero,
}

impl DisplayBlanks {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Gap => "gap",
            Self::Span => "span",
            Self::Zero => "zero",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_style_default_is_line_marker() {
        assert_eq!(ScatterStyle::default(), ScatterStyle::LineMarker);
    }

    #[test]
    fn test_scatter_style_round_trips_through_text() {
        for style in ScatterStyle::ALL {
            assert_eq!(style.to_string().parse::<ScatterStyle>().unwrap(), *style);
        }
    }

    #[test]
    fn test_scatter_style_rejects_other_tokens() {
        for bad in ["", "Line", "lineMarkers", "standard", "filled"] {
            let err = bad.parse::<ScatterStyle>().unwrap_err();
            assert_eq!(
                err.to_string(),
                format!(
                    "Invalid value for scatter_style: {bad:?} (expected one of [none, line, lineMarker, marker, smooth, smoothMarker])"
                )
            );
        }
    }
}
