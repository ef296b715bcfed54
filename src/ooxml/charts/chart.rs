//! Chart part envelope.
//!
//! Every chart kind shares the `c:chartSpace` / `c:chart` / `c:plotArea`
//! envelope (title, legend, display options). A kind only supplies the
//! contents of the plot area through [`ChartKind::write_body`].

use crate::common::validate::{validate_enum_member, validate_int_range};
use crate::common::xml::{write_bool_val, write_int_val, write_token_val};
use crate::ooxml::charts::legend::Legend;
use crate::ooxml::charts::models::TitleText;
use crate::ooxml::charts::types::{DisplayBlanks, LegendPosition};
use crate::ooxml::charts::writer::{write_legend, write_title};
use crate::ooxml::drawings::graphic_frame::CHART_NS;
use crate::ooxml::drawings::{blip::RELATIONSHIPS_NS, drawing::DRAWINGML_NS};
use crate::ooxml::error::Result;
use serde::Deserialize;
use std::io::{self, Write};

/// A concrete chart kind.
///
/// Implementors write their type group element and the axes it plots
/// against; the surrounding envelope is written by [`Chart`].
pub trait ChartKind {
    /// Write the plot area contents for this kind: the type group element
    /// followed by the axes it plots against.
    fn write_body<W: Write>(&self, writer: &mut W) -> io::Result<()>;
}

/// Chart configuration.
///
/// Deserializing a configuration with an unrecognised key fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ChartOptions {
    /// Literal chart title
    pub title: Option<String>,
    /// Scatter style token (`none`, `line`, `lineMarker`, `marker`, `smooth`, `smoothMarker`)
    pub scatter_style: Option<String>,
    /// Whether to show a legend
    pub show_legend: Option<bool>,
    /// Legend position token (`b`, `l`, `r`, `t`, `tr`)
    pub legend_position: Option<String>,
    /// Built-in chart style, 1 to 48
    pub style: Option<i64>,
}

impl ChartOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_scatter_style(mut self, style: impl Into<String>) -> Self {
        self.scatter_style = Some(style.into());
        self
    }

    pub fn with_legend(mut self, position: impl Into<String>) -> Self {
        self.show_legend = Some(true);
        self.legend_position = Some(position.into());
        self
    }

    pub fn with_style(mut self, style: i64) -> Self {
        self.style = Some(style);
        self
    }
}

/// A chart part: the shared envelope around one chart kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart<K: ChartKind> {
    /// Chart title
    pub title: Option<TitleText>,
    /// Whether the automatic title has been deleted
    pub auto_title_deleted: bool,
    /// Chart legend
    pub legend: Option<Legend>,
    /// Plot only visible cells
    pub plot_visible_only: bool,
    /// How to display blank values
    pub display_blanks_as: DisplayBlanks,
    /// Rounded chart area corners
    pub rounded_corners: bool,
    style: Option<u32>,
    kind: K,
}

impl<K: ChartKind> Chart<K> {
    /// Wrap a chart kind in a default envelope.
    pub fn new(kind: K) -> Self {
        Self {
            title: None,
            auto_title_deleted: false,
            legend: None,
            plot_visible_only: true,
            display_blanks_as: DisplayBlanks::Gap,
            rounded_corners: false,
            style: None,
            kind,
        }
    }

    /// Apply the envelope-level options (title, legend, style).
    pub fn apply_options(&mut self, options: &ChartOptions) -> Result<()> {
        let position = options
            .legend_position
            .as_deref()
            .map(|p| validate_enum_member::<LegendPosition>("legend_position", p))
            .transpose()?;
        if let Some(style) = options.style {
            self.set_style(style)?;
        }
        if let Some(title) = &options.title {
            self.title = Some(TitleText::from_string(title.clone()));
        }
        match (options.show_legend, position) {
            (Some(false), _) => self.legend = None,
            (Some(true), position) | (None, position @ Some(_)) => {
                self.legend = Some(Legend::new(position.unwrap_or_default()));
            },
            (None, None) => {},
        }
        Ok(())
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(TitleText::from_string(title));
        self
    }

    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Built-in chart style.
    pub fn style(&self) -> Option<u32> {
        self.style
    }

    /// Select a built-in chart style; only 1 to 48 exist.
    pub fn set_style(&mut self, style: i64) -> Result<()> {
        self.style = Some(validate_int_range("style", style, 1..=48)?);
        Ok(())
    }

    /// The chart kind.
    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut K {
        &mut self.kind
    }

    /// Write a complete chart part.
    pub fn write_chart<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        tracing::trace!(kind = std::any::type_name::<K>(), "writing chart part");

        write!(
            writer,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#
        )?;
        write!(
            writer,
            r#"<c:chartSpace xmlns:c="{}" xmlns:a="{}" xmlns:r="{}">"#,
            CHART_NS, DRAWINGML_NS, RELATIONSHIPS_NS
        )?;

        write_bool_val(writer, "c:date1904", false)?;
        write_token_val(writer, "c:lang", "en-US")?;
        write_bool_val(writer, "c:roundedCorners", self.rounded_corners)?;
        if let Some(style) = self.style {
            write_int_val(writer, "c:style", style)?;
        }

        write!(writer, "<c:chart>")?;

        if let Some(ref title) = self.title {
            write_title(writer, title)?;
        }
        write_bool_val(writer, "c:autoTitleDeleted", self.auto_title_deleted)?;

        write!(writer, "<c:plotArea>")?;
        write!(writer, "<c:layout/>")?;
        self.kind.write_body(writer)?;
        write!(writer, "</c:plotArea>")?;

        if let Some(ref legend) = self.legend {
            write_legend(writer, legend)?;
        }

        write_bool_val(writer, "c:plotVisOnly", self.plot_visible_only)?;
        write_token_val(writer, "c:dispBlanksAs", self.display_blanks_as.xml_value())?;

        write!(writer, "</c:chart>")?;
        write!(writer, "</c:chartSpace>")?;

        Ok(())
    }

    /// Serialize the chart part to a string.
    pub fn to_xml_string(&self) -> String {
        let mut out = Vec::with_capacity(4096);
        // Writing into a Vec cannot fail.
        let _ = self.write_chart(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}
