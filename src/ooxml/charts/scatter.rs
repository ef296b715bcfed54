//! Scatter (XY) charts.

use crate::common::id::AxisIdAllocator;
use crate::common::xml::{write_bool_val, write_int_val, write_token_val};
use crate::ooxml::charts::axis::ValueAxis;
use crate::ooxml::charts::chart::{Chart, ChartKind, ChartOptions};
use crate::ooxml::charts::models::TitleText;
use crate::ooxml::charts::series::ScatterSeries;
use crate::ooxml::charts::types::ScatterStyle;
use crate::ooxml::charts::writer::write_data_labels_default;
use crate::ooxml::error::Result;
use std::io::{self, Write};

/// The `c:scatterChart` type group and its two value axes.
///
/// The axis identifiers are drawn from the document's [`AxisIdAllocator`]
/// when the chart is created and never change afterwards.
///
/// # Example
///
/// ```
/// use sheetdraw::common::id::AxisIdAllocator;
/// use sheetdraw::ooxml::charts::{Chart, ScatterChart, ScatterSeries};
///
/// let mut ids = AxisIdAllocator::sequential();
/// let mut chart = Chart::new(ScatterChart::new(&mut ids)?);
/// chart.kind_mut().set_scatter_style("smoothMarker")?;
/// chart
///     .kind_mut()
///     .add_series(ScatterSeries::from_refs("Sheet1!$A$2:$A$9", "Sheet1!$B$2:$B$9"));
///
/// let xml = chart.to_xml_string();
/// assert!(xml.contains(r#"<c:scatterStyle val="smoothMarker"/>"#));
/// # Ok::<(), sheetdraw::ooxml::error::OoxmlError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    scatter_style: ScatterStyle,
    x_axis: ValueAxis,
    y_axis: ValueAxis,
    series: Vec<ScatterSeries>,
}

impl ScatterChart {
    /// Create an empty scatter chart with the `lineMarker` style.
    ///
    /// Fails only when `ids` has no identifiers left.
    pub fn new(ids: &mut AxisIdAllocator) -> Result<Self> {
        let (x_id, y_id) = ids.allocate_pair()?;
        let (x_axis, y_axis) = ValueAxis::crossing_pair(x_id, y_id);
        tracing::debug!(x_id, y_id, "created scatter chart");
        Ok(Self {
            scatter_style: ScatterStyle::default(),
            x_axis,
            y_axis,
            series: Vec::new(),
        })
    }

    /// The current scatter style.
    #[inline]
    pub fn scatter_style(&self) -> ScatterStyle {
        self.scatter_style
    }

    /// Set the scatter style from its XML token.
    ///
    /// Anything outside `none`, `line`, `lineMarker`, `marker`, `smooth` and
    /// `smoothMarker` is rejected and the current style is kept.
    pub fn set_scatter_style(&mut self, style: &str) -> Result<()> {
        self.scatter_style = style.parse()?;
        Ok(())
    }

    #[inline]
    pub fn with_scatter_style(mut self, style: ScatterStyle) -> Self {
        self.scatter_style = style;
        self
    }

    /// The horizontal (X) axis.
    #[inline]
    pub fn x_axis(&self) -> &ValueAxis {
        &self.x_axis
    }

    /// The vertical (Y) axis.
    #[inline]
    pub fn y_axis(&self) -> &ValueAxis {
        &self.y_axis
    }

    /// The `(x, y)` axis identifiers.
    #[inline]
    pub fn axis_ids(&self) -> (u32, u32) {
        (self.x_axis.axis_id(), self.y_axis.axis_id())
    }

    /// Set the titles of both axes.
    pub fn with_axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis.common.title = Some(TitleText::from_string(x));
        self.y_axis.common.title = Some(TitleText::from_string(y));
        self
    }

    /// Series in plot order.
    #[inline]
    pub fn series(&self) -> &[ScatterSeries] {
        &self.series
    }

    /// Append a series; its `idx` and `order` become its position.
    pub fn add_series(&mut self, mut series: ScatterSeries) -> &mut ScatterSeries {
        let position = self.series.len() as u32;
        series.index = position;
        series.order = position;
        self.series.push(series);
        tracing::debug!(index = position, "added scatter series");
        let last = self.series.len() - 1;
        &mut self.series[last]
    }

    /// Serialize the plot area contents (type group and both axes) to a string.
    pub fn to_xml_string(&self) -> String {
        let mut out = Vec::with_capacity(2048);
        // Writing into a Vec cannot fail.
        let _ = self.write_body(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}

impl ChartKind for ScatterChart {
    fn write_body<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let (x_id, y_id) = self.axis_ids();

        write!(writer, "<c:scatterChart>")?;
        write_token_val(writer, "c:scatterStyle", self.scatter_style.xml_value())?;
        write_bool_val(writer, "c:varyColors", true)?;

        for series in &self.series {
            series.write_xml(writer)?;
        }

        write_data_labels_default(writer)?;
        write_int_val(writer, "c:axId", x_id)?;
        write_int_val(writer, "c:axId", y_id)?;
        write!(writer, "</c:scatterChart>")?;

        self.x_axis.write_xml(writer)?;
        self.y_axis.write_xml(writer)?;

        Ok(())
    }
}

impl Chart<ScatterChart> {
    /// Create a scatter chart part configured by `options`.
    ///
    /// Every option is validated before the chart is returned.
    pub fn scatter(ids: &mut AxisIdAllocator, options: &ChartOptions) -> Result<Self> {
        let style = options
            .scatter_style
            .as_deref()
            .map(str::parse::<ScatterStyle>)
            .transpose()?;
        let mut chart = Chart::new(ScatterChart::new(ids)?);
        chart.apply_options(options)?;
        if let Some(style) = style {
            chart.kind_mut().scatter_style = style;
        }
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::models::NumericData;
    use crate::ooxml::error::OoxmlError;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    /// Names of the top-level elements of a fragment, in document order.
    fn top_level_elements(xml: &str) -> Vec<String> {
        let wrapped = format!(r#"<root xmlns:c="c">{xml}</root>"#);
        let mut reader = Reader::from_str(&wrapped);
        let mut names = Vec::new();
        let mut depth = 0usize;
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    if depth == 1 {
                        names.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                    }
                    depth += 1;
                },
                Ok(Event::Empty(e)) => {
                    if depth == 1 {
                        names.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                    }
                },
                Ok(Event::End(_)) => depth -= 1,
                Ok(Event::Eof) => break,
                Err(e) => panic!("malformed xml: {e}"),
                _ => {},
            }
        }
        names
    }

    #[test]
    fn test_new_chart_defaults() {
        let mut ids = AxisIdAllocator::sequential();
        let chart = ScatterChart::new(&mut ids).unwrap();
        assert_eq!(chart.scatter_style(), ScatterStyle::LineMarker);
        assert_eq!(chart.axis_ids(), (1, 2));
        assert!(chart.series().is_empty());
    }

    #[test]
    fn test_axes_reference_each_other() {
        let mut ids = AxisIdAllocator::random();
        let chart = ScatterChart::new(&mut ids).unwrap();
        let (x, y) = (chart.x_axis(), chart.y_axis());
        assert_ne!(x.axis_id(), y.axis_id());
        assert_eq!(x.cross_axis_id(), y.axis_id());
        assert_eq!(y.cross_axis_id(), x.axis_id());
    }

    #[test]
    fn test_charts_in_one_document_do_not_share_ids() {
        let mut ids = AxisIdAllocator::sequential();
        let first = ScatterChart::new(&mut ids).unwrap();
        let second = ScatterChart::new(&mut ids).unwrap();
        assert_eq!(first.axis_ids(), (1, 2));
        assert_eq!(second.axis_ids(), (3, 4));
    }

    #[test]
    fn test_exhausted_allocator_fails_construction() {
        let mut ids = AxisIdAllocator::sequential_from(u32::MAX);
        assert!(matches!(
            ScatterChart::new(&mut ids),
            Err(OoxmlError::AxisIdsExhausted)
        ));
        let err = Chart::scatter(&mut ids, &ChartOptions::new()).unwrap_err();
        assert!(matches!(err, OoxmlError::AxisIdsExhausted));
    }

    #[test]
    fn test_set_scatter_style_accepts_exactly_the_vocabulary() {
        let mut ids = AxisIdAllocator::sequential();
        let mut chart = ScatterChart::new(&mut ids).unwrap();
        for token in ["none", "line", "lineMarker", "marker", "smooth", "smoothMarker"] {
            chart.set_scatter_style(token).unwrap();
            assert_eq!(chart.scatter_style().xml_value(), token);
        }

        chart.set_scatter_style("smooth").unwrap();
        let err = chart.set_scatter_style("dotted").unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidValue { field: "scatter_style", .. }));
        assert_eq!(chart.scatter_style(), ScatterStyle::Smooth);
    }

    #[test]
    fn test_empty_chart_body() {
        let mut ids = AxisIdAllocator::sequential();
        let chart = ScatterChart::new(&mut ids).unwrap();
        let xml = chart.to_xml_string();

        assert_eq!(top_level_elements(&xml), ["c:scatterChart", "c:valAx", "c:valAx"]);
        assert!(xml.starts_with(concat!(
            "<c:scatterChart>",
            r#"<c:scatterStyle val="lineMarker"/>"#,
            r#"<c:varyColors val="1"/>"#,
            "<c:dLbls>",
            r#"<c:showLegendKey val="0"/><c:showVal val="0"/><c:showCatName val="0"/>"#,
            r#"<c:showSerName val="0"/><c:showPercent val="0"/><c:showBubbleSize val="0"/>"#,
            "</c:dLbls>",
            r#"<c:axId val="1"/><c:axId val="2"/>"#,
            "</c:scatterChart>",
            r#"<c:valAx><c:axId val="1"/>"#,
        )));
        let y_axis = xml.find(r#"<c:valAx><c:axId val="2"/>"#).unwrap();
        assert!(xml[y_axis..].contains(r#"<c:crossAx val="1"/>"#));
    }

    #[test]
    fn test_series_keep_insertion_order() {
        let mut ids = AxisIdAllocator::sequential();
        let mut chart = ScatterChart::new(&mut ids).unwrap();
        chart.add_series(ScatterSeries::new().with_title("first"));
        chart
            .add_series(ScatterSeries::new().with_title("second"))
            .y_values = Some(NumericData::from_values(vec![1.0]));

        assert_eq!(chart.series()[1].index, 1);
        assert_eq!(chart.series()[1].order, 1);

        let xml = chart.to_xml_string();
        let first = xml.find("<c:v>first</c:v>").unwrap();
        let second = xml.find("<c:v>second</c:v>").unwrap();
        let labels = xml.find("<c:dLbls>").unwrap();
        assert!(xml.find(r#"<c:varyColors val="1"/>"#).unwrap() < first);
        assert!(first < second && second < labels);
    }

    #[test]
    fn test_scatter_from_options() {
        let mut ids = AxisIdAllocator::sequential();
        let options: ChartOptions = serde_json::from_str(
            r#"{"title": "Height vs weight", "scatter_style": "marker", "legend_position": "r"}"#,
        )
        .unwrap();
        let chart = Chart::scatter(&mut ids, &options).unwrap();
        assert_eq!(chart.kind().scatter_style(), ScatterStyle::Marker);
        assert!(chart.legend.is_some());

        let xml = chart.to_xml_string();
        assert!(xml.contains("<a:t>Height vs weight</a:t>"));
        assert!(xml.contains(r#"<c:scatterStyle val="marker"/>"#));
    }

    #[test]
    fn test_scatter_from_options_rejects_style() {
        let mut ids = AxisIdAllocator::sequential();
        let options = ChartOptions::new().with_scatter_style("bubbly");
        let err = Chart::scatter(&mut ids, &options).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidValue { field: "scatter_style", .. }));
    }

    #[test]
    fn test_full_chart_part_is_well_formed() {
        let mut ids = AxisIdAllocator::sequential();
        let mut chart = Chart::new(
            ScatterChart::new(&mut ids)
                .unwrap()
                .with_axis_titles("Height (cm)", "Weight (kg)"),
        )
        .with_title("Growth");
        chart.kind_mut().add_series(
            ScatterSeries::from_refs("Data!$A$2:$A$5", "Data!$B$2:$B$5").with_title("Cohort A"),
        );

        let xml = chart.to_xml_string();
        let mut reader = Reader::from_str(&xml);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {},
                Err(e) => panic!("malformed chart xml: {e}"),
            }
        }
        let plot_area = xml.find("<c:plotArea>").unwrap();
        assert!(xml[plot_area..].starts_with("<c:plotArea><c:layout/><c:scatterChart>"));
        assert!(xml.contains("</c:valAx></c:plotArea>"));
    }
}
