//! Chart XML writer.
//!
//! Element writers shared by the chart envelope and the scatter chart body.
//! Each function writes one schema element in its fixed child order.

use crate::common::xml::{
    XsdDouble, escape_xml, write_bool_val, write_double_val, write_int_val, write_token_val,
};
use crate::ooxml::charts::axis::ValueAxis;
use crate::ooxml::charts::legend::Legend;
use crate::ooxml::charts::models::{NumericData, TitleText};
use crate::ooxml::charts::series::ScatterSeries;
use std::io::{self, Write};

pub(crate) fn write_title<W: Write>(writer: &mut W, title: &TitleText) -> io::Result<()> {
    write!(writer, "<c:title>")?;

    match title {
        TitleText::Literal(text) => {
            write!(writer, "<c:tx><c:rich>")?;
            write!(writer, "<a:bodyPr/><a:lstStyle/>")?;
            write!(writer, "<a:p><a:pPr><a:defRPr/></a:pPr>")?;
            write!(
                writer,
                r#"<a:r><a:rPr lang="en-US"/><a:t>{}</a:t></a:r>"#,
                escape_xml(text)
            )?;
            write!(writer, "</a:p></c:rich></c:tx>")?;
        },
        TitleText::Reference(source_ref) => {
            write!(writer, "<c:tx><c:strRef>")?;
            write!(writer, "<c:f>{}</c:f>", escape_xml(&source_ref.formula))?;
            write!(writer, "</c:strRef></c:tx>")?;
        },
    }

    write_bool_val(writer, "c:overlay", false)?;
    write!(writer, "</c:title>")?;

    Ok(())
}

pub(crate) fn write_scatter_series<W: Write>(
    writer: &mut W,
    series: &ScatterSeries,
) -> io::Result<()> {
    write!(writer, "<c:ser>")?;
    write_int_val(writer, "c:idx", series.index)?;
    write_int_val(writer, "c:order", series.order)?;

    if let Some(title) = &series.title {
        write!(writer, "<c:tx>")?;
        match title {
            TitleText::Literal(text) => {
                write!(writer, "<c:v>{}</c:v>", escape_xml(text))?;
            },
            TitleText::Reference(source_ref) => {
                write!(writer, "<c:strRef>")?;
                write!(writer, "<c:f>{}</c:f>", escape_xml(&source_ref.formula))?;
                write!(writer, "</c:strRef>")?;
            },
        }
        write!(writer, "</c:tx>")?;
    }

    if let Some(ref x_values) = series.x_values {
        write_numeric_data_ref(writer, "c:xVal", x_values)?;
    }

    if let Some(ref y_values) = series.y_values {
        write_numeric_data_ref(writer, "c:yVal", y_values)?;
    }

    if let Some(smooth) = series.smooth {
        write_bool_val(writer, "c:smooth", smooth)?;
    }

    write!(writer, "</c:ser>")?;

    Ok(())
}

fn write_numeric_points<W: Write>(writer: &mut W, data: &NumericData) -> io::Result<()> {
    write!(
        writer,
        r#"<c:formatCode>{}</c:formatCode>"#,
        escape_xml(data.format_code.as_deref().unwrap_or("General"))
    )?;
    write_int_val(writer, "c:ptCount", data.values.len())?;
    for (i, val) in data.values.iter().enumerate() {
        write!(writer, r#"<c:pt idx="{}"><c:v>{}</c:v></c:pt>"#, i, XsdDouble(*val))?;
    }
    Ok(())
}

fn write_numeric_data_ref<W: Write>(
    writer: &mut W,
    tag: &str,
    data: &NumericData,
) -> io::Result<()> {
    write!(writer, "<{}>", tag)?;

    if let Some(ref source_ref) = data.source_ref {
        write!(writer, "<c:numRef>")?;
        write!(writer, "<c:f>{}</c:f>", escape_xml(&source_ref.formula))?;

        if !data.values.is_empty() {
            write!(writer, "<c:numCache>")?;
            write_numeric_points(writer, data)?;
            write!(writer, "</c:numCache>")?;
        }

        write!(writer, "</c:numRef>")?;
    } else if !data.values.is_empty() {
        write!(writer, "<c:numLit>")?;
        write_numeric_points(writer, data)?;
        write!(writer, "</c:numLit>")?;
    }

    write!(writer, "</{}>", tag)?;

    Ok(())
}

/// Write a `c:dLbls` block with every label kind switched off.
pub(crate) fn write_data_labels_default<W: Write>(writer: &mut W) -> io::Result<()> {
    write!(writer, "<c:dLbls>")?;
    write_bool_val(writer, "c:showLegendKey", false)?;
    write_bool_val(writer, "c:showVal", false)?;
    write_bool_val(writer, "c:showCatName", false)?;
    write_bool_val(writer, "c:showSerName", false)?;
    write_bool_val(writer, "c:showPercent", false)?;
    write_bool_val(writer, "c:showBubbleSize", false)?;
    write!(writer, "</c:dLbls>")?;
    Ok(())
}

pub(crate) fn write_value_axis<W: Write>(writer: &mut W, axis: &ValueAxis) -> io::Result<()> {
    let common = &axis.common;
    write!(writer, "<c:valAx>")?;
    write_int_val(writer, "c:axId", common.axis_id())?;

    write!(writer, "<c:scaling>")?;
    write_token_val(writer, "c:orientation", common.orientation.xml_value())?;
    if let Some(max) = axis.max {
        write_double_val(writer, "c:max", max)?;
    }
    if let Some(min) = axis.min {
        write_double_val(writer, "c:min", min)?;
    }
    write!(writer, "</c:scaling>")?;

    write_bool_val(writer, "c:delete", common.deleted)?;
    write_token_val(writer, "c:axPos", common.position.xml_value())?;

    if common.show_major_gridlines {
        write!(writer, "<c:majorGridlines/>")?;
    }

    if common.show_minor_gridlines {
        write!(writer, "<c:minorGridlines/>")?;
    }

    if let Some(ref title) = common.title {
        write_title(writer, title)?;
    }

    write_token_val(writer, "c:majorTickMark", common.major_tick_mark.xml_value())?;
    write_token_val(writer, "c:minorTickMark", common.minor_tick_mark.xml_value())?;
    write_token_val(writer, "c:tickLblPos", common.tick_label_position.xml_value())?;

    write_int_val(writer, "c:crossAx", common.cross_axis_id())?;

    if let Some(crosses_at) = common.crosses_at {
        write_double_val(writer, "c:crossesAt", crosses_at)?;
    } else {
        write_token_val(writer, "c:crosses", common.cross_mode.xml_value())?;
    }

    write_token_val(writer, "c:crossBetween", axis.cross_between.xml_value())?;

    if let Some(major_unit) = axis.major_unit {
        write_double_val(writer, "c:majorUnit", major_unit)?;
    }
    if let Some(minor_unit) = axis.minor_unit {
        write_double_val(writer, "c:minorUnit", minor_unit)?;
    }

    write!(writer, "</c:valAx>")?;
    Ok(())
}

pub(crate) fn write_legend<W: Write>(writer: &mut W, legend: &Legend) -> io::Result<()> {
    write!(writer, "<c:legend>")?;
    write_token_val(writer, "c:legendPos", legend.position.xml_value())?;
    write_bool_val(writer, "c:overlay", legend.overlay)?;
    write!(writer, "</c:legend>")?;
    Ok(())
}
