//! Sheetdraw - object model and XML writer for spreadsheet drawings
//!
//! This library builds the drawing part of a worksheet in an OOXML
//! (Office Open XML) spreadsheet package: one-cell anchors that pin a
//! picture or a chart frame to a cell, and the scatter chart parts those
//! frames reference.
//!
//! # Features
//!
//! - **One-cell anchors**: cell marker, pixel size converted to EMUs, and the
//!   hosted object written in the fixed DrawingML order
//! - **Drawing collection**: stable anchor handles whose document index is
//!   recomputed on every write
//! - **Scatter charts**: `c:scatterChart` bodies with crossing value axes
//!   inside a shared chart envelope
//! - **Axis identifiers**: allocated per document, never duplicated
//! - **Validated configuration**: typed, serde-deserializable options;
//!   invalid values are rejected before anything is mutated
//!
//! # Example - An anchored picture
//!
//! ```
//! use sheetdraw::ooxml::drawings::{AnchorOptions, Drawing};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut drawing = Drawing::new();
//! let logo = drawing.add_image(
//!     AnchorOptions::new()
//!         .with_start_at(1, 2)
//!         .with_size(200, 100)
//!         .with_name("Logo")
//!         .with_image_src("logo.png"),
//! )?;
//!
//! assert_eq!(drawing.index_of(logo)?, 0);
//! let extent = drawing.anchor(logo).map(|anchor| anchor.extent());
//! assert_eq!(extent, Some((1_905_000, 952_500)));
//!
//! let xml = drawing.to_xml_string()?;
//! assert!(xml.contains("<xdr:oneCellAnchor>"));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - A scatter chart in a frame
//!
//! ```
//! use sheetdraw::common::AxisIdAllocator;
//! use sheetdraw::ooxml::charts::{Chart, ChartOptions, ScatterSeries};
//! use sheetdraw::ooxml::drawings::{AnchorOptions, Drawing};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut ids = AxisIdAllocator::sequential();
//! let mut chart = Chart::scatter(&mut ids, &ChartOptions::new().with_title("Trend"))?;
//! chart
//!     .kind_mut()
//!     .add_series(ScatterSeries::from_refs("Sheet1!$A$2:$A$9", "Sheet1!$B$2:$B$9"));
//!
//! let mut drawing = Drawing::new();
//! drawing.add_chart_frame(AnchorOptions::new().with_size(480, 288).with_name("Chart 1"))?;
//!
//! let chart_xml = chart.to_xml_string();
//! let drawing_xml = drawing.to_xml_string()?;
//! assert!(chart_xml.contains(r#"<c:axId val="1"/><c:axId val="2"/>"#));
//! assert!(drawing_xml.contains(r#"<c:chart xmlns:c="#));
//! # Ok(())
//! # }
//! ```

/// Unit conversion, validation, identifiers and XML helpers
pub mod common;

/// OOXML drawing and chart parts
///
/// The `drawings` module writes the worksheet drawing part; the `charts`
/// module writes the chart parts its graphic frames reference.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::AxisIdAllocator;
pub use ooxml::charts::{Chart, ChartOptions, ScatterChart, ScatterSeries};
pub use ooxml::drawings::{AnchorId, AnchorOptions, Drawing, OneCellAnchor};
pub use ooxml::error::{OoxmlError, Result};
