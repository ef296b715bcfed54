//! Chart parts for spreadsheet drawings.
//!
//! A chart part is a [`Chart`] envelope (title, legend, display options)
//! around one [`ChartKind`]. The scatter chart is the supported kind; its
//! two value axes take their identifiers from a document-wide
//! [`AxisIdAllocator`](crate::common::id::AxisIdAllocator).
//!
//! # Example
//!
//! ```rust
//! use sheetdraw::common::id::AxisIdAllocator;
//! use sheetdraw::ooxml::charts::{Chart, ChartOptions, ScatterSeries};
//!
//! let mut ids = AxisIdAllocator::sequential();
//! let options = ChartOptions::new()
//!     .with_title("Sales vs. spend")
//!     .with_scatter_style("marker")
//!     .with_legend("b");
//!
//! let mut chart = Chart::scatter(&mut ids, &options)?;
//! chart
//!     .kind_mut()
//!     .add_series(ScatterSeries::from_refs("Sheet1!$A$2:$A$20", "Sheet1!$B$2:$B$20"));
//!
//! let xml = chart.to_xml_string();
//! assert!(xml.contains("<c:scatterChart>"));
//! # Ok::<(), sheetdraw::ooxml::error::OoxmlError>(())
//! ```

pub mod axis;
pub mod chart;
pub mod legend;
pub mod models;
pub mod scatter;
pub mod series;
pub mod types;
pub(crate) mod writer;

pub use axis::{AxisCommon, AxisCrossBetween, AxisCrossMode, ValueAxis};
pub use chart::{Chart, ChartKind, ChartOptions};
pub use legend::Legend;
pub use models::{DataSourceRef, NumericData, TitleText};
pub use scatter::ScatterChart;
pub use series::ScatterSeries;
pub use types::{
    AxisOrientation, AxisPosition, DisplayBlanks, LegendPosition, ScatterStyle, TickLabelPosition,
    TickMark,
};
