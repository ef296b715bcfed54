//! DrawingML (DML) support for spreadsheet drawings.
//!
//! A worksheet's drawing part holds anchors; each anchor positions one
//! graphical object (a picture or a chart frame) relative to a cell.

pub mod anchor;
pub mod blip;
pub mod drawing;
pub mod graphic_frame;
pub mod marker;
pub mod pic;
pub mod xfrm;

pub use anchor::{AnchorId, AnchorOptions, AnchoredObject, OneCellAnchor};
pub use drawing::Drawing;
pub use graphic_frame::GraphicFrame;
pub use marker::Marker;
pub use pic::{ImageFormat, Pic};
