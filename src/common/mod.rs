//! Common utilities shared by the drawing and chart writers.

pub mod id;
pub mod unit;
pub mod validate;
pub mod xml;

pub use id::AxisIdAllocator;
pub use validate::XmlToken;
