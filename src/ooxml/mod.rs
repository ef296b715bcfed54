//! Office Open XML drawing and chart parts.
//!
//! - `drawings`: the worksheet drawing part (`xdr:wsDr`) and its one-cell anchors
//! - `charts`: chart parts referenced from graphic frames
//! - `error`: the error type shared by both
pub mod charts;
pub mod drawings;
pub mod error;

pub use error::{OoxmlError, Result};
