//! XML text helpers.

pub mod escape;
pub mod writer;

pub use escape::escape_xml;
pub use writer::{XsdDouble, write_bool_val, write_double_val, write_int_val, write_token_val};
