//! Small helpers for writing `val`-style elements.
//!
//! DrawingML chart markup is mostly empty elements carrying a single `val`
//! attribute. Integers are always written as plain decimal text; doubles use
//! the `xsd:double` lexical form.

use std::fmt;
use std::io::{self, Write};

/// Displays an `f64` in `xsd:double` form: `INF`, `-INF` and `NaN` for the
/// non-finite values, shortest round-trip decimal text otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XsdDouble(pub f64);

impl fmt::Display for XsdDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            f.write_str("NaN")
        } else if value == f64::INFINITY {
            f.write_str("INF")
        } else if value == f64::NEG_INFINITY {
            f.write_str("-INF")
        } else {
            write!(f, "{}", value)
        }
    }
}

/// Write `<{tag} val="{value}"/>` for an integer value.
#[inline]
pub fn write_int_val<W: Write, I: itoa::Integer>(
    writer: &mut W,
    tag: &str,
    value: I,
) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    write!(writer, r#"<{} val="{}"/>"#, tag, buf.format(value))
}

/// Write `<{tag} val="{value}"/>` for a double value.
#[inline]
pub fn write_double_val<W: Write>(writer: &mut W, tag: &str, value: f64) -> io::Result<()> {
    write!(writer, r#"<{} val="{}"/>"#, tag, XsdDouble(value))
}

/// Write `<{tag} val="1"/>` or `<{tag} val="0"/>`.
#[inline]
pub fn write_bool_val<W: Write>(writer: &mut W, tag: &str, value: bool) -> io::Result<()> {
    write!(writer, r#"<{} val="{}"/>"#, tag, if value { "1" } else { "0" })
}

/// Write `<{tag} val="{value}"/>` for a token that needs no escaping.
#[inline]
pub fn write_token_val<W: Write>(writer: &mut W, tag: &str, value: &str) -> io::Result<()> {
    write!(writer, r#"<{} val="{}"/>"#, tag, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_int_val() {
        let mut out = Vec::new();
        write_int_val(&mut out, "c:axId", 16_777_215u32).unwrap();
        assert_eq!(out, br#"<c:axId val="16777215"/>"#);
    }

    #[test]
    fn test_xsd_double_forms() {
        assert_eq!(XsdDouble(2.5).to_string(), "2.5");
        assert_eq!(XsdDouble(10.0).to_string(), "10");
        assert_eq!(XsdDouble(-0.125).to_string(), "-0.125");
        assert_eq!(XsdDouble(f64::INFINITY).to_string(), "INF");
        assert_eq!(XsdDouble(f64::NEG_INFINITY).to_string(), "-INF");
        assert_eq!(XsdDouble(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_write_double_val() {
        let mut out = Vec::new();
        write_double_val(&mut out, "c:max", f64::INFINITY).unwrap();
        write_double_val(&mut out, "c:min", 0.5).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"<c:max val="INF"/><c:min val="0.5"/>"#
        );
    }

    #[test]
    fn test_write_bool_val() {
        let mut out = Vec::new();
        write_bool_val(&mut out, "c:varyColors", true).unwrap();
        write_bool_val(&mut out, "c:showVal", false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"<c:varyColors val="1"/><c:showVal val="0"/>"#
        );
    }
}
